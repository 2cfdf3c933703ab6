// The default pattern is a compile-time constant.
#![allow(clippy::unwrap_used)]

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

static DEFAULT_PATTERN: LazyLock<HeadingPattern> = LazyLock::new(|| HeadingPattern::new(40).unwrap());

/// A `Label: remainder` block that will become a heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadingCandidate<'a> {
    /// Everything before the first colon, verbatim.
    pub label: &'a str,
    /// Everything after the colon and the whitespace that follows it.
    pub remainder: &'a str,
}

/// Compiled matcher for heading candidates.
///
/// The label must not start with `#` or whitespace, is one leading character
/// plus `1..=max_label_chars` non-colon characters, and must be followed by a
/// colon and at least one whitespace character. The remainder may span
/// several lines.
#[derive(Debug, Clone)]
pub struct HeadingPattern {
    regex: Regex,
}

impl HeadingPattern {
    pub fn new(max_label_chars: usize) -> Result<Self> {
        let pattern = format!(r"^([^#\s][^:]{{1,{}}}):\s+([\s\S]*)$", max_label_chars);
        let regex =
            Regex::new(&pattern).map_err(|e| Error::invalid("max_label_chars", e.to_string()))?;
        Ok(HeadingPattern { regex })
    }

    /// Pattern with the standard 40-character label bound.
    pub fn standard() -> &'static HeadingPattern {
        &DEFAULT_PATTERN
    }

    pub fn matches<'a>(&self, block: &'a str) -> Option<HeadingCandidate<'a>> {
        let caps = self.regex.captures(block)?;
        Some(HeadingCandidate {
            label: caps.get(1)?.as_str(),
            remainder: caps.get(2)?.as_str(),
        })
    }
}

/// Match a trimmed block against the standard heading pattern.
///
/// ```
/// let candidate = reflow::promote_heading("Risk: This is dangerous.").unwrap();
/// assert_eq!(candidate.label, "Risk");
/// assert_eq!(candidate.remainder, "This is dangerous.");
/// assert!(reflow::promote_heading("# Risk: already a heading").is_none());
/// ```
pub fn promote_heading(block: &str) -> Option<HeadingCandidate<'_>> {
    HeadingPattern::standard().matches(block)
}
