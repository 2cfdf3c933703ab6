use serde::Deserialize;

use crate::error::{Error, Result};

/// Longest label the heading pattern may be compiled for.
pub const MAX_LABEL_LIMIT: usize = 200;

/// Tunable thresholds for a reflow.
///
/// The defaults reproduce the Atlas article formatter exactly. Every field may
/// be omitted from a TOML table; missing fields keep their default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReflowOptions {
    /// A line this long (in characters) followed by a single newline is
    /// treated as a paragraph of its own.
    pub paragraph_line_chars: usize,
    /// Blocks longer than this are split into several paragraphs.
    pub max_block_chars: usize,
    /// Sentence or space split points before this index are rejected in
    /// favour of a forced split at `max_block_chars`.
    pub min_split_chars: usize,
    /// Upper bound of the `{1,N}` repetition in the label pattern.
    pub max_label_chars: usize,
    /// Level of promoted headings (number of `#`).
    pub heading_level: u8,
}

impl Default for ReflowOptions {
    fn default() -> Self {
        ReflowOptions {
            paragraph_line_chars: 60,
            max_block_chars: 450,
            min_split_chars: 100,
            max_label_chars: 40,
            heading_level: 3,
        }
    }
}

impl ReflowOptions {
    /// Parse options from a TOML document and validate them.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let options: ReflowOptions = toml::from_str(source)?;
        options.validate()?;
        Ok(options)
    }

    /// Reject values that could stall the splitter or emit broken headings.
    pub fn validate(&self) -> Result<()> {
        if self.max_block_chars == 0 {
            return Err(Error::invalid("max_block_chars", "must be at least 1"));
        }
        if self.min_split_chars == 0 {
            // A zero floor would accept a split at index 0 and never advance.
            return Err(Error::invalid("min_split_chars", "must be at least 1"));
        }
        if self.max_label_chars == 0 || self.max_label_chars > MAX_LABEL_LIMIT {
            return Err(Error::invalid(
                "max_label_chars",
                format!("must be between 1 and {}", MAX_LABEL_LIMIT),
            ));
        }
        if !(1..=6).contains(&self.heading_level) {
            return Err(Error::invalid(
                "heading_level",
                format!("Markdown has heading levels 1-6, got {}", self.heading_level),
            ));
        }
        Ok(())
    }
}
