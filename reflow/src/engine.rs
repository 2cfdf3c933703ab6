use tracing::{debug, trace};

use crate::block::heading::HeadingPattern;
use crate::block::segment_blocks;
use crate::document::{Document, DocumentNode};
use crate::error::Result;
use crate::normalize::normalize;
use crate::options::ReflowOptions;
use crate::split::split_paragraphs;

/// What a reflow changed, for previews and `--explain` output.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReflowReport {
    /// Non-empty blocks after normalization.
    pub blocks: usize,
    /// Single newlines doubled because the preceding line was long.
    pub paragraph_breaks: usize,
    /// Labels promoted to headings, in order.
    pub promoted: Vec<String>,
    /// Blocks (or heading remainders) that exceeded the size threshold.
    pub split_blocks: usize,
    /// Cuts made exactly at the threshold.
    pub forced_splits: usize,
}

impl ReflowReport {
    pub fn is_unchanged(&self) -> bool {
        self.paragraph_breaks == 0 && self.promoted.is_empty() && self.split_blocks == 0
    }
}

/// A reflow result: the structured document plus its report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reflowed {
    pub document: Document,
    pub report: ReflowReport,
}

impl Reflowed {
    pub fn markdown(&self) -> String {
        self.document.to_string()
    }
}

/// A configured reflow engine.
///
/// Holds the validated options and the heading pattern compiled for them.
/// Cheap to share across threads; every call is independent.
#[derive(Debug, Clone)]
pub struct Reflower {
    options: ReflowOptions,
    heading: HeadingPattern,
}

impl Default for Reflower {
    fn default() -> Self {
        Reflower {
            options: ReflowOptions::default(),
            heading: HeadingPattern::standard().clone(),
        }
    }
}

impl Reflower {
    pub fn new(options: ReflowOptions) -> Result<Self> {
        options.validate()?;
        let heading = if options.max_label_chars == ReflowOptions::default().max_label_chars {
            HeadingPattern::standard().clone()
        } else {
            HeadingPattern::new(options.max_label_chars)?
        };
        Ok(Reflower { options, heading })
    }

    pub fn options(&self) -> &ReflowOptions {
        &self.options
    }

    /// Reflow `text` and render it back to Markdown.
    pub fn format(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }
        self.reflow(text).markdown()
    }

    /// Reflow `text` into a [`Document`], recording what changed.
    pub fn reflow(&self, text: &str) -> Reflowed {
        let mut report = ReflowReport::default();
        let mut document = Document::empty();
        if text.is_empty() {
            return Reflowed { document, report };
        }

        let (normalized, paragraph_breaks) = normalize(text, self.options.paragraph_line_chars);
        report.paragraph_breaks = paragraph_breaks;

        for block in segment_blocks(&normalized) {
            report.blocks += 1;
            let body = match self.heading.matches(block.text) {
                Some(candidate) => {
                    trace!(block = block.index, label = candidate.label, "promoting heading");
                    report.promoted.push(candidate.label.to_string());
                    document.nodes.push(DocumentNode::Heading {
                        level: self.options.heading_level,
                        text: candidate.label.to_string(),
                    });
                    candidate.remainder
                }
                None => block.text,
            };

            let split = split_paragraphs(
                body,
                self.options.max_block_chars,
                self.options.min_split_chars,
            );
            if split.cuts() > 0 {
                report.split_blocks += 1;
                report.forced_splits += split.forced;
            }
            document
                .nodes
                .extend(split.paragraphs.into_iter().map(DocumentNode::Paragraph));
        }

        debug!(
            blocks = report.blocks,
            paragraph_breaks = report.paragraph_breaks,
            headings = report.promoted.len(),
            split_blocks = report.split_blocks,
            forced_splits = report.forced_splits,
            "reflowed text"
        );

        Reflowed { document, report }
    }
}
