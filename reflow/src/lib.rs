//! Prose reflow for Atlas articles.
//!
//! Turns loosely structured prose into Markdown ready for a renderer:
//! long lines become paragraphs, short `Label: text` prefixes become
//! headings and oversized paragraphs are split at sentence ends.

pub mod block;
pub mod document;
pub mod engine;
pub mod error;
pub mod normalize;
pub mod options;
pub mod split;

pub use block::heading::{HeadingCandidate, HeadingPattern, promote_heading};
pub use block::{Block, segment_blocks};
pub use document::{Document, DocumentNode};
pub use engine::{ReflowReport, Reflowed, Reflower};
pub use error::{Error, Result};
pub use normalize::normalize_newlines;
pub use options::ReflowOptions;
pub use split::{Split, split_massive_block, split_paragraphs};

/// Reflow `text` with the standard thresholds.
///
/// ```
/// assert_eq!(reflow::format_body("Risk: This is dangerous."), "### Risk\n\nThis is dangerous.");
/// assert_eq!(reflow::format_body(""), "");
/// ```
pub fn format_body(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    Reflower::default().format(text)
}
