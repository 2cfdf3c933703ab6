use reflow::{ReflowReport, Reflower};

use crate::outline::{Outline, outline};
use crate::render::render_html;
use crate::stats::{excerpt, reading_time_minutes, word_count};

/// Everything an article page or editor preview derives from a stored body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleView {
    /// The reflowed body.
    pub markdown: String,
    pub html: String,
    pub outline: Outline,
    pub report: ReflowReport,
    /// Counted on the raw body, before reflow.
    pub word_count: usize,
    pub reading_minutes: usize,
    /// Taken from the raw body, before reflow.
    pub excerpt: String,
}

impl ArticleView {
    /// Reflow `body` once and derive the rest from the result.
    pub fn build(body: &str, reflower: &Reflower) -> Self {
        let reflowed = reflower.reflow(body);
        let markdown = reflowed.markdown();
        ArticleView {
            html: render_html(&markdown),
            outline: outline(&markdown),
            report: reflowed.report,
            word_count: word_count(body),
            reading_minutes: reading_time_minutes(body),
            excerpt: excerpt(body),
            markdown,
        }
    }
}
