//! Article presentation helpers built on top of [`reflow`].
//!
//! Everything the article page and the editor preview compute from a stored
//! body: outline, reading statistics, excerpt and an HTML rendering.

pub mod outline;
pub mod render;
pub mod stats;
pub mod view;

pub use outline::{Outline, OutlineEntry, outline, slugify};
pub use render::render_html;
pub use stats::{excerpt, reading_time_minutes, word_count};
pub use view::ArticleView;
