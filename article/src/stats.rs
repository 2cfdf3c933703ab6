use crate::outline::strip_markup;

pub const WORDS_PER_MINUTE: usize = 200;

/// Characters of body text kept for a listing or meta description.
pub const EXCERPT_CHARS: usize = 160;

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Estimated reading time, rounded up, never below one minute.
pub fn reading_time_minutes(text: &str) -> usize {
    word_count(text).div_ceil(WORDS_PER_MINUTE).max(1)
}

/// The first [`EXCERPT_CHARS`] characters of `text` with markup characters removed.
///
/// The cut happens before stripping, so an excerpt may be shorter than the
/// limit and may end mid-word.
pub fn excerpt(text: &str) -> String {
    let head: String = text.chars().take(EXCERPT_CHARS).collect();
    strip_markup(&head)
}
