pub mod heading;

/// A paragraph-like unit of text delimited by blank lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block<'a> {
    /// The block content with surrounding whitespace removed. Never empty.
    pub text: &'a str,
    /// Position of the block among the non-empty blocks of its input.
    pub index: usize,
}

impl<'a> Block<'a> {
    /// Length in characters (Unicode scalar values), not bytes.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Split normalized text on blank-line separators.
///
/// Blocks are trimmed and empty ones are dropped, so runs of three or more
/// newlines never yield phantom paragraphs.
pub fn segment_blocks(text: &str) -> Vec<Block<'_>> {
    text.split("\n\n")
        .map(str::trim)
        .filter(|b| !b.is_empty())
        .enumerate()
        .map(|(index, text)| Block { text, index })
        .collect()
}
