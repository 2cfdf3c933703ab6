use tracing::debug;

/// Characters that end a sentence when followed by a space or newline.
const TERMINATORS: [char; 3] = ['.', '!', '?'];
const TERMINATOR_GAPS: [char; 2] = [' ', '\n'];

/// Result of splitting one oversized block.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Split {
    pub paragraphs: Vec<String>,
    /// Number of cuts made exactly at the threshold, possibly mid-word.
    pub forced: usize,
}

impl Split {
    /// Number of cuts made (paragraphs minus one).
    pub fn cuts(&self) -> usize {
        self.paragraphs.len().saturating_sub(1)
    }

    pub fn join(&self) -> String {
        self.paragraphs.join("\n\n")
    }
}

/// Break text longer than `max_chars` into paragraphs at sentence ends.
///
/// Uses the standard floor of 100 characters; see [`split_paragraphs`].
///
/// ```
/// let text = format!("{}. {}", "a".repeat(419), "b".repeat(179));
/// let out = reflow::split_massive_block(&text, 450);
/// assert_eq!(out, format!("{}.\n\n{}", "a".repeat(419), "b".repeat(179)));
/// ```
pub fn split_massive_block(text: &str, max_chars: usize) -> String {
    split_paragraphs(text, max_chars, 100).join()
}

/// Split `text` into paragraphs of at most `max_chars` characters.
///
/// Text no longer than `max_chars` comes back untouched as a single
/// paragraph. Otherwise each cut goes just after the last `.`, `!` or `?`
/// followed by a space or newline starting at or before `max_chars`; failing
/// that, at the last space; failing that, or when the cut would land before
/// `min_chars`, exactly at `max_chars`. Both sides of a cut are trimmed and
/// the remainder is split again until it fits.
///
/// All positions are character offsets. Zero thresholds are raised to one so
/// every cut consumes at least one character.
pub fn split_paragraphs(text: &str, max_chars: usize, min_chars: usize) -> Split {
    let max_chars = max_chars.max(1);
    let min_chars = min_chars.max(1);
    let mut split = Split::default();
    let mut rest = text;

    loop {
        // Enough lookahead to see a terminator pair starting at `max_chars`.
        let window: Vec<char> = rest.chars().take(max_chars + 2).collect();
        if window.len() <= max_chars {
            split.paragraphs.push(rest.to_string());
            break;
        }

        let cut = match find_cut(&window, max_chars) {
            Some(cut) if cut >= min_chars => cut,
            found => {
                debug!(
                    rejected = ?found,
                    at = max_chars,
                    "no usable sentence end or space; forcing split"
                );
                split.forced += 1;
                max_chars
            }
        };

        let byte = byte_offset(rest, cut);
        split.paragraphs.push(rest[..byte].trim().to_string());
        rest = rest[byte..].trim();
        if rest.is_empty() {
            break;
        }
    }

    split
}

/// Latest sentence end at or before `limit`, else the latest space.
fn find_cut(window: &[char], limit: usize) -> Option<usize> {
    let last_start = limit.min(window.len().saturating_sub(2));
    let sentence_end = (0..=last_start).rev().find(|&i| {
        TERMINATORS.contains(&window[i])
            && window.get(i + 1).is_some_and(|c| TERMINATOR_GAPS.contains(c))
    });
    if let Some(i) = sentence_end {
        return Some(i + 1);
    }

    let last = limit.min(window.len() - 1);
    (0..=last).rev().find(|&i| window[i] == ' ')
}

fn byte_offset(text: &str, char_index: usize) -> usize {
    text.char_indices()
        .nth(char_index)
        .map_or(text.len(), |(byte, _)| byte)
}
