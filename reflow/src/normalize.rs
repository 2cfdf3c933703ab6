use std::borrow::Cow;

/// Turn single newlines after long lines into paragraph breaks.
///
/// Every pair of adjacent non-empty lines joined by one `\n` is inspected
/// once, against the lines as they appear in `text`. When the first line has
/// at least `paragraph_line_chars` characters the newline is doubled; shorter
/// lines (list items, verse, addresses) keep their single newline.
///
/// ```
/// let text = format!("{}\nnext", "x".repeat(60));
/// assert_eq!(reflow::normalize_newlines(&text, 60), format!("{}\n\nnext", "x".repeat(60)));
/// assert_eq!(reflow::normalize_newlines("- a\n- b", 60), "- a\n- b");
/// ```
pub fn normalize_newlines(text: &str, paragraph_line_chars: usize) -> Cow<'_, str> {
    normalize(text, paragraph_line_chars).0
}

/// Same as [`normalize_newlines`], also returning how many breaks were inserted.
pub(crate) fn normalize(text: &str, paragraph_line_chars: usize) -> (Cow<'_, str>, usize) {
    let mut out = String::with_capacity(text.len());
    let mut inserted = 0;

    let mut lines = text.split('\n').peekable();
    while let Some(line) = lines.next() {
        out.push_str(line);
        let Some(next) = lines.peek() else {
            break;
        };
        out.push('\n');
        if !line.is_empty() && !next.is_empty() && has_at_least_chars(line, paragraph_line_chars) {
            out.push('\n');
            inserted += 1;
        }
    }

    if inserted == 0 {
        (Cow::Borrowed(text), 0)
    } else {
        (Cow::Owned(out), inserted)
    }
}

fn has_at_least_chars(s: &str, n: usize) -> bool {
    s.chars().take(n).count() == n
}
