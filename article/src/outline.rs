use std::ops::RangeInclusive;

use pulldown_cmark::{Event, HeadingLevel, Options, Parser as CmarkParser, Tag, TagEnd};

/// Heading levels that appear in an article outline.
pub const OUTLINE_LEVELS: RangeInclusive<u8> = 2..=4;

/// An outline with fewer entries than this is not worth navigating.
pub const MIN_NAVIGABLE_ENTRIES: usize = 2;

/// One heading in an article outline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineEntry {
    /// Anchor id derived from the text, see [`slugify`].
    pub id: String,
    pub text: String,
    pub level: u8,
}

/// The table of contents of an article.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Outline {
    pub entries: Vec<OutlineEntry>,
}

impl Outline {
    pub fn is_navigable(&self) -> bool {
        self.entries.len() >= MIN_NAVIGABLE_ENTRIES
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Collect level 2-4 headings from Markdown, in document order.
///
/// Headings inside code blocks are ignored since the text is parsed as
/// CommonMark rather than scanned line by line.
pub fn outline(markdown: &str) -> Outline {
    let options = Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES;
    let events: Vec<Event<'_>> = CmarkParser::new_ext(markdown, options).collect();

    let mut entries = Vec::new();
    let mut i = 0;
    while i < events.len() {
        if let Event::Start(Tag::Heading { level, .. }) = &events[i] {
            let level = heading_level_to_u8(level);
            i += 1;
            let raw = collect_heading_text(&events, &mut i);
            if OUTLINE_LEVELS.contains(&level) {
                let text = strip_markup(&raw);
                entries.push(OutlineEntry {
                    id: slugify(&text),
                    text,
                    level,
                });
            }
            continue;
        }
        i += 1;
    }

    Outline { entries }
}

/// Lowercase ASCII slug: runs of anything but `a-z0-9` become one `-`.
///
/// ```
/// assert_eq!(article::slugify("Risk & Reward (2024)"), "risk-reward-2024");
/// assert_eq!(article::slugify("Café"), "caf");
/// ```
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;
    for c in text.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
    }
    slug
}

/// Remove inline markup characters (`#`, `*`, backticks) and trim.
pub fn strip_markup(text: &str) -> String {
    text.chars()
        .filter(|c| !matches!(c, '#' | '*' | '`'))
        .collect::<String>()
        .trim()
        .to_string()
}

fn heading_level_to_u8(level: &HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

/// Collect heading text (all Text and Code events until End(Heading)).
fn collect_heading_text(events: &[Event<'_>], i: &mut usize) -> String {
    let mut text = String::new();
    while *i < events.len() {
        match &events[*i] {
            Event::End(TagEnd::Heading(_)) => {
                *i += 1;
                break;
            }
            Event::Text(s) | Event::Code(s) => text.push_str(s),
            Event::SoftBreak | Event::HardBreak => text.push(' '),
            _ => {}
        }
        *i += 1;
    }
    text
}
