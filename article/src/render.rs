use pulldown_cmark::{Options, Parser as CmarkParser, html};

/// Render Markdown to an HTML fragment for previews.
pub fn render_html(markdown: &str) -> String {
    let options = Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES;
    let parser = CmarkParser::new_ext(markdown, options);
    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}
