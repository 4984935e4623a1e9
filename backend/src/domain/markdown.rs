//! Markdown to HTML conversion.

use pulldown_cmark::{Options, Parser, html::push_html};

/// Render markdown source to an HTML fragment.
///
/// CommonMark plus tables and strikethrough. Raw HTML in the source passes
/// through unchanged, so only signed-in users can author documents.
///
/// # Examples
/// ```
/// use cms::domain::render_markdown;
///
/// assert_eq!(render_markdown("# Title"), "<h1>Title</h1>\n");
/// ```
#[must_use]
pub fn render_markdown(source: &str) -> String {
    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH;
    let parser = Parser::new_ext(source, options);
    let mut html = String::with_capacity(source.len() * 3 / 2);
    push_html(&mut html, parser);
    html
}
