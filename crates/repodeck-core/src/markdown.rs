//! Markdown rendering for README content and insight-card bodies.
//!
//! READMEs and insights arrive from the backend unsanitized. The HTML this
//! module emits is injected into the page verbatim, so raw HTML embedded in
//! the markdown is escaped rather than passed through: the injection surface
//! is limited to markup pulldown-cmark itself generates.

use pulldown_cmark::{html, Event, Options, Parser};

/// Render markdown to HTML with embedded raw HTML escaped.
pub fn to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markdown, options).map(|event| match event {
        // Re-emit raw HTML as text so it renders inert
        Event::Html(raw) => Event::Text(raw),
        Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}
