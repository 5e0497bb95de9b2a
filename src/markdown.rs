//! Markdown rendering and excerpt extraction.
//!
//! Post and page bodies are Markdown, rendered to HTML with pulldown-cmark.
//! Listings and the feed need a short plain-text summary when a post has no
//! explicit `description`, so this module also derives an excerpt: the
//! body's text content pruned to a character budget on a word boundary, with
//! an ellipsis appended when anything was cut.

use pulldown_cmark::{Event, Parser, html};

/// Character budget for generated excerpts.
pub const EXCERPT_LENGTH: usize = 160;

/// Render a Markdown body to HTML.
pub fn render_html(markdown: &str) -> String {
    let parser = Parser::new(markdown);
    let mut out = String::with_capacity(markdown.len() * 2);
    html::push_html(&mut out, parser);
    out
}

/// Derive a plain-text excerpt from a Markdown body.
///
/// Collects the text content of the document (headings included, markup
/// dropped) and prunes it to [`EXCERPT_LENGTH`] characters without cutting a
/// word in half.
pub fn excerpt(markdown: &str) -> String {
    let mut text = String::new();
    for event in Parser::new(markdown) {
        match event {
            Event::Text(t) | Event::Code(t) => text.push_str(&t),
            // Inline text carries its own spacing; element and line ends are
            // the only places a separator can go missing.
            Event::SoftBreak | Event::HardBreak | Event::End(_) => text.push(' '),
            _ => {}
        }
        // Collect a little past the budget so pruning has a boundary to cut at.
        if text.chars().count() > EXCERPT_LENGTH * 2 {
            break;
        }
    }
    let collapsed: String = text.split_whitespace().collect::<Vec<_>>().join(" ");
    prune(&collapsed, EXCERPT_LENGTH)
}

/// Prune text to `max` characters on a word boundary, appending `…` if cut.
fn prune(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }

    let budget: String = text.chars().take(max).collect();
    let cut = match budget.rfind(' ') {
        Some(pos) => &budget[..pos],
        None => &budget,
    };
    format!("{}…", cut.trim_end())
}
