//! Mechanical Markdown -> HTML conversion for preview mode.
//!
//! Headings, emphasis, lists and paragraph splitting only; literal
//! HTML tags inside the Markdown (styled headings, ToC anchors) pass
//! through untouched.

use contracts::post::ArticleBody;
use pulldown_cmark::{html, Options, Parser};

/// Convert a Markdown article body into equivalent HTML
pub fn markdown_to_html(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(source, options);
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

/// Markup to inject in preview mode: Markdown is converted first,
/// HTML is injected as received (already sanitized server-side)
pub fn preview_html(body: &ArticleBody) -> String {
    match body {
        ArticleBody::Markdown(source) => markdown_to_html(source),
        ArticleBody::Html(source) => source.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_hash_becomes_heading() {
        let html = markdown_to_html("# Five Budgeting Tips\n\nSaving money starts small.");
        assert!(html.contains("<h1>Five Budgeting Tips</h1>"));
        assert!(html.contains("<p>Saving money starts small.</p>"));
    }

    #[test]
    fn test_paragraphs_are_wrapped_no_naked_text() {
        let html = markdown_to_html("First paragraph.\n\nSecond paragraph.");
        assert_eq!(
            html,
            "<p>First paragraph.</p>\n<p>Second paragraph.</p>\n"
        );
    }

    #[test]
    fn test_emphasis_and_strong() {
        let html = markdown_to_html("Plain *italic* and **bold** text.");
        assert!(html.contains("<em>italic</em>"));
        assert!(html.contains("<strong>bold</strong>"));
    }

    #[test]
    fn test_inline_html_passes_through() {
        let source = "<h1 style=\"color: #a78bfa;\">Styled</h1>\n\nBody text.";
        let html = markdown_to_html(source);
        assert!(html.contains("<h1 style=\"color: #a78bfa;\">Styled</h1>"));
    }

    #[test]
    fn test_conversion_is_idempotent_per_source() {
        let source = "# Title\n\nBody.";
        assert_eq!(markdown_to_html(source), markdown_to_html(source));
    }

    #[test]
    fn test_preview_html_uses_html_as_is() {
        let body = ArticleBody::Html("<h1>T</h1><p>B</p>".into());
        assert_eq!(preview_html(&body), "<h1>T</h1><p>B</p>");

        let md = ArticleBody::Markdown("# T".into());
        assert!(preview_html(&md).contains("<h1>T</h1>"));
    }
}
