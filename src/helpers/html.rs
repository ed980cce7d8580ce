//! HTML helper functions
//!
//! Serializes parsed content nodes into the HTML fragment the presentation
//! layer drops into an article body.

use crate::content::{ContentNode, Span};

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Render inline spans to HTML
pub fn render_spans_html(spans: &[Span]) -> String {
    let mut out = String::new();
    for span in spans {
        match span {
            Span::PlainText(text) => out.push_str(&html_escape(text)),
            Span::Bold(text) => {
                out.push_str("<strong>");
                out.push_str(&html_escape(text));
                out.push_str("</strong>");
            }
            Span::Code(text) => {
                out.push_str("<code>");
                out.push_str(&html_escape(text));
                out.push_str("</code>");
            }
        }
    }
    out
}

/// Render a single content node to HTML
pub fn render_node_html(node: &ContentNode) -> String {
    match node {
        ContentNode::Heading { level, spans } => {
            format!("<h{0}>{1}</h{0}>", level, render_spans_html(spans))
        }
        ContentNode::BulletList { items } => {
            let items: String = items
                .iter()
                .map(|item| format!("<li>{}</li>", render_spans_html(item)))
                .collect();
            format!("<ul>{}</ul>", items)
        }
        ContentNode::Paragraph { spans } => format!("<p>{}</p>", render_spans_html(spans)),
    }
}

/// Render a node sequence to an HTML fragment, one node per line
pub fn render_html(nodes: &[ContentNode]) -> String {
    nodes
        .iter()
        .map(render_node_html)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Truncate a string to a specified length
pub fn truncate(s: &str, length: usize, omission: Option<&str>) -> String {
    let omission = omission.unwrap_or("...");

    if s.chars().count() <= length {
        s.to_string()
    } else {
        let truncated: String = s
            .chars()
            .take(length.saturating_sub(omission.chars().count()))
            .collect();
        format!("{}{}", truncated.trim_end(), omission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::markup::parse;

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_render_paragraph_spans() {
        let html = render_html(&parse("Hello **world** and `code`."));
        assert_eq!(
            html,
            "<p>Hello <strong>world</strong> and <code>code</code>.</p>"
        );
    }

    #[test]
    fn test_render_heading_and_list() {
        let html = render_html(&parse("## Results\n\n- one\n- **two**"));
        assert_eq!(
            html,
            "<h2>Results</h2>\n<ul><li>one</li><li><strong>two</strong></li></ul>"
        );
    }

    #[test]
    fn test_render_escapes_code_content() {
        let html = render_html(&parse("Use `<div>` & more"));
        assert_eq!(html, "<p>Use <code>&lt;div&gt;</code> &amp; more</p>");
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render_html(&[]), "");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello World", 8, None), "Hello...");
        assert_eq!(truncate("Hi", 10, None), "Hi");
        assert_eq!(truncate("guarantee—it's", 10, Some("…")), "guarantee…");
    }
}
