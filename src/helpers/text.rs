//! Plain-text rendering for terminal output

use crate::content::markup::spans_text;
use crate::content::ContentNode;

/// Word wrap text
pub fn word_wrap(s: &str, width: usize) -> String {
    let mut result = String::new();
    let mut line_len = 0;

    for word in s.split_whitespace() {
        let word_len = word.chars().count();
        if line_len > 0 && line_len + word_len + 1 > width {
            result.push('\n');
            result.push_str(word);
            line_len = word_len;
        } else {
            if line_len > 0 {
                result.push(' ');
                line_len += 1;
            }
            result.push_str(word);
            line_len += word_len;
        }
    }

    result
}

/// Render content nodes as wrapped plain text, blocks separated by a blank line
pub fn render_text(nodes: &[ContentNode], width: usize) -> String {
    nodes
        .iter()
        .map(|node| match node {
            ContentNode::Heading { level, spans } => {
                let marker = "#".repeat(usize::from(*level));
                format!("{} {}", marker, spans_text(spans))
            }
            ContentNode::BulletList { items } => items
                .iter()
                .map(|item| {
                    let wrapped = word_wrap(&spans_text(item), width.saturating_sub(2));
                    format!("- {}", wrapped.replace('\n', "\n  "))
                })
                .collect::<Vec<_>>()
                .join("\n"),
            ContentNode::Paragraph { spans } => word_wrap(&spans_text(spans), width),
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
