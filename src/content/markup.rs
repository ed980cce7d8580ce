//! Inline markup parsing
//!
//! Post bodies use a deliberately small markdown subset:
//!
//! - blocks are separated by a blank line (`\n\n`)
//! - a block starting with `## ` is a level-2 heading
//! - a block with at least one `- ` line is a bullet list; other lines in it
//!   are dropped
//! - anything else is a paragraph
//!
//! Inside a block, `**bold**` and `` `code` `` spans are recognised. Spans do
//! not nest and unpaired markers are kept as literal text, so parsing never
//! fails.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

const HEADING_PREFIX: &str = "## ";
const BULLET_PREFIX: &str = "- ";

lazy_static! {
    // Alternation is leftmost-first, so whichever marker opens earlier wins.
    static ref INLINE_RE: Regex = Regex::new(r"\*\*([^*]+)\*\*|`([^`]+)`").unwrap();
}

/// One inline fragment of a block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "text", rename_all = "snake_case")]
pub enum Span {
    PlainText(String),
    Bold(String),
    Code(String),
}

impl Span {
    /// The span's text with markers removed
    pub fn text(&self) -> &str {
        match self {
            Span::PlainText(s) | Span::Bold(s) | Span::Code(s) => s,
        }
    }
}

/// One block of rendered content
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentNode {
    Heading { level: u8, spans: Vec<Span> },
    BulletList { items: Vec<Vec<Span>> },
    Paragraph { spans: Vec<Span> },
}

impl ContentNode {
    pub fn is_heading(&self) -> bool {
        matches!(self, ContentNode::Heading { .. })
    }

    pub fn is_list(&self) -> bool {
        matches!(self, ContentNode::BulletList { .. })
    }

    pub fn is_paragraph(&self) -> bool {
        matches!(self, ContentNode::Paragraph { .. })
    }

    /// Marker-free text of the node; list items are joined by newlines
    pub fn plain_text(&self) -> String {
        match self {
            ContentNode::Heading { spans, .. } | ContentNode::Paragraph { spans } => {
                spans_text(spans)
            }
            ContentNode::BulletList { items } => items
                .iter()
                .map(|item| spans_text(item))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

/// Concatenate the text of a run of spans
pub fn spans_text(spans: &[Span]) -> String {
    spans.iter().map(Span::text).collect()
}

/// Parse a post body into content nodes
pub fn parse(content: &str) -> Vec<ContentNode> {
    let nodes: Vec<ContentNode> = content
        .split("\n\n")
        .filter(|block| !block.trim().is_empty())
        .map(parse_block)
        .collect();

    tracing::debug!("Parsed {} content nodes", nodes.len());
    nodes
}

/// Classify and parse a single block
fn parse_block(block: &str) -> ContentNode {
    if let Some(rest) = block.strip_prefix(HEADING_PREFIX) {
        return ContentNode::Heading {
            level: 2,
            spans: parse_spans(rest),
        };
    }

    let items: Vec<Vec<Span>> = block
        .lines()
        .filter_map(|line| line.trim_start().strip_prefix(BULLET_PREFIX))
        .map(parse_spans)
        .collect();

    if !items.is_empty() {
        return ContentNode::BulletList { items };
    }

    ContentNode::Paragraph {
        spans: parse_spans(block),
    }
}

/// Split text into plain, bold and code spans
pub fn parse_spans(text: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut last = 0;

    for caps in INLINE_RE.captures_iter(text) {
        let Some(whole) = caps.get(0) else { continue };
        if whole.start() > last {
            spans.push(Span::PlainText(text[last..whole.start()].to_string()));
        }
        if let Some(bold) = caps.get(1) {
            spans.push(Span::Bold(bold.as_str().to_string()));
        } else if let Some(code) = caps.get(2) {
            spans.push(Span::Code(code.as_str().to_string()));
        }
        last = whole.end();
    }

    if last < text.len() || spans.is_empty() {
        spans.push(Span::PlainText(text[last..].to_string()));
    }

    spans
}
