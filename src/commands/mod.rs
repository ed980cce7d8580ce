//! CLI commands

pub mod check;
pub mod list;
pub mod render;
pub mod show;
pub mod slugs;

use anyhow::Result;
use std::io::Write;

use crate::config::OutputFormat;
use crate::content::ContentNode;
use crate::helpers::{render_html, render_text};

/// Write content nodes in the requested format
pub(crate) fn write_nodes<W: Write>(
    out: &mut W,
    nodes: &[ContentNode],
    format: OutputFormat,
    width: usize,
) -> Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{}", render_text(nodes, width))?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(nodes)?)?,
        OutputFormat::Html => writeln!(out, "{}", render_html(nodes))?,
    }
    Ok(())
}
