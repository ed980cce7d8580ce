//! Render arbitrary markup from a file or stdin

use anyhow::{Context, Result};
use std::fs;
use std::io::{Read, Write};
use std::path::Path;

use super::write_nodes;
use crate::config::OutputFormat;
use crate::content::markup;
use crate::Site;

/// Read markup from a file, or from stdin when no path is given
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read stdin")?;
            Ok(input)
        }
    }
}

/// Parse markup and write the nodes in the requested format
pub fn run<W: Write>(site: &Site, out: &mut W, input: &str, format: OutputFormat) -> Result<()> {
    let nodes = markup::parse(input);
    tracing::info!("Rendered {} bytes into {} nodes", input.len(), nodes.len());
    write_nodes(out, &nodes, format, site.config.wrap_width)
}
