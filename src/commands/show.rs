//! Show a single post

use anyhow::Result;
use std::io::Write;

use super::write_nodes;
use crate::config::OutputFormat;
use crate::helpers::{html_escape, word_wrap};
use crate::Site;

/// Print a post's metadata and rendered body
pub fn run<W: Write>(site: &Site, out: &mut W, slug: &str, format: OutputFormat) -> Result<()> {
    let registry = site.registry();
    let helpers = site.helpers();

    let Some(post) = registry.get_post_by_slug(slug) else {
        tracing::warn!("Requested unknown post at {}", helpers.post_path(slug));
        anyhow::bail!("Blog post not found: {}", slug);
    };

    let nodes = post.render();
    let width = site.config.wrap_width;

    match format {
        OutputFormat::Json => {
            let value = serde_json::json!({
                "post": post,
                "path": helpers.post_path(&post.id),
                "permalink": helpers.permalink(&post.id),
                "prev": post.prev(registry).map(|p| &p.id),
                "next": post.next(registry).map(|p| &p.id),
                "nodes": nodes,
            });
            writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
        }
        OutputFormat::Html => {
            writeln!(out, "<h1>{}</h1>", html_escape(&post.title))?;
            writeln!(out, "<p>{}</p>", html_escape(&post.excerpt))?;
            write_nodes(out, &nodes, format, width)?;
        }
        OutputFormat::Text => {
            writeln!(out, "{}", post.title)?;
            writeln!(
                out,
                "{} · {} · {}",
                post.category,
                post.read_time,
                helpers.date(&post.date)
            )?;
            writeln!(out, "{}", helpers.permalink(&post.id))?;
            writeln!(out)?;
            writeln!(out, "{}", word_wrap(&post.excerpt, width))?;
            writeln!(out)?;
            write_nodes(out, &nodes, format, width)?;

            if let Some(newer) = post.prev(registry) {
                writeln!(out)?;
                writeln!(out, "Newer: {} [{}]", newer.title, newer.id)?;
            }
            if let Some(older) = post.next(registry) {
                writeln!(out, "Older: {} [{}]", older.title, older.id)?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn show(slug: &str, format: OutputFormat) -> Result<String> {
        let mut out = Vec::new();
        run(&Site::default(), &mut out, slug, format)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_show_text() {
        let output = show("multi-tenant-security", OutputFormat::Text).unwrap();
        let mut lines = output.lines();
        assert_eq!(
            lines.next(),
            Some("Multi-Tenant Security: Row-Level Security in PostgreSQL")
        );
        assert_eq!(lines.next(), Some("Security · 12 min read · Oct 2025"));
        assert_eq!(
            lines.next(),
            Some("https://bitroot.tech/blog/multi-tenant-security/")
        );
        assert!(output.contains("## Why Multi-Tenancy?"));
        assert!(output.contains("Newer: Building Offline-First PWAs"));
        assert!(output.contains("Older: Mobile Money Integration"));
    }

    #[test]
    fn test_show_text_first_post_has_no_newer() {
        let output = show("offline-first-pwas", OutputFormat::Text).unwrap();
        assert!(!output.contains("Newer:"));
        assert!(output.contains("Older: Multi-Tenant Security"));
    }

    #[test]
    fn test_show_json() {
        let output = show("realtime-at-scale", OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["post"]["id"], "realtime-at-scale");
        assert_eq!(value["post"]["readTime"], "9 min read");
        assert_eq!(value["path"], "/blog/realtime-at-scale/");
        assert_eq!(value["prev"], "why-emerging-markets");
        assert!(value["next"].is_null());
        assert_eq!(value["nodes"][0]["type"], "paragraph");
    }

    #[test]
    fn test_show_html() {
        let output = show("why-emerging-markets", OutputFormat::Html).unwrap();
        assert!(output.starts_with("<h1>Why We Build for Emerging Markets</h1>\n"));
        assert!(output.contains("<h2>The Opportunity</h2>"));
        assert!(output.contains("we&#39;re building"));
    }

    #[test]
    fn test_show_unknown_slug() {
        let err = show("does-not-exist", OutputFormat::Text).unwrap_err();
        assert_eq!(err.to_string(), "Blog post not found: does-not-exist");
    }
}
