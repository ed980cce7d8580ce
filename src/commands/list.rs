//! List site content

use anyhow::Result;
use std::io::Write;

use crate::content::Post;
use crate::Site;

/// List site content by type
pub fn run<W: Write>(
    site: &Site,
    out: &mut W,
    content_type: &str,
    category: Option<&str>,
    limit: Option<usize>,
    excerpts: bool,
) -> Result<()> {
    let registry = site.registry();
    let helpers = site.helpers();

    match content_type {
        "post" | "posts" => {
            let posts: Vec<&Post> = match category {
                Some(name) => registry.by_category(name),
                None => registry.iter().collect(),
            };
            let shown = limit.unwrap_or(posts.len()).min(posts.len());
            writeln!(out, "Posts ({}):", shown)?;
            for post in &posts[..shown] {
                writeln!(
                    out,
                    "  {} - {} [{}] ({}, {})",
                    post.date, post.title, post.id, post.category, post.read_time
                )?;
                if excerpts {
                    writeln!(out, "      {}", helpers.excerpt(&post.excerpt))?;
                }
            }
        }
        "category" | "categories" => {
            let categories = registry.categories();
            writeln!(out, "Categories ({}):", categories.len())?;
            for (name, count) in categories {
                writeln!(out, "  {} ({})", name, count)?;
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: post, category",
                content_type
            );
        }
    }

    Ok(())
}
