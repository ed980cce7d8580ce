//! Check the built-in post table

use anyhow::Result;
use std::io::Write;

use crate::Site;

/// Report registry size and any posts breaking newest-first order.
///
/// Ordering is a convention, so violations are reported but do not fail.
pub fn run<W: Write>(site: &Site, out: &mut W) -> Result<()> {
    let registry = site.registry();

    writeln!(
        out,
        "{} posts, {} categories",
        registry.len(),
        registry.categories().len()
    )?;

    for post in registry {
        if post.published_month().is_none() {
            tracing::warn!("Post {} has an unparseable date: {:?}", post.id, post.date);
            writeln!(out, "  unparseable date in [{}]: {}", post.id, post.date)?;
        }
    }

    let out_of_order = registry.out_of_order();
    if out_of_order.is_empty() {
        writeln!(out, "Order: newest first")?;
    } else {
        for (first, second) in out_of_order {
            tracing::warn!("Post {} is listed before newer post {}", first.id, second.id);
            writeln!(
                out,
                "  [{}] ({}) is listed before newer [{}] ({})",
                first.id, first.date, second.id, second.date
            )?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_builtin() {
        let mut out = Vec::new();
        run(&Site::default(), &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert_eq!(output, "6 posts, 6 categories\nOrder: newest first\n");
    }
}
