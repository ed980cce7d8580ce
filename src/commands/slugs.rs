//! Enumerate post slugs for page pre-generation

use anyhow::Result;
use std::io::Write;

use crate::Site;

/// Print one slug per line, in registry order
pub fn run<W: Write>(site: &Site, out: &mut W, with_paths: bool) -> Result<()> {
    let helpers = site.helpers();
    for slug in site.registry().all_slugs() {
        if with_paths {
            writeln!(out, "{}\t{}", slug, helpers.post_path(slug))?;
        } else {
            writeln!(out, "{}", slug)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugs() {
        let mut out = Vec::new();
        run(&Site::default(), &mut out, false).unwrap();
        let output = String::from_utf8(out).unwrap();
        let slugs: Vec<_> = output.lines().collect();
        assert_eq!(slugs.len(), 6);
        assert_eq!(slugs[0], "offline-first-pwas");
        assert_eq!(slugs[5], "realtime-at-scale");
    }

    #[test]
    fn test_slugs_with_paths() {
        let mut out = Vec::new();
        run(&Site::default(), &mut out, true).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.starts_with("offline-first-pwas\t/blog/offline-first-pwas/\n"));
    }
}
