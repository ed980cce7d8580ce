//! URL helper functions

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::config::SiteConfig;

/// Characters escaped when a slug is placed in a single path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Generate a URL with the root path
///
/// # Examples
/// ```ignore
/// url_for(&config, "/blog/") // -> "/site/blog/"
/// ```
pub fn url_for(config: &SiteConfig, path: &str) -> String {
    let root = config.root.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// Generate a full URL including the domain
pub fn full_url_for(config: &SiteConfig, path: &str) -> String {
    let base = config.url.trim_end_matches('/');
    format!("{}{}", base, url_for(config, path))
}

/// Encode a slug for use as one URL path segment
pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}

/// Site-relative path of a post page, e.g. `/blog/offline-first-pwas/`
pub fn post_path(config: &SiteConfig, slug: &str) -> String {
    let blog_dir = config.blog_dir.trim_matches('/');
    url_for(config, &format!("{}/{}/", blog_dir, encode_segment(slug)))
}

/// Absolute permalink of a post page
pub fn post_permalink(config: &SiteConfig, slug: &str) -> String {
    let blog_dir = config.blog_dir.trim_matches('/');
    full_url_for(config, &format!("{}/{}/", blog_dir, encode_segment(slug)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> SiteConfig {
        let mut config = SiteConfig::default();
        config.url = "https://example.com".to_string();
        config.root = "/site/".to_string();
        config
    }

    #[test]
    fn test_url_for() {
        let config = test_config();
        assert_eq!(url_for(&config, "/css/style.css"), "/site/css/style.css");
        assert_eq!(url_for(&config, ""), "/site/");
    }

    #[test]
    fn test_full_url_for() {
        let config = test_config();
        assert_eq!(
            full_url_for(&config, "/about/"),
            "https://example.com/site/about/"
        );
    }

    #[test]
    fn test_post_path() {
        let config = SiteConfig::default();
        assert_eq!(
            post_path(&config, "offline-first-pwas"),
            "/blog/offline-first-pwas/"
        );
        assert_eq!(
            post_permalink(&test_config(), "realtime-at-scale"),
            "https://example.com/site/blog/realtime-at-scale/"
        );
    }

    #[test]
    fn test_post_path_encodes_segment() {
        let config = SiteConfig::default();
        assert_eq!(post_path(&config, "a b/c?d"), "/blog/a%20b%2Fc%3Fd/");
        assert_eq!(encode_segment("100%"), "100%25");
    }

    #[test]
    fn test_post_path_trims_blog_dir() {
        let mut config = SiteConfig::default();
        config.blog_dir = "/insights/".to_string();
        assert_eq!(post_path(&config, "a"), "/insights/a/");
    }
}
