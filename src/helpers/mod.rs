//! Helper functions for presenting posts
//!
//! URL construction, display-date handling, and serialization of content
//! nodes to HTML or wrapped plain text.

mod date;
mod html;
mod text;
mod url;

pub use date::*;
pub use html::*;
pub use text::*;
pub use url::*;

use crate::config::SiteConfig;

/// Collection of config-bound helper functions
pub struct Helpers<'a> {
    config: &'a SiteConfig,
}

impl<'a> Helpers<'a> {
    /// Create a new helpers instance
    pub fn new(config: &'a SiteConfig) -> Self {
        Self { config }
    }

    /// Site-relative path of a post
    pub fn post_path(&self, slug: &str) -> String {
        post_path(self.config, slug)
    }

    /// Absolute permalink of a post
    pub fn permalink(&self, slug: &str) -> String {
        post_permalink(self.config, slug)
    }

    /// Reformat a post display date with the configured format
    pub fn date(&self, display: &str) -> String {
        reformat_display_date(display, &self.config.date_format)
    }

    /// Shorten an excerpt to the configured length
    pub fn excerpt(&self, excerpt: &str) -> String {
        truncate(excerpt, self.config.excerpt_length, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_helpers_use_config() {
        let mut config = SiteConfig::default();
        config.date_format = "MMMM YYYY".to_string();
        config.excerpt_length = 10;
        let helpers = Helpers::new(&config);

        assert_eq!(helpers.date("Oct 2025"), "October 2025");
        assert_eq!(helpers.excerpt("A rather long excerpt"), "A rathe...");
        assert_eq!(helpers.post_path("x"), "/blog/x/");
        assert_eq!(helpers.permalink("x"), "https://bitroot.tech/blog/x/");
    }
}
