//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Output format for rendered content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Wrapped plain text
    Text,
    /// Content nodes as JSON
    Json,
    /// HTML fragment
    Html,
}

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub author: String,
    pub email: String,

    // URL
    pub url: String,
    pub root: String,
    pub blog_dir: String,

    // Display
    pub date_format: String,
    pub excerpt_length: usize,
    pub wrap_width: usize,
    pub default_format: OutputFormat,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "BITROOT".to_string(),
            description: "Enterprise software for emerging markets".to_string(),
            author: "BITROOT".to_string(),
            email: "hello@bitroot.tech".to_string(),

            url: "https://bitroot.tech".to_string(),
            root: "/".to_string(),
            blog_dir: "blog".to_string(),

            date_format: "MMM YYYY".to_string(),
            excerpt_length: 160,
            wrap_width: 80,
            default_format: OutputFormat::Text,

            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        tracing::debug!("Loaded config from {:?}", path.as_ref());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.title, "BITROOT");
        assert_eq!(config.blog_dir, "blog");
        assert_eq!(config.default_format, OutputFormat::Text);
        assert_eq!(config.excerpt_length, 160);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: Insights
url: https://example.com
default_format: html
wrap_width: 60
analytics_id: abc123
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "Insights");
        assert_eq!(config.url, "https://example.com");
        assert_eq!(config.default_format, OutputFormat::Html);
        assert_eq!(config.wrap_width, 60);
        assert_eq!(config.blog_dir, "blog");
        assert_eq!(
            config.extra.get("analytics_id").and_then(|v| v.as_str()),
            Some("abc123")
        );
    }

    #[test]
    fn test_load_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("_config.yml");
        fs::write(&path, "author: Jane\nexcerpt_length: 40\n").unwrap();

        let config = SiteConfig::load(&path).unwrap();
        assert_eq!(config.author, "Jane");
        assert_eq!(config.excerpt_length, 40);
        assert_eq!(config.email, "hello@bitroot.tech");
    }

    #[test]
    fn test_load_rejects_bad_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("_config.yml");
        fs::write(&path, "default_format: pdf\n").unwrap();
        assert!(SiteConfig::load(&path).is_err());
    }
}
