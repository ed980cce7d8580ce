//! bitroot-blog: the content core of the BITROOT site
//!
//! This crate holds the fixed table of blog posts, lookup by slug, and the
//! small markup parser that turns a post body into headings, bullet lists
//! and paragraphs for the presentation layer.

pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::content::PostRegistry;
use crate::helpers::Helpers;

/// The main site handle
#[derive(Debug, Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
}

impl Site {
    /// Create a new site instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            tracing::debug!("No config at {:?}, using defaults", config_path);
            config::SiteConfig::default()
        };

        Ok(Self { config, base_dir })
    }

    /// The post registry
    pub fn registry(&self) -> &'static PostRegistry {
        PostRegistry::builtin()
    }

    /// Config-bound helpers
    pub fn helpers(&self) -> Helpers<'_> {
        Helpers::new(&self.config)
    }
}

impl Default for Site {
    fn default() -> Self {
        Self {
            config: config::SiteConfig::default(),
            base_dir: PathBuf::from("."),
        }
    }
}
