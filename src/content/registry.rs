//! Post registry - the fixed, ordered set of published posts
//!
//! The registry is built once from the literal post table and never mutated
//! afterwards, so shared references to it can be handed out freely.

use indexmap::IndexMap;
use lazy_static::lazy_static;
use std::collections::HashMap;
use thiserror::Error;

use super::posts;
use super::Post;

/// Reasons a post table is rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Duplicate post id: {0}")]
    DuplicateId(String),

    #[error("Post {id} has an empty {field}")]
    EmptyField { id: String, field: &'static str },

    #[error("Post id is not a URL slug: {0:?}")]
    InvalidSlug(String),
}

lazy_static! {
    static ref BUILTIN: PostRegistry = PostRegistry::new(posts::builtin_posts())
        .expect("built-in post table is valid");
}

/// Ordered, read-only collection of posts with lookup by slug
#[derive(Debug, Clone)]
pub struct PostRegistry {
    posts: Vec<Post>,
    index: HashMap<String, usize>,
}

impl PostRegistry {
    /// Build a registry, keeping the given order
    pub fn new(posts: Vec<Post>) -> Result<Self, RegistryError> {
        let mut index = HashMap::with_capacity(posts.len());

        for (i, post) in posts.iter().enumerate() {
            if post.id.is_empty() || slug::slugify(&post.id) != post.id {
                return Err(RegistryError::InvalidSlug(post.id.clone()));
            }
            if let Some((field, _)) = post
                .display_fields()
                .into_iter()
                .find(|(_, value)| value.trim().is_empty())
            {
                return Err(RegistryError::EmptyField {
                    id: post.id.clone(),
                    field,
                });
            }
            if index.insert(post.id.clone(), i).is_some() {
                return Err(RegistryError::DuplicateId(post.id.clone()));
            }
        }

        tracing::debug!("Registry built with {} posts", posts.len());
        Ok(Self { posts, index })
    }

    /// The process-wide registry over the built-in post table
    pub fn builtin() -> &'static PostRegistry {
        &BUILTIN
    }

    /// Look up a post by its exact slug
    pub fn get_post_by_slug(&self, id: &str) -> Option<&Post> {
        let post = self.index.get(id).map(|&i| &self.posts[i]);
        if post.is_none() {
            tracing::debug!("No post with slug {:?}", id);
        }
        post
    }

    /// All slugs in registry order
    pub fn all_slugs(&self) -> Vec<&str> {
        self.posts.iter().map(|p| p.id.as_str()).collect()
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Post> {
        self.posts.iter()
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Index of a slug in registry order
    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// The first `n` posts in registry order
    pub fn latest(&self, n: usize) -> &[Post] {
        &self.posts[..n.min(self.posts.len())]
    }

    /// Posts in a category (case-insensitive), in registry order
    pub fn by_category(&self, name: &str) -> Vec<&Post> {
        self.posts
            .iter()
            .filter(|p| p.category.eq_ignore_ascii_case(name))
            .collect()
    }

    /// Category name to post count, in first-seen order
    pub fn categories(&self) -> IndexMap<&str, usize> {
        let mut categories = IndexMap::new();
        for post in &self.posts {
            *categories.entry(post.category.as_str()).or_insert(0) += 1;
        }
        categories
    }

    /// Adjacent pairs that break the newest-first convention.
    ///
    /// Posts whose date cannot be parsed are skipped rather than reported.
    pub fn out_of_order(&self) -> Vec<(&Post, &Post)> {
        self.posts
            .windows(2)
            .filter_map(|pair| {
                let (first, second) = (&pair[0], &pair[1]);
                match (first.published_month(), second.published_month()) {
                    (Some(a), Some(b)) if a < b => Some((first, second)),
                    _ => None,
                }
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a PostRegistry {
    type Item = &'a Post;
    type IntoIter = std::slice::Iter<'a, Post>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Look up a post in the built-in registry
pub fn get_post_by_slug(id: &str) -> Option<&'static Post> {
    PostRegistry::builtin().get_post_by_slug(id)
}

/// All slugs of the built-in registry, in order
pub fn all_slugs() -> Vec<&'static str> {
    PostRegistry::builtin().all_slugs()
}
