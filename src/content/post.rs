//! Post model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::markup::{self, ContentNode};
use super::registry::PostRegistry;
use crate::helpers::parse_month_year;

/// A blog post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Slug (URL-friendly, unique lookup key)
    pub id: String,

    /// Post title
    pub title: String,

    /// Short summary shown in listings
    pub excerpt: String,

    /// Display date, e.g. "Nov 2025"
    pub date: String,

    /// Display reading time, e.g. "8 min read"
    #[serde(rename = "readTime")]
    pub read_time: String,

    /// Single display category
    pub category: String,

    /// Raw body in the inline markup format
    pub content: String,
}

impl Post {
    /// Create a new post from its display fields
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        excerpt: impl Into<String>,
        date: impl Into<String>,
        read_time: impl Into<String>,
        category: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            excerpt: excerpt.into(),
            date: date.into(),
            read_time: read_time.into(),
            category: category.into(),
            content: content.into(),
        }
    }

    /// Render the body into content nodes
    pub fn render(&self) -> Vec<ContentNode> {
        markup::parse(&self.content)
    }

    /// First day of the month named by the display date
    pub fn published_month(&self) -> Option<NaiveDate> {
        parse_month_year(&self.date)
    }

    /// Get the previous (newer) post in registry order
    pub fn prev<'a>(&self, registry: &'a PostRegistry) -> Option<&'a Post> {
        let pos = registry.position(&self.id)?;
        if pos > 0 {
            registry.posts().get(pos - 1)
        } else {
            None
        }
    }

    /// Get the next (older) post in registry order
    pub fn next<'a>(&self, registry: &'a PostRegistry) -> Option<&'a Post> {
        let pos = registry.position(&self.id)?;
        registry.posts().get(pos + 1)
    }

    /// Display fields paired with their names, used for validation
    pub(crate) fn display_fields(&self) -> [(&'static str, &str); 6] {
        [
            ("title", self.title.as_str()),
            ("excerpt", self.excerpt.as_str()),
            ("date", self.date.as_str()),
            ("readTime", self.read_time.as_str()),
            ("category", self.category.as_str()),
            ("content", self.content.as_str()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(id: &str, date: &str) -> Post {
        Post::new(id, "Title", "Excerpt", date, "5 min read", "General", "Body")
    }

    #[test]
    fn test_published_month() {
        let post = sample("a", "Nov 2025");
        assert_eq!(
            post.published_month(),
            NaiveDate::from_ymd_opt(2025, 11, 1)
        );
        assert_eq!(sample("b", "sometime").published_month(), None);
    }

    #[test]
    fn test_prev_next() {
        let registry = PostRegistry::new(vec![
            sample("first", "Nov 2025"),
            sample("second", "Oct 2025"),
            sample("third", "Sep 2025"),
        ])
        .unwrap();
        let posts = registry.posts();

        assert!(posts[0].prev(&registry).is_none());
        assert_eq!(posts[0].next(&registry).unwrap().id, "second");
        assert_eq!(posts[1].prev(&registry).unwrap().id, "first");
        assert_eq!(posts[1].next(&registry).unwrap().id, "third");
        assert!(posts[2].next(&registry).is_none());
    }

    #[test]
    fn test_prev_next_unknown_post() {
        let registry = PostRegistry::new(vec![sample("only", "Nov 2025")]).unwrap();
        let stranger = sample("stranger", "Nov 2025");
        assert!(stranger.prev(&registry).is_none());
        assert!(stranger.next(&registry).is_none());
    }

    #[test]
    fn test_serialize_uses_read_time_key() {
        let json = serde_json::to_value(sample("a", "Nov 2025")).unwrap();
        assert_eq!(json["readTime"], "5 min read");
        assert_eq!(json["id"], "a");
    }
}
