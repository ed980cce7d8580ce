//! Content module - the post registry and the inline markup parser

pub mod markup;
mod post;
mod posts;
pub mod registry;

pub use markup::{ContentNode, Span};
pub use post::Post;
pub use registry::{all_slugs, get_post_by_slug, PostRegistry, RegistryError};
