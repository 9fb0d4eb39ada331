//! Content module - posts, front-matter and markdown rendering

mod frontmatter;
pub mod loader;
mod markdown;
mod post;

pub use frontmatter::FrontMatter;
pub use loader::{PostStore, StoreError};
pub use markdown::MarkdownRenderer;
pub use post::{Post, PostMetadata};
