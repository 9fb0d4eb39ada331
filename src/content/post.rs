//! Post model

use chrono::NaiveDateTime;
use serde::Serialize;
use std::path::PathBuf;

/// Metadata read from a post's front-matter
#[derive(Debug, Clone, Serialize)]
pub struct PostMetadata {
    pub title: String,
    /// Used for ordering; the time of day is only kept when the source has one
    pub published_at: NaiveDateTime,
    pub summary: Option<String>,
    pub image: Option<String>,
}

/// A blog post
#[derive(Debug, Clone, Serialize)]
pub struct Post {
    /// URL-friendly name, taken from the file name
    pub slug: String,

    pub metadata: PostMetadata,

    /// Raw markdown body (front-matter stripped)
    pub content: String,

    /// Rendered HTML body
    pub html: String,

    /// Full source file path
    pub source: PathBuf,
}

impl Post {
    /// Create a post with an empty body
    pub fn new(slug: impl Into<String>, title: impl Into<String>, published_at: NaiveDateTime) -> Self {
        Self {
            slug: slug.into(),
            metadata: PostMetadata {
                title: title.into(),
                published_at,
                summary: None,
                image: None,
            },
            content: String::new(),
            html: String::new(),
            source: PathBuf::new(),
        }
    }

    /// Site-relative link to this post
    pub fn href(&self) -> String {
        format!("/blog/{}", self.slug)
    }
}
