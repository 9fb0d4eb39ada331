//! Post store - loads posts from the source directory

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

use super::{FrontMatter, MarkdownRenderer, Post};
use crate::Folio;

/// Ways the post store can be unreadable
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("posts directory not found: {0}")]
    MissingDir(PathBuf),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed front-matter in {path}: {message}")]
    FrontMatter { path: PathBuf, message: String },

    #[error("{path}: missing or unparseable publishedAt")]
    InvalidDate { path: PathBuf },

    #[error("duplicate slug `{slug}` ({first} and {second})")]
    DuplicateSlug {
        slug: String,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("failed to render {path}: {message}")]
    Render { path: PathBuf, message: String },
}

/// Reads every post under `<source_dir>/_posts`
pub struct PostStore {
    posts_dir: PathBuf,
    render_drafts: bool,
    renderer: MarkdownRenderer,
}

impl PostStore {
    /// Create a store for a site
    pub fn new(folio: &Folio) -> Self {
        let highlight = &folio.config.highlight;
        let renderer = if highlight.enable {
            MarkdownRenderer::with_options(&highlight.theme, highlight.line_number)
        } else {
            MarkdownRenderer::plain()
        };
        Self {
            posts_dir: folio.posts_dir(),
            render_drafts: folio.config.render_drafts,
            renderer,
        }
    }

    /// Create a store reading from an arbitrary directory
    pub fn from_dir<P: AsRef<Path>>(posts_dir: P) -> Self {
        Self {
            posts_dir: posts_dir.as_ref().to_path_buf(),
            render_drafts: false,
            renderer: MarkdownRenderer::plain(),
        }
    }

    /// Load all posts. Order is unspecified.
    pub fn get_all_posts(&self) -> Result<Vec<Post>, StoreError> {
        if !self.posts_dir.is_dir() {
            return Err(StoreError::MissingDir(self.posts_dir.clone()));
        }

        let mut posts = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();

        for entry in WalkDir::new(&self.posts_dir).follow_links(true) {
            let entry = entry.map_err(|e| StoreError::Io {
                path: e.path().map(Path::to_path_buf).unwrap_or_else(|| self.posts_dir.clone()),
                source: e.into(),
            })?;
            let path = entry.path();
            if !path.is_file() || !is_markdown_file(path) {
                continue;
            }

            let (post, published) = self.load_post(path)?;
            if !published && !self.render_drafts {
                tracing::debug!("Skipping unpublished post {:?}", path);
                continue;
            }

            if !seen.insert(post.slug.clone()) {
                let first = posts
                    .iter()
                    .find(|p: &&Post| p.slug == post.slug)
                    .map(|p| p.source.clone())
                    .unwrap_or_default();
                return Err(StoreError::DuplicateSlug {
                    slug: post.slug,
                    first,
                    second: path.to_path_buf(),
                });
            }
            posts.push(post);
        }

        tracing::debug!("Loaded {} posts from {:?}", posts.len(), self.posts_dir);
        Ok(posts)
    }

    /// Load a single post, returning it with its `published` flag
    fn load_post(&self, path: &Path) -> Result<(Post, bool), StoreError> {
        let raw = fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let (fm, body) = FrontMatter::parse(&raw).map_err(|e| StoreError::FrontMatter {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let published_at = fm
            .parse_published_at()
            .ok_or_else(|| StoreError::InvalidDate {
                path: path.to_path_buf(),
            })?;

        let slug = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("untitled")
            .to_string();

        let title = fm.title.clone().unwrap_or_else(|| slug.clone());

        let html = self.renderer.render(body).map_err(|e| StoreError::Render {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let mut post = Post::new(slug, title, published_at);
        post.metadata.summary = fm.summary;
        post.metadata.image = fm.image;
        post.content = body.to_string();
        post.html = html;
        post.source = path.to_path_buf();

        Ok((post, fm.published))
    }
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown" || e == "mdx")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, content: &str) {
        fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn test_load_posts() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "vim.md",
            "---\ntitle: Embracing Vim\npublishedAt: 2024-04-09\n---\n\nVim is **fast**.\n",
        );
        write(
            dir.path(),
            "spaces-vs-tabs.mdx",
            "---\ntitle: Spaces vs Tabs\npublishedAt: 2024-04-08\n---\nTabs.\n",
        );
        write(dir.path(), "notes.txt", "not a post");

        let mut posts = PostStore::from_dir(dir.path()).get_all_posts().unwrap();
        posts.sort_by(|a, b| a.slug.cmp(&b.slug));

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].slug, "spaces-vs-tabs");
        assert_eq!(posts[1].slug, "vim");
        assert_eq!(posts[1].metadata.title, "Embracing Vim");
        assert_eq!(posts[1].content, "Vim is **fast**.\n");
        assert!(posts[1].html.contains("<strong>fast</strong>"));
    }

    #[test]
    fn test_missing_dir_is_error() {
        let dir = TempDir::new().unwrap();
        let err = PostStore::from_dir(dir.path().join("_posts"))
            .get_all_posts()
            .unwrap_err();
        assert!(matches!(err, StoreError::MissingDir(_)));
    }

    #[test]
    fn test_missing_date_is_error() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "undated.md", "---\ntitle: Undated\n---\nBody\n");
        let err = PostStore::from_dir(dir.path()).get_all_posts().unwrap_err();
        assert!(matches!(err, StoreError::InvalidDate { .. }));
    }

    #[test]
    fn test_title_falls_back_to_slug() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "untitled-thoughts.md", "---\npublishedAt: 2024-01-01\n---\nHi\n");
        let posts = PostStore::from_dir(dir.path()).get_all_posts().unwrap();
        assert_eq!(posts[0].metadata.title, "untitled-thoughts");
    }

    #[test]
    fn test_unpublished_posts_skipped() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "draft.md",
            "---\ntitle: Draft\npublishedAt: 2024-01-01\npublished: false\n---\nWIP\n",
        );
        let posts = PostStore::from_dir(dir.path()).get_all_posts().unwrap();
        assert!(posts.is_empty());
    }

    #[test]
    fn test_duplicate_slug_is_error() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("2023")).unwrap();
        write(dir.path(), "hello.md", "---\npublishedAt: 2024-01-01\n---\nA\n");
        write(
            &dir.path().join("2023"),
            "hello.md",
            "---\npublishedAt: 2023-01-01\n---\nB\n",
        );
        let err = PostStore::from_dir(dir.path()).get_all_posts().unwrap_err();
        assert!(matches!(err, StoreError::DuplicateSlug { ref slug, .. } if slug == "hello"));
    }

    #[test]
    fn test_offset_dates_order_by_instant() {
        use crate::components::{render_post_list, ListOptions};
        use crate::helpers::date_xml;

        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "east.md",
            "---\ntitle: East\npublishedAt: 2024-01-01T10:00:00+05:00\n---\nA\n",
        );
        write(
            dir.path(),
            "utc.md",
            "---\ntitle: UTC\npublishedAt: 2024-01-01T08:00:00Z\n---\nB\n",
        );
        let posts = PostStore::from_dir(dir.path()).get_all_posts().unwrap();

        let list = render_post_list(&posts, &ListOptions::default());
        let order: Vec<_> = list.iter().map(|s| s.slug.as_str()).collect();
        assert_eq!(order, vec!["utc", "east"]);

        let east = posts.iter().find(|p| p.slug == "east").unwrap();
        assert_eq!(date_xml(&east.metadata.published_at), "2024-01-01T05:00:00+00:00");
    }
}
