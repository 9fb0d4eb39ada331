//! giscus comment thread embed

use anyhow::Result;
use serde::Serialize;
use tera::Context;

use crate::config::CommentsConfig;
use crate::templates::TemplateRenderer;

/// Identifies the discussion thread a page binds to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentThreadRef {
    pub page_id: String,
}

impl CommentThreadRef {
    pub fn new(page_id: impl Into<String>) -> Self {
        Self {
            page_id: page_id.into(),
        }
    }
}

/// Attributes of the giscus `<script>` tag for one page
#[derive(Debug, Clone, Serialize)]
pub struct CommentsEmbed {
    pub repo: String,
    pub repo_id: String,
    pub category: String,
    pub category_id: String,
    pub mapping: &'static str,
    /// Thread-mapping term
    pub term: String,
    pub reactions_enabled: &'static str,
    pub emit_metadata: &'static str,
    pub input_position: String,
    pub theme: String,
    pub lang: String,
    pub loading: String,
}

impl CommentsEmbed {
    /// Embed bound to `thread`, or to the configured shared term if one is set
    pub fn new(config: &CommentsConfig, thread: &CommentThreadRef) -> Self {
        let term = config
            .shared_term
            .clone()
            .unwrap_or_else(|| thread.page_id.clone());

        Self {
            repo: config.repo.clone(),
            repo_id: config.repo_id.clone(),
            category: config.category.clone(),
            category_id: config.category_id.clone(),
            mapping: "specific",
            term,
            reactions_enabled: flag(config.reactions_enabled),
            emit_metadata: flag(config.emit_metadata),
            input_position: config.input_position.clone(),
            theme: config.theme.clone(),
            lang: config.lang.clone(),
            loading: config.loading.clone(),
        }
    }

    /// Embed for `thread` when comments are enabled
    pub fn for_page(config: &CommentsConfig, thread: &CommentThreadRef) -> Option<Self> {
        config.enable.then(|| Self::new(config, thread))
    }

    pub fn render(&self, renderer: &TemplateRenderer) -> Result<String> {
        let mut context = Context::new();
        context.insert("comments", self);
        renderer.render("partials/comments.html", &context)
    }
}

fn flag(on: bool) -> &'static str {
    if on {
        "1"
    } else {
        "0"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> CommentsConfig {
        CommentsConfig {
            enable: true,
            repo: "mstronge/matthewstronge".to_string(),
            repo_id: "R_kgDONDM4GQ".to_string(),
            category_id: "DIC_kwDONDM4Gc4Cjife".to_string(),
            ..CommentsConfig::default()
        }
    }

    #[test]
    fn test_term_bound_to_page() {
        let renderer = TemplateRenderer::new().unwrap();
        let embed = CommentsEmbed::new(&config(), &CommentThreadRef::new("post-123"));
        assert_eq!(embed.term, "post-123");

        let html = embed.render(&renderer).unwrap();
        assert!(html.contains(r#"data-term="post-123""#));
        assert!(html.contains(r#"data-mapping="specific""#));
        assert!(html.contains(r#"data-repo="mstronge/matthewstronge""#));
        assert!(html.contains(r#"data-repo-id="R_kgDONDM4GQ""#));
        assert!(html.contains(r#"data-category="Announcements""#));
        assert!(html.contains(r#"data-reactions-enabled="1""#));
        assert!(html.contains(r#"data-emit-metadata="0""#));
        assert!(html.contains("https://giscus.app/client.js"));
    }

    #[test]
    fn test_distinct_pages_get_distinct_threads() {
        let a = CommentsEmbed::new(&config(), &CommentThreadRef::new("vim"));
        let b = CommentsEmbed::new(&config(), &CommentThreadRef::new("spaces-vs-tabs"));
        assert_ne!(a.term, b.term);
    }

    #[test]
    fn test_shared_term_overrides_page() {
        let mut config = config();
        config.shared_term = Some("Welcome".to_string());
        let embed = CommentsEmbed::new(&config, &CommentThreadRef::new("post-123"));
        assert_eq!(embed.term, "Welcome");
    }

    #[test]
    fn test_disabled() {
        let mut config = config();
        config.enable = false;
        assert!(CommentsEmbed::for_page(&config, &CommentThreadRef::new("x")).is_none());
    }
}
