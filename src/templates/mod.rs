//! Built-in site templates using the Tera template engine
//!
//! All templates are embedded in the binary, so a site needs nothing but
//! its config and posts.

use anyhow::Result;
use serde::Serialize;
use std::collections::HashMap;
use tera::{Context, Tera};

use crate::helpers::html_escape;

/// Template renderer with the embedded site theme
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        // Tera's own escaping also rewrites `/`, which breaks URLs; text and
        // attribute values go through the `attr` filter instead.
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("style.css", include_str!("site/style.css")),
            ("layout.html", include_str!("site/layout.html")),
            ("index.html", include_str!("site/index.html")),
            ("blog.html", include_str!("site/blog.html")),
            ("post.html", include_str!("site/post.html")),
            ("partials/nav.html", include_str!("site/partials/nav.html")),
            (
                "partials/posts.html",
                include_str!("site/partials/posts.html"),
            ),
            (
                "partials/comments.html",
                include_str!("site/partials/comments.html"),
            ),
            (
                "partials/showcase.html",
                include_str!("site/partials/showcase.html"),
            ),
        ])?;

        tera.register_filter("attr", attr_filter);

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }
}

/// Tera filter: escape text for HTML content and attribute values
fn attr_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = match value {
        tera::Value::String(s) => s.clone(),
        tera::Value::Null => String::new(),
        other => other.to_string(),
    };
    Ok(tera::Value::String(html_escape(&s)))
}

/// Site-wide values available to every page as `site`
#[derive(Debug, Clone, Serialize)]
pub struct SiteData {
    pub title: String,
    pub description: String,
    pub author: String,
    pub language: String,
    pub url: String,
}

/// A post as rendered on its own page
#[derive(Debug, Clone, Serialize)]
pub struct PostPageData {
    pub slug: String,
    pub title: String,
    pub date: String,
    pub reading_time: usize,
    pub summary: Option<String>,
    pub image: Option<String>,
    pub html: String,
}
