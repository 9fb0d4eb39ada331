//! Generator module - writes the static site using the built-in templates

use anyhow::{Context as _, Result};
use chrono::Datelike;
use std::fs;
use std::path::Path;
use tera::Context;
use walkdir::WalkDir;

use crate::components::posts::{sort_newest_first, summarize};
use crate::components::{CommentThreadRef, CommentsEmbed, LandingPage, ListOptions, Navbar};
use crate::content::{MarkdownRenderer, Post};
use crate::helpers::{
    absolutize_urls, date_iso, date_xml, escape_xml, full_url_for, meta_generator,
    strip_invalid_xml_chars,
};
use crate::templates::{PostPageData, SiteData, TemplateRenderer};
use crate::Folio;

/// Number of entries in atom.xml
const FEED_LIMIT: usize = 20;

/// Static site generator
pub struct Generator {
    folio: Folio,
    renderer: TemplateRenderer,
    markdown: MarkdownRenderer,
    list_options: ListOptions,
}

impl Generator {
    /// Create a new generator
    pub fn new(folio: &Folio) -> Result<Self> {
        Ok(Self {
            folio: folio.clone(),
            renderer: TemplateRenderer::new()?,
            markdown: MarkdownRenderer::plain(),
            list_options: ListOptions::from_config(&folio.config),
        })
    }

    /// Generate the entire site
    pub fn generate(&self, posts: &[Post]) -> Result<()> {
        fs::create_dir_all(&self.folio.public_dir)?;

        self.copy_source_assets()?;

        let sorted = sort_newest_first(posts);
        let summaries: Vec<_> = sorted
            .iter()
            .map(|p| summarize(p, &self.list_options))
            .collect();

        let navbar = Navbar::from_config(&self.folio.config);

        // Landing page
        let landing = LandingPage::compose(&self.folio.config, &summaries, &self.markdown)?;
        let mut context = self.base_context(&navbar, "", "/");
        context.insert("landing", &landing);
        context.insert("posts", &landing.posts);
        self.write_page("index.html", "index.html", &context)?;

        // Blog index
        let mut context = self.base_context(&navbar, "Blog", "/blog/");
        context.insert("posts", &summaries);
        self.write_page("blog.html", "blog/index.html", &context)?;

        // One page per post
        for post in &sorted {
            self.generate_post_page(post, &navbar)?;
        }

        self.generate_atom_feed(&sorted)?;
        self.generate_sitemap(&sorted)?;

        tracing::info!("Generated {} post pages", sorted.len());
        Ok(())
    }

    /// Context shared by every page
    fn base_context(&self, navbar: &Navbar, page_title: &str, path: &str) -> Context {
        let config = &self.folio.config;
        let site = SiteData {
            title: config.title.clone(),
            description: config.description.clone(),
            author: config.author.clone(),
            language: config.language.clone(),
            url: config.url.clone(),
        };

        let mut context = Context::new();
        context.insert("site", &site);
        context.insert("nav", navbar);
        context.insert("page_title", page_title);
        context.insert("page_description", &config.description);
        context.insert("canonical", &full_url_for(config, path));
        context.insert("generator", &meta_generator());
        context.insert("current_year", &chrono::Local::now().year());
        context
    }

    fn generate_post_page(&self, post: &Post, navbar: &Navbar) -> Result<()> {
        let summary = summarize(post, &self.list_options);
        let page = PostPageData {
            slug: post.slug.clone(),
            title: summary.title,
            date: summary.date,
            reading_time: summary.reading_time,
            summary: post.metadata.summary.clone(),
            image: post.metadata.image.clone(),
            html: post.html.clone(),
        };

        let comments = CommentsEmbed::for_page(
            &self.folio.config.comments,
            &CommentThreadRef::new(post.slug.as_str()),
        );

        let mut context = self.base_context(navbar, &post.metadata.title, &summary.href);
        if let Some(description) = &post.metadata.summary {
            context.insert("page_description", description);
        }
        context.insert("post", &page);
        context.insert("comments", &comments);

        let output = format!("blog/{}/index.html", post.slug);
        self.write_page("post.html", &output, &context)
    }

    fn write_page(&self, template: &str, output: &str, context: &Context) -> Result<()> {
        let html = self
            .renderer
            .render(template, context)
            .with_context(|| format!("Failed to render {}", output))?;
        self.write_output(output, &html)
    }

    fn write_output(&self, relative: &str, content: &str) -> Result<()> {
        let output_path = self.folio.public_dir.join(relative);
        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create dir {:?}", parent))?;
        }
        fs::write(&output_path, content)
            .with_context(|| format!("Failed to write {:?}", output_path))?;
        tracing::debug!("Generated: {:?}", output_path);
        Ok(())
    }

    /// Generate the Atom feed from the most recent posts
    fn generate_atom_feed(&self, posts: &[&Post]) -> Result<()> {
        let config = &self.folio.config;
        let base_url = config.url.trim_end_matches('/');

        let updated = posts
            .first()
            .map(|p| date_xml(&p.metadata.published_at))
            .unwrap_or_else(|| chrono::Utc::now().to_rfc3339());

        let mut feed = String::new();
        feed.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
        feed.push_str("<feed xmlns=\"http://www.w3.org/2005/Atom\">\n");
        feed.push_str(&format!("  <title>{}</title>\n", escape_xml(&config.title)));
        feed.push_str(&format!("  <link href=\"{}/atom.xml\" rel=\"self\"/>\n", base_url));
        feed.push_str(&format!("  <link href=\"{}/\"/>\n", base_url));
        feed.push_str(&format!("  <updated>{}</updated>\n", updated));
        feed.push_str(&format!("  <id>{}/</id>\n", base_url));
        feed.push_str(&format!(
            "  <author><name>{}</name></author>\n",
            escape_xml(&config.author)
        ));

        for post in posts.iter().take(FEED_LIMIT) {
            let url = full_url_for(config, &post.href());
            let published = date_xml(&post.metadata.published_at);
            let content = strip_invalid_xml_chars(&absolutize_urls(&post.html, base_url));

            feed.push_str("  <entry>\n");
            feed.push_str(&format!(
                "    <title>{}</title>\n",
                escape_xml(&post.metadata.title)
            ));
            feed.push_str(&format!("    <link href=\"{}\"/>\n", url));
            feed.push_str(&format!("    <id>{}</id>\n", url));
            feed.push_str(&format!("    <published>{}</published>\n", published));
            feed.push_str(&format!("    <updated>{}</updated>\n", published));
            if let Some(summary) = &post.metadata.summary {
                feed.push_str(&format!("    <summary>{}</summary>\n", escape_xml(summary)));
            }
            feed.push_str(&format!(
                "    <content type=\"html\"><![CDATA[{}]]></content>\n",
                content.replace("]]>", "]]]]><![CDATA[>")
            ));
            feed.push_str("  </entry>\n");
        }

        feed.push_str("</feed>\n");

        self.write_output("atom.xml", &feed)?;
        tracing::info!("Generated atom.xml");
        Ok(())
    }

    /// Generate sitemap.xml for the landing page, blog index and posts
    fn generate_sitemap(&self, posts: &[&Post]) -> Result<()> {
        let config = &self.folio.config;
        let mut urls: Vec<(String, Option<String>)> = vec![
            (full_url_for(config, "/"), None),
            (full_url_for(config, "/blog"), None),
        ];
        urls.extend(posts.iter().map(|p| {
            (
                full_url_for(config, &p.href()),
                Some(date_iso(&p.metadata.published_at)),
            )
        }));

        let mut xml = String::new();
        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");
        for (loc, lastmod) in urls {
            xml.push_str("  <url>\n");
            xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&loc)));
            if let Some(lastmod) = lastmod {
                xml.push_str(&format!("    <lastmod>{}</lastmod>\n", lastmod));
            }
            xml.push_str("  </url>\n");
        }
        xml.push_str("</urlset>\n");

        self.write_output("sitemap.xml", &xml)?;
        tracing::info!("Generated sitemap.xml");
        Ok(())
    }

    /// Copy non-markdown files (images, résumé, ...) from the source dir
    fn copy_source_assets(&self) -> Result<()> {
        let source_dir = &self.folio.source_dir;
        if !source_dir.exists() {
            return Ok(());
        }

        let mut copied = 0;
        for entry in WalkDir::new(source_dir)
            .follow_links(true)
            .into_iter()
            .filter_entry(|e| !is_hidden_or_special(e.path(), source_dir))
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            if matches!(
                path.extension().and_then(|e| e.to_str()),
                Some("md" | "markdown" | "mdx")
            ) {
                continue;
            }

            let relative = path.strip_prefix(source_dir)?;
            let dest = self.folio.public_dir.join(relative);
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(path, &dest)
                .with_context(|| format!("Failed to copy {:?} to {:?}", path, dest))?;
            copied += 1;
        }

        tracing::debug!("Copied {} assets", copied);
        Ok(())
    }
}

/// `_posts`, `_drafts` and dotfiles directly under the source dir are not assets
fn is_hidden_or_special(path: &Path, source_dir: &Path) -> bool {
    path.strip_prefix(source_dir)
        .ok()
        .and_then(|rel| rel.components().next())
        .and_then(|c| c.as_os_str().to_str())
        .map(|first| first.starts_with('_') || first.starts_with('.'))
        .unwrap_or(false)
}
