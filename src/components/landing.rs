//! Landing page composition

use anyhow::Result;
use serde::Serialize;

use super::posts::PostSummary;
use crate::config::{ShowcaseEntry, SiteConfig};
use crate::content::MarkdownRenderer;

/// Profile header
#[derive(Debug, Clone, Serialize)]
pub struct ProfileView {
    pub name: String,
    pub image: Option<String>,
    pub tagline: String,
    pub bio_html: String,
}

/// Everything the landing page shows, in display order
#[derive(Debug, Clone, Serialize)]
pub struct LandingPage {
    pub profile: ProfileView,
    pub posts: Vec<PostSummary>,
    pub projects: Vec<ShowcaseEntry>,
    pub companies: Vec<ShowcaseEntry>,
    pub contributions: Vec<ShowcaseEntry>,
}

impl LandingPage {
    /// Compose the landing page from config and the already sorted post list.
    ///
    /// `home_posts` limits how many summaries are shown; 0 keeps all.
    pub fn compose(
        config: &SiteConfig,
        summaries: &[PostSummary],
        markdown: &MarkdownRenderer,
    ) -> Result<Self> {
        let profile = &config.profile;
        let name = if profile.name.is_empty() {
            config.author.clone()
        } else {
            profile.name.clone()
        };

        let limit = match config.home_posts {
            0 => summaries.len(),
            n => n.min(summaries.len()),
        };

        Ok(Self {
            profile: ProfileView {
                name,
                image: profile.image.clone(),
                tagline: profile.tagline.clone(),
                bio_html: markdown.render(&profile.bio)?,
            },
            posts: summaries[..limit].to_vec(),
            projects: config.projects.clone(),
            companies: config.companies.clone(),
            contributions: config.contributions.clone(),
        })
    }
}
