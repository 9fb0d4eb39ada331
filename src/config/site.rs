//! Site configuration (_config.yml)

use anyhow::Result;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub author: String,
    pub language: String,

    // URL
    pub url: String,

    // Directory
    pub source_dir: String,
    pub public_dir: String,

    // Writing
    pub render_drafts: bool,
    #[serde(default)]
    pub highlight: HighlightConfig,

    // Blog listing
    pub date_format: String,
    pub words_per_minute: usize,
    /// Number of posts shown on the landing page (0 shows all)
    pub home_posts: usize,

    // Landing page
    #[serde(default)]
    pub profile: ProfileConfig,
    #[serde(default)]
    pub projects: Vec<ShowcaseEntry>,
    #[serde(default)]
    pub companies: Vec<ShowcaseEntry>,
    #[serde(default)]
    pub contributions: Vec<ShowcaseEntry>,

    /// Navigation bar, keyed by href. Key order is render order.
    #[serde(default)]
    pub nav: IndexMap<String, NavItemConfig>,
    /// Call-to-action link rendered at the end of the navigation bar
    pub schedule: Option<ScheduleLinkConfig>,

    // Comments
    #[serde(default)]
    pub comments: CommentsConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "My Portfolio".to_string(),
            description: String::new(),
            author: "John Doe".to_string(),
            language: "en".to_string(),

            url: "http://example.com".to_string(),

            source_dir: "source".to_string(),
            public_dir: "public".to_string(),

            render_drafts: false,
            highlight: HighlightConfig::default(),

            date_format: "MMMM D, YYYY".to_string(),
            words_per_minute: 200,
            home_posts: 0,

            profile: ProfileConfig::default(),
            projects: Vec::new(),
            companies: Vec::new(),
            contributions: Vec::new(),

            nav: default_nav(),
            schedule: None,

            comments: CommentsConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        tracing::debug!("Loaded site config from {:?}", path.as_ref());
        Ok(config)
    }
}

fn default_nav() -> IndexMap<String, NavItemConfig> {
    let mut nav = IndexMap::new();
    nav.insert(
        "/".to_string(),
        NavItemConfig {
            name: "home".to_string(),
            target: String::new(),
            icon: "home".to_string(),
        },
    );
    nav.insert(
        "/blog".to_string(),
        NavItemConfig {
            name: "blog".to_string(),
            target: String::new(),
            icon: "rss".to_string(),
        },
    );
    nav
}

/// One navigation entry as written in _config.yml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NavItemConfig {
    pub name: String,
    /// HTML link target; `_blank` opens a new window
    pub target: String,
    pub icon: String,
}

/// "Schedule a call" style link
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleLinkConfig {
    pub label: String,
    pub url: String,
}

/// Profile header on the landing page
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    pub name: String,
    pub image: Option<String>,
    pub tagline: String,
    /// Markdown biography
    pub bio: String,
}

/// A project, company or open-source contribution on the landing page
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowcaseEntry {
    pub title: String,
    pub description: String,
    pub url: Option<String>,
    pub image: Option<String>,
    pub role: Option<String>,
}

/// giscus settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentsConfig {
    pub enable: bool,
    pub repo: String,
    pub repo_id: String,
    pub category: String,
    pub category_id: String,
    pub reactions_enabled: bool,
    pub emit_metadata: bool,
    pub input_position: String,
    pub theme: String,
    pub lang: String,
    pub loading: String,
    /// Binds every page to this single thread when set
    pub shared_term: Option<String>,
}

impl Default for CommentsConfig {
    fn default() -> Self {
        Self {
            enable: false,
            repo: String::new(),
            repo_id: String::new(),
            category: "Announcements".to_string(),
            category_id: String::new(),
            reactions_enabled: true,
            emit_metadata: false,
            input_position: "top".to_string(),
            theme: "dark".to_string(),
            lang: "en".to_string(),
            loading: "lazy".to_string(),
            shared_term: None,
        }
    }
}

/// Code highlighting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    pub enable: bool,
    pub theme: String,
    pub line_number: bool,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            enable: true,
            theme: "base16-ocean.dark".to_string(),
            line_number: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.words_per_minute, 200);
        assert_eq!(config.date_format, "MMMM D, YYYY");
        assert_eq!(config.nav.len(), 2);
        assert!(!config.comments.enable);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: Matthew Stronge
author: Matthew Stronge
url: https://matthewstronge.com
nav:
  /:
    name: home
    icon: home
  https://www.github.com/mstronge:
    name: github
    target: _blank
    icon: github
  mailto:me@matthewstronge.com:
    name: mail
    target: _blank
schedule:
  label: Schedule a call
  url: https://cal.com/matthewstronge?redirect=false
comments:
  enable: true
  repo: mstronge/matthewstronge
  repo_id: R_kgDONDM4GQ
  category_id: DIC_kwDONDM4Gc4Cjife
projects:
  - title: Folio
    description: This site
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "Matthew Stronge");
        let paths: Vec<_> = config.nav.keys().map(String::as_str).collect();
        assert_eq!(
            paths,
            vec![
                "/",
                "https://www.github.com/mstronge",
                "mailto:me@matthewstronge.com"
            ]
        );
        assert_eq!(config.nav["https://www.github.com/mstronge"].target, "_blank");
        assert_eq!(config.comments.repo, "mstronge/matthewstronge");
        assert_eq!(config.comments.category, "Announcements");
        assert_eq!(config.projects.len(), 1);
        assert_eq!(config.schedule.unwrap().label, "Schedule a call");
        // untouched fields keep defaults
        assert_eq!(config.words_per_minute, 200);
    }
}
