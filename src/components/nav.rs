//! Navigation bar

use anyhow::Result;
use serde::Serialize;
use tera::Context;

use crate::config::SiteConfig;
use crate::templates::TemplateRenderer;

/// Where a link opens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LinkTarget {
    SameWindow,
    NewWindow,
}

impl LinkTarget {
    /// Map an HTML `target` attribute value
    pub fn from_attr(target: &str) -> Self {
        match target.trim() {
            "_blank" | "new" | "new-window" => Self::NewWindow,
            _ => Self::SameWindow,
        }
    }

    /// The HTML `target` attribute, if any
    pub fn as_attr(self) -> Option<&'static str> {
        match self {
            Self::SameWindow => None,
            Self::NewWindow => Some("_blank"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NavItem {
    pub path: String,
    pub label: String,
    pub target: LinkTarget,
    /// Symbolic icon name, rendered as an `icon-<name>` class
    pub icon: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScheduleLink {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Navbar {
    pub items: Vec<NavItem>,
    pub schedule: Option<ScheduleLink>,
}

impl Navbar {
    /// Build the bar from configuration, keeping the configured order
    pub fn from_config(config: &SiteConfig) -> Self {
        let items = config
            .nav
            .iter()
            .map(|(path, item)| NavItem {
                path: path.clone(),
                label: if item.name.is_empty() {
                    path.clone()
                } else {
                    item.name.clone()
                },
                target: LinkTarget::from_attr(&item.target),
                icon: if item.icon.is_empty() {
                    slug::slugify(&item.name)
                } else {
                    item.icon.clone()
                },
            })
            .collect();

        let schedule = config
            .schedule
            .as_ref()
            .filter(|s| !s.url.is_empty())
            .map(|s| ScheduleLink {
                label: if s.label.is_empty() {
                    "Schedule a call".to_string()
                } else {
                    s.label.clone()
                },
                url: s.url.clone(),
            });

        Self { items, schedule }
    }

    pub fn render(&self, renderer: &TemplateRenderer) -> Result<String> {
        let mut context = Context::new();
        context.insert("nav", self);
        renderer.render("partials/nav.html", &context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{NavItemConfig, ScheduleLinkConfig};

    fn config_with_nav() -> SiteConfig {
        let mut config = SiteConfig::default();
        config.nav.clear();
        for (path, name, target) in [
            ("/", "home", ""),
            ("/blog", "blog", ""),
            ("https://www.github.com/mstronge", "github", "_blank"),
            ("/matthew_stronge_resume.pdf", "resume", "_blank"),
            ("mailto:me@matthewstronge.com", "mail", "_blank"),
        ] {
            config.nav.insert(
                path.to_string(),
                NavItemConfig {
                    name: name.to_string(),
                    target: target.to_string(),
                    icon: String::new(),
                },
            );
        }
        config
    }

    #[test]
    fn test_from_config_keeps_order() {
        let nav = Navbar::from_config(&config_with_nav());
        let paths: Vec<_> = nav.items.iter().map(|i| i.path.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                "/",
                "/blog",
                "https://www.github.com/mstronge",
                "/matthew_stronge_resume.pdf",
                "mailto:me@matthewstronge.com"
            ]
        );
        assert_eq!(nav.items[0].target, LinkTarget::SameWindow);
        assert_eq!(nav.items[2].target, LinkTarget::NewWindow);
        assert_eq!(nav.items[2].icon, "github");
        assert!(nav.schedule.is_none());
    }

    #[test]
    fn test_renders_one_link_per_item() {
        let renderer = TemplateRenderer::new().unwrap();
        let nav = Navbar::from_config(&config_with_nav());
        let html = nav.render(&renderer).unwrap();

        assert_eq!(html.matches(r#"class="nav-link""#).count(), nav.items.len());
        for item in &nav.items {
            let expected = match item.target.as_attr() {
                Some(target) => format!(r#"href="{}" target="{}""#, item.path, target),
                None => format!(r#"href="{}" aria-label"#, item.path),
            };
            assert_eq!(html.matches(&expected).count(), 1, "missing {}", expected);
        }
    }

    #[test]
    fn test_schedule_link() {
        let mut config = config_with_nav();
        config.schedule = Some(ScheduleLinkConfig {
            label: String::new(),
            url: "https://cal.com/matthewstronge?redirect=false".to_string(),
        });
        let renderer = TemplateRenderer::new().unwrap();
        let html = Navbar::from_config(&config).render(&renderer).unwrap();
        assert!(html.contains(r#"class="nav-cta""#));
        assert!(html.contains("Schedule a call"));
        assert_eq!(html.matches(r#"class="nav-link""#).count(), 5);
    }

    #[test]
    fn test_link_target_from_attr() {
        assert_eq!(LinkTarget::from_attr("_blank"), LinkTarget::NewWindow);
        assert_eq!(LinkTarget::from_attr(""), LinkTarget::SameWindow);
        assert_eq!(LinkTarget::from_attr("_self"), LinkTarget::SameWindow);
    }

    #[test]
    fn test_urls_escaped_in_attributes() {
        let mut config = SiteConfig::default();
        config.nav.clear();
        config.nav.insert(
            r#"/search?q="rust"&page=2"#.to_string(),
            NavItemConfig {
                name: "search".to_string(),
                ..NavItemConfig::default()
            },
        );
        config.schedule = Some(ScheduleLinkConfig {
            label: "Book".to_string(),
            url: r#"https://cal.com/me?x="y""#.to_string(),
        });
        let renderer = TemplateRenderer::new().unwrap();
        let html = Navbar::from_config(&config).render(&renderer).unwrap();
        assert!(html.contains(r#"href="/search?q=&quot;rust&quot;&amp;page=2""#));
        assert!(html.contains(r#"href="https://cal.com/me?x=&quot;y&quot;""#));
    }

    #[test]
    fn test_labels_visible_with_distinct_icons() {
        let renderer = TemplateRenderer::new().unwrap();
        let html = Navbar::from_config(&config_with_nav()).render(&renderer).unwrap();
        assert!(html.contains(r#"<span class="nav-label">blog</span>"#));
        assert!(html.contains("icon icon-home"));
        assert!(html.contains("icon icon-github"));

        let css = renderer.render("style.css", &Context::new()).unwrap();
        assert!(!css.contains("clip: rect"));
        assert!(css.contains(".icon-home::before"));
        assert!(css.contains(".icon-blog::before"));
    }
}
