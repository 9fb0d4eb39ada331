//! Blog post listing

use anyhow::Result;
use serde::Serialize;
use tera::Context;

use crate::config::SiteConfig;
use crate::content::Post;
use crate::helpers::{format_date, reading_time, DEFAULT_WORDS_PER_MINUTE};
use crate::templates::TemplateRenderer;

/// One row of the blog list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostSummary {
    pub slug: String,
    pub title: String,
    /// Publish date formatted without time of day
    pub date: String,
    /// Estimated minutes to read
    pub reading_time: usize,
    pub href: String,
    pub summary: Option<String>,
}

/// How summaries are derived from posts
#[derive(Debug, Clone)]
pub struct ListOptions {
    pub date_format: String,
    pub words_per_minute: usize,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            date_format: "MMMM D, YYYY".to_string(),
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
        }
    }
}

impl ListOptions {
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            date_format: config.date_format.clone(),
            words_per_minute: config.words_per_minute,
        }
    }
}

/// Posts ordered newest first. Posts sharing a date keep their input order.
pub fn sort_newest_first(posts: &[Post]) -> Vec<&Post> {
    let mut sorted: Vec<&Post> = posts.iter().collect();
    sorted.sort_by(|a, b| b.metadata.published_at.cmp(&a.metadata.published_at));
    sorted
}

/// Summarize a single post
pub fn summarize(post: &Post, options: &ListOptions) -> PostSummary {
    PostSummary {
        slug: post.slug.clone(),
        title: post.metadata.title.clone(),
        date: format_date(&post.metadata.published_at, &options.date_format),
        reading_time: reading_time(&post.content, options.words_per_minute),
        href: post.href(),
        summary: post.metadata.summary.clone(),
    }
}

/// Sort posts newest first and summarize each one
pub fn render_post_list(posts: &[Post], options: &ListOptions) -> Vec<PostSummary> {
    sort_newest_first(posts)
        .into_iter()
        .map(|post| summarize(post, options))
        .collect()
}

/// Render summaries as the HTML post list
pub fn render_html(summaries: &[PostSummary], renderer: &TemplateRenderer) -> Result<String> {
    let mut context = Context::new();
    context.insert("posts", summaries);
    renderer.render("partials/posts.html", &context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn post(slug: &str, date: NaiveDateTime, words: usize) -> Post {
        let mut p = Post::new(slug, slug.to_uppercase(), date);
        p.content = vec!["lorem"; words].join(" ");
        p
    }

    #[test]
    fn test_sorted_newest_first() {
        let posts = vec![
            post("old", at(2022, 1, 1), 10),
            post("new", at(2024, 6, 1), 10),
            post("mid", at(2023, 3, 15), 10),
        ];
        let list = render_post_list(&posts, &ListOptions::default());
        let slugs: Vec<_> = list.iter().map(|s| s.slug.as_str()).collect();
        assert_eq!(slugs, vec!["new", "mid", "old"]);
    }

    #[test]
    fn test_same_date_keeps_both() {
        let day = at(2024, 4, 9);
        let posts = vec![
            post("first", day, 10),
            post("second", day, 10),
            post("older", at(2020, 1, 1), 10),
        ];
        let list = render_post_list(&posts, &ListOptions::default());
        assert_eq!(list.len(), 3);
        assert_eq!(list.iter().filter(|s| s.slug == "first").count(), 1);
        assert_eq!(list.iter().filter(|s| s.slug == "second").count(), 1);
        // stable for ties
        assert_eq!(list[0].slug, "first");
        assert_eq!(list[1].slug, "second");
    }

    #[test]
    fn test_summary_fields() {
        let mut p = post("embracing-vim", at(2024, 4, 9), 250);
        p.metadata.summary = Some("Why I switched".to_string());
        let list = render_post_list(&[p], &ListOptions::default());

        assert_eq!(
            list[0],
            PostSummary {
                slug: "embracing-vim".to_string(),
                title: "EMBRACING-VIM".to_string(),
                date: "April 9, 2024".to_string(),
                reading_time: 2,
                href: "/blog/embracing-vim".to_string(),
                summary: Some("Why I switched".to_string()),
            }
        );
    }

    #[test]
    fn test_reading_time_edges() {
        let posts = vec![
            post("short", at(2024, 1, 3), 199),
            post("empty", at(2024, 1, 2), 0),
            post("exact", at(2024, 1, 1), 400),
        ];
        let list = render_post_list(&posts, &ListOptions::default());
        assert_eq!(list[0].reading_time, 1);
        assert_eq!(list[1].reading_time, 0);
        assert_eq!(list[2].reading_time, 2);
    }

    #[test]
    fn test_href_matches_slug() {
        let posts: Vec<Post> = ["a", "b-c", "2024-recap"]
            .iter()
            .enumerate()
            .map(|(i, slug)| post(slug, at(2024, 1, 1 + i as u32), 5))
            .collect();
        for summary in render_post_list(&posts, &ListOptions::default()) {
            assert_eq!(summary.href, format!("/blog/{}", summary.slug));
        }
    }

    #[test]
    fn test_custom_date_format() {
        let options = ListOptions {
            date_format: "YYYY-MM-DD".to_string(),
            ..ListOptions::default()
        };
        let list = render_post_list(&[post("x", at(2024, 4, 9), 1)], &options);
        assert_eq!(list[0].date, "2024-04-09");
    }

    #[test]
    fn test_render_html() {
        let renderer = TemplateRenderer::new().unwrap();
        let posts = vec![post("vim", at(2024, 4, 9), 250)];
        let html = render_html(&render_post_list(&posts, &ListOptions::default()), &renderer)
            .unwrap();
        assert!(html.contains(r#"href="/blog/vim""#));
        assert!(html.contains("posted on April 9, 2024 | (2 min read)"));
    }
}
