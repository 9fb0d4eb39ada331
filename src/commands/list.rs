//! List site content

use anyhow::Result;

use crate::components::{render_post_list, ListOptions, Navbar};
use crate::content::PostStore;
use crate::Folio;

/// List site content by type
pub fn run(folio: &Folio, content_type: &str) -> Result<()> {
    for line in lines(folio, content_type)? {
        println!("{}", line);
    }
    Ok(())
}

/// The lines `run` prints
pub fn lines(folio: &Folio, content_type: &str) -> Result<Vec<String>> {
    let mut out = Vec::new();

    match content_type {
        "post" | "posts" => {
            let posts = PostStore::new(folio).get_all_posts()?;
            let summaries = render_post_list(&posts, &ListOptions::from_config(&folio.config));
            out.push(format!("Posts ({}):", summaries.len()));
            for s in summaries {
                out.push(format!(
                    "  {} - {} ({} min read) [{}]",
                    s.date, s.title, s.reading_time, s.href
                ));
            }
        }
        "nav" => {
            let nav = Navbar::from_config(&folio.config);
            out.push(format!("Navigation ({}):", nav.items.len()));
            for item in nav.items {
                let target = item.target.as_attr().unwrap_or("_self");
                out.push(format!("  {} -> {} ({})", item.label, item.path, target));
            }
            if let Some(schedule) = nav.schedule {
                out.push(format!("  {} -> {} (_blank)", schedule.label, schedule.url));
            }
        }
        _ => {
            anyhow::bail!("Unknown type: {}. Available: post, nav", content_type);
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_list_posts() {
        let dir = TempDir::new().unwrap();
        let posts = dir.path().join("source/_posts");
        fs::create_dir_all(&posts).unwrap();
        fs::write(posts.join("a.md"), "---\ntitle: A\npublishedAt: 2024-01-01\n---\none two\n").unwrap();
        fs::write(posts.join("b.md"), "---\ntitle: B\npublishedAt: 2024-02-01\n---\n").unwrap();

        let folio = Folio::new(dir.path()).unwrap();
        let out = lines(&folio, "post").unwrap();
        assert_eq!(
            out,
            vec![
                "Posts (2):".to_string(),
                "  February 1, 2024 - B (0 min read) [/blog/b]".to_string(),
                "  January 1, 2024 - A (1 min read) [/blog/a]".to_string(),
            ]
        );
    }

    #[test]
    fn test_list_nav_and_unknown() {
        let dir = TempDir::new().unwrap();
        let folio = Folio::new(dir.path()).unwrap();
        let out = lines(&folio, "nav").unwrap();
        assert_eq!(out[0], "Navigation (2):");
        assert_eq!(out[1], "  home -> / (_self)");
        assert!(lines(&folio, "tags").is_err());
    }
}
