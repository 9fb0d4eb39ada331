//! Create a new post

use anyhow::{bail, Result};
use std::fs;
use std::path::PathBuf;

use crate::Folio;

const DEFAULT_SCAFFOLD: &str = "---\ntitle: {{ title }}\npublishedAt: {{ date }}\n---\n";

/// Create a new post from `scaffolds/post.md`, returning its path
pub fn create_post(folio: &Folio, title: &str, path: Option<&str>) -> Result<PathBuf> {
    let today = chrono::Local::now().format("%Y-%m-%d").to_string();

    let name = match path {
        Some(p) => p.trim_end_matches(".md").to_string(),
        None => slug::slugify(title),
    };
    if name.is_empty() {
        bail!("Cannot derive a file name from title {:?}", title);
    }
    // Posts live directly in `_posts`; the slug is the file stem
    if name.contains(['/', '\\']) || name == "." || name == ".." {
        bail!("Post path must be a plain file name: {:?}", name);
    }

    let posts_dir = folio.posts_dir();
    fs::create_dir_all(&posts_dir)?;

    let file_path = posts_dir.join(format!("{}.md", name));
    if file_path.exists() {
        bail!("File already exists: {:?}", file_path);
    }

    let scaffold_path = folio.base_dir.join("scaffolds/post.md");
    let scaffold = if scaffold_path.exists() {
        fs::read_to_string(&scaffold_path)?
    } else {
        DEFAULT_SCAFFOLD.to_string()
    };

    // Quote the title so colons and the like stay valid YAML
    let quoted_title = serde_yaml::to_string(title)?;
    let content = scaffold
        .replace("{{ title }}", quoted_title.trim_end())
        .replace("{{ date }}", &today);

    fs::write(&file_path, content)?;
    tracing::info!("Created: {:?}", file_path);

    Ok(file_path)
}
