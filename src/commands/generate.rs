//! Generate static files

use anyhow::Result;
use notify::Watcher;
use std::sync::mpsc::channel;
use std::time::{Duration, Instant};

use crate::content::PostStore;
use crate::generator::Generator;
use crate::Folio;

/// Generate the static site
pub fn run(folio: &Folio) -> Result<()> {
    let start = Instant::now();

    let posts = PostStore::new(folio).get_all_posts()?;
    tracing::info!("Loaded {} posts", posts.len());

    Generator::new(folio)?.generate(&posts)?;

    tracing::info!("Generated in {:.2}s", start.elapsed().as_secs_f64());
    Ok(())
}

/// Watch the source directory and config, regenerating on change
pub async fn watch(folio: &Folio) -> Result<()> {
    let (tx, rx) = channel();

    let mut watcher = notify::recommended_watcher(move |res| {
        if let Ok(event) = res {
            let _ = tx.send(event);
        }
    })?;

    watcher.watch(&folio.source_dir, notify::RecursiveMode::Recursive)?;
    let config_path = folio.config_path();
    if config_path.exists() {
        watcher.watch(&config_path, notify::RecursiveMode::NonRecursive)?;
    }

    tracing::info!("Watching for changes. Press Ctrl+C to stop.");

    let mut last_rebuild = Instant::now();

    loop {
        match rx.recv_timeout(Duration::from_millis(100)) {
            Ok(_event) => {
                if last_rebuild.elapsed() > Duration::from_millis(500) {
                    tracing::info!("File changed, regenerating...");
                    // Config edits must be picked up too
                    let result = Folio::new(&folio.base_dir).and_then(|fresh| run(&fresh));
                    if let Err(e) = result {
                        tracing::error!("Generation failed: {:#}", e);
                    }
                    last_rebuild = Instant::now();
                }
            }
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_run_fails_without_posts_dir() {
        let dir = TempDir::new().unwrap();
        let folio = Folio::new(dir.path()).unwrap();
        let err = run(&folio).unwrap_err();
        assert!(err.to_string().contains("posts directory not found"));
        assert!(!folio.public_dir.join("index.html").exists());
    }

    #[test]
    fn test_run_with_empty_posts_dir() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("source/_posts")).unwrap();
        let folio = Folio::new(dir.path()).unwrap();
        run(&folio).unwrap();

        let blog = fs::read_to_string(folio.public_dir.join("blog/index.html")).unwrap();
        assert!(blog.contains("Nothing here yet."));
    }
}
