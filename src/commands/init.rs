//! Initialize a new site

use anyhow::{bail, Result};
use std::fs;
use std::path::Path;

use crate::CONFIG_FILE;

const CONFIG_TEMPLATE: &str = r#"# folio configuration

# Site
title: My Portfolio
description: ''
author: John Doe
language: en
url: http://example.com

# Directory
source_dir: source
public_dir: public

# Writing
render_drafts: false
highlight:
  enable: true
  theme: base16-ocean.dark
  line_number: false

# Blog listing
date_format: MMMM D, YYYY
words_per_minute: 200
home_posts: 0

# Landing page
profile:
  name: John Doe
  image: /images/me.png
  tagline: Software engineer.
  bio: |
    I build things. *Sometimes* I write about them.

projects: []
#  - title: My Project
#    description: What it does
#    url: https://github.com/me/project

companies: []
contributions: []

# Navigation (order is preserved; target _blank opens a new window)
nav:
  /:
    name: home
    icon: home
  /blog:
    name: blog
    icon: rss
  https://github.com/me:
    name: github
    target: _blank
    icon: github
  mailto:me@example.com:
    name: mail
    target: _blank
    icon: mail

# schedule:
#   label: Schedule a call
#   url: https://cal.com/me

# giscus comments, one thread per post
comments:
  enable: false
  repo: me/site
  repo_id: ''
  category: Announcements
  category_id: ''
  reactions_enabled: true
  emit_metadata: false
  input_position: top
  theme: dark
  lang: en
  loading: lazy
"#;

const POST_SCAFFOLD: &str = r#"---
title: {{ title }}
publishedAt: {{ date }}
summary: ''
---
"#;

/// Initialize a new site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    let config_path = target_dir.join(CONFIG_FILE);
    if config_path.exists() {
        bail!("{:?} already contains a site", target_dir);
    }

    fs::create_dir_all(target_dir.join("source/_posts"))?;
    fs::create_dir_all(target_dir.join("source/images"))?;
    fs::create_dir_all(target_dir.join("scaffolds"))?;

    fs::write(&config_path, CONFIG_TEMPLATE)?;
    fs::write(target_dir.join("scaffolds/post.md"), POST_SCAFFOLD)?;

    let today = chrono::Local::now().format("%Y-%m-%d");
    let sample_post = format!(
        r#"---
title: Hello World
publishedAt: {}
summary: The first post on this site.
---

Welcome! This post lives in `source/_posts/hello-world.md`.

## Writing posts

Create a new post with:

```bash
$ folio new "My New Post"
```

## Previewing

```bash
$ folio server
```
"#,
        today
    );
    fs::write(target_dir.join("source/_posts/hello-world.md"), sample_post)?;

    tracing::debug!("Scaffolded site in {:?}", target_dir);
    Ok(())
}
