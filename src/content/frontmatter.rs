//! Front-matter parsing

use anyhow::{anyhow, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Front-matter data from a post
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub title: Option<String>,
    #[serde(rename = "publishedAt", alias = "date")]
    pub published_at: Option<String>,
    pub summary: Option<String>,
    pub image: Option<String>,
    /// Posts are published unless marked otherwise
    pub published: bool,

    /// Additional custom fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for FrontMatter {
    fn default() -> Self {
        Self {
            title: None,
            published_at: None,
            summary: None,
            image: None,
            published: true,
            extra: HashMap::new(),
        }
    }
}

impl FrontMatter {
    /// Split a document into front-matter and body.
    ///
    /// Supports YAML between `---` fences, `;;;`-fenced JSON and a bare
    /// leading JSON object. A document without front-matter yields the
    /// defaults and the whole input as body.
    pub fn parse(content: &str) -> Result<(Self, &str)> {
        let content = content.trim_start();

        if content.starts_with("---") {
            return Self::parse_yaml(content);
        }

        if content.starts_with(";;;") || content.starts_with('{') {
            return Self::parse_json(content);
        }

        Ok((FrontMatter::default(), content))
    }

    fn parse_yaml(content: &str) -> Result<(Self, &str)> {
        let rest = content[3..].trim_start_matches(['\n', '\r']);

        let Some(end_pos) = rest.find("\n---") else {
            return Err(anyhow!("Unterminated YAML front-matter"));
        };

        let yaml = &rest[..end_pos];
        let body = rest[end_pos + 4..].trim_start_matches(['\n', '\r']);

        if yaml.trim().is_empty() {
            return Ok((FrontMatter::default(), body));
        }

        let fm: FrontMatter = serde_yaml::from_str(yaml)
            .map_err(|e| anyhow!("Failed to parse YAML front-matter: {}", e))?;
        Ok((fm, body))
    }

    fn parse_json(content: &str) -> Result<(Self, &str)> {
        if let Some(rest) = content.strip_prefix(";;;") {
            let end_pos = rest
                .find(";;;")
                .ok_or_else(|| anyhow!("Unterminated JSON front-matter"))?;
            let fm: FrontMatter = serde_json::from_str(&rest[..end_pos])
                .map_err(|e| anyhow!("Failed to parse JSON front-matter: {}", e))?;
            let body = rest[end_pos + 3..].trim_start_matches(['\n', '\r']);
            return Ok((fm, body));
        }

        // Bare object: find the matching closing brace
        let mut depth = 0usize;
        let mut in_string = false;
        let mut escaped = false;
        for (i, c) in content.char_indices() {
            if in_string {
                match c {
                    _ if escaped => escaped = false,
                    '\\' => escaped = true,
                    '"' => in_string = false,
                    _ => {}
                }
                continue;
            }
            match c {
                '"' => in_string = true,
                '{' => depth += 1,
                '}' => {
                    depth -= 1;
                    if depth == 0 {
                        let fm: FrontMatter = serde_json::from_str(&content[..=i])
                            .map_err(|e| anyhow!("Failed to parse JSON front-matter: {}", e))?;
                        let body = content[i + 1..].trim_start_matches(['\n', '\r']);
                        return Ok((fm, body));
                    }
                }
                _ => {}
            }
        }

        Err(anyhow!("Invalid JSON front-matter"))
    }

    /// Parse `publishedAt` into a timestamp
    pub fn parse_published_at(&self) -> Option<NaiveDateTime> {
        self.published_at.as_deref().and_then(parse_date_string)
    }
}

/// Parse a date string in the formats people actually write in front-matter
pub(crate) fn parse_date_string(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();

    const DATETIME_FORMATS: [&str; 7] = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
    ];
    const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0);
        }
    }

    // Offset dates are normalized to UTC so posts compare by instant
    DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.naive_utc())
}
