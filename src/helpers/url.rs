//! URL helper functions

use crate::config::SiteConfig;

/// Generate a full URL including the domain
///
/// # Examples
/// ```ignore
/// full_url_for(&config, "/blog/vim") // -> "https://example.com/blog/vim"
/// ```
pub fn full_url_for(config: &SiteConfig, path: &str) -> String {
    if is_external(path) {
        return path.to_string();
    }
    format!(
        "{}/{}",
        config.url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Whether a link leaves the site
pub fn is_external(path: &str) -> bool {
    path.starts_with("http://")
        || path.starts_with("https://")
        || path.starts_with("//")
        || path.starts_with("mailto:")
}

/// Rewrite root-relative `href`/`src` attributes to absolute URLs.
/// Protocol-relative `//host/...` links are left alone.
pub fn absolutize_urls(html: &str, base_url: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let mut out = html.to_string();
    for attr in ["href=\"/", "src=\"/", "href='/", "src='/"] {
        out = prefix_root_relative(&out, attr, base);
    }
    out
}

fn prefix_root_relative(html: &str, attr: &str, base: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;
    while let Some(pos) = rest.find(attr) {
        let (head, tail) = rest.split_at(pos + attr.len());
        out.push_str(head);
        if !tail.starts_with('/') {
            // `head` ends with the leading slash; put the base in front of it
            out.truncate(out.len() - 1);
            out.push_str(base);
            out.push('/');
        }
        rest = tail;
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> SiteConfig {
        SiteConfig {
            url: "https://example.com/".to_string(),
            ..SiteConfig::default()
        }
    }

    #[test]
    fn test_full_url_for() {
        let config = test_config();
        assert_eq!(full_url_for(&config, "/blog/vim"), "https://example.com/blog/vim");
        assert_eq!(full_url_for(&config, ""), "https://example.com/");
        assert_eq!(
            full_url_for(&config, "https://x.com/someone"),
            "https://x.com/someone"
        );
    }

    #[test]
    fn test_is_external() {
        assert!(is_external("mailto:me@example.com"));
        assert!(is_external("https://cal.com/me"));
        assert!(!is_external("/blog"));
        assert!(!is_external("/resume.pdf"));
    }

    #[test]
    fn test_absolutize_urls() {
        let html = r#"<a href="/blog/vim">x</a><img src='/images/me.png'>"#;
        assert_eq!(
            absolutize_urls(html, "https://example.com/"),
            r#"<a href="https://example.com/blog/vim">x</a><img src='https://example.com/images/me.png'>"#
        );
    }

    #[test]
    fn test_absolutize_skips_protocol_relative() {
        let html = r#"<script src="//cdn.example.net/a.js"></script><a href="/">home</a><a href='//x.io/'>x</a>"#;
        assert_eq!(
            absolutize_urls(html, "https://example.com"),
            r#"<script src="//cdn.example.net/a.js"></script><a href="https://example.com/">home</a><a href='//x.io/'>x</a>"#
        );
    }
}
