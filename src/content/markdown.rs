//! Markdown rendering with syntax highlighting and heading anchors

use anyhow::Result;
use pulldown_cmark::{
    html, CodeBlockKind, CowStr, Event, HeadingLevel, Options, Parser, Tag, TagEnd,
};
use syntect::highlighting::ThemeSet;
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

use crate::helpers::html_escape;

/// Highlighting state, absent when rendering plain code blocks
struct Highlighter {
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
    theme_name: String,
    line_numbers: bool,
}

/// Markdown renderer for post bodies and the profile bio
pub struct MarkdownRenderer {
    highlighter: Option<Highlighter>,
}

/// A heading whose id is only known once its text has been seen
struct PendingHeading<'a> {
    level: HeadingLevel,
    id: Option<CowStr<'a>>,
    classes: Vec<CowStr<'a>>,
    attrs: Vec<(CowStr<'a>, Option<CowStr<'a>>)>,
    text: String,
    inner: Vec<Event<'a>>,
}

impl MarkdownRenderer {
    /// Create a renderer with the default highlighting theme
    pub fn new() -> Self {
        Self::with_options("base16-ocean.dark", false)
    }

    /// Create with custom highlighting settings
    pub fn with_options(theme: &str, line_numbers: bool) -> Self {
        Self {
            highlighter: Some(Highlighter {
                syntax_set: SyntaxSet::load_defaults_newlines(),
                theme_set: ThemeSet::load_defaults(),
                theme_name: theme.to_string(),
                line_numbers,
            }),
        }
    }

    /// Create a renderer that leaves code blocks unhighlighted
    pub fn plain() -> Self {
        Self { highlighter: None }
    }

    /// Render markdown to HTML
    pub fn render(&self, markdown: &str) -> Result<String> {
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_SMART_PUNCTUATION
            | Options::ENABLE_HEADING_ATTRIBUTES
            | Options::ENABLE_GFM;
        let parser = Parser::new_ext(markdown, options);

        let mut events: Vec<Event> = Vec::new();
        let mut code_block: Option<(Option<String>, String)> = None;
        let mut heading: Option<PendingHeading> = None;

        for event in parser {
            match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    let lang = match kind {
                        CodeBlockKind::Fenced(lang) if !lang.is_empty() => {
                            // "rust,ignore" and friends
                            lang.split([',', ' ']).next().map(str::to_string)
                        }
                        _ => None,
                    };
                    code_block = Some((lang, String::new()));
                }
                Event::End(TagEnd::CodeBlock) => {
                    if let Some((lang, code)) = code_block.take() {
                        let html = self.highlight_code(&code, lang.as_deref());
                        events.push(Event::Html(CowStr::from(html)));
                    }
                }
                Event::Text(text) if code_block.is_some() => {
                    if let Some((_, code)) = code_block.as_mut() {
                        code.push_str(&text);
                    }
                }
                Event::Start(Tag::Heading {
                    level,
                    id,
                    classes,
                    attrs,
                }) => {
                    heading = Some(PendingHeading {
                        level,
                        id,
                        classes,
                        attrs,
                        text: String::new(),
                        inner: Vec::new(),
                    });
                }
                Event::End(TagEnd::Heading(_)) if heading.is_some() => {
                    if let Some(pending) = heading.take() {
                        push_heading(&mut events, pending);
                    }
                }
                other => match heading.as_mut() {
                    Some(pending) => {
                        if let Event::Text(t) | Event::Code(t) = &other {
                            pending.text.push_str(t);
                        }
                        pending.inner.push(other);
                    }
                    None => events.push(other),
                },
            }
        }

        let mut html_output = String::new();
        html::push_html(&mut html_output, events.into_iter());

        Ok(html_output)
    }

    /// Highlight a code block
    fn highlight_code(&self, code: &str, lang: Option<&str>) -> String {
        let lang = lang.unwrap_or("text");
        let class = html_escape(lang);
        let plain = || {
            format!(
                r#"<pre><code class="language-{}">{}</code></pre>"#,
                class,
                html_escape(code)
            )
        };

        let Some(hl) = &self.highlighter else {
            return plain();
        };

        let syntax = hl
            .syntax_set
            .find_syntax_by_token(lang)
            .or_else(|| hl.syntax_set.find_syntax_by_extension(lang))
            .unwrap_or_else(|| hl.syntax_set.find_syntax_plain_text());

        let Some(theme) = hl
            .theme_set
            .themes
            .get(&hl.theme_name)
            .or_else(|| hl.theme_set.themes.values().next())
        else {
            return plain();
        };

        match highlighted_html_for_string(code, &hl.syntax_set, syntax, theme) {
            Ok(highlighted) if hl.line_numbers => add_line_numbers(&highlighted, &class),
            Ok(highlighted) => format!(r#"<figure class="highlight {}">{}</figure>"#, class, highlighted),
            Err(e) => {
                tracing::debug!("Highlighting {} failed: {}", lang, e);
                plain()
            }
        }
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Emit a heading with an `id` and a self-link so sections can be linked to
fn push_heading<'a>(events: &mut Vec<Event<'a>>, pending: PendingHeading<'a>) {
    let id = pending
        .id
        .unwrap_or_else(|| CowStr::from(slug::slugify(&pending.text)));
    let anchor = format!(r##"<a href="#{}" class="anchor"></a>"##, html_escape(&id));

    events.push(Event::Start(Tag::Heading {
        level: pending.level,
        id: Some(id),
        classes: pending.classes,
        attrs: pending.attrs,
    }));
    events.push(Event::Html(CowStr::from(anchor)));
    events.extend(pending.inner);
    events.push(Event::End(TagEnd::Heading(pending.level)));
}

/// Wrap highlighted code in a gutter table
fn add_line_numbers(code: &str, lang: &str) -> String {
    let lines: Vec<&str> = code.lines().collect();
    let gutter: Vec<String> = (1..=lines.len())
        .map(|n| format!(r#"<span class="line-number">{}</span>"#, n))
        .collect();

    format!(
        r#"<figure class="highlight {}"><table><tr><td class="gutter"><pre>{}</pre></td><td class="code">{}</td></tr></table></figure>"#,
        lang,
        gutter.join("\n"),
        lines.join("\n")
    )
}
