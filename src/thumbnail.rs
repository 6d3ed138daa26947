//! Thumbnail extraction from raw Markdown/MDX source.

use regex::Regex;
use std::sync::OnceLock;

/// `![alt](url)`; alt may be empty and may hold one level of `[...]`, url is
/// everything up to the first `)`.
fn markdown_image() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"!\[(?:[^\[\]]|\[[^\[\]]*\])*\]\(([^)]*)\)")
            .expect("markdown image pattern is valid")
    })
}

/// `<img … src="url" …>` or `src='url'`, case-insensitive tag and attribute.
/// Quoted values before `src` may contain `>`.
fn html_image() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?i)<img\b(?:[^>"']|"[^"]*"|'[^']*')*?\ssrc\s*=\s*(?:"([^"]*)"|'([^']*)')"#)
            .expect("html image pattern is valid")
    })
}

/// Find the preview image of a document.
///
/// Markdown images take priority over HTML `<img>` tags regardless of where
/// each appears; within a syntax the first match wins. The URL is trimmed but
/// otherwise returned verbatim (no decoding).
pub fn extract_thumbnail(content: &str) -> Option<String> {
    if let Some(caps) = markdown_image().captures(content) {
        return caps.get(1).map(|url| url.as_str().trim().to_string());
    }

    html_image()
        .captures(content)
        .and_then(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|url| url.as_str().trim().to_string())
}
