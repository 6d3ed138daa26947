use crate::error::ContentError;
use crate::i18n::Locale;
use crate::thumbnail::extract_thumbnail;
use chrono::{DateTime, Utc};

/// Unrendered Markdown/MDX source for one post in one locale.
///
/// Held only for the duration of a render; nothing here caches it.
#[derive(Debug, Clone, PartialEq)]
pub struct RawDocument {
    pub locale: Locale,
    pub slug: String,
    pub extension: String,
    /// URL the body was fetched from
    pub url: String,
    pub body: String,
    pub fetched_at: DateTime<Utc>,
}

impl RawDocument {
    /// First image of the body, if any.
    pub fn thumbnail(&self) -> Option<String> {
        extract_thumbnail(&self.body)
    }
}

/// Normalize a slug into `/`-joined segments.
///
/// Surrounding slashes are dropped. Empty slugs and slugs with empty, `.` or
/// `..` segments, or with `?`, `#` or `\`, are rejected.
pub(crate) fn normalize_slug(slug: &str) -> Result<String, ContentError> {
    let trimmed = slug.trim_matches('/');
    let invalid = || ContentError::InvalidSlug(slug.to_string());

    if trimmed.is_empty() {
        return Err(invalid());
    }

    for segment in trimmed.split('/') {
        if segment.is_empty()
            || segment == "."
            || segment == ".."
            || segment.contains(['?', '#', '\\'])
        {
            return Err(invalid());
        }
    }

    Ok(trimmed.to_string())
}

/// `{base_url}/{locale}/{slug}.{extension}`
pub(crate) fn document_url(
    base_url: &str,
    locale: Locale,
    slug: &str,
    extension: &str,
) -> Result<String, ContentError> {
    let slug = normalize_slug(slug)?;
    let extension = extension.trim_start_matches('.');

    Ok(format!(
        "{}/{}/{}.{}",
        base_url.trim_end_matches('/'),
        locale,
        slug,
        extension
    ))
}
