//! Locale-prefixed paths.

use crate::i18n::Locale;

/// A site path split into its locale and the locale-free segments after it.
///
/// Segments never start with a locale: building from `/ko/posts/a` with any
/// locale yields the segments `["posts", "a"]`, so re-localizing a path can
/// never stack prefixes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedPath {
    locale: Locale,
    segments: Vec<String>,
}

impl LocalizedPath {
    /// Build a path for `locale`, dropping any locale segment already on `path`.
    ///
    /// Empty segments (`//`, trailing `/`) are discarded. Query strings and
    /// fragments are not expected here; see [`split_suffix`].
    pub fn new(locale: Locale, path: &str) -> Self {
        let path = match split_locale_prefix(path) {
            Some((_, rest)) => rest,
            None => path,
        };

        Self {
            locale,
            segments: path
                .split('/')
                .filter(|segment| !segment.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    /// Parse a path whose first segment is a supported locale.
    ///
    /// Returns `None` when the path carries no locale prefix.
    pub fn parse(path: &str) -> Option<Self> {
        let (locale, _) = split_locale_prefix(path)?;
        Some(Self::new(locale, path))
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The locale-independent slug (segments joined with `/`).
    pub fn slug(&self) -> String {
        self.segments.join("/")
    }

    /// The same path under another locale.
    pub fn with_locale(&self, locale: Locale) -> Self {
        Self {
            locale,
            segments: self.segments.clone(),
        }
    }

    /// Absolute href: `/{locale}` or `/{locale}/{segments}`.
    pub fn to_href(&self) -> String {
        if self.segments.is_empty() {
            format!("/{}", self.locale)
        } else {
            format!("/{}/{}", self.locale, self.slug())
        }
    }
}

/// Split a leading supported-locale segment off `path`.
///
/// Accepts the segment with or without a leading `/`. The returned remainder
/// is whatever follows the segment: empty, or starting with `/`, `?` or `#`.
/// `/kor/x` and `/en-US` are not locale-prefixed.
pub(crate) fn split_locale_prefix(path: &str) -> Option<(Locale, &str)> {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    let end = trimmed.find(['/', '?', '#']).unwrap_or(trimmed.len());
    let locale = trimmed[..end].parse().ok()?;
    Some((locale, &trimmed[end..]))
}

/// Split `path` at the first `?` or `#`, returning `(path, suffix)`.
pub(crate) fn split_suffix(path: &str) -> (&str, &str) {
    match path.find(['?', '#']) {
        Some(idx) => path.split_at(idx),
        None => (path, ""),
    }
}
