//! Localized link building.

use crate::i18n::Locale;
use crate::routing::path::{split_locale_prefix, LocalizedPath};

/// Check if `href` is an absolute http(s) URL.
pub fn is_external(href: &str) -> bool {
    href.starts_with("http://") || href.starts_with("https://")
}

/// Rewrite an internal href so it points at `locale`.
///
/// Rules, first match wins:
/// 1. `http://…` / `https://…` is returned unchanged
/// 2. an href already starting with a supported locale segment is returned
///    in absolute form, unprefixed
/// 3. `/` (or an empty href) becomes `/{locale}`
/// 4. `/path` becomes `/{locale}/path`
/// 5. `path` becomes `/{locale}/path`
pub fn build_localized_href(raw_href: &str, locale: Locale) -> String {
    if is_external(raw_href) {
        return raw_href.to_string();
    }

    if split_locale_prefix(raw_href).is_some() {
        return if raw_href.starts_with('/') {
            raw_href.to_string()
        } else {
            format!("/{}", raw_href)
        };
    }

    match raw_href {
        "" | "/" => format!("/{}", locale),
        href if href.starts_with('/') => format!("/{}{}", locale, href),
        href => format!("/{}/{}", locale, href),
    }
}

/// Point `current_path` at `target`, replacing its locale segment if present.
///
/// Used by the language switcher: `/ko/posts/a?x=1` with `ja` becomes
/// `/ja/posts/a?x=1`. External URLs are returned unchanged.
pub fn switch_locale_href(current_path: &str, target: Locale) -> String {
    if is_external(current_path) {
        return current_path.to_string();
    }

    match split_locale_prefix(current_path) {
        Some((_, rest)) => format!("/{}{}", target, rest),
        None => build_localized_href(current_path, target),
    }
}

/// Href of `slug` under `locale`, e.g. `("posts/a", ko)` -> `/ko/posts/a`.
pub fn post_href(slug: &str, locale: Locale) -> String {
    LocalizedPath::new(locale, slug).to_href()
}
