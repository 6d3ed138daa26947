//! Request path resolution: render a localized document or redirect.

use crate::i18n::Locale;
use crate::routing::path::{split_suffix, LocalizedPath};

/// What to do with an incoming request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteResolution {
    /// The path is localized; render `slug` in `locale`.
    ///
    /// `slug` is empty for the locale's index page.
    Render { locale: Locale, slug: String },
    /// The path has no valid locale; send the client to `location`.
    Redirect { location: String },
}

/// Resolve `path` against the supported locales.
///
/// - `/` redirects to `/{preferred}`
/// - `/{locale}/…` with a supported locale renders
/// - any other path redirects to itself nested under `/{preferred}`, so
///   `/ai/overview` becomes `/{preferred}/ai/overview` and an unsupported
///   locale such as `/fr/about` becomes `/{preferred}/fr/about` (a 404)
///
/// Redirect targets are rebuilt from non-empty segments, so `//host` style
/// paths can never turn into protocol-relative URLs. Query strings and
/// fragments are carried over to redirects.
pub fn resolve_route(path: &str, preferred: Locale) -> RouteResolution {
    let (path, suffix) = split_suffix(path);

    if let Some(localized) = LocalizedPath::parse(path) {
        return RouteResolution::Render {
            locale: localized.locale(),
            slug: localized.slug(),
        };
    }

    let location = LocalizedPath::new(preferred, path).to_href();
    RouteResolution::Redirect {
        location: format!("{}{}", location, suffix),
    }
}
