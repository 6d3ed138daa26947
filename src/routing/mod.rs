//! Locale-aware routing: localized paths, hrefs and request resolution.

mod href;
mod path;
mod resolve;

pub use href::{build_localized_href, is_external, post_href, switch_locale_href};
pub use path::LocalizedPath;
pub use resolve::{resolve_route, RouteResolution};
