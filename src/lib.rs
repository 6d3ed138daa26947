//! Locale-aware content resolution and routing for a localized MDX blog.
//!
//! - [`i18n`]: the closed [`Locale`](i18n::Locale) set and total locale parsing
//! - [`routing`]: localized hrefs and request path resolution
//! - [`content`]: fetching raw documents from the content store
//! - [`thumbnail`]: preview image extraction
//! - [`preferences`]: persisted, observable locale/theme preferences

pub mod config;
pub mod content;
pub mod error;
pub mod i18n;
pub mod preferences;
pub mod retry;
pub mod routing;
pub mod telemetry;
pub mod thumbnail;

pub use content::{ContentClient, ContentQuery, Page, RawDocument};
pub use error::{ContentError, PreferenceError};
pub use i18n::{parse_locale, Locale};
pub use routing::{build_localized_href, resolve_route, RouteResolution};
pub use thumbnail::extract_thumbnail;
