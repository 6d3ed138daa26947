//! Locale support for localized content.
//!
//! - `registry`: static metadata for every supported locale
//! - `locale`: the closed `Locale` type and its total/strict parsers
//!
//! # Example
//!
//! ```rust
//! use blog_content::i18n::{parse_locale, Locale};
//!
//! assert_eq!(parse_locale(Some("ja")), Locale::Ja);
//! assert_eq!(parse_locale(Some("fr")), Locale::default());
//! ```

mod locale;
mod registry;

pub use locale::{parse_locale, parse_locale_value, Locale, UnsupportedLocale};
pub use registry::{LocaleConfig, LocaleRegistry};
