//! Locale type: closed set of supported content locales.
//!
//! Two ways in:
//! - [`parse_locale`] / [`parse_locale_value`] are total. Anything that is not
//!   a supported code falls back to [`Locale::default`].
//! - [`str::parse`] (`FromStr`) is strict, for callers that must know whether
//!   the input was actually a locale (route resolution).

use crate::i18n::{LocaleConfig, LocaleRegistry};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A supported content locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English (fallback)
    #[default]
    En,
    /// Korean
    Ko,
    /// Japanese
    Ja,
}

/// Returned by the strict parser when the input is not a supported code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported locale: '{0}'")]
pub struct UnsupportedLocale(pub String);

impl Locale {
    /// Every supported locale, in registry order.
    pub const ALL: [Locale; 3] = [Locale::En, Locale::Ko, Locale::Ja];

    /// The code used in URL path segments and content directories.
    pub const fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ko => "ko",
            Locale::Ja => "ja",
        }
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            Locale::En => 0,
            Locale::Ko => 1,
            Locale::Ja => 2,
        }
    }

    /// Registry metadata for this locale.
    pub fn config(self) -> &'static LocaleConfig {
        LocaleRegistry::get().config(self)
    }

    /// English name of the language (e.g., "Japanese").
    pub fn name(self) -> &'static str {
        self.config().name
    }

    /// Native name of the language (e.g., "日本語").
    pub fn native_name(self) -> &'static str {
        self.config().native_name
    }

    /// BCP-47 tag (e.g., "ja-JP").
    pub fn bcp47(self) -> &'static str {
        self.config().bcp47
    }

    /// Check if this is the fallback locale.
    pub fn is_default(self) -> bool {
        self.config().is_default
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = UnsupportedLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LocaleRegistry::get()
            .get_by_code(s)
            .map(|config| config.locale)
            .ok_or_else(|| UnsupportedLocale(s.to_string()))
    }
}

/// Parse an optional string into a locale, falling back to the default.
///
/// Never fails: absent input, unknown codes and differently-cased codes all
/// yield [`Locale::default`].
pub fn parse_locale<S: AsRef<str>>(input: Option<S>) -> Locale {
    input
        .and_then(|s| s.as_ref().parse().ok())
        .unwrap_or_default()
}

/// Parse an arbitrary JSON value into a locale, falling back to the default.
///
/// Only a JSON string holding a supported code is accepted; `null`, numbers,
/// arrays and objects yield [`Locale::default`].
pub fn parse_locale_value(input: &serde_json::Value) -> Locale {
    parse_locale(input.as_str())
}
