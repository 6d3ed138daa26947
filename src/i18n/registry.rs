//! Locale registry: static metadata for every supported locale.
//!
//! The registry is built once on first access (`OnceLock`) from
//! [`Locale::ALL`], so its entries are always in the same order as the enum
//! variants and can be indexed by them directly.

use crate::i18n::Locale;
use std::sync::OnceLock;

/// Metadata for a supported locale.
#[derive(Debug, Clone)]
pub struct LocaleConfig {
    /// The locale this entry describes
    pub locale: Locale,

    /// Path segment / content directory code (e.g., "en", "ko")
    pub code: &'static str,

    /// English name of the language (e.g., "Korean")
    pub name: &'static str,

    /// Native name of the language (e.g., "한국어")
    pub native_name: &'static str,

    /// BCP-47 tag used for `<html lang>` and date formatting (e.g., "ko-KR")
    pub bcp47: &'static str,

    /// Whether this is the fallback locale (exactly one entry)
    pub is_default: bool,
}

/// Process-wide, immutable table of supported locales.
pub struct LocaleRegistry {
    locales: Vec<LocaleConfig>,
}

static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

impl LocaleRegistry {
    /// Get the global registry, initializing it on first call.
    pub fn get() -> &'static LocaleRegistry {
        REGISTRY.get_or_init(|| LocaleRegistry {
            locales: Locale::ALL.iter().map(|&locale| describe(locale)).collect(),
        })
    }

    /// Metadata for a locale.
    pub fn config(&self, locale: Locale) -> &LocaleConfig {
        &self.locales[locale.index()]
    }

    /// Look up a locale entry by its exact code.
    ///
    /// # Returns
    /// * `Some(&LocaleConfig)` if the code is supported
    /// * `None` otherwise (codes are case-sensitive)
    pub fn get_by_code(&self, code: &str) -> Option<&LocaleConfig> {
        self.locales.iter().find(|config| config.code == code)
    }

    /// All supported locales in declaration order.
    pub fn list_all(&self) -> &[LocaleConfig] {
        &self.locales
    }

    /// The fallback locale entry.
    pub fn default_config(&self) -> &LocaleConfig {
        self.config(Locale::default())
    }

    /// Check if a code names a supported locale.
    pub fn is_supported(&self, code: &str) -> bool {
        self.get_by_code(code).is_some()
    }
}

fn describe(locale: Locale) -> LocaleConfig {
    let (name, native_name, bcp47) = match locale {
        Locale::En => ("English", "English", "en-US"),
        Locale::Ko => ("Korean", "한국어", "ko-KR"),
        Locale::Ja => ("Japanese", "日本語", "ja-JP"),
    };

    LocaleConfig {
        locale,
        code: locale.code(),
        name,
        native_name,
        bcp47,
        is_default: locale == Locale::default(),
    }
}
