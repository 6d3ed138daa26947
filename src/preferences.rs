//! User preferences (locale, theme) as an explicit, observable context.
//!
//! A [`PreferenceContext`] is created once by the host and handed to whatever
//! needs it. Values are persisted through a [`PreferenceStore`] and every
//! change is broadcast on a `tokio::sync::watch` channel.

use crate::config::Config;
use crate::error::PreferenceError;
use crate::i18n::Locale;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tokio::sync::watch;
use tracing::{debug, warn};

const LOCALE_KEY: &str = "locale";
const THEME_KEY: &str = "theme";

/// Color scheme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    /// Follow the OS setting
    #[default]
    System,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }

    /// Lenient parse; anything unknown is [`Theme::System`].
    pub fn parse_or_default(input: Option<&str>) -> Theme {
        match input {
            Some("light") => Theme::Light,
            Some("dark") => Theme::Dark,
            _ => Theme::System,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Preferences {
    pub locale: Locale,
    pub theme: Theme,
}

/// Key-value persistence for preferences.
pub trait PreferenceStore: Send + Sync {
    fn read(&self, key: &str) -> Result<Option<String>, PreferenceError>;
    fn write(&self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

/// In-process store; nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        let values = self.values.lock().unwrap_or_else(|e| e.into_inner());
        Ok(values.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        let mut values = self.values.lock().unwrap_or_else(|e| e.into_inner());
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Stores all keys as one flat JSON object in a file.
///
/// A missing file reads as empty. Writes go to a sibling temp file that is
/// then renamed over the original.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<HashMap<String, String>, PreferenceError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) if contents.trim().is_empty() => Ok(HashMap::new()),
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(HashMap::new()),
            Err(e) => Err(e.into()),
        }
    }
}

impl PreferenceStore for JsonFileStore {
    fn read(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.read_all()?.remove(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());

        let mut values = match self.read_all() {
            Ok(values) => values,
            Err(PreferenceError::Serialization(e)) => {
                warn!(
                    "Overwriting unreadable preferences file {}: {}",
                    self.path.display(),
                    e
                );
                HashMap::new()
            }
            Err(e) => return Err(e),
        };
        values.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_vec_pretty(&values)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for Box<T> {
    fn read(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        (**self).write(key, value)
    }
}

/// Shared, persisted, observable preferences.
pub struct PreferenceContext<S: PreferenceStore> {
    store: S,
    sender: watch::Sender<Preferences>,
}

impl<S: PreferenceStore> PreferenceContext<S> {
    /// Read persisted preferences from `store`.
    ///
    /// Unreadable storage and unknown values fall back to defaults; loading
    /// never fails.
    pub fn load(store: S) -> Self {
        Self::load_with_default(store, Locale::default())
    }

    /// Like [`load`](Self::load), but a missing or unsupported stored locale
    /// becomes `default_locale`.
    pub fn load_with_default(store: S, default_locale: Locale) -> Self {
        let locale = match store.read(LOCALE_KEY) {
            Ok(value) => value
                .and_then(|v| v.parse().ok())
                .unwrap_or(default_locale),
            Err(e) => {
                warn!("Failed to read locale preference, using default: {}", e);
                default_locale
            }
        };

        let theme = match store.read(THEME_KEY) {
            Ok(value) => Theme::parse_or_default(value.as_deref()),
            Err(e) => {
                warn!("Failed to read theme preference, using default: {}", e);
                Theme::default()
            }
        };

        let preferences = Preferences { locale, theme };
        debug!("Loaded preferences: {:?}", preferences);

        let (sender, _) = watch::channel(preferences);
        Self { store, sender }
    }

    /// Current preferences.
    pub fn get(&self) -> Preferences {
        *self.sender.borrow()
    }

    pub fn locale(&self) -> Locale {
        self.get().locale
    }

    pub fn theme(&self) -> Theme {
        self.get().theme
    }

    /// Receiver that observes every later change.
    pub fn subscribe(&self) -> watch::Receiver<Preferences> {
        self.sender.subscribe()
    }

    /// Persist and publish a new locale. Subscribers are only woken when the
    /// value actually changes.
    pub fn set_locale(&self, locale: Locale) -> Result<(), PreferenceError> {
        self.store.write(LOCALE_KEY, locale.code())?;
        self.sender.send_if_modified(|prefs| {
            let changed = prefs.locale != locale;
            prefs.locale = locale;
            changed
        });
        Ok(())
    }

    /// Persist and publish a new theme.
    pub fn set_theme(&self, theme: Theme) -> Result<(), PreferenceError> {
        self.store.write(THEME_KEY, theme.as_str())?;
        self.sender.send_if_modified(|prefs| {
            let changed = prefs.theme != theme;
            prefs.theme = theme;
            changed
        });
        Ok(())
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

/// Open the preference context described by `config`: file-backed when
/// `PREFERENCES_FILE` is set, in-memory otherwise.
pub fn open_from_config(config: &Config) -> PreferenceContext<Box<dyn PreferenceStore>> {
    let store: Box<dyn PreferenceStore> = match &config.preferences_file {
        Some(path) => Box::new(JsonFileStore::new(path)),
        None => Box::new(MemoryStore::new()),
    };

    PreferenceContext::load_with_default(store, config.default_locale)
}
