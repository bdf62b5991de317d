//! Preference store contract and implementations.
//!
//! The selection model only reads preferences when a session starts and writes
//! them best-effort when a privileged flag or the theme changes. Values are
//! plain strings: `"true"`/`"false"` for flags, `"dark"`/`"light"` for the theme.

use crate::state::PrivilegedFlags;
use intents_types::{PrivilegedIntent, Theme, THEME_PREFERENCE_KEY};
use std::collections::BTreeMap;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by preference stores.
#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("preference I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("preference serialization error: {0}")]
    Serialization(String),
}

/// Key-value store the selection model seeds from and persists to.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Box<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        (**self).set(key, value)
    }
}

/// Read the privileged flags. Anything other than `"true"` reads as off.
pub fn load_privileged_flags(store: &impl PreferenceStore) -> PrivilegedFlags {
    PrivilegedIntent::ALL
        .iter()
        .fold(PrivilegedFlags::default(), |flags, flag| {
            let value = store.get(flag.preference_key()).as_deref() == Some("true");
            flags.with(*flag, value)
        })
}

pub fn load_theme(store: &impl PreferenceStore) -> Theme {
    Theme::from_preference(store.get(THEME_PREFERENCE_KEY).as_deref())
}

/// In-memory store (for tests and ephemeral sessions).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InMemoryPreferences {
    values: BTreeMap<String, String>,
}

impl InMemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    pub fn values(&self) -> &BTreeMap<String, String> {
        &self.values
    }
}

impl From<BTreeMap<String, String>> for InMemoryPreferences {
    fn from(values: BTreeMap<String, String>) -> Self {
        Self { values }
    }
}

impl PreferenceStore for InMemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store backed by a flat JSON object on disk.
///
/// The file is read once on open and rewritten on every `set`. Writes go to a
/// `.tmp` sibling first and are renamed into place.
#[derive(Debug)]
pub struct JsonFilePreferences {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl JsonFilePreferences {
    /// Open the store at `path`. A missing file yields an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, PreferenceError> {
        let path = path.into();
        let values = if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            if contents.trim().is_empty() {
                BTreeMap::new()
            } else {
                let raw: BTreeMap<String, serde_json::Value> = serde_json::from_str(&contents)
                    .map_err(|e| {
                        PreferenceError::Serialization(format!(
                            "{}: deserialization failed: {}",
                            path.display(),
                            e
                        ))
                    })?;
                string_entries(raw)
            }
        } else {
            BTreeMap::new()
        };

        tracing::debug!(path = %path.display(), entries = values.len(), "preferences opened");
        Ok(Self { path, values })
    }

    pub fn values(&self) -> &BTreeMap<String, String> {
        &self.values
    }

    fn persist(&self) -> Result<(), PreferenceError> {
        let json = serde_json::to_string_pretty(&self.values).map_err(|e| {
            PreferenceError::Serialization(format!("serialization failed: {}", e))
        })?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let tmp_path = self.path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

/// Keep string values only. Anything else was not written by a store and is
/// left uninterpreted, as if absent.
fn string_entries(raw: BTreeMap<String, serde_json::Value>) -> BTreeMap<String, String> {
    raw.into_iter()
        .filter_map(|(key, value)| match value {
            serde_json::Value::String(s) => Some((key, s)),
            other => {
                tracing::debug!(key = %key, value = %other, "ignoring non-string preference");
                None
            }
        })
        .collect()
}

impl PreferenceStore for JsonFilePreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.values.insert(key.to_string(), value.to_string());
        self.persist()
    }
}
