//! CLI command implementations

pub mod calc;
pub mod decode;
pub mod events;
pub mod list;
pub mod privileged;
pub mod theme;

use crate::error::CliResult;
use crate::output::OutputFormat;
use intents_catalog::IntentCatalog;
use intents_selection::{InMemoryPreferences, JsonFilePreferences, SelectionModel};
use std::path::PathBuf;
use std::sync::Arc;

/// Shared inputs for every command
pub struct Context {
    pub catalog: Arc<IntentCatalog>,
    pub preferences_path: PathBuf,
    pub format: OutputFormat,
}

impl Context {
    pub fn open_preferences(&self) -> CliResult<JsonFilePreferences> {
        Ok(JsonFilePreferences::open(&self.preferences_path)?)
    }

    /// Session seeded from saved preferences. Changes are never written back.
    pub fn scratch_model(&self) -> CliResult<SelectionModel> {
        let saved = self.open_preferences()?;
        let store = InMemoryPreferences::from(saved.values().clone());
        Ok(SelectionModel::with_store(self.catalog.clone(), store))
    }

    /// Session whose flag and theme changes are written to the preference file.
    pub fn persistent_model(&self) -> CliResult<SelectionModel<JsonFilePreferences>> {
        let store = self.open_preferences()?;
        Ok(SelectionModel::with_store(self.catalog.clone(), store))
    }
}

/// Canonical catalog spelling: `guild-messages` becomes `GUILD_MESSAGES`.
pub fn normalize_intent_name(raw: &str) -> String {
    raw.trim().replace('-', "_").to_ascii_uppercase()
}
