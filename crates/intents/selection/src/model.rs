//! Session-scoped selection model
use crate::preferences::{
    load_privileged_flags, load_theme, InMemoryPreferences, PreferenceError, PreferenceStore,
};
use crate::state::{IntentStatus, SelectionSnapshot, SelectionState};
use crate::transition;
use intents_catalog::IntentCatalog;
use intents_types::{
    Bitmask, IntentDefinition, IntentResult, PrivilegedIntent, Theme, THEME_PREFERENCE_KEY,
};
use std::sync::Arc;
use tracing::warn;

/// One session's selection plus its preference store.
///
/// State is only replaced when a transition succeeds. Preference writes are
/// best-effort unless written through `save_privileged_flag` or `save_theme`,
/// which return the store error.
pub struct SelectionModel<S: PreferenceStore = InMemoryPreferences> {
    catalog: Arc<IntentCatalog>,
    state: SelectionState,
    theme: Theme,
    store: S,
}

impl SelectionModel<InMemoryPreferences> {
    /// Model with every flag off and an in-memory store.
    pub fn new(catalog: Arc<IntentCatalog>) -> Self {
        Self::with_store(catalog, InMemoryPreferences::new())
    }
}

impl<S: PreferenceStore> SelectionModel<S> {
    /// Start a session, seeding privileged flags and theme from `store`.
    pub fn with_store(catalog: Arc<IntentCatalog>, store: S) -> Self {
        let flags = load_privileged_flags(&store);
        let theme = load_theme(&store);
        tracing::debug!(?flags, %theme, "selection session started");
        Self {
            catalog,
            state: SelectionState::new(flags),
            theme,
            store,
        }
    }

    pub fn catalog(&self) -> &IntentCatalog {
        &self.catalog
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn all_names(&self) -> Vec<&'static str> {
        self.catalog.all_names()
    }

    pub fn lookup(&self, name: &str) -> IntentResult<&IntentDefinition> {
        self.catalog.lookup(name)
    }

    /// Set a privileged flag and persist it. Clearing a flag disables the
    /// intents it gates.
    pub fn set_privileged_flag(&mut self, flag: PrivilegedIntent, value: bool) -> &SelectionState {
        self.state = transition::set_privileged_flag(&self.catalog, &self.state, flag, value);
        self.persist(flag.preference_key(), if value { "true" } else { "false" });
        &self.state
    }

    /// Like [`Self::set_privileged_flag`], but a failed write is returned
    /// instead of logged. The in-memory transition still applies.
    pub fn save_privileged_flag(
        &mut self,
        flag: PrivilegedIntent,
        value: bool,
    ) -> Result<&SelectionState, PreferenceError> {
        self.state = transition::set_privileged_flag(&self.catalog, &self.state, flag, value);
        self.store
            .set(flag.preference_key(), if value { "true" } else { "false" })?;
        Ok(&self.state)
    }

    pub fn set_intent_enabled(&mut self, name: &str, value: bool) -> IntentResult<&SelectionState> {
        self.state = transition::set_intent_enabled(&self.catalog, &self.state, name, value)?;
        Ok(&self.state)
    }

    pub fn reset(&mut self) -> &SelectionState {
        self.state = transition::reset(&self.state);
        &self.state
    }

    pub fn current_bitmask(&self) -> Bitmask {
        self.state.bitmask()
    }

    pub fn current_events(&self) -> Vec<&'static str> {
        self.state.accessible_events(&self.catalog)
    }

    pub fn event_count(&self) -> usize {
        self.state.event_count(&self.catalog)
    }

    pub fn enabled_names(&self) -> Vec<&'static str> {
        self.state.enabled_names(&self.catalog)
    }

    pub fn is_enabled(&self, name: &str) -> bool {
        self.state.is_enabled(name)
    }

    /// Whether any intent is on, i.e. whether clearing would change anything.
    pub fn has_selection(&self) -> bool {
        self.state.has_selection()
    }

    /// Whether `name` may currently be enabled.
    pub fn is_available(&self, name: &str) -> IntentResult<bool> {
        let def = self.catalog.lookup(name)?;
        Ok(self.state.is_available(def))
    }

    pub fn intent_statuses(&self) -> Vec<IntentStatus> {
        self.state.statuses(&self.catalog)
    }

    pub fn snapshot(&self) -> SelectionSnapshot {
        self.state.snapshot(&self.catalog)
    }

    /// The bitmask as decimal text, ready for a clipboard.
    pub fn payload(&self) -> String {
        self.state.bitmask().to_string()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) -> Theme {
        self.theme = theme;
        self.persist(THEME_PREFERENCE_KEY, theme.as_str());
        theme
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.set_theme(self.theme.toggled())
    }

    /// Set the theme, returning the store error if it could not be written.
    pub fn save_theme(&mut self, theme: Theme) -> Result<Theme, PreferenceError> {
        self.theme = theme;
        self.store.set(THEME_PREFERENCE_KEY, theme.as_str())?;
        Ok(theme)
    }

    fn persist(&mut self, key: &str, value: &str) {
        if let Err(e) = self.store.set(key, value) {
            warn!(key, error = %e, "failed to persist preference");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use intents_types::IntentError;

    struct FailingStore;

    impl PreferenceStore for FailingStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), PreferenceError> {
            Err(PreferenceError::Serialization("read-only".into()))
        }
    }

    fn model() -> SelectionModel {
        SelectionModel::new(Arc::new(IntentCatalog::gateway()))
    }

    #[test]
    fn test_new_session_is_empty() {
        let model = model();
        assert_eq!(model.current_bitmask(), Bitmask::EMPTY);
        assert_eq!(model.current_events(), model.catalog().default_events());
        assert!(!model.has_selection());
        assert_eq!(model.theme(), Theme::Dark);
        assert_eq!(model.payload(), "0");
    }

    #[test]
    fn test_seeds_from_store() {
        let store = InMemoryPreferences::new()
            .with("guildMembersIntent", "true")
            .with("theme", "light");
        let mut model = SelectionModel::with_store(Arc::new(IntentCatalog::gateway()), store);

        assert!(model.state().flag(PrivilegedIntent::GuildMembers));
        assert!(!model.state().flag(PrivilegedIntent::Presence));
        assert_eq!(model.theme(), Theme::Light);
        // Seeded flags never pre-enable intents.
        assert!(!model.has_selection());

        model.set_intent_enabled("GUILD_MEMBERS", true).unwrap();
        assert_eq!(model.payload(), "2");
    }

    #[test]
    fn test_flag_changes_are_persisted() {
        let mut model = model();
        model.set_privileged_flag(PrivilegedIntent::Presence, true);
        assert_eq!(model.store().get("presenceIntent").as_deref(), Some("true"));

        model.set_privileged_flag(PrivilegedIntent::Presence, false);
        assert_eq!(model.store().get("presenceIntent").as_deref(), Some("false"));
    }

    #[test]
    fn test_rejection_keeps_state() {
        let mut model = model();
        model.set_intent_enabled("GUILDS", true).unwrap();
        let before = model.state().clone();

        let err = model.set_intent_enabled("GUILD_PRESENCES", true).unwrap_err();
        assert!(matches!(err, IntentError::PrivilegeRequired { .. }));
        assert_eq!(model.state(), &before);
        assert_eq!(model.current_bitmask().value(), 1);
    }

    #[test]
    fn test_availability() {
        let mut model = model();
        assert!(model.is_available("GUILDS").unwrap());
        assert!(!model.is_available("MESSAGE_CONTENT").unwrap());
        model.set_privileged_flag(PrivilegedIntent::MessageContent, true);
        assert!(model.is_available("MESSAGE_CONTENT").unwrap());
        assert!(model.is_available("NOPE").is_err());
    }

    #[test]
    fn test_reset_and_has_selection() {
        let mut model = model();
        model.set_intent_enabled("GUILD_WEBHOOKS", true).unwrap();
        assert!(model.has_selection());
        assert_eq!(model.enabled_names(), vec!["GUILD_WEBHOOKS"]);

        model.reset();
        assert!(!model.has_selection());
        assert_eq!(model.current_bitmask().value(), 0);
    }

    #[test]
    fn test_theme_toggle_persists() {
        let mut model = model();
        assert_eq!(model.toggle_theme(), Theme::Light);
        assert_eq!(model.store().get("theme").as_deref(), Some("light"));
        assert_eq!(model.toggle_theme(), Theme::Dark);
        assert_eq!(model.store().get("theme").as_deref(), Some("dark"));
    }

    #[test]
    fn test_failing_store_is_best_effort() {
        let mut model = SelectionModel::with_store(Arc::new(IntentCatalog::gateway()), FailingStore);
        model.set_privileged_flag(PrivilegedIntent::Presence, true);
        assert!(model.state().flag(PrivilegedIntent::Presence));
        model.set_intent_enabled("GUILD_PRESENCES", true).unwrap();
        assert_eq!(model.current_bitmask().value(), 256);
        assert_eq!(model.toggle_theme(), Theme::Light);
    }

    #[test]
    fn test_save_surfaces_store_errors() {
        let mut model = SelectionModel::with_store(Arc::new(IntentCatalog::gateway()), FailingStore);
        assert!(model.save_privileged_flag(PrivilegedIntent::Presence, true).is_err());
        // The transition itself still applied.
        assert!(model.state().flag(PrivilegedIntent::Presence));

        assert!(model.save_theme(Theme::Light).is_err());
        assert_eq!(model.theme(), Theme::Light);
    }

    #[test]
    fn test_save_writes_through() {
        let mut model = model();
        model.save_privileged_flag(PrivilegedIntent::GuildMembers, true).unwrap();
        assert_eq!(model.save_theme(Theme::Light).unwrap(), Theme::Light);
        assert_eq!(model.store().get("guildMembersIntent").as_deref(), Some("true"));
        assert_eq!(model.store().get("theme").as_deref(), Some("light"));
    }

    #[test]
    fn test_snapshot() {
        let mut model = model();
        model.set_intent_enabled("GUILD_MESSAGE_TYPING", true).unwrap();
        let snapshot = model.snapshot();
        assert_eq!(snapshot.bitmask.value(), 2048);
        assert_eq!(snapshot.enabled, vec!["GUILD_MESSAGE_TYPING"]);
        assert_eq!(snapshot.event_count, 6);
        assert_eq!(snapshot.events.last(), Some(&"TYPING_START"));
    }
}
