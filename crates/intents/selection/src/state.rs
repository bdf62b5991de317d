//! Selection state and derived views
use intents_catalog::IntentCatalog;
use intents_types::{Bitmask, IntentDefinition, PrivilegedIntent};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Approval flags for privileged intents, each independently settable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivilegedFlags {
    pub presence: bool,
    pub guild_members: bool,
    pub message_content: bool,
}

impl PrivilegedFlags {
    /// Every flag switched on.
    pub const fn all() -> Self {
        Self {
            presence: true,
            guild_members: true,
            message_content: true,
        }
    }

    pub fn get(&self, flag: PrivilegedIntent) -> bool {
        match flag {
            PrivilegedIntent::Presence => self.presence,
            PrivilegedIntent::GuildMembers => self.guild_members,
            PrivilegedIntent::MessageContent => self.message_content,
        }
    }

    pub fn set(&mut self, flag: PrivilegedIntent, value: bool) {
        match flag {
            PrivilegedIntent::Presence => self.presence = value,
            PrivilegedIntent::GuildMembers => self.guild_members = value,
            PrivilegedIntent::MessageContent => self.message_content = value,
        }
    }

    pub fn with(mut self, flag: PrivilegedIntent, value: bool) -> Self {
        self.set(flag, value);
        self
    }
}

/// One session's selection.
///
/// `bitmask` is maintained incrementally by the transitions and always equals
/// the sum of `1 << bit_position` over `enabled`. A privileged intent is only
/// ever in `enabled` while its flag is on.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SelectionState {
    pub(crate) enabled: BTreeSet<&'static str>,
    pub(crate) privileged_flags: PrivilegedFlags,
    pub(crate) bitmask: Bitmask,
}

impl SelectionState {
    /// Empty selection seeded with `privileged_flags`.
    pub fn new(privileged_flags: PrivilegedFlags) -> Self {
        Self {
            enabled: BTreeSet::new(),
            privileged_flags,
            bitmask: Bitmask::EMPTY,
        }
    }

    pub fn bitmask(&self) -> Bitmask {
        self.bitmask
    }

    pub fn privileged_flags(&self) -> PrivilegedFlags {
        self.privileged_flags
    }

    pub fn flag(&self, flag: PrivilegedIntent) -> bool {
        self.privileged_flags.get(flag)
    }

    pub fn is_enabled(&self, name: &str) -> bool {
        self.enabled.contains(name)
    }

    /// Whether any intent is switched on.
    pub fn has_selection(&self) -> bool {
        !self.enabled.is_empty()
    }

    pub fn enabled_count(&self) -> usize {
        self.enabled.len()
    }

    /// Whether the gate currently allows enabling `def`.
    pub fn is_available(&self, def: &IntentDefinition) -> bool {
        def.is_unlocked_by(|flag| self.flag(flag))
    }

    /// Enabled intents in catalog order.
    pub fn enabled_definitions<'c>(
        &'c self,
        catalog: &'c IntentCatalog,
    ) -> impl Iterator<Item = &'c IntentDefinition> + 'c {
        catalog
            .definitions()
            .iter()
            .filter(move |def| self.enabled.contains(def.name))
    }

    pub fn enabled_names(&self, catalog: &IntentCatalog) -> Vec<&'static str> {
        self.enabled_definitions(catalog).map(|def| def.name).collect()
    }

    /// Default events followed by each enabled intent's events in catalog order.
    ///
    /// Events shared by several enabled intents appear once per intent.
    pub fn accessible_events(&self, catalog: &IntentCatalog) -> Vec<&'static str> {
        let mut events = catalog.default_events().to_vec();
        for def in self.enabled_definitions(catalog) {
            events.extend_from_slice(def.events);
        }
        events
    }

    /// Number of entries [`Self::accessible_events`] would return.
    pub fn event_count(&self, catalog: &IntentCatalog) -> usize {
        catalog.default_events().len()
            + self
                .enabled_definitions(catalog)
                .map(|def| def.events.len())
                .sum::<usize>()
    }

    /// Mask rebuilt from `enabled` without using the incremental value.
    pub fn recompute_bitmask(&self, catalog: &IntentCatalog) -> Bitmask {
        Bitmask::from_positions(self.enabled_definitions(catalog).map(|def| def.bit_position))
    }

    /// One row per catalog intent, for rendering a checklist.
    pub fn statuses(&self, catalog: &IntentCatalog) -> Vec<IntentStatus> {
        catalog
            .definitions()
            .iter()
            .map(|def| IntentStatus {
                name: def.name,
                bit_position: def.bit_position,
                value: def.bit(),
                privileged: def.privileged,
                enabled: self.is_enabled(def.name),
                available: self.is_available(def),
                event_count: def.events.len(),
            })
            .collect()
    }

    pub fn snapshot(&self, catalog: &IntentCatalog) -> SelectionSnapshot {
        let events = self.accessible_events(catalog);
        SelectionSnapshot {
            bitmask: self.bitmask,
            enabled: self.enabled_names(catalog),
            event_count: events.len(),
            events,
            privileged_flags: self.privileged_flags,
        }
    }
}

/// Checklist row describing one intent under the current selection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct IntentStatus {
    pub name: &'static str,
    pub bit_position: u8,
    pub value: Bitmask,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub privileged: Option<PrivilegedIntent>,
    pub enabled: bool,
    /// False while the intent's privileged flag is off.
    pub available: bool,
    pub event_count: usize,
}

/// Everything a presentation layer shows for a selection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SelectionSnapshot {
    pub bitmask: Bitmask,
    pub enabled: Vec<&'static str>,
    pub event_count: usize,
    pub events: Vec<&'static str>,
    pub privileged_flags: PrivilegedFlags,
}
