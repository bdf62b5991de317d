//! Intent Catalog - read-only registry of gateway intents
//!
//! The catalog maps each intent name to its bit position, the events it unlocks
//! and its privileged gate, and keeps the fixed list of events every session
//! receives. It never changes after construction.
//!
//! ```rust
//! use intents_catalog::IntentCatalog;
//!
//! let catalog = IntentCatalog::gateway();
//! let guilds = catalog.lookup("GUILDS").unwrap();
//! assert_eq!(guilds.bit_position, 0);
//! assert_eq!(catalog.all_bits().value(), 3_276_799);
//! ```

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![cfg_attr(not(feature = "strict-docs"), allow(missing_docs))]
#![warn(rust_2018_idioms)]

mod docs;
mod gateway;

pub use docs::{event_doc_anchor, event_doc_url, GATEWAY_EVENTS_DOC_URL, INTENTS_DOC_URL};
pub use gateway::{DEFAULT_EVENTS, GATEWAY_INTENTS};

use intents_types::{
    Bitmask, CatalogError, IntentDefinition, IntentError, IntentResult, PrivilegedIntent,
    MAX_BIT_POSITION,
};
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// Ordered, validated registry of intent definitions.
#[derive(Clone, Debug)]
pub struct IntentCatalog {
    definitions: Vec<IntentDefinition>,
    default_events: Vec<&'static str>,
    index: HashMap<&'static str, usize>,
}

impl IntentCatalog {
    /// Build a catalog, rejecting empty or duplicate names, duplicate bits and
    /// bits above [`MAX_BIT_POSITION`].
    pub fn new(
        definitions: Vec<IntentDefinition>,
        default_events: Vec<&'static str>,
    ) -> Result<Self, CatalogError> {
        let mut owners: HashMap<u8, &'static str> = HashMap::new();
        let mut names: HashSet<&'static str> = HashSet::new();

        for def in &definitions {
            if def.name.trim().is_empty() {
                return Err(CatalogError::EmptyName);
            }
            if !names.insert(def.name) {
                return Err(CatalogError::DuplicateName(def.name.to_string()));
            }
            if def.bit_position > MAX_BIT_POSITION {
                return Err(CatalogError::BitOutOfRange {
                    name: def.name.to_string(),
                    bit: def.bit_position,
                    max: MAX_BIT_POSITION,
                });
            }
            if let Some(first) = owners.insert(def.bit_position, def.name) {
                return Err(CatalogError::DuplicateBit {
                    bit: def.bit_position,
                    first: first.to_string(),
                    second: def.name.to_string(),
                });
            }
        }

        Ok(Self::from_parts(definitions, default_events))
    }

    /// The built-in gateway catalog.
    pub fn gateway() -> Self {
        Self::from_parts(GATEWAY_INTENTS.to_vec(), DEFAULT_EVENTS.to_vec())
    }

    fn from_parts(definitions: Vec<IntentDefinition>, default_events: Vec<&'static str>) -> Self {
        let index = definitions
            .iter()
            .enumerate()
            .map(|(i, def)| (def.name, i))
            .collect();
        tracing::debug!(
            intents = definitions.len(),
            default_events = default_events.len(),
            "intent catalog loaded"
        );
        Self {
            definitions,
            default_events,
            index,
        }
    }

    /// Look up an intent by name.
    pub fn lookup(&self, name: &str) -> IntentResult<&IntentDefinition> {
        self.get(name)
            .ok_or_else(|| IntentError::UnknownIntent(name.to_string()))
    }

    pub fn get(&self, name: &str) -> Option<&IntentDefinition> {
        self.index.get(name).map(|i| &self.definitions[*i])
    }

    /// Every intent name in definition order.
    pub fn all_names(&self) -> Vec<&'static str> {
        self.definitions.iter().map(|def| def.name).collect()
    }

    pub fn definitions(&self) -> &[IntentDefinition] {
        &self.definitions
    }

    pub fn default_events(&self) -> &[&'static str] {
        &self.default_events
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Mask with every catalog intent declared.
    pub fn all_bits(&self) -> Bitmask {
        Bitmask::from_positions(self.definitions.iter().map(|def| def.bit_position))
    }

    /// Intents gated by `flag`, in definition order.
    pub fn privileged_intents(
        &self,
        flag: PrivilegedIntent,
    ) -> impl Iterator<Item = &IntentDefinition> + '_ {
        self.definitions
            .iter()
            .filter(move |def| def.privileged == Some(flag))
    }

    /// Name the intents contained in `mask`.
    ///
    /// Bits no catalog entry claims are reported in `unknown_bits` rather than
    /// dropped.
    pub fn decode(&self, mask: Bitmask) -> DecodedMask {
        let intents: Vec<&'static str> = self
            .definitions
            .iter()
            .filter(|def| mask.contains_bit(def.bit_position))
            .map(|def| def.name)
            .collect();

        DecodedMask {
            mask,
            intents,
            unknown_bits: mask.difference(self.all_bits()),
        }
    }
}

impl Default for IntentCatalog {
    fn default() -> Self {
        Self::gateway()
    }
}

/// Result of [`IntentCatalog::decode`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DecodedMask {
    pub mask: Bitmask,
    pub intents: Vec<&'static str>,
    pub unknown_bits: Bitmask,
}

impl DecodedMask {
    /// Whether every set bit maps to a catalog intent.
    pub fn is_fully_known(&self) -> bool {
        self.unknown_bits.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_gateway_catalog_is_valid() {
        let validated = IntentCatalog::new(GATEWAY_INTENTS.to_vec(), DEFAULT_EVENTS.to_vec());
        assert!(validated.is_ok());
        assert_eq!(IntentCatalog::gateway().len(), 19);
    }

    #[test]
    fn test_lookup() {
        let catalog = IntentCatalog::gateway();

        let guilds = catalog.lookup("GUILDS").unwrap();
        assert_eq!(guilds.bit_position, 0);
        assert_eq!(guilds.events.len(), 19);
        assert!(guilds.privileged.is_none());

        let presences = catalog.lookup("GUILD_PRESENCES").unwrap();
        assert_eq!(presences.bit_position, 8);
        assert_eq!(presences.privileged, Some(PrivilegedIntent::Presence));
    }

    #[test]
    fn test_lookup_unknown() {
        let catalog = IntentCatalog::gateway();
        assert_eq!(
            catalog.lookup("DOES_NOT_EXIST"),
            Err(IntentError::UnknownIntent("DOES_NOT_EXIST".into()))
        );
        // Names are case sensitive.
        assert!(catalog.lookup("guilds").is_err());
    }

    #[test]
    fn test_all_names_definition_order() {
        let names = IntentCatalog::gateway().all_names();
        assert_eq!(names.first(), Some(&"GUILDS"));
        assert_eq!(names[15], "MESSAGE_CONTENT");
        assert_eq!(names.last(), Some(&"AUTO_MODERATION_EXECUTION"));
    }

    #[test]
    fn test_reserved_bits_are_skipped() {
        let catalog = IntentCatalog::gateway();
        let bits: Vec<u8> = catalog.definitions().iter().map(|d| d.bit_position).collect();
        for reserved in 17..=19 {
            assert!(!bits.contains(&reserved));
        }
        assert_eq!(catalog.lookup("AUTO_MODERATION_CONFIGURATION").unwrap().bit_position, 20);
    }

    #[test]
    fn test_all_bits() {
        assert_eq!(IntentCatalog::gateway().all_bits(), Bitmask::new(3_276_799));
    }

    #[test]
    fn test_privileged_intents() {
        let catalog = IntentCatalog::gateway();
        let gated: Vec<_> = PrivilegedIntent::ALL
            .iter()
            .flat_map(|flag| catalog.privileged_intents(*flag).map(|d| d.name))
            .collect();
        assert_eq!(gated, vec!["GUILD_PRESENCES", "GUILD_MEMBERS", "MESSAGE_CONTENT"]);
    }

    #[test]
    fn test_default_events() {
        let catalog = IntentCatalog::gateway();
        assert_eq!(catalog.default_events().len(), 5);
        assert_eq!(catalog.default_events()[0], "READY");
    }

    #[test]
    fn test_rejects_duplicate_bit() {
        let defs = vec![
            IntentDefinition::new("A", 3, &[]),
            IntentDefinition::new("B", 3, &[]),
        ];
        assert_eq!(
            IntentCatalog::new(defs, vec![]).unwrap_err(),
            CatalogError::DuplicateBit {
                bit: 3,
                first: "A".into(),
                second: "B".into()
            }
        );
    }

    #[test]
    fn test_rejects_duplicate_name() {
        let defs = vec![
            IntentDefinition::new("A", 0, &[]),
            IntentDefinition::new("A", 1, &[]),
        ];
        assert_eq!(
            IntentCatalog::new(defs, vec![]).unwrap_err(),
            CatalogError::DuplicateName("A".into())
        );
    }

    #[test]
    fn test_rejects_out_of_range_bit() {
        let defs = vec![IntentDefinition::new("WIDE", 32, &[])];
        assert!(matches!(
            IntentCatalog::new(defs, vec![]),
            Err(CatalogError::BitOutOfRange { bit: 32, .. })
        ));
    }

    #[test]
    fn test_rejects_empty_name() {
        let defs = vec![IntentDefinition::new("  ", 0, &[])];
        assert_eq!(IntentCatalog::new(defs, vec![]).unwrap_err(), CatalogError::EmptyName);
    }

    #[test]
    fn test_inserting_an_intent_keeps_existing_bits() {
        let mut defs = GATEWAY_INTENTS.to_vec();
        defs.insert(0, IntentDefinition::new("GUILD_EXPERIMENTS", 30, &["EXPERIMENT"]));
        let catalog = IntentCatalog::new(defs, DEFAULT_EVENTS.to_vec()).unwrap();
        assert_eq!(catalog.lookup("GUILDS").unwrap().bit_position, 0);
        assert_eq!(catalog.lookup("GUILD_MEMBERS").unwrap().bit().value(), 2);
    }

    #[test]
    fn test_decode_all_bits() {
        let catalog = IntentCatalog::gateway();
        let decoded = catalog.decode(catalog.all_bits());
        assert_eq!(decoded.intents, catalog.all_names());
        assert!(decoded.is_fully_known());
    }

    #[test]
    fn test_decode_reports_unknown_bits() {
        let catalog = IntentCatalog::gateway();
        let decoded = catalog.decode(Bitmask::new(1 | (1 << 18) | (1 << 9)));
        assert_eq!(decoded.intents, vec!["GUILDS", "GUILD_MESSAGES"]);
        assert_eq!(decoded.unknown_bits, Bitmask::bit(18));
        assert!(!decoded.is_fully_known());
    }

    #[test]
    fn test_definition_serializes_without_empty_gate() {
        let catalog = IntentCatalog::gateway();
        let json = serde_json::to_value(catalog.lookup("GUILD_BANS").unwrap()).unwrap();
        assert_eq!(json["bit_position"], 2);
        assert!(json.get("privileged").is_none());
    }

    proptest! {
        #[test]
        fn property_decode_inverts_known_masks(
            picks in proptest::collection::vec(any::<bool>(), 19)
        ) {
            let catalog = IntentCatalog::gateway();
            let chosen: Vec<&IntentDefinition> = catalog
                .definitions()
                .iter()
                .zip(picks.iter())
                .filter(|(_, pick)| **pick)
                .map(|(def, _)| def)
                .collect();
            let mask = Bitmask::from_positions(chosen.iter().map(|d| d.bit_position));
            let decoded = catalog.decode(mask);
            prop_assert_eq!(decoded.intents, chosen.iter().map(|d| d.name).collect::<Vec<_>>());
            prop_assert!(decoded.unknown_bits.is_empty());
        }
    }
}
