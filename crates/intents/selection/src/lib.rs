//! Intent Selection Model
//!
//! Holds the intents a session has switched on, enforces privileged gating and
//! derives the declared bitmask and the list of events it unlocks.
//!
//! State changes go through pure transitions in [`transition`]; each takes the
//! current [`SelectionState`] and returns a new one or an [`IntentError`],
//! leaving the input untouched. [`SelectionModel`] wraps those transitions for
//! a single session and writes privileged flags and the theme through to a
//! [`PreferenceStore`].
//!
//! ```rust
//! use intents_catalog::IntentCatalog;
//! use intents_selection::SelectionModel;
//! use intents_types::PrivilegedIntent;
//! use std::sync::Arc;
//!
//! let mut model = SelectionModel::new(Arc::new(IntentCatalog::gateway()));
//! model.set_intent_enabled("GUILDS", true).unwrap();
//! model.set_privileged_flag(PrivilegedIntent::GuildMembers, true);
//! model.set_intent_enabled("GUILD_MEMBERS", true).unwrap();
//! assert_eq!(model.current_bitmask().value(), 3);
//! ```

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![cfg_attr(not(feature = "strict-docs"), allow(missing_docs))]
#![warn(rust_2018_idioms)]

mod model;
pub mod preferences;
mod state;
pub mod transition;

pub use model::SelectionModel;
pub use preferences::{
    InMemoryPreferences, JsonFilePreferences, PreferenceError, PreferenceStore,
};
pub use state::{IntentStatus, PrivilegedFlags, SelectionSnapshot, SelectionState};

pub use intents_types::{IntentError, IntentResult};
