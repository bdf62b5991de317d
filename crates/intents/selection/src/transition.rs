//! Pure selection transitions.
//!
//! Every function reads the current state and returns the next one. On error
//! the caller still holds the untouched input, so a rejected transition can
//! never leave a half-applied selection behind.

use crate::state::SelectionState;
use intents_catalog::IntentCatalog;
use intents_types::{Bitmask, IntentError, IntentResult, PrivilegedIntent};
use tracing::{debug, warn};

/// Set one privileged flag.
///
/// Switching a flag off also disables every enabled intent it gates.
pub fn set_privileged_flag(
    catalog: &IntentCatalog,
    state: &SelectionState,
    flag: PrivilegedIntent,
    value: bool,
) -> SelectionState {
    let mut next = state.clone();
    next.privileged_flags.set(flag, value);

    if !value {
        for def in catalog.privileged_intents(flag) {
            if next.enabled.remove(def.name) {
                next.bitmask = next.bitmask.sub_bit(def.bit_position);
                debug!(
                    intent = def.name,
                    flag = %flag,
                    bitmask = %next.bitmask,
                    "privileged flag cleared, gated intent disabled"
                );
            }
        }
    }

    debug!(flag = %flag, value, "privileged flag set");
    debug_assert_eq!(next.bitmask, next.recompute_bitmask(catalog));
    next
}

/// Switch one intent on or off.
///
/// This sets membership rather than flipping it, so repeating a call is a
/// no-op. Enabling a privileged intent whose flag is off is rejected with
/// [`IntentError::PrivilegeRequired`].
pub fn set_intent_enabled(
    catalog: &IntentCatalog,
    state: &SelectionState,
    name: &str,
    value: bool,
) -> IntentResult<SelectionState> {
    let def = catalog.lookup(name).map_err(|e| {
        warn!(intent = name, "rejected unknown intent");
        e
    })?;

    if value {
        if let Some(flag) = def.privileged {
            if !state.flag(flag) {
                warn!(intent = def.name, flag = %flag, "rejected gated intent");
                return Err(IntentError::PrivilegeRequired {
                    intent: def.name.to_string(),
                    flag,
                });
            }
        }
    }

    if state.is_enabled(def.name) == value {
        return Ok(state.clone());
    }

    let mut next = state.clone();
    if value {
        next.enabled.insert(def.name);
        next.bitmask = next.bitmask.add_bit(def.bit_position);
    } else {
        next.enabled.remove(def.name);
        next.bitmask = next.bitmask.sub_bit(def.bit_position);
    }

    debug!(
        intent = def.name,
        bit = def.bit_position,
        enabled = value,
        bitmask = %next.bitmask,
        "intent selection changed"
    );
    debug_assert_eq!(next.bitmask, next.recompute_bitmask(catalog));
    Ok(next)
}

/// Clear every enabled intent. Privileged flags are kept.
pub fn reset(state: &SelectionState) -> SelectionState {
    debug!(cleared = state.enabled_count(), "selection reset");
    SelectionState {
        enabled: Default::default(),
        privileged_flags: state.privileged_flags,
        bitmask: Bitmask::EMPTY,
    }
}
