//! Error types
use crate::intent::PrivilegedIntent;
use thiserror::Error;

/// Rejections raised by intent lookups and selection transitions.
///
/// A rejected transition leaves the selection exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntentError {
    #[error("unknown intent: {0}")]
    UnknownIntent(String),

    #[error("intent {intent} requires the {flag} privileged flag to be enabled")]
    PrivilegeRequired {
        intent: String,
        flag: PrivilegedIntent,
    },
}

/// Convenience alias for intent results.
pub type IntentResult<T> = Result<T, IntentError>;

/// Structural problems detected while building a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("intent name must not be empty")]
    EmptyName,

    #[error("duplicate intent name: {0}")]
    DuplicateName(String),

    #[error("bit {bit} claimed by both {first} and {second}")]
    DuplicateBit {
        bit: u8,
        first: String,
        second: String,
    },

    #[error("intent {name} uses bit {bit}, above the maximum of {max}")]
    BitOutOfRange { name: String, bit: u8, max: u8 },
}

/// Failures parsing user-supplied values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown privileged flag: {0}")]
    UnknownPrivilegedFlag(String),

    #[error("unknown theme: {0} (expected dark or light)")]
    UnknownTheme(String),

    #[error("invalid bitmask: {0}")]
    InvalidBitmask(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let e = IntentError::UnknownIntent("DOES_NOT_EXIST".into());
        assert!(e.to_string().contains("DOES_NOT_EXIST"));

        let e = IntentError::PrivilegeRequired {
            intent: "GUILD_PRESENCES".into(),
            flag: PrivilegedIntent::Presence,
        };
        assert!(e.to_string().contains("GUILD_PRESENCES"));
        assert!(e.to_string().contains("presence"));

        let e = CatalogError::DuplicateBit {
            bit: 3,
            first: "A".into(),
            second: "B".into(),
        };
        assert_eq!(e.to_string(), "bit 3 claimed by both A and B");
    }
}
