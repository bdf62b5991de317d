//! Intent definitions and privileged flags
use crate::bitmask::Bitmask;
use crate::errors::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Out-of-band approval flags that gate privileged intents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PrivilegedIntent {
    Presence,
    GuildMembers,
    MessageContent,
}

impl PrivilegedIntent {
    pub const ALL: [PrivilegedIntent; 3] = [
        PrivilegedIntent::Presence,
        PrivilegedIntent::GuildMembers,
        PrivilegedIntent::MessageContent,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PrivilegedIntent::Presence => "presence",
            PrivilegedIntent::GuildMembers => "guildMembers",
            PrivilegedIntent::MessageContent => "messageContent",
        }
    }

    /// Key under which the flag is persisted in a preference store.
    pub fn preference_key(self) -> &'static str {
        match self {
            PrivilegedIntent::Presence => "presenceIntent",
            PrivilegedIntent::GuildMembers => "guildMembersIntent",
            PrivilegedIntent::MessageContent => "messageContentIntent",
        }
    }

    /// Human-facing label, as shown on the developer portal toggles.
    pub fn label(self) -> &'static str {
        match self {
            PrivilegedIntent::Presence => "Presence Intent",
            PrivilegedIntent::GuildMembers => "Server Members",
            PrivilegedIntent::MessageContent => "Message Content",
        }
    }
}

impl fmt::Display for PrivilegedIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Case-insensitive; `-` and `_` separators are ignored, so `guildMembers`,
/// `guild-members` and `GUILD_MEMBERS` all parse.
impl FromStr for PrivilegedIntent {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match normalized.as_str() {
            "presence" => Ok(PrivilegedIntent::Presence),
            "guildmembers" | "members" => Ok(PrivilegedIntent::GuildMembers),
            "messagecontent" => Ok(PrivilegedIntent::MessageContent),
            _ => Err(ParseError::UnknownPrivilegedFlag(s.to_string())),
        }
    }
}

/// One named intent: the bit it occupies and the events it unlocks.
///
/// Bit positions are explicit data. They are never inferred from where an
/// entry sits in a catalog, so inserting a new intent cannot shift the mask of
/// an existing one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct IntentDefinition {
    pub name: &'static str,
    pub bit_position: u8,
    pub events: &'static [&'static str],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub privileged: Option<PrivilegedIntent>,
}

impl IntentDefinition {
    pub const fn new(name: &'static str, bit_position: u8, events: &'static [&'static str]) -> Self {
        Self {
            name,
            bit_position,
            events,
            privileged: None,
        }
    }

    /// Mark the intent as gated by `flag`.
    pub const fn gated_by(self, flag: PrivilegedIntent) -> Self {
        Self {
            privileged: Some(flag),
            ..self
        }
    }

    pub const fn bit(&self) -> Bitmask {
        Bitmask::bit(self.bit_position)
    }

    pub const fn is_privileged(&self) -> bool {
        self.privileged.is_some()
    }

    /// Whether the intent may be enabled under the given gate state.
    pub fn is_unlocked_by(&self, flag_enabled: impl Fn(PrivilegedIntent) -> bool) -> bool {
        self.privileged.map_or(true, flag_enabled)
    }
}
