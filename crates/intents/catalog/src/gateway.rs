//! Built-in gateway intent table.
//!
//! Bits 17 through 19 are unassigned upstream and stay unused here.
use intents_types::{IntentDefinition, PrivilegedIntent};

/// Events every session receives regardless of declared intents.
pub const DEFAULT_EVENTS: &[&str] = &[
    "READY",
    "RESUMED",
    "VOICE_SERVER_UPDATE",
    "USER_UPDATE",
    "INTERACTION_CREATE",
];

/// Gateway intents in definition order.
///
/// `THREAD_MEMBERS_UPDATE *` is listed under both GUILDS and GUILD_MEMBERS; the
/// asterisk marks that GUILDS alone only delivers the current user's membership.
pub const GATEWAY_INTENTS: &[IntentDefinition] = &[
    IntentDefinition::new(
        "GUILDS",
        0,
        &[
            "GUILD_CREATE",
            "GUILD_UPDATE",
            "GUILD_DELETE",
            "GUILD_ROLE_CREATE",
            "GUILD_ROLE_UPDATE",
            "GUILD_ROLE_DELETE",
            "CHANNEL_CREATE",
            "CHANNEL_UPDATE",
            "CHANNEL_DELETE",
            "CHANNEL_PINS_UPDATE",
            "THREAD_CREATE",
            "THREAD_UPDATE",
            "THREAD_DELETE",
            "THREAD_LIST_SYNC",
            "THREAD_MEMBER_UPDATE",
            "THREAD_MEMBERS_UPDATE *",
            "STAGE_INSTANCE_CREATE",
            "STAGE_INSTANCE_UPDATE",
            "STAGE_INSTANCE_DELETE",
        ],
    ),
    IntentDefinition::new(
        "GUILD_MEMBERS",
        1,
        &[
            "GUILD_MEMBER_ADD",
            "GUILD_MEMBER_UPDATE",
            "GUILD_MEMBER_REMOVE",
            "THREAD_MEMBERS_UPDATE *",
        ],
    )
    .gated_by(PrivilegedIntent::GuildMembers),
    IntentDefinition::new("GUILD_BANS", 2, &["GUILD_BAN_ADD", "GUILD_BAN_REMOVE"]),
    IntentDefinition::new(
        "GUILD_EMOJIS_AND_STICKERS",
        3,
        &["GUILD_EMOJIS_UPDATE", "GUILD_STICKERS_UPDATE"],
    ),
    IntentDefinition::new(
        "GUILD_INTEGRATIONS",
        4,
        &[
            "GUILD_INTEGRATIONS_UPDATE",
            "INTEGRATION_CREATE",
            "INTEGRATION_UPDATE",
            "INTEGRATION_DELETE",
        ],
    ),
    IntentDefinition::new("GUILD_WEBHOOKS", 5, &["WEBHOOKS_UPDATE"]),
    IntentDefinition::new("GUILD_INVITES", 6, &["INVITE_CREATE", "INVITE_DELETE"]),
    IntentDefinition::new("GUILD_VOICE_STATES", 7, &["VOICE_STATE_UPDATE"]),
    IntentDefinition::new("GUILD_PRESENCES", 8, &["PRESENCE_UPDATE"])
        .gated_by(PrivilegedIntent::Presence),
    IntentDefinition::new(
        "GUILD_MESSAGES",
        9,
        &[
            "MESSAGE_CREATE",
            "MESSAGE_UPDATE",
            "MESSAGE_DELETE",
            "MESSAGE_DELETE_BULK",
        ],
    ),
    IntentDefinition::new(
        "GUILD_MESSAGE_REACTIONS",
        10,
        &[
            "MESSAGE_REACTION_ADD",
            "MESSAGE_REACTION_REMOVE",
            "MESSAGE_REACTION_REMOVE_ALL",
            "MESSAGE_REACTION_REMOVE_EMOJI",
        ],
    ),
    IntentDefinition::new("GUILD_MESSAGE_TYPING", 11, &["TYPING_START"]),
    IntentDefinition::new(
        "DIRECT_MESSAGES",
        12,
        &[
            "MESSAGE_CREATE",
            "MESSAGE_UPDATE",
            "MESSAGE_DELETE",
            "CHANNEL_PINS_UPDATE",
        ],
    ),
    IntentDefinition::new(
        "DIRECT_MESSAGE_REACTIONS",
        13,
        &[
            "MESSAGE_REACTION_ADD",
            "MESSAGE_REACTION_REMOVE",
            "MESSAGE_REACTION_REMOVE_ALL",
            "MESSAGE_REACTION_REMOVE_EMOJI",
        ],
    ),
    IntentDefinition::new("DIRECT_MESSAGE_TYPING", 14, &["TYPING_START"]),
    // Changes payload contents rather than adding events.
    IntentDefinition::new("MESSAGE_CONTENT", 15, &[]).gated_by(PrivilegedIntent::MessageContent),
    IntentDefinition::new(
        "GUILD_SCHEDULED_EVENTS",
        16,
        &[
            "GUILD_SCHEDULED_EVENT_CREATE",
            "GUILD_SCHEDULED_EVENT_UPDATE",
            "GUILD_SCHEDULED_EVENT_DELETE",
            "GUILD_SCHEDULED_EVENT_USER_ADD",
            "GUILD_SCHEDULED_EVENT_USER_REMOVE",
        ],
    ),
    IntentDefinition::new(
        "AUTO_MODERATION_CONFIGURATION",
        20,
        &[
            "AUTO_MODERATION_RULE_CREATE",
            "AUTO_MODERATION_RULE_UPDATE",
            "AUTO_MODERATION_RULE_DELETE",
        ],
    ),
    IntentDefinition::new(
        "AUTO_MODERATION_EXECUTION",
        21,
        &["AUTO_MODERATION_ACTION_EXECUTION"],
    ),
];
