//! Links into the gateway documentation.

/// Overview page for gateway intents.
pub const INTENTS_DOC_URL: &str = "https://discord.com/developers/docs/topics/gateway#gateway-intents";

/// Page documenting every gateway event.
pub const GATEWAY_EVENTS_DOC_URL: &str = "https://discord.com/developers/docs/topics/gateway-events";

/// Fragment identifier for an event on the gateway events page.
///
/// Lower-cases the name, turns `_` into `-` and drops `*` markers.
pub fn event_doc_anchor(event: &str) -> String {
    event
        .replace('*', "")
        .trim()
        .to_ascii_lowercase()
        .replace('_', "-")
}

pub fn event_doc_url(event: &str) -> String {
    format!("{}#{}", GATEWAY_EVENTS_DOC_URL, event_doc_anchor(event))
}
