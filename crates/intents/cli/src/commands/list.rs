//! Intent listing

use super::Context;
use crate::error::CliResult;
use crate::output::{self, OutputFormat};
use colored::*;
use intents_catalog::INTENTS_DOC_URL;
use serde::Serialize;
use tabled::Tabled;

#[derive(Debug, Serialize, Tabled)]
struct IntentRow {
    #[tabled(rename = "Intent")]
    intent: &'static str,
    #[tabled(rename = "Bit")]
    bit: u8,
    #[tabled(rename = "Value")]
    value: u64,
    #[tabled(rename = "Privileged")]
    privileged: String,
    #[tabled(rename = "Available")]
    available: String,
    #[tabled(rename = "Events")]
    events: usize,
}

/// Execute the list command
pub fn execute(ctx: &Context) -> CliResult<()> {
    let model = ctx.scratch_model()?;
    let statuses = model.intent_statuses();

    if !matches!(ctx.format, OutputFormat::Table) {
        return output::print_single(&statuses, ctx.format);
    }

    let rows = statuses
        .into_iter()
        .map(|status| IntentRow {
            intent: status.name,
            bit: status.bit_position,
            value: status.value.value(),
            privileged: status
                .privileged
                .map(|flag| flag.label().to_string())
                .unwrap_or_else(|| "-".into()),
            available: if status.available { "yes" } else { "no" }.into(),
            events: status.event_count,
        })
        .collect();
    output::print_output(rows, OutputFormat::Table)?;
    println!("Learn more about gateway intents: {}", INTENTS_DOC_URL.dimmed());
    Ok(())
}
