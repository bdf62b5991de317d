//! Per-intent event listing

use super::{normalize_intent_name, Context};
use crate::error::CliResult;
use crate::output::{self, OutputFormat};
use colored::*;
use intents_catalog::event_doc_url;
use serde::Serialize;
use tabled::Tabled;

#[derive(Debug, Serialize, Tabled)]
struct EventRow {
    #[tabled(rename = "Event")]
    event: &'static str,
    #[tabled(rename = "Docs")]
    docs: String,
}

/// Execute the events command
pub fn execute(intent: &str, ctx: &Context) -> CliResult<()> {
    let def = ctx.catalog.lookup(&normalize_intent_name(intent))?;

    let rows: Vec<EventRow> = def
        .events
        .iter()
        .map(|&event| EventRow {
            event,
            docs: event_doc_url(event),
        })
        .collect();

    if matches!(ctx.format, OutputFormat::Table) {
        print!("{} (bit {}, value {})", def.name.bold(), def.bit_position, def.bit());
        if let Some(flag) = def.privileged {
            print!(" - requires {}", flag.label().yellow());
        }
        println!();
    }
    output::print_output(rows, ctx.format)
}
