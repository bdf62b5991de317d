//! Bitmask decoding

use super::Context;
use crate::error::CliResult;
use crate::output::{self, print_warning, OutputFormat};
use colored::*;
use intents_types::Bitmask;
use serde::Serialize;
use tabled::Tabled;

#[derive(Debug, Serialize, Tabled)]
struct DecodedRow {
    #[tabled(rename = "Intent")]
    intent: &'static str,
    #[tabled(rename = "Bit")]
    bit: u8,
    #[tabled(rename = "Value")]
    value: u64,
}

/// Execute the decode command
pub fn execute(bitmask: Bitmask, ctx: &Context) -> CliResult<()> {
    let decoded = ctx.catalog.decode(bitmask);
    tracing::debug!(mask = %bitmask, intents = decoded.intents.len(), "bitmask decoded");

    if !matches!(ctx.format, OutputFormat::Table) {
        return output::print_single(&decoded, ctx.format);
    }

    println!("Intents: {}", decoded.mask.to_string().bold());
    let rows: Vec<DecodedRow> = decoded
        .intents
        .iter()
        .filter_map(|name| ctx.catalog.get(name))
        .map(|def| DecodedRow {
            intent: def.name,
            bit: def.bit_position,
            value: def.bit().value(),
        })
        .collect();
    output::print_output(rows, OutputFormat::Table)?;

    if !decoded.is_fully_known() {
        let bits: Vec<String> = decoded
            .unknown_bits
            .positions()
            .map(|bit| bit.to_string())
            .collect();
        print_warning(&format!(
            "Unknown bits: {} (bit {})",
            decoded.unknown_bits,
            bits.join(", ")
        ));
    }
    Ok(())
}
