//! Bitmask calculation

use super::{normalize_intent_name, Context};
use crate::error::CliResult;
use crate::output::{self, OutputFormat};
use clap::Args;
use colored::*;
use intents_selection::{SelectionModel, SelectionSnapshot};
use intents_types::PrivilegedIntent;

/// Arguments for `intents calc`
#[derive(Debug, Args)]
pub struct CalcArgs {
    /// Intents to enable (case-insensitive, `-` and `_` both accepted)
    pub intents: Vec<String>,

    /// Approve the presence intent for this run
    #[arg(long)]
    pub presence: bool,

    /// Approve the server members intent for this run
    #[arg(long)]
    pub guild_members: bool,

    /// Approve the message content intent for this run
    #[arg(long)]
    pub message_content: bool,

    /// Enable every intent, approving all privileged intents
    #[arg(long, conflicts_with = "intents")]
    pub all: bool,

    /// Print only the bitmask
    #[arg(short, long)]
    pub quiet: bool,
}

impl CalcArgs {
    fn approved(&self) -> Vec<PrivilegedIntent> {
        PrivilegedIntent::ALL
            .into_iter()
            .filter(|flag| {
                self.all
                    || match flag {
                        PrivilegedIntent::Presence => self.presence,
                        PrivilegedIntent::GuildMembers => self.guild_members,
                        PrivilegedIntent::MessageContent => self.message_content,
                    }
            })
            .collect()
    }
}

/// Execute the calc command
pub fn execute(args: CalcArgs, ctx: &Context) -> CliResult<()> {
    let mut model = ctx.scratch_model()?;
    let snapshot = calculate(&mut model, &args)?;

    if args.quiet {
        println!("{}", snapshot.bitmask);
        return Ok(());
    }

    match ctx.format {
        OutputFormat::Table => print_snapshot(&snapshot),
        format => output::print_single(&snapshot, format),
    }
}

/// Apply the requested approvals and intents. The first rejected intent
/// aborts the calculation.
fn calculate(model: &mut SelectionModel, args: &CalcArgs) -> CliResult<SelectionSnapshot> {
    for flag in args.approved() {
        model.set_privileged_flag(flag, true);
    }

    let names: Vec<String> = if args.all {
        model.all_names().into_iter().map(String::from).collect()
    } else {
        args.intents.iter().map(|raw| normalize_intent_name(raw)).collect()
    };

    for name in &names {
        model.set_intent_enabled(name, true)?;
    }

    Ok(model.snapshot())
}

fn print_snapshot(snapshot: &SelectionSnapshot) -> CliResult<()> {
    println!("Intents: {}", snapshot.bitmask.to_string().bold());

    if snapshot.enabled.is_empty() {
        println!("Enabled: {}", "none".dimmed());
    } else {
        println!("Enabled: {}", snapshot.enabled.join(", "));
    }

    println!("\nWhat you have access to ({} events):", snapshot.event_count);
    for event in &snapshot.events {
        println!("  {}", event);
    }
    Ok(())
}
