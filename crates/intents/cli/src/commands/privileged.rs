//! Privileged-intent approvals

use super::Context;
use crate::error::CliResult;
use crate::output::{self, print_success, yes_no, OutputFormat};
use clap::{Args, ValueEnum};
use intents_types::PrivilegedIntent;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Switch {
    On,
    Off,
}

/// Arguments for `intents privileged`
#[derive(Debug, Args)]
pub struct PrivilegedArgs {
    /// Privileged intent (presence, guild-members, message-content)
    pub flag: Option<PrivilegedIntent>,

    /// Approve or revoke; omit to show the current value
    #[arg(value_enum, requires = "flag")]
    pub state: Option<Switch>,
}

/// Execute the privileged command
pub fn execute(args: PrivilegedArgs, ctx: &Context) -> CliResult<()> {
    let mut model = ctx.persistent_model()?;

    if let (Some(flag), Some(state)) = (args.flag, args.state) {
        let value = matches!(state, Switch::On);
        model.save_privileged_flag(flag, value)?;
        print_success(&format!(
            "{} {}",
            flag.label(),
            if value { "approved" } else { "revoked" }
        ));
        return Ok(());
    }

    let flags = model.state().privileged_flags();
    if !matches!(ctx.format, OutputFormat::Table) {
        return output::print_single(&flags, ctx.format);
    }

    let shown: Vec<PrivilegedIntent> = match args.flag {
        Some(flag) => vec![flag],
        None => PrivilegedIntent::ALL.to_vec(),
    };
    for flag in shown {
        println!("{:<24} {}", flag.label(), yes_no(flags.get(flag)));
    }
    Ok(())
}
