//! Intents CLI - terminal front end for the gateway intents calculator
//!
//! Lets a bot developer:
//! - Build an intents bitmask from intent names
//! - Decode a bitmask back into intents
//! - See which gateway events a selection delivers
//! - Keep privileged-intent approvals and the theme between runs

use clap::{Parser, Subcommand};
use intents_catalog::IntentCatalog;
use std::ffi::OsString;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
pub mod output;

use commands::{calc, decode, events, list, privileged, theme, Context};
use config::CliConfig;
pub use error::{CliError, CliResult};

/// Intents CLI application
#[derive(Parser)]
#[command(name = "intents")]
#[command(about = "Gateway intents calculator", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "INTENTS_CONFIG")]
    config: Option<String>,

    /// Preference file path (privileged flags and theme)
    #[arg(long, env = "INTENTS_PREFS")]
    prefs: Option<String>,

    /// Output format (table, json, yaml)
    #[arg(short, long)]
    output: Option<output::OutputFormat>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand)]
enum Commands {
    /// List every intent with its bit and availability
    #[command(alias = "ls")]
    List,

    /// Compute the bitmask and event list for a set of intents
    Calc(calc::CalcArgs),

    /// Name the intents contained in a bitmask
    Decode {
        /// Bitmask in decimal or 0x-prefixed hex
        bitmask: intents_types::Bitmask,
    },

    /// Show the events one intent delivers, with documentation links
    Events {
        /// Intent name
        intent: String,
    },

    /// Show or change privileged-intent approvals
    Privileged(privileged::PrivilegedArgs),

    /// Show or change the theme preference
    Theme {
        #[arg(value_enum)]
        value: Option<theme::ThemeChoice>,
    },

    /// Show configuration
    Config,
}

/// Run using the current process arguments.
pub fn run() -> CliResult<()> {
    run_with_args(std::env::args_os())
}

/// Run using the provided argument iterator.
pub fn run_with_args<I, T>(args: I) -> CliResult<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::parse_from(args);

    let config = CliConfig::load(cli.config.as_deref())?;
    let color = !cli.no_color && config.color_enabled();

    // Logs go to stderr so stdout stays machine-readable
    let filter = if cli.verbose { "debug" } else { "warn" };
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(color)
                .without_time(),
        )
        .try_init();

    if !color {
        colored::control::set_override(false);
    }

    let ctx = Context {
        catalog: Arc::new(IntentCatalog::gateway()),
        preferences_path: config.preferences_path(cli.prefs.as_deref())?,
        format: config.output_format(cli.output),
    };

    match cli.command {
        Commands::List => list::execute(&ctx),
        Commands::Calc(args) => calc::execute(args, &ctx),
        Commands::Decode { bitmask } => decode::execute(bitmask, &ctx),
        Commands::Events { intent } => events::execute(&intent, &ctx),
        Commands::Privileged(args) => privileged::execute(args, &ctx),
        Commands::Theme { value } => theme::execute(value, &ctx),
        Commands::Config => {
            let config_path = match cli.config.as_deref() {
                Some(p) => p.to_string(),
                None => CliConfig::default_config_path()?.display().to_string(),
            };
            println!("Config: {}", config_path);
            println!("Preferences: {}", ctx.preferences_path.display());
            println!("Output: {:?}", ctx.format);
            println!("Settings: {:?}", config);
            Ok(())
        }
    }
}
