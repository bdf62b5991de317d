//! Theme preference

use super::Context;
use crate::error::CliResult;
use crate::output::print_success;
use clap::ValueEnum;
use intents_types::Theme;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ThemeChoice {
    Dark,
    Light,
    Toggle,
}

/// Execute the theme command
pub fn execute(choice: Option<ThemeChoice>, ctx: &Context) -> CliResult<()> {
    let mut model = ctx.persistent_model()?;

    let theme = match choice {
        None => {
            println!("{}", model.theme());
            return Ok(());
        }
        Some(ThemeChoice::Dark) => Theme::Dark,
        Some(ThemeChoice::Light) => Theme::Light,
        Some(ThemeChoice::Toggle) => model.theme().toggled(),
    };
    model.save_theme(theme)?;

    print_success(&format!("Theme set to {}", theme));
    Ok(())
}
