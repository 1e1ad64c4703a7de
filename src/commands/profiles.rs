use anyhow::Result;
use colored::Colorize;

use crate::Context;
use crate::cli::DEFAULT_PROFILE;
use crate::ui;

use super::load_catalog;

pub fn run(ctx: &Context) -> Result<i32> {
    let catalog = load_catalog(ctx)?;

    ui::header("Profiles");
    if catalog.profiles().next().is_none() {
        ui::dim("(none defined)");
        return Ok(0);
    }

    let width = catalog.profiles().map(|p| p.name().len()).max().unwrap_or(0);
    for profile in catalog.profiles() {
        let marker = if profile.name() == DEFAULT_PROFILE {
            " (default)".dimmed().to_string()
        } else {
            String::new()
        };
        println!(
            "  {:<width$}  {}{marker}",
            profile.name().bold(),
            profile.description()
        );
    }

    Ok(0)
}
