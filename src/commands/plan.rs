//! Show a resolved plan without executing anything.

use anyhow::Result;
use colored::Colorize;

use crate::Context;
use crate::cli::TargetArgs;
use crate::ui;

use super::load_catalog;

pub fn run(ctx: &Context, args: &TargetArgs) -> Result<i32> {
    let catalog = load_catalog(ctx)?;
    let plan = provision::resolve(&catalog, args.profile())?;
    let platform = args.platform();

    ui::header(&format!("Plan for profile '{}'", plan.profile()));
    ui::kv("Platform", platform.as_str());
    ui::kv("Tools", &plan.len().to_string());
    println!();

    if plan.is_empty() {
        ui::info("Nothing to install");
        return Ok(0);
    }

    let width = plan.iter().map(str::len).max().unwrap_or(0);
    for (index, name) in plan.iter().enumerate() {
        let prefix = ui::step_prefix(index + 1, plan.len());
        let command = catalog
            .tool(name)
            .and_then(|tool| tool.install_command(platform));
        match command {
            Some(command) => println!("{prefix} {name:<width$}  {}", command.to_string().dimmed()),
            None => println!(
                "{prefix} {name:<width$}  {}",
                format!("unsupported on {platform}").yellow()
            ),
        }
    }

    Ok(0)
}
