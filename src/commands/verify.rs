//! Check that the essential tools are installed.

use anyhow::Result;
use provision::{Catalog, CommandRunner, ExecuteOptions, SystemRunner, ToolExecutor};

use crate::Context;
use crate::ui;

use super::load_catalog;

/// Tools every provisioned machine is expected to have
pub const ESSENTIALS: [&str; 7] = ["git", "curl", "zsh", "tmux", "nvim", "fzf", "rg"];

pub fn run(ctx: &Context) -> Result<i32> {
    let catalog = load_catalog(ctx)?;
    let runner = SystemRunner::new();
    let results = check(&catalog, &runner, &ESSENTIALS);

    ui::header("Essential Tools");
    for (name, verified) in &results {
        if *verified {
            ui::success(name);
        } else {
            ui::error(&format!("{name} not found"));
        }
    }

    let found = results.iter().filter(|(_, ok)| *ok).count();
    println!();
    if found == results.len() {
        if !ctx.quiet {
            ui::success(&format!("All {found} essential tools verified"));
        }
        Ok(0)
    } else {
        ui::warn(&format!(
            "{found}/{} essential tools verified; run 'toolbelt install' to fix",
            results.len()
        ));
        Ok(1)
    }
}

/// Verify each name, using the catalog's definition when there is one.
fn check<'a>(
    catalog: &Catalog,
    runner: &dyn CommandRunner,
    names: &[&'a str],
) -> Vec<(&'a str, bool)> {
    let executor = ToolExecutor::new(runner, ExecuteOptions::default());
    names
        .iter()
        .map(|name| {
            let verified = match catalog.tool(name) {
                Some(tool) => executor.is_verified(tool),
                None => runner.is_on_path(name),
            };
            log::debug!("{name}: verified={verified}");
            (*name, verified)
        })
        .collect()
}
