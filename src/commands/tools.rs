use anyhow::Result;
use colored::Colorize;

use crate::Context;
use crate::ui;

use super::load_catalog;

pub fn run(ctx: &Context) -> Result<i32> {
    let catalog = load_catalog(ctx)?;

    ui::header("Tools");
    let width = catalog.tools().map(|t| t.name().len()).max().unwrap_or(0);
    for tool in catalog.tools() {
        let category = if tool.category().is_empty() {
            String::new()
        } else {
            format!("[{}] ", tool.category()).dimmed().to_string()
        };
        println!(
            "  {:<width$}  {category}{}",
            tool.name().bold(),
            tool.description()
        );
    }

    Ok(0)
}
