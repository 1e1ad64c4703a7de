use colored::{ColoredString, Colorize};
use provision::OutcomeKind;

/// Print an info message
pub fn info(msg: &str) {
    println!("{} {}", "ℹ".blue(), msg);
}

/// Print a success message
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Print a warning message
pub fn warn(msg: &str) {
    println!("{} {}", "⚠".yellow(), msg);
}

/// Print an error message
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Print a dim/muted message
pub fn dim(msg: &str) {
    println!("  {}", msg.dimmed());
}

/// Print a header/title
pub fn header(title: &str) {
    println!();
    println!("{}", title.bold());
    println!("{}", "─".repeat(title.chars().count()).dimmed());
}

/// Print a key-value pair
pub fn kv(key: &str, value: &str) {
    println!("  {}: {}", key.dimmed(), value);
}

/// Step counter, e.g. `[2/7]`
pub fn step_prefix(num: usize, total: usize) -> String {
    format!("[{num}/{total}]").blue().bold().to_string()
}

/// Glyph shown next to a tool for its outcome
pub fn outcome_symbol(kind: OutcomeKind) -> ColoredString {
    match kind {
        OutcomeKind::Installed => "✓".green(),
        OutcomeKind::Skipped => "·".dimmed(),
        OutcomeKind::DryRun => "→".blue(),
        OutcomeKind::Unsupported => "⚠".yellow(),
        OutcomeKind::Failed => "✗".red(),
    }
}
