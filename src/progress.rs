//! Live console progress for install runs.

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use provision::{ExecutionOutcome, OutcomeKind, PlatformId, ProgressCallback, RunReport};
use std::time::Duration;

use crate::runlog::RunLog;
use crate::ui;

/// Prints every outcome as it happens and mirrors it to the run log.
///
/// While a tool is being processed a spinner shows its name, unless command
/// output is being streamed to the terminal.
pub struct ConsoleProgress {
    quiet: bool,
    streaming: bool,
    spinner: Option<ProgressBar>,
    position: (usize, usize),
    log: Option<RunLog>,
}

impl ConsoleProgress {
    pub fn new(quiet: bool, streaming: bool, log: Option<RunLog>) -> Self {
        Self {
            quiet,
            streaming,
            spinner: None,
            position: (0, 0),
            log,
        }
    }

    /// Print the final summary and close the log.
    pub fn finish(mut self, report: &RunReport) {
        if let Some(log) = self.log.as_mut() {
            log.summary(report);
        }

        if self.quiet && report.exit_code == 0 {
            return;
        }

        ui::header("Summary");
        let mut lines = report.text.lines();
        if let Some(counts) = lines.next() {
            println!("  {counts}");
        }
        for line in lines {
            ui::error(line);
        }
        if let Some(log) = &self.log {
            ui::kv("Log", &crate::paths::display(log.path()));
        }
    }

    fn start_spinner(&mut self, message: String) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(message);
        pb.enable_steady_tick(Duration::from_millis(100));
        self.spinner = Some(pb);
    }

    fn print_outcome(&self, outcome: &ExecutionOutcome) {
        let (index, total) = self.position;
        let prefix = ui::step_prefix(index + 1, total);
        let tool = outcome.tool.bold();
        let message = outcome.message.as_deref().unwrap_or_default();
        let symbol = ui::outcome_symbol(outcome.kind);

        match outcome.kind {
            OutcomeKind::Failed => eprintln!("{prefix} {symbol} {tool}: {message}"),
            _ if self.quiet => {}
            OutcomeKind::Installed => println!("{prefix} {symbol} {tool} installed"),
            OutcomeKind::Skipped => {
                let text = format!("{} already installed", outcome.tool);
                println!("{prefix} {symbol} {}", text.dimmed());
            }
            OutcomeKind::DryRun | OutcomeKind::Unsupported => {
                println!("{prefix} {symbol} {tool}: {message}");
            }
        }
    }
}

impl ProgressCallback for ConsoleProgress {
    fn on_run_start(&mut self, profile: &str, platform: PlatformId, total: usize) {
        if !self.quiet {
            ui::header(&format!("Installing profile '{profile}'"));
            ui::kv("Platform", platform.as_str());
            ui::kv("Tools", &total.to_string());
            println!();
        }
        if total == 0 && !self.quiet {
            ui::info("Nothing to install");
        }
    }

    fn on_tool_start(&mut self, index: usize, total: usize, tool: &str) {
        self.position = (index, total);
        if self.streaming {
            if !self.quiet {
                println!("{} {}", ui::step_prefix(index + 1, total), tool.bold());
            }
        } else if !self.quiet {
            self.start_spinner(format!("[{}/{total}] {tool}", index + 1));
        }
    }

    fn on_tool_complete(&mut self, outcome: &ExecutionOutcome) {
        if let Some(pb) = self.spinner.take() {
            pb.finish_and_clear();
        }
        self.print_outcome(outcome);
        if let Some(log) = self.log.as_mut() {
            log.outcome(outcome);
        }
    }
}
