//! Run summary and exit code policy

use crate::types::{ExecutionOutcome, OutcomeKind};
use std::fmt::Write as _;

/// Exit code of a run without failed outcomes.
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code of a run with at least one failed outcome.
pub const EXIT_FAILURE: i32 = 1;

/// Outcomes of one run, in plan order, with per-kind counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub outcomes: Vec<ExecutionOutcome>,
    pub installed: usize,
    pub skipped: usize,
    pub dry_run: usize,
    pub unsupported: usize,
    pub failed: usize,
    /// Post-install warnings across all tools
    pub warnings: usize,
}

impl RunSummary {
    /// Check if the run was fully successful (no failures)
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    /// Total number of tools processed
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    /// Count for one outcome kind
    pub fn count(&self, kind: OutcomeKind) -> usize {
        match kind {
            OutcomeKind::Installed => self.installed,
            OutcomeKind::Skipped => self.skipped,
            OutcomeKind::DryRun => self.dry_run,
            OutcomeKind::Unsupported => self.unsupported,
            OutcomeKind::Failed => self.failed,
        }
    }

    /// Names of tools whose install failed, in plan order
    pub fn failed_tools(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter(|o| o.kind.is_failure())
            .map(|o| o.tool.as_str())
            .collect()
    }

    /// Outcome kinds in plan order
    pub fn kinds(&self) -> Vec<OutcomeKind> {
        self.outcomes.iter().map(|o| o.kind).collect()
    }

    /// Process exit code for this run
    pub fn exit_code(&self) -> i32 {
        if self.is_success() {
            EXIT_SUCCESS
        } else {
            EXIT_FAILURE
        }
    }

    fn add_result(&mut self, outcome: ExecutionOutcome) {
        match outcome.kind {
            OutcomeKind::Installed => self.installed += 1,
            OutcomeKind::Skipped => self.skipped += 1,
            OutcomeKind::DryRun => self.dry_run += 1,
            OutcomeKind::Unsupported => self.unsupported += 1,
            OutcomeKind::Failed => self.failed += 1,
        }
        self.warnings += outcome.warnings.len();
        self.outcomes.push(outcome);
    }
}

/// Finalized run: summary, printable text and exit code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub summary: RunSummary,
    pub text: String,
    pub exit_code: i32,
}

/// Collects outcomes during a run.
///
/// [`summarize`](Self::summarize) consumes the reporter, so a run is
/// finalized exactly once.
#[derive(Debug, Default)]
pub struct RunReporter {
    summary: RunSummary,
}

impl RunReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one outcome.
    pub fn record(&mut self, outcome: ExecutionOutcome) {
        log::info!("{}: {}", outcome.tool, outcome.kind);
        self.summary.add_result(outcome);
    }

    /// Finalize the run.
    pub fn summarize(self) -> RunReport {
        let summary = self.summary;
        let text = render(&summary);
        let exit_code = summary.exit_code();
        RunReport {
            summary,
            text,
            exit_code,
        }
    }
}

/// One line of counts, then the failed tools if any.
fn render(summary: &RunSummary) -> String {
    let counts: Vec<String> = OutcomeKind::ALL
        .iter()
        .map(|kind| format!("{} {kind}", summary.count(*kind)))
        .collect();

    let mut text = format!("{} tools: {}", summary.total(), counts.join(", "));
    let failed = summary.failed_tools();
    if !failed.is_empty() {
        let _ = write!(text, "\nFailed: {}", failed.join(", "));
    }
    text
}
