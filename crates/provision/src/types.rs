//! Core types for tool execution

use serde::{Deserialize, Serialize};
use std::fmt;
use std::process::Output;

/// Terminal classification of one tool within a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    /// Already present, nothing done
    Skipped,
    /// Install command succeeded
    Installed,
    /// Install command shown but not run
    DryRun,
    /// Install command failed or could not be launched
    Failed,
    /// No install command for the platform
    Unsupported,
}

impl OutcomeKind {
    /// All kinds, in summary order.
    pub const ALL: [OutcomeKind; 5] = [
        Self::Installed,
        Self::Skipped,
        Self::DryRun,
        Self::Unsupported,
        Self::Failed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Skipped => "skipped",
            Self::Installed => "installed",
            Self::DryRun => "dry_run",
            Self::Failed => "failed",
            Self::Unsupported => "unsupported",
        }
    }

    /// Whether this outcome makes the run fail.
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed)
    }
}

impl fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of processing one tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionOutcome {
    pub tool: String,
    pub kind: OutcomeKind,
    /// Error or explanation, if any
    pub message: Option<String>,
    /// Post-install failures on an otherwise successful install
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl ExecutionOutcome {
    fn new(tool: &str, kind: OutcomeKind, message: Option<String>) -> Self {
        Self {
            tool: tool.to_string(),
            kind,
            message,
            warnings: Vec::new(),
        }
    }

    pub fn skipped(tool: &str) -> Self {
        Self::new(tool, OutcomeKind::Skipped, None)
    }

    pub fn installed(tool: &str, warnings: Vec<String>) -> Self {
        Self {
            warnings,
            ..Self::new(tool, OutcomeKind::Installed, None)
        }
    }

    pub fn dry_run(tool: &str, command: impl fmt::Display) -> Self {
        Self::new(
            tool,
            OutcomeKind::DryRun,
            Some(format!("would run: {command}")),
        )
    }

    pub fn failed(tool: &str, error: impl Into<String>) -> Self {
        Self::new(tool, OutcomeKind::Failed, Some(error.into()))
    }

    pub fn unsupported(tool: &str, platform: impl fmt::Display) -> Self {
        Self::new(
            tool,
            OutcomeKind::Unsupported,
            Some(format!("no install command for {platform}")),
        )
    }
}

/// Options for execution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecuteOptions {
    /// Don't launch install commands, just show what would happen
    pub dry_run: bool,
    /// Skip tools that already verify as present
    pub skip_existing: bool,
    /// Install even if already present; overrides `skip_existing`
    pub force: bool,
    /// Stream command output to the terminal
    pub verbose: bool,
}

impl Default for ExecuteOptions {
    fn default() -> Self {
        Self {
            dry_run: false,
            skip_existing: true,
            force: false,
            verbose: false,
        }
    }
}

/// Output from a launched command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
    pub success: bool,
    /// Exit code, `None` if terminated by a signal
    pub code: Option<i32>,
}

impl From<Output> for CommandOutput {
    fn from(output: Output) -> Self {
        Self {
            stdout: output.stdout,
            stderr: output.stderr,
            success: output.status.success(),
            code: output.status.code(),
        }
    }
}

impl CommandOutput {
    /// Successful output with no captured streams.
    pub fn ok() -> Self {
        Self {
            success: true,
            code: Some(0),
            ..Self::default()
        }
    }

    /// Failed output with the given exit code and stderr.
    pub fn failed(code: i32, stderr: impl Into<String>) -> Self {
        Self {
            stderr: stderr.into().into_bytes(),
            success: false,
            code: Some(code),
            ..Self::default()
        }
    }

    /// Get stdout as a string
    pub fn stdout_str(&self) -> String {
        String::from_utf8_lossy(&self.stdout).to_string()
    }

    /// Get stderr as a string
    pub fn stderr_str(&self) -> String {
        String::from_utf8_lossy(&self.stderr).to_string()
    }

    /// Short description of a failure: exit status plus last stderr line.
    pub fn failure_message(&self) -> String {
        let status = match self.code {
            Some(code) => format!("exited with status {code}"),
            None => "terminated by signal".to_string(),
        };

        let stderr = self.stderr_str();
        match stderr.lines().rev().map(str::trim).find(|l| !l.is_empty()) {
            Some(line) => format!("{status}: {line}"),
            None => status,
        }
    }
}
