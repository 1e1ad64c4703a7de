//! Append-only install log
//!
//! One timestamped line per event, in `<state_dir>/install.log`.

use anyhow::{Context, Result};
use chrono::{Local, SecondsFormat};
use provision::{ExecuteOptions, ExecutionOutcome, PlatformId, RunReport};
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::paths;

/// File name of the run log inside the state directory
pub const LOG_FILE: &str = "install.log";

pub struct RunLog {
    file: File,
    path: PathBuf,
}

impl RunLog {
    /// Open (or create) the log inside `dir`.
    pub fn open(dir: &Path) -> Result<Self> {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create state dir {}", dir.display()))?;
        let path = dir.join(LOG_FILE);
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("Failed to open {}", path.display()))?;
        Ok(Self { file, path })
    }

    /// Open the log in the state directory. Failure is a warning only.
    pub fn open_default() -> Option<Self> {
        match paths::state_dir().and_then(|dir| Self::open(&dir)) {
            Ok(log) => {
                log::debug!("Run log: {}", log.path.display());
                Some(log)
            }
            Err(e) => {
                log::warn!("Run log disabled: {e:#}");
                None
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one event line.
    pub fn record(&mut self, event: &str) {
        let stamp = Local::now().to_rfc3339_opts(SecondsFormat::Secs, false);
        if let Err(e) = writeln!(self.file, "{stamp} {event}") {
            log::warn!("Failed to write {}: {e}", self.path.display());
        }
    }

    pub fn run_start(&mut self, profile: &str, platform: PlatformId, options: &ExecuteOptions) {
        self.record(&format!(
            "run start profile={profile} platform={platform} dry_run={} force={} skip_existing={}",
            options.dry_run, options.force, options.skip_existing
        ));
    }

    pub fn outcome(&mut self, outcome: &ExecutionOutcome) {
        match &outcome.message {
            Some(message) => self.record(&format!("{} {}: {message}", outcome.tool, outcome.kind)),
            None => self.record(&format!("{} {}", outcome.tool, outcome.kind)),
        }
        for warning in &outcome.warnings {
            self.record(&format!("{} warning: {warning}", outcome.tool));
        }
    }

    pub fn summary(&mut self, report: &RunReport) {
        for line in report.text.lines() {
            self.record(&format!("summary {line}"));
        }
        self.record(&format!("run end exit={}", report.exit_code));
    }
}
