//! Command launching.
//!
//! The [`CommandRunner`] trait is the only place the crate touches processes,
//! allowing for different implementations (real processes via
//! [`SystemRunner`], scripted mocks for testing).

use crate::command::Command;
use crate::types::CommandOutput;
use std::io;
use std::process::{self, Stdio};

/// Shell used for [`Command::Shell`] lines.
const SHELL: &str = "sh";

/// Launches commands and answers search-path lookups.
pub trait CommandRunner {
    /// Launch `command` and wait for it.
    ///
    /// With `stream` the child's stdout and stderr go straight to the
    /// terminal and the returned output carries no captured bytes. Launch
    /// failures (missing program, permission denied) are `Err`; a non-zero
    /// exit is an `Ok` output with `success == false`.
    fn run(&self, command: &Command, stream: bool) -> io::Result<CommandOutput>;

    /// Whether `program` resolves to an executable on the search path.
    fn is_on_path(&self, program: &str) -> bool;

    /// Run a command and return just success/failure, capturing output.
    fn run_status(&self, command: &Command) -> bool {
        self.run(command, false).is_ok_and(|output| output.success)
    }
}

/// Runs commands as real child processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }

    fn build(command: &Command) -> process::Command {
        match command {
            Command::Exec { program, args } => {
                let mut cmd = process::Command::new(program);
                cmd.args(args);
                cmd
            }
            Command::Shell(line) => {
                let mut cmd = process::Command::new(SHELL);
                cmd.arg("-c").arg(line);
                cmd
            }
        }
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, command: &Command, stream: bool) -> io::Result<CommandOutput> {
        log::debug!("Running: {command}");
        let mut cmd = Self::build(command);
        cmd.stdin(Stdio::null());

        if stream {
            let status = cmd
                .stdout(Stdio::inherit())
                .stderr(Stdio::inherit())
                .status()?;
            return Ok(CommandOutput {
                success: status.success(),
                code: status.code(),
                ..CommandOutput::default()
            });
        }

        let output = cmd.output()?;
        log::trace!(
            "{command} exited with {:?}, {} bytes stdout, {} bytes stderr",
            output.status.code(),
            output.stdout.len(),
            output.stderr.len()
        );
        Ok(output.into())
    }

    fn is_on_path(&self, program: &str) -> bool {
        which::which(program).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exec_success_and_failure() {
        let runner = SystemRunner::new();
        let ok = runner.run(&Command::exec("true", Vec::<String>::new()), false).unwrap();
        assert!(ok.success);
        assert_eq!(ok.code, Some(0));

        let failed = runner.run(&Command::exec("false", Vec::<String>::new()), false).unwrap();
        assert!(!failed.success);
        assert_eq!(failed.code, Some(1));
    }

    #[test]
    fn test_exec_captures_output() {
        let runner = SystemRunner::new();
        let output = runner
            .run(&Command::exec("echo", ["hello", "world"]), false)
            .unwrap();
        assert_eq!(output.stdout_str().trim(), "hello world");
    }

    #[test]
    fn test_exec_does_not_interpret_shell_syntax() {
        let runner = SystemRunner::new();
        let output = runner.run(&Command::exec("echo", ["$HOME"]), false).unwrap();
        assert_eq!(output.stdout_str().trim(), "$HOME");
    }

    #[test]
    fn test_shell_line() {
        let runner = SystemRunner::new();
        let output = runner
            .run(&Command::shell("echo oops >&2; exit 3"), false)
            .unwrap();
        assert!(!output.success);
        assert_eq!(output.code, Some(3));
        assert_eq!(output.stderr_str().trim(), "oops");
    }

    #[test]
    fn test_missing_program_is_launch_error() {
        let runner = SystemRunner::new();
        let result = runner.run(
            &Command::exec("definitely-not-a-real-program-xyz", Vec::<String>::new()),
            false,
        );
        assert!(result.is_err());
        assert!(!runner.run_status(&Command::exec(
            "definitely-not-a-real-program-xyz",
            Vec::<String>::new()
        )));
    }

    #[test]
    fn test_is_on_path() {
        let runner = SystemRunner::new();
        assert!(runner.is_on_path("sh"));
        assert!(!runner.is_on_path("definitely-not-a-real-program-xyz"));
    }
}
