//! Structured command descriptors
//!
//! Catalog commands are parsed once, at load time, into a [`Command`]. A
//! command either names a program and its arguments ([`Command::Exec`]), or is
//! a raw line that needs a shell ([`Command::Shell`]). Whether a command runs
//! at all is decided by the executor, never by inspecting its text.

use serde::Deserialize;
use std::borrow::Cow;
use std::fmt;

/// Characters that only mean something to a shell.
///
/// A plain catalog string containing any of these is kept as a shell line.
const SHELL_SYNTAX: &[char] = &[
    '|', '&', ';', '<', '>', '(', ')', '$', '`', '*', '?', '[', ']', '{', '}', '~', '!', '#',
    '\n',
];

/// A command to launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Launch `program` directly with `args`, no shell involved.
    Exec { program: String, args: Vec<String> },
    /// Hand the line to `sh -c`.
    Shell(String),
}

impl Command {
    /// Build a direct-exec command.
    pub fn exec<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Exec {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Build a shell-line command.
    pub fn shell(line: impl Into<String>) -> Self {
        Self::Shell(line.into())
    }

    /// Parse a catalog command line.
    ///
    /// Lines with shell syntax stay whole; everything else is split into
    /// words using POSIX shell quoting rules.
    pub fn parse_line(line: &str) -> Result<Self, String> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Err("command is empty".to_string());
        }

        if trimmed.contains(SHELL_SYNTAX) {
            return Ok(Self::Shell(trimmed.to_string()));
        }

        let mut words = shlex::split(trimmed)
            .ok_or_else(|| format!("unbalanced quotes in '{trimmed}'"))?
            .into_iter();
        let program = words
            .next()
            .ok_or_else(|| "command is empty".to_string())?;

        Ok(Self::Exec {
            program,
            args: words.collect(),
        })
    }

    /// Whether this command needs a shell to run.
    pub fn is_shell(&self) -> bool {
        matches!(self, Self::Shell(_))
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shell(line) => f.write_str(line),
            Self::Exec { program, args } => {
                f.write_str(&quote(program))?;
                for arg in args {
                    write!(f, " {}", quote(arg))?;
                }
                Ok(())
            }
        }
    }
}

fn quote(word: &str) -> Cow<'_, str> {
    shlex::try_quote(word).unwrap_or(Cow::Borrowed(word))
}

/// A command as written in the catalog, before validation.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawCommand {
    Line(String),
    Exec {
        program: String,
        #[serde(default)]
        args: Vec<String>,
    },
    Shell {
        shell: String,
    },
}

impl RawCommand {
    pub(crate) fn into_command(self) -> Result<Command, String> {
        match self {
            Self::Line(line) => Command::parse_line(&line),
            Self::Exec { program, args } => {
                if program.trim().is_empty() {
                    return Err("program is empty".to_string());
                }
                Ok(Command::Exec { program, args })
            }
            Self::Shell { shell } => {
                if shell.trim().is_empty() {
                    return Err("shell line is empty".to_string());
                }
                Ok(Command::Shell(shell))
            }
        }
    }
}
