//! Error types for catalog loading and plan resolution.
//!
//! Only structural failures are errors. A tool that cannot be installed on the
//! current platform, or whose install command fails, is reported through
//! [`OutcomeKind`](crate::types::OutcomeKind) instead so the run can continue.

use std::io;
use std::path::PathBuf;

/// Result type alias for provisioning operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The catalog could not be loaded.
///
/// Loading is all-or-nothing: any of these aborts the run before a single
/// tool is processed.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The catalog file could not be read.
    #[error("could not read catalog {path}: {source}")]
    Read {
        /// Path of the catalog file.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: io::Error,
    },

    /// The catalog is not well-formed TOML or has the wrong shape.
    #[error("invalid catalog {origin}: {source}")]
    Parse {
        /// Where the catalog came from (file path or a label).
        origin: String,
        /// Parser error, including line and column.
        #[source]
        source: toml::de::Error,
    },

    /// A group lists a tool that is not defined.
    #[error("{origin}: groups.{group} references unknown tool '{tool}'")]
    UnknownTool {
        /// Where the catalog came from.
        origin: String,
        /// Group holding the reference.
        group: String,
        /// The unresolved tool name.
        tool: String,
    },

    /// A profile lists a group that is not defined.
    #[error("{origin}: profiles.{profile} references unknown group '{group}'")]
    UnknownGroup {
        /// Where the catalog came from.
        origin: String,
        /// Profile holding the reference.
        profile: String,
        /// The unresolved group name.
        group: String,
    },

    /// A command in a tool definition cannot be turned into a descriptor.
    #[error("{origin}: tools.{tool}.{field}: {reason}")]
    InvalidCommand {
        /// Where the catalog came from.
        origin: String,
        /// Tool holding the command.
        tool: String,
        /// Field path inside the tool, e.g. `install.macos`.
        field: String,
        /// What is wrong with it.
        reason: String,
    },
}

/// The requested profile does not exist in the catalog.
///
/// Distinct from a profile that exists but resolves to no tools, which is a
/// valid, empty plan.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("profile '{profile}' not found (available: {})", available_list(.available))]
pub struct NotFoundError {
    /// The requested profile name.
    pub profile: String,
    /// Profiles the catalog does define, sorted.
    pub available: Vec<String>,
}

fn available_list(available: &[String]) -> String {
    if available.is_empty() {
        "none".to_string()
    } else {
        available.join(", ")
    }
}

/// Any fatal provisioning error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Catalog failed to load or validate.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Requested profile is missing.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),
}
