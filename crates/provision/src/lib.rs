//! # Provision
//!
//! Declarative tool installation: resolve a named profile from a catalog into
//! an ordered install plan, then install each tool idempotently.
//!
//! ## Core Concepts
//!
//! - **Catalog**: tools (with per-platform install commands), groups of tools,
//!   and profiles of groups, loaded from TOML and validated up front
//! - **InstallPlan**: the ordered, de-duplicated tools of one profile
//! - **ToolExecutor**: turns one tool into exactly one outcome
//! - **RunReporter**: aggregates outcomes and decides the exit code
//!
//! ## Example
//!
//! ```no_run
//! use provision::{Catalog, ExecuteOptions, NoProgress, SystemRunner, execute, platform, resolve};
//!
//! let catalog = Catalog::load("catalog.toml")?;
//! let plan = resolve(&catalog, "standard")?;
//! let report = execute(
//!     &plan,
//!     &catalog,
//!     platform::detect(),
//!     ExecuteOptions::default(),
//!     &SystemRunner::new(),
//!     &mut NoProgress,
//! );
//! println!("{}", report.text);
//! std::process::exit(report.exit_code);
//! # Ok::<(), provision::Error>(())
//! ```
//!
//! ## Seams
//!
//! - [`CommandRunner`]: launches processes and looks up executables
//! - [`ProgressCallback`]: receives progress updates as tools are processed

pub mod catalog;
pub mod command;
pub mod context;
pub mod error;
pub mod executor;
pub mod planner;
pub mod platform;
pub mod report;
pub mod runner;
pub mod types;

// Re-export main types at crate root
pub use catalog::{Catalog, Group, Profile, Tool};
pub use command::Command;
pub use context::{NoProgress, ProgressCallback};
pub use error::{ConfigError, Error, NotFoundError, Result};
pub use executor::{ToolExecutor, execute};
pub use planner::{InstallPlan, resolve};
pub use platform::PlatformId;
pub use report::{RunReport, RunReporter, RunSummary};
pub use runner::{CommandRunner, SystemRunner};
pub use types::{CommandOutput, ExecuteOptions, ExecutionOutcome, OutcomeKind};
