use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell;
use provision::PlatformId;
use std::path::PathBuf;

/// Profile used when none is given
pub const DEFAULT_PROFILE: &str = "standard";

#[derive(Parser)]
#[command(name = "toolbelt")]
#[command(author = "Alberto Cavalcante")]
#[command(version)]
#[command(about = "Provision your dev machine from a declarative tool catalog", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (also streams install output)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Catalog file (defaults to the user catalog, then the built-in one)
    #[arg(long, global = true, env = "TOOLBELT_CATALOG", value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Install the tools of a profile
    Install(InstallArgs),

    /// Show what a profile would install, without running anything
    Plan(TargetArgs),

    /// List available profiles
    Profiles,

    /// List all tools in the catalog
    Tools,

    /// Check that the essential tools are present
    Verify,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Which profile to resolve, and for which platform
#[derive(Args, Debug)]
pub struct TargetArgs {
    /// Profile to resolve [default: standard]
    #[arg(value_name = "PROFILE", conflicts_with = "profile_flag")]
    pub profile: Option<String>,

    /// Profile to resolve (same as the positional argument)
    #[arg(long = "profile", id = "profile_flag", value_name = "NAME")]
    pub profile_flag: Option<String>,

    /// Use this platform instead of detecting it
    #[arg(long, value_name = "ID")]
    pub platform: Option<PlatformId>,
}

impl TargetArgs {
    pub fn profile(&self) -> &str {
        self.profile
            .as_deref()
            .or(self.profile_flag.as_deref())
            .unwrap_or(DEFAULT_PROFILE)
    }

    pub fn platform(&self) -> PlatformId {
        self.platform.unwrap_or_else(provision::platform::detect)
    }
}

#[derive(Args, Debug)]
pub struct InstallArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Show what would be installed without running anything
    #[arg(long)]
    pub dry_run: bool,

    /// Reinstall tools even if already present
    #[arg(long)]
    pub force: bool,

    /// Skip tools that are already installed
    #[arg(
        long,
        value_name = "BOOL",
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = true,
        default_missing_value = "true"
    )]
    pub skip_existing: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("toolbelt").chain(args.iter().copied()))
    }

    fn install(args: &[&str]) -> InstallArgs {
        match parse(args).unwrap().command {
            Command::Install(args) => args,
            _ => panic!("expected install"),
        }
    }

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_install_defaults() {
        let args = install(&["install"]);
        assert_eq!(args.target.profile(), DEFAULT_PROFILE);
        assert!(args.skip_existing);
        assert!(!args.dry_run);
        assert!(!args.force);
        assert!(args.target.platform.is_none());
    }

    #[test]
    fn test_profile_positional_or_flag() {
        assert_eq!(install(&["install", "minimal"]).target.profile(), "minimal");
        assert_eq!(
            install(&["install", "--profile", "full"]).target.profile(),
            "full"
        );
        assert!(parse(&["install", "minimal", "--profile", "full"]).is_err());
    }

    #[test]
    fn test_skip_existing_values() {
        assert!(install(&["install", "--skip-existing"]).skip_existing);
        assert!(install(&["install", "--skip-existing=true"]).skip_existing);
        assert!(!install(&["install", "--skip-existing=false"]).skip_existing);
    }

    #[test]
    fn test_bare_skip_existing_leaves_profile_positional() {
        let args = install(&["install", "--skip-existing", "minimal"]);
        assert!(args.skip_existing);
        assert_eq!(args.target.profile(), "minimal");

        let args = install(&["install", "--skip-existing", "--dry-run", "full"]);
        assert!(args.skip_existing);
        assert!(args.dry_run);
        assert_eq!(args.target.profile(), "full");
    }

    #[test]
    fn test_platform_override() {
        let args = install(&["install", "--platform", "arch"]);
        assert_eq!(args.target.platform(), PlatformId::Arch);
        assert!(parse(&["install", "--platform", "beos"]).is_err());
    }

    #[test]
    fn test_global_flags() {
        let cli = parse(&["-vv", "plan", "--catalog", "/tmp/c.toml"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.catalog, Some(PathBuf::from("/tmp/c.toml")));
    }
}
