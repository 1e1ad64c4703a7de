//! Centralized path resolution for toolbelt
//!
//! # Environment Variables
//!
//! - `TOOLBELT_CONFIG_DIR` - Override config directory (e.g., `~/dotfiles/toolbelt`)
//! - `TOOLBELT_STATE_DIR` - Override state directory (holds the install log)
//!
//! # Path Resolution Priority
//!
//! For config_dir():
//! 1. `TOOLBELT_CONFIG_DIR` environment variable
//! 2. `XDG_CONFIG_HOME/toolbelt` (if set)
//! 3. `~/.config/toolbelt`
//!
//! For state_dir():
//! 1. `TOOLBELT_STATE_DIR` environment variable
//! 2. `XDG_STATE_HOME/toolbelt` (if set)
//! 3. `~/.local/state/toolbelt`

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Environment variable for config directory override
pub const ENV_CONFIG_DIR: &str = "TOOLBELT_CONFIG_DIR";

/// Environment variable for state directory override
pub const ENV_STATE_DIR: &str = "TOOLBELT_STATE_DIR";

const APP_DIR: &str = "toolbelt";

/// File name of the user catalog inside the config directory
pub const CATALOG_FILE: &str = "catalog.toml";

/// Get the toolbelt config directory path
pub fn config_dir() -> Result<PathBuf> {
    resolve_dir(
        ENV_CONFIG_DIR,
        std::env::var(ENV_CONFIG_DIR).ok(),
        std::env::var("XDG_CONFIG_HOME").ok(),
        &[".config"],
    )
}

/// Get the toolbelt state directory path
pub fn state_dir() -> Result<PathBuf> {
    resolve_dir(
        ENV_STATE_DIR,
        std::env::var(ENV_STATE_DIR).ok(),
        std::env::var("XDG_STATE_HOME").ok(),
        &[".local", "state"],
    )
}

/// User catalog path, if one exists in the config directory
pub fn user_catalog() -> Option<PathBuf> {
    let path = config_dir().ok()?.join(CATALOG_FILE);
    path.is_file().then_some(path)
}

fn resolve_dir(
    env_name: &str,
    env_override: Option<String>,
    xdg: Option<String>,
    home_relative: &[&str],
) -> Result<PathBuf> {
    // 1. Check environment variable override
    if let Some(dir) = env_override.filter(|d| !d.is_empty()) {
        let path = expand(&dir);
        log::debug!("Using {} from env: {}", env_name, path.display());
        return Ok(path);
    }

    // 2. Check XDG base directory
    if let Some(base) = xdg.filter(|d| !d.is_empty()) {
        let path = PathBuf::from(base).join(APP_DIR);
        log::debug!("Using XDG dir: {}", path.display());
        return Ok(path);
    }

    // 3. Home default
    let home = dirs::home_dir().context("Could not determine home directory")?;
    let path = home_relative
        .iter()
        .fold(home, |acc, part| acc.join(part))
        .join(APP_DIR);
    log::debug!("Using default dir: {}", path.display());
    Ok(path)
}

/// Expand ~ and environment variables in a path string.
pub fn expand(path: &str) -> PathBuf {
    let expanded = shellexpand::full(path).unwrap_or(std::borrow::Cow::Borrowed(path));
    PathBuf::from(expanded.as_ref())
}

/// Display a path with the home directory shortened to `~`
pub fn display(path: &Path) -> String {
    if let Some(home) = dirs::home_dir()
        && let Ok(rest) = path.strip_prefix(&home)
    {
        return Path::new("~").join(rest).display().to_string();
    }
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn home() -> PathBuf {
        dirs::home_dir().unwrap()
    }

    #[test]
    fn test_env_override_wins() {
        let path = resolve_dir(
            ENV_CONFIG_DIR,
            Some("/custom/config/path".into()),
            Some("/tmp/xdg".into()),
            &[".config"],
        )
        .unwrap();
        assert_eq!(path, PathBuf::from("/custom/config/path"));
    }

    #[test]
    fn test_env_override_with_tilde() {
        let path = resolve_dir(
            ENV_CONFIG_DIR,
            Some("~/dotfiles/toolbelt".into()),
            None,
            &[".config"],
        )
        .unwrap();
        assert_eq!(path, home().join("dotfiles").join("toolbelt"));
    }

    #[test]
    fn test_xdg_base() {
        let path = resolve_dir(
            ENV_STATE_DIR,
            None,
            Some("/tmp/xdg-state-test".into()),
            &[".local", "state"],
        )
        .unwrap();
        assert_eq!(path, PathBuf::from("/tmp/xdg-state-test/toolbelt"));
    }

    #[test]
    fn test_empty_values_are_ignored() {
        let path = resolve_dir(
            ENV_STATE_DIR,
            Some(String::new()),
            Some(String::new()),
            &[".local", "state"],
        )
        .unwrap();
        assert_eq!(path, home().join(".local").join("state").join("toolbelt"));
    }

    #[test]
    fn test_home_default() {
        let path = resolve_dir(ENV_CONFIG_DIR, None, None, &[".config"]).unwrap();
        assert_eq!(path, home().join(".config").join("toolbelt"));
    }

    #[test]
    fn test_expand_absolute() {
        assert_eq!(expand("/absolute/path"), PathBuf::from("/absolute/path"));
    }

    #[test]
    fn test_expand_unknown_env_var_unchanged() {
        let result = expand("/path/$NONEXISTENT_VAR_12345/file");
        assert_eq!(result, PathBuf::from("/path/$NONEXISTENT_VAR_12345/file"));
    }

    #[test]
    fn test_display_shortens_home() {
        let path = home().join(".local").join("state");
        assert_eq!(display(&path), "~/.local/state");
        assert_eq!(display(Path::new("/etc/os-release")), "/etc/os-release");
    }
}
