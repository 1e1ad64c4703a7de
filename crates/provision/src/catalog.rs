//! Tool catalog: tools, groups and profiles
//!
//! The catalog is a TOML document with three top-level tables:
//!
//! ```toml
//! [tools.ripgrep]
//! description = "Fast recursive grep"
//! category = "modern_cli"
//! verify = "rg --version"
//! install.macos = "brew install ripgrep"
//! install.ubuntu = "sudo apt-get install -y ripgrep"
//! post_install = []
//!
//! [groups]
//! core = ["git", "curl", "ripgrep"]
//!
//! [profiles.minimal]
//! description = "Bare essentials"
//! groups = ["core"]
//! ```
//!
//! The whole document is parsed and validated up front. Either every group and
//! profile reference resolves and every command is well-formed, or loading
//! fails and nothing is usable. Unknown fields are ignored so older binaries
//! can read newer catalogs.

use crate::command::{Command, RawCommand};
use crate::error::ConfigError;
use crate::platform::PlatformId;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;

/// A unit of installable software.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tool {
    name: String,
    description: String,
    category: String,
    install: BTreeMap<String, Command>,
    verify: Option<Command>,
    post_install: Vec<Command>,
}

impl Tool {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Install command for a platform.
    ///
    /// Tries the exact platform id, then the `linux` family key for Linux
    /// flavors. `None` means the tool is unsupported on `platform`.
    pub fn install_command(&self, platform: PlatformId) -> Option<&Command> {
        platform
            .lookup_keys()
            .into_iter()
            .find_map(|key| self.install.get(key))
    }

    pub fn verify_command(&self) -> Option<&Command> {
        self.verify.as_ref()
    }

    pub fn post_install(&self) -> &[Command] {
        &self.post_install
    }
}

/// A named, ordered list of tool names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    name: String,
    tools: Vec<String>,
}

impl Group {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tools(&self) -> &[String] {
        &self.tools
    }
}

/// A named installation preset built from groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    name: String,
    description: String,
    groups: Vec<String>,
}

impl Profile {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn groups(&self) -> &[String] {
        &self.groups
    }
}

/// The loaded, validated catalog. Read-only once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    tools: BTreeMap<String, Tool>,
    groups: BTreeMap<String, Group>,
    profiles: BTreeMap<String, Profile>,
}

impl Catalog {
    /// Load and validate a catalog file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        log::debug!("Loading catalog from {}", path.display());

        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml(&source, &path.display().to_string())
    }

    /// Parse and validate catalog text.
    ///
    /// `origin` names the source in error messages.
    pub fn from_toml(source: &str, origin: &str) -> Result<Self, ConfigError> {
        let raw: RawCatalog = toml::from_str(source).map_err(|source| ConfigError::Parse {
            origin: origin.to_string(),
            source,
        })?;

        let catalog = raw.build(origin)?;
        log::debug!(
            "Catalog {origin}: {} tools, {} groups, {} profiles",
            catalog.tools.len(),
            catalog.groups.len(),
            catalog.profiles.len()
        );
        Ok(catalog)
    }

    pub fn tool(&self, name: &str) -> Option<&Tool> {
        self.tools.get(name)
    }

    pub fn group(&self, name: &str) -> Option<&Group> {
        self.groups.get(name)
    }

    pub fn profile(&self, name: &str) -> Option<&Profile> {
        self.profiles.get(name)
    }

    /// All tools, sorted by name.
    pub fn tools(&self) -> impl Iterator<Item = &Tool> {
        self.tools.values()
    }

    /// All groups, sorted by name.
    pub fn groups(&self) -> impl Iterator<Item = &Group> {
        self.groups.values()
    }

    /// All profiles, sorted by name.
    pub fn profiles(&self) -> impl Iterator<Item = &Profile> {
        self.profiles.values()
    }

    /// Sorted profile names.
    pub fn profile_names(&self) -> Vec<String> {
        self.profiles.keys().cloned().collect()
    }
}

impl FromStr for Catalog {
    type Err = ConfigError;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        Self::from_toml(source, "<catalog>")
    }
}

// ============================================================================
// On-disk shape
// ============================================================================

#[derive(Debug, Deserialize)]
struct RawCatalog {
    #[serde(default)]
    tools: BTreeMap<String, RawTool>,

    #[serde(default)]
    groups: BTreeMap<String, Vec<String>>,

    #[serde(default)]
    profiles: BTreeMap<String, RawProfile>,
}

#[derive(Debug, Deserialize)]
struct RawTool {
    #[serde(default)]
    description: String,

    #[serde(default)]
    category: String,

    #[serde(default)]
    install: BTreeMap<String, RawCommand>,

    #[serde(default)]
    verify: Option<RawCommand>,

    #[serde(default)]
    post_install: Vec<RawCommand>,
}

#[derive(Debug, Deserialize)]
struct RawProfile {
    #[serde(default)]
    description: String,

    #[serde(default)]
    groups: Vec<String>,
}

impl RawCatalog {
    fn build(self, origin: &str) -> Result<Catalog, ConfigError> {
        let mut tools = BTreeMap::new();
        for (name, raw) in self.tools {
            let tool = raw.build(&name, origin)?;
            tools.insert(name, tool);
        }

        let mut groups = BTreeMap::new();
        for (name, members) in self.groups {
            if let Some(missing) = members.iter().find(|tool| !tools.contains_key(*tool)) {
                return Err(ConfigError::UnknownTool {
                    origin: origin.to_string(),
                    group: name,
                    tool: missing.clone(),
                });
            }
            groups.insert(
                name.clone(),
                Group {
                    name,
                    tools: members,
                },
            );
        }

        let mut profiles = BTreeMap::new();
        for (name, raw) in self.profiles {
            if let Some(missing) = raw.groups.iter().find(|group| !groups.contains_key(*group)) {
                return Err(ConfigError::UnknownGroup {
                    origin: origin.to_string(),
                    profile: name,
                    group: missing.clone(),
                });
            }
            profiles.insert(
                name.clone(),
                Profile {
                    name,
                    description: raw.description,
                    groups: raw.groups,
                },
            );
        }

        Ok(Catalog {
            tools,
            groups,
            profiles,
        })
    }
}

impl RawTool {
    fn build(self, name: &str, origin: &str) -> Result<Tool, ConfigError> {
        let invalid = |field: String, reason: String| ConfigError::InvalidCommand {
            origin: origin.to_string(),
            tool: name.to_string(),
            field,
            reason,
        };

        let mut install = BTreeMap::new();
        for (platform, raw) in self.install {
            let command = raw
                .into_command()
                .map_err(|reason| invalid(format!("install.{platform}"), reason))?;
            install.insert(platform, command);
        }

        let verify = self
            .verify
            .map(RawCommand::into_command)
            .transpose()
            .map_err(|reason| invalid("verify".to_string(), reason))?;

        let post_install = self
            .post_install
            .into_iter()
            .enumerate()
            .map(|(index, raw)| {
                raw.into_command()
                    .map_err(|reason| invalid(format!("post_install[{index}]"), reason))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Tool {
            name: name.to_string(),
            description: self.description,
            category: self.category,
            install,
            verify,
            post_install,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"
        [tools.git]
        description = "Version control"
        category = "core"
        verify = "git --version"
        install.macos = "brew install git"
        install.linux = "sudo apt-get install -y git"

        [tools.curl]
        description = "HTTP client"
        install.macos = { program = "brew", args = ["install", "curl"] }
        install.ubuntu = "sudo apt-get install -y curl"

        [tools.starship]
        install.macos = "brew install starship"
        install.linux = { shell = "curl -sS https://starship.rs/install.sh | sh -s -- -y" }
        post_install = ["starship preset plain-text-symbols -o /tmp/starship.toml"]

        [groups]
        core = ["git", "curl"]
        prompt = ["starship"]
        empty = []

        [profiles.minimal]
        description = "Bare essentials"
        groups = ["core"]

        [profiles.nothing]
        description = "Resolves to no tools"
        groups = ["empty"]
    "#;

    #[test]
    fn test_parse_sample() {
        let catalog: Catalog = SAMPLE.parse().unwrap();

        assert_eq!(catalog.tools().count(), 3);
        assert_eq!(catalog.groups().count(), 3);
        assert_eq!(catalog.profile_names(), vec!["minimal", "nothing"]);

        let git = catalog.tool("git").unwrap();
        assert_eq!(git.description(), "Version control");
        assert_eq!(git.category(), "core");
        assert_eq!(
            git.verify_command(),
            Some(&Command::exec("git", ["--version"]))
        );

        let curl = catalog.tool("curl").unwrap();
        assert_eq!(curl.category(), "");
        assert!(curl.verify_command().is_none());
        assert_eq!(
            curl.install_command(PlatformId::Macos),
            Some(&Command::exec("brew", ["install", "curl"]))
        );

        let minimal = catalog.profile("minimal").unwrap();
        assert_eq!(minimal.groups(), ["core"]);
        assert_eq!(catalog.group("core").unwrap().tools(), ["git", "curl"]);
    }

    #[test]
    fn test_install_command_lookup() {
        let catalog: Catalog = SAMPLE.parse().unwrap();
        let git = catalog.tool("git").unwrap();

        // Exact key wins, then the linux family key.
        let curl = catalog.tool("curl").unwrap();
        assert_eq!(
            curl.install_command(PlatformId::Ubuntu),
            Some(&Command::exec("sudo", ["apt-get", "install", "-y", "curl"]))
        );
        assert_eq!(
            git.install_command(PlatformId::Arch),
            Some(&Command::exec("sudo", ["apt-get", "install", "-y", "git"]))
        );

        assert!(curl.install_command(PlatformId::Arch).is_none());
        assert!(git.install_command(PlatformId::Unknown).is_none());
    }

    #[test]
    fn test_shell_forms_are_preserved() {
        let catalog: Catalog = SAMPLE.parse().unwrap();
        let starship = catalog.tool("starship").unwrap();

        let linux = starship.install_command(PlatformId::Fedora).unwrap();
        assert!(linux.is_shell());
        assert_eq!(starship.post_install().len(), 1);
    }

    #[test]
    fn test_unknown_tool_reference_fails() {
        let source = r#"
            [tools.git]
            install.macos = "brew install git"

            [groups]
            core = ["git", "gti"]
        "#;
        let err = source.parse::<Catalog>().unwrap_err();
        match err {
            ConfigError::UnknownTool { group, tool, .. } => {
                assert_eq!(group, "core");
                assert_eq!(tool, "gti");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unknown_group_reference_fails() {
        let source = r#"
            [groups]
            core = []

            [profiles.full]
            groups = ["core", "extras"]
        "#;
        let err = source.parse::<Catalog>().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::UnknownGroup { ref profile, ref group, .. }
                if profile == "full" && group == "extras"
        ));
    }

    #[test]
    fn test_duplicate_names_are_rejected() {
        let source = r#"
            [tools.git]
            install.macos = "brew install git"

            [tools.git]
            install.macos = "brew install git"
        "#;
        let err = source.parse::<Catalog>().unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_invalid_command_names_field() {
        let source = r#"
            [tools.jq]
            install.macos = "brew install jq"
            post_install = ["jq --version", "  "]
        "#;
        let err = source.parse::<Catalog>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "<catalog>: tools.jq.post_install[1]: command is empty"
        );
    }

    #[test]
    fn test_malformed_toml_fails() {
        let err = "[tools.git\ninstall = 3".parse::<Catalog>().unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let source = r#"
            schema_version = 2

            [tools.git]
            install.macos = "brew install git"
            homepage = "https://git-scm.com"

            [profiles.minimal]
            groups = []
            icon = "star"
        "#;
        let catalog: Catalog = source.parse().unwrap();
        assert!(catalog.tool("git").is_some());
        assert!(catalog.profile("minimal").is_some());
    }

    #[test]
    fn test_missing_sections_are_empty() {
        let catalog: Catalog = "".parse().unwrap();
        assert_eq!(catalog, Catalog::default());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let catalog = Catalog::load(file.path()).unwrap();
        assert!(catalog.tool("starship").is_some());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Catalog::load(dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
