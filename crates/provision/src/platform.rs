//! Platform detection for install command selection.
//!
//! Tools declare one install command per platform id. This module maps the
//! running host onto the small, closed set of ids the catalog uses.
//!
//! # Supported Platforms
//!
//! | Host                                     | Id            |
//! |------------------------------------------|---------------|
//! | macOS                                    | `macos`       |
//! | Ubuntu and derivatives                   | `ubuntu`      |
//! | Debian and derivatives                   | `debian`      |
//! | Fedora, RHEL-likes                       | `fedora`      |
//! | Arch and derivatives                     | `arch`        |
//! | Any other Linux                          | `linux-other` |
//! | Anything else                            | `unknown`     |
//!
//! Detection never fails. An unrecognized host maps to `linux-other` or
//! `unknown`, and tools without a matching install command are then reported
//! as unsupported by the executor.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

const OS_RELEASE_PATHS: [&str; 2] = ["/etc/os-release", "/usr/lib/os-release"];

/// Install key shared by every Linux flavor.
pub const LINUX_FAMILY: &str = "linux";

/// Identifier of the host platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlatformId {
    Macos,
    Ubuntu,
    Debian,
    Fedora,
    Arch,
    LinuxOther,
    Unknown,
}

impl PlatformId {
    /// All ids, in display order.
    pub const ALL: [PlatformId; 7] = [
        Self::Macos,
        Self::Ubuntu,
        Self::Debian,
        Self::Fedora,
        Self::Arch,
        Self::LinuxOther,
        Self::Unknown,
    ];

    /// Catalog key for this platform.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Macos => "macos",
            Self::Ubuntu => "ubuntu",
            Self::Debian => "debian",
            Self::Fedora => "fedora",
            Self::Arch => "arch",
            Self::LinuxOther => "linux-other",
            Self::Unknown => "unknown",
        }
    }

    /// Whether this is a Linux flavor.
    pub fn is_linux(&self) -> bool {
        matches!(
            self,
            Self::Ubuntu | Self::Debian | Self::Fedora | Self::Arch | Self::LinuxOther
        )
    }

    /// Catalog keys to try, most specific first.
    pub fn lookup_keys(&self) -> Vec<&'static str> {
        if self.is_linux() {
            vec![self.as_str(), LINUX_FAMILY]
        } else {
            vec![self.as_str()]
        }
    }
}

impl fmt::Display for PlatformId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlatformId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                let known: Vec<_> = Self::ALL.iter().map(PlatformId::as_str).collect();
                format!("unknown platform '{s}' (expected one of: {})", known.join(", "))
            })
    }
}

/// Detect the current platform.
pub fn detect() -> PlatformId {
    let os_release = OS_RELEASE_PATHS
        .iter()
        .find_map(|path| std::fs::read_to_string(path).ok());

    let platform = detect_from(std::env::consts::OS, os_release.as_deref(), |marker| {
        Path::new(marker).exists()
    });
    log::debug!("Detected platform: {platform}");
    platform
}

/// Pure detection logic.
///
/// `os` is the value of [`std::env::consts::OS`], `os_release` the contents of
/// an os-release file if one was found, and `has_marker` answers whether a
/// distribution marker file exists.
pub fn detect_from(
    os: &str,
    os_release: Option<&str>,
    has_marker: impl Fn(&str) -> bool,
) -> PlatformId {
    match os {
        "macos" => PlatformId::Macos,
        "linux" => {
            if let Some(contents) = os_release
                && let Some(platform) = from_os_release(contents)
            {
                return platform;
            }
            from_markers(has_marker)
        }
        _ => PlatformId::Unknown,
    }
}

/// Map os-release `ID` and `ID_LIKE` onto a platform.
fn from_os_release(contents: &str) -> Option<PlatformId> {
    let mut id = None;
    let mut id_like = Vec::new();

    for line in contents.lines() {
        let Some((key, value)) = line.trim().split_once('=') else {
            continue;
        };
        let value = value.trim().trim_matches(|c| c == '"' || c == '\'');
        match key.trim() {
            "ID" => id = Some(value.to_lowercase()),
            "ID_LIKE" => id_like = value.split_whitespace().map(str::to_lowercase).collect(),
            _ => {}
        }
    }

    id.iter()
        .chain(id_like.iter())
        .find_map(|candidate| distro_id(candidate))
}

fn distro_id(id: &str) -> Option<PlatformId> {
    match id {
        "ubuntu" => Some(PlatformId::Ubuntu),
        "debian" => Some(PlatformId::Debian),
        "fedora" | "rhel" | "centos" => Some(PlatformId::Fedora),
        "arch" | "archlinux" => Some(PlatformId::Arch),
        _ => None,
    }
}

fn from_markers(has_marker: impl Fn(&str) -> bool) -> PlatformId {
    let markers = [
        ("/etc/arch-release", PlatformId::Arch),
        ("/etc/fedora-release", PlatformId::Fedora),
        ("/etc/debian_version", PlatformId::Debian),
    ];

    markers
        .into_iter()
        .find(|(path, _)| has_marker(path))
        .map_or(PlatformId::LinuxOther, |(_, platform)| platform)
}
