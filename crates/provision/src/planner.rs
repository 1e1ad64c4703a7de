//! Install planner - expands a profile into an ordered tool list

use crate::catalog::Catalog;
use crate::error::NotFoundError;

/// The resolved, ordered, de-duplicated tools for one profile.
///
/// Built once per run by [`resolve`] and never mutated afterwards. Order is
/// part of the contract: a tool appears at the position of its first
/// occurrence across the profile's groups, so tools that later steps depend
/// on (a version manager, say) can be listed first.
///
/// No platform filtering happens here. Tools without an install command for
/// the current platform stay in the plan and are reported as unsupported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallPlan {
    profile: String,
    tools: Vec<String>,
}

impl InstallPlan {
    /// Profile this plan was resolved from.
    pub fn profile(&self) -> &str {
        &self.profile
    }

    /// Tool names in install order.
    pub fn tools(&self) -> &[String] {
        &self.tools
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tools.iter().map(String::as_str)
    }

    /// Number of tools in the plan
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if plan is empty
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

/// Resolve `profile` against the catalog.
///
/// Walks the profile's groups in declared order, and each group's tools in
/// declared order, keeping only the first occurrence of every tool.
pub fn resolve(catalog: &Catalog, profile: &str) -> Result<InstallPlan, NotFoundError> {
    let Some(found) = catalog.profile(profile) else {
        return Err(NotFoundError {
            profile: profile.to_string(),
            available: catalog.profile_names(),
        });
    };

    let mut tools: Vec<String> = Vec::new();
    for group_name in found.groups() {
        // Catalog validation guarantees the group exists.
        let Some(group) = catalog.group(group_name) else {
            continue;
        };
        for tool in group.tools() {
            if !tools.contains(tool) {
                tools.push(tool.clone());
            }
        }
    }

    log::debug!("Resolved profile '{profile}' to {} tools", tools.len());

    Ok(InstallPlan {
        profile: profile.to_string(),
        tools,
    })
}
