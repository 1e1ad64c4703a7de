pub mod install;
pub mod plan;
pub mod profiles;
pub mod tools;
pub mod verify;

use anyhow::Result;
use provision::Catalog;

use crate::Context;
use crate::paths;

/// Catalog shipped inside the binary
pub const BUILTIN_CATALOG: &str = include_str!("../../catalog.toml");

const BUILTIN_ORIGIN: &str = "<built-in catalog>";

/// Load the catalog: `--catalog`/`TOOLBELT_CATALOG`, then the user catalog,
/// then the built-in one.
pub fn load_catalog(ctx: &Context) -> Result<Catalog> {
    if let Some(path) = &ctx.catalog {
        let path = paths::expand(&path.to_string_lossy());
        log::debug!("Loading catalog from {}", path.display());
        return Ok(Catalog::load(&path)?);
    }

    if let Some(path) = paths::user_catalog() {
        log::debug!("Loading user catalog from {}", path.display());
        return Ok(Catalog::load(&path)?);
    }

    log::debug!("Using built-in catalog");
    Ok(Catalog::from_toml(BUILTIN_CATALOG, BUILTIN_ORIGIN)?)
}
