//! Shared helpers for command implementations.
//!
//! Commands open a store, run one operation, and print the outcome. Database
//! location resolves from the `--db` flag, then the `LEAGUE_REGISTRY_DB`
//! environment variable, then the platform default for the deployment.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::cli::DbOpts;
use crate::roster::{schema::default_roster_path, RosterDatabase};
use crate::storage::{schema::default_registry_path, RegistryDatabase};
use crate::DB_PATH_ENV_VAR;

/// Open the registration store for a command
pub fn open_registry(opts: &DbOpts) -> Result<RegistryDatabase> {
    let path = resolve_db_path(opts, default_registry_path()?)?;
    RegistryDatabase::open(&path)
        .with_context(|| format!("opening registration store at {}", path.display()))
}

/// Open the roster store for a command
pub fn open_roster(opts: &DbOpts) -> Result<RosterDatabase> {
    let path = resolve_db_path(opts, default_roster_path()?)?;
    RosterDatabase::open(&path)
        .with_context(|| format!("opening roster store at {}", path.display()))
}

fn resolve_db_path(opts: &DbOpts, default: PathBuf) -> Result<PathBuf> {
    if let Some(path) = &opts.db {
        return Ok(path.clone());
    }
    if let Ok(value) = std::env::var(DB_PATH_ENV_VAR) {
        if !value.is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    Ok(default)
}

/// Print a collection as pretty JSON
pub fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
