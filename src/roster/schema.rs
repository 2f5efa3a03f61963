//! Database schema and connection management for the roster store

use crate::error::{RegistryError, Result};
use dirs::data_dir;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

/// Database connection manager for the roster deployment
pub struct RosterDatabase {
    pub(crate) conn: Connection,
}

impl RosterDatabase {
    /// Open (or create) the store at `path` and ensure tables exist
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Open the store at the platform default location
    pub fn open_default() -> Result<Self> {
        Self::open(default_roster_path()?)
    }

    /// Open an in-memory store, for tests and ephemeral use
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Initialize the database schema. Safe to call on every start.
    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS team (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                team_name TEXT NOT NULL,
                league TEXT NOT NULL,
                season TEXT NOT NULL,
                team_manager TEXT,
                technical_staff TEXT,
                head_coach TEXT,
                assistant_coaches TEXT,
                team_medic TEXT,
                fitness_trainer TEXT,
                full_team_list TEXT
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS player (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                id_number TEXT NOT NULL UNIQUE,
                team_id INTEGER,
                FOREIGN KEY (team_id) REFERENCES team (id)
            )",
            [],
        )?;

        Ok(())
    }
}

/// Default database file for the roster deployment, under the platform data
/// directory.
pub fn default_roster_path() -> Result<PathBuf> {
    let data_dir = data_dir().ok_or_else(|| RegistryError::DataDir {
        message: "Could not determine data directory".to_string(),
    })?;
    Ok(data_dir.join("league-registry").join("roster.db"))
}
