//! Database schema and connection management for the registration store

use crate::error::{RegistryError, Result};
use dirs::data_dir;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

/// Database connection manager for the registration deployment.
///
/// Holds a single long-lived connection with an explicit lifecycle so callers
/// (and tests) inject the storage location instead of relying on a fixed path.
pub struct RegistryDatabase {
    pub(crate) conn: Connection,
}

impl RegistryDatabase {
    /// Open (or create) the store at `path` and ensure tables exist
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // Ensure the data directory exists
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
        Self::open(default_registry_path()?)
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
        // Create teams table
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS teams (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                team_name TEXT NOT NULL,
                league TEXT NOT NULL,
                season TEXT NOT NULL,
                payment_status BOOLEAN DEFAULT 0,
                created_at INTEGER NOT NULL
            )",
            [],
        )?;

        // Create players table
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS players (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                id_number TEXT NOT NULL UNIQUE,
                dob DATE NOT NULL,
                contact_number TEXT NOT NULL,
                email_address TEXT NOT NULL,
                fee REAL NOT NULL,
                team_id INTEGER,
                payment_status BOOLEAN DEFAULT 0,
                created_at INTEGER NOT NULL,
                FOREIGN KEY (team_id) REFERENCES teams (id)
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_players_team
             ON players(team_id)",
            [],
        )?;

        Ok(())
    }
}

/// Default database file for the registration deployment, under the platform
/// data directory.
pub fn default_registry_path() -> Result<PathBuf> {
    let data_dir = data_dir().ok_or_else(|| RegistryError::DataDir {
        message: "Could not determine data directory".to_string(),
    })?;
    Ok(data_dir.join("league-registry").join("registry.db"))
}
