//! Error types for the league registry.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RegistryError>;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Invalid date: {0}")]
    InvalidDate(#[from] chrono::ParseError),

    #[error("Invalid id: {0}")]
    InvalidId(#[from] std::num::ParseIntError),

    #[error("System clock error: {0}")]
    Clock(#[from] std::time::SystemTimeError),

    #[error("A player with ID number {id_number} is already registered")]
    DuplicateIdNumber { id_number: String },

    #[error("Player {name} is already registered")]
    DuplicateName { name: String },

    #[error("ID number {id_number} is already registered to another team")]
    TeamConflict { id_number: String },

    #[error("No team selected")]
    MissingTeam,

    #[error("Data directory error: {message}")]
    DataDir { message: String },

    #[error("Invalid league: {value}")]
    InvalidLeague { value: String },

    #[error("Invalid season: {value}")]
    InvalidSeason { value: String },
}

#[cfg(test)]
mod tests;
