//! Storage layer for the lightweight roster deployment
//!
//! A second, independently deployed store sharing the storage technology but
//! never a database file with the registration store. Teams carry free-text
//! staff fields and a full-roster blob; players carry only a name, an ID
//! number, and a team assignment. Duplicate detection runs as explicit
//! pre-check queries instead of relying on the UNIQUE constraint alone.

pub mod models;
pub mod queries;
pub mod schema;

#[cfg(test)]
mod tests;

pub use models::*;
pub use schema::RosterDatabase;
