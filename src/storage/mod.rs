//! Storage layer for the registration deployment
//!
//! This module provides a clean abstraction over the SQLite database,
//! organized into logical components:
//! - `models`: Data structures
//! - `schema`: Database connection and schema management
//! - `queries`: Basic CRUD operations
//! - `analysis`: Derived summary metrics

pub mod analysis;
pub mod models;
pub mod queries;
pub mod schema;


// Re-export the main types and database struct for easy access
pub use analysis::RegistrationSummary;
pub use models::*;
pub use schema::RegistryDatabase;
