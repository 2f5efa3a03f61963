//! League Registration CLI Library
//!
//! A small registration and roster-management library for a local sports league,
//! backed by SQLite, with a CLI front end for collecting sign-up data and
//! rendering management views.
//!
//! ## Features
//!
//! - **Team Registration**: Record teams per league division and season
//! - **Player Registration**: Unique ID-number enforcement with a fixed sign-up fee
//! - **Roster Management**: List, search, edit, and delete player records
//! - **Summary Metrics**: Player counts, fee totals, and average age, computed fresh on every read
//! - **Lightweight Roster Deployment**: A second, leaner schema tracking team staff
//!   and player/team assignments with cross-team conflict detection
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use league_registry::storage::{NewTeam, PlayerFields, RegistryDatabase};
//! use league_registry::{League, Season};
//!
//! # fn example() -> league_registry::Result<()> {
//! let mut db = RegistryDatabase::open("registry.db")?;
//!
//! let team_id = db.register_team(&NewTeam {
//!     team_name: "Eagles".to_string(),
//!     league: League::FirstMens,
//!     season: Season::S2024,
//!     payment_status: true,
//! })?;
//!
//! db.register_player(&PlayerFields {
//!     name: "A. Smith".to_string(),
//!     id_number: "ID001".to_string(),
//!     dob: NaiveDate::from_ymd_opt(1994, 3, 12).unwrap(),
//!     contact_number: "555-0101".to_string(),
//!     email_address: "a.smith@example.com".to_string(),
//!     team_id,
//!     payment_status: false,
//! })?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set the database path to avoid passing it in every command:
//! ```bash
//! export LEAGUE_REGISTRY_DB=/var/lib/league/registry.db
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod roster;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{League, PlayerId, Season, TeamId};
pub use error::{RegistryError, Result};

/// Flat registration fee charged per player at sign-up. Not configurable per call.
pub const REGISTRATION_FEE: f64 = 2.0;

pub const DB_PATH_ENV_VAR: &str = "LEAGUE_REGISTRY_DB";
