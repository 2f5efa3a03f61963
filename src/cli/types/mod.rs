//! Typed values shared between the CLI and the storage layer.

pub mod ids;
pub mod league;
pub mod season;

pub use ids::{PlayerId, TeamId};
pub use league::League;
pub use season::Season;
