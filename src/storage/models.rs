//! Data models for the registration store

use crate::cli::types::{League, PlayerId, Season, TeamId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Team row in the registration store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub team_name: String,
    pub league: League,
    pub season: Season,
    pub payment_status: bool,
    pub created_at: u64,
}

/// Team sign-up data, before a row id has been assigned
#[derive(Debug, Clone)]
pub struct NewTeam {
    pub team_name: String,
    pub league: League,
    pub season: Season,
    pub payment_status: bool,
}

/// Player row in the registration store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub id_number: String,
    pub dob: NaiveDate,
    pub contact_number: String,
    pub email_address: String,
    pub fee: f64,
    pub team_id: Option<TeamId>,
    pub payment_status: bool,
    pub created_at: u64,
}

/// The caller-supplied player fields, used for registration and edits.
///
/// The row id, the fee, and the creation timestamp are assigned by the store.
#[derive(Debug, Clone)]
pub struct PlayerFields {
    pub name: String,
    pub id_number: String,
    pub dob: NaiveDate,
    pub contact_number: String,
    pub email_address: String,
    pub team_id: TeamId,
    pub payment_status: bool,
}
