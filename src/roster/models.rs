//! Data models for the roster store

use crate::cli::types::{League, PlayerId, Season, TeamId};
use serde::{Deserialize, Serialize};

/// Team row in the roster store, including the free-text staff fields
/// collected on the sign-up form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub team_name: String,
    pub league: League,
    pub season: Season,
    pub team_manager: String,
    pub technical_staff: String,
    pub head_coach: String,
    /// Comma-separated assistant coach names, as typed on the form
    pub assistant_coaches: String,
    pub team_medic: String,
    pub fitness_trainer: String,
    /// Free-text roster blob, one "Name - ID Number" entry per line
    pub full_team_list: String,
}

/// Team sign-up data, before a row id has been assigned
#[derive(Debug, Clone, Default)]
pub struct NewTeam {
    pub team_name: String,
    pub league: League,
    pub season: Season,
    pub team_manager: String,
    pub technical_staff: String,
    pub head_coach: String,
    pub assistant_coaches: String,
    pub team_medic: String,
    pub fitness_trainer: String,
    pub full_team_list: String,
}

/// Player row in the roster store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub id_number: String,
    pub team_id: Option<TeamId>,
}
