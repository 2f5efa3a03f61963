//! CLI argument definitions and parsing.

pub mod types;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::{League, PlayerId, Season, TeamId};

/// League registration and roster management
#[derive(Debug, Parser)]
#[clap(name = "league-registry", version, about)]
pub struct Registry {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Manage team registrations
    Team {
        #[clap(subcommand)]
        cmd: TeamCmd,
    },

    /// Manage player registrations
    Player {
        #[clap(subcommand)]
        cmd: PlayerCmd,
    },

    /// Show summary metrics for the player collection
    Summary {
        #[clap(flatten)]
        db: DbOpts,

        /// Output as JSON instead of text lines
        #[clap(long)]
        json: bool,
    },

    /// Manage the lightweight roster deployment
    Roster {
        #[clap(subcommand)]
        cmd: RosterCmd,
    },
}

/// Database location, shared by every subcommand
#[derive(Debug, Args)]
pub struct DbOpts {
    /// Database file path (or set `LEAGUE_REGISTRY_DB` env var).
    #[clap(long)]
    pub db: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum TeamCmd {
    /// Register a new team. Duplicate team names are allowed.
    Register {
        #[clap(flatten)]
        db: DbOpts,

        /// Team name.
        #[clap(long)]
        name: String,

        /// League division, e.g. "First League Men's".
        #[clap(long, default_value_t = League::default())]
        league: League,

        /// Season, e.g. "2024/2025".
        #[clap(long, default_value_t = Season::default())]
        season: Season,

        /// Mark the registration fee as received.
        #[clap(long)]
        paid: bool,
    },

    /// List registered teams.
    List {
        #[clap(flatten)]
        db: DbOpts,

        /// Output as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}

/// Player fields shared by the register and edit forms
#[derive(Debug, Args)]
pub struct PlayerForm {
    /// Player name.
    #[clap(long)]
    pub name: String,

    /// ID number; must be unique across all players.
    #[clap(long)]
    pub id_number: String,

    /// Date of birth (YYYY-MM-DD).
    #[clap(long)]
    pub dob: NaiveDate,

    /// Contact number.
    #[clap(long)]
    pub contact: String,

    /// Email address.
    #[clap(long)]
    pub email: String,

    /// Team to register into (see `team list`).
    #[clap(long)]
    pub team_id: Option<TeamId>,

    /// Mark the registration fee as paid.
    #[clap(long)]
    pub paid: bool,
}

#[derive(Debug, Subcommand)]
pub enum PlayerCmd {
    /// Register a new player against a team.
    Register {
        #[clap(flatten)]
        db: DbOpts,

        #[clap(flatten)]
        form: PlayerForm,
    },

    /// List registered players.
    List {
        #[clap(flatten)]
        db: DbOpts,

        /// Case-insensitive substring filter on player names.
        #[clap(long)]
        search: Option<String>,

        /// Output as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Overwrite a player's fields.
    Edit {
        #[clap(flatten)]
        db: DbOpts,

        /// Player row id to edit.
        #[clap(long)]
        id: PlayerId,

        #[clap(flatten)]
        form: PlayerForm,
    },

    /// Delete a player by id. Deleting an absent id is a no-op.
    Delete {
        #[clap(flatten)]
        db: DbOpts,

        /// Player row id to delete.
        #[clap(long)]
        id: PlayerId,
    },
}

#[derive(Debug, Subcommand)]
pub enum RosterCmd {
    /// Register a team with its staff details.
    RegisterTeam {
        #[clap(flatten)]
        db: DbOpts,

        /// Team name.
        #[clap(long)]
        name: String,

        /// League division, e.g. "First League Men's".
        #[clap(long, default_value_t = League::default())]
        league: League,

        /// Season, e.g. "2024/2025".
        #[clap(long, default_value_t = Season::default())]
        season: Season,

        /// Team manager.
        #[clap(long, default_value = "")]
        manager: String,

        /// Technical staff.
        #[clap(long, default_value = "")]
        technical_staff: String,

        /// Head coach.
        #[clap(long, default_value = "")]
        head_coach: String,

        /// Assistant coaches (comma-separated).
        #[clap(long, default_value = "")]
        assistant_coaches: String,

        /// Team medic.
        #[clap(long, default_value = "")]
        medic: String,

        /// Team fitness trainer.
        #[clap(long, default_value = "")]
        fitness_trainer: String,

        /// Full team list ("Name - ID Number", one per line).
        #[clap(long, default_value = "")]
        team_list: String,
    },

    /// Register a player into a team.
    RegisterPlayer {
        #[clap(flatten)]
        db: DbOpts,

        /// Player name.
        #[clap(long)]
        name: String,

        /// Player ID number.
        #[clap(long)]
        id_number: String,

        /// Team to register into (see `roster list-teams`).
        #[clap(long)]
        team_id: Option<TeamId>,
    },

    /// List registered teams with their staff details.
    ListTeams {
        #[clap(flatten)]
        db: DbOpts,

        /// Output as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// List registered players.
    ListPlayers {
        #[clap(flatten)]
        db: DbOpts,

        /// Output as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Show the team-count summary metric.
    Summary {
        #[clap(flatten)]
        db: DbOpts,
    },
}
