//! Commands for the lightweight roster deployment

use anyhow::Result;

use super::common::{open_roster, print_json};
use crate::cli::types::TeamId;
use crate::cli::{DbOpts, RosterCmd};
use crate::error::RegistryError;
use crate::roster::NewTeam;

/// Dispatch a roster subcommand
pub fn handle_roster(cmd: RosterCmd) -> Result<()> {
    match cmd {
        RosterCmd::RegisterTeam {
            db,
            name,
            league,
            season,
            manager,
            technical_staff,
            head_coach,
            assistant_coaches,
            medic,
            fitness_trainer,
            team_list,
        } => {
            let mut store = open_roster(&db)?;
            let team_id = store.register_team(&NewTeam {
                team_name: name,
                league,
                season,
                team_manager: manager,
                technical_staff,
                head_coach,
                assistant_coaches,
                team_medic: medic,
                fitness_trainer,
                full_team_list: team_list,
            })?;
            println!("✓ Team registered successfully (id {})", team_id);
        }

        RosterCmd::RegisterPlayer {
            db,
            name,
            id_number,
            team_id,
        } => handle_register_player(&db, name, id_number, team_id)?,

        RosterCmd::ListTeams { db, json } => {
            let store = open_roster(&db)?;
            let teams = store.list_teams()?;
            if json {
                return print_json(&teams);
            }
            if teams.is_empty() {
                println!("No teams registered yet.");
                return Ok(());
            }
            for team in &teams {
                println!(
                    "{:>4}  {:<24} {:<24} {:<9}  manager: {}",
                    team.id.as_i64(),
                    team.team_name,
                    team.league.as_str(),
                    team.season.as_str(),
                    team.team_manager
                );
            }
        }

        RosterCmd::ListPlayers { db, json } => {
            let store = open_roster(&db)?;
            let players = store.list_players()?;
            if json {
                return print_json(&players);
            }
            if players.is_empty() {
                println!("No players registered yet.");
                return Ok(());
            }
            for player in &players {
                println!(
                    "{:>4}  {:<24} {:<12} team {}",
                    player.id.as_i64(),
                    player.name,
                    player.id_number,
                    player
                        .team_id
                        .map(|id| id.to_string())
                        .unwrap_or_else(|| "-".to_string())
                );
            }
        }

        RosterCmd::Summary { db } => {
            let store = open_roster(&db)?;
            println!("Total teams: {}", store.team_count()?);
        }
    }
    Ok(())
}

fn handle_register_player(
    db: &DbOpts,
    name: String,
    id_number: String,
    team_id: Option<TeamId>,
) -> Result<()> {
    let Some(team_id) = team_id else {
        println!("⚠ {}. Register a team first and pass --team-id.", RegistryError::MissingTeam);
        return Ok(());
    };

    let mut store = open_roster(db)?;
    match store.register_player(&name, &id_number, team_id) {
        Ok(id) => println!("✓ Player {} registered successfully (id {})", name, id),
        Err(
            err @ (RegistryError::DuplicateName { .. } | RegistryError::TeamConflict { .. }),
        ) => println!("⚠ {}", err),
        Err(err) => return Err(err.into()),
    }
    Ok(())
}
