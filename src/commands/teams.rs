//! Team registration and listing commands

use anyhow::Result;

use super::common::{open_registry, print_json};
use crate::cli::types::{League, Season};
use crate::cli::DbOpts;
use crate::storage::NewTeam;

/// Handle the team register command
pub fn handle_register_team(
    db: &DbOpts,
    name: String,
    league: League,
    season: Season,
    paid: bool,
) -> Result<()> {
    let mut store = open_registry(db)?;
    let team_id = store.register_team(&NewTeam {
        team_name: name.clone(),
        league,
        season,
        payment_status: paid,
    })?;

    println!("✓ Team {} registered successfully (id {})", name, team_id);
    Ok(())
}

/// Handle the team list command
pub fn handle_list_teams(db: &DbOpts, json: bool) -> Result<()> {
    let store = open_registry(db)?;
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
            "{:>4}  {:<24} {:<24} {:<9}  {}",
            team.id.as_i64(),
            team.team_name,
            team.league.as_str(),
            team.season.as_str(),
            if team.payment_status {
                "paid"
            } else {
                "unpaid"
            }
        );
    }
    Ok(())
}
