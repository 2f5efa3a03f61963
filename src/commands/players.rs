//! Player registration and management commands

use anyhow::Result;

use super::common::{open_registry, print_json};
use crate::cli::types::PlayerId;
use crate::cli::{DbOpts, PlayerForm};
use crate::error::RegistryError;
use crate::storage::{Player, PlayerFields};

/// Handle the player register command
pub fn handle_register_player(db: &DbOpts, form: PlayerForm) -> Result<()> {
    let Some(fields) = form_to_fields(form) else {
        println!("⚠ {}. Register a team first and pass --team-id.", RegistryError::MissingTeam);
        return Ok(());
    };

    let mut store = open_registry(db)?;
    match store.register_player(&fields) {
        Ok(id) => println!("✓ Player {} registered successfully (id {})", fields.name, id),
        Err(err @ RegistryError::DuplicateIdNumber { .. }) => println!("⚠ {}", err),
        Err(err) => return Err(err.into()),
    }
    Ok(())
}

/// Handle the player list command
pub fn handle_list_players(db: &DbOpts, search: Option<String>, json: bool) -> Result<()> {
    let store = open_registry(db)?;
    let mut players = store.list_players()?;

    // The search filter is applied here on the returned collection, not
    // pushed into the query.
    if let Some(term) = &search {
        filter_by_name(&mut players, term);
    }

    if json {
        return print_json(&players);
    }

    if players.is_empty() {
        println!("No players registered yet.");
        return Ok(());
    }

    for player in &players {
        println!(
            "{:>4}  {:<24} {:<12} {}  team {}  {}",
            player.id.as_i64(),
            player.name,
            player.id_number,
            player.dob,
            player
                .team_id
                .map(|id| id.to_string())
                .unwrap_or_else(|| "-".to_string()),
            if player.payment_status {
                "paid"
            } else {
                "unpaid"
            }
        );
    }
    Ok(())
}

/// Handle the player edit command
pub fn handle_edit_player(db: &DbOpts, id: PlayerId, form: PlayerForm) -> Result<()> {
    let Some(fields) = form_to_fields(form) else {
        println!("⚠ {}. Pass --team-id with the full field set.", RegistryError::MissingTeam);
        return Ok(());
    };

    let mut store = open_registry(db)?;
    match store.update_player(id, &fields) {
        Ok(true) => println!("✓ Player updated successfully"),
        Ok(false) => println!("⚠ No player with id {}", id),
        Err(err @ RegistryError::DuplicateIdNumber { .. }) => println!("⚠ {}", err),
        Err(err) => return Err(err.into()),
    }
    Ok(())
}

/// Handle the player delete command
pub fn handle_delete_player(db: &DbOpts, id: PlayerId) -> Result<()> {
    let mut store = open_registry(db)?;
    // Deleting an absent id reports the same success signal
    store.delete_player(id)?;
    println!("✓ Player {} deleted successfully", id);
    Ok(())
}

/// Missing-selection check: a form with no team chosen never reaches the store
fn form_to_fields(form: PlayerForm) -> Option<PlayerFields> {
    let team_id = form.team_id?;
    Some(PlayerFields {
        name: form.name,
        id_number: form.id_number,
        dob: form.dob,
        contact_number: form.contact,
        email_address: form.email,
        team_id,
        payment_status: form.paid,
    })
}

/// Keep players whose names contain `term`, case-insensitively
pub(crate) fn filter_by_name(players: &mut Vec<Player>, term: &str) {
    let term = term.to_lowercase();
    players.retain(|player| player.name.to_lowercase().contains(&term));
}
