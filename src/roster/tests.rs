//! Unit tests for the roster store

use super::*;
use crate::cli::types::{League, Season, TeamId};
use crate::error::RegistryError;

fn create_test_db() -> RosterDatabase {
    RosterDatabase::open_in_memory().unwrap()
}

fn sharks() -> NewTeam {
    NewTeam {
        team_name: "Sharks".to_string(),
        league: League::FirstMens,
        season: Season::S2024,
        team_manager: "M. Moyo".to_string(),
        technical_staff: "T. Dube".to_string(),
        head_coach: "H. Ncube".to_string(),
        assistant_coaches: "P. Sibanda, K. Nkomo".to_string(),
        team_medic: "Dr. R. Banda".to_string(),
        fitness_trainer: "F. Phiri".to_string(),
        full_team_list: "A. Smith - ID001\nB. Jones - ID002".to_string(),
    }
}

#[test]
fn test_database_creation() {
    let _db = create_test_db();
}

#[test]
fn test_register_team_round_trips_staff_fields() {
    let mut db = create_test_db();
    let id = db.register_team(&sharks()).unwrap();

    let teams = db.list_teams().unwrap();
    assert_eq!(teams.len(), 1);
    assert_eq!(teams[0].id, id);
    assert_eq!(teams[0].team_manager, "M. Moyo");
    assert_eq!(teams[0].assistant_coaches, "P. Sibanda, K. Nkomo");
    assert_eq!(
        teams[0].full_team_list,
        "A. Smith - ID001\nB. Jones - ID002"
    );
}

#[test]
fn test_register_team_allows_duplicates_and_increases_ids() {
    let mut db = create_test_db();

    let first = db.register_team(&sharks()).unwrap();
    let second = db.register_team(&sharks()).unwrap();

    assert!(first < second);
    assert_eq!(db.team_count().unwrap(), 2);
}

#[test]
fn test_register_player() {
    let mut db = create_test_db();
    let team_id = db.register_team(&sharks()).unwrap();

    let id = db.register_player("A. Smith", "ID001", team_id).unwrap();
    let players = db.list_players().unwrap();
    assert_eq!(players.len(), 1);
    assert_eq!(players[0].id, id);
    assert_eq!(players[0].team_id, Some(team_id));
}

#[test]
fn test_register_player_duplicate_name_rejected() {
    let mut db = create_test_db();
    let team_id = db.register_team(&sharks()).unwrap();

    db.register_player("A. Smith", "ID001", team_id).unwrap();

    // Same name under a fresh id number is still a duplicate
    let result = db.register_player("A. Smith", "ID002", team_id);
    assert!(matches!(
        result,
        Err(RegistryError::DuplicateName { ref name }) if name == "A. Smith"
    ));
    assert_eq!(db.list_players().unwrap().len(), 1);
}

#[test]
fn test_cross_team_conflict_scenario() {
    let mut db = create_test_db();
    let team_one = db.register_team(&sharks()).unwrap();
    let mut other = sharks();
    other.team_name = "Dolphins".to_string();
    let team_two = db.register_team(&other).unwrap();

    // A. Smith registers with team one
    let id = db.register_player("A. Smith", "ID001", team_one).unwrap();

    // Re-registering the same id number into team two is a conflict
    let result = db.register_player("A. Smith", "ID001", team_two);
    assert!(matches!(
        result,
        Err(RegistryError::TeamConflict { ref id_number }) if id_number == "ID001"
    ));

    // Re-registering into team one again is an idempotent re-affirmation
    let again = db.register_player("A. Smith", "ID001", team_one).unwrap();
    assert_eq!(again, id);
    assert_eq!(db.list_players().unwrap().len(), 1);
}

#[test]
fn test_schema_initialization_is_idempotent() {
    let mut db = create_test_db();
    let team_id = db.register_team(&sharks()).unwrap();
    db.register_player("A. Smith", "ID001", team_id).unwrap();

    db.initialize_schema().unwrap();
    assert_eq!(db.team_count().unwrap(), 1);
    assert_eq!(db.list_players().unwrap().len(), 1);
}

#[test]
fn test_team_count_empty() {
    let db = create_test_db();
    assert_eq!(db.team_count().unwrap(), 0);
    assert!(db.list_teams().unwrap().is_empty());
}

#[test]
fn test_conflict_with_unassigned_player() {
    let mut db = create_test_db();
    let team_id = db.register_team(&sharks()).unwrap();

    // A row with no team assignment counts as belonging to a different team
    db.conn
        .execute(
            "INSERT INTO player (name, id_number, team_id) VALUES (?, ?, NULL)",
            rusqlite::params!["C. Brown", "ID003"],
        )
        .unwrap();

    let result = db.register_player("C. Brown", "ID003", team_id);
    assert!(matches!(result, Err(RegistryError::TeamConflict { .. })));
}
