//! Unit tests for error display formatting

use super::*;

#[test]
fn test_duplicate_id_number_display() {
    let err = RegistryError::DuplicateIdNumber {
        id_number: "ID001".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "A player with ID number ID001 is already registered"
    );
}

#[test]
fn test_duplicate_name_display() {
    let err = RegistryError::DuplicateName {
        name: "A. Smith".to_string(),
    };
    assert_eq!(err.to_string(), "Player A. Smith is already registered");
}

#[test]
fn test_team_conflict_display() {
    let err = RegistryError::TeamConflict {
        id_number: "ID001".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "ID number ID001 is already registered to another team"
    );
}

#[test]
fn test_missing_team_display() {
    assert_eq!(RegistryError::MissingTeam.to_string(), "No team selected");
}

#[test]
fn test_invalid_league_display() {
    let err = RegistryError::InvalidLeague {
        value: "Third League".to_string(),
    };
    assert_eq!(err.to_string(), "Invalid league: Third League");
}

#[test]
fn test_from_io_error() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let err: RegistryError = io_err.into();
    assert!(matches!(err, RegistryError::Io(_)));
    assert!(err.to_string().starts_with("IO error:"));
}

#[test]
fn test_from_parse_int_error() {
    let parse_err = "abc".parse::<i64>().unwrap_err();
    let err: RegistryError = parse_err.into();
    assert!(matches!(err, RegistryError::InvalidId(_)));
}
