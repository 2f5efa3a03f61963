//! Basic database query operations for the registration store

use super::{models::*, schema::RegistryDatabase};
use crate::cli::types::{League, PlayerId, Season, TeamId};
use crate::error::{RegistryError, Result};
use crate::REGISTRATION_FEE;
use rusqlite::{params, Row};
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

impl RegistryDatabase {
    /// Insert a team row and return its newly assigned id.
    ///
    /// Team names carry no uniqueness constraint; duplicate names are allowed
    /// and ids strictly increase across successive registrations.
    pub fn register_team(&mut self, team: &NewTeam) -> Result<TeamId> {
        let now = unix_now()?;
        self.conn.execute(
            "INSERT INTO teams (team_name, league, season, payment_status, created_at)
             VALUES (?, ?, ?, ?, ?)",
            params![
                team.team_name,
                team.league.as_str(),
                team.season.as_str(),
                team.payment_status,
                now
            ],
        )?;
        Ok(TeamId::new(self.conn.last_insert_rowid()))
    }

    /// Register a player and return the newly assigned id.
    ///
    /// The registration fee is fixed by the store, not supplied by the caller.
    /// Fails with [`RegistryError::DuplicateIdNumber`] when the id number is
    /// already taken; no row is inserted in that case.
    pub fn register_player(&mut self, fields: &PlayerFields) -> Result<PlayerId> {
        let now = unix_now()?;
        let result = self.conn.execute(
            "INSERT INTO players (name, id_number, dob, contact_number, email_address,
                                  fee, team_id, payment_status, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
            params![
                fields.name,
                fields.id_number,
                fields.dob,
                fields.contact_number,
                fields.email_address,
                REGISTRATION_FEE,
                fields.team_id.as_i64(),
                fields.payment_status,
                now
            ],
        );

        match result {
            Ok(_) => Ok(PlayerId::new(self.conn.last_insert_rowid())),
            Err(err) if is_unique_violation(&err) => Err(RegistryError::DuplicateIdNumber {
                id_number: fields.id_number.clone(),
            }),
            Err(err) => Err(err.into()),
        }
    }

    /// Get all teams, in insertion order
    pub fn list_teams(&self) -> Result<Vec<Team>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, team_name, league, season, payment_status, created_at FROM teams",
        )?;

        let rows = stmt.query_map([], row_to_team)?;

        let mut teams = Vec::new();
        for row in rows {
            teams.push(row?);
        }
        Ok(teams)
    }

    /// Get all players, in insertion order
    pub fn list_players(&self) -> Result<Vec<Player>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, id_number, dob, contact_number, email_address,
                    fee, team_id, payment_status, created_at
             FROM players",
        )?;

        let rows = stmt.query_map([], row_to_player)?;

        let mut players = Vec::new();
        for row in rows {
            players.push(row?);
        }
        Ok(players)
    }

    /// Get a single player by id
    pub fn get_player(&self, id: PlayerId) -> Result<Option<Player>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, id_number, dob, contact_number, email_address,
                    fee, team_id, payment_status, created_at
             FROM players
             WHERE id = ?",
        )?;

        let result = stmt.query_row(params![id.as_i64()], row_to_player);

        match result {
            Ok(player) => Ok(Some(player)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    /// Overwrite every mutable field on the row matching `id`.
    ///
    /// The id number is re-validated against the other rows before any write,
    /// so an edit cannot collide with another player's id number. Returns
    /// whether a row was actually updated.
    pub fn update_player(&mut self, id: PlayerId, fields: &PlayerFields) -> Result<bool> {
        let taken = self
            .conn
            .query_row(
                "SELECT id FROM players WHERE id_number = ? AND id != ?",
                params![fields.id_number, id.as_i64()],
                |row| row.get::<_, i64>(0),
            )
            .map(Some)
            .or_else(|err| match err {
                rusqlite::Error::QueryReturnedNoRows => Ok(None),
                other => Err(other),
            })?;

        if taken.is_some() {
            return Err(RegistryError::DuplicateIdNumber {
                id_number: fields.id_number.clone(),
            });
        }

        let rows_affected = self.conn.execute(
            "UPDATE players
             SET name = ?, id_number = ?, dob = ?, contact_number = ?,
                 email_address = ?, team_id = ?, payment_status = ?
             WHERE id = ?",
            params![
                fields.name,
                fields.id_number,
                fields.dob,
                fields.contact_number,
                fields.email_address,
                fields.team_id.as_i64(),
                fields.payment_status,
                id.as_i64()
            ],
        )?;
        Ok(rows_affected > 0)
    }

    /// Remove the player matching `id`.
    ///
    /// Deleting an absent id performs no mutation; the return value reports
    /// whether a row existed.
    pub fn delete_player(&mut self, id: PlayerId) -> Result<bool> {
        let rows_affected = self
            .conn
            .execute("DELETE FROM players WHERE id = ?", params![id.as_i64()])?;
        Ok(rows_affected > 0)
    }
}

/// Whether a rusqlite error is a UNIQUE/constraint violation
pub(crate) fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _) if e.code == rusqlite::ErrorCode::ConstraintViolation
    )
}

fn row_to_team(row: &Row) -> rusqlite::Result<Team> {
    let league: String = row.get(2)?;
    let season: String = row.get(3)?;
    Ok(Team {
        id: TeamId::new(row.get(0)?),
        team_name: row.get(1)?,
        league: parse_text_column::<League>(2, &league)?,
        season: parse_text_column::<Season>(3, &season)?,
        payment_status: row.get(4)?,
        created_at: row.get(5)?,
    })
}

fn row_to_player(row: &Row) -> rusqlite::Result<Player> {
    let team_id: Option<i64> = row.get(7)?;
    Ok(Player {
        id: PlayerId::new(row.get(0)?),
        name: row.get(1)?,
        id_number: row.get(2)?,
        dob: row.get(3)?,
        contact_number: row.get(4)?,
        email_address: row.get(5)?,
        fee: row.get(6)?,
        team_id: team_id.map(TeamId::new),
        payment_status: row.get(8)?,
        created_at: row.get(9)?,
    })
}

/// Parse an enum stored as its display text back from a column
fn parse_text_column<T>(idx: usize, value: &str) -> rusqlite::Result<T>
where
    T: FromStr<Err = RegistryError>,
{
    value.parse().map_err(|err: RegistryError| {
        rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(err))
    })
}

fn unix_now() -> Result<u64> {
    Ok(SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs())
}
