//! Basic database query operations for the roster store

use super::{models::*, schema::RosterDatabase};
use crate::cli::types::{League, PlayerId, Season, TeamId};
use crate::error::{RegistryError, Result};
use rusqlite::{params, Row};
use std::str::FromStr;

impl RosterDatabase {
    /// Insert a team row with its staff fields and return the newly assigned id
    pub fn register_team(&mut self, team: &NewTeam) -> Result<TeamId> {
        self.conn.execute(
            "INSERT INTO team (team_name, league, season, team_manager, technical_staff,
                               head_coach, assistant_coaches, team_medic, fitness_trainer,
                               full_team_list)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
            params![
                team.team_name,
                team.league.as_str(),
                team.season.as_str(),
                team.team_manager,
                team.technical_staff,
                team.head_coach,
                team.assistant_coaches,
                team.team_medic,
                team.fitness_trainer,
                team.full_team_list
            ],
        )?;
        Ok(TeamId::new(self.conn.last_insert_rowid()))
    }

    /// Register a player into a team, running the duplicate pre-checks.
    ///
    /// - An id number already held by a *different* team fails with
    ///   [`RegistryError::TeamConflict`].
    /// - An id number already held by the *same* team is an idempotent
    ///   re-affirmation: nothing is inserted and the existing row id is
    ///   returned.
    /// - An already-registered name fails with
    ///   [`RegistryError::DuplicateName`].
    pub fn register_player(
        &mut self,
        name: &str,
        id_number: &str,
        team_id: TeamId,
    ) -> Result<PlayerId> {
        // The id-number check runs first so a same-team re-registration is not
        // misreported as a name duplicate.
        if let Some(existing) = self.find_player_by_id_number(id_number)? {
            return if existing.team_id == Some(team_id) {
                Ok(existing.id)
            } else {
                Err(RegistryError::TeamConflict {
                    id_number: id_number.to_string(),
                })
            };
        }

        if self.find_player_by_name(name)?.is_some() {
            return Err(RegistryError::DuplicateName {
                name: name.to_string(),
            });
        }

        self.conn.execute(
            "INSERT INTO player (name, id_number, team_id) VALUES (?, ?, ?)",
            params![name, id_number, team_id.as_i64()],
        )?;
        Ok(PlayerId::new(self.conn.last_insert_rowid()))
    }

    /// Get all teams, in insertion order
    pub fn list_teams(&self) -> Result<Vec<Team>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, team_name, league, season, team_manager, technical_staff,
                    head_coach, assistant_coaches, team_medic, fitness_trainer,
                    full_team_list
             FROM team",
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
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, id_number, team_id FROM player")?;

        let rows = stmt.query_map([], row_to_player)?;

        let mut players = Vec::new();
        for row in rows {
            players.push(row?);
        }
        Ok(players)
    }

    /// Count registered teams, for the summary card
    pub fn team_count(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM team", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    fn find_player_by_id_number(&self, id_number: &str) -> Result<Option<Player>> {
        self.find_player("SELECT id, name, id_number, team_id FROM player WHERE id_number = ?", id_number)
    }

    fn find_player_by_name(&self, name: &str) -> Result<Option<Player>> {
        self.find_player(
            "SELECT id, name, id_number, team_id FROM player WHERE name = ?",
            name,
        )
    }

    fn find_player(&self, sql: &str, value: &str) -> Result<Option<Player>> {
        let mut stmt = self.conn.prepare(sql)?;
        let result = stmt.query_row(params![value], row_to_player);

        match result {
            Ok(player) => Ok(Some(player)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}

fn row_to_team(row: &Row) -> rusqlite::Result<Team> {
    let league: String = row.get(2)?;
    let season: String = row.get(3)?;
    Ok(Team {
        id: TeamId::new(row.get(0)?),
        team_name: row.get(1)?,
        league: parse_text_column::<League>(2, &league)?,
        season: parse_text_column::<Season>(3, &season)?,
        team_manager: row.get(4)?,
        technical_staff: row.get(5)?,
        head_coach: row.get(6)?,
        assistant_coaches: row.get(7)?,
        team_medic: row.get(8)?,
        fitness_trainer: row.get(9)?,
        full_team_list: row.get(10)?,
    })
}

fn row_to_player(row: &Row) -> rusqlite::Result<Player> {
    let team_id: Option<i64> = row.get(3)?;
    Ok(Player {
        id: PlayerId::new(row.get(0)?),
        name: row.get(1)?,
        id_number: row.get(2)?,
        team_id: team_id.map(TeamId::new),
    })
}

fn parse_text_column<T>(idx: usize, value: &str) -> rusqlite::Result<T>
where
    T: FromStr<Err = RegistryError>,
{
    value.parse().map_err(|err: RegistryError| {
        rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(err))
    })
}
