//! Derived summary metrics for the registration store
//!
//! Everything here is computed fresh from the stored rows on every read and
//! carries no independent state.

use super::models::Player;
use super::schema::RegistryDatabase;
use crate::error::Result;
use crate::REGISTRATION_FEE;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Summary card values for the management view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrationSummary {
    pub total_players: usize,
    pub total_fees: f64,
    /// Mean age in years, `None` when no players are registered
    pub average_age: Option<f64>,
}

impl RegistrationSummary {
    /// Compute the summary for `players` as of `today`.
    ///
    /// Ages floor-divide elapsed days by 365 per player before averaging.
    /// Not calendar-accurate around birthdays and leap years.
    pub fn compute(players: &[Player], today: NaiveDate) -> Self {
        let total_players = players.len();
        let total_fees = total_players as f64 * REGISTRATION_FEE;

        let average_age = if players.is_empty() {
            None
        } else {
            let total_years: i64 = players
                .iter()
                .map(|player| age_years(player.dob, today))
                .sum();
            Some(total_years as f64 / total_players as f64)
        };

        Self {
            total_players,
            total_fees,
            average_age,
        }
    }
}

impl RegistryDatabase {
    /// Compute summary metrics over the full player collection as of `today`
    pub fn registration_summary(&self, today: NaiveDate) -> Result<RegistrationSummary> {
        let players = self.list_players()?;
        Ok(RegistrationSummary::compute(&players, today))
    }
}

/// Whole years elapsed between `dob` and `today`, approximated as 365-day years
pub fn age_years(dob: NaiveDate, today: NaiveDate) -> i64 {
    (today - dob).num_days() / 365
}
