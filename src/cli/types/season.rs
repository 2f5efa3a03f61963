//! Registration seasons offered by the association.

use crate::error::{RegistryError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed set of seasons open for registration.
///
/// Displayed and stored as the cross-year label, e.g. `2024/2025`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Season {
    #[default]
    #[serde(rename = "2024/2025")]
    S2024,
    #[serde(rename = "2025/2026")]
    S2025,
    #[serde(rename = "2026/2027")]
    S2026,
}

impl Season {
    /// All seasons, in the order the sign-up form offers them.
    pub const ALL: [Season; 3] = [Season::S2024, Season::S2025, Season::S2026];

    /// The season label as shown on the sign-up form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Season::S2024 => "2024/2025",
            Season::S2025 => "2025/2026",
            Season::S2026 => "2026/2027",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Season {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self> {
        Season::ALL
            .iter()
            .find(|season| season.as_str() == s)
            .copied()
            .ok_or_else(|| RegistryError::InvalidSeason {
                value: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::types::League;

    #[test]
    fn test_season_round_trip() {
        for season in Season::ALL {
            assert_eq!(season.as_str().parse::<Season>().unwrap(), season);
        }
    }

    #[test]
    fn test_season_rejects_unknown() {
        assert!("2030/2031".parse::<Season>().is_err());
    }

    #[test]
    fn test_league_round_trip() {
        for league in League::ALL {
            assert_eq!(league.as_str().parse::<League>().unwrap(), league);
        }
    }

    #[test]
    fn test_league_parse_case_insensitive() {
        let league: League = "first league women's".parse().unwrap();
        assert_eq!(league, League::FirstWomens);
    }

    #[test]
    fn test_league_rejects_unknown() {
        assert!("Third League Men's".parse::<League>().is_err());
    }

    #[test]
    fn test_defaults_match_first_form_option() {
        assert_eq!(League::default(), League::FirstMens);
        assert_eq!(Season::default(), Season::S2024);
    }
}
