//! League divisions offered by the association.

use crate::error::{RegistryError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed set of league divisions teams can register into.
///
/// Parsed from and displayed as the division's full name, which is also how it
/// is stored in the database.
///
/// # Examples
///
/// ```rust
/// use league_registry::League;
///
/// let league: League = "First League Men's".parse().unwrap();
/// assert_eq!(league, League::FirstMens);
/// assert_eq!(league.to_string(), "First League Men's");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum League {
    #[default]
    #[serde(rename = "First League Men's")]
    FirstMens,
    #[serde(rename = "First League Women's")]
    FirstWomens,
    #[serde(rename = "Second League Men's")]
    SecondMens,
    #[serde(rename = "Second League Women's")]
    SecondWomens,
}

impl League {
    /// All divisions, in the order the sign-up form offers them.
    pub const ALL: [League; 4] = [
        League::FirstMens,
        League::FirstWomens,
        League::SecondMens,
        League::SecondWomens,
    ];

    /// The division's full name as shown on the sign-up form.
    pub fn as_str(&self) -> &'static str {
        match self {
            League::FirstMens => "First League Men's",
            League::FirstWomens => "First League Women's",
            League::SecondMens => "Second League Men's",
            League::SecondWomens => "Second League Women's",
        }
    }
}

impl fmt::Display for League {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for League {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self> {
        League::ALL
            .iter()
            .find(|league| league.as_str().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| RegistryError::InvalidLeague {
                value: s.to_string(),
            })
    }
}
