use std::convert::Infallible;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The id of a tournament.
///
/// The id is opaque to the match table. It is passed to the fixtures api and used in the name of
/// exported files exactly as it was given.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TournamentId {
    Number(u64),
    String(String),
}

impl TournamentId {
    /// Returns `true` if the id refers to an actual tournament. The zero id and the empty
    /// string are used by callers as a placeholder for "no tournament selected".
    #[inline]
    pub fn is_present(&self) -> bool {
        match self {
            Self::Number(id) => *id != 0,
            Self::String(id) => !id.is_empty(),
        }
    }
}

impl Default for TournamentId {
    #[inline]
    fn default() -> Self {
        Self::Number(0)
    }
}

impl Display for TournamentId {
    #[inline]
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::Number(id) => id.fmt(f),
            Self::String(id) => f.write_str(id),
        }
    }
}

impl From<u64> for TournamentId {
    #[inline]
    fn from(id: u64) -> Self {
        Self::Number(id)
    }
}

impl From<&str> for TournamentId {
    #[inline]
    fn from(id: &str) -> Self {
        Self::String(id.to_owned())
    }
}

impl From<String> for TournamentId {
    #[inline]
    fn from(id: String) -> Self {
        Self::String(id)
    }
}

/// Parses numeric ids as [`TournamentId::Number`], everything else is kept as a string.
impl FromStr for TournamentId {
    type Err = Infallible;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse() {
            Ok(id) => Ok(Self::Number(id)),
            Err(_) => Ok(Self::from(s)),
        }
    }
}
