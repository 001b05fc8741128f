use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Deserializer, Serialize};

use crate::Value;

/// The label used for a pool when the match does not belong to any.
pub const NO_POOL: &str = "-";

/// The outcome label used when a match has no explicit outcome.
pub const NORMAL_OUTCOME: &str = "normal";

/// A single fixture of a tournament as returned by the fixtures endpoint.
///
/// None of the fields are validated. Missing or `null` fields take their default and all
/// descriptors are rendered as they were received.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Match {
    #[serde(default)]
    pub match_id: Value,
    #[serde(default)]
    pub round_id: Value,
    #[serde(default)]
    pub round_name: Value,
    #[serde(default)]
    pub pool: Value,
    #[serde(default)]
    pub team1_players: Value,
    #[serde(default)]
    pub team2_players: Value,
    #[serde(default)]
    pub match_result: Value,
    #[serde(default)]
    pub outcome: Option<Outcome>,
    #[serde(default)]
    pub winner_team_id: Value,
    #[serde(default, deserialize_with = "null_as_default")]
    pub match_status: MatchStatus,
}

impl Match {
    /// Returns the display name of the round. Falls back to `Round {round_id}` if the match has
    /// no round name.
    pub fn round_label(&self) -> String {
        if self.round_name.is_truthy() {
            self.round_name.to_string()
        } else if self.round_id.is_null() {
            String::from("Round")
        } else {
            format!("Round {}", self.round_id)
        }
    }

    /// Returns the pool of the match or [`NO_POOL`].
    pub fn pool_label(&self) -> String {
        if self.pool.is_truthy() {
            self.pool.to_string()
        } else {
            String::from(NO_POOL)
        }
    }

    #[inline]
    pub fn is_walkover(&self) -> bool {
        matches!(self.outcome, Some(Outcome::Walkover))
    }

    pub fn result(&self) -> MatchResult<'_> {
        if self.is_walkover() {
            MatchResult::Walkover {
                winner: &self.winner_team_id,
            }
        } else {
            MatchResult::Played(&self.match_result)
        }
    }

    /// Returns the outcome tag or [`NORMAL_OUTCOME`] if the match has none.
    pub fn outcome_label(&self) -> &str {
        match &self.outcome {
            Some(outcome) if !outcome.as_str().is_empty() => outcome.as_str(),
            _ => NORMAL_OUTCOME,
        }
    }

    #[inline]
    pub fn status(&self) -> &Status {
        &self.match_status.status
    }
}

/// The result cell of a [`Match`].
///
/// The `Display` impl renders the plain text form used in exports. Html renderers should match
/// on the variants to highlight walkovers.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MatchResult<'a> {
    /// The match was decided without being played. Contains the winning team.
    Walkover { winner: &'a Value },
    /// The match was played normally. Contains the result descriptor.
    Played(&'a Value),
}

impl<'a> Display for MatchResult<'a> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::Walkover { winner } => write!(f, "Winner: {} (Walkover)", winner),
            Self::Played(result) => result.fmt(f),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchStatus {
    #[serde(default)]
    pub status: Status,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// How a match was concluded.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Value", into = "String")]
pub enum Outcome {
    Walkover,
    /// Any outcome tag without special handling.
    Other(String),
}

impl Outcome {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Walkover => "walkover",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for Outcome {
    fn from(s: String) -> Self {
        match s.as_str() {
            "walkover" => Self::Walkover,
            _ => Self::Other(s),
        }
    }
}

// Falsy tags are treated like a missing outcome.
impl From<Value> for Outcome {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => Self::from(s),
            value if value.is_truthy() => Self::Other(value.to_string()),
            _ => Self::Other(String::new()),
        }
    }
}

impl From<Outcome> for String {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Walkover => String::from("walkover"),
            Outcome::Other(s) => s,
        }
    }
}

impl Display for Outcome {
    #[inline]
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The progress state of a match.
///
/// Unknown states are kept verbatim in [`Status::Other`] and share a single fallback style.
/// Non string states are kept in their display form, a missing state is empty.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Value", into = "String")]
pub enum Status {
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
    Postponed,
    Other(String),
}

impl Status {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Scheduled => "scheduled",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::Postponed => "postponed",
            Self::Other(s) => s,
        }
    }

    /// Returns the key of the style used to highlight the status.
    pub fn style(&self) -> StatusStyle {
        match self {
            Self::Scheduled => StatusStyle::Scheduled,
            Self::InProgress => StatusStyle::InProgress,
            Self::Completed => StatusStyle::Completed,
            Self::Cancelled => StatusStyle::Cancelled,
            Self::Postponed => StatusStyle::Postponed,
            Self::Other(_) => StatusStyle::Unknown,
        }
    }
}

impl From<String> for Status {
    fn from(s: String) -> Self {
        match s.as_str() {
            "scheduled" => Self::Scheduled,
            "in_progress" => Self::InProgress,
            "completed" => Self::Completed,
            "cancelled" => Self::Cancelled,
            "postponed" => Self::Postponed,
            _ => Self::Other(s),
        }
    }
}

impl From<Value> for Status {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => Self::from(s),
            value => Self::Other(value.to_string()),
        }
    }
}

impl Default for Status {
    #[inline]
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl From<Status> for String {
    fn from(status: Status) -> Self {
        match status {
            Status::Other(s) => s,
            status => status.as_str().to_owned(),
        }
    }
}

impl Display for Status {
    #[inline]
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum StatusStyle {
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
    Postponed,
    Unknown,
}

impl StatusStyle {
    pub const ALL: [Self; 6] = [
        Self::Scheduled,
        Self::InProgress,
        Self::Completed,
        Self::Cancelled,
        Self::Postponed,
        Self::Unknown,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::Postponed => "postponed",
            Self::Unknown => "unknown",
        }
    }
}
