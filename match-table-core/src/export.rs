//! CSV export of the match table.
use std::io;
use std::string::FromUtf8Error;

use csv::{QuoteStyle, Terminator, WriterBuilder};
use thiserror::Error;

use crate::{Match, TournamentId};

/// The column headers of an export in their fixed order.
pub const HEADERS: [&str; 8] = [
    "Match ID", "Round", "Pool", "Team 1", "Team 2", "Result", "Outcome", "Status",
];

pub const CSV_MIME: &str = "text/csv;charset=utf-8;";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("no tournament selected")]
    NoTournament,
    #[error("csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("io: {0}")]
    Io(#[from] io::Error),
    #[error("invalid utf8: {0}")]
    InvalidUtf8(#[from] FromUtf8Error),
    #[error("download: {0}")]
    Download(String),
}

/// A complete CSV export of a tournament.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CsvFile {
    pub file_name: String,
    pub mime: &'static str,
    pub content: String,
}

impl CsvFile {
    /// Builds the export of `matches`. The whole file is built in memory, an error means that
    /// nothing should be delivered.
    ///
    /// # Errors
    ///
    /// Returns an error if writing any record fails.
    pub fn new(tournament_id: &TournamentId, matches: &[Match]) -> Result<Self, ExportError> {
        Ok(Self {
            file_name: file_name(tournament_id),
            mime: CSV_MIME,
            content: to_csv(matches)?,
        })
    }
}

/// Returns the name of the export file of the tournament with the given `id`.
pub fn file_name(id: &TournamentId) -> String {
    format!("tournament_{}_matches.csv", id)
}

/// Serializes `matches` into CSV. Every field is quoted, records are separated by `\n` and the
/// last record is not terminated.
///
/// # Errors
///
/// Returns an error if writing any record fails.
pub fn to_csv(matches: &[Match]) -> Result<String, ExportError> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(HEADERS)?;

    for m in matches {
        writer.write_record(&[
            m.match_id.to_string(),
            m.round_label(),
            m.pool_label(),
            m.team1_players.to_string(),
            m.team2_players.to_string(),
            m.result().to_string(),
            m.outcome_label().to_owned(),
            m.status().to_string(),
        ])?;
    }

    let mut buf = writer
        .into_inner()
        .map_err(|err| io::Error::new(err.error().kind(), err.to_string()))?;

    if buf.last() == Some(&b'\n') {
        buf.pop();
    }

    Ok(String::from_utf8(buf)?)
}

/// A target an export can be delivered to.
pub trait Download {
    type Error: ToString;

    /// Delivers the complete `file`.
    fn download(&self, file: &CsvFile) -> Result<(), Self::Error>;
}

impl<D> Download for &D
where
    D: Download + ?Sized,
{
    type Error = D::Error;

    #[inline]
    fn download(&self, file: &CsvFile) -> Result<(), Self::Error> {
        (**self).download(file)
    }
}

#[cfg(test)]
mod tests {
    use super::{file_name, to_csv, CsvFile, CSV_MIME};
    use crate::test_utils::new_match;
    use crate::{Outcome, TournamentId, Value};

    #[test]
    fn test_to_csv() {
        let csv = to_csv(&[new_match(1)]).unwrap();

        assert_eq!(
            csv,
            "\"Match ID\",\"Round\",\"Pool\",\"Team 1\",\"Team 2\",\"Result\",\"Outcome\",\"Status\"\n\
             \"1\",\"Round 1\",\"-\",\"A\",\"B\",\"A won\",\"normal\",\"completed\""
        );
    }

    #[test]
    fn test_to_csv_empty() {
        let csv = to_csv(&[]).unwrap();

        assert_eq!(
            csv,
            "\"Match ID\",\"Round\",\"Pool\",\"Team 1\",\"Team 2\",\"Result\",\"Outcome\",\"Status\""
        );
    }

    #[test]
    fn test_to_csv_row_count() {
        let matches: Vec<_> = (1..=5).map(new_match).collect();

        let csv = to_csv(&matches).unwrap();
        assert_eq!(csv.lines().count(), matches.len() + 1);

        let ids: Vec<_> = csv
            .lines()
            .skip(1)
            .map(|line| line.split(',').next().unwrap())
            .collect();
        assert_eq!(ids, ["\"1\"", "\"2\"", "\"3\"", "\"4\"", "\"5\""]);
    }

    #[test]
    fn test_to_csv_walkover() {
        let mut m = new_match(7);
        m.round_id = Value::U64(3);
        m.pool = "B".into();
        m.outcome = Some(Outcome::Walkover);
        m.winner_team_id = "T1".into();

        let csv = to_csv(&[m]).unwrap();
        let row = csv.lines().nth(1).unwrap();

        assert_eq!(
            row,
            "\"7\",\"Round 3\",\"B\",\"A\",\"B\",\"Winner: T1 (Walkover)\",\"walkover\",\"completed\""
        );
    }

    #[test]
    fn test_to_csv_null_fields() {
        let mut m = new_match(1);
        m.team1_players = Value::Null;
        m.team2_players = Value::Null;
        m.match_result = Value::Null;

        let csv = to_csv(&[m]).unwrap();
        let row = csv.lines().nth(1).unwrap();

        assert_eq!(
            row,
            "\"1\",\"Round 1\",\"-\",\"\",\"\",\"\",\"normal\",\"completed\""
        );
        assert!(!csv.contains("null"));
        assert!(!csv.contains("undefined"));
    }

    #[test]
    fn test_to_csv_escapes_quotes() {
        let mut m = new_match(1);
        m.match_result = "A \"won\", barely".into();

        let csv = to_csv(&[m]).unwrap();
        let row = csv.lines().nth(1).unwrap();

        assert!(row.contains("\"A \"\"won\"\", barely\""));
    }

    #[test]
    fn test_csv_file() {
        let file = CsvFile::new(&TournamentId::from(42), &[new_match(1)]).unwrap();

        assert_eq!(file.file_name, "tournament_42_matches.csv");
        assert_eq!(file.mime, CSV_MIME);
        assert_eq!(file.content, to_csv(&[new_match(1)]).unwrap());

        assert_eq!(file_name(&TournamentId::from(3)), "tournament_3_matches.csv");
        assert_eq!(
            file_name(&TournamentId::from("cup-2024")),
            "tournament_cup-2024_matches.csv"
        );
    }
}
