use match_table_core::{Match, TournamentId};
use serde_json::Value;

use crate::{Client, Endpoint, Result};

#[derive(Copy, Clone, Debug)]
pub struct FixturesClient<'a> {
    client: &'a Client,
}

impl<'a> FixturesClient<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Returns the matches of the tournament with the given `tournament_id`. Returns `None` if
    /// the response does not contain a list of matches.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server responds with a non 2xx status code or
    /// the response is not valid json.
    pub async fn list(&self, tournament_id: &TournamentId) -> Result<Option<Vec<Match>>> {
        let req = self
            .client
            .request(Endpoint::GetFixtures)
            .query("tournament_id", tournament_id)
            .build();

        let body = self.client.send(req).await?.bytes().await?;

        decode(&body)
    }
}

/// Decodes the body of a fixtures response.
///
/// The matches are taken from the `matches` field of a json object. Any other json document is
/// not considered an error and yields `None`.
///
/// # Errors
///
/// Returns an error if `body` is not valid json or the `matches` field is not a list of
/// matches.
pub fn decode(body: &[u8]) -> Result<Option<Vec<Match>>> {
    let value: Value = serde_json::from_slice(body)?;

    let matches = match value {
        Value::Object(mut map) => map.remove("matches"),
        _ => None,
    };

    match matches {
        None | Some(Value::Null) => Ok(None),
        Some(matches) => Ok(Some(serde_json::from_value(matches)?)),
    }
}

#[cfg(test)]
mod tests {
    use match_table_core::{Status, Value};

    use super::decode;
    use crate::Error;

    #[test]
    fn test_decode() {
        let body = br#"{
            "matches": [
                {
                    "match_id": 1,
                    "round_id": 1,
                    "team1_players": "A",
                    "team2_players": "B",
                    "match_result": "A won",
                    "outcome": null,
                    "match_status": { "status": "completed" }
                },
                {
                    "match_id": "m-2",
                    "round_id": 2,
                    "round_name": "Final",
                    "pool": "A",
                    "outcome": "walkover",
                    "winner_team_id": "T1",
                    "match_status": { "status": "scheduled" }
                }
            ],
            "total": 2
        }"#;

        let matches = decode(body).unwrap().unwrap();
        assert_eq!(matches.len(), 2);

        assert_eq!(matches[0].match_id, Value::U64(1));
        assert_eq!(*matches[0].status(), Status::Completed);

        assert_eq!(matches[1].match_id, Value::from("m-2"));
        assert!(matches[1].is_walkover());
        assert_eq!(matches[1].round_label(), "Final");
        assert_eq!(matches[1].pool_label(), "A");
    }

    #[test]
    fn test_decode_empty() {
        let matches = decode(br#"{ "matches": [] }"#).unwrap();
        assert_eq!(matches, Some(Vec::new()));
    }

    #[test]
    fn test_decode_no_matches() {
        assert_eq!(decode(br#"{}"#).unwrap(), None);
        assert_eq!(decode(br#"{ "matches": null }"#).unwrap(), None);
        assert_eq!(decode(br#"{ "error": "not found" }"#).unwrap(), None);
        assert_eq!(decode(br#"[1, 2, 3]"#).unwrap(), None);
        assert_eq!(decode(br#""matches""#).unwrap(), None);
    }

    #[test]
    fn test_decode_invalid() {
        assert!(matches!(
            decode(b"<html>").unwrap_err(),
            Error::SerdeJson(_)
        ));

        assert!(matches!(
            decode(br#"{ "matches": 3 }"#).unwrap_err(),
            Error::SerdeJson(_)
        ));
        assert!(matches!(
            decode(br#"{ "matches": [1] }"#).unwrap_err(),
            Error::SerdeJson(_)
        ));
    }

    #[test]
    fn test_decode_loose_fields() {
        let body = br#"{
            "matches": [
                {
                    "match_id": 1,
                    "round_id": 1,
                    "pool": 3,
                    "match_status": { "status": "completed" }
                },
                {
                    "match_id": 2,
                    "round_name": 4,
                    "team1_players": [{ "name": "A" }],
                    "team2_players": { "name": "B" },
                    "match_status": { "status": null }
                },
                { "match_id": 3 }
            ]
        }"#;

        let matches = decode(body).unwrap().unwrap();
        assert_eq!(matches.len(), 3);

        assert_eq!(matches[0].pool_label(), "3");
        assert_eq!(*matches[0].status(), Status::Completed);

        assert_eq!(matches[1].round_label(), "4");
        assert_eq!(matches[1].team1_players.to_string(), "[object Object]");
        assert_eq!(matches[1].status().to_string(), "");

        assert_eq!(matches[2].match_id, Value::U64(3));
        assert_eq!(matches[2].round_label(), "Round");
        assert_eq!(matches[2].status().to_string(), "");
    }
}
