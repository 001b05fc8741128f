//! The state of the match loader.
use std::fmt::Display;

use crate::export::{CsvFile, Download, ExportError};
use crate::notify::{self, Notifier};
use crate::{Match, TournamentId};

/// A tag identifying a single request for matches.
///
/// A `Ticket` is handed out by [`MatchList::select`] and must be given back together with the
/// response in [`MatchList::complete`]. Responses for tickets that were superseded by a newer
/// selection are discarded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ticket {
    tournament_id: TournamentId,
    generation: u64,
}

impl Ticket {
    /// Returns the tournament the request should be made for.
    #[inline]
    pub fn tournament_id(&self) -> &TournamentId {
        &self.tournament_id
    }
}

/// The effect a response had on a [`MatchList`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Completion {
    /// The matches were replaced with the response.
    Replaced,
    /// The response contained no matches, the previous matches were kept.
    Unchanged,
    /// The request failed, the previous matches were kept.
    Failed,
    /// The response belongs to a superseded request and was ignored.
    Stale,
}

/// The matches of the selected tournament.
///
/// The matches are only ever replaced as a whole and kept in the order they were received.
#[derive(Clone, Debug)]
pub struct MatchList {
    matches: Vec<Match>,
    loading: bool,
    tournament_id: Option<TournamentId>,
    // Tournament the current matches were loaded for.
    loaded_for: Option<TournamentId>,
    generation: u64,
    // Generation of the request whose response is still expected.
    in_flight: Option<u64>,
}

impl MatchList {
    /// Creates a new empty `MatchList`. A new list is considered loading until the first
    /// response arrives.
    pub fn new() -> Self {
        Self {
            matches: Vec::new(),
            loading: true,
            tournament_id: None,
            loaded_for: None,
            generation: 0,
            in_flight: None,
        }
    }

    #[inline]
    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    #[inline]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Returns the currently selected tournament.
    #[inline]
    pub fn tournament_id(&self) -> Option<&TournamentId> {
        self.tournament_id.as_ref()
    }

    /// Selects the tournament to load the matches of. Returns a [`Ticket`] if a request should
    /// be made.
    ///
    /// An absent, zero or empty `tournament_id` does not start a request and keeps the loaded
    /// matches and the loading flag as they are. Pending requests are superseded either way.
    pub fn select(&mut self, tournament_id: Option<TournamentId>) -> Option<Ticket> {
        match tournament_id.filter(|id| id.is_present()) {
            Some(tournament_id) => {
                log::debug!("Loading matches of tournament {}", tournament_id);

                self.generation = self.generation.wrapping_add(1);
                self.tournament_id = Some(tournament_id.clone());
                self.in_flight = Some(self.generation);
                self.loading = true;

                Some(Ticket {
                    tournament_id,
                    generation: self.generation,
                })
            }
            None => {
                log::debug!("No tournament selected, not loading matches");

                self.tournament_id = None;
                self.in_flight = None;
                None
            }
        }
    }

    /// Applies the `result` of the request identified by `ticket`.
    ///
    /// A failed request is logged and reported through `notifier` exactly once. The previously
    /// loaded matches are kept.
    pub fn complete<E, N>(
        &mut self,
        ticket: Ticket,
        result: Result<Option<Vec<Match>>, E>,
        notifier: &N,
    ) -> Completion
    where
        E: Display,
        N: Notifier + ?Sized,
    {
        if self.in_flight != Some(ticket.generation) {
            log::debug!(
                "Discarding stale response for tournament {}",
                ticket.tournament_id
            );

            if self.in_flight.is_none() {
                self.loading = false;
            }

            return Completion::Stale;
        }

        self.in_flight = None;
        self.loading = false;

        match result {
            Ok(Some(matches)) => {
                log::debug!(
                    "Loaded {} matches of tournament {}",
                    matches.len(),
                    ticket.tournament_id
                );

                self.matches = matches;
                self.loaded_for = Some(ticket.tournament_id);
                Completion::Replaced
            }
            Ok(None) => {
                log::debug!(
                    "Response for tournament {} contains no matches",
                    ticket.tournament_id
                );

                Completion::Unchanged
            }
            Err(err) => {
                log::error!("Failed to fetch matches: {}", err);
                notifier.error(notify::LOAD_FAILED);

                Completion::Failed
            }
        }
    }

    /// Exports the loaded matches as CSV and hands the file to `downloader`.
    ///
    /// The file is named after the selected tournament. While no tournament is selected the
    /// tournament the matches were loaded for is used instead. The outcome is reported through
    /// `notifier`. On failure nothing is delivered.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no tournament to name the file after, the CSV cannot be
    /// built or the delivery fails.
    pub fn export<D, N>(&self, downloader: D, notifier: &N) -> Result<(), ExportError>
    where
        D: Download,
        N: Notifier + ?Sized,
    {
        match self.build_and_deliver(downloader) {
            Ok(file_name) => {
                log::info!("Exported {} matches to {}", self.matches.len(), file_name);
                notifier.success(notify::EXPORT_SUCCEEDED);
                Ok(())
            }
            Err(err) => {
                log::error!("Failed to export CSV: {}", err);
                notifier.error(notify::EXPORT_FAILED);
                Err(err)
            }
        }
    }

    fn build_and_deliver<D>(&self, downloader: D) -> Result<String, ExportError>
    where
        D: Download,
    {
        let tournament_id = self
            .tournament_id
            .as_ref()
            .or(self.loaded_for.as_ref())
            .ok_or(ExportError::NoTournament)?;
        let file = CsvFile::new(tournament_id, &self.matches)?;

        downloader
            .download(&file)
            .map_err(|err| ExportError::Download(err.to_string()))?;

        Ok(file.file_name)
    }
}

impl Default for MatchList {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::{Completion, MatchList};
    use crate::export::{CsvFile, Download, ExportError};
    use crate::notify::{self, Level, Notification};
    use crate::test_utils::{new_match, Recorder};
    use crate::{Match, TournamentId, Value};

    #[derive(Default)]
    struct Files(RefCell<Vec<CsvFile>>);

    impl Download for Files {
        type Error = &'static str;

        fn download(&self, file: &CsvFile) -> Result<(), Self::Error> {
            self.0.borrow_mut().push(file.clone());
            Ok(())
        }
    }

    struct Broken;

    impl Download for Broken {
        type Error = &'static str;

        fn download(&self, _file: &CsvFile) -> Result<(), Self::Error> {
            Err("no document")
        }
    }

    fn loaded(id: u64, matches: Vec<Match>) -> MatchList {
        let mut list = MatchList::new();
        let ticket = list.select(Some(TournamentId::from(id))).unwrap();
        list.complete(ticket, Ok::<_, &str>(Some(matches)), &Recorder::default());
        list
    }

    #[test]
    fn test_match_list_new() {
        let list = MatchList::new();
        assert!(list.is_loading());
        assert!(list.matches().is_empty());
        assert_eq!(list.tournament_id(), None);
    }

    #[test]
    fn test_select_absent() {
        let mut list = MatchList::new();
        assert_eq!(list.select(None), None);
        assert_eq!(list.select(Some(TournamentId::from(0))), None);
        assert!(list.is_loading());
        assert!(list.matches().is_empty());

        let mut list = loaded(1, vec![new_match(1)]);
        assert_eq!(list.select(None), None);
        assert!(!list.is_loading());
        assert_eq!(list.matches(), [new_match(1)]);
    }

    #[test]
    fn test_complete_replaced() {
        let mut list = MatchList::new();
        let notifier = Recorder::default();

        let ticket = list.select(Some(TournamentId::from(42))).unwrap();
        assert_eq!(*ticket.tournament_id(), TournamentId::from(42));
        assert!(list.is_loading());

        let completion = list.complete(
            ticket,
            Ok::<_, &str>(Some(vec![new_match(2), new_match(1)])),
            &notifier,
        );
        assert_eq!(completion, Completion::Replaced);
        assert!(!list.is_loading());

        let ids: Vec<_> = list.matches().iter().map(|m| m.match_id.clone()).collect();
        assert_eq!(ids, [Value::U64(2), Value::U64(1)]);

        assert!(notifier.take().is_empty());
    }

    #[test]
    fn test_complete_unchanged() {
        let mut list = loaded(1, vec![new_match(1)]);

        let ticket = list.select(Some(TournamentId::from(1))).unwrap();
        let completion = list.complete(ticket, Ok::<_, &str>(None), &Recorder::default());

        assert_eq!(completion, Completion::Unchanged);
        assert!(!list.is_loading());
        assert_eq!(list.matches(), [new_match(1)]);
    }

    #[test]
    fn test_complete_failed() {
        let mut list = loaded(1, vec![new_match(1), new_match(2)]);
        let notifier = Recorder::default();

        let ticket = list.select(Some(TournamentId::from(2))).unwrap();
        let completion = list.complete(ticket, Err("connection refused"), &notifier);

        assert_eq!(completion, Completion::Failed);
        assert!(!list.is_loading());
        assert_eq!(list.matches(), [new_match(1), new_match(2)]);

        assert_eq!(
            notifier.take(),
            [Notification::error(notify::LOAD_FAILED)]
        );
    }

    #[test]
    fn test_complete_stale() {
        let mut list = MatchList::new();
        let notifier = Recorder::default();

        let first = list.select(Some(TournamentId::from(1))).unwrap();
        let second = list.select(Some(TournamentId::from(2))).unwrap();

        let completion = list.complete(
            first.clone(),
            Ok::<_, &str>(Some(vec![new_match(1)])),
            &notifier,
        );
        assert_eq!(completion, Completion::Stale);
        assert!(list.is_loading());
        assert!(list.matches().is_empty());

        // Stale failures are not reported.
        let completion = list.complete(first, Err("timeout"), &notifier);
        assert_eq!(completion, Completion::Stale);
        assert!(notifier.take().is_empty());

        let completion = list.complete(
            second.clone(),
            Ok::<_, &str>(Some(vec![new_match(2)])),
            &notifier,
        );
        assert_eq!(completion, Completion::Replaced);
        assert_eq!(list.matches(), [new_match(2)]);

        // A ticket can only be completed once.
        let completion = list.complete(second, Ok::<_, &str>(Some(Vec::new())), &notifier);
        assert_eq!(completion, Completion::Stale);
        assert_eq!(list.matches(), [new_match(2)]);
    }

    #[test]
    fn test_complete_stale_after_deselect() {
        let mut list = MatchList::new();

        let ticket = list.select(Some(TournamentId::from(1))).unwrap();
        list.select(None);

        let completion = list.complete(
            ticket,
            Ok::<_, &str>(Some(vec![new_match(1)])),
            &Recorder::default(),
        );
        assert_eq!(completion, Completion::Stale);
        assert!(!list.is_loading());
        assert!(list.matches().is_empty());
    }

    #[test]
    fn test_export() {
        let list = loaded(42, vec![new_match(1), new_match(2)]);
        let notifier = Recorder::default();
        let files = Files::default();

        list.export(&files, &notifier).unwrap();

        let files = files.0.into_inner();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].file_name, "tournament_42_matches.csv");
        assert_eq!(files[0].content.lines().count(), 3);

        assert_eq!(
            notifier.take(),
            [Notification::success(notify::EXPORT_SUCCEEDED)]
        );
    }

    #[test]
    fn test_export_no_tournament() {
        let list = MatchList::new();
        let notifier = Recorder::default();
        let files = Files::default();

        let err = list.export(&files, &notifier).unwrap_err();
        assert!(matches!(err, ExportError::NoTournament));

        assert!(files.0.into_inner().is_empty());
        assert_eq!(notifier.count(Level::Error), 1);
        assert_eq!(notifier.count(Level::Success), 0);
    }

    #[test]
    fn test_export_after_deselect() {
        let mut list = loaded(42, vec![new_match(1), new_match(2)]);
        list.select(None);
        assert_eq!(list.tournament_id(), None);
        assert_eq!(list.matches().len(), 2);

        let notifier = Recorder::default();
        let files = Files::default();
        list.export(&files, &notifier).unwrap();

        let files = files.0.into_inner();
        assert_eq!(files[0].file_name, "tournament_42_matches.csv");
        assert_eq!(files[0].content.lines().count(), 3);
        assert_eq!(notifier.count(Level::Success), 1);
    }

    #[test]
    fn test_export_string_id() {
        let mut list = MatchList::new();
        let ticket = list.select(Some(TournamentId::from("cup-2024"))).unwrap();
        list.complete(
            ticket,
            Ok::<_, &str>(Some(vec![new_match(1)])),
            &Recorder::default(),
        );

        let files = Files::default();
        list.export(&files, &Recorder::default()).unwrap();
        assert_eq!(
            files.0.into_inner()[0].file_name,
            "tournament_cup-2024_matches.csv"
        );

        assert_eq!(list.select(Some(TournamentId::from(""))), None);
        assert_eq!(list.tournament_id(), None);
    }

    #[test]
    fn test_export_download_failed() {
        let list = loaded(42, vec![new_match(1)]);
        let notifier = Recorder::default();

        let err = list.export(Broken, &notifier).unwrap_err();
        assert!(matches!(err, ExportError::Download(_)));

        assert_eq!(
            notifier.take(),
            [Notification::error(notify::EXPORT_FAILED)]
        );
    }

    #[test]
    fn test_load_and_export() {
        let response = r#"{
            "matches": [{
                "match_id": 1,
                "round_id": 1,
                "team1_players": "A",
                "team2_players": "B",
                "match_result": "A won",
                "outcome": null,
                "match_status": { "status": "completed" }
            }]
        }"#;

        #[derive(serde::Deserialize)]
        struct Response {
            matches: Vec<Match>,
        }

        let response: Response = serde_json::from_str(response).unwrap();

        let list = loaded(42, response.matches);
        assert_eq!(list.matches().len(), 1);

        let m = &list.matches()[0];
        let row = [
            m.match_id.to_string(),
            m.round_label(),
            m.pool_label(),
            m.team1_players.to_string(),
            m.team2_players.to_string(),
            m.result().to_string(),
            m.status().to_string(),
        ];
        assert_eq!(row.join(" | "), "1 | Round 1 | - | A | B | A won | completed");

        let files = Files::default();
        list.export(&files, &Recorder::default()).unwrap();

        let files = files.0.into_inner();
        assert_eq!(
            files[0].content,
            "\"Match ID\",\"Round\",\"Pool\",\"Team 1\",\"Team 2\",\"Result\",\"Outcome\",\"Status\"\n\
             \"1\",\"Round 1\",\"-\",\"A\",\"B\",\"A won\",\"normal\",\"completed\""
        );
    }
}
