use match_table_api::Client;
use match_table_core::{Completion, ExportError, Match, MatchList, MatchResult, TournamentId};
use thiserror::Error;

use crate::output::{FileDownload, TerminalNotifier};
use crate::Command;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid tournament id: {0}")]
    InvalidTournament(TournamentId),
    #[error("failed to load matches of tournament {0}")]
    Load(TournamentId),
    #[error("failed to export matches: {0}")]
    Export(#[from] ExportError),
}

impl Command {
    pub async fn run(&self, client: &Client) -> Result<(), Error> {
        match self {
            Self::List { tournament_id } => {
                let list = load(client, tournament_id).await?;

                println!("ID | Round | Pool | Team 1 | Team 2 | Result | Status");
                for m in list.matches() {
                    println!("{}", format_row(m));
                }
            }
            Self::Export {
                tournament_id,
                output,
            } => {
                let list = load(client, tournament_id).await?;

                list.export(FileDownload::new(output), &TerminalNotifier)?;
            }
        }

        Ok(())
    }
}

async fn load(client: &Client, tournament_id: &TournamentId) -> Result<MatchList, Error> {
    let mut list = MatchList::new();

    let ticket = list
        .select(Some(tournament_id.clone()))
        .ok_or_else(|| Error::InvalidTournament(tournament_id.clone()))?;

    let result = client.fixtures().list(ticket.tournament_id()).await;

    match list.complete(ticket, result, &TerminalNotifier) {
        Completion::Failed => Err(Error::Load(tournament_id.clone())),
        _ => Ok(list),
    }
}

fn format_row(m: &Match) -> String {
    let result = match m.result() {
        MatchResult::Walkover { winner } => format!("{} (Walkover)", winner),
        MatchResult::Played(result) => result.to_string(),
    };

    format!(
        "{} | {} | {} | {} | {} | {} | {}",
        m.match_id,
        m.round_label(),
        m.pool_label(),
        m.team1_players,
        m.team2_players,
        result,
        m.status()
    )
}
