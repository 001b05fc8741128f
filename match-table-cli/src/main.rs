mod matches;
mod output;

use clap::{Parser, Subcommand};
use match_table_api::Client;
use match_table_core::TournamentId;

use std::path::PathBuf;
use std::process;

#[derive(Debug, Parser)]
#[clap(version, about)]
pub struct Args {
    /// The base url of the fixtures api.
    #[clap(short, long, env = "MT_API_URL")]
    uri: String,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Prints the matches of a tournament.
    List { tournament_id: TournamentId },
    /// Exports the matches of a tournament as CSV.
    Export {
        tournament_id: TournamentId,
        /// The directory to write the CSV file to.
        #[clap(short, long, default_value = ".")]
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() {
    pretty_env_logger::init();

    let args = Args::parse();

    log::debug!("URI: {}", args.uri);

    let client = Client::new(&args.uri);

    if let Err(err) = args.command.run(&client).await {
        eprintln!("{}", err);
        process::exit(1);
    }
}
