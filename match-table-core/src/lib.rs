//! # match-table-core
//!
//! This crate contains the target independent parts of the match table: the data model of the
//! fixtures endpoint, the formatting rules shared by the html table and the CSV export, and the
//! state of the match loader.
//!
//! Important types:
//! - [`Match`]: A single fixture as returned by the server.
//! - [`Value`]: An untrusted scalar field of a [`Match`].
//! - [`MatchList`]: The loaded matches of the selected tournament and the loading state.
//! - [`CsvFile`]: A complete CSV export ready to be handed to a [`Download`].
//! - [`Notifier`]: The sink for user facing notifications.
//!
pub mod export;
pub mod id;
pub mod model;
pub mod notify;
pub mod state;

mod value;

pub use export::{CsvFile, Download, ExportError};
pub use id::TournamentId;
pub use model::{Match, MatchResult, MatchStatus, Outcome, Status, StatusStyle};
pub use notify::{Notification, Notifier};
pub use state::{Completion, MatchList, Ticket};
pub use value::Value;
