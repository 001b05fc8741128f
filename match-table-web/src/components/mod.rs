pub mod loader;
pub mod match_table;
pub mod providers;
pub mod toasts;

pub use loader::Loader;
pub use match_table::{MatchTable, Props as MatchTableProps};
pub use toasts::Toasts;
