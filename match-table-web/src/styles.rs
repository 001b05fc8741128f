use match_table_core::StatusStyle;
use serde::{Deserialize, Serialize};

/// The css classes applied to the elements of the match table.
///
/// Every field can be overwritten from the config. Missing fields use the default classes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassNames {
    pub container: String,
    pub loading: String,
    pub header: String,
    pub export_button: String,
    pub table_wrapper: String,
    pub table: String,
    pub walkover_badge: String,
    /// Applied to every status label, together with one of the status classes below.
    pub status: String,
    pub scheduled: String,
    pub in_progress: String,
    pub completed: String,
    pub cancelled: String,
    pub postponed: String,
    /// Used for all statuses without a dedicated class.
    pub unknown: String,
}

impl ClassNames {
    /// Returns the class for a status with the given `style`.
    pub fn status_class(&self, style: StatusStyle) -> &str {
        match style {
            StatusStyle::Scheduled => &self.scheduled,
            StatusStyle::InProgress => &self.in_progress,
            StatusStyle::Completed => &self.completed,
            StatusStyle::Cancelled => &self.cancelled,
            StatusStyle::Postponed => &self.postponed,
            StatusStyle::Unknown => &self.unknown,
        }
    }
}

impl Default for ClassNames {
    fn default() -> Self {
        let status = |style: StatusStyle| format!("mt-status-{}", style.key().replace('_', "-"));

        Self {
            container: String::from("mt-container"),
            loading: String::from("mt-loading"),
            header: String::from("mt-header"),
            export_button: String::from("mt-export-button"),
            table_wrapper: String::from("mt-table-wrapper"),
            table: String::from("mt-table"),
            walkover_badge: String::from("mt-walkover"),
            status: String::from("mt-status"),
            scheduled: status(StatusStyle::Scheduled),
            in_progress: status(StatusStyle::InProgress),
            completed: status(StatusStyle::Completed),
            cancelled: status(StatusStyle::Cancelled),
            postponed: status(StatusStyle::Postponed),
            unknown: status(StatusStyle::Unknown),
        }
    }
}
