//! User facing notifications.
//!
//! The match table never reports errors to its parent. Failures are logged and surfaced to the
//! user through a [`Notifier`] instead.
use std::fmt::{self, Display, Formatter};
use std::rc::Rc;

use serde::{Deserialize, Serialize};

pub const LOAD_FAILED: &str = "Failed to load matches";
pub const EXPORT_SUCCEEDED: &str = "CSV file downloaded successfully";
pub const EXPORT_FAILED: &str = "Failed to export matches to CSV";

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Success,
    Error,
}

impl Display for Level {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(match self {
            Self::Success => "success",
            Self::Error => "error",
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Notification {
    pub level: Level,
    pub message: String,
}

impl Notification {
    pub fn success<T>(message: T) -> Self
    where
        T: ToString,
    {
        Self {
            level: Level::Success,
            message: message.to_string(),
        }
    }

    pub fn error<T>(message: T) -> Self
    where
        T: ToString,
    {
        Self {
            level: Level::Error,
            message: message.to_string(),
        }
    }
}

/// A fire-and-forget sink for [`Notification`]s.
pub trait Notifier {
    fn notify(&self, notification: Notification);

    #[inline]
    fn success(&self, message: &str) {
        self.notify(Notification::success(message));
    }

    #[inline]
    fn error(&self, message: &str) {
        self.notify(Notification::error(message));
    }
}

impl<N> Notifier for &N
where
    N: Notifier + ?Sized,
{
    #[inline]
    fn notify(&self, notification: Notification) {
        (**self).notify(notification);
    }
}

impl<N> Notifier for Rc<N>
where
    N: Notifier + ?Sized,
{
    #[inline]
    fn notify(&self, notification: Notification) {
        (**self).notify(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::{Level, Notification, Notifier};
    use crate::test_utils::Recorder;

    #[test]
    fn test_notifier_helpers() {
        let recorder = Recorder::default();
        recorder.success("ok");
        (&recorder).error("failed");

        assert_eq!(
            recorder.take(),
            [
                Notification {
                    level: Level::Success,
                    message: String::from("ok"),
                },
                Notification {
                    level: Level::Error,
                    message: String::from("failed"),
                },
            ]
        );
    }
}
