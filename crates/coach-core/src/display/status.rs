//! Status lines for operation feedback.

use std::fmt;

use crate::notify::{Level, Notification};

/// A one-line status message.
pub struct OperationStatus {
    pub message: String,
    pub level: Level,
}

impl OperationStatus {
    pub fn success(message: String) -> Self {
        Self {
            message,
            level: Level::Success,
        }
    }

    pub fn failure(message: String) -> Self {
        Self {
            message,
            level: Level::Error,
        }
    }

    pub fn is_success(&self) -> bool {
        self.level != Level::Error
    }
}

impl From<&Notification> for OperationStatus {
    fn from(notification: &Notification) -> Self {
        Self {
            message: notification.message.clone(),
            level: notification.level,
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.level {
            Level::Success => "Success:",
            Level::Error => "Error:",
            Level::Loading => "Working:",
            Level::Info => "Info:",
        };
        writeln!(f, "{prefix} {}", self.message)
    }
}
