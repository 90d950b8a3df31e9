//! Toast notifications surfaced through the host shell.

use serde::Serialize;

/// Notification severity, lowercase on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Success,
    Warning,
    Info,
}

/// Single notification event dispatched to the host shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub variant: Severity,
}

impl Notification {
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        variant: Severity,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            variant,
        }
    }

    /// Error toast with the standard "Error" title.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new("Error", message, Severity::Error)
    }
}

/// Host shell collaborator that displays notifications.
///
/// Stateless pass-through: no retry, no batching, repeated identical events
/// are all dispatched.
pub trait NotificationSink {
    fn notify(&self, notification: Notification);
}
