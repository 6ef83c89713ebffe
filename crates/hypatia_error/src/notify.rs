//! Errors from the Telegram notifier.
//!
//! These never propagate past the notifier boundary; the notifier logs them
//! and reports delivery as a boolean.

/// Error kinds for notification delivery.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum NotifyErrorKind {
    /// Bot token or chat id missing from the environment
    #[display("Telegram bot not configured")]
    NotConfigured,
    /// HTTP transport failure reaching the Bot API
    #[display("Telegram request failed: {}", _0)]
    Http(String),
    /// Bot API returned ok=false
    #[display("Telegram API rejected the message: {}", _0)]
    Api(String),
}

/// Notification error with source location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Notify Error: {} at line {} in {}", kind, line, file)]
pub struct NotifyError {
    /// The kind of error that occurred
    pub kind: NotifyErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl NotifyError {
    /// Create a new NotifyError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: NotifyErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
