//! Shared types for the notifier seam.

use serde::{Deserialize, Serialize};

/// Severity of a system alert.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "lowercase")]
pub enum AlertLevel {
    /// Informational event
    Info,
    /// Something unusual but recoverable
    Warning,
    /// A failure worth paging about
    Error,
    /// A positive milestone
    Success,
}

/// Snapshot of notifier configuration, returned by the status endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotifierStatus {
    /// Token, chat id and client are all present
    pub configured: bool,
    /// Bot token present in the environment
    pub bot_token_exists: bool,
    /// Destination chat id present in the environment
    pub chat_id_exists: bool,
    /// HTTP client constructed successfully
    pub bot_instance_exists: bool,
}

impl NotifierStatus {
    /// Status for a notifier with nothing configured.
    pub fn unconfigured() -> Self {
        Self {
            configured: false,
            bot_token_exists: false,
            chat_id_exists: false,
            bot_instance_exists: false,
        }
    }
}
