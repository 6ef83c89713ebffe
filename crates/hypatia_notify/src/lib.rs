//! Telegram operational notifications.
//!
//! Best-effort delivery of generation lifecycle events to a Telegram chat.
//! Failures here are logged and swallowed; the main request flow never
//! depends on a notification landing.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod events;
mod telegram;

pub use events::{
    alert_message, daily_stats_message, error_message, start_message, success_message,
};
pub use telegram::TelegramNotifier;
