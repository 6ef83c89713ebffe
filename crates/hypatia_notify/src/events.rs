//! HTML message bodies for notification events.
//!
//! Timestamps are passed in so formatting stays deterministic under test.

use chrono::{DateTime, Local};
use hypatia_interface::AlertLevel;

/// Longest error excerpt included in a failure notification.
const ERROR_DETAIL_CHARS: usize = 200;

fn stamp(when: DateTime<Local>) -> String {
    when.format("%Y-%m-%d %H:%M:%S").to_string()
}

fn requester_line(requester: &str) -> String {
    if requester.is_empty() {
        "Unknown".to_string()
    } else {
        format!("from {requester}")
    }
}

/// Body for the generation-started event.
pub fn start_message(concept: &str, requester: &str, when: DateTime<Local>) -> String {
    format!(
        "🎬 <b>Video Generation Started</b>\n\n\
         📝 <b>Concept:</b> {concept}\n\
         🕒 <b>Time:</b> {}\n\
         👤 <b>User:</b> {}\n\
         🚀 <b>Status:</b> Processing...\n\n\
         <i>I'll notify you when it's complete!</i>",
        stamp(when),
        requester_line(requester)
    )
}

/// Body for the generation-succeeded event.
pub fn success_message(
    concept: &str,
    duration_secs: f64,
    file_size_mb: f64,
    requester: &str,
    when: DateTime<Local>,
) -> String {
    format!(
        "✅ <b>Video Generation Successful!</b>\n\n\
         📝 <b>Concept:</b> {concept}\n\
         🕒 <b>Completed:</b> {}\n\
         👤 <b>User:</b> {}\n\
         ⚡ <b>Status:</b> Ready for download\n\
         ⏱️ <b>Generation Time:</b> {duration_secs:.1} seconds\n\
         📊 <b>File Size:</b> {file_size_mb:.1} MB\n\n\
         🎉 <i>Video is now available!</i>",
        stamp(when),
        requester_line(requester)
    )
}

/// Body for the generation-failed event. Details are truncated.
pub fn error_message(
    concept: &str,
    details: &str,
    requester: &str,
    when: DateTime<Local>,
) -> String {
    let mut excerpt: String = details.chars().take(ERROR_DETAIL_CHARS).collect();
    if details.chars().count() > ERROR_DETAIL_CHARS {
        excerpt.push_str("...");
    }
    format!(
        "❌ <b>Video Generation Failed</b>\n\n\
         📝 <b>Concept:</b> {concept}\n\
         🕒 <b>Failed at:</b> {}\n\
         👤 <b>User:</b> {}\n\
         💥 <b>Status:</b> Error occurred\n\
         🐛 <b>Error:</b> {excerpt}\n\n\
         🔧 <i>Please check the logs for more details.</i>",
        stamp(when),
        requester_line(requester)
    )
}

/// Body for a free-form system alert.
pub fn alert_message(level: AlertLevel, message: &str, when: DateTime<Local>) -> String {
    let emoji = match level {
        AlertLevel::Warning => "⚠️",
        AlertLevel::Error => "🚨",
        AlertLevel::Info => "ℹ️",
        AlertLevel::Success => "✅",
    };
    format!(
        "{emoji} <b>System Alert</b>\n\n\
         🏷️ <b>Type:</b> {}\n\
         🕒 <b>Time:</b> {}\n\
         📝 <b>Message:</b> {message}",
        level.to_string().to_uppercase(),
        stamp(when)
    )
}

/// Body for the daily statistics summary.
pub fn daily_stats_message(
    total_videos: u64,
    successful_videos: u64,
    failed_videos: u64,
    when: DateTime<Local>,
) -> String {
    let success_rate = if total_videos > 0 {
        successful_videos as f64 / total_videos as f64 * 100.0
    } else {
        0.0
    };
    format!(
        "📊 <b>Daily Statistics - {}</b>\n\n\
         🎬 <b>Total Videos:</b> {total_videos}\n\
         ✅ <b>Successful:</b> {successful_videos}\n\
         ❌ <b>Failed:</b> {failed_videos}\n\
         📈 <b>Success Rate:</b> {success_rate:.1}%\n\n\
         <i>Keep up the great work!</i>",
        when.format("%Y-%m-%d")
    )
}
