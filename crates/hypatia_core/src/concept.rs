//! Input sanitizing and the request-scoped generation record.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Collapse all whitespace runs (including newlines) into single spaces.
///
/// # Examples
///
/// ```
/// use hypatia_core::sanitize_input;
///
/// assert_eq!(sanitize_input("  the\n  chain   rule "), "the chain rule");
/// ```
pub fn sanitize_input(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Sanitize text for use in a title: whitespace collapse plus quote stripping.
///
/// # Examples
///
/// ```
/// use hypatia_core::sanitize_title;
///
/// assert_eq!(sanitize_title("\"Euler's\n identity\""), "Eulers identity");
/// ```
pub fn sanitize_title(text: &str) -> String {
    sanitize_input(text)
        .replace('"', "")
        .replace('\'', "")
        .trim()
        .to_string()
}

/// A single incoming generation request: the sanitized concept plus the
/// address it came from. Immutable for the lifetime of the request.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Free-text topic, already sanitized
    concept: String,
    /// Remote address of the caller, used in notifications
    requester_addr: String,
}

impl GenerationRequest {
    /// Build a request, sanitizing the concept on the way in.
    pub fn new(concept: impl AsRef<str>, requester_addr: impl Into<String>) -> Self {
        Self {
            concept: sanitize_input(concept.as_ref()),
            requester_addr: requester_addr.into(),
        }
    }
}
