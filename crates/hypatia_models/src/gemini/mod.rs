//! Google Gemini provider.

mod client;

pub use client::GeminiClient;

/// Result alias for Gemini-internal fallible operations.
pub(crate) type GeminiResult<T> = std::result::Result<T, hypatia_error::GeminiError>;
