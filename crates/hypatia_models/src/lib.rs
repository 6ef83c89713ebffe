//! LLM provider integrations for Hypatia.
//!
//! Currently a single provider, Google Gemini, wrapped behind the
//! [`hypatia_interface::TextModel`] driver trait so the pipeline never sees
//! the SDK directly.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod gemini;

pub use gemini::GeminiClient;
