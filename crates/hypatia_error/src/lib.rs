//! Error types for the Hypatia animation service.
//!
//! This crate provides the foundation error types used throughout the Hypatia
//! workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use hypatia_error::{HypatiaResult, ConfigError};
//!
//! fn load_setting() -> HypatiaResult<String> {
//!     Err(ConfigError::new("PORT is not a number"))?
//! }
//!
//! match load_setting() {
//!     Ok(v) => println!("Got: {}", v),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod docs;
mod error;
mod gemini;
mod generation;
mod notify;
mod render;
mod server;

pub use config::ConfigError;
pub use docs::{DocsError, DocsErrorKind};
pub use error::{HypatiaError, HypatiaErrorKind, HypatiaResult};
pub use gemini::{GeminiError, GeminiErrorKind};
pub use generation::{GenerationError, GenerationErrorKind};
pub use notify::{NotifyError, NotifyErrorKind};
pub use render::{RenderError, RenderErrorKind};
pub use server::{ServerError, ServerErrorKind};
