//! The generation-and-repair pipeline.
//!
//! Turns a free-text mathematical concept into a guaranteed-syntactically-
//! valid Manim script: prompt construction, a bounded-retry generation loop
//! over a [`hypatia_interface::TextModel`] driver, textual post-processing,
//! single-shot syntax repair, and a fallback catalog of hand-written
//! template scripts.
//!
//! The pipeline is strictly linear per request. The only loops are the
//! three-attempt retry inside generation and the single length-guard
//! regeneration; every other stage runs exactly once.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod fallback;
mod generator;
pub mod postprocess;
pub mod prompt;
mod retry;
mod templates;
pub mod validate;

pub use fallback::error_fallback;
pub use generator::ScriptGenerator;
pub use retry::{AttemptFailure, NextAction, RetryPolicy};
pub use templates::{Topic, select_template};
pub use validate::{Validated, Verdict};
