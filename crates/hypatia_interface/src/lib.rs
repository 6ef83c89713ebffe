//! Seam traits between the Hypatia pipeline and its collaborators.
//!
//! The pipeline and the HTTP layer talk to the language model and the
//! notification channel exclusively through these traits, so tests can swap
//! in scripted doubles and provider SDKs stay confined to their own crates.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;
mod types;

pub use traits::{Notify, TextModel};
pub use types::{AlertLevel, NotifierStatus};
