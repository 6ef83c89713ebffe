//! HTTP layer for the Hypatia animation service.
//!
//! Routes, handlers, configuration and application state. The binary entry
//! point lives in `main.rs`; everything here is also reachable from tests.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod handlers;
pub mod routes;
pub mod state;

pub use config::ServiceConfig;
pub use routes::router;
pub use state::AppState;
