//! Manim renderer invocation and per-request workspace lifecycle.
//!
//! Each generation request gets its own workspace directory holding the
//! candidate script and the renderer's media tree. The workspace is removed
//! on every exit path, success or failure; only the final video survives,
//! moved into permanent served storage before teardown.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod invoke;
mod workspace;

pub use config::{Quality, RendererConfig, RendererConfigBuilder};
pub use invoke::Renderer;
pub use workspace::RenderWorkspace;
