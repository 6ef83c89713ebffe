//! Core data types for the Hypatia animation service.
//!
//! This crate provides the foundation data types shared across the Hypatia
//! workspace: input sanitizing, model request/response shapes, scene naming,
//! and the render artifact record.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod artifact;
mod concept;
mod request;
mod scene;

pub use artifact::RenderArtifact;
pub use concept::{GenerationRequest, sanitize_input, sanitize_title};
pub use request::{
    FinishReason, ModelRequest, ModelRequestBuilder, ModelRequestBuilderError, ModelResponse,
};
pub use scene::SceneName;
