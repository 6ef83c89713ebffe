//! Renderer configuration.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Render quality preset, mapped to the Manim CLI flag.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    Default,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    /// 480p15, fast iteration
    Low,
    /// 720p30, the service default
    #[default]
    Medium,
    /// 1080p60
    High,
}

impl Quality {
    /// The Manim CLI flag for this preset.
    pub fn flag(&self) -> &'static str {
        match self {
            Quality::Low => "-ql",
            Quality::Medium => "-qm",
            Quality::High => "-qh",
        }
    }
}

/// Configuration for the renderer subprocess.
///
/// # Examples
///
/// ```
/// use hypatia_render::RendererConfigBuilder;
///
/// let config = RendererConfigBuilder::default()
///     .timeout_secs(600u64)
///     .build()
///     .unwrap();
/// assert_eq!(config.program(), "python3");
/// ```
#[derive(Debug, Clone, PartialEq, Getters, Builder, Serialize, Deserialize)]
#[builder(default)]
pub struct RendererConfig {
    /// Interpreter that hosts the `manim` module
    #[serde(default = "default_program")]
    program: String,
    /// Quality preset
    #[serde(default)]
    quality: Quality,
    /// Subprocess timeout in seconds; generous because complex scenes
    /// legitimately take a long time
    #[serde(default = "default_timeout_secs")]
    timeout_secs: u64,
}

fn default_program() -> String {
    "python3".to_string()
}

fn default_timeout_secs() -> u64 {
    10_000
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            quality: Quality::default(),
            timeout_secs: default_timeout_secs(),
        }
    }
}
