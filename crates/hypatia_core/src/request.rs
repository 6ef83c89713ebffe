//! Request and response types for model generation calls.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Why the model stopped producing output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum FinishReason {
    /// Natural end of output
    Stop,
    /// Output hit the configured token ceiling
    MaxTokens,
    /// Provider-side content filter intervened
    ContentFilter,
    /// Anything else the provider reports
    Other,
}

/// A single text-generation request.
///
/// # Examples
///
/// ```
/// use hypatia_core::ModelRequestBuilder;
///
/// let req = ModelRequestBuilder::default()
///     .prompt("Explain the unit circle")
///     .temperature(0.4)
///     .max_tokens(8192u32)
///     .build()
///     .unwrap();
///
/// assert_eq!(req.temperature(), &Some(0.4));
/// ```
#[derive(Debug, Clone, PartialEq, Getters, Builder, Serialize, Deserialize)]
pub struct ModelRequest {
    /// The full prompt text
    #[builder(setter(into))]
    prompt: String,
    /// Sampling temperature (0.0 to 1.0)
    #[builder(default, setter(strip_option))]
    temperature: Option<f32>,
    /// Output-length ceiling in tokens
    #[builder(default, setter(strip_option))]
    max_tokens: Option<u32>,
    /// Model identifier override
    #[builder(default, setter(strip_option, into))]
    model: Option<String>,
}

impl ModelRequest {
    /// A plain request with no sampling overrides.
    pub fn text(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            temperature: None,
            max_tokens: None,
            model: None,
        }
    }

    /// A request with explicit sampling parameters.
    pub fn with_sampling(prompt: impl Into<String>, temperature: f32, max_tokens: u32) -> Self {
        Self {
            prompt: prompt.into(),
            temperature: Some(temperature),
            max_tokens: Some(max_tokens),
            model: None,
        }
    }
}

/// The model's answer to a [`ModelRequest`].
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
pub struct ModelResponse {
    /// Generated text, possibly empty
    text: String,
    /// Finish reason when the provider reports one
    finish: Option<FinishReason>,
}

impl ModelResponse {
    /// Build a response from its parts.
    pub fn new(text: impl Into<String>, finish: Option<FinishReason>) -> Self {
        Self {
            text: text.into(),
            finish,
        }
    }

    /// True when the output hit the token ceiling.
    pub fn is_truncated(&self) -> bool {
        self.finish == Some(FinishReason::MaxTokens)
    }

    /// True when there is no usable text.
    pub fn is_empty_text(&self) -> bool {
        self.text.trim().is_empty()
    }
}
