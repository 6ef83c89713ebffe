//! Orchestration of the generation pipeline.
//!
//! One [`ScriptGenerator`] call walks a concept through prompt construction,
//! the bounded-retry generation loop, post-processing, the single-shot
//! length guard, and validation. The returned script always compiles.

use crate::retry::{AttemptFailure, NextAction, RetryPolicy};
use crate::validate::Validated;
use crate::{postprocess, prompt, validate};
use hypatia_core::ModelRequest;
use hypatia_error::{GenerationError, GenerationErrorKind, HypatiaResult};
use hypatia_interface::TextModel;
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

/// Fixed output-length ceiling for animation scripts.
const MAX_OUTPUT_TOKENS: u32 = 8192;

/// Below this many characters a candidate is implausibly short and triggers
/// the length-guard regeneration.
const MIN_SUBSTANTIAL_CHARS: usize = 1000;

/// Sampling for the chat endpoint.
const CHAT_TEMPERATURE: f32 = 0.7;
const CHAT_MAX_TOKENS: u32 = 2048;

/// Canned replies when the tutor model returns nothing usable.
const CHAT_EMPTY_APOLOGY: &str = "I apologize, but I'm having trouble generating a response \
     right now. Please try asking your question again.";

/// Drives a [`TextModel`] through the full concept-to-script pipeline.
pub struct ScriptGenerator {
    driver: Arc<dyn TextModel>,
    policy: RetryPolicy,
}

impl std::fmt::Debug for ScriptGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScriptGenerator")
            .field("provider", &self.driver.provider_name())
            .field("policy", &self.policy)
            .finish()
    }
}

impl ScriptGenerator {
    /// Build a generator with the default retry policy.
    pub fn new(driver: Arc<dyn TextModel>) -> Self {
        Self {
            driver,
            policy: RetryPolicy::default(),
        }
    }

    /// Build a generator with a custom retry policy.
    pub fn with_policy(driver: Arc<dyn TextModel>, policy: RetryPolicy) -> Self {
        Self { driver, policy }
    }

    /// Generate a guaranteed-compiling animation script for a concept.
    #[instrument(skip(self), fields(provider = self.driver.provider_name()))]
    pub async fn generate_script(&self, concept: &str) -> HypatiaResult<Validated> {
        let base_prompt = prompt::animation_prompt(concept);
        debug!(prompt_len = base_prompt.len(), "built animation prompt");

        let raw = self.generate_with_retry(concept, &base_prompt).await?;
        let mut code = postprocess::normalize(&raw);

        if code.len() < MIN_SUBSTANTIAL_CHARS {
            info!(
                len = code.len(),
                "candidate implausibly short, regenerating with amplified prompt"
            );
            let amplified = prompt::amplified_prompt(&base_prompt);
            let raw = self.generate_with_retry(concept, &amplified).await?;
            code = postprocess::normalize(&raw);
        }

        let validated = validate::check_and_repair(&code, concept);
        info!(
            len = validated.source().len(),
            verdict = ?validated.verdict(),
            "script ready"
        );
        Ok(validated)
    }

    /// The bounded-retry generation loop: one pass of component 4.2.
    ///
    /// Exactly one driver call per attempt; the policy owns all routing.
    async fn generate_with_retry(&self, concept: &str, prompt: &str) -> HypatiaResult<String> {
        let attempts = *self.policy.max_attempts();
        let mut current_prompt = prompt.to_string();

        for attempt in 0..attempts {
            debug!(attempt = attempt + 1, total = attempts, "generation attempt");
            let req = ModelRequest::with_sampling(
                current_prompt.clone(),
                self.policy.temperature(attempt),
                MAX_OUTPUT_TOKENS,
            );

            let failure = match self.driver.generate(&req).await {
                Ok(resp) if resp.is_truncated() => AttemptFailure::Truncated,
                Ok(resp) if resp.is_empty_text() => AttemptFailure::EmptyText,
                Ok(resp) => {
                    debug!(len = resp.text().len(), "received response");
                    return Ok(resp.text().clone());
                }
                Err(e) => AttemptFailure::NoResponse(e.to_string()),
            };

            warn!(attempt = attempt + 1, %failure, "generation attempt failed");

            match self.policy.next_action(attempt, &failure) {
                NextAction::Retry => {}
                NextAction::RetrySimplified => {
                    current_prompt = prompt::simplified_prompt(concept);
                }
                NextAction::Fail => {
                    let kind = match failure {
                        AttemptFailure::Truncated => GenerationErrorKind::Truncated { attempts },
                        other => GenerationErrorKind::Exhausted {
                            attempts,
                            last_failure: other.to_string(),
                        },
                    };
                    return Err(GenerationError::new(kind).into());
                }
            }
        }

        // max_attempts is at least 1, so the loop always returns first
        Err(GenerationError::new(GenerationErrorKind::Exhausted {
            attempts,
            last_failure: "no attempts were made".to_string(),
        })
        .into())
    }

    /// Tutoring answer for the chat endpoint. An empty model reply yields an
    /// apology string rather than an error; transport failures propagate.
    #[instrument(skip(self))]
    pub async fn chat_response(&self, message: &str) -> HypatiaResult<String> {
        let req = ModelRequest::with_sampling(
            prompt::tutor_prompt(message),
            CHAT_TEMPERATURE,
            CHAT_MAX_TOKENS,
        );
        match self.driver.generate(&req).await {
            Ok(resp) if resp.is_empty_text() => Ok(CHAT_EMPTY_APOLOGY.to_string()),
            Ok(resp) => Ok(resp.text().trim().to_string()),
            Err(e) => {
                error!(error = %e, "chat generation failed");
                Err(e)
            }
        }
    }
}
