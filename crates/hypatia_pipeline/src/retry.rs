//! The bounded-retry contract for the generation loop.
//!
//! An explicit policy object rather than inline branching, so the retry
//! contract (attempt count, temperature schedule, failure routing) is
//! testable on its own.

use derive_getters::Getters;

/// Classification of one failed generation attempt.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum AttemptFailure {
    /// The provider returned no usable response object
    #[display("No response object from model: {}", _0)]
    NoResponse(String),
    /// Output stopped at the token ceiling
    #[display("Model output truncated at the token limit")]
    Truncated,
    /// A response arrived but its text was empty
    #[display("Empty response text from model")]
    EmptyText,
}

/// What the loop does after a failed attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextAction {
    /// Try again with the same prompt
    Retry,
    /// Try again with the shortened prompt variant
    RetrySimplified,
    /// Give up and surface the failure
    Fail,
}

/// Retry schedule: attempt count and temperature escalation.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct RetryPolicy {
    /// Total attempts before giving up
    max_attempts: usize,
    /// Temperature of the first attempt
    base_temperature: f32,
    /// Temperature increase per subsequent attempt
    temperature_step: f32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_temperature: 0.4,
            temperature_step: 0.1,
        }
    }
}

impl RetryPolicy {
    /// Build a custom policy.
    pub fn new(max_attempts: usize, base_temperature: f32, temperature_step: f32) -> Self {
        Self {
            max_attempts,
            base_temperature,
            temperature_step,
        }
    }

    /// Sampling temperature for a zero-based attempt index.
    pub fn temperature(&self, attempt: usize) -> f32 {
        self.base_temperature + attempt as f32 * self.temperature_step
    }

    /// True when `attempt` is the final one.
    pub fn is_last(&self, attempt: usize) -> bool {
        attempt + 1 >= self.max_attempts
    }

    /// Route a failure to the next action. Every failure class is retryable
    /// except on the final attempt; truncation swaps in the shortened prompt.
    pub fn next_action(&self, attempt: usize, failure: &AttemptFailure) -> NextAction {
        if self.is_last(attempt) {
            return NextAction::Fail;
        }
        match failure {
            AttemptFailure::Truncated => NextAction::RetrySimplified,
            AttemptFailure::NoResponse(_) | AttemptFailure::EmptyText => NextAction::Retry,
        }
    }
}
