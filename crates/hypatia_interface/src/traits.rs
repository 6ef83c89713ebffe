//! Trait definitions for the model driver and the notifier.

use crate::{AlertLevel, NotifierStatus};
use async_trait::async_trait;
use hypatia_core::{ModelRequest, ModelResponse};
use hypatia_error::HypatiaResult;

/// Core trait every text-generation backend must implement.
///
/// One call corresponds to exactly one round trip to the provider; retry
/// policy belongs to the caller, never to the driver.
#[async_trait]
pub trait TextModel: Send + Sync {
    /// Generate model output for a single prompt.
    async fn generate(&self, req: &ModelRequest) -> HypatiaResult<ModelResponse>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;

    /// Default model identifier used when the request does not override it.
    fn model_name(&self) -> &str;
}

/// Operational notification channel.
///
/// Delivery is best-effort: implementations swallow transport failures, log
/// them, and report success as a boolean. Nothing upstream may fail because
/// a notification did.
#[async_trait]
pub trait Notify: Send + Sync {
    /// A generation request entered the pipeline.
    async fn generation_started(&self, concept: &str, requester: &str) -> bool;

    /// A video was rendered and moved into served storage.
    async fn generation_succeeded(
        &self,
        concept: &str,
        duration_secs: f64,
        file_size_mb: f64,
        requester: &str,
    ) -> bool;

    /// The pipeline or the renderer failed.
    async fn generation_failed(&self, concept: &str, details: &str, requester: &str) -> bool;

    /// Free-form operational alert.
    async fn system_alert(&self, level: AlertLevel, message: &str) -> bool;

    /// Current channel configuration, for the status endpoint.
    fn status(&self) -> NotifierStatus;
}
