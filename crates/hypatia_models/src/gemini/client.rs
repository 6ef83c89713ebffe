//! Google Gemini API driver.
//!
//! Wraps the `gemini-rust` SDK behind [`TextModel`]. The client keeps a pool
//! of per-model SDK handles, created lazily on first use, so requests that
//! override the model id do not pay reconstruction cost on every call.
//!
//! One `generate` call is exactly one round trip. Retry policy lives in the
//! pipeline's attempt loop, never here.

use async_trait::async_trait;
use std::collections::HashMap;
use std::env;
use std::sync::{Arc, Mutex};
use tracing::instrument;

use gemini_rust::{Gemini, client::Model};

use hypatia_core::{FinishReason, ModelRequest, ModelResponse};
use hypatia_error::{GeminiError, GeminiErrorKind, HypatiaResult};
use hypatia_interface::TextModel;

use super::GeminiResult;

/// Default model when the request does not override it.
const DEFAULT_MODEL: &str = "gemini-2.5-flash-lite";

/// Client for the Google Gemini API with per-model handle pooling.
pub struct GeminiClient {
    /// Cache of model-specific SDK handles
    clients: Arc<Mutex<HashMap<String, Gemini>>>,
    /// API key for creating new handles
    api_key: String,
    /// Default model name when the request carries none
    model_name: String,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let client_count = self.clients.lock().unwrap().len();
        f.debug_struct("GeminiClient")
            .field("model_name", &self.model_name)
            .field("cached_clients", &client_count)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Create a new client, reading the key from `GEMINI_API_KEY`.
    #[instrument(name = "gemini_client_new")]
    pub fn new() -> HypatiaResult<Self> {
        Self::new_internal().map_err(Into::into)
    }

    /// Create a new client with a non-default model.
    #[instrument(name = "gemini_client_with_model")]
    pub fn with_default_model(model_name: &str) -> HypatiaResult<Self> {
        let mut client = Self::new_internal()?;
        client.model_name = model_name.to_string();
        Ok(client)
    }

    fn new_internal() -> GeminiResult<Self> {
        let api_key = env::var("GEMINI_API_KEY")
            .map_err(|_| GeminiError::new(GeminiErrorKind::MissingApiKey))?;

        Ok(Self {
            clients: Arc::new(Mutex::new(HashMap::new())),
            api_key,
            model_name: DEFAULT_MODEL.to_string(),
        })
    }

    /// Convert a model name string to a gemini-rust Model enum variant.
    ///
    /// Unrecognized names fall through to `Model::Custom` with the `models/`
    /// prefix the API requires.
    fn model_name_to_enum(name: &str) -> Model {
        match name {
            "gemini-2.5-flash" => Model::Gemini25Flash,
            "gemini-2.5-flash-lite" => Model::Gemini25FlashLite,
            "gemini-2.5-pro" => Model::Gemini25Pro,
            other => {
                if other.starts_with("models/") {
                    Model::Custom(other.to_string())
                } else {
                    Model::Custom(format!("models/{}", other))
                }
            }
        }
    }

    /// Get or create the SDK handle for a model.
    fn client_for(&self, model_name: &str) -> GeminiResult<Gemini> {
        let mut clients = self.clients.lock().unwrap();
        if let Some(existing) = clients.get(model_name) {
            return Ok(existing.clone());
        }
        let model_enum = Self::model_name_to_enum(model_name);
        let client = Gemini::with_model(&self.api_key, model_enum)
            .map_err(|e| GeminiError::new(GeminiErrorKind::ClientCreation(e.to_string())))?;
        clients.insert(model_name.to_string(), client.clone());
        Ok(client)
    }

    async fn generate_internal(&self, req: &ModelRequest) -> GeminiResult<ModelResponse> {
        let model_name = req.model().as_deref().unwrap_or(&self.model_name);
        let client = self.client_for(model_name)?;

        let mut builder = client.generate_content().with_user_message(req.prompt());

        if let Some(temp) = req.temperature() {
            builder = builder.with_temperature(*temp);
        }
        if let Some(max_tok) = req.max_tokens() {
            builder = builder.with_max_output_tokens(*max_tok as i32);
        }

        let response = builder.execute().await.map_err(Self::parse_gemini_error)?;

        let finish = response
            .candidates
            .first()
            .and_then(|c| c.finish_reason.as_ref())
            .map(Self::map_finish_reason);

        Ok(ModelResponse::new(response.text(), finish))
    }

    fn map_finish_reason(reason: &gemini_rust::generation::model::FinishReason) -> FinishReason {
        use gemini_rust::generation::model::FinishReason as G;
        match reason {
            G::Stop => FinishReason::Stop,
            G::MaxTokens => FinishReason::MaxTokens,
            G::Safety
            | G::Recitation
            | G::Blocklist
            | G::ProhibitedContent
            | G::Spii
            | G::ImageSafety => FinishReason::ContentFilter,
            _ => FinishReason::Other,
        }
    }

    /// Parse gemini-rust errors to extract HTTP status codes.
    ///
    /// Converts generic API error strings into structured GeminiError with
    /// status codes when the message carries one.
    fn parse_gemini_error(err: impl std::fmt::Display) -> GeminiError {
        let err_msg = err.to_string();
        if let Some(status_code) = Self::extract_status_code(&err_msg) {
            GeminiError::new(GeminiErrorKind::HttpError {
                status_code,
                message: err_msg,
            })
        } else {
            GeminiError::new(GeminiErrorKind::ApiRequest(err_msg))
        }
    }

    /// Extract an HTTP status code from strings like
    /// "bad response from server; code 503; description: ...".
    fn extract_status_code(error_msg: &str) -> Option<u16> {
        if let Some(code_start) = error_msg.find("code ") {
            let code_str = &error_msg[code_start + 5..];
            if let Some(end) = code_str.find(|c: char| !c.is_numeric()) {
                return code_str[..end].parse().ok();
            }
        }
        None
    }
}

#[async_trait]
impl TextModel for GeminiClient {
    async fn generate(&self, req: &ModelRequest) -> HypatiaResult<ModelResponse> {
        self.generate_internal(req).await.map_err(Into::into)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}
