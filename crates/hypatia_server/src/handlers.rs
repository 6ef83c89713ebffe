//! HTTP request handlers.

use crate::state::AppState;
use axum::{
    extract::{ConnectInfo, Path, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Json, Response},
};
use hypatia_core::{GenerationRequest, SceneName, sanitize_input};
use hypatia_error::RenderErrorKind;
use hypatia_interface::AlertLevel;
use hypatia_pipeline::Verdict;
use hypatia_render::RenderWorkspace;
use serde::Deserialize;
use serde_json::json;
use std::net::SocketAddr;
use std::time::Instant;
use tracing::{error, info, instrument, warn};

/// Body of `POST /generate`.
#[derive(Debug, Deserialize)]
pub struct GenerateBody {
    /// Free-text mathematical concept
    #[serde(default)]
    pub concept: String,
}

/// Body of `POST /chat`.
#[derive(Debug, Deserialize)]
pub struct ChatBody {
    /// Free-text question for the tutor
    #[serde(default)]
    pub message: String,
}

fn requester_of(connect_info: Option<ConnectInfo<SocketAddr>>) -> String {
    connect_info
        .map(|info| info.0.ip().to_string())
        .unwrap_or_default()
}

/// `GET /` — the main page.
pub async fn index(State(state): State<AppState>) -> Response {
    serve_page(&state, "index.html").await
}

/// `GET /chat` — the chat page.
pub async fn chat_page(State(state): State<AppState>) -> Response {
    serve_page(&state, "chat.html").await
}

async fn serve_page(state: &AppState, name: &str) -> Response {
    let path = state.config().paths().static_dir().join(name);
    match tokio::fs::read_to_string(&path).await {
        Ok(html) => Html(html).into_response(),
        Err(_) => (
            StatusCode::NOT_FOUND,
            Json(json!({"error": "Page not found"})),
        )
            .into_response(),
    }
}

/// `POST /chat` — forward a question to the tutor model.
#[instrument(skip_all)]
pub async fn chat_api(
    State(state): State<AppState>,
    Json(body): Json<ChatBody>,
) -> (StatusCode, Json<serde_json::Value>) {
    let message = sanitize_input(&body.message);
    if message.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "No message provided"})),
        );
    }

    match state.generator().chat_response(&message).await {
        Ok(response) => (
            StatusCode::OK,
            Json(json!({"success": true, "response": response})),
        ),
        Err(e) => {
            error!(error = %e, "chat generation failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Failed to generate response",
                    "details": e.to_string(),
                })),
            )
        }
    }
}

/// `POST /generate` — the full concept-to-video pipeline.
#[instrument(skip_all)]
pub async fn generate(
    State(state): State<AppState>,
    connect_info: Option<ConnectInfo<SocketAddr>>,
    Json(body): Json<GenerateBody>,
) -> (StatusCode, Json<serde_json::Value>) {
    let started = Instant::now();
    let request = GenerationRequest::new(&body.concept, requester_of(connect_info));
    let (concept, requester) = (request.concept().clone(), request.requester_addr().clone());
    if concept.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "No concept provided"})),
        );
    }

    info!(concept = %concept, "generation request accepted");
    state
        .notifier()
        .generation_started(&concept, &requester)
        .await;

    let validated = match state.generator().generate_script(&concept).await {
        Ok(validated) => validated,
        Err(e) => {
            error!(error = %e, "script generation failed");
            state
                .notifier()
                .generation_failed(&concept, &format!("Code generation failed: {e}"), &requester)
                .await;
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": format!("AI code generation failed: {e}")})),
            );
        }
    };

    if validated.verdict() == &Verdict::Replaced {
        // Still a success shape: the replacement scene renders a valid
        // video. Operators see the masked failure here.
        warn!(concept = %concept, "serving degraded error-display scene");
    }

    let scene = SceneName::generate();
    let workspace = match RenderWorkspace::create(state.config().paths().temp_dir(), &scene) {
        Ok(workspace) => workspace,
        Err(e) => return internal_error(&state, &concept, &requester, e.to_string()).await,
    };
    if let Err(e) = workspace.write_script(validated.source()) {
        return internal_error(&state, &concept, &requester, e.to_string()).await;
    }

    match state
        .renderer()
        .render(&workspace, &scene, &state.config().videos_dir())
        .await
    {
        Ok(artifact) => {
            let duration = started.elapsed().as_secs_f64();
            state
                .notifier()
                .generation_succeeded(&concept, duration, artifact.size_mb(), &requester)
                .await;
            (
                StatusCode::OK,
                Json(json!({
                    "success": true,
                    "video_url": format!("/static/videos/{}", scene.video_filename()),
                    "code": validated.source(),
                })),
            )
        }
        Err(e) => {
            error!(error = %e, "render failed");
            let response = match &e.kind {
                RenderErrorKind::Failed {
                    return_code,
                    details,
                } => json!({
                    "error": "Failed to generate animation",
                    "details": details,
                    "return_code": return_code,
                }),
                RenderErrorKind::Timeout(_) => json!({
                    "error": "Animation generation timed out",
                    "details": "The animation took too long to generate. Please try a simpler concept.",
                }),
                RenderErrorKind::OutputMissing(_) => {
                    json!({"error": "Generated video file not found"})
                }
                other => json!({
                    "error": "Internal server error",
                    "details": other.to_string(),
                }),
            };
            state
                .notifier()
                .generation_failed(&concept, &format!("Manim rendering failed: {e}"), &requester)
                .await;
            (StatusCode::INTERNAL_SERVER_ERROR, Json(response))
        }
    }
    // workspace drops here, removing the per-request temp directory
}

async fn internal_error(
    state: &AppState,
    concept: &str,
    requester: &str,
    details: String,
) -> (StatusCode, Json<serde_json::Value>) {
    error!(details = %details, "internal error during generation");
    state
        .notifier()
        .generation_failed(concept, &details, requester)
        .await;
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({"error": "Internal server error", "details": details})),
    )
}

/// `GET /telegram-status` — notifier configuration report.
pub async fn telegram_status(State(state): State<AppState>) -> Json<serde_json::Value> {
    let status = state.notifier().status();
    Json(serde_json::to_value(status).unwrap_or_else(|_| json!({})))
}

/// `POST /test-telegram` — fire a test notification.
#[instrument(skip_all)]
pub async fn test_telegram(
    State(state): State<AppState>,
) -> (StatusCode, Json<serde_json::Value>) {
    if !state.notifier().status().configured {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": "Telegram bot not configured. Please set TELEGRAM_BOT_TOKEN and TELEGRAM_CHAT_ID environment variables.",
            })),
        );
    }

    let message = "🧪 Test notification from Hypatia!\n\nIf you received this, notifications are working correctly! 🎉";
    if state
        .notifier()
        .system_alert(AlertLevel::Info, message)
        .await
    {
        (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "message": "Test notification sent successfully!",
            })),
        )
    } else {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "error": "Failed to send test notification. Check bot token and chat ID.",
            })),
        )
    }
}

/// `POST /update-docs` — run the scraper, then reload the cache.
#[instrument(skip_all)]
pub async fn update_docs(State(state): State<AppState>) -> (StatusCode, Json<serde_json::Value>) {
    use hypatia_error::DocsErrorKind;

    match state.refresher().run().await {
        Ok(()) => match state.docs().reload() {
            Ok(size) => (
                StatusCode::OK,
                Json(json!({
                    "success": true,
                    "message": "Documentation updated successfully!",
                    "size": size,
                })),
            ),
            Err(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Failed to update documentation",
                    "details": e.to_string(),
                })),
            ),
        },
        Err(e) => match &e.kind {
            DocsErrorKind::ScraperNotFound(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "Documentation scraper not found"})),
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Failed to update documentation",
                    "details": e.to_string(),
                })),
            ),
        },
    }
}

/// `GET /static/videos/{filename}` — stream a rendered video.
pub async fn serve_video(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Response {
    // Served names are flat scene files; anything path-like is not ours.
    if filename.contains("..") || filename.contains('/') || filename.contains('\\') {
        return video_not_found();
    }
    let path = state.config().videos_dir().join(&filename);
    match tokio::fs::read(&path).await {
        Ok(bytes) => ([(header::CONTENT_TYPE, "video/mp4")], bytes).into_response(),
        Err(_) => video_not_found(),
    }
}

fn video_not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({"error": "Video not found"})),
    )
        .into_response()
}
