//! End-to-end router tests with scripted driver, counting notifier, and a
//! stub render program.

#![cfg(unix)]

use async_trait::async_trait;
use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use hypatia_core::{FinishReason, ModelRequest, ModelResponse};
use hypatia_docs::{DocsCache, DocsRefresher};
use hypatia_error::{GeminiError, GeminiErrorKind, HypatiaResult};
use hypatia_interface::{AlertLevel, Notify, NotifierStatus, TextModel};
use hypatia_pipeline::ScriptGenerator;
use hypatia_render::{Renderer, RendererConfigBuilder};
use hypatia_server::{AppState, ServiceConfig, router};
use serde_json::Value;
use std::collections::VecDeque;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

enum Reply {
    Text(String, Option<FinishReason>),
    Error,
}

struct ScriptedDriver {
    replies: Mutex<VecDeque<Reply>>,
}

impl ScriptedDriver {
    fn new(replies: Vec<Reply>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into()),
        })
    }
}

#[async_trait]
impl TextModel for ScriptedDriver {
    async fn generate(&self, _req: &ModelRequest) -> HypatiaResult<ModelResponse> {
        match self.replies.lock().unwrap().pop_front() {
            Some(Reply::Text(text, finish)) => Ok(ModelResponse::new(text, finish)),
            Some(Reply::Error) | None => {
                Err(GeminiError::new(GeminiErrorKind::ApiRequest("scripted failure".into())).into())
            }
        }
    }

    fn provider_name(&self) -> &'static str {
        "scripted"
    }

    fn model_name(&self) -> &str {
        "scripted-model"
    }
}

#[derive(Default)]
struct CountingNotifier {
    started: Mutex<Vec<String>>,
    succeeded: Mutex<Vec<String>>,
    failed: Mutex<Vec<(String, String)>>,
    alerts: Mutex<Vec<String>>,
    configured: bool,
}

impl CountingNotifier {
    fn new(configured: bool) -> Arc<Self> {
        Arc::new(Self {
            configured,
            ..Default::default()
        })
    }
}

#[async_trait]
impl Notify for CountingNotifier {
    async fn generation_started(&self, concept: &str, _requester: &str) -> bool {
        self.started.lock().unwrap().push(concept.to_string());
        true
    }

    async fn generation_succeeded(
        &self,
        concept: &str,
        _duration_secs: f64,
        _file_size_mb: f64,
        _requester: &str,
    ) -> bool {
        self.succeeded.lock().unwrap().push(concept.to_string());
        true
    }

    async fn generation_failed(&self, concept: &str, details: &str, _requester: &str) -> bool {
        self.failed
            .lock()
            .unwrap()
            .push((concept.to_string(), details.to_string()));
        true
    }

    async fn system_alert(&self, _level: AlertLevel, message: &str) -> bool {
        self.alerts.lock().unwrap().push(message.to_string());
        self.configured
    }

    fn status(&self) -> NotifierStatus {
        NotifierStatus {
            configured: self.configured,
            bot_token_exists: self.configured,
            chat_id_exists: self.configured,
            bot_instance_exists: self.configured,
        }
    }
}

fn write_stub(dir: &Path, name: &str, body: &str) -> String {
    let path = dir.join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{body}")).unwrap();
    let mut perms = std::fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms).unwrap();
    path.to_string_lossy().into_owned()
}

/// App wired to a scripted driver, a counting notifier and a stub renderer.
fn test_app(
    root: &Path,
    replies: Vec<Reply>,
    notifier: Arc<CountingNotifier>,
    render_program: String,
) -> Router {
    let config = ServiceConfig::rooted_at(root);
    config.setup_directories().unwrap();

    let generator = Arc::new(ScriptGenerator::new(ScriptedDriver::new(replies)));
    let renderer = Arc::new(Renderer::new(
        RendererConfigBuilder::default()
            .program(render_program)
            .timeout_secs(30u64)
            .build()
            .unwrap(),
    ));
    let docs = Arc::new(DocsCache::load(config.docs().file().clone()));
    let refresher = Arc::new(DocsRefresher::new(
        config.docs().interpreter().clone(),
        config.docs().scraper().clone(),
    ));

    let state = AppState::new(
        generator,
        renderer,
        notifier,
        docs,
        refresher,
        Arc::new(config),
    );
    router(state)
}

fn success_stub(root: &Path) -> String {
    write_stub(
        root,
        "manim_ok.sh",
        "mkdir -p \"$7/videos/scene/720p30\"\nprintf 'FAKEVIDEO' > \"$7/videos/scene/720p30/MainScene.mp4\"\nexit 0\n",
    )
}

fn long_valid_script() -> String {
    format!(
        "from manim import *\n\nclass MainScene(Scene):\n    def construct(self):\n{}",
        "        self.wait(1)\n".repeat(80)
    )
}

async fn post_json(app: Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn empty_concept_is_rejected_with_400() {
    let temp = tempfile::tempdir().unwrap();
    let notifier = CountingNotifier::new(false);
    let stub = success_stub(temp.path());
    let app = test_app(temp.path(), vec![], notifier.clone(), stub);

    let (status, body) = post_json(app, "/generate", r#"{"concept": ""}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No concept provided");
    // Nothing downstream fired.
    assert!(notifier.started.lock().unwrap().is_empty());
}

#[tokio::test]
async fn missing_concept_field_is_rejected_with_400() {
    let temp = tempfile::tempdir().unwrap();
    let notifier = CountingNotifier::new(false);
    let stub = success_stub(temp.path());
    let app = test_app(temp.path(), vec![], notifier, stub);

    let (status, body) = post_json(app, "/generate", r#"{}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No concept provided");
}

#[tokio::test]
async fn exhausted_generation_returns_500_and_notifies_once() {
    let temp = tempfile::tempdir().unwrap();
    let notifier = CountingNotifier::new(false);
    let stub = success_stub(temp.path());
    let app = test_app(
        temp.path(),
        vec![Reply::Error, Reply::Error, Reply::Error],
        notifier.clone(),
        stub,
    );

    let (status, body) = post_json(app, "/generate", r#"{"concept": "pythagoras"}"#).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(
        body["error"]
            .as_str()
            .unwrap()
            .starts_with("AI code generation failed")
    );

    let failed = notifier.failed.lock().unwrap();
    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0].0, "pythagoras");
    assert_eq!(notifier.succeeded.lock().unwrap().len(), 0);
}

#[tokio::test]
async fn successful_generation_returns_video_url_and_code() {
    let temp = tempfile::tempdir().unwrap();
    let notifier = CountingNotifier::new(false);
    let stub = success_stub(temp.path());
    let app = test_app(
        temp.path(),
        vec![Reply::Text(long_valid_script(), Some(FinishReason::Stop))],
        notifier.clone(),
        stub,
    );

    let (status, body) = post_json(app, "/generate", r#"{"concept": "the unit circle"}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let video_url = body["video_url"].as_str().unwrap();
    assert!(video_url.starts_with("/static/videos/scene_"));
    assert!(video_url.ends_with(".mp4"));
    assert!(body["code"].as_str().unwrap().contains("class MainScene"));

    // The artifact landed in served storage and the workspace is gone.
    let filename = video_url.rsplit('/').next().unwrap();
    assert!(temp.path().join("static/videos").join(filename).exists());
    let leftovers: Vec<_> = std::fs::read_dir(temp.path().join("tmp"))
        .unwrap()
        .collect();
    assert!(leftovers.is_empty());

    assert_eq!(notifier.started.lock().unwrap().len(), 1);
    assert_eq!(notifier.succeeded.lock().unwrap().len(), 1);
    assert!(notifier.failed.lock().unwrap().is_empty());
}

#[tokio::test]
async fn render_failure_returns_stderr_details_and_cleans_workspace() {
    let temp = tempfile::tempdir().unwrap();
    let notifier = CountingNotifier::new(false);
    let stub = write_stub(
        temp.path(),
        "manim_fail.sh",
        "echo 'Traceback: boom' >&2\nexit 1\n",
    );
    let app = test_app(
        temp.path(),
        vec![Reply::Text(long_valid_script(), Some(FinishReason::Stop))],
        notifier.clone(),
        stub,
    );

    let (status, body) = post_json(app, "/generate", r#"{"concept": "spirals"}"#).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to generate animation");
    assert_eq!(body["details"], "Traceback: boom");
    assert_eq!(body["return_code"], 1);

    // Per-request temp directory no longer exists afterward.
    let leftovers: Vec<_> = std::fs::read_dir(temp.path().join("tmp"))
        .unwrap()
        .collect();
    assert!(leftovers.is_empty());

    let failed = notifier.failed.lock().unwrap();
    assert_eq!(failed.len(), 1);
    assert!(failed[0].1.contains("Manim rendering failed"));
}

#[tokio::test]
async fn degraded_script_still_renders_as_success() {
    let temp = tempfile::tempdir().unwrap();
    let notifier = CountingNotifier::new(false);
    let stub = success_stub(temp.path());
    // Long enough to dodge the length guard, but syntactically broken in a
    // way the repairer cannot fix.
    let broken = format!(
        "from manim import *\nclass MainScene(Scene):\n    def construct(self):\n{}        x = = 1\n",
        "        self.wait(1)\n".repeat(80)
    );
    let app = test_app(
        temp.path(),
        vec![Reply::Text(broken, Some(FinishReason::Stop))],
        notifier.clone(),
        stub,
    );

    let (status, body) = post_json(app, "/generate", r#"{"concept": "knots"}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert!(body["code"].as_str().unwrap().contains("Generation Error"));
}

#[tokio::test]
async fn chat_requires_a_message() {
    let temp = tempfile::tempdir().unwrap();
    let notifier = CountingNotifier::new(false);
    let stub = success_stub(temp.path());
    let app = test_app(temp.path(), vec![], notifier, stub);

    let (status, body) = post_json(app, "/chat", r#"{"message": "  "}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No message provided");
}

#[tokio::test]
async fn chat_forwards_the_tutor_reply() {
    let temp = tempfile::tempdir().unwrap();
    let notifier = CountingNotifier::new(false);
    let stub = success_stub(temp.path());
    let app = test_app(
        temp.path(),
        vec![Reply::Text(
            "A limit describes approach behavior.".into(),
            Some(FinishReason::Stop),
        )],
        notifier,
        stub,
    );

    let (status, body) = post_json(app, "/chat", r#"{"message": "what is a limit?"}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["response"], "A limit describes approach behavior.");
}

#[tokio::test]
async fn telegram_status_reports_configuration_shape() {
    let temp = tempfile::tempdir().unwrap();
    let notifier = CountingNotifier::new(false);
    let stub = success_stub(temp.path());
    let app = test_app(temp.path(), vec![], notifier, stub);

    let (status, body) = get_json(app, "/telegram-status").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["configured"], false);
    assert_eq!(body["bot_token_exists"], false);
    assert_eq!(body["chat_id_exists"], false);
    assert_eq!(body["bot_instance_exists"], false);
}

#[tokio::test]
async fn test_telegram_requires_configuration() {
    let temp = tempfile::tempdir().unwrap();
    let notifier = CountingNotifier::new(false);
    let stub = success_stub(temp.path());
    let app = test_app(temp.path(), vec![], notifier, stub);

    let (status, body) = post_json(app, "/test-telegram", "{}").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("not configured"));
}

#[tokio::test]
async fn test_telegram_sends_when_configured() {
    let temp = tempfile::tempdir().unwrap();
    let notifier = CountingNotifier::new(true);
    let stub = success_stub(temp.path());
    let app = test_app(temp.path(), vec![], notifier.clone(), stub);

    let (status, body) = post_json(app, "/test-telegram", "{}").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(notifier.alerts.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn update_docs_without_scraper_is_an_error() {
    let temp = tempfile::tempdir().unwrap();
    let notifier = CountingNotifier::new(false);
    let stub = success_stub(temp.path());
    let app = test_app(temp.path(), vec![], notifier, stub);

    let (status, body) = post_json(app, "/update-docs", "{}").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Documentation scraper not found");
}

#[tokio::test]
async fn update_docs_runs_scraper_and_reloads_cache() {
    let temp = tempfile::tempdir().unwrap();
    let notifier = CountingNotifier::new(false);
    let render_stub = success_stub(temp.path());

    // Scraper stub that writes fresh documentation next to itself.
    let scraper = temp.path().join("scrape_manim_docs.py");
    std::fs::write(
        &scraper,
        "#!/bin/sh\nprintf 'fresh documentation text' > manim_docs.txt\n",
    )
    .unwrap();
    let mut perms = std::fs::metadata(&scraper).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&scraper, perms).unwrap();

    let config = ServiceConfig::rooted_at(temp.path());
    config.setup_directories().unwrap();
    let generator = Arc::new(ScriptGenerator::new(ScriptedDriver::new(vec![])));
    let renderer = Arc::new(Renderer::new(
        RendererConfigBuilder::default()
            .program(render_stub)
            .build()
            .unwrap(),
    ));
    let docs = Arc::new(DocsCache::load(config.docs().file().clone()));
    // Run the stub through sh so no python is needed.
    let refresher = Arc::new(DocsRefresher::new("sh", scraper));
    let app = router(AppState::new(
        generator,
        renderer,
        notifier,
        docs,
        refresher,
        Arc::new(config),
    ));

    let (status, body) = post_json(app, "/update-docs", "{}").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["size"], "fresh documentation text".len());
}

#[tokio::test]
async fn missing_video_is_a_json_404() {
    let temp = tempfile::tempdir().unwrap();
    let notifier = CountingNotifier::new(false);
    let stub = success_stub(temp.path());
    let app = test_app(temp.path(), vec![], notifier, stub);

    let (status, body) = get_json(app, "/static/videos/scene_nope.mp4").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Video not found");
}

#[tokio::test]
async fn every_response_carries_proxy_headers() {
    let temp = tempfile::tempdir().unwrap();
    let notifier = CountingNotifier::new(false);
    let stub = success_stub(temp.path());
    let app = test_app(temp.path(), vec![], notifier, stub);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/telegram-status")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let headers = response.headers();
    assert_eq!(headers["ngrok-skip-browser-warning"], "true");
    assert_eq!(headers["access-control-allow-origin"], "*");
}
