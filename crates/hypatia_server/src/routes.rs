//! Router assembly and response-header layers.

use crate::handlers;
use crate::state::AppState;
use axum::{
    Router,
    extract::Request,
    http::{HeaderValue, header},
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the full application router.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::index))
        .route("/chat", get(handlers::chat_page).post(handlers::chat_api))
        .route("/generate", post(handlers::generate))
        .route("/telegram-status", get(handlers::telegram_status))
        .route("/test-telegram", post(handlers::test_telegram))
        .route("/update-docs", post(handlers::update_docs))
        .route("/static/videos/:filename", get(handlers::serve_video))
        .layer(cors)
        .layer(middleware::from_fn(proxy_headers))
        .with_state(state)
}

/// Headers stamped on every response: permissive CORS plus the header that
/// suppresses the tunneling proxy's interstitial warning page.
async fn proxy_headers(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();
    headers.insert(
        "ngrok-skip-browser-warning",
        HeaderValue::from_static("true"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, POST, PUT, DELETE, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type, Authorization, ngrok-skip-browser-warning"),
    );
    response
}
