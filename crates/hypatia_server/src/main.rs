use anyhow::Result;
use chrono::Local;
use clap::Parser;
use hypatia_docs::{DocsCache, DocsRefresher};
use hypatia_interface::{AlertLevel, Notify};
use hypatia_models::GeminiClient;
use hypatia_notify::TelegramNotifier;
use hypatia_pipeline::ScriptGenerator;
use hypatia_render::Renderer;
use hypatia_server::{AppState, ServiceConfig, router};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Hypatia animation service", long_about = None)]
struct Args {
    /// Port to listen on (overrides PORT and the config file)
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let mut config = ServiceConfig::load()?;
    if let Some(port) = args.port {
        config.override_port(port);
    }

    let default_level = if *config.server().production() {
        "info"
    } else {
        "debug"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    config.setup_directories()?;

    let driver = Arc::new(GeminiClient::new()?);
    let generator = Arc::new(ScriptGenerator::new(driver));
    let renderer = Arc::new(Renderer::new(config.render().clone()));
    let notifier: Arc<dyn Notify> = Arc::new(TelegramNotifier::from_env());
    let docs = Arc::new(DocsCache::load(config.docs().file().clone()));
    let refresher = Arc::new(DocsRefresher::new(
        config.docs().interpreter().clone(),
        config.docs().scraper().clone(),
    ));

    let startup = format!(
        "Hypatia animation service started successfully at {}",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    notifier.system_alert(AlertLevel::Info, &startup).await;

    let port = *config.server().port();
    let state = AppState::new(generator, renderer, notifier, docs, refresher, Arc::new(config));
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    info!(port, "hypatia listening");
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
