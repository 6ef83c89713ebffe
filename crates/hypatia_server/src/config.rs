//! Layered service configuration.
//!
//! Bundled TOML defaults, merged with an optional user `hypatia.toml`, then
//! overridden by the deployment environment. Secrets (API keys, bot tokens)
//! never live in the TOML layer; the crates that need them read the
//! environment directly.

use config::{Config, File, FileFormat};
use derive_getters::Getters;
use hypatia_error::{ConfigError, HypatiaResult, ServerError, ServerErrorKind};
use hypatia_render::RendererConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, instrument};

/// Bundled defaults, compiled into the binary.
const DEFAULT_CONFIG: &str = include_str!("../hypatia.toml");

/// Listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ServerSection {
    /// TCP port to bind
    port: u16,
    /// Production mode: terse logging, no debug detail in responses
    production: bool,
}

/// Directory layout.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PathsSection {
    /// Renderer media tree root
    media_dir: PathBuf,
    /// Per-request workspace root
    temp_dir: PathBuf,
    /// Served static files; videos live under `<static_dir>/videos`
    static_dir: PathBuf,
}

/// Documentation cache settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct DocsSection {
    /// Scraped documentation text file
    file: PathBuf,
    /// Scraper script run by the admin refresh
    scraper: PathBuf,
    /// Interpreter for the scraper script
    interpreter: String,
}

/// Full service configuration.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Listener settings
    server: ServerSection,
    /// Directory layout
    paths: PathsSection,
    /// Documentation cache settings
    docs: DocsSection,
    /// Renderer subprocess settings
    render: RendererConfig,
}

impl ServiceConfig {
    /// Load bundled defaults, merge an optional `./hypatia.toml`, then apply
    /// environment overrides.
    #[instrument(name = "service_config_load")]
    pub fn load() -> HypatiaResult<Self> {
        let merged = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::with_name("hypatia").required(false))
            .build()
            .map_err(|e| ConfigError::new(format!("failed to read configuration: {e}")))?;

        let mut config: ServiceConfig = merged
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("invalid configuration: {e}")))?;
        config.apply_env()?;
        debug!(port = config.server.port, "configuration loaded");
        Ok(config)
    }

    /// Apply deployment environment variables on top of the file layers.
    fn apply_env(&mut self) -> HypatiaResult<()> {
        // Container deployments get absolute paths unless told otherwise.
        if std::env::var("DOCKER_ENV").is_ok() {
            self.paths.media_dir = PathBuf::from("/app/media");
            self.paths.temp_dir = PathBuf::from("/app/tmp");
        }
        if let Ok(media_dir) = std::env::var("MEDIA_DIR") {
            self.paths.media_dir = PathBuf::from(media_dir);
        }
        if let Ok(temp_dir) = std::env::var("TEMP_DIR") {
            self.paths.temp_dir = PathBuf::from(temp_dir);
        }
        if let Ok(port) = std::env::var("PORT") {
            self.server.port = port
                .parse()
                .map_err(|_| ConfigError::new(format!("PORT is not a number: {port}")))?;
        }
        if let Ok(env) = std::env::var("HYPATIA_ENV") {
            self.server.production = env == "production";
        }
        Ok(())
    }

    /// Override the listening port (CLI flag beats file and environment).
    pub fn override_port(&mut self, port: u16) {
        self.server.port = port;
    }

    /// Directory the served videos land in.
    pub fn videos_dir(&self) -> PathBuf {
        self.paths.static_dir.join("videos")
    }

    /// Create the full served/media/temp directory tree.
    pub fn setup_directories(&self) -> Result<(), ServerError> {
        let scene_media = self.paths.media_dir.join("videos").join("scene");
        let directories = [
            self.paths.static_dir.clone(),
            self.videos_dir(),
            self.paths.temp_dir.clone(),
            scene_media.join("720p30"),
            scene_media.join("1080p60"),
        ];
        for directory in &directories {
            std::fs::create_dir_all(directory).map_err(|e| {
                ServerError::new(ServerErrorKind::Setup(format!(
                    "{}: {e}",
                    directory.display()
                )))
            })?;
            debug!(directory = %directory.display(), "ensured directory");
        }
        Ok(())
    }

    /// Test constructor rooted at an arbitrary directory.
    pub fn rooted_at(root: &std::path::Path) -> Self {
        Self {
            server: ServerSection {
                port: 0,
                production: false,
            },
            paths: PathsSection {
                media_dir: root.join("media"),
                temp_dir: root.join("tmp"),
                static_dir: root.join("static"),
            },
            docs: DocsSection {
                file: root.join("manim_docs.txt"),
                scraper: root.join("scrape_manim_docs.py"),
                interpreter: "python3".to_string(),
            },
            render: RendererConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_defaults_parse() {
        let config: ServiceConfig = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(*config.server().port(), 5001);
        assert!(!config.server().production());
        assert_eq!(config.paths().static_dir(), &PathBuf::from("static"));
    }

    #[test]
    fn setup_creates_the_directory_tree() {
        let temp = tempfile::tempdir().unwrap();
        let config = ServiceConfig::rooted_at(temp.path());
        config.setup_directories().unwrap();
        assert!(config.videos_dir().is_dir());
        assert!(config.paths().temp_dir().is_dir());
        assert!(
            config
                .paths()
                .media_dir()
                .join("videos/scene/720p30")
                .is_dir()
        );
    }
}
