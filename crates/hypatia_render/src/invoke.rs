//! The renderer subprocess.

use crate::{RenderWorkspace, RendererConfig};
use hypatia_core::{RenderArtifact, SceneName};
use hypatia_error::{RenderError, RenderErrorKind};
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::{debug, info, instrument, warn};

/// Invokes Manim over a prepared [`RenderWorkspace`] and moves the resulting
/// video into permanent served storage.
#[derive(Debug, Clone)]
pub struct Renderer {
    config: RendererConfig,
}

impl Renderer {
    /// Build a renderer from configuration.
    pub fn new(config: RendererConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    /// Render the workspace's script and persist the video as
    /// `<videos_dir>/<scene>.mp4`.
    ///
    /// The subprocess is killed if it outlives the configured timeout. The
    /// workspace itself is untouched here; its RAII guard owns cleanup.
    #[instrument(skip(self, workspace), fields(scene = scene.as_str()))]
    pub async fn render(
        &self,
        workspace: &RenderWorkspace,
        scene: &SceneName,
        videos_dir: &Path,
    ) -> Result<RenderArtifact, RenderError> {
        let timeout = Duration::from_secs(*self.config.timeout_secs());
        let mut command = Command::new(self.config.program());
        command
            .arg("-m")
            .arg("manim")
            .arg("render")
            .arg(self.config.quality().flag())
            .arg("--format")
            .arg("mp4")
            .arg("--media_dir")
            .arg(workspace.media_dir())
            .arg(RenderWorkspace::SCRIPT_FILE)
            .arg(RenderWorkspace::SCENE_CLASS)
            .current_dir(workspace.root())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        info!(
            program = self.config.program(),
            quality = %self.config.quality(),
            "running renderer"
        );

        let child = command
            .spawn()
            .map_err(|e| RenderError::new(RenderErrorKind::Spawn(e.to_string())))?;

        let output = match tokio::time::timeout(timeout, child.wait_with_output()).await {
            Err(_) => {
                warn!(timeout_secs = timeout.as_secs(), "renderer timed out");
                return Err(RenderError::new(RenderErrorKind::Timeout(
                    timeout.as_secs(),
                )));
            }
            Ok(result) => {
                result.map_err(|e| RenderError::new(RenderErrorKind::Io(e.to_string())))?
            }
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
            let details = if !stderr.is_empty() {
                stderr
            } else if !stdout.is_empty() {
                stdout
            } else {
                "Unknown error during animation generation".to_string()
            };
            let return_code = output.status.code().unwrap_or(-1);
            warn!(return_code, "renderer failed");
            return Err(RenderError::new(RenderErrorKind::Failed {
                return_code,
                details,
            }));
        }

        self.collect_artifact(workspace, scene, videos_dir).await
    }

    /// Find the rendered video among the candidate locations and move it
    /// into served storage.
    async fn collect_artifact(
        &self,
        workspace: &RenderWorkspace,
        scene: &SceneName,
        videos_dir: &Path,
    ) -> Result<RenderArtifact, RenderError> {
        let destination = videos_dir.join(scene.video_filename());
        for candidate in workspace.video_candidates() {
            if candidate.exists() {
                debug!(source = %candidate.display(), "found rendered video");
                move_file(&candidate, &destination).await?;
                let size_bytes = tokio::fs::metadata(&destination)
                    .await
                    .map_err(|e| RenderError::new(RenderErrorKind::Io(e.to_string())))?
                    .len();
                info!(
                    path = %destination.display(),
                    size_bytes,
                    "video moved into served storage"
                );
                return Ok(RenderArtifact::new(destination, size_bytes));
            }
        }

        let searched = workspace
            .video_candidates()
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        Err(RenderError::new(RenderErrorKind::OutputMissing(searched)))
    }
}

/// Move a file, falling back to copy + remove when rename crosses
/// filesystems.
async fn move_file(from: &Path, to: &Path) -> Result<(), RenderError> {
    if tokio::fs::rename(from, to).await.is_ok() {
        return Ok(());
    }
    tokio::fs::copy(from, to)
        .await
        .map_err(|e| RenderError::new(RenderErrorKind::Io(e.to_string())))?;
    tokio::fs::remove_file(from)
        .await
        .map_err(|e| RenderError::new(RenderErrorKind::Io(e.to_string())))?;
    Ok(())
}
