//! Per-request render workspace with guaranteed cleanup.

use hypatia_core::SceneName;
use hypatia_error::{RenderError, RenderErrorKind};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Scratch directory for one render: holds the candidate script and the
/// renderer's media tree. Removed on drop, so cleanup runs on every exit
/// path.
#[derive(Debug)]
pub struct RenderWorkspace {
    root: PathBuf,
    media_dir: PathBuf,
}

impl RenderWorkspace {
    /// Name of the script file inside the workspace.
    pub const SCRIPT_FILE: &'static str = "scene.py";

    /// Scene class the renderer is asked to build.
    pub const SCENE_CLASS: &'static str = "MainScene";

    /// Create the workspace directory tree under `temp_root`.
    pub fn create(temp_root: &Path, scene: &SceneName) -> Result<Self, RenderError> {
        let root = temp_root.join(scene.as_str());
        let media_dir = root.join("media");
        std::fs::create_dir_all(&media_dir)
            .map_err(|e| RenderError::new(RenderErrorKind::Io(e.to_string())))?;
        debug!(root = %root.display(), "created render workspace");
        Ok(Self { root, media_dir })
    }

    /// Write the candidate script into the workspace.
    pub fn write_script(&self, source: &str) -> Result<(), RenderError> {
        std::fs::write(self.script_path(), source)
            .map_err(|e| RenderError::new(RenderErrorKind::Io(e.to_string())))
    }

    /// Workspace root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Media directory handed to the renderer.
    pub fn media_dir(&self) -> &Path {
        &self.media_dir
    }

    /// Path of the candidate script.
    pub fn script_path(&self) -> PathBuf {
        self.root.join(Self::SCRIPT_FILE)
    }

    /// Candidate locations the renderer may have written the video to, in
    /// search order.
    pub fn video_candidates(&self) -> Vec<PathBuf> {
        vec![
            self.media_dir
                .join("videos")
                .join("scene")
                .join("1080p60")
                .join(format!("{}.mp4", Self::SCENE_CLASS)),
            self.media_dir
                .join("videos")
                .join("scene")
                .join("720p30")
                .join(format!("{}.mp4", Self::SCENE_CLASS)),
            self.media_dir
                .join("videos")
                .join(format!("{}.mp4", Self::SCENE_CLASS)),
            self.root.join(format!("{}.mp4", Self::SCENE_CLASS)),
        ]
    }
}

impl Drop for RenderWorkspace {
    fn drop(&mut self) {
        if let Err(e) = std::fs::remove_dir_all(&self.root) {
            if e.kind() != std::io::ErrorKind::NotFound {
                warn!(root = %self.root.display(), error = %e, "workspace cleanup failed");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workspace_is_removed_on_drop() {
        let temp = tempfile::tempdir().unwrap();
        let scene = SceneName::generate();
        let root = {
            let ws = RenderWorkspace::create(temp.path(), &scene).unwrap();
            ws.write_script("from manim import *\n").unwrap();
            assert!(ws.script_path().exists());
            ws.root().to_path_buf()
        };
        assert!(!root.exists());
    }

    #[test]
    fn candidate_order_prefers_high_resolution() {
        let temp = tempfile::tempdir().unwrap();
        let scene = SceneName::generate();
        let ws = RenderWorkspace::create(temp.path(), &scene).unwrap();
        let candidates = ws.video_candidates();
        assert_eq!(candidates.len(), 4);
        assert!(candidates[0].to_string_lossy().contains("1080p60"));
        assert!(candidates[1].to_string_lossy().contains("720p30"));
    }
}
