//! Admin-triggered refresh via the external scraper program.

use hypatia_error::{DocsError, DocsErrorKind};
use std::path::{Path, PathBuf};
use tokio::process::Command;
use tracing::{info, instrument};

/// Runs the configured documentation scraper as a subprocess.
///
/// The scraper rewrites the documentation file on disk; reloading the cache
/// afterwards is the caller's job.
#[derive(Debug, Clone)]
pub struct DocsRefresher {
    program: String,
    script_path: PathBuf,
}

impl DocsRefresher {
    /// Build a refresher for a scraper script run by an interpreter.
    pub fn new(program: impl Into<String>, script_path: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            script_path: script_path.into(),
        }
    }

    /// The scraper script location.
    pub fn script_path(&self) -> &Path {
        &self.script_path
    }

    /// Run the scraper to completion.
    #[instrument(skip(self), fields(script = %self.script_path.display()))]
    pub async fn run(&self) -> Result<(), DocsError> {
        if !self.script_path.exists() {
            return Err(DocsError::new(DocsErrorKind::ScraperNotFound(
                self.script_path.display().to_string(),
            )));
        }

        let output = Command::new(&self.program)
            .arg(&self.script_path)
            .current_dir(self.script_path.parent().unwrap_or(Path::new(".")))
            .output()
            .await
            .map_err(|e| DocsError::new(DocsErrorKind::ScraperFailed(e.to_string())))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(DocsError::new(DocsErrorKind::ScraperFailed(stderr)));
        }

        info!("documentation scraper finished");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_script_is_reported() {
        let refresher = DocsRefresher::new("python3", "/nonexistent/scrape.py");
        let err = refresher.run().await.unwrap_err();
        assert!(matches!(err.kind, DocsErrorKind::ScraperNotFound(_)));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn failing_scraper_surfaces_stderr() {
        use std::os::unix::fs::PermissionsExt;
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("scrape.sh");
        std::fs::write(&script, "#!/bin/sh\necho 'fetch failed' >&2\nexit 3\n").unwrap();
        let mut perms = std::fs::metadata(&script).unwrap().permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&script, perms).unwrap();

        let refresher = DocsRefresher::new("sh", &script);
        let err = refresher.run().await.unwrap_err();
        match err.kind {
            DocsErrorKind::ScraperFailed(details) => assert_eq!(details, "fetch failed"),
            other => panic!("unexpected error kind: {other:?}"),
        }
    }
}
