//! The in-process documentation cache.

use hypatia_error::{DocsError, DocsErrorKind};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use tracing::{info, warn};

/// Section separator used by the scraper's output format.
const SECTION_SEPARATOR: &str =
    "================================================================================";

/// Per-section character cap applied during relevance extraction.
const SECTION_CHAR_CAP: usize = 1000;

/// Read-mostly cache of the scraped documentation text.
///
/// Readers take a cheap `Arc` snapshot; the admin refresh swaps the whole
/// text atomically under the write lock.
#[derive(Debug)]
pub struct DocsCache {
    docs_path: PathBuf,
    text: RwLock<Arc<str>>,
}

impl DocsCache {
    /// Load the cache from disk. A missing file yields an empty cache and a
    /// warning; generation works without documentation reference.
    pub fn load(docs_path: impl Into<PathBuf>) -> Self {
        let docs_path = docs_path.into();
        let text = match std::fs::read_to_string(&docs_path) {
            Ok(content) => {
                info!(path = %docs_path.display(), bytes = content.len(), "loaded documentation");
                content
            }
            Err(_) => {
                warn!(
                    path = %docs_path.display(),
                    "documentation file not found; continuing without reference text"
                );
                String::new()
            }
        };
        Self {
            docs_path,
            text: RwLock::new(Arc::from(text.as_str())),
        }
    }

    /// Path the cache reads from.
    pub fn docs_path(&self) -> &Path {
        &self.docs_path
    }

    /// Cheap snapshot of the full text.
    pub fn snapshot(&self) -> Arc<str> {
        self.text.read().unwrap().clone()
    }

    /// Size of the cached text in bytes.
    pub fn len(&self) -> usize {
        self.text.read().unwrap().len()
    }

    /// True when no documentation is loaded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Re-read the file and swap the cached text. Returns the new size.
    pub fn reload(&self) -> Result<usize, DocsError> {
        let content = std::fs::read_to_string(&self.docs_path)
            .map_err(|e| DocsError::new(DocsErrorKind::Io(e.to_string())))?;
        let size = content.len();
        *self.text.write().unwrap() = Arc::from(content.as_str());
        info!(bytes = size, "documentation cache reloaded");
        Ok(size)
    }

    /// Extract documentation sections relevant to a concept, capped per
    /// section and in total.
    pub fn relevant_sections(&self, concept: &str, max_chars: usize) -> String {
        let snapshot = self.snapshot();
        if snapshot.is_empty() {
            return String::new();
        }

        let concept_lower = concept.to_lowercase();
        let general_keywords = [
            "example", "animation", "color", "text", "scene", "create", "write", "play", "wait",
        ];

        let mut relevant = Vec::new();
        for section in snapshot.split(SECTION_SEPARATOR) {
            let section_lower = section.to_lowercase();
            let hit = section_lower.contains(&concept_lower)
                || general_keywords.iter().any(|k| section_lower.contains(k));
            if hit {
                relevant.push(section.chars().take(SECTION_CHAR_CAP).collect::<String>());
            }
        }

        let mut combined = relevant.join("\n");
        if combined.chars().count() > max_chars {
            combined = combined.chars().take(max_chars).collect();
            combined.push_str("...");
        }
        combined
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cache_with(content: &str) -> (tempfile::TempDir, DocsCache) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("manim_docs.txt");
        std::fs::write(&path, content).unwrap();
        (dir, DocsCache::load(path))
    }

    #[test]
    fn missing_file_yields_empty_cache() {
        let cache = DocsCache::load("/nonexistent/manim_docs.txt");
        assert!(cache.is_empty());
        assert_eq!(cache.relevant_sections("circle", 100), "");
    }

    #[test]
    fn relevance_matches_concept_and_general_keywords() {
        let content = format!(
            "about vectors only\n{SECTION_SEPARATOR}\ncircle geometry reference\n{SECTION_SEPARATOR}\nunrelated prose"
        );
        let (_dir, cache) = cache_with(&content);
        let out = cache.relevant_sections("circle", 4000);
        assert!(out.contains("circle geometry"));
        assert!(!out.contains("unrelated prose"));
    }

    #[test]
    fn total_cap_appends_ellipsis() {
        let content = format!("animation {}", "x".repeat(500));
        let (_dir, cache) = cache_with(&content);
        let out = cache.relevant_sections("anything", 50);
        assert!(out.ends_with("..."));
        assert_eq!(out.chars().count(), 53);
    }

    #[test]
    fn reload_swaps_the_snapshot() {
        let (dir, cache) = cache_with("first");
        assert_eq!(&*cache.snapshot(), "first");
        std::fs::write(dir.path().join("manim_docs.txt"), "second version").unwrap();
        let size = cache.reload().unwrap();
        assert_eq!(size, "second version".len());
        assert_eq!(&*cache.snapshot(), "second version");
    }
}
