//! Scene naming for generated videos.

use chrono::{DateTime, Local};
use rand::Rng;

/// Unique name for one generation: `scene_<YYYYMMDD_HHMMSS>_<6 lowercase letters>`.
///
/// The name doubles as the workspace directory name and the served video
/// filename stem, so concurrent requests never collide.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", _0)]
pub struct SceneName(String);

impl SceneName {
    /// Generate a fresh name from the current local time.
    pub fn generate() -> Self {
        Self::at(Local::now())
    }

    /// Generate a name for a specific timestamp.
    pub fn at(when: DateTime<Local>) -> Self {
        let mut rng = rand::rng();
        let suffix: String = (0..6)
            .map(|_| char::from(b'a' + rng.random_range(0..26u8)))
            .collect();
        Self(format!("scene_{}_{}", when.format("%Y%m%d_%H%M%S"), suffix))
    }

    /// The name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Filename of the served video for this scene.
    pub fn video_filename(&self) -> String {
        format!("{}.mp4", self.0)
    }
}
