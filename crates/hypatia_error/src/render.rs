//! Errors from the Manim renderer subprocess.

/// Error kinds for render operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum RenderErrorKind {
    /// Failed to spawn the renderer process
    #[display("Failed to spawn renderer: {}", _0)]
    Spawn(String),
    /// Renderer exited with a non-zero status
    #[display("Renderer exited with code {}: {}", return_code, details)]
    Failed {
        /// Process exit code
        return_code: i32,
        /// Captured stderr, or stdout when stderr is empty
        details: String,
    },
    /// Renderer exceeded the configured timeout
    #[display("Renderer timed out after {} seconds", _0)]
    Timeout(u64),
    /// Renderer succeeded but no video was found at any candidate path
    #[display("Rendered video not found: {}", _0)]
    OutputMissing(String),
    /// Filesystem operation on the render workspace failed
    #[display("Workspace I/O failed: {}", _0)]
    Io(String),
}

/// Render error with source location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Render Error: {} at line {} in {}", kind, line, file)]
pub struct RenderError {
    /// The kind of error that occurred
    pub kind: RenderErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl RenderError {
    /// Create a new RenderError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: RenderErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
