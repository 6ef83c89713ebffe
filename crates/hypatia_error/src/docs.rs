//! Errors from the reference-documentation cache.

/// Error kinds for documentation cache operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum DocsErrorKind {
    /// The configured scraper program does not exist
    #[display("Documentation scraper not found: {}", _0)]
    ScraperNotFound(String),
    /// The scraper subprocess exited with a failure
    #[display("Documentation scraper failed: {}", _0)]
    ScraperFailed(String),
    /// Reading or writing the cached reference text failed
    #[display("Documentation I/O failed: {}", _0)]
    Io(String),
}

/// Documentation error with source location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Docs Error: {} at line {} in {}", kind, line, file)]
pub struct DocsError {
    /// The kind of error that occurred
    pub kind: DocsErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl DocsError {
    /// Create a new DocsError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: DocsErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
