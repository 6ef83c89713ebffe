//! Errors from the script generation pipeline.

/// Error kinds for the bounded-retry generation loop.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum GenerationErrorKind {
    /// Every attempt failed; carries the classification of the last failure.
    #[display("Generation failed after {} attempts: {}", attempts, last_failure)]
    Exhausted {
        /// Number of attempts performed
        attempts: usize,
        /// Description of the final failure (no response, empty text, ...)
        last_failure: String,
    },
    /// Output hit the token ceiling on the final attempt.
    #[display("Model output truncated at the token limit on all {} attempts", attempts)]
    Truncated {
        /// Number of attempts performed
        attempts: usize,
    },
}

/// Generation error with source location tracking.
///
/// # Examples
///
/// ```
/// use hypatia_error::{GenerationError, GenerationErrorKind};
///
/// let err = GenerationError::new(GenerationErrorKind::Truncated { attempts: 3 });
/// assert!(format!("{}", err).contains("truncated"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Generation Error: {} at line {} in {}", kind, line, file)]
pub struct GenerationError {
    /// The kind of error that occurred
    pub kind: GenerationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new GenerationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
