//! Top-level error wrapper types.

use crate::{
    ConfigError, DocsError, GeminiError, GenerationError, NotifyError, RenderError, ServerError,
};

/// The foundation error enum, one variant per workspace domain.
///
/// # Examples
///
/// ```
/// use hypatia_error::{HypatiaError, ConfigError};
///
/// let cfg_err = ConfigError::new("Missing field");
/// let err: HypatiaError = cfg_err.into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum HypatiaErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Gemini provider error
    #[from(GeminiError)]
    Gemini(GeminiError),
    /// Script generation pipeline error
    #[from(GenerationError)]
    Generation(GenerationError),
    /// Renderer subprocess error
    #[from(RenderError)]
    Render(RenderError),
    /// Notification delivery error
    #[from(NotifyError)]
    Notify(NotifyError),
    /// Documentation cache error
    #[from(DocsError)]
    Docs(DocsError),
    /// HTTP server error
    #[from(ServerError)]
    Server(ServerError),
}

/// Hypatia error with kind discrimination.
///
/// # Examples
///
/// ```
/// use hypatia_error::{HypatiaResult, ConfigError};
///
/// fn might_fail() -> HypatiaResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Hypatia Error: {}", _0)]
pub struct HypatiaError(Box<HypatiaErrorKind>);

impl HypatiaError {
    /// Create a new error from a kind.
    pub fn new(kind: HypatiaErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &HypatiaErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to HypatiaErrorKind
impl<T> From<T> for HypatiaError
where
    T: Into<HypatiaErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Hypatia operations.
pub type HypatiaResult<T> = std::result::Result<T, HypatiaError>;
