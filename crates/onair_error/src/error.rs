//! Top-level error wrapper types.

use crate::{ConfigError, DecodeError, GeminiError, JsonError, StorageError};

/// Workspace-wide error kinds.
///
/// # Examples
///
/// ```
/// use onair_error::{OnairError, GeminiError, GeminiErrorKind};
///
/// let gemini_err = GeminiError::new(GeminiErrorKind::MissingApiKey);
/// let err: OnairError = gemini_err.into();
/// assert!(format!("{}", err).contains("GEMINI_API_KEY"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum OnairErrorKind {
    /// Gemini endpoint error
    #[from(GeminiError)]
    Gemini(GeminiError),
    /// Response decoding error
    #[from(DecodeError)]
    Decode(DecodeError),
    /// History storage error
    #[from(StorageError)]
    Storage(StorageError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// JSON serialization error
    #[from(JsonError)]
    Json(JsonError),
}

/// Onair error with kind discrimination.
///
/// # Examples
///
/// ```
/// use onair_error::{OnairResult, ConfigError};
///
/// fn might_fail() -> OnairResult<()> {
///     Err(ConfigError::new("missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("success"),
///     Err(e) => println!("error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Onair Error: {}", _0)]
pub struct OnairError(Box<OnairErrorKind>);

impl OnairError {
    /// Create a new error from a kind.
    pub fn new(kind: OnairErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &OnairErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to OnairErrorKind
impl<T> From<T> for OnairError
where
    T: Into<OnairErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for onair operations.
///
/// # Examples
///
/// ```
/// use onair_error::{OnairResult, StorageError, StorageErrorKind};
///
/// fn read_history() -> OnairResult<String> {
///     Err(StorageError::new(StorageErrorKind::FileRead("gone".to_string())))?
/// }
/// ```
pub type OnairResult<T> = std::result::Result<T, OnairError>;
