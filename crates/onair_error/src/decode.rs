//! Response decoding error types.

/// Kinds of response decoding failures.
///
/// Raised when a model response cannot be interpreted as the shape the
/// request's schema declared.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum DecodeErrorKind {
    /// Candidate text was not valid JSON
    #[display("Response was not valid JSON: {}", _0)]
    InvalidJson(String),
    /// JSON parsed but did not match the expected record shape
    #[display("Response did not match the {} shape: {}", expected, message)]
    SchemaMismatch {
        /// Name of the expected record type
        expected: &'static str,
        /// Deserializer message
        message: String,
    },
}

/// Decode error with source location tracking.
///
/// # Examples
///
/// ```
/// use onair_error::{DecodeError, DecodeErrorKind};
///
/// let err = DecodeError::new(DecodeErrorKind::InvalidJson("trailing garbage".into()));
/// assert!(format!("{}", err).contains("valid JSON"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Decode Error: {} at line {} in {}", kind, line, file)]
pub struct DecodeError {
    /// The kind of error that occurred
    pub kind: DecodeErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl DecodeError {
    /// Create a new DecodeError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: DecodeErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
