//! Error types for the onair workspace.
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines the specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - Constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use onair_error::{OnairResult, ConfigError};
//!
//! fn load_setting() -> OnairResult<String> {
//!     Err(ConfigError::new("missing history path"))?
//! }
//!
//! match load_setting() {
//!     Ok(v) => println!("got {}", v),
//!     Err(e) => eprintln!("error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod decode;
mod error;
mod gemini;
mod json;
mod storage;

pub use config::ConfigError;
pub use decode::{DecodeError, DecodeErrorKind};
pub use error::{OnairError, OnairErrorKind, OnairResult};
pub use gemini::{GeminiError, GeminiErrorKind};
pub use json::JsonError;
pub use storage::{StorageError, StorageErrorKind};
