//! Script history persistence for Onair.
//!
//! Generated scripts are kept in a bounded, most-recent-first history so a
//! user can revisit or delete earlier work. The abstraction is a small
//! repository trait with one shipped backend, a single JSON file on disk.
//!
//! # Example
//!
//! ```no_run
//! use onair_storage::{JsonFileHistory, ScriptHistory};
//!
//! # async fn example(script: onair_core::GeneratedScript) -> Result<(), Box<dyn std::error::Error>> {
//! let history = JsonFileHistory::new("/tmp/radio_scripts_history.json");
//! history.load().await?;
//! history.append(script).await?;
//!
//! let entries = history.list().await?;
//! assert!(!entries.is_empty());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use onair_core::GeneratedScript;
use onair_error::OnairResult;

mod json_file;

pub use json_file::JsonFileHistory;
pub use onair_error::{StorageError, StorageErrorKind};

/// Most entries a history will retain.
///
/// Appending past the cap silently drops the oldest entries.
pub const HISTORY_CAP: usize = 50;

/// Repository of previously generated scripts.
///
/// Implementations keep entries ordered most recent first and never retain
/// more than [`HISTORY_CAP`] of them.
#[async_trait::async_trait]
pub trait ScriptHistory: Send + Sync {
    /// Read persisted entries into memory.
    ///
    /// A missing backing store is an empty history, not an error.
    async fn load(&self) -> OnairResult<()>;

    /// All retained entries, most recent first.
    async fn list(&self) -> OnairResult<Vec<GeneratedScript>>;

    /// Prepend a newly generated script, dropping the oldest entries past
    /// [`HISTORY_CAP`], and persist.
    async fn append(&self, script: GeneratedScript) -> OnairResult<()>;

    /// Delete the entry with the given id, if present, and persist.
    ///
    /// Removing an unknown id is a no-op; the surviving entries keep their
    /// order.
    async fn remove(&self, id: &str) -> OnairResult<()>;

    /// Delete every entry and persist.
    async fn clear(&self) -> OnairResult<()>;
}
