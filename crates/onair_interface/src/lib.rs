//! Trait definitions for onair generation backends.
//!
//! The orchestration layer talks to the model service only through
//! [`OnairDriver`], so providers can be swapped and tests can substitute a
//! canned backend without touching the callers.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod decode;
mod traits;

pub use decode::decode;
pub use traits::OnairDriver;
