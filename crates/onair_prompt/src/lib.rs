//! Prompt builders for the onair script generation workspace.
//!
//! Three pure builders, one per generation operation: story analysis, title
//! generation, and full script generation. Each composes a natural-language
//! instruction together with the response schema the endpoint must honor,
//! bundled as a [`onair_core::GenerateRequest`] carrying the model tier the
//! call should run on.
//!
//! Builders are deterministic given the same inputs (plus the optional
//! override filter for titles) and have no side effects.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analysis;
mod presets;
mod script;
mod title;

pub use analysis::analysis_prompt;
pub use presets::{EMOTION_CURVES, TOPIC_PRESETS};
pub use script::script_prompt;
pub use title::{FILTER_CATHARSIS_ONLY, FILTER_TEARS_ONLY, FILTER_TEN_MORE, title_prompt};
