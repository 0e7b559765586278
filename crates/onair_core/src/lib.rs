//! Core data types for the onair script generation workspace.
//!
//! This crate provides the domain records exchanged between the prompt
//! builders, the generation client, and the history repository, plus the
//! response-schema value type sent to the Gemini endpoint.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod request;
mod schema;
mod script;
mod settings;
mod story;
mod title;

pub use request::{GenerateRequest, ModelTier};
pub use schema::{Schema, SchemaType};
pub use script::{GeneratedScript, HostComment, ScriptDraft};
pub use settings::{AgeGroup, GenerationSettings, Intensity, ScriptFormat, ScriptLength, Tone};
pub use story::{AnalysisResult, InputMode, StoryInput};
pub use title::{Emotion, Relationship, TitleGeneratorInput, TitleMode, TitleResult};
