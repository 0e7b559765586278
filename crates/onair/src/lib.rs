//! Onair - Radio Script Generation Studio
//!
//! Onair turns listener stories into broadcast-ready radio and video scripts
//! by orchestrating schema-constrained calls to the Gemini API. It covers the
//! whole loop: title brainstorming, story analysis, full script drafting, and
//! a local history of everything generated.
//!
//! # Features
//!
//! - **Title generation**: 20 scored candidates per call, steerable with
//!   override filters, each carrying the character cast and twist behind it
//! - **Story analysis**: topic, relationship, conflict, emotion curve, and a
//!   publish-safety score for any pasted or summarized story
//! - **Script drafting**: a complete script (opening through host comment,
//!   captions, thumbnails, hashtags) from settings plus story input
//! - **Schema-constrained output**: every call declares a response schema, so
//!   the endpoint returns directly parseable JSON instead of prose
//! - **Local history**: the 50 most recent scripts in a JSON file, ordered
//!   newest first
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use onair::{GeminiClient, JsonFileHistory, ScriptHistory, Studio};
//! use onair::{GenerationSettings, InputMode, StoryInput};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let driver = GeminiClient::new()?;
//!     let history = JsonFileHistory::new("radio_scripts_history.json");
//!     history.load().await?;
//!
//!     let studio = Studio::new(driver, history);
//!
//!     let mut input = StoryInput::empty(InputMode::Summary);
//!     input.conflict = "my sister sold our mother's ring".to_string();
//!
//!     let run = studio
//!         .generate_script(&GenerationSettings::default(), &input)
//!         .await?;
//!     println!("{}", run.script.opening);
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Onair is organized as a workspace with focused crates:
//!
//! - `onair_core` - Domain types (settings, story input, scripts, schemas)
//! - `onair_interface` - The `OnairDriver` trait and response decoding
//! - `onair_error` - Error types
//! - `onair_prompt` - Prompt builders for analysis, titles, and scripts
//! - `onair_models` - The Gemini REST client
//! - `onair_storage` - Script history persistence
//!
//! This crate (`onair`) re-exports everything and ships the CLI binary.

// Re-export the workspace crates
pub use onair_core::*;
pub use onair_error::*;
pub use onair_interface::*;
pub use onair_models::*;
pub use onair_prompt::*;
pub use onair_storage::*;

mod config;
mod studio;

pub use config::{HistoryConfig, ModelConfig, OnairConfig};
pub use studio::{ScriptRun, Studio, assemble};
