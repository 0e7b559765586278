//! Gemini provider integration for Onair.
//!
//! This crate provides the REST client that backs every generation call. All
//! requests go through the `generateContent` endpoint in JSON mode: the
//! request carries a response schema, and the endpoint is constrained to
//! produce JSON conforming to it.
//!
//! # Example
//!
//! ```no_run
//! use onair_core::{GenerateRequest, ModelTier, Schema};
//! use onair_interface::OnairDriver;
//! use onair_models::GeminiClient;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeminiClient::new()?;
//! let request = GenerateRequest::new(
//!     "Reply with a JSON object holding one field named ok set to \"yes\".".to_string(),
//!     Schema::object([("ok", Schema::string())]),
//!     ModelTier::Light,
//! );
//! let value = client.generate_json(&request).await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod gemini;

pub use gemini::{
    Candidate, CandidateBuilder, Content, ContentBuilder, DEFAULT_BASE_URL,
    GeminiClient, GenerateContentRequest, GenerateContentRequestBuilder, GenerateContentResponse,
    GenerateContentResponseBuilder, GenerationConfig, GenerationConfigBuilder, HEAVY_MODEL,
    LIGHT_MODEL, Part, PartBuilder,
};
