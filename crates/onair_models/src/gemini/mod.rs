//! Google Gemini generateContent integration.

mod client;
mod dto;

pub use client::{DEFAULT_BASE_URL, GeminiClient, HEAVY_MODEL, LIGHT_MODEL};
pub use dto::{
    Candidate, CandidateBuilder, Content, ContentBuilder, GenerateContentRequest,
    GenerateContentRequestBuilder, GenerateContentResponse, GenerateContentResponseBuilder,
    GenerationConfig, GenerationConfigBuilder, Part, PartBuilder,
};
