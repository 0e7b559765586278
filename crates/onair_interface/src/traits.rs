//! Trait definitions for generation backends.

use async_trait::async_trait;
use onair_core::{GenerateRequest, ModelTier};
use onair_error::OnairResult;

/// A backend that can run one schema-constrained generation call.
///
/// The single operation submits the request's instruction with its response
/// schema attached and returns the structured JSON payload the model emitted.
/// Errors are not retried here; any failure aborts the caller's whole
/// generation action.
#[async_trait]
pub trait OnairDriver: Send + Sync {
    /// Generate output conforming to the request's schema.
    async fn generate_json(&self, req: &GenerateRequest) -> OnairResult<serde_json::Value>;

    /// Provider name (e.g. "gemini").
    fn provider_name(&self) -> &'static str;

    /// Model identifier a tier resolves to (e.g. "gemini-3-flash-preview").
    fn model_name(&self, tier: ModelTier) -> &str;
}
