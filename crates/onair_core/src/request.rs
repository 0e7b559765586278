//! Generation request types.

use crate::Schema;
use serde::{Deserialize, Serialize};

/// Which of the two configured models a request should run on.
///
/// Analysis and title generation use the light tier; full script generation
/// uses the heavy tier. The split is a cost/latency trade-off, not a
/// correctness requirement, and both tiers may be configured to the same
/// model identifier.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ModelTier {
    /// Fast, cheap model for analysis and titles
    Light,
    /// Stronger model for full script generation
    Heavy,
}

/// One schema-constrained generation request.
///
/// Prompt builders produce these; a generation driver consumes them. The
/// instruction is the full natural-language prompt, and the schema is the
/// response-shape constraint the endpoint must honor.
///
/// # Examples
///
/// ```
/// use onair_core::{GenerateRequest, ModelTier, Schema};
///
/// let request = GenerateRequest::new(
///     "Classify the following story.".to_string(),
///     Schema::object([("topic", Schema::string())]),
///     ModelTier::Light,
/// );
///
/// assert_eq!(request.tier, ModelTier::Light);
/// assert!(request.model.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_new::new)]
pub struct GenerateRequest {
    /// The natural-language instruction
    pub instruction: String,
    /// The response-shape constraint
    pub schema: Schema,
    /// Which configured model tier to use
    pub tier: ModelTier,
    /// Explicit model identifier, overriding the tier's configured model
    #[new(default)]
    pub model: Option<String>,
    /// Sampling temperature, endpoint default when absent
    #[new(default)]
    pub temperature: Option<f32>,
}
