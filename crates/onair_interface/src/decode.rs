//! Typed decoding of structured model responses.

use onair_error::{DecodeError, DecodeErrorKind, OnairResult};
use serde::de::DeserializeOwned;

/// Deserialize a structured response into a domain record.
///
/// The endpoint is trusted to honor the response schema, but not blindly:
/// every payload passes through typed deserialization, which rejects missing
/// required fields and mistyped values. `expected` names the shape for error
/// messages.
///
/// # Examples
///
/// ```
/// use onair_core::AnalysisResult;
/// use onair_interface::decode;
/// use serde_json::json;
///
/// let payload = json!({
///     "topic": "family",
///     "relationship": "parent-child",
///     "conflictType": "concealment",
///     "emotionCurve": "conflict-to-reconciliation",
///     "safetyScore": 95,
///     "risks": []
/// });
///
/// let analysis: AnalysisResult = decode(payload, "AnalysisResult").unwrap();
/// assert_eq!(analysis.topic, "family");
/// ```
pub fn decode<T: DeserializeOwned>(
    value: serde_json::Value,
    expected: &'static str,
) -> OnairResult<T> {
    serde_json::from_value(value).map_err(|e| {
        DecodeError::new(DecodeErrorKind::SchemaMismatch {
            expected,
            message: e.to_string(),
        })
        .into()
    })
}
