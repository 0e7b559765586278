//! Title generation input and title candidate records.

use serde::{Deserialize, Serialize};

/// Which surface the titles are meant for.
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
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum TitleMode {
    /// Short vertical clips, 15 to 60 seconds
    Shorts,
    /// Long-form uploads, 3 to 10 minutes
    Long,
}

/// Dominant emotion a title should trade on.
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
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Emotion {
    /// Looking back at what cannot be undone
    Regret,
    /// Open anger
    Anger,
    /// Hollowed-out feeling
    Emptiness,
    /// Being consoled
    Comfort,
    /// A sudden turn
    Reversal,
    /// Satisfying comeuppance
    Catharsis,
    /// Longing for the past
    Nostalgia,
    /// Quiet thankfulness
    Gratitude,
    /// Aggrieved sadness
    Sorrow,
}

/// Relationship at the center of the story.
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
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Relationship {
    /// Husband or wife
    Spouse,
    /// Mother or father
    Parent,
    /// Son or daughter
    Child,
    /// Workplace superior
    Boss,
    /// Workplace peer
    Coworker,
    /// Friend
    Friend,
    /// The spouse's family
    InLaws,
    /// Brother or sister
    Sibling,
    /// Neighbor
    Neighbor,
}

/// Inputs to one title-generation call.
///
/// # Examples
///
/// ```
/// use onair_core::{Emotion, Intensity, Relationship, TitleGeneratorInput, TitleMode};
///
/// let input = TitleGeneratorInput {
///     mode: TitleMode::Shorts,
///     category: "secrets and guilt".to_string(),
///     emotion: Emotion::Reversal,
///     relationship: Relationship::Spouse,
///     input: String::new(),
///     intensity: Intensity::Strong,
/// };
///
/// // A blank free-text input is allowed; the prompt asks the model to
/// // invent a plausible scenario instead.
/// assert!(input.input.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleGeneratorInput {
    /// Target surface
    pub mode: TitleMode,
    /// Topic category, free text (see the preset list in the prompt crate)
    pub category: String,
    /// Dominant emotion
    pub emotion: Emotion,
    /// Central relationship
    pub relationship: Relationship,
    /// Free-text description of the concrete incident, may be blank
    pub input: String,
    /// Emotional intensity
    pub intensity: crate::Intensity,
}

/// One generated title candidate.
///
/// Twenty are requested per call; ordering from the model is preserved and
/// the count is advisory, so callers must not assume exactly twenty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleResult {
    /// The candidate title text
    pub title: String,
    /// Model-assigned score, 0 to 100
    pub score: f64,
    /// Suggested tags
    pub tags: Vec<String>,
    /// Which hook template family the title uses
    pub hook_type: String,
    /// Character cast that fits this title's scenario
    pub characters: String,
    /// The scenario's key reversal or realization, one sentence
    pub twist: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_result_round_trips_with_camel_case_keys() {
        let result = TitleResult {
            title: "I said nothing, and still the truth came out".to_string(),
            score: 91.0,
            tags: vec!["#reversal".to_string(), "#family".to_string()],
            hook_type: "silence-reversal".to_string(),
            characters: "a wife and her husband".to_string(),
            twist: "the neighbor had seen it all".to_string(),
        };

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["hookType"], "silence-reversal");

        let back: TitleResult = serde_json::from_value(value).unwrap();
        assert_eq!(back, result);
    }

    #[test]
    fn relationship_wire_values_are_kebab_case() {
        assert_eq!(Relationship::InLaws.to_string(), "in-laws");
        assert_eq!(
            serde_json::to_value(Relationship::InLaws).unwrap(),
            serde_json::json!("in-laws")
        );
    }
}
