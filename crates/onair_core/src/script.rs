//! Generated script records.

use crate::GenerationSettings;
use serde::{Deserialize, Serialize};

/// The host's closing comment block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostComment {
    /// Line acknowledging the listener's feelings
    pub empathy: String,
    /// Gentle advice for the listener
    pub advice: String,
    /// Sign-off line
    pub outro: String,
}

/// A script exactly as the model returned it, before metadata is attached.
///
/// This is the shape the script response schema declares: everything in
/// [`GeneratedScript`] except the identifier, the settings snapshot, and the
/// timestamp, which the assembler adds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptDraft {
    /// Cold-open hook
    pub opening: String,
    /// Host introduction of the story
    pub intro: String,
    /// Main story body
    pub body: String,
    /// Emotional peak
    pub climax: String,
    /// Resolution
    pub ending: String,
    /// Host's closing comment
    pub comment: HostComment,
    /// Short caption lines for subtitles
    pub captions: Vec<String>,
    /// Thumbnail copy candidates
    pub thumbnails: Vec<String>,
    /// Suggested hashtags
    pub hashtags: Vec<String>,
}

/// A finished, persistable script record.
///
/// Created exactly once per successful script generation and immutable
/// afterward; the sole unit the history repository stores. Embeds a snapshot
/// of the settings rather than a reference, so the user changing settings
/// later never alters stored records.
///
/// # Examples
///
/// ```
/// use onair_core::{
///     AgeGroup, GeneratedScript, GenerationSettings, HostComment, Intensity, ScriptDraft,
///     ScriptFormat, ScriptLength, Tone,
/// };
///
/// let draft = ScriptDraft {
///     opening: "She never locked the door. Until that night.".to_string(),
///     intro: "Tonight's letter comes from a listener in her fifties.".to_string(),
///     body: "Narrator: It started with a phone call.".to_string(),
///     climax: "Daughter: You knew? All along?".to_string(),
///     ending: "The door stays unlocked again.".to_string(),
///     comment: HostComment {
///         empathy: "Anyone would have frozen in that moment.".to_string(),
///         advice: "Say the thing while you still can.".to_string(),
///         outro: "Send us your story. We read every letter.".to_string(),
///     },
///     captions: vec!["She never locked the door".to_string()],
///     thumbnails: vec!["What she found inside".to_string()],
///     hashtags: vec!["#familystory".to_string()],
/// };
///
/// let settings = GenerationSettings {
///     age_group: AgeGroup::Fifties,
///     format: ScriptFormat::RadioStory,
///     length: ScriptLength::FiveToSevenMinutes,
///     tone: Tone::Warm,
///     intensity: Intensity::Realistic,
/// };
///
/// let script = GeneratedScript::from_draft(draft, "a1b2c3".to_string(), settings, 1_700_000_000_000);
/// assert_eq!(script.id, "a1b2c3");
/// assert_eq!(script.settings.tone, Tone::Warm);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedScript {
    /// Opaque unique identifier, unique within one history
    pub id: String,
    /// Cold-open hook
    pub opening: String,
    /// Host introduction of the story
    pub intro: String,
    /// Main story body
    pub body: String,
    /// Emotional peak
    pub climax: String,
    /// Resolution
    pub ending: String,
    /// Host's closing comment
    pub comment: HostComment,
    /// Short caption lines for subtitles
    pub captions: Vec<String>,
    /// Thumbnail copy candidates
    pub thumbnails: Vec<String>,
    /// Suggested hashtags
    pub hashtags: Vec<String>,
    /// Snapshot of the settings used for this generation
    pub settings: GenerationSettings,
    /// Wall-clock creation time, milliseconds since the epoch
    pub timestamp: i64,
}

impl GeneratedScript {
    /// Attach identity, settings snapshot, and timestamp to a draft.
    ///
    /// Pure field plumbing; minting the identifier and reading the clock are
    /// the assembler's job.
    pub fn from_draft(
        draft: ScriptDraft,
        id: String,
        settings: GenerationSettings,
        timestamp: i64,
    ) -> Self {
        Self {
            id,
            opening: draft.opening,
            intro: draft.intro,
            body: draft.body,
            climax: draft.climax,
            ending: draft.ending,
            comment: draft.comment,
            captions: draft.captions,
            thumbnails: draft.thumbnails,
            hashtags: draft.hashtags,
            settings,
            timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AgeGroup, Intensity, ScriptFormat, ScriptLength, Tone};

    fn sample_script() -> GeneratedScript {
        let draft = ScriptDraft {
            opening: "Thirty years of marriage, undone by a grocery receipt.".to_string(),
            intro: "A listener writes in about a secret at the bottom of a shopping bag."
                .to_string(),
            body: "Narrator: Every Tuesday, the same store.\nHusband: It's nothing.".to_string(),
            climax: "Wife: Then whose name is on the card?".to_string(),
            ending: "The receipt stays on the fridge now. As a joke, she says.".to_string(),
            comment: HostComment {
                empathy: "Small things carry whole marriages.".to_string(),
                advice: "Ask the question before it grows teeth.".to_string(),
                outro: "Until tomorrow night.".to_string(),
            },
            captions: vec![
                "A grocery receipt".to_string(),
                "changed everything".to_string(),
            ],
            thumbnails: vec![
                "What the receipt revealed".to_string(),
                "Thirty years, one secret".to_string(),
                "She checked the card name".to_string(),
            ],
            hashtags: vec!["#marriage".to_string(), "#radiostory".to_string()],
        };

        let settings = GenerationSettings {
            age_group: AgeGroup::Sixties,
            format: ScriptFormat::RadioStory,
            length: ScriptLength::TwoToThreeMinutes,
            tone: Tone::Plain,
            intensity: Intensity::Realistic,
        };

        GeneratedScript::from_draft(draft, "k3j2h1g0f".to_string(), settings, 1_722_000_000_123)
    }

    #[test]
    fn persisted_form_round_trips_field_by_field() {
        let script = sample_script();
        let json = serde_json::to_string(&script).unwrap();
        let back: GeneratedScript = serde_json::from_str(&json).unwrap();
        assert_eq!(back, script);
    }

    #[test]
    fn persisted_form_is_flat_with_camel_case_keys() {
        let script = sample_script();
        let value = serde_json::to_value(&script).unwrap();

        assert_eq!(value["id"], "k3j2h1g0f");
        assert_eq!(value["comment"]["empathy"], "Small things carry whole marriages.");
        assert_eq!(value["settings"]["ageGroup"], "60s");
        assert_eq!(value["timestamp"], 1_722_000_000_123_i64);
    }
}
