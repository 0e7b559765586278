//! Generation settings and their enumerated option sets.

use serde::{Deserialize, Serialize};

/// Target audience age bracket.
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
pub enum AgeGroup {
    /// Listeners in their thirties
    #[serde(rename = "30s")]
    #[strum(serialize = "30s")]
    Thirties,
    /// Listeners in their forties
    #[serde(rename = "40s")]
    #[strum(serialize = "40s")]
    Forties,
    /// Listeners in their fifties
    #[serde(rename = "50s")]
    #[strum(serialize = "50s")]
    Fifties,
    /// Listeners in their sixties
    #[serde(rename = "60s")]
    #[strum(serialize = "60s")]
    Sixties,
}

/// Broadcast format for the generated script.
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
pub enum ScriptFormat {
    /// Classic listener-letter radio segment
    RadioStory,
    /// Narrated long-form video voiceover
    NarratedVideo,
    /// Host-and-caller counseling talk
    CounselingTalk,
    /// Story that is funny and sad at once
    BittersweetComedy,
    /// Wrongdoer-gets-their-due payoff story
    PoeticJustice,
    /// Family-bond centered story
    FamilyLove,
}

/// Target runtime of the finished script.
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
pub enum ScriptLength {
    /// Twenty seconds
    #[serde(rename = "20s")]
    #[strum(serialize = "20s")]
    TwentySeconds,
    /// Thirty seconds
    #[serde(rename = "30s")]
    #[strum(serialize = "30s")]
    ThirtySeconds,
    /// Forty-five seconds
    #[serde(rename = "45s")]
    #[strum(serialize = "45s")]
    FortyFiveSeconds,
    /// Sixty seconds
    #[serde(rename = "60s")]
    #[strum(serialize = "60s")]
    SixtySeconds,
    /// Two to three minutes
    #[serde(rename = "2-3min")]
    #[strum(serialize = "2-3min")]
    TwoToThreeMinutes,
    /// Five to seven minutes
    #[serde(rename = "5-7min")]
    #[strum(serialize = "5-7min")]
    FiveToSevenMinutes,
    /// Ten minutes
    #[serde(rename = "10min")]
    #[strum(serialize = "10min")]
    TenMinutes,
    /// Fifteen minutes
    #[serde(rename = "15min")]
    #[strum(serialize = "15min")]
    FifteenMinutes,
    /// Thirty minutes
    #[serde(rename = "30min")]
    #[strum(serialize = "30min")]
    ThirtyMinutes,
}

/// Narration tone.
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
pub enum Tone {
    /// Warm and comforting
    Warm,
    /// Calm and understated
    Plain,
    /// Light and witty
    Witty,
    /// Firm and resolute
    Firm,
    /// Openly tearful
    Tearful,
    /// Triumphant payoff register
    Triumphant,
}

/// Emotional intensity of the story treatment.
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
pub enum Intensity {
    /// Soft treatment, conflict kept gentle
    Mild,
    /// True-to-life treatment
    Realistic,
    /// Sharp, high-stakes treatment
    Strong,
}

/// User-selected knobs for one script generation.
///
/// Every field is one value from its fixed option set. A snapshot of the
/// settings is embedded into each [`crate::GeneratedScript`], so later changes
/// never affect stored records.
///
/// # Examples
///
/// ```
/// use onair_core::{AgeGroup, GenerationSettings, Intensity, ScriptFormat, ScriptLength, Tone};
///
/// let settings = GenerationSettings {
///     age_group: AgeGroup::Forties,
///     format: ScriptFormat::RadioStory,
///     length: ScriptLength::TwoToThreeMinutes,
///     tone: Tone::Warm,
///     intensity: Intensity::Realistic,
/// };
///
/// assert_eq!(settings.tone.to_string(), "warm");
/// assert_eq!(settings.length.to_string(), "2-3min");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationSettings {
    /// Target audience age bracket
    pub age_group: AgeGroup,
    /// Broadcast format
    pub format: ScriptFormat,
    /// Target runtime
    pub length: ScriptLength,
    /// Narration tone
    pub tone: Tone,
    /// Emotional intensity
    pub intensity: Intensity,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            age_group: AgeGroup::Forties,
            format: ScriptFormat::RadioStory,
            length: ScriptLength::TwoToThreeMinutes,
            tone: Tone::Warm,
            intensity: Intensity::Realistic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn wire_values_round_trip_through_display_and_from_str() {
        for length in ScriptLength::iter() {
            assert_eq!(ScriptLength::from_str(&length.to_string()).unwrap(), length);
        }
        for tone in Tone::iter() {
            assert_eq!(Tone::from_str(&tone.to_string()).unwrap(), tone);
        }
        assert_eq!(AgeGroup::from_str("40s").unwrap(), AgeGroup::Forties);
        assert_eq!(
            ScriptFormat::from_str("poetic-justice").unwrap(),
            ScriptFormat::PoeticJustice
        );
    }

    #[test]
    fn settings_serialize_with_camel_case_keys() {
        let settings = GenerationSettings {
            age_group: AgeGroup::Fifties,
            format: ScriptFormat::CounselingTalk,
            length: ScriptLength::TenMinutes,
            tone: Tone::Firm,
            intensity: Intensity::Strong,
        };

        let value = serde_json::to_value(&settings).unwrap();
        assert_eq!(value["ageGroup"], "50s");
        assert_eq!(value["format"], "counseling-talk");
        assert_eq!(value["length"], "10min");
        assert_eq!(value["intensity"], "strong");
    }
}
