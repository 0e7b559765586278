//! Story input and story analysis records.

use crate::TitleResult;
use serde::{Deserialize, Serialize};

/// How the user supplied their story premise.
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
pub enum InputMode {
    /// Full story text pasted in; `content` must be non-empty
    Paste,
    /// Short summary fields; `conflict` must be non-empty
    Summary,
    /// Nothing concrete supplied; the model invents a premise from keywords
    Auto,
}

/// The user's story premise.
///
/// Mutated freely before submission; copied when handed to a prompt builder.
/// Precondition checks (paste needs `content`, summary needs `conflict`) are
/// the caller's job, enforced before any generation call is issued.
///
/// # Examples
///
/// ```
/// use onair_core::{InputMode, StoryInput};
///
/// let input = StoryInput {
///     mode: InputMode::Summary,
///     content: String::new(),
///     keywords: vec!["retirement".to_string(), "regret".to_string()],
///     characters: "a father and his daughter".to_string(),
///     conflict: "he sold her piano without asking".to_string(),
///     twist: "she had been saving to sell it for his surgery".to_string(),
/// };
///
/// assert!(input.ready());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryInput {
    /// How the premise was supplied
    pub mode: InputMode,
    /// Full story text (paste mode)
    pub content: String,
    /// Loose keywords standing in for full text
    pub keywords: Vec<String>,
    /// Who appears in the story
    pub characters: String,
    /// The central conflict
    pub conflict: String,
    /// The reversal or realization
    pub twist: String,
}

impl StoryInput {
    /// Empty input in the given mode.
    pub fn empty(mode: InputMode) -> Self {
        Self {
            mode,
            content: String::new(),
            keywords: Vec::new(),
            characters: String::new(),
            conflict: String::new(),
            twist: String::new(),
        }
    }

    /// The source text a prompt should embed: the pasted content, or the
    /// comma-joined keywords when content is empty.
    pub fn source_text(&self) -> String {
        if self.content.is_empty() {
            self.keywords.join(", ")
        } else {
            self.content.clone()
        }
    }

    /// Whether the per-mode precondition for generation holds.
    pub fn ready(&self) -> bool {
        match self.mode {
            InputMode::Paste => !self.content.trim().is_empty(),
            InputMode::Summary => !self.conflict.trim().is_empty(),
            InputMode::Auto => true,
        }
    }

    /// Seed this input from a chosen title candidate.
    ///
    /// The candidate's title becomes the conflict, its characters and twist
    /// carry over, and the mode switches to summary. Content and keywords are
    /// kept so the user loses nothing they typed.
    pub fn apply_title(&mut self, title: &TitleResult) {
        self.mode = InputMode::Summary;
        self.conflict = title.title.clone();
        self.characters = title.characters.clone();
        self.twist = title.twist.clone();
    }
}

/// Classification of a story produced by the analysis call.
///
/// Produced once per generation request and consumed only as input to script
/// generation; never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Broad topic of the story
    pub topic: String,
    /// The relationship at the center of it
    pub relationship: String,
    /// What kind of conflict drives it
    pub conflict_type: String,
    /// Shape of the emotional arc
    pub emotion_curve: String,
    /// How safe the story is to publish, 0 to 100
    pub safety_score: f64,
    /// Flagged risks, such as personally identifying details
    pub risks: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary_input() -> StoryInput {
        StoryInput {
            mode: InputMode::Summary,
            content: String::new(),
            keywords: Vec::new(),
            characters: "two old coworkers".to_string(),
            conflict: "one took credit for the other's work".to_string(),
            twist: "the manager knew all along".to_string(),
        }
    }

    #[test]
    fn source_text_prefers_content_over_keywords() {
        let mut input = summary_input();
        input.keywords = vec!["promotion".to_string(), "betrayal".to_string()];
        assert_eq!(input.source_text(), "promotion, betrayal");

        input.content = "the full story text".to_string();
        assert_eq!(input.source_text(), "the full story text");
    }

    #[test]
    fn readiness_follows_mode_preconditions() {
        let mut paste = StoryInput::empty(InputMode::Paste);
        assert!(!paste.ready());
        paste.content = "pasted story".to_string();
        assert!(paste.ready());

        let mut summary = StoryInput::empty(InputMode::Summary);
        assert!(!summary.ready());
        summary.conflict = "a broken promise".to_string();
        assert!(summary.ready());

        assert!(StoryInput::empty(InputMode::Auto).ready());
    }

    #[test]
    fn apply_title_rewrites_summary_fields_only() {
        let mut input = summary_input();
        input.content = "typed text stays".to_string();

        let candidate = TitleResult {
            title: "The day my boss went quiet".to_string(),
            score: 88.0,
            tags: vec!["#office".to_string()],
            hook_type: "reversal".to_string(),
            characters: "a boss and a new hire".to_string(),
            twist: "the new hire had recorded everything".to_string(),
        };

        input.apply_title(&candidate);
        assert_eq!(input.mode, InputMode::Summary);
        assert_eq!(input.conflict, candidate.title);
        assert_eq!(input.characters, candidate.characters);
        assert_eq!(input.twist, candidate.twist);
        assert_eq!(input.content, "typed text stays");
    }

    #[test]
    fn analysis_round_trips_with_camel_case_keys() {
        let analysis = AnalysisResult {
            topic: "family".to_string(),
            relationship: "parent-child".to_string(),
            conflict_type: "concealment".to_string(),
            emotion_curve: "conflict-to-reconciliation".to_string(),
            safety_score: 95.0,
            risks: vec![],
        };

        let value = serde_json::to_value(&analysis).unwrap();
        assert_eq!(value["conflictType"], "concealment");
        assert_eq!(value["emotionCurve"], "conflict-to-reconciliation");
        assert_eq!(value["safetyScore"], 95.0);

        let back: AnalysisResult = serde_json::from_value(value).unwrap();
        assert_eq!(back, analysis);
    }
}
