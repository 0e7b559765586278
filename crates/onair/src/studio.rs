//! Generation orchestration.

use chrono::Utc;
use onair_core::{
    AnalysisResult, GeneratedScript, GenerationSettings, ScriptDraft, StoryInput,
    TitleGeneratorInput, TitleResult,
};
use onair_error::OnairResult;
use onair_interface::{OnairDriver, decode};
use onair_prompt::{analysis_prompt, script_prompt, title_prompt};
use onair_storage::ScriptHistory;
use tracing::{info, instrument};
use uuid::Uuid;

/// The outcome of one full script generation.
#[derive(Debug, Clone)]
pub struct ScriptRun {
    /// Classification the script was written against
    pub analysis: AnalysisResult,
    /// The finished, already-persisted script record
    pub script: GeneratedScript,
}

/// Attach a fresh identity and the current wall-clock time to a draft.
pub fn assemble(draft: ScriptDraft, settings: GenerationSettings) -> GeneratedScript {
    GeneratedScript::from_draft(
        draft,
        Uuid::new_v4().to_string(),
        settings,
        Utc::now().timestamp_millis(),
    )
}

/// Orchestrates prompt building, generation calls, decoding, and history.
///
/// Each operation is one or two driver calls with typed decoding of the
/// result. Nothing here retries: a failed call surfaces immediately, and
/// history is only touched after a script has fully decoded, so a failed
/// generation leaves prior state exactly as it was.
///
/// Input preconditions (paste mode needs content, summary mode needs a
/// conflict) are the calling surface's job; see [`StoryInput::ready`].
pub struct Studio<D, H> {
    driver: D,
    history: H,
}

impl<D, H> Studio<D, H>
where
    D: OnairDriver,
    H: ScriptHistory,
{
    /// Couple a generation driver with a history repository.
    pub fn new(driver: D, history: H) -> Self {
        Self { driver, history }
    }

    /// The history this studio appends to.
    pub fn history(&self) -> &H {
        &self.history
    }

    /// Classify a story by topic, relationship, conflict, and emotion curve.
    #[instrument(skip(self, input), fields(mode = %input.mode))]
    pub async fn analyze(&self, input: &StoryInput) -> OnairResult<AnalysisResult> {
        let request = analysis_prompt(input);
        let value = self.driver.generate_json(&request).await?;
        decode(value, "AnalysisResult")
    }

    /// Generate 20 scored title candidates.
    ///
    /// Regeneration with a narrowing filter is this same call with an
    /// `override_filter`; see the `FILTER_*` constants for the canned ones.
    #[instrument(skip(self, input, override_filter), fields(mode = %input.mode))]
    pub async fn generate_titles(
        &self,
        input: &TitleGeneratorInput,
        override_filter: Option<&str>,
    ) -> OnairResult<Vec<TitleResult>> {
        let request = title_prompt(input, override_filter);
        let value = self.driver.generate_json(&request).await?;
        let titles: Vec<TitleResult> = decode(value, "TitleResult list")?;
        info!(count = titles.len(), "Generated title candidates");
        Ok(titles)
    }

    /// Run the full pipeline: analyze the story, draft the script against
    /// that analysis, stamp the result, and append it to history.
    ///
    /// The two generation calls run in sequence because the script prompt
    /// embeds the analysis. Counts inside the draft (captions, thumbnails,
    /// hashtags) are stored as returned, not trimmed to the requested counts.
    #[instrument(skip(self, settings, input), fields(mode = %input.mode, tone = %settings.tone))]
    pub async fn generate_script(
        &self,
        settings: &GenerationSettings,
        input: &StoryInput,
    ) -> OnairResult<ScriptRun> {
        let analysis = self.analyze(input).await?;

        let request = script_prompt(settings, input, &analysis);
        let value = self.driver.generate_json(&request).await?;
        let draft: ScriptDraft = decode(value, "ScriptDraft")?;

        let script = assemble(draft, *settings);
        self.history.append(script.clone()).await?;
        info!(id = %script.id, "Generated and stored script");

        Ok(ScriptRun { analysis, script })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use onair_core::{HostComment, Tone};

    fn sample_draft() -> ScriptDraft {
        ScriptDraft {
            opening: "The phone rang at midnight.".to_string(),
            intro: "A letter about a call that changed a family.".to_string(),
            body: "Narrator: Nobody calls at that hour with good news.".to_string(),
            climax: "Listener: It was my brother. After nine years.".to_string(),
            ending: "They talk every Sunday now.".to_string(),
            comment: HostComment {
                empathy: "Nine years is a long silence.".to_string(),
                advice: "Pick up the phone first.".to_string(),
                outro: "Stay with us.".to_string(),
            },
            captions: vec!["Midnight call".to_string()],
            thumbnails: vec!["Who was calling".to_string()],
            hashtags: vec!["#family".to_string()],
        }
    }

    #[test]
    fn assemble_stamps_identity_settings_and_time() {
        let settings = GenerationSettings {
            tone: Tone::Tearful,
            ..GenerationSettings::default()
        };

        let before = Utc::now().timestamp_millis();
        let script = assemble(sample_draft(), settings);
        let after = Utc::now().timestamp_millis();

        assert!(!script.id.is_empty());
        assert_eq!(script.settings.tone, Tone::Tearful);
        assert!(script.timestamp >= before && script.timestamp <= after);
        assert_eq!(script.opening, "The phone rang at midnight.");
    }

    #[test]
    fn assemble_mints_a_distinct_id_per_call() {
        let settings = GenerationSettings::default();
        let first = assemble(sample_draft(), settings);
        let second = assemble(sample_draft(), settings);
        assert_ne!(first.id, second.id);
    }
}
