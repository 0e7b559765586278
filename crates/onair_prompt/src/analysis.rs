//! Story analysis prompt.

use onair_core::{GenerateRequest, InputMode, ModelTier, Schema, StoryInput};

/// Build the analysis instruction and schema for a story premise.
///
/// The instruction embeds the pasted story text or, when that is empty, the
/// comma-joined keywords, with the conflict and twist fields as supplementary
/// context. The schema pins the six-field analysis shape, so the response
/// parses directly into [`onair_core::AnalysisResult`].
///
/// # Examples
///
/// ```
/// use onair_core::{InputMode, ModelTier, StoryInput};
/// use onair_prompt::analysis_prompt;
///
/// let mut input = StoryInput::empty(InputMode::Paste);
/// input.content = "My brother borrowed money and vanished for three years.".to_string();
///
/// let request = analysis_prompt(&input);
/// assert!(request.instruction.contains("vanished for three years"));
/// assert_eq!(request.tier, ModelTier::Light);
/// ```
pub fn analysis_prompt(input: &StoryInput) -> GenerateRequest {
    let framing = match input.mode {
        InputMode::Paste => "The story below is the listener's full letter.",
        InputMode::Summary => {
            "The story below is a summary of key facts; infer the rest conservatively."
        }
        InputMode::Auto => "No concrete story was given; treat the keywords as the premise.",
    };

    let instruction = format!(
        "Classify the following listener story by topic, relationship, conflict type, and \
         emotion curve.\n\
         If it contains personally identifying details (real names, phone numbers, specific \
         places), list each one as a risk and lower the safety score accordingly.\n\
         {framing}\n\
         \n\
         Story: {source}\n\
         Supplementary context: {conflict}, {twist}\n",
        source = input.source_text(),
        conflict = input.conflict,
        twist = input.twist,
    );

    GenerateRequest::new(instruction, analysis_schema(), ModelTier::Light)
}

fn analysis_schema() -> Schema {
    Schema::object([
        ("topic", Schema::string()),
        ("relationship", Schema::string()),
        ("conflictType", Schema::string()),
        ("emotionCurve", Schema::string()),
        ("safetyScore", Schema::number()),
        ("risks", Schema::string_array()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pasted_content_appears_verbatim() {
        let mut input = StoryInput::empty(InputMode::Paste);
        input.content =
            "After thirty years at the plant, they let him go with a text message.".to_string();
        input.conflict = "dismissal without warning".to_string();
        input.twist = "his daughter worked in the HR department".to_string();

        let request = analysis_prompt(&input);
        assert!(request.instruction.contains(&input.content));
        assert!(request.instruction.contains("dismissal without warning"));
        assert!(request.instruction.contains("HR department"));
    }

    #[test]
    fn empty_content_falls_back_to_comma_joined_keywords() {
        let mut input = StoryInput::empty(InputMode::Auto);
        input.keywords = vec![
            "retirement".to_string(),
            "empty house".to_string(),
            "old letters".to_string(),
        ];

        let request = analysis_prompt(&input);
        assert!(request
            .instruction
            .contains("retirement, empty house, old letters"));
    }

    #[test]
    fn schema_requires_all_six_fields() {
        let request = analysis_prompt(&StoryInput::empty(InputMode::Summary));
        let value = serde_json::to_value(&request.schema).unwrap();
        assert_eq!(
            value["required"],
            serde_json::json!([
                "topic",
                "relationship",
                "conflictType",
                "emotionCurve",
                "safetyScore",
                "risks"
            ])
        );
        assert_eq!(value["properties"]["safetyScore"]["type"], "NUMBER");
    }

    #[test]
    fn uses_the_light_tier() {
        let request = analysis_prompt(&StoryInput::empty(InputMode::Paste));
        assert_eq!(request.tier, ModelTier::Light);
    }
}
