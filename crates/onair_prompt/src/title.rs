//! Title generation prompt.

use onair_core::{GenerateRequest, ModelTier, Schema, TitleGeneratorInput, TitleMode};

/// Canned override filter: keep only catharsis-flavored payoffs.
pub const FILTER_CATHARSIS_ONLY: &str = "catharsis-focused payoffs only";

/// Canned override filter: keep only tearful, warm titles.
pub const FILTER_TEARS_ONLY: &str = "tears and warmth only";

/// Canned override filter: another batch in the same register.
pub const FILTER_TEN_MORE: &str = "10 more in a similar tone";

/// Build the title-generation instruction and schema.
///
/// Regeneration variants ("narrow to catharsis", "10 more like these") are
/// all this same call with a different `override_filter`; the base prompt
/// never changes shape. When the free-text `input` is blank the instruction
/// directs the model to invent a plausible high-engagement scenario from the
/// category, emotion, and relationship instead of failing.
///
/// # Examples
///
/// ```
/// use onair_core::{Emotion, Intensity, Relationship, TitleGeneratorInput, TitleMode};
/// use onair_prompt::{FILTER_TEN_MORE, title_prompt};
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
/// let request = title_prompt(&input, Some(FILTER_TEN_MORE));
/// assert!(request.instruction.contains("10 more in a similar tone"));
/// ```
pub fn title_prompt(input: &TitleGeneratorInput, override_filter: Option<&str>) -> GenerateRequest {
    let (mode_gloss, mode_rule) = match input.mode {
        TitleMode::Shorts => (
            "shorts (15-60 second clips)",
            "keep titles to 12-22 characters, leading with strong verbs, decisions, reversals",
        ),
        TitleMode::Long => (
            "long-form (3-10 minute uploads)",
            "allow 18-32 characters, with an evocative afterglow of place, relationship, feeling",
        ),
    };

    let core_content = if input.input.trim().is_empty() {
        "no concrete incident given (invent the most resonant, high-conflict scenario implied \
         by the chosen category and relationship)"
            .to_string()
    } else {
        input.input.trim().to_string()
    };

    let filter_line = match override_filter {
        Some(filter) => format!("- Additional filter: {filter}\n"),
        None => String::new(),
    };

    let instruction = format!(
        "You are a title specialist for YouTube and radio content aimed at listeners in their \
         30s to 60s.\n\
         Generate 20 click-worthy title candidates matching the conditions below.\n\
         For every title, also produce the character cast and the reversal or realization that \
         fit its scenario.\n\
         \n\
         [Input]\n\
         - Mode: {mode_gloss}\n\
         - Category: {category}\n\
         - Emotion: {emotion}\n\
         - Relationship: {relationship}\n\
         - Core content: {core_content}\n\
         - Intensity: {intensity}\n\
         {filter_line}\
         \n\
         [Key directive]\n\
         Even when the core content is not concrete, assume the most common yet most-watched \
         conflict that arises from combining the category ({category}), emotion ({emotion}), \
         and relationship ({relationship}), and write titles for that scenario.\n\
         \n\
         [Title algorithm]\n\
         1. Use hook templates: \"Because of one {{remark}}, {{outcome}}\", \"The day \
         {{relation}} {{action}}, I {{decision}}\", \"I said nothing, and still {{reversal}}\", \
         \"After that day, {{relation}} was never the same\".\n\
         2. Mode rule: {mode_rule}\n\
         3. Forbidden: real names and business names (mask with ○○); no profanity.\n\
         \n\
         [Scoring rubric, 0-100]\n\
         - HookPower (30): gripping opening\n\
         - Clarity (25): relationship and incident are unmistakable\n\
         - Emotion (20): emotional pull\n\
         - CuriosityGap (15): reversal or open question\n\
         - LengthFit (10): character count fits the mode\n",
        category = input.category,
        emotion = input.emotion,
        relationship = input.relationship,
        intensity = input.intensity,
    );

    GenerateRequest::new(instruction, title_schema(), ModelTier::Light)
}

fn title_schema() -> Schema {
    Schema::array(Schema::object([
        ("title", Schema::string()),
        ("score", Schema::number()),
        ("tags", Schema::string_array()),
        ("hookType", Schema::string()),
        (
            "characters",
            Schema::string().describe(
                "character cast that fits this title's scenario, \
                 e.g. a mother in her 50s and her job-hunting son",
            ),
        ),
        (
            "twist",
            Schema::string().describe("the scenario's key reversal or realization, one sentence"),
        ),
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use onair_core::{Emotion, Intensity, Relationship};

    fn base_input() -> TitleGeneratorInput {
        TitleGeneratorInput {
            mode: TitleMode::Shorts,
            category: "extended-family conflict".to_string(),
            emotion: Emotion::Catharsis,
            relationship: Relationship::InLaws,
            input: String::new(),
            intensity: Intensity::Strong,
        }
    }

    #[test]
    fn blank_input_directs_the_model_to_synthesize() {
        let request = title_prompt(&base_input(), None);
        assert!(request.instruction.contains("invent the most resonant"));
        assert!(request.instruction.contains("assume the most common"));
        assert!(!request.instruction.contains("leave the title empty"));
    }

    #[test]
    fn concrete_input_is_embedded_instead_of_the_placeholder() {
        let mut input = base_input();
        input.input = "mother-in-law reads my mail".to_string();

        let request = title_prompt(&input, None);
        assert!(request.instruction.contains("mother-in-law reads my mail"));
        assert!(!request.instruction.contains("no concrete incident given"));
    }

    #[test]
    fn overrides_change_only_the_filter_clause() {
        let input = base_input();
        let first = title_prompt(&input, Some(FILTER_CATHARSIS_ONLY));
        let second = title_prompt(&input, Some(FILTER_TEARS_ONLY));

        for request in [&first, &second] {
            assert!(request.instruction.contains("- Mode: shorts"));
            assert!(request.instruction.contains("- Category: extended-family conflict"));
            assert!(request.instruction.contains("- Emotion: catharsis"));
            assert!(request.instruction.contains("- Relationship: in-laws"));
            assert!(request.instruction.contains("- Intensity: strong"));
        }
        assert!(first.instruction.contains(FILTER_CATHARSIS_ONLY));
        assert!(second.instruction.contains(FILTER_TEARS_ONLY));
        assert_eq!(
            first
                .instruction
                .replace(FILTER_CATHARSIS_ONLY, FILTER_TEARS_ONLY),
            second.instruction
        );
    }

    #[test]
    fn no_override_adds_no_filter_line() {
        let request = title_prompt(&base_input(), None);
        assert!(!request.instruction.contains("Additional filter"));
    }

    #[test]
    fn long_mode_switches_the_length_rule() {
        let mut input = base_input();
        input.mode = TitleMode::Long;

        let request = title_prompt(&input, None);
        assert!(request.instruction.contains("18-32 characters"));
        assert!(!request.instruction.contains("12-22 characters"));
    }

    #[test]
    fn schema_is_an_array_of_six_field_objects() {
        let request = title_prompt(&base_input(), None);
        let value = serde_json::to_value(&request.schema).unwrap();

        assert_eq!(value["type"], "ARRAY");
        assert_eq!(
            value["items"]["required"],
            serde_json::json!(["title", "score", "tags", "hookType", "characters", "twist"])
        );
        assert!(
            value["items"]["properties"]["twist"]["description"]
                .as_str()
                .unwrap()
                .contains("one sentence")
        );
    }
}
