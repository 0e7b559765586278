//! Full script generation prompt.

use onair_core::{
    AnalysisResult, GenerateRequest, GenerationSettings, InputMode, ModelTier, Schema, StoryInput,
};

/// Build the script-generation instruction and schema.
///
/// The instruction folds three sources together: the production settings the
/// user picked, the story input itself, and the classification produced by an
/// earlier [`analysis_prompt`](crate::analysis_prompt) call. It targets the
/// heavy model tier.
pub fn script_prompt(
    settings: &GenerationSettings,
    input: &StoryInput,
    analysis: &AnalysisResult,
) -> GenerateRequest {
    let mode_line = match input.mode {
        InputMode::Paste => "a full listener letter, pasted verbatim",
        InputMode::Summary => "a summary of key facts; flesh out the rest plausibly",
        InputMode::Auto => "keywords only; invent a fitting story around them",
    };

    let instruction = format!(
        "You are a veteran radio scriptwriter for an audience in their 30s to 60s.\n\
         Write a complete, broadcast-ready script from the conditions and input below.\n\
         \n\
         [Conditions]\n\
         - Target age group: {age_group}\n\
         - Format: {format}\n\
         - Length: {length}\n\
         - Tone: {tone}\n\
         - Expression intensity: {intensity}\n\
         - Topic: {topic}\n\
         - Emotion curve: {emotion_curve}\n\
         \n\
         [Input data]\n\
         - Input mode: {mode_line}\n\
         - Story: {source}\n\
         - Characters: {characters}\n\
         - Core conflict: {conflict}\n\
         - Reversal or realization: {twist}\n\
         \n\
         [Hard rules]\n\
         1. Mask real names and business names with ○○.\n\
         2. Place sound cues inline where they belong, like [BGM: gentle piano] and \
         [SFX: door closing].\n\
         3. In the body and climax, break the line after every sentence or utterance.\n\
         4. Prefix dialogue with its speaker, like \"Listener: ...\" and \"Other: ...\".\n\
         5. Captions: 8-12 lines, each 12-18 characters.\n\
         6. Thumbnail texts: exactly 3, each a curiosity hook.\n\
         7. Hashtags: around 20.\n",
        age_group = settings.age_group,
        format = settings.format,
        length = settings.length,
        tone = settings.tone,
        intensity = settings.intensity,
        topic = analysis.topic,
        emotion_curve = analysis.emotion_curve,
        source = input.source_text(),
        characters = input.characters,
        conflict = input.conflict,
        twist = input.twist,
    );

    GenerateRequest::new(instruction, script_schema(), ModelTier::Heavy)
}

fn script_schema() -> Schema {
    Schema::object([
        ("opening", Schema::string()),
        ("intro", Schema::string()),
        ("body", Schema::string()),
        ("climax", Schema::string()),
        ("ending", Schema::string()),
        (
            "comment",
            Schema::object([
                ("empathy", Schema::string()),
                ("advice", Schema::string()),
                ("outro", Schema::string()),
            ]),
        ),
        ("captions", Schema::string_array()),
        ("thumbnails", Schema::string_array()),
        ("hashtags", Schema::string_array()),
    ])
}
