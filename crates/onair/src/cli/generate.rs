//! Generation command handlers.

use onair::{
    ConfigError, EMOTION_CURVES, FILTER_CATHARSIS_ONLY, FILTER_TEARS_ONLY, FILTER_TEN_MORE,
    GeminiClient, GenerationSettings, InputMode, JsonError, JsonFileHistory, OnairConfig,
    OnairResult, ScriptHistory, StoryInput, Studio, TOPIC_PRESETS, TitleGeneratorInput,
};
use std::fmt::Display;
use std::str::FromStr;
use strum::IntoEnumIterator;

use super::commands::{FilterPreset, OutputFormat};
use super::history::{format_timestamp, print_script};

/// Parse a closed-option flag value, listing the valid options on failure.
fn parse_option<T>(flag: &str, value: &str) -> OnairResult<T>
where
    T: FromStr + IntoEnumIterator + Display,
{
    if let Ok(parsed) = T::from_str(value) {
        return Ok(parsed);
    }
    let options = T::iter()
        .map(|option| option.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    Err(ConfigError::new(format!(
        "Invalid value '{}' for {} (valid options: {})",
        value, flag, options
    ))
    .into())
}

/// The prompt filter a canned preset stands for.
fn preset_filter(preset: FilterPreset) -> &'static str {
    match preset {
        FilterPreset::Catharsis => FILTER_CATHARSIS_ONLY,
        FilterPreset::Tears => FILTER_TEARS_ONLY,
        FilterPreset::SimilarTone => FILTER_TEN_MORE,
    }
}

/// Build a story input from the shared story flags.
fn parse_story(
    mode: &str,
    content: &str,
    keywords: &[String],
    characters: &str,
    conflict: &str,
    twist: &str,
) -> OnairResult<StoryInput> {
    Ok(StoryInput {
        mode: parse_option("--mode", mode)?,
        content: content.to_string(),
        keywords: keywords.to_vec(),
        characters: characters.to_string(),
        conflict: conflict.to_string(),
        twist: twist.to_string(),
    })
}

/// Build generation settings from the settings flags.
fn parse_settings(
    age_group: &str,
    format: &str,
    length: &str,
    tone: &str,
    intensity: &str,
) -> OnairResult<GenerationSettings> {
    Ok(GenerationSettings {
        age_group: parse_option("--age-group", age_group)?,
        format: parse_option("--format", format)?,
        length: parse_option("--length", length)?,
        tone: parse_option("--tone", tone)?,
        intensity: parse_option("--intensity", intensity)?,
    })
}

/// Exit with a hint when the per-mode input precondition does not hold.
///
/// Generation must never be issued against an input that fails its mode's
/// precondition, so this is checked before any studio call.
fn ensure_ready(story: &StoryInput) {
    if story.ready() {
        return;
    }
    let hint = match story.mode {
        InputMode::Paste => "paste mode requires --content with the full story text",
        InputMode::Summary => "summary mode requires --conflict naming the central conflict",
        InputMode::Auto => "auto mode received incomplete input",
    };
    eprintln!("Error: {}", hint);
    std::process::exit(1);
}

/// Wire a configured Gemini driver to the configured history file.
async fn open_studio() -> OnairResult<Studio<GeminiClient, JsonFileHistory>> {
    let config = OnairConfig::load()?;

    let history = JsonFileHistory::new(config.history_path());
    history.load().await?;

    let driver = GeminiClient::new()?
        .with_base_url(config.base_url)
        .with_models(config.models.light, config.models.heavy);

    Ok(Studio::new(driver, history))
}

/// Handle the titles command.
#[allow(clippy::too_many_arguments)]
pub async fn handle_titles_command(
    mode: &str,
    category: &str,
    emotion: &str,
    relationship: &str,
    input: &str,
    intensity: &str,
    filter: Option<&str>,
    preset: Option<FilterPreset>,
    output: OutputFormat,
) -> OnairResult<()> {
    let input = TitleGeneratorInput {
        mode: parse_option("--mode", mode)?,
        category: category.to_string(),
        emotion: parse_option("--emotion", emotion)?,
        relationship: parse_option("--relationship", relationship)?,
        input: input.to_string(),
        intensity: parse_option("--intensity", intensity)?,
    };
    let override_filter = filter.or(preset.map(preset_filter));

    let studio = open_studio().await?;
    let titles = studio.generate_titles(&input, override_filter).await?;

    match output {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&titles)
                .map_err(|e| JsonError::new(e.to_string()))?;
            println!("{}", json);
        }
        OutputFormat::Human => {
            println!("Title candidates ({}):", titles.len());
            println!("{:-<80}", "");
            for (index, title) in titles.iter().enumerate() {
                println!("{:>2}. [{:>5.1}] {}", index + 1, title.score, title.title);
                println!("    hook: {}  tags: {}", title.hook_type, title.tags.join(" "));
            }
        }
    }

    Ok(())
}

/// Handle the analyze command.
pub async fn handle_analyze_command(
    mode: &str,
    content: &str,
    keywords: &[String],
    characters: &str,
    conflict: &str,
    twist: &str,
    output: OutputFormat,
) -> OnairResult<()> {
    let story = parse_story(mode, content, keywords, characters, conflict, twist)?;
    ensure_ready(&story);

    let studio = open_studio().await?;
    let analysis = studio.analyze(&story).await?;

    match output {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&analysis)
                .map_err(|e| JsonError::new(e.to_string()))?;
            println!("{}", json);
        }
        OutputFormat::Human => {
            println!("Topic:         {}", analysis.topic);
            println!("Relationship:  {}", analysis.relationship);
            println!("Conflict type: {}", analysis.conflict_type);
            println!("Emotion curve: {}", analysis.emotion_curve);
            println!("Safety score:  {:.0}/100", analysis.safety_score);
            if !analysis.risks.is_empty() {
                println!("Risks:");
                for risk in &analysis.risks {
                    println!("  - {}", risk);
                }
            }
        }
    }

    Ok(())
}

/// Handle the script command.
#[allow(clippy::too_many_arguments)]
pub async fn handle_script_command(
    mode: &str,
    content: &str,
    keywords: &[String],
    characters: &str,
    conflict: &str,
    twist: &str,
    age_group: &str,
    format: &str,
    length: &str,
    tone: &str,
    intensity: &str,
    output: OutputFormat,
) -> OnairResult<()> {
    let story = parse_story(mode, content, keywords, characters, conflict, twist)?;
    let settings = parse_settings(age_group, format, length, tone, intensity)?;
    ensure_ready(&story);

    let studio = open_studio().await?;
    let run = studio.generate_script(&settings, &story).await?;

    match output {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&serde_json::json!({
                "analysis": run.analysis,
                "script": run.script,
            }))
            .map_err(|e| JsonError::new(e.to_string()))?;
            println!("{}", json);
        }
        OutputFormat::Human => {
            println!(
                "Stored script {} ({})",
                run.script.id,
                format_timestamp(run.script.timestamp)
            );
            println!(
                "Analysis: {} / {} / {} / safety {:.0}",
                run.analysis.topic,
                run.analysis.conflict_type,
                run.analysis.emotion_curve,
                run.analysis.safety_score
            );
            println!("{:-<80}", "");
            print_script(&run.script);
        }
    }

    Ok(())
}

/// Handle the presets command.
pub fn handle_presets_command(output: OutputFormat) -> OnairResult<()> {
    match output {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&serde_json::json!({
                "topics": TOPIC_PRESETS,
                "emotionCurves": EMOTION_CURVES,
            }))
            .map_err(|e| JsonError::new(e.to_string()))?;
            println!("{}", json);
        }
        OutputFormat::Human => {
            println!("Topic presets:");
            for topic in TOPIC_PRESETS {
                println!("  - {}", topic);
            }
            println!();
            println!("Emotion curves:");
            for curve in EMOTION_CURVES {
                println!("  - {}", curve);
            }
        }
    }

    Ok(())
}
