//! Stored script command handlers.

use onair::{GeneratedScript, JsonError, JsonFileHistory, OnairConfig, OnairResult, ScriptHistory};

use super::commands::{HistoryCommands, OutputFormat};

/// Handle stored script commands.
pub async fn handle_history_command(cmd: HistoryCommands) -> OnairResult<()> {
    match cmd {
        HistoryCommands::List { limit, output } => list_scripts(limit, output).await,

        HistoryCommands::Show { id, output } => show_script(&id, output).await,

        HistoryCommands::Delete { id } => delete_script(&id).await,

        HistoryCommands::Clear => clear_scripts().await,
    }
}

/// Open the configured history file and pull it into memory.
async fn open_history() -> OnairResult<JsonFileHistory> {
    let config = OnairConfig::load()?;
    let history = JsonFileHistory::new(config.history_path());
    history.load().await?;
    Ok(history)
}

/// List stored scripts, most recent first.
async fn list_scripts(limit: usize, output: OutputFormat) -> OnairResult<()> {
    let history = open_history().await?;
    let scripts = history.list().await?;

    match output {
        OutputFormat::Json => {
            let limited = scripts.iter().take(limit).collect::<Vec<_>>();
            let json = serde_json::to_string_pretty(&limited)
                .map_err(|e| JsonError::new(e.to_string()))?;
            println!("{}", json);
        }
        OutputFormat::Human => {
            println!(
                "{:<38} {:<18} {:<20} {:<8} Opening",
                "ID", "Created", "Format", "Length"
            );
            println!("{:-<110}", "");
            for script in scripts.iter().take(limit) {
                let preview = script.opening.chars().take(36).collect::<String>();
                println!(
                    "{:<38} {:<18} {:<20} {:<8} {}",
                    script.id,
                    format_timestamp(script.timestamp),
                    script.settings.format,
                    script.settings.length,
                    preview
                );
            }
            println!("Total: {} scripts", scripts.len());
        }
    }

    Ok(())
}

/// Show one stored script in full.
async fn show_script(id: &str, output: OutputFormat) -> OnairResult<()> {
    let history = open_history().await?;
    let scripts = history.list().await?;

    match scripts.iter().find(|script| script.id == id) {
        Some(script) => match output {
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(script)
                    .map_err(|e| JsonError::new(e.to_string()))?;
                println!("{}", json);
            }
            OutputFormat::Human => {
                println!("Script {} ({})", script.id, format_timestamp(script.timestamp));
                println!(
                    "Settings: {} / {} / {} / {} / {}",
                    script.settings.age_group,
                    script.settings.format,
                    script.settings.length,
                    script.settings.tone,
                    script.settings.intensity
                );
                println!("{:-<80}", "");
                print_script(script);
            }
        },
        None => {
            eprintln!("No script with id '{}'", id);
            std::process::exit(1);
        }
    }

    Ok(())
}

/// Delete one stored script.
async fn delete_script(id: &str) -> OnairResult<()> {
    let history = open_history().await?;
    let scripts = history.list().await?;

    if !scripts.iter().any(|script| script.id == id) {
        eprintln!("No script with id '{}'", id);
        std::process::exit(1);
    }

    history.remove(id).await?;
    println!("Removed script {}", id);

    Ok(())
}

/// Delete every stored script.
async fn clear_scripts() -> OnairResult<()> {
    let history = open_history().await?;
    let count = history.list().await?.len();

    history.clear().await?;
    println!("Cleared {} scripts", count);

    Ok(())
}

/// Render an epoch-milliseconds timestamp for display.
pub(crate) fn format_timestamp(timestamp: i64) -> String {
    match chrono::DateTime::from_timestamp_millis(timestamp) {
        Some(when) => when.format("%Y-%m-%d %H:%M").to_string(),
        None => "-".to_string(),
    }
}

/// Print a script's sections in reading order.
pub(crate) fn print_script(script: &GeneratedScript) {
    println!("[Opening]");
    println!("{}", script.opening);
    println!();
    println!("[Intro]");
    println!("{}", script.intro);
    println!();
    println!("[Body]");
    println!("{}", script.body);
    println!();
    println!("[Climax]");
    println!("{}", script.climax);
    println!();
    println!("[Ending]");
    println!("{}", script.ending);
    println!();
    println!("[Host comment]");
    println!("{}", script.comment.empathy);
    println!("{}", script.comment.advice);
    println!("{}", script.comment.outro);
    println!();
    println!("[Captions]");
    for caption in &script.captions {
        println!("  {}", caption);
    }
    println!();
    println!("[Thumbnails]");
    for (index, thumbnail) in script.thumbnails.iter().enumerate() {
        println!("  {}. {}", index + 1, thumbnail);
    }
    println!();
    println!("[Hashtags]");
    println!("  {}", script.hashtags.join(" "));
}
