//! Onair CLI binary.
//!
//! This binary provides command-line access to the script studio:
//! - Generate scored title candidates
//! - Analyze a story premise
//! - Generate full scripts and manage the stored history

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{
        Cli, Commands, handle_analyze_command, handle_history_command, handle_presets_command,
        handle_script_command, handle_titles_command,
    };

    let _ = dotenvy::dotenv();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    // Execute the requested command
    match cli.command {
        Commands::Titles {
            mode,
            category,
            emotion,
            relationship,
            input,
            intensity,
            filter,
            preset,
            output,
        } => {
            handle_titles_command(
                &mode,
                &category,
                &emotion,
                &relationship,
                &input,
                &intensity,
                filter.as_deref(),
                preset,
                output,
            )
            .await?;
        }

        Commands::Analyze {
            mode,
            content,
            keywords,
            characters,
            conflict,
            twist,
            output,
        } => {
            handle_analyze_command(
                &mode, &content, &keywords, &characters, &conflict, &twist, output,
            )
            .await?;
        }

        Commands::Script {
            mode,
            content,
            keywords,
            characters,
            conflict,
            twist,
            age_group,
            format,
            length,
            tone,
            intensity,
            output,
        } => {
            handle_script_command(
                &mode, &content, &keywords, &characters, &conflict, &twist, &age_group, &format,
                &length, &tone, &intensity, output,
            )
            .await?;
        }

        Commands::History(history_cmd) => {
            handle_history_command(history_cmd).await?;
        }

        Commands::Presets { output } => {
            handle_presets_command(output)?;
        }
    }

    Ok(())
}
