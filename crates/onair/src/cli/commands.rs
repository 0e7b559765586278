//! CLI command definitions.

use clap::{Parser, Subcommand, ValueEnum};

/// Onair - Radio and video script generation studio backed by Gemini
#[derive(Parser, Debug)]
#[command(name = "onair")]
#[command(about = "Radio and video script generation studio backed by Gemini", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate 20 scored title candidates for a story premise
    Titles {
        /// Target surface: shorts or long
        #[arg(long, default_value = "shorts")]
        mode: String,

        /// Topic category (see `onair presets` for the canned list)
        #[arg(long, default_value = "family (marriage, parents, children)")]
        category: String,

        /// Dominant emotion the titles should trade on
        #[arg(long, default_value = "regret")]
        emotion: String,

        /// Relationship at the center of the story
        #[arg(long, default_value = "spouse")]
        relationship: String,

        /// Concrete incident description; blank lets the model invent one
        #[arg(long, default_value = "")]
        input: String,

        /// Emotional intensity: mild, realistic, or strong
        #[arg(long, default_value = "realistic")]
        intensity: String,

        /// Free-text filter narrowing the next batch
        #[arg(long, conflicts_with = "preset")]
        filter: Option<String>,

        /// Canned narrowing filter
        #[arg(long)]
        preset: Option<FilterPreset>,

        /// Output format
        #[arg(long, default_value = "human")]
        output: OutputFormat,
    },

    /// Classify a story by topic, conflict, and emotion curve
    Analyze {
        /// Input mode: paste, summary, or auto
        #[arg(long, default_value = "paste")]
        mode: String,

        /// Full story text (paste mode)
        #[arg(long, default_value = "")]
        content: String,

        /// Comma-separated keywords standing in for full text
        #[arg(long, value_delimiter = ',')]
        keywords: Vec<String>,

        /// Who appears in the story
        #[arg(long, default_value = "")]
        characters: String,

        /// The central conflict (required in summary mode)
        #[arg(long, default_value = "")]
        conflict: String,

        /// The reversal or realization
        #[arg(long, default_value = "")]
        twist: String,

        /// Output format
        #[arg(long, default_value = "human")]
        output: OutputFormat,
    },

    /// Generate a full script and store it in history
    Script {
        /// Input mode: paste, summary, or auto
        #[arg(long, default_value = "paste")]
        mode: String,

        /// Full story text (paste mode)
        #[arg(long, default_value = "")]
        content: String,

        /// Comma-separated keywords standing in for full text
        #[arg(long, value_delimiter = ',')]
        keywords: Vec<String>,

        /// Who appears in the story
        #[arg(long, default_value = "")]
        characters: String,

        /// The central conflict (required in summary mode)
        #[arg(long, default_value = "")]
        conflict: String,

        /// The reversal or realization
        #[arg(long, default_value = "")]
        twist: String,

        /// Target audience age bracket: 30s, 40s, 50s, or 60s
        #[arg(long, default_value = "40s")]
        age_group: String,

        /// Broadcast format, e.g. radio-story or counseling-talk
        #[arg(long, default_value = "radio-story")]
        format: String,

        /// Target runtime, e.g. 60s, 2-3min, or 10min
        #[arg(long, default_value = "2-3min")]
        length: String,

        /// Narration tone, e.g. warm or tearful
        #[arg(long, default_value = "warm")]
        tone: String,

        /// Emotional intensity: mild, realistic, or strong
        #[arg(long, default_value = "realistic")]
        intensity: String,

        /// Output format
        #[arg(long, default_value = "human")]
        output: OutputFormat,
    },

    /// Stored script management commands
    #[command(subcommand)]
    History(HistoryCommands),

    /// Print the canned topic presets and emotion curves
    Presets {
        /// Output format
        #[arg(long, default_value = "human")]
        output: OutputFormat,
    },
}

/// Stored script subcommands
#[derive(Subcommand, Debug)]
pub enum HistoryCommands {
    /// List stored scripts, most recent first
    List {
        /// Maximum number of scripts to display
        #[arg(long, default_value = "20")]
        limit: usize,

        /// Output format
        #[arg(long, default_value = "human")]
        output: OutputFormat,
    },

    /// Show a stored script in full
    Show {
        /// ID of the script
        id: String,

        /// Output format
        #[arg(long, default_value = "human")]
        output: OutputFormat,
    },

    /// Delete a stored script
    Delete {
        /// ID of the script
        id: String,
    },

    /// Delete every stored script
    Clear,
}

/// Output format options
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}

/// Canned title-narrowing filters
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum FilterPreset {
    /// Catharsis-focused payoffs only
    Catharsis,
    /// Tears and warmth only
    Tears,
    /// Ten more in a similar tone
    SimilarTone,
}
