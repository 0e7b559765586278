//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the onair binary.

mod commands;
mod generate;
mod history;

pub use commands::{Cli, Commands, FilterPreset, HistoryCommands, OutputFormat};
pub use generate::{
    handle_analyze_command, handle_presets_command, handle_script_command, handle_titles_command,
};
pub use history::handle_history_command;
