//! TOML-based configuration for the onair CLI.
//!
//! The configuration system supports:
//! - Bundled defaults (include_str! from onair.toml)
//! - User overrides (./onair.toml or ~/.config/onair/onair.toml)
//! - Automatic merging with user values taking precedence

use config::{Config, File, FileFormat};
use onair_error::{ConfigError, OnairError, OnairResult};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, instrument};

/// Model names for each request tier.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ModelConfig {
    /// Model for title generation and story analysis
    pub light: String,

    /// Model for full script drafting
    pub heavy: String,
}

/// Script history storage settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct HistoryConfig {
    /// Path to the history JSON file. Relative paths resolve under the
    /// platform data directory.
    pub path: PathBuf,
}

/// Top-level onair configuration.
///
/// Loads settings from TOML files with a precedence system:
/// 1. Bundled defaults (include_str! from onair.toml)
/// 2. User override (./onair.toml or ~/.config/onair/onair.toml)
///
/// # Example
///
/// ```no_run
/// use onair::OnairConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// // Load configuration (bundled defaults + user overrides)
/// let config = OnairConfig::load()?;
/// println!("light model: {}", config.models.light);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct OnairConfig {
    /// Base URL for the Gemini REST endpoint
    pub base_url: String,

    /// Model names per request tier
    pub models: ModelConfig,

    /// History storage settings
    pub history: HistoryConfig,
}

impl OnairConfig {
    /// Load configuration from a specific file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> OnairResult<Self> {
        debug!("Loading configuration from file");

        Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                OnairError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                OnairError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Load configuration with precedence: user override > bundled default.
    ///
    /// Configuration sources in order of precedence (later sources override earlier):
    /// 1. Bundled defaults (onair.toml shipped with library)
    /// 2. User config in home directory (~/.config/onair/onair.toml)
    /// 3. User config in current directory (./onair.toml)
    ///
    /// User config files are optional and will be silently skipped if not found.
    #[instrument]
    pub fn load() -> OnairResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        // Bundled default configuration
        const DEFAULT_CONFIG: &str = include_str!("../../../onair.toml");

        let mut builder = Config::builder()
            // Start with bundled defaults
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        // Add user config from home directory (optional)
        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/onair/onair.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        // Add user config from current directory (optional, highest precedence)
        builder = builder.add_source(File::with_name("onair").required(false));

        // Build and deserialize
        builder
            .build()
            .map_err(|e| {
                OnairError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                OnairError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Resolve the history file location.
    ///
    /// Absolute paths are returned as given. Relative paths resolve under the
    /// platform data directory (e.g. `~/.local/share/onair/` on Linux),
    /// falling back to the path as given when no data directory exists.
    pub fn history_path(&self) -> PathBuf {
        if self.history.path.is_absolute() {
            return self.history.path.clone();
        }
        match dirs::data_dir() {
            Some(data) => data.join("onair").join(&self.history.path),
            None => self.history.path.clone(),
        }
    }
}
