use std::path::PathBuf;

use crate::error::{config::ConfigError, AppError};

const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_TEMP_DIR: &str = "temp";

/// Application configuration loaded from the environment.
pub struct Config {
    /// Token used to authenticate the bot with the Discord gateway.
    pub discord_bot_token: String,

    /// Directory holding persisted per-guild settings (`liveConfig.json`).
    pub data_dir: PathBuf,

    /// Directory for transient generated files such as QR code images.
    pub temp_dir: PathBuf,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// `DISCORD_BOT_TOKEN` is required. `DATA_DIR` and `TEMP_DIR` are optional
    /// and default to `data/` and `temp/` relative to the working directory.
    ///
    /// # Returns
    /// - `Ok(Config)` - Configuration loaded successfully
    /// - `Err(AppError::ConfigErr)` - A required environment variable is missing
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            discord_bot_token: std::env::var("DISCORD_BOT_TOKEN")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?,
            data_dir: std::env::var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR)),
            temp_dir: std::env::var("TEMP_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_TEMP_DIR)),
        })
    }
}
