use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The bot cannot start without it. `DISCORD_BOT_TOKEN` is the only
    /// required variable; it can be supplied through the environment or a
    /// `.env` file.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
}
