//! Error types for the application.
//!
//! This module provides the application's error hierarchy. The `AppError` enum is
//! the top-level error type that wraps domain-specific errors (configuration,
//! persistence, QR rendering, Discord API). All command handlers return `AppError`
//! and the command dispatcher converts any escaped error into a user-visible
//! error embed, so no fault propagates far enough to crash the process.

pub mod config;
pub mod render;
pub mod store;

use thiserror::Error;

use crate::error::{config::ConfigError, render::RenderError, store::StoreError};

/// Top-level application error type.
///
/// Aggregates all error types that can occur while handling a command or starting
/// the bot. Most variants use `#[from]` for automatic conversion.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Failure while loading or saving the live channel configuration file.
    ///
    /// Rendered to the user as a generic command failure.
    #[error(transparent)]
    StoreErr(#[from] StoreError),

    /// Failure while rendering a QR code image.
    ///
    /// Rendered to the user with the underlying encoder message.
    #[error(transparent)]
    RenderErr(#[from] RenderError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size. Covers gateway startup, interaction responses,
    /// and attachment uploads.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// A required command option was missing from the interaction payload.
    ///
    /// Discord validates required options before delivering the interaction, so
    /// this indicates a registration/payload mismatch rather than user error. It
    /// degrades to a generic command failure instead of crashing the handler.
    #[error("Missing required option '{0}'")]
    MissingOption(&'static str),

    /// A guild-only command was invoked without a guild context.
    #[error("This command can only be used in a server")]
    GuildOnly,
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
