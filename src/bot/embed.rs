//! Embed builders for command replies.

use serenity::all::{Colour, CreateEmbed};

/// Builds a red error embed with a title and detail message.
pub fn error_embed(title: impl Into<String>, detail: impl Into<String>) -> CreateEmbed {
    CreateEmbed::new()
        .title(title.into())
        .description(detail.into())
        .colour(Colour::RED)
}

/// Builds a green success embed with a title and detail message.
pub fn success_embed(title: impl Into<String>, detail: impl Into<String>) -> CreateEmbed {
    CreateEmbed::new()
        .title(title.into())
        .description(detail.into())
        .colour(Colour::DARK_GREEN)
}
