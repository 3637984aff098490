//! Slash command registration and dispatch.
//!
//! Each command module exposes its name, a `register()` builder describing the
//! command to Discord, and a `run()` entry point. `run()` acknowledges the
//! interaction with a deferred reply as its first action and reports its own
//! failures by editing that reply; the dispatcher here only handles errors
//! raised before the interaction was acknowledged, which go out as an initial
//! reply instead. Exactly one of the two reply paths is ever used.

pub mod qr;
pub mod set_live_channel;

use serenity::all::{
    ChannelId, CommandInteraction, Context, CreateCommand, CreateInteractionResponse,
    CreateInteractionResponseMessage,
};

use crate::bot::embed::error_embed;
use crate::state::AppState;

/// All commands registered with Discord on startup.
pub fn registrations() -> Vec<CreateCommand> {
    vec![qr::register(), set_live_channel::register()]
}

/// Routes a command interaction to its handler.
///
/// Any error returned by a handler occurred before the interaction was
/// acknowledged (handlers report post-defer failures themselves), so it is
/// logged and answered with an initial error reply.
pub async fn dispatch(ctx: &Context, state: &AppState, command: &CommandInteraction) {
    let name = command.data.name.as_str();

    let result = match name {
        qr::NAME => qr::run(ctx, state, command).await,
        set_live_channel::NAME => set_live_channel::run(ctx, state, command).await,
        _ => {
            tracing::warn!("Received unknown command /{}", name);
            return;
        }
    };

    if let Err(e) = result {
        tracing::error!("Error executing /{}: {}", name, e);

        let embed = error_embed(format!("Error executing /{}", name), e.to_string());
        let response = CreateInteractionResponse::Message(
            CreateInteractionResponseMessage::new().embed(embed).ephemeral(true),
        );

        if let Err(e) = command.create_response(&ctx.http, response).await {
            tracing::error!("Failed to deliver error reply for /{}: {}", name, e);
        }
    }
}

/// Reports a failure for an already-deferred interaction by editing the reply
/// with an error embed.
///
/// Delivery failures are logged; there is nothing further to fall back to
/// without replying twice.
pub(super) async fn fail_deferred(
    ctx: &Context,
    command: &CommandInteraction,
    title: impl Into<String>,
    detail: impl Into<String>,
) {
    let edit = serenity::all::EditInteractionResponse::new().embed(error_embed(title, detail));

    if let Err(e) = command.edit_response(&ctx.http, edit).await {
        tracing::error!(
            "Failed to deliver error reply for /{}: {}",
            command.data.name,
            e
        );
    }
}

/// Extracts a string option by name from the interaction payload.
fn option_str<'a>(command: &'a CommandInteraction, name: &str) -> Option<&'a str> {
    command
        .data
        .options
        .iter()
        .find(|option| option.name == name)
        .and_then(|option| option.value.as_str())
}

/// Extracts a channel option by name from the interaction payload.
fn option_channel(command: &CommandInteraction, name: &str) -> Option<ChannelId> {
    command
        .data
        .options
        .iter()
        .find(|option| option.name == name)
        .and_then(|option| option.value.as_channel_id())
}
