//! The `/setlivechannel` command: stores the channel that receives live
//! notifications for the invoking guild.

use serenity::all::{
    ChannelType, CommandInteraction, CommandOptionType, Context, CreateCommand,
    CreateCommandOption, EditInteractionResponse, Permissions,
};

use crate::bot::embed::success_embed;
use crate::error::AppError;
use crate::state::AppState;

pub const NAME: &str = "setlivechannel";

/// Builds the command definition registered with Discord.
///
/// Guild-only; restricted to members who can manage channels. The channel
/// option only offers guild text channels.
pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Set the channel that receives live notifications")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::Channel,
                "channel",
                "The channel to post live notifications in",
            )
            .required(true)
            .channel_types(vec![ChannelType::Text]),
        )
        .dm_permission(false)
        .default_member_permissions(Permissions::MANAGE_CHANNELS)
}

/// Entry point for the command.
///
/// Defers the reply first, then reports any failure of the actual work by
/// editing the deferred reply. Only a pre-defer failure propagates to the
/// dispatcher.
pub async fn run(
    ctx: &Context,
    state: &AppState,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    command.defer(&ctx.http).await.map_err(Box::new)?;

    if let Err(e) = execute(ctx, state, command).await {
        tracing::error!("Error executing /{}: {}", NAME, e);
        super::fail_deferred(ctx, command, format!("Error executing /{NAME}"), e.to_string())
            .await;
    }

    Ok(())
}

/// Upserts the guild's record and confirms with a reply referencing the
/// channel.
async fn execute(
    ctx: &Context,
    state: &AppState,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let guild_id = command.guild_id.ok_or(AppError::GuildOnly)?;
    let channel_id =
        super::option_channel(command, "channel").ok_or(AppError::MissingOption("channel"))?;

    state
        .live_channels
        .upsert(guild_id.get(), channel_id.get())
        .await?;

    tracing::info!(
        "Live notification channel for guild {} set to {}",
        guild_id,
        channel_id
    );

    let embed = success_embed(
        "Success",
        format!("Live notifications channel set to <#{channel_id}>"),
    );

    command
        .edit_response(&ctx.http, EditInteractionResponse::new().embed(embed))
        .await
        .map_err(Box::new)?;

    Ok(())
}
