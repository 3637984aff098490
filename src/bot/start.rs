use std::sync::Arc;

use serenity::all::{
    ActivityData, Client, Command, Context, EventHandler, GatewayIntents, Interaction, Ready,
};
use serenity::async_trait;

use crate::bot::command;
use crate::config::Config;
use crate::error::AppError;
use crate::state::AppState;

/// Discord gateway event handler.
struct Handler {
    state: Arc<AppState>,
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord.
    ///
    /// Registers the global slash commands and sets the bot's presence.
    /// Registration is idempotent; Discord replaces the previous command set.
    async fn ready(&self, ctx: Context, ready: Ready) {
        tracing::info!("{} is connected to Discord!", ready.user.name);

        ctx.set_activity(Some(ActivityData::custom("/qr | /setlivechannel")));

        if let Err(e) = Command::set_global_commands(&ctx.http, command::registrations()).await {
            tracing::error!("Failed to register slash commands: {}", e);
        }
    }

    /// Called for every interaction; routes command interactions to their
    /// handlers.
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        if let Interaction::Command(cmd) = interaction {
            command::dispatch(&ctx, &self.state, &cmd).await;
        }
    }
}

/// Starts the Discord bot in a blocking manner.
///
/// Builds the gateway client with the shared application state and runs it
/// until shutdown. Slash commands carry their own payloads, so only the GUILDS
/// intent is needed.
///
/// # Arguments
/// - `config` - Application configuration holding the bot token
/// - `state` - Shared state handed to every command invocation
///
/// # Returns
/// - `Ok(())` if the bot runs to a clean shutdown
/// - `Err(AppError)` if client construction or the gateway connection fails
pub async fn start_bot(config: &Config, state: Arc<AppState>) -> Result<(), AppError> {
    let intents = GatewayIntents::GUILDS;

    let handler = Handler { state };

    let mut client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
