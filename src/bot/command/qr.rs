//! The `/qr` command: renders a link as a QR code image.

use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateAttachment, CreateCommand,
    CreateCommandOption, EditInteractionResponse, InstallationContext, Permissions,
};

use crate::error::AppError;
use crate::service::color::resolve_color;
use crate::service::qr::RenderOptions;
use crate::state::AppState;

pub const NAME: &str = "qr";

/// Background used when the user supplies no color, matching the Discord dark
/// theme embed background so the image blends into the reply.
const DEFAULT_BACKGROUND: &str = "#232428";
const DEFAULT_FOREGROUND: &str = "#FFF";

/// Builds the command definition registered with Discord.
pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Generate a QR code from a link")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "link",
                "The link to convert to a QR code",
            )
            .required(true),
        )
        .add_option(CreateCommandOption::new(
            CommandOptionType::String,
            "background",
            "The color of the background",
        ))
        .add_option(CreateCommandOption::new(
            CommandOptionType::String,
            "foreground",
            "The color of the foreground",
        ))
        .dm_permission(true)
        .default_member_permissions(Permissions::SEND_MESSAGES)
        .integration_types(vec![InstallationContext::User])
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
        tracing::error!("Error generating QR code: {}", e);

        let title = match &e {
            AppError::RenderErr(_) => "Error generating QR code".to_string(),
            _ => format!("Error executing /{NAME}"),
        };
        super::fail_deferred(ctx, command, title, e.to_string()).await;
    }

    Ok(())
}

/// Resolves colors, renders the image, and replies with the attachment.
///
/// The artifact is deleted unconditionally once the reply attempt finishes,
/// whether or not it succeeded.
async fn execute(
    ctx: &Context,
    state: &AppState,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let link = super::option_str(command, "link").ok_or(AppError::MissingOption("link"))?;
    let background = super::option_str(command, "background").unwrap_or(DEFAULT_BACKGROUND);
    let foreground = super::option_str(command, "foreground").unwrap_or(DEFAULT_FOREGROUND);

    let options = render_options(background, foreground);

    let artifact = state
        .qr_renderer
        .render(link, &options, command.id.get())
        .await?;

    let reply = attach_artifact(ctx, command, artifact.path()).await;
    artifact.cleanup().await;
    reply?;

    Ok(())
}

/// Builds render options from the user-supplied color tokens.
///
/// Unresolved tokens stay verbatim; the renderer decides whether they are
/// usable color codes. The foreground becomes the QR module (dark) color and
/// the background the light color.
fn render_options(background: &str, foreground: &str) -> RenderOptions {
    RenderOptions {
        dark: resolve_color(foreground).unwrap_or_else(|| foreground.to_string()),
        light: resolve_color(background).unwrap_or_else(|| background.to_string()),
        ..RenderOptions::default()
    }
}

/// Edits the deferred reply to carry the generated image.
async fn attach_artifact(
    ctx: &Context,
    command: &CommandInteraction,
    path: &std::path::Path,
) -> Result<(), AppError> {
    let attachment = CreateAttachment::path(path).await.map_err(Box::new)?;

    command
        .edit_response(
            &ctx.http,
            EditInteractionResponse::new().new_attachment(attachment),
        )
        .await
        .map_err(Box::new)?;

    Ok(())
}
