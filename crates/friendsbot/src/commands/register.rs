use crate::{Context, Error};
use tracing::info;

/// Register /friends in this guild or globally (bot owners only)
#[poise::command(prefix_command, rename = "register", owners_only, hide_in_help)]
pub async fn register_commands(ctx: Context<'_>) -> Result<(), Error> {
    info!("{} opened the command registration menu", ctx.author().name);
    poise::builtins::register_application_commands_buttons(ctx).await?;
    Ok(())
}
