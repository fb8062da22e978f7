use crate::{Data, Error};
use poise::builtins::on_error as poise_on_error;
use poise::serenity_prelude as serenity;
use poise::FrameworkError;
use tracing::{debug, info};

pub async fn handler(
    _ctx: &serenity::Context,
    event: &serenity::FullEvent,
    _framework: poise::FrameworkContext<'_, Data, Error>,
    _data: &Data,
) -> Result<(), Error> {
    match event {
        // Answers to the member requests sent by /friends
        serenity::FullEvent::GuildMembersChunk { chunk } => {
            debug!(
                "Received {} members for guild {} ({} not found)",
                chunk.members.len(),
                chunk.guild_id,
                chunk.not_found.len()
            );
        }
        serenity::FullEvent::GuildCreate { guild, .. } => {
            info!("Joined Guild {}: {}", guild.id, guild.name);
        }
        _ => {}
    }

    Ok(())
}

pub async fn error_handler<U, E: std::fmt::Display + std::fmt::Debug>(
    error: FrameworkError<'_, U, E>,
) {
    if let Err(e) = poise_on_error(error).await {
        tracing::error!("Error while handling error: {}", e);
    }
}
