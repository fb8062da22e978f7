use crate::cache::{CacheRoster, ShardSync};
use crate::utils::{split_message, MESSAGE_LIMIT};
use crate::{relationships, Context, Error};
use friendsbot_roster::{get_friends_list, RosterOptions, ScopeFilter};
use tracing::debug;

#[derive(Debug, Clone, Copy, poise::ChoiceParameter)]
pub enum FriendFilter {
    #[name = "All Mutual Friends"]
    All,
    #[name = "Current Server"]
    Guild,
    #[name = "Current Voice Channel"]
    Channel,
}

impl From<FriendFilter> for ScopeFilter {
    fn from(filter: FriendFilter) -> Self {
        match filter {
            FriendFilter::All => ScopeFilter::All,
            FriendFilter::Guild => ScopeFilter::Guild,
            FriendFilter::Channel => ScopeFilter::Channel,
        }
    }
}

/// List mutual friends and their current location.
#[poise::command(slash_command)]
pub async fn friends(
    ctx: Context<'_>,
    #[description = "Filter friends by location"] filter: Option<FriendFilter>,
    #[description = "Share the list in the current channel"] share: Option<bool>,
) -> Result<(), Error> {
    let filter = filter.map(ScopeFilter::from).unwrap_or_default();
    let share = share.unwrap_or(false);
    let author_id = ctx.author().id;
    let guild_id = ctx.guild_id();
    let voice_channel_id = ctx
        .guild()
        .and_then(|guild| guild.voice_states.get(&author_id).and_then(|vs| vs.channel_id));

    // The member sync can take a moment; acknowledge before Discord gives up on us.
    if share {
        ctx.defer().await?;
    } else {
        ctx.defer_ephemeral().await?;
    }

    let config = ctx.data().config;
    let friend_ids = relationships::mutual_friends(&config.relationships, author_id);
    debug!(
        "/friends for {} with {:?}: {} mutual friends",
        author_id,
        filter,
        friend_ids.len()
    );

    let serenity_ctx = ctx.serenity_context();
    let source = CacheRoster::new(serenity_ctx.cache.clone(), guild_id, friend_ids);
    let sync = ShardSync::new(serenity_ctx.shard.clone());
    let options = RosterOptions {
        sync_delay: config.roster.sync_delay(),
        sync_batch_size: config.roster.sync_batch_size,
    };

    let output = get_friends_list(&source, &sync, &options, filter, guild_id, voice_channel_id).await;

    for message in split_message(&output, MESSAGE_LIMIT) {
        ctx.send(
            poise::CreateReply::default()
                .content(message)
                .ephemeral(!share),
        )
        .await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choices_map_onto_scopes() {
        assert_eq!(ScopeFilter::from(FriendFilter::All), ScopeFilter::All);
        assert_eq!(ScopeFilter::from(FriendFilter::Guild), ScopeFilter::Guild);
        assert_eq!(ScopeFilter::from(FriendFilter::Channel), ScopeFilter::Channel);
    }
}
