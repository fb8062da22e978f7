//! Builds the `/friends` roster: which mutual friends are where, and what they're up to.

use serenity::model::id::{ChannelId, GuildId, UserId};
use std::collections::HashSet;

pub mod annotate;
pub mod render;
pub mod scope;
pub mod source;
pub mod status;
pub mod sync;

pub use annotate::FriendRecord;
pub use scope::{ScopeError, ScopeFilter, NO_FRIENDS};
pub use source::{MembershipSync, RosterSource, UserIdentity};
pub use status::PresenceStatus;
pub use sync::{RosterOptions, MAX_SYNC_BATCH};

/// Produce the roster text for one command invocation.
///
/// Every outcome, including "no friends" and a missing guild or channel, comes
/// back as a message ready to send. For `Guild` scope this may pause for
/// `options.sync_delay` while uncached members are requested.
pub async fn get_friends_list<S, M>(
    source: &S,
    sink: &M,
    options: &RosterOptions,
    filter: ScopeFilter,
    guild_id: Option<GuildId>,
    channel_id: Option<ChannelId>,
) -> String
where
    S: RosterSource + ?Sized,
    M: MembershipSync + ?Sized,
{
    let mut seen = HashSet::new();
    let friends: Vec<UserId> = source
        .friend_ids()
        .into_iter()
        .filter(|id| seen.insert(*id))
        .collect();
    if friends.is_empty() {
        return NO_FRIENDS.to_string();
    }

    // Account scope looks friends up across every guild instead.
    let guild_voice = match (filter, guild_id) {
        (ScopeFilter::Guild | ScopeFilter::Channel, Some(gid)) => Some(source.guild_voice_states(gid)),
        _ => None,
    };
    let candidates = match scope::resolve_candidates(
        filter,
        &friends,
        guild_id,
        channel_id,
        source,
        guild_voice.as_ref(),
    ) {
        Ok(c) => c,
        Err(e) => return e.to_string(),
    };

    let sync_triggered = match (candidates.scope, guild_id) {
        (ScopeFilter::Guild, Some(gid)) => {
            sync::reconcile(gid, &candidates.unsynced, sink, options).await
        }
        _ => false,
    };

    if candidates.ids.is_empty() {
        return candidates.scope.empty_message().to_string();
    }

    let records = annotate::annotate(&candidates.ids, source, guild_voice.as_ref());
    render::render(records, candidates.scope, sync_triggered)
}
