use serenity::model::id::{ChannelId, UserId};
use std::collections::HashMap;

use crate::source::{RosterSource, UserIdentity};
use crate::status::PresenceStatus;

/// One roster entry, built fresh for each command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FriendRecord {
    pub id: UserId,
    pub display_name: String,
    pub status: PresenceStatus,
    pub voice_channel: Option<ChannelId>,
}

/// Display name, then username, then the raw id. Never empty.
pub fn display_name(id: UserId, identity: Option<&UserIdentity>) -> String {
    identity
        .and_then(|i| {
            i.display_name
                .as_deref()
                .filter(|n| !n.trim().is_empty())
                .or_else(|| i.username.as_deref().filter(|n| !n.trim().is_empty()))
        })
        .map(str::to_owned)
        .unwrap_or_else(|| id.get().to_string())
}

/// Build a record per candidate.
///
/// With a guild voice snapshot the voice channel is read from it only; without
/// one each friend is looked up individually.
pub fn annotate<S: RosterSource + ?Sized>(
    candidates: &[UserId],
    source: &S,
    guild_voice: Option<&HashMap<UserId, ChannelId>>,
) -> Vec<FriendRecord> {
    candidates
        .iter()
        .map(|&id| {
            let identity = source.identity(id);
            let voice_channel = match guild_voice {
                Some(states) => states.get(&id).copied(),
                None => source.user_voice_channel(id),
            };
            FriendRecord {
                id,
                display_name: display_name(id, identity.as_ref()),
                status: source.presence(id).unwrap_or_default(),
                voice_channel,
            }
        })
        .collect()
}
