use serenity::model::id::{ChannelId, GuildId, UserId};
use std::collections::{HashMap, HashSet};

use crate::status::PresenceStatus;

/// Names known locally for a user. Either field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserIdentity {
    pub display_name: Option<String>,
    pub username: Option<String>,
}

/// Read-only view over the client's local caches.
///
/// Every lookup is a snapshot read. Absent data is reported as `None`, `false`
/// or an empty collection rather than an error.
pub trait RosterSource {
    /// Mutual friends of the requesting account.
    fn friend_ids(&self) -> Vec<UserId>;

    fn is_member(&self, guild_id: GuildId, user_id: UserId) -> bool;

    fn presence(&self, user_id: UserId) -> Option<PresenceStatus>;

    /// Users currently connected to `channel_id`.
    fn channel_occupants(&self, channel_id: ChannelId) -> HashSet<UserId>;

    /// Every voice state in a guild, keyed by user.
    fn guild_voice_states(&self, guild_id: GuildId) -> HashMap<UserId, ChannelId>;

    /// The voice channel a user is in anywhere we can see, used when there is no guild context.
    fn user_voice_channel(&self, user_id: UserId) -> Option<ChannelId>;

    fn identity(&self, user_id: UserId) -> Option<UserIdentity>;
}

/// Sink for "request guild members" notifications.
///
/// Delivery is fire-and-forget: there is no completion signal, and callers
/// must cap each call at [`crate::sync::MAX_SYNC_BATCH`] ids.
pub trait MembershipSync {
    fn request_members(&self, guild_id: GuildId, user_ids: &[UserId]);
}
