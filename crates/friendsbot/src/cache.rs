use friendsbot_roster::{MembershipSync, PresenceStatus, RosterSource, UserIdentity};
use poise::serenity_prelude as serenity;
use poise::serenity_prelude::{ChannelId, GuildId, UserId};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// Roster lookups backed by the gateway cache.
///
/// Each call takes and releases its own cache guard, so the roster can be held
/// across the member-sync wait.
pub struct CacheRoster {
    cache: Arc<serenity::Cache>,
    guild_id: Option<GuildId>,
    friends: Vec<UserId>,
}

impl CacheRoster {
    pub fn new(cache: Arc<serenity::Cache>, guild_id: Option<GuildId>, friends: Vec<UserId>) -> Self {
        Self {
            cache,
            guild_id,
            friends,
        }
    }

    fn guild_order(&self) -> Vec<GuildId> {
        invocation_first(self.guild_id, self.cache.guilds())
    }
}

/// The invocation guild first, then everything else we can see.
fn invocation_first(current: Option<GuildId>, cached: Vec<GuildId>) -> Vec<GuildId> {
    let mut guilds: Vec<GuildId> = current.into_iter().collect();
    guilds.extend(cached.into_iter().filter(|g| Some(*g) != current));
    guilds
}

pub fn presence_status(presence: &serenity::Presence) -> PresenceStatus {
    let streaming = presence
        .activities
        .iter()
        .any(|a| a.kind == serenity::ActivityType::Streaming);
    map_status(presence.status, streaming)
}

/// Offline and invisible hide a stream; any other status shows it.
pub fn map_status(status: serenity::OnlineStatus, streaming: bool) -> PresenceStatus {
    match status {
        serenity::OnlineStatus::Offline => PresenceStatus::Offline,
        serenity::OnlineStatus::Invisible => PresenceStatus::Invisible,
        _ if streaming => PresenceStatus::Streaming,
        serenity::OnlineStatus::Online => PresenceStatus::Online,
        serenity::OnlineStatus::Idle => PresenceStatus::Idle,
        serenity::OnlineStatus::DoNotDisturb => PresenceStatus::Dnd,
        _ => PresenceStatus::Unknown,
    }
}

impl RosterSource for CacheRoster {
    fn friend_ids(&self) -> Vec<UserId> {
        self.friends.clone()
    }

    fn is_member(&self, guild_id: GuildId, user_id: UserId) -> bool {
        self.cache
            .guild(guild_id)
            .is_some_and(|g| g.members.contains_key(&user_id))
    }

    fn presence(&self, user_id: UserId) -> Option<PresenceStatus> {
        self.guild_order().into_iter().find_map(|gid| {
            self.cache
                .guild(gid)
                .and_then(|g| g.presences.get(&user_id).map(presence_status))
        })
    }

    fn channel_occupants(&self, channel_id: ChannelId) -> HashSet<UserId> {
        let guilds = match self.guild_id {
            Some(gid) => vec![gid],
            None => self.cache.guilds(),
        };
        let mut occupants = HashSet::new();
        for gid in guilds {
            if let Some(guild) = self.cache.guild(gid) {
                occupants.extend(
                    guild
                        .voice_states
                        .iter()
                        .filter(|(_, vs)| vs.channel_id == Some(channel_id))
                        .map(|(uid, _)| *uid),
                );
            }
        }
        occupants
    }

    fn guild_voice_states(&self, guild_id: GuildId) -> HashMap<UserId, ChannelId> {
        self.cache
            .guild(guild_id)
            .map(|g| {
                g.voice_states
                    .iter()
                    .filter_map(|(uid, vs)| vs.channel_id.map(|c| (*uid, c)))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn user_voice_channel(&self, user_id: UserId) -> Option<ChannelId> {
        self.guild_order().into_iter().find_map(|gid| {
            self.cache
                .guild(gid)
                .and_then(|g| g.voice_states.get(&user_id).and_then(|vs| vs.channel_id))
        })
    }

    fn identity(&self, user_id: UserId) -> Option<UserIdentity> {
        self.cache.user(user_id).map(|u| UserIdentity {
            display_name: u.global_name.clone(),
            username: Some(u.name.clone()),
        })
    }
}

/// Sends Request Guild Members over the invoking shard. Answers arrive later as
/// `GuildMembersChunk` events and land in the cache.
pub struct ShardSync {
    shard: serenity::ShardMessenger,
}

impl ShardSync {
    pub fn new(shard: serenity::ShardMessenger) -> Self {
        Self { shard }
    }
}

impl MembershipSync for ShardSync {
    fn request_members(&self, guild_id: GuildId, user_ids: &[UserId]) {
        self.shard.chunk_guild(
            guild_id,
            None,
            true,
            serenity::ChunkGuildFilter::UserIds(user_ids.to_vec()),
            None,
        );
    }
}
