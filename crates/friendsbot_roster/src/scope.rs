use serenity::model::id::{ChannelId, GuildId, UserId};
use std::collections::HashMap;
use thiserror::Error;
use tracing::debug;

use crate::source::RosterSource;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ScopeFilter {
    #[default]
    All,
    Guild,
    Channel,
}

impl ScopeFilter {
    /// Phrase used in the roster header.
    pub fn phrase(self) -> &'static str {
        match self {
            Self::All => "on Account",
            Self::Guild => "in Server",
            Self::Channel => "in Voice Channel",
        }
    }

    /// Reply used when the filter leaves nobody.
    pub fn empty_message(self) -> &'static str {
        match self {
            Self::All => NO_FRIENDS,
            Self::Guild => "🔍 No friends found in this server.",
            Self::Channel => "🎙️ No friends found in this voice channel.",
        }
    }
}

pub const NO_FRIENDS: &str = "🌵 You don't have any friends on this account.";

/// A scoped filter was requested without the context it needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScopeError {
    #[error("🏠 Run this command inside a server to list friends in it.")]
    MissingGuild,
    #[error("🔇 Join a voice channel to list the friends in it.")]
    MissingChannel,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Candidates {
    pub scope: ScopeFilter,
    pub ids: Vec<UserId>,
    /// Friends with no cached membership in the scoped guild. Only filled for `Guild`.
    pub unsynced: Vec<UserId>,
}

/// Narrow `friends` down to the requested scope.
///
/// `guild_voice` is the voice snapshot of `guild_id`, fetched once by the caller
/// so the annotator can reuse it.
pub fn resolve_candidates<S: RosterSource + ?Sized>(
    filter: ScopeFilter,
    friends: &[UserId],
    guild_id: Option<GuildId>,
    channel_id: Option<ChannelId>,
    source: &S,
    guild_voice: Option<&HashMap<UserId, ChannelId>>,
) -> Result<Candidates, ScopeError> {
    let candidates = match filter {
        ScopeFilter::All => Candidates {
            scope: filter,
            ids: friends.to_vec(),
            unsynced: Vec::new(),
        },
        ScopeFilter::Guild => {
            let guild_id = guild_id.ok_or(ScopeError::MissingGuild)?;
            let mut ids = Vec::new();
            let mut unsynced = Vec::new();
            for &id in friends {
                let member = source.is_member(guild_id, id);
                if !member {
                    unsynced.push(id);
                }
                let in_voice = guild_voice.is_some_and(|states| states.contains_key(&id));
                if member || in_voice {
                    ids.push(id);
                }
            }
            Candidates {
                scope: filter,
                ids,
                unsynced,
            }
        }
        ScopeFilter::Channel => {
            let channel_id = channel_id.ok_or(ScopeError::MissingChannel)?;
            let occupants = source.channel_occupants(channel_id);
            Candidates {
                scope: filter,
                ids: friends
                    .iter()
                    .copied()
                    .filter(|id| occupants.contains(id))
                    .collect(),
                unsynced: Vec::new(),
            }
        }
    };

    debug!(
        "Resolved {} of {} friends for scope {:?} ({} unsynced)",
        candidates.ids.len(),
        friends.len(),
        filter,
        candidates.unsynced.len()
    );
    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::UserIdentity;
    use crate::status::PresenceStatus;
    use std::collections::HashSet;

    #[derive(Default)]
    struct Members {
        members: HashSet<UserId>,
        occupants: HashSet<UserId>,
    }

    impl RosterSource for Members {
        fn friend_ids(&self) -> Vec<UserId> {
            Vec::new()
        }
        fn is_member(&self, _guild_id: GuildId, user_id: UserId) -> bool {
            self.members.contains(&user_id)
        }
        fn presence(&self, _user_id: UserId) -> Option<PresenceStatus> {
            None
        }
        fn channel_occupants(&self, _channel_id: ChannelId) -> HashSet<UserId> {
            self.occupants.clone()
        }
        fn guild_voice_states(&self, _guild_id: GuildId) -> HashMap<UserId, ChannelId> {
            HashMap::new()
        }
        fn user_voice_channel(&self, _user_id: UserId) -> Option<ChannelId> {
            None
        }
        fn identity(&self, _user_id: UserId) -> Option<UserIdentity> {
            None
        }
    }

    fn users(ids: &[u64]) -> Vec<UserId> {
        ids.iter().map(|&id| UserId::new(id)).collect()
    }

    #[test]
    fn all_keeps_every_friend() {
        let friends = users(&[1, 2, 3]);
        let got = resolve_candidates(ScopeFilter::All, &friends, None, None, &Members::default(), None)
            .unwrap();
        assert_eq!(got.ids, friends);
        assert!(got.unsynced.is_empty());
    }

    #[test]
    fn guild_includes_members_and_voice_only_friends() {
        let friends = users(&[1, 2, 3, 4]);
        let source = Members {
            members: users(&[1, 3]).into_iter().collect(),
            ..Default::default()
        };
        let voice = HashMap::from([(UserId::new(4), ChannelId::new(50))]);

        let got = resolve_candidates(
            ScopeFilter::Guild,
            &friends,
            Some(GuildId::new(9)),
            None,
            &source,
            Some(&voice),
        )
        .unwrap();

        assert_eq!(got.ids, users(&[1, 3, 4]));
        assert_eq!(got.unsynced, users(&[2, 4]));
    }

    #[test]
    fn channel_keeps_only_occupants() {
        let friends = users(&[1, 2, 3]);
        let source = Members {
            occupants: users(&[2, 7]).into_iter().collect(),
            ..Default::default()
        };
        let got = resolve_candidates(
            ScopeFilter::Channel,
            &friends,
            None,
            Some(ChannelId::new(11)),
            &source,
            None,
        )
        .unwrap();
        assert_eq!(got.ids, users(&[2]));
    }

    #[test]
    fn scoped_filters_need_their_context() {
        let friends = users(&[1]);
        let source = Members::default();
        assert_eq!(
            resolve_candidates(ScopeFilter::Guild, &friends, None, Some(ChannelId::new(1)), &source, None),
            Err(ScopeError::MissingGuild)
        );
        assert_eq!(
            resolve_candidates(ScopeFilter::Channel, &friends, Some(GuildId::new(1)), None, &source, None),
            Err(ScopeError::MissingChannel)
        );
    }
}
