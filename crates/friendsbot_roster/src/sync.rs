use serenity::model::id::{GuildId, UserId};
use std::time::Duration;
use tracing::info;

use crate::source::MembershipSync;

/// Gateway limit on user ids per member request.
pub const MAX_SYNC_BATCH: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterOptions {
    /// How long to wait after requesting a member sync.
    pub sync_delay: Duration,
    /// Ids per request, clamped to `1..=MAX_SYNC_BATCH`.
    pub sync_batch_size: usize,
}

impl Default for RosterOptions {
    fn default() -> Self {
        RosterOptions {
            sync_delay: Duration::from_secs(1),
            sync_batch_size: MAX_SYNC_BATCH,
        }
    }
}

impl RosterOptions {
    pub fn batch_size(&self) -> usize {
        self.sync_batch_size.clamp(1, MAX_SYNC_BATCH)
    }
}

/// Ask for the members of `guild_id` we have no cached data for, then give the
/// gateway `sync_delay` to answer. Returns whether anything was requested.
///
/// The wait always runs to completion; nothing confirms the sync finished.
pub async fn reconcile<M: MembershipSync + ?Sized>(
    guild_id: GuildId,
    unsynced: &[UserId],
    sink: &M,
    options: &RosterOptions,
) -> bool {
    if unsynced.is_empty() {
        return false;
    }

    let batches = unsynced.chunks(options.batch_size());
    info!(
        "Requesting {} uncached members of guild {} in {} batch(es)",
        unsynced.len(),
        guild_id,
        batches.len()
    );
    for batch in batches {
        sink.request_members(guild_id, batch);
    }

    tokio::time::sleep(options.sync_delay).await;
    true
}
