use std::cmp::Ordering;

use crate::annotate::FriendRecord;
use crate::scope::ScopeFilter;

pub const SYNC_DISCLAIMER: &str =
    "-# ⚠️ Some friends may be missing while server members finish syncing. Run the command again in a moment.";

/// Presence priority, then name ignoring case. Exact name and id settle any tie.
pub fn compare_records(a: &FriendRecord, b: &FriendRecord) -> Ordering {
    a.status
        .priority()
        .cmp(&b.status.priority())
        .then_with(|| a.display_name.to_lowercase().cmp(&b.display_name.to_lowercase()))
        .then_with(|| a.display_name.cmp(&b.display_name))
        .then_with(|| a.id.cmp(&b.id))
}

pub fn format_line(record: &FriendRecord) -> String {
    let location = match record.voice_channel {
        Some(channel) => format!("🎙️ <#{}>", channel.get()),
        None => format!("{} {}", record.status.emoji(), record.status),
    };
    format!("- <@{}>: {}", record.id.get(), location)
}

pub fn render(mut records: Vec<FriendRecord>, scope: ScopeFilter, sync_triggered: bool) -> String {
    records.sort_by(compare_records);

    let mut lines = Vec::with_capacity(records.len() + 2);
    lines.push(format!(
        "## 👥 Mutual Friends {} ({})",
        scope.phrase(),
        records.len()
    ));
    lines.extend(records.iter().map(format_line));
    if sync_triggered {
        lines.push(SYNC_DISCLAIMER.to_string());
    }
    lines.join("\n")
}
