use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct FriendsbotConfig {
    pub discord: DiscordConfig,
    pub sentry: SentryConfig,
    pub roster: RosterConfig,
    // Friend lists keyed by user id. A friendship is mutual once both users list each other.
    pub relationships: HashMap<String, Vec<u64>>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct DiscordConfig {
    // The Discord token for the bot
    pub token: String,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct SentryConfig {
    pub dsn: String,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    // Milliseconds to wait after requesting uncached server members
    pub sync_delay_ms: u64,
    // User ids per member request, the gateway allows at most 100
    pub sync_batch_size: usize,
}

impl Default for RosterConfig {
    fn default() -> Self {
        RosterConfig {
            sync_delay_ms: 1000,
            sync_batch_size: 100,
        }
    }
}

impl RosterConfig {
    pub fn sync_delay(&self) -> Duration {
        Duration::from_millis(self.sync_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let cfg: FriendsbotConfig = toml::from_str("").unwrap();
        assert!(cfg.discord.token.is_empty());
        assert_eq!(cfg.roster.sync_delay(), Duration::from_secs(1));
        assert_eq!(cfg.roster.sync_batch_size, 100);
        assert!(cfg.relationships.is_empty());
    }

    #[test]
    fn reads_relationship_table() {
        let cfg: FriendsbotConfig = toml::from_str(
            r#"
            [discord]
            token = "abc"

            [roster]
            sync_delay_ms = 250

            [relationships]
            "100" = [200, 300]
            "200" = [100]
            "#,
        )
        .unwrap();
        assert_eq!(cfg.discord.token, "abc");
        assert_eq!(cfg.roster.sync_delay_ms, 250);
        assert_eq!(cfg.roster.sync_batch_size, 100);
        assert_eq!(cfg.relationships["100"], vec![200, 300]);
        assert_eq!(cfg.relationships["200"], vec![100]);
    }

    #[test]
    fn non_numeric_friend_ids_are_rejected() {
        let parsed = toml::from_str::<FriendsbotConfig>(
            r#"
            [relationships]
            "100" = ["not-an-id"]
            "#,
        );
        assert!(parsed.is_err());
    }
}
