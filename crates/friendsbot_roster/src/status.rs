/// A friend's presence as shown in the roster.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PresenceStatus {
    Online,
    Streaming,
    Idle,
    Dnd,
    Offline,
    Invisible,
    #[default]
    Unknown,
}

impl PresenceStatus {
    pub const ALL: [PresenceStatus; 7] = [
        PresenceStatus::Online,
        PresenceStatus::Streaming,
        PresenceStatus::Idle,
        PresenceStatus::Dnd,
        PresenceStatus::Offline,
        PresenceStatus::Invisible,
        PresenceStatus::Unknown,
    ];

    /// Sort rank, lowest first. `Unknown` always sorts last.
    pub fn priority(self) -> u8 {
        match self {
            Self::Online => 0,
            Self::Streaming => 1,
            Self::Idle => 2,
            Self::Dnd => 3,
            Self::Offline => 4,
            Self::Invisible => 5,
            Self::Unknown => 6,
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Self::Online => "🟢",
            Self::Streaming => "🟣",
            Self::Idle => "🟡",
            Self::Dnd => "🔴",
            Self::Offline | Self::Invisible => "⚫",
            Self::Unknown => "⚪",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Streaming => "streaming",
            Self::Idle => "idle",
            Self::Dnd => "dnd",
            Self::Offline => "offline",
            Self::Invisible => "invisible",
            Self::Unknown => "unknown",
        }
    }
}

// Anything we don't recognise lands in the `Unknown` bucket.
impl From<&str> for PresenceStatus {
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "online" => Self::Online,
            "streaming" => Self::Streaming,
            "idle" => Self::Idle,
            "dnd" => Self::Dnd,
            "offline" => Self::Offline,
            "invisible" => Self::Invisible,
            _ => Self::Unknown,
        }
    }
}

impl std::fmt::Display for PresenceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(match self {
            Self::Online => "Online",
            Self::Streaming => "Streaming",
            Self::Idle => "Idle",
            Self::Dnd => "Dnd",
            Self::Offline => "Offline",
            Self::Invisible => "Invisible",
            Self::Unknown => "Unknown",
        })
    }
}
