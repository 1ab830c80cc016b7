use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::BotId;

/// One bot record. Value type: snapshots crossing the channel boundary are
/// owned clones, never shared references into controller state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Bot {
    pub id: BotId,
    /// Display name, primary sort key.
    pub name: String,
    /// Creation timestamp, secondary sort key.
    pub created: DateTime<Utc>,
    pub favorite: bool,
    pub analytics: BotAnalytics,
    pub culture: Culture,
}

impl Bot {
    pub fn new(name: impl Into<String>, created: DateTime<Utc>) -> Self {
        Self {
            id: BotId::new(),
            name: name.into(),
            created,
            favorite: false,
            analytics: BotAnalytics::default(),
            culture: Culture::default(),
        }
    }
}

/// Usage counters attached to a bot. Read-only from the controller's side.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct BotAnalytics {
    pub message: MessageStats,
    pub user: UserActivity,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MessageStats {
    pub sent: u64,
    pub received: u64,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct UserActivity {
    pub active: u64,
}

/// Locale information for a bot.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Culture {
    /// ISO 639-1 language code, e.g. "en".
    pub language: String,
    /// ISO 3166-1 country code, e.g. "US".
    pub country: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn new_bot_defaults() {
        let created = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let bot = Bot::new("Echo", created);
        assert!(!bot.favorite);
        assert_eq!(bot.analytics.message.sent, 0);
        assert_eq!(bot.analytics.user.active, 0);
        assert!(bot.culture.language.is_empty());
    }

    #[test]
    fn serde_roundtrip() {
        let mut bot = Bot::new("Echo", Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap());
        bot.favorite = true;
        bot.analytics.message.sent = 42;
        bot.culture = Culture {
            language: "pt".into(),
            country: "BR".into(),
        };

        let json = serde_json::to_string(&bot).unwrap();
        let parsed: Bot = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.id, bot.id);
        assert_eq!(parsed.name, "Echo");
        assert!(parsed.favorite);
        assert_eq!(parsed.analytics.message.sent, 42);
        assert_eq!(parsed.culture.language, "pt");
    }
}
