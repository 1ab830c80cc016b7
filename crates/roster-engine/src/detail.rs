use async_trait::async_trait;
use chrono::{DateTime, Datelike, Utc};

use roster_core::{Bot, Culture};

use crate::error::SourceError;

/// Where the detail view gets its single bot from. The provider never talks
/// to the list controller; both just share the record shape.
#[async_trait]
pub trait BotSource: Send + Sync {
    async fn fetch_bot(&self) -> Result<Bot, SourceError>;
}

/// A source that always hands out the same bot. Used by the binary and in
/// tests.
pub struct StaticSource {
    bot: Bot,
}

impl StaticSource {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl BotSource for StaticSource {
    async fn fetch_bot(&self) -> Result<Bot, SourceError> {
        Ok(self.bot.clone())
    }
}

/// Display-ready snapshot of one bot.
#[derive(Clone, Debug)]
pub struct BotDetail {
    pub bot: Bot,
    pub active_users: u64,
    pub received_messages: u64,
    pub sent_messages: u64,
    /// Locale display string derived from the bot's culture.
    pub language: String,
}

/// Fetches one bot on setup and derives its display fields.
pub struct DetailProvider<S> {
    source: S,
}

impl<S: BotSource> DetailProvider<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub async fn setup(&self) -> Result<BotDetail, SourceError> {
        let bot = self.source.fetch_bot().await?;
        Ok(BotDetail {
            active_users: bot.analytics.user.active,
            received_messages: bot.analytics.message.received,
            sent_messages: bot.analytics.message.sent,
            language: language_display(&bot.culture),
            bot,
        })
    }
}

/// Renders a creation timestamp as `Created at D/M/YYYY` — UTC day of month,
/// 1-indexed month, full year, no zero padding.
pub fn display_created(created: &DateTime<Utc>) -> String {
    format!(
        "Created at {}/{}/{}",
        created.day(),
        created.month(),
        created.year()
    )
}

/// English name for the culture's language code; unknown codes fall back to
/// the raw code.
pub fn language_display(culture: &Culture) -> String {
    match culture.language.as_str() {
        "de" => "German",
        "en" => "English",
        "es" => "Spanish",
        "fr" => "French",
        "it" => "Italian",
        "ja" => "Japanese",
        "nl" => "Dutch",
        "pt" => "Portuguese",
        other => other,
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use roster_core::{BotAnalytics, MessageStats, UserActivity};

    fn sample_bot() -> Bot {
        let mut bot = Bot::new("Echo", Utc.with_ymd_and_hms(2024, 3, 7, 18, 30, 0).unwrap());
        bot.analytics = BotAnalytics {
            message: MessageStats {
                sent: 120,
                received: 87,
            },
            user: UserActivity { active: 15 },
        };
        bot.culture = Culture {
            language: "pt".into(),
            country: "BR".into(),
        };
        bot
    }

    #[tokio::test]
    async fn setup_derives_display_fields() {
        let provider = DetailProvider::new(StaticSource::new(sample_bot()));
        let detail = provider.setup().await.unwrap();

        assert_eq!(detail.bot.name, "Echo");
        assert_eq!(detail.active_users, 15);
        assert_eq!(detail.received_messages, 87);
        assert_eq!(detail.sent_messages, 120);
        assert_eq!(detail.language, "Portuguese");
    }

    #[tokio::test]
    async fn setup_propagates_source_failure() {
        struct DownSource;

        #[async_trait]
        impl BotSource for DownSource {
            async fn fetch_bot(&self) -> Result<Bot, SourceError> {
                Err(SourceError::Unavailable("maintenance".into()))
            }
        }

        let provider = DetailProvider::new(DownSource);
        assert!(provider.setup().await.is_err());
    }

    #[test]
    fn display_created_has_no_zero_padding() {
        let date = Utc.with_ymd_and_hms(2024, 3, 7, 18, 30, 0).unwrap();
        assert_eq!(display_created(&date), "Created at 7/3/2024");
    }

    #[test]
    fn display_created_month_is_one_indexed() {
        let date = Utc.with_ymd_and_hms(2023, 1, 31, 0, 0, 0).unwrap();
        assert_eq!(display_created(&date), "Created at 31/1/2023");
    }

    #[test]
    fn display_created_uses_utc_fields() {
        // 23:30 UTC on the 9th stays the 9th regardless of any local zone.
        let date = Utc.with_ymd_and_hms(2024, 12, 9, 23, 30, 0).unwrap();
        assert_eq!(display_created(&date), "Created at 9/12/2024");
    }

    #[test]
    fn language_display_fallback_is_raw_code() {
        let culture = Culture {
            language: "tlh".into(),
            country: "".into(),
        };
        assert_eq!(language_display(&culture), "tlh");
    }
}
