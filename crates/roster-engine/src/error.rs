use thiserror::Error;

/// Errors surfaced by a [`BotSource`](crate::detail::BotSource).
///
/// The controller itself raises nothing: its documented edge cases
/// (double-initialize, favorite toggle on an absent bot, empty search,
/// unmapped order) degrade to defined no-ops.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("bot source unavailable: {0}")]
    Unavailable(String),
    #[error("no bot found for {0}")]
    NotFound(String),
}
