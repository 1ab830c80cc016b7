pub mod controller;
pub mod detail;
pub mod error;

pub use controller::RosterController;
pub use detail::{display_created, BotDetail, BotSource, DetailProvider, StaticSource};
pub use error::SourceError;
