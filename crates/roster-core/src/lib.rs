pub mod bot;
pub mod ids;
pub mod view;

pub use bot::{Bot, BotAnalytics, Culture, MessageStats, UserActivity};
pub use ids::BotId;
pub use view::{ListMode, ListOrder};
