pub mod db;
pub mod migrations;
pub mod models;

pub use db::Database;
pub use models::{
    AiMode, ChatMessage, ChatRole, DailyData, MessageContext, ParseModelError, Settings,
    UserProfile, DEFAULT_SCORE, MAX_SCORE, MIN_PIN_LEN, MIN_SCORE,
};
