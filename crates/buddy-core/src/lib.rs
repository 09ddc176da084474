pub mod companion;
pub mod config;
pub mod error;
pub mod state;
pub mod store;

pub use companion::{welcome_message, Companion, Turn};
pub use error::StateError;
pub use state::SessionState;
pub use store::{load_state, save_state, weekly_insights};
