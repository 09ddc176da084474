pub mod chat;
pub mod config;
pub mod data;
pub mod helpers;
pub mod insights;
pub mod profile;
pub mod session;
pub mod tracking;
