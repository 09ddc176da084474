//! Database operations split into domain-specific modules.
//!
//! This module re-exports the main Database struct and all its operations.

mod chat_messages;
mod daily_entries;
pub(crate) mod helpers;
mod profile;
mod settings;

use anyhow::{Context, Result};
use rusqlite::Connection;
use std::path::PathBuf;

use crate::migrations;

/// Database connection wrapper
pub struct Database {
    pub(crate) conn: Connection,
}

impl Database {
    /// Create a new database connection
    ///
    /// # Errors
    ///
    /// Returns an error if database directory creation, connection opening, or schema initialization fails
    pub fn new(db_path: Option<PathBuf>) -> Result<Self> {
        let path = db_path.unwrap_or_else(Self::default_db_path);

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create database directory")?;
        }

        let conn = Connection::open(&path).context("Failed to open database connection")?;
        let db = Self::init(conn)?;

        log::info!("Database initialized at: {}", path.display());

        Ok(db)
    }

    /// Open a private in-memory database
    ///
    /// # Errors
    ///
    /// Returns an error if schema initialization fails
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().context("Failed to open in-memory database")?;
        Self::init(conn)
    }

    fn init(conn: Connection) -> Result<Self> {
        migrations::init_schema(&conn)?;
        migrations::insert_default_settings(&conn)?;
        Ok(Self { conn })
    }

    /// Get default database path
    #[must_use]
    pub fn default_db_path() -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("daily-buddy");
        path.push("buddy.db");
        path
    }

    /// Run `f` inside a single transaction, committing only if it succeeds
    ///
    /// # Errors
    ///
    /// Returns the error from `f`, or an error if the transaction cannot be started or committed
    pub fn in_transaction<T>(&self, f: impl FnOnce(&Self) -> Result<T>) -> Result<T> {
        let tx = self
            .conn
            .unchecked_transaction()
            .context("Failed to start transaction")?;
        let value = f(self)?;
        tx.commit().context("Failed to commit transaction")?;
        Ok(value)
    }

    /// Delete every stored row (profile, tracking data, chat history) and reset settings
    ///
    /// # Errors
    ///
    /// Returns an error if any delete fails
    pub fn reset_all(&self) -> Result<()> {
        self.in_transaction(|db| {
            db.conn.execute_batch(
                "DELETE FROM profile;
                 DELETE FROM daily_entries;
                 DELETE FROM chat_messages;
                 DELETE FROM settings;",
            )?;
            migrations::insert_default_settings(&db.conn)?;
            Ok(())
        })?;
        log::info!("All stored data deleted");
        Ok(())
    }
}
