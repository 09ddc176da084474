use anyhow::Result;
use rusqlite::{params, types::Type};

use super::Database;
use crate::models::{AiMode, Settings};

impl Database {
    /// Get user settings
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails or the stored mode is unknown
    pub fn get_settings(&self) -> Result<Settings> {
        let result = self.conn.query_row(
            "SELECT ai_mode, history_limit FROM settings WHERE id = 1",
            [],
            |row| {
                let mode: String = row.get(0)?;
                let ai_mode = mode.parse::<AiMode>().map_err(|e| {
                    rusqlite::Error::FromSqlConversionFailure(0, Type::Text, Box::new(e))
                })?;
                Ok(Settings {
                    ai_mode,
                    history_limit: row.get(1)?,
                })
            },
        );

        match result {
            Ok(settings) => Ok(settings),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(Settings::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Update user settings
    ///
    /// # Errors
    ///
    /// Returns an error if the database write fails
    pub fn update_settings(&self, settings: &Settings) -> Result<()> {
        self.conn.execute(
            "INSERT INTO settings (id, ai_mode, history_limit)
             VALUES (1, ?1, ?2)
             ON CONFLICT(id) DO UPDATE SET
                ai_mode = excluded.ai_mode,
                history_limit = excluded.history_limit",
            params![settings.ai_mode.as_str(), settings.history_limit],
        )?;
        Ok(())
    }
}
