use anyhow::Result;
use rusqlite::{params, OptionalExtension};

use super::helpers::parse_datetime;
use super::Database;
use crate::models::UserProfile;

impl Database {
    /// Get the signed-in user, if any
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub fn get_profile(&self) -> Result<Option<UserProfile>> {
        let profile = self
            .conn
            .query_row(
                "SELECT name, pin, created_at FROM profile WHERE id = 1",
                [],
                |row| {
                    Ok(UserProfile {
                        name: row.get(0)?,
                        pin: row.get(1)?,
                        created_at: parse_datetime(&row.get::<_, String>(2)?)?,
                    })
                },
            )
            .optional()?;
        Ok(profile)
    }

    /// Save the signed-in user, replacing any previous one
    ///
    /// # Errors
    ///
    /// Returns an error if the database write fails
    pub fn save_profile(&self, profile: &UserProfile) -> Result<()> {
        self.conn.execute(
            "INSERT INTO profile (id, name, pin, created_at)
             VALUES (1, ?1, ?2, ?3)
             ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                pin = excluded.pin,
                created_at = excluded.created_at",
            params![profile.name, profile.pin, profile.created_at.to_rfc3339()],
        )?;
        Ok(())
    }

    /// Remove the signed-in user
    ///
    /// # Errors
    ///
    /// Returns an error if the database delete fails
    pub fn delete_profile(&self) -> Result<()> {
        self.conn.execute("DELETE FROM profile", [])?;
        Ok(())
    }
}
