use anyhow::Result;
use chrono::{NaiveDate, Utc};
use rusqlite::{params, OptionalExtension, Row};

use super::helpers::{format_date, parse_date, parse_json};
use super::Database;
use crate::models::DailyData;

impl Database {
    /// Get tracking data for a specific date
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails or the row is corrupted
    pub fn get_daily_entry(&self, date: NaiveDate) -> Result<Option<DailyData>> {
        let entry = self
            .conn
            .query_row(
                "SELECT date, mood, productivity, goals, streak
                 FROM daily_entries WHERE date = ?1",
                params![format_date(date)],
                Self::row_to_daily,
            )
            .optional()?;
        Ok(entry)
    }

    /// Get the most recently tracked day
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails or the row is corrupted
    pub fn get_latest_daily_entry(&self) -> Result<Option<DailyData>> {
        let entry = self
            .conn
            .query_row(
                "SELECT date, mood, productivity, goals, streak
                 FROM daily_entries ORDER BY date DESC LIMIT 1",
                [],
                Self::row_to_daily,
            )
            .optional()?;
        Ok(entry)
    }

    /// Get tracked days between `start` and `end` (inclusive), oldest first
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails or a row is corrupted
    pub fn get_daily_entries(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<DailyData>> {
        let mut stmt = self.conn.prepare(
            "SELECT date, mood, productivity, goals, streak
             FROM daily_entries
             WHERE date BETWEEN ?1 AND ?2
             ORDER BY date ASC",
        )?;

        let entries = stmt
            .query_map(
                params![format_date(start), format_date(end)],
                Self::row_to_daily,
            )?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(entries)
    }

    /// Get every tracked day, oldest first
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails or a row is corrupted
    pub fn get_all_daily_entries(&self) -> Result<Vec<DailyData>> {
        let mut stmt = self.conn.prepare(
            "SELECT date, mood, productivity, goals, streak
             FROM daily_entries
             ORDER BY date ASC",
        )?;

        let entries = stmt
            .query_map([], Self::row_to_daily)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(entries)
    }

    /// Insert or replace the tracking data for its date
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the database write fails
    pub fn save_daily_entry(&self, daily: &DailyData) -> Result<()> {
        self.conn.execute(
            "INSERT INTO daily_entries (date, mood, productivity, goals, streak, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)
             ON CONFLICT(date) DO UPDATE SET
                mood = excluded.mood,
                productivity = excluded.productivity,
                goals = excluded.goals,
                streak = excluded.streak,
                updated_at = excluded.updated_at",
            params![
                format_date(daily.date),
                daily.mood,
                daily.productivity,
                serde_json::to_string(&daily.goals)?,
                daily.streak,
                Utc::now().to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    fn row_to_daily(row: &Row<'_>) -> rusqlite::Result<DailyData> {
        Ok(DailyData {
            date: parse_date(&row.get::<_, String>(0)?)?,
            mood: row.get(1)?,
            productivity: row.get(2)?,
            goals: parse_json(&row.get::<_, String>(3)?)?,
            streak: row.get(4)?,
        })
    }
}
