use anyhow::Result;
use rusqlite::{params, types::Type, Row};

use super::helpers::{parse_datetime, parse_json, parse_uuid};
use super::Database;
use crate::models::{ChatMessage, ChatRole};

impl Database {
    /// Append a message to the chat history
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the database insert fails
    pub fn insert_message(&self, message: &ChatMessage) -> Result<()> {
        let context = message
            .context
            .as_ref()
            .map(serde_json::to_string)
            .transpose()?;
        self.conn.execute(
            "INSERT OR REPLACE INTO chat_messages (id, role, content, timestamp, context)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                message.id.to_string(),
                message.role.as_str(),
                message.content,
                message.timestamp.to_rfc3339(),
                context,
            ],
        )?;
        Ok(())
    }

    /// Get the full chat history, oldest first
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails or a row is corrupted
    pub fn get_messages(&self) -> Result<Vec<ChatMessage>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, role, content, timestamp, context
             FROM chat_messages
             ORDER BY timestamp ASC, rowid ASC",
        )?;

        let messages = stmt
            .query_map([], Self::row_to_message)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(messages)
    }

    /// Get the `limit` most recent messages, oldest first
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails or a row is corrupted
    pub fn get_recent_messages(&self, limit: u32) -> Result<Vec<ChatMessage>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, role, content, timestamp, context FROM (
                SELECT rowid AS seq, id, role, content, timestamp, context
                FROM chat_messages
                ORDER BY timestamp DESC, rowid DESC
                LIMIT ?1
             ) ORDER BY timestamp ASC, seq ASC",
        )?;

        let messages = stmt
            .query_map(params![limit], Self::row_to_message)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(messages)
    }

    /// Count stored messages
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub fn count_messages(&self) -> Result<u32> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM chat_messages", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Delete the whole chat history
    ///
    /// # Errors
    ///
    /// Returns an error if the database delete fails
    pub fn clear_messages(&self) -> Result<usize> {
        let deleted = self.conn.execute("DELETE FROM chat_messages", [])?;
        Ok(deleted)
    }

    fn row_to_message(row: &Row<'_>) -> rusqlite::Result<ChatMessage> {
        let role: String = row.get(1)?;
        Ok(ChatMessage {
            id: parse_uuid(&row.get::<_, String>(0)?)?,
            role: role
                .parse::<ChatRole>()
                .map_err(|e| rusqlite::Error::FromSqlConversionFailure(1, Type::Text, Box::new(e)))?,
            content: row.get(2)?,
            timestamp: parse_datetime(&row.get::<_, String>(3)?)?,
            context: row
                .get::<_, Option<String>>(4)?
                .as_deref()
                .map(parse_json)
                .transpose()?,
        })
    }
}
