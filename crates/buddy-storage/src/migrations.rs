use anyhow::Result;
use rusqlite::Connection;

/// Initialize database schema
///
/// # Errors
///
/// Returns an error if database table creation or index creation fails
pub fn init_schema(conn: &Connection) -> Result<()> {
    // Profile table - single signed-in user
    conn.execute(
        "CREATE TABLE IF NOT EXISTS profile (
            id INTEGER PRIMARY KEY CHECK (id = 1),
            name TEXT NOT NULL,
            pin TEXT,
            created_at TEXT NOT NULL
        )",
        [],
    )?;

    // Daily entries table - one row per tracked day
    conn.execute(
        "CREATE TABLE IF NOT EXISTS daily_entries (
            date TEXT PRIMARY KEY,
            mood INTEGER NOT NULL,
            productivity INTEGER NOT NULL,
            goals TEXT NOT NULL DEFAULT '[]',
            streak INTEGER NOT NULL DEFAULT 1,
            updated_at TEXT NOT NULL
        )",
        [],
    )?;

    // Chat messages table - conversation history
    conn.execute(
        "CREATE TABLE IF NOT EXISTS chat_messages (
            id TEXT PRIMARY KEY,
            role TEXT NOT NULL,
            content TEXT NOT NULL,
            timestamp TEXT NOT NULL,
            context TEXT
        )",
        [],
    )?;

    // Settings table - user preferences
    conn.execute(
        "CREATE TABLE IF NOT EXISTS settings (
            id INTEGER PRIMARY KEY CHECK (id = 1),
            ai_mode TEXT NOT NULL DEFAULT 'simulated'
        )",
        [],
    )?;

    // Add new columns to existing settings table if they don't exist
    let columns_to_add = vec![("history_limit", "INTEGER NOT NULL DEFAULT 50")];

    for (column_name, column_type) in columns_to_add {
        let column_exists: Result<i32, rusqlite::Error> = conn.query_row(
            &format!(
                "SELECT COUNT(*) FROM pragma_table_info('settings') WHERE name='{column_name}'"
            ),
            [],
            |row| row.get(0),
        );

        if column_exists.unwrap_or(0) == 0 {
            conn.execute(
                &format!("ALTER TABLE settings ADD COLUMN {column_name} {column_type}"),
                [],
            )?;
            log::info!("Added {column_name} column to settings table");
        }
    }

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_chat_messages_timestamp ON chat_messages(timestamp)",
        [],
    )?;

    Ok(())
}

/// Insert the default settings row if none exists
///
/// # Errors
///
/// Returns an error if the insert fails
pub fn insert_default_settings(conn: &Connection) -> Result<()> {
    conn.execute("INSERT OR IGNORE INTO settings (id) VALUES (1)", [])?;
    Ok(())
}
