//! Load-mutate-save wrapper around the session state

use anyhow::Result;
use buddy_core::{load_state, save_state, SessionState};
use buddy_storage::Database;
use chrono::{NaiveDate, Utc};
use std::path::Path;

/// Open database plus the state loaded from it
pub struct Session {
    pub db: Database,
    pub state: SessionState,
}

impl Session {
    /// Open the database at `path` and load today's state
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or read
    pub fn open(path: &Path) -> Result<Self> {
        Self::open_on(path, today())
    }

    /// Open the database at `path` and load state for `date`
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or read
    pub fn open_on(path: &Path, date: NaiveDate) -> Result<Self> {
        let db = Database::new(Some(path.to_path_buf()))?;
        let state = load_state(&db, date)?;
        Ok(Self { db, state })
    }

    /// Replace the state and persist it
    ///
    /// # Errors
    ///
    /// Returns an error if saving fails
    pub fn commit(&mut self, state: SessionState) -> Result<()> {
        save_state(&self.db, &state)?;
        self.state = state;
        Ok(())
    }
}

/// Current tracking date (UTC)
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}
