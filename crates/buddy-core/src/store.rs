//! Storage boundary for [`SessionState`].
//!
//! Load once at session start, save after each mutation.

use anyhow::{Context, Result};
use buddy_ai::insights::{InsightsGenerator, WeeklyInsights, WEEK_DAYS};
use buddy_storage::{DailyData, Database};
use chrono::{Duration, NaiveDate};

use crate::state::SessionState;

/// Load persisted state and roll it over to `today`
///
/// # Errors
///
/// Returns an error if any database read fails
pub fn load_state(db: &Database, today: NaiveDate) -> Result<SessionState> {
    let profile = db.get_profile().context("Failed to load profile")?;
    let settings = db.get_settings().context("Failed to load settings")?;

    let daily = match db.get_daily_entry(today)? {
        Some(daily) => daily,
        None => db
            .get_latest_daily_entry()
            .context("Failed to load tracking data")?
            .filter(|latest| latest.date < today)
            .unwrap_or_else(|| DailyData::new(today)),
    };

    let history = db
        .get_recent_messages(settings.history_limit)
        .context("Failed to load chat history")?;

    log::debug!(
        "Loaded state for {} ({} messages, signed in: {})",
        daily.date,
        history.len(),
        profile.is_some()
    );

    Ok(SessionState {
        profile,
        daily,
        history,
        settings,
    }
    .roll_over(today))
}

/// Persist `state` in a single transaction.
///
/// The stored chat history is replaced by `state.history`.
///
/// # Errors
///
/// Returns an error if any database write fails; nothing is written in that case
pub fn save_state(db: &Database, state: &SessionState) -> Result<()> {
    db.in_transaction(|db| {
        match &state.profile {
            Some(profile) => db.save_profile(profile)?,
            None => db.delete_profile()?,
        }
        db.save_daily_entry(&state.daily)?;
        db.update_settings(&state.settings)?;

        db.clear_messages()?;
        for message in &state.history {
            db.insert_message(message)?;
        }
        Ok(())
    })
    .context("Failed to save session state")?;

    log::debug!("Saved state for {}", state.daily.date);
    Ok(())
}

/// Weekly insights over the stored days ending on the state's date.
///
/// A day rolled over but not yet saved charts as untracked; streak and goal
/// count come from `state`.
///
/// # Errors
///
/// Returns an error if the database query fails
pub fn weekly_insights(db: &Database, state: &SessionState) -> Result<WeeklyInsights> {
    let end = state.daily.date;
    let start = end - Duration::days(WEEK_DAYS - 1);
    let entries = db
        .get_daily_entries(start, end)
        .context("Failed to load tracking data")?;

    let mut insights = InsightsGenerator::weekly(&entries, end);
    insights.summary.current_streak = state.daily.streak;
    insights.summary.goals_today = state.daily.goals.len();
    Ok(insights)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::companion::Companion;
    use buddy_storage::AiMode;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    #[test]
    fn test_first_run_state() {
        let db = Database::in_memory().unwrap();
        let state = load_state(&db, day(10)).unwrap();
        assert_eq!(state, SessionState::new(day(10)));
    }

    #[test]
    fn test_save_and_reload_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("buddy.db");

        let mut companion = Companion::with_rng(StdRng::seed_from_u64(1));
        let state = SessionState::new(day(10))
            .sign_in("Sam", Some("4321"))
            .unwrap()
            .set_mood(8)
            .unwrap()
            .add_goal("Read")
            .unwrap();
        let (state, _) = companion
            .respond(state, "time to reflect", AiMode::Simulated)
            .unwrap();

        save_state(&Database::new(Some(path.clone())).unwrap(), &state).unwrap();

        let reloaded = load_state(&Database::new(Some(path)).unwrap(), day(10)).unwrap();
        assert_eq!(reloaded.profile, state.profile);
        assert_eq!(reloaded.daily, state.daily);
        assert_eq!(reloaded.settings, state.settings);
        let contents: Vec<&str> = reloaded.history.iter().map(|m| m.content.as_str()).collect();
        let expected: Vec<&str> = state.history.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, expected);
    }

    #[test]
    fn test_load_rolls_over_to_new_day() {
        let db = Database::in_memory().unwrap();
        let mut state = SessionState::new(day(10)).add_goal("Read").unwrap();
        state.daily.streak = 2;
        save_state(&db, &state).unwrap();

        let next = load_state(&db, day(11)).unwrap();
        assert_eq!(next.daily.date, day(11));
        assert_eq!(next.daily.streak, 3);
        assert!(next.daily.goals.is_empty());

        // the previous day stays on record
        assert_eq!(db.get_daily_entry(day(10)).unwrap().unwrap().goals.len(), 1);
    }

    #[test]
    fn test_save_replaces_history_and_profile() {
        let db = Database::in_memory().unwrap();
        let companion = Companion::with_rng(StdRng::seed_from_u64(1));
        let state = companion
            .greet(SessionState::new(day(10)).sign_in("Sam", None).unwrap())
            .unwrap();
        save_state(&db, &state).unwrap();
        assert_eq!(db.count_messages().unwrap(), 1);

        let mut cleared = state.sign_out();
        cleared.history.clear();
        save_state(&db, &cleared).unwrap();

        assert_eq!(db.count_messages().unwrap(), 0);
        assert!(db.get_profile().unwrap().is_none());
    }

    #[test]
    fn test_insights_skip_unsaved_rolled_day() {
        let db = Database::in_memory().unwrap();
        let yesterday = SessionState::new(day(9))
            .set_mood(9)
            .unwrap()
            .set_productivity(9)
            .unwrap();
        save_state(&db, &yesterday).unwrap();

        let state = load_state(&db, day(10)).unwrap();
        assert!(db.get_daily_entry(day(10)).unwrap().is_none());

        let insights = weekly_insights(&db, &state).unwrap();
        assert_eq!(insights.summary.avg_mood, 9);
        assert_eq!(insights.summary.avg_productivity, 9);
        assert_eq!(insights.summary.current_streak, 2);

        let last = insights.chart.last().unwrap();
        assert_eq!(last.date, day(10));
        assert!(!last.tracked);
        assert_eq!(last.mood, 6);
        assert!(insights.chart[5].tracked);
        assert_eq!(insights.chart[5].mood, 9);
    }

    #[test]
    fn test_insights_include_saved_today() {
        let db = Database::in_memory().unwrap();
        let state = load_state(&db, day(10))
            .unwrap()
            .set_mood(3)
            .unwrap()
            .add_goal("Read")
            .unwrap();
        save_state(&db, &state).unwrap();

        let insights = weekly_insights(&db, &state).unwrap();
        assert_eq!(insights.summary.avg_mood, 3);
        assert_eq!(insights.summary.avg_productivity, 5);
        assert_eq!(insights.summary.goals_today, 1);
        assert!(insights.chart.last().unwrap().tracked);
    }

    #[test]
    fn test_insights_with_nothing_stored() {
        let db = Database::in_memory().unwrap();
        let state = load_state(&db, day(10)).unwrap();

        let insights = weekly_insights(&db, &state).unwrap();
        assert_eq!(insights.chart.len(), 7);
        assert!(insights.chart.iter().all(|p| !p.tracked));
        assert_eq!(insights.summary.avg_mood, 6);
        assert_eq!(insights.summary.avg_productivity, 6);
        assert_eq!(insights.summary.current_streak, 1);
    }
}
