//! Persisted session state and its pure transitions.
//!
//! Nothing here touches storage; see [`crate::store`] for loading and saving.

#[cfg(test)]
mod tests;

use buddy_ai::ConversationContext;
use buddy_storage::{
    ChatMessage, DailyData, Settings, UserProfile, MAX_SCORE, MIN_PIN_LEN, MIN_SCORE,
};
use chrono::NaiveDate;

use crate::error::StateError;

/// Everything the companion remembers between turns
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub profile: Option<UserProfile>,
    pub daily: DailyData,
    /// Chat history, oldest first
    pub history: Vec<ChatMessage>,
    pub settings: Settings,
}

impl SessionState {
    /// Empty state for a first run on `today`
    #[must_use]
    pub fn new(today: NaiveDate) -> Self {
        Self {
            profile: None,
            daily: DailyData::new(today),
            history: Vec::new(),
            settings: Settings::default(),
        }
    }

    /// Name of the signed-in user
    ///
    /// # Errors
    ///
    /// Returns [`StateError::NotSignedIn`] when no profile is set
    pub fn user_name(&self) -> Result<&str, StateError> {
        self.profile
            .as_ref()
            .map(|p| p.name.as_str())
            .ok_or(StateError::NotSignedIn)
    }

    /// Sign in, replacing any previous profile
    ///
    /// # Errors
    ///
    /// Returns an error if the trimmed name is empty or the PIN is too short
    pub fn sign_in(mut self, name: &str, pin: Option<&str>) -> Result<Self, StateError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StateError::EmptyName);
        }
        if pin.is_some_and(|p| p.chars().count() < MIN_PIN_LEN) {
            return Err(StateError::PinTooShort);
        }

        self.profile = Some(UserProfile::new(name.to_string(), pin.map(str::to_string)));
        Ok(self)
    }

    /// Drop the profile; tracking data and history stay
    #[must_use]
    pub fn sign_out(mut self) -> Self {
        self.profile = None;
        self
    }

    /// # Errors
    ///
    /// Returns [`StateError::ScoreOutOfRange`] outside 1..=10
    pub fn set_mood(mut self, mood: u8) -> Result<Self, StateError> {
        self.daily.mood = check_score("mood", mood)?;
        Ok(self)
    }

    /// # Errors
    ///
    /// Returns [`StateError::ScoreOutOfRange`] outside 1..=10
    pub fn set_productivity(mut self, productivity: u8) -> Result<Self, StateError> {
        self.daily.productivity = check_score("productivity", productivity)?;
        Ok(self)
    }

    /// Append a goal for today
    ///
    /// # Errors
    ///
    /// Returns [`StateError::EmptyGoal`] for blank text
    pub fn add_goal(mut self, goal: &str) -> Result<Self, StateError> {
        let goal = goal.trim();
        if goal.is_empty() {
            return Err(StateError::EmptyGoal);
        }
        self.daily.goals.push(goal.to_string());
        Ok(self)
    }

    /// Remove the goal at `index` (0-based)
    ///
    /// # Errors
    ///
    /// Returns [`StateError::GoalIndexOutOfRange`] when there is no such goal
    pub fn remove_goal(mut self, index: usize) -> Result<Self, StateError> {
        let len = self.daily.goals.len();
        if index >= len {
            return Err(StateError::GoalIndexOutOfRange { index, len });
        }
        self.daily.goals.remove(index);
        Ok(self)
    }

    /// Start a fresh day when `today` is past the tracked date.
    ///
    /// The streak grows only when the previous tracked day was yesterday.
    #[must_use]
    pub fn roll_over(mut self, today: NaiveDate) -> Self {
        if today <= self.daily.date {
            return self;
        }

        let streak = if self.daily.date.succ_opt() == Some(today) {
            self.daily.streak.saturating_add(1)
        } else {
            1
        };

        log::info!(
            "New day {today} (last tracked {}), streak {streak}",
            self.daily.date
        );

        self.daily = DailyData {
            streak,
            ..DailyData::new(today)
        };
        self
    }

    /// Drop the oldest messages beyond the history limit.
    ///
    /// Always keeps at least the latest exchange.
    #[must_use]
    pub fn trim_history(mut self) -> Self {
        let limit = usize::try_from(self.settings.history_limit)
            .unwrap_or(usize::MAX)
            .max(2);
        if self.history.len() > limit {
            let excess = self.history.len() - limit;
            self.history.drain(..excess);
        }
        self
    }

    /// Context for the next chat turn
    ///
    /// # Errors
    ///
    /// Returns [`StateError::NotSignedIn`] when no profile is set
    pub fn context(&self) -> Result<ConversationContext, StateError> {
        let name = self.user_name()?;
        Ok(
            ConversationContext::new(name, self.daily.mood, self.daily.productivity)
                .with_goals(self.daily.goals.iter().cloned())
                .with_history(&self.history),
        )
    }
}

fn check_score(field: &'static str, value: u8) -> Result<u8, StateError> {
    if (MIN_SCORE..=MAX_SCORE).contains(&value) {
        Ok(value)
    } else {
        Err(StateError::ScoreOutOfRange { field, value })
    }
}
