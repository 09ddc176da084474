/// Rejected session state change
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    #[error("{field} must be between 1 and 10, got {value}")]
    ScoreOutOfRange { field: &'static str, value: u8 },

    #[error("goal cannot be empty")]
    EmptyGoal,

    #[error("no goal at index {index} (have {len})")]
    GoalIndexOutOfRange { index: usize, len: usize },

    #[error("name cannot be empty")]
    EmptyName,

    #[error("PIN must be at least 4 characters")]
    PinTooShort,

    #[error("message cannot be empty")]
    EmptyMessage,

    #[error("not signed in; run `buddy login <name>` first")]
    NotSignedIn,
}
