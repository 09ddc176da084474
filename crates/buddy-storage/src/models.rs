use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Default mood and productivity score for a fresh day
pub const DEFAULT_SCORE: u8 = 5;

/// Lowest accepted tracking score
pub const MIN_SCORE: u8 = 1;

/// Highest accepted tracking score
pub const MAX_SCORE: u8 = 10;

/// Minimum PIN length accepted at sign-in
pub const MIN_PIN_LEN: usize = 4;

/// Error returned when a stored enum value cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value}")]
pub struct ParseModelError {
    pub kind: &'static str,
    pub value: String,
}

/// Signed-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub pin: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl UserProfile {
    #[must_use]
    pub fn new(name: String, pin: Option<String>) -> Self {
        Self {
            name,
            pin,
            created_at: Utc::now(),
        }
    }
}

/// One day of mood/productivity tracking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyData {
    pub date: NaiveDate,
    pub mood: u8,
    pub productivity: u8,
    pub goals: Vec<String>,
    pub streak: u32,
}

impl DailyData {
    /// Fresh tracking data for `date` with default scores
    #[must_use]
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            mood: DEFAULT_SCORE,
            productivity: DEFAULT_SCORE,
            goals: Vec::new(),
            streak: 1,
        }
    }

    /// Fresh tracking data for the current UTC date
    #[must_use]
    pub fn today() -> Self {
        Self::new(Utc::now().date_naive())
    }
}

impl Default for DailyData {
    fn default() -> Self {
        Self::today()
    }
}

/// Who wrote a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

impl fmt::Display for ChatRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChatRole {
    type Err = ParseModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(Self::User),
            "assistant" => Ok(Self::Assistant),
            _ => Err(ParseModelError {
                kind: "chat role",
                value: s.to_string(),
            }),
        }
    }
}

/// Tracking snapshot attached to a user message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageContext {
    pub mood: u8,
    pub productivity: u8,
    pub goals: Vec<String>,
}

impl From<&DailyData> for MessageContext {
    fn from(daily: &DailyData) -> Self {
        Self {
            mood: daily.mood,
            productivity: daily.productivity,
            goals: daily.goals.clone(),
        }
    }
}

/// Chat history entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub role: ChatRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<MessageContext>,
}

impl ChatMessage {
    #[must_use]
    pub fn user(content: String, context: MessageContext) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: ChatRole::User,
            content,
            timestamp: Utc::now(),
            context: Some(context),
        }
    }

    #[must_use]
    pub fn assistant(content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: ChatRole::Assistant,
            content,
            timestamp: Utc::now(),
            context: None,
        }
    }
}

/// How chat replies are produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AiMode {
    /// Hand the conversation to an external language model
    Smart,
    /// Rule-based canned replies
    #[default]
    Simulated,
}

impl AiMode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Smart => "smart",
            Self::Simulated => "simulated",
        }
    }
}

impl fmt::Display for AiMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AiMode {
    type Err = ParseModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "smart" => Ok(Self::Smart),
            "simulated" => Ok(Self::Simulated),
            _ => Err(ParseModelError {
                kind: "ai mode",
                value: s.to_string(),
            }),
        }
    }
}

/// User preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub ai_mode: AiMode,
    /// Maximum number of chat messages kept in history
    pub history_limit: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ai_mode: AiMode::default(),
            history_limit: 50,
        }
    }
}
