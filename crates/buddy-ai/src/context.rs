use buddy_storage::{ChatMessage, ChatRole};
use serde::{Deserialize, Serialize};

/// One prior transcript entry as seen by the model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptMessage {
    pub role: ChatRole,
    pub content: String,
}

impl From<&ChatMessage> for PromptMessage {
    fn from(message: &ChatMessage) -> Self {
        Self {
            role: message.role,
            content: message.content.clone(),
        }
    }
}

/// Snapshot of the user's day for a single chat turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationContext {
    pub user_mood: u8,
    pub productivity: u8,
    pub goals: Vec<String>,
    pub user_name: String,
    #[serde(default)]
    pub previous_messages: Vec<PromptMessage>,
}

impl ConversationContext {
    #[must_use]
    pub fn new(user_name: impl Into<String>, user_mood: u8, productivity: u8) -> Self {
        Self {
            user_mood,
            productivity,
            goals: Vec::new(),
            user_name: user_name.into(),
            previous_messages: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_goals<I, S>(mut self, goals: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.goals = goals.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_history(mut self, history: &[ChatMessage]) -> Self {
        self.previous_messages = history.iter().map(PromptMessage::from).collect();
        self
    }

    /// Goals joined the way they are shown to the user
    #[must_use]
    pub fn goal_list(&self) -> String {
        self.goals.join(", ")
    }
}
