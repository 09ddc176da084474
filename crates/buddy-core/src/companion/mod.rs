
use buddy_ai::{build_chat_request, Category, ChatRequest, ResponseSelector, Sentiment};
use buddy_storage::{AiMode, ChatMessage, MessageContext};
use rand::rngs::ThreadRng;
use rand::Rng;

use crate::error::StateError;
use crate::state::SessionState;

/// First message of a fresh conversation
#[must_use]
pub fn welcome_message(name: &str) -> String {
    format!(
        "Hey {name}! \u{1F44B} I'm DailyBuddy, your AI companion. I remember our conversations and learn about your habits, moods, and goals. How are you feeling today?"
    )
}

/// Result of one chat exchange
#[derive(Debug, Clone)]
pub struct Turn {
    pub user: ChatMessage,
    pub reply: ChatMessage,
    pub category: Category,
    pub sentiment: Sentiment,
    /// Request for an external model, present in [`AiMode::Smart`]
    pub request: Option<ChatRequest>,
}

/// Drives chat turns over a [`SessionState`]
pub struct Companion<R = ThreadRng> {
    selector: ResponseSelector<R>,
}

impl Companion<ThreadRng> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            selector: ResponseSelector::new(),
        }
    }
}

impl Default for Companion<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Companion<R> {
    #[must_use]
    pub fn with_rng(rng: R) -> Self {
        Self {
            selector: ResponseSelector::with_rng(rng),
        }
    }

    /// Seed an empty history with the welcome message
    ///
    /// # Errors
    ///
    /// Returns [`StateError::NotSignedIn`] when no profile is set
    pub fn greet(&self, mut state: SessionState) -> Result<SessionState, StateError> {
        if state.history.is_empty() {
            let welcome = welcome_message(state.user_name()?);
            state.history.push(ChatMessage::assistant(welcome));
        }
        Ok(state)
    }

    /// Answer `message`, appending both sides of the exchange to history.
    ///
    /// In smart mode the reply recorded is still the rule-based one; the
    /// returned [`Turn::request`] is what an external model would receive.
    ///
    /// # Errors
    ///
    /// Returns an error for a blank message or when no profile is set
    pub fn respond(
        &mut self,
        state: SessionState,
        message: &str,
        mode: AiMode,
    ) -> Result<(SessionState, Turn), StateError> {
        let message = message.trim();
        if message.is_empty() {
            return Err(StateError::EmptyMessage);
        }

        let mut state = self.greet(state)?;
        let ctx = state.context()?;
        let selected = self.selector.select(message, &ctx);
        let request = match mode {
            AiMode::Smart => Some(build_chat_request(&ctx, message)),
            AiMode::Simulated => None,
        };

        log::info!(
            "Chat turn: {} ({} sentiment, mode {mode})",
            selected.category,
            selected.sentiment
        );

        let user = ChatMessage::user(message.to_string(), MessageContext::from(&state.daily));
        let reply = ChatMessage::assistant(selected.text);
        state.history.push(user.clone());
        state.history.push(reply.clone());

        let turn = Turn {
            user,
            reply,
            category: selected.category,
            sentiment: selected.sentiment,
            request,
        };
        Ok((state.trim_history(), turn))
    }
}
