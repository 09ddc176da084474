
use rand::rngs::ThreadRng;
use rand::Rng;
use serde::Serialize;

use crate::context::ConversationContext;
use crate::responses::{render, Category, ResponseBank};
use crate::sentiment::{analyze_sentiment, Sentiment};

const GOAL_KEYWORDS: &[&str] = &["goal", "target", "objective"];
const PRODUCTIVITY_KEYWORDS: &[&str] = &["productivity", "productive", "focus"];
const MOOD_QUERY_KEYWORDS: &[&str] = &["how are you", "mood", "feeling"];
const REFLECTION_KEYWORDS: &[&str] = &["reflect", "reflection"];

/// Topic rules checked in order once sentiment gives no answer
const TOPIC_RULES: [(Category, &[&str]); 4] = [
    (Category::Goal, GOAL_KEYWORDS),
    (Category::Productivity, PRODUCTIVITY_KEYWORDS),
    (Category::MoodQuery, MOOD_QUERY_KEYWORDS),
    (Category::Reflection, REFLECTION_KEYWORDS),
];

/// Reply chosen for a user message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectedResponse {
    pub category: Category,
    pub sentiment: Sentiment,
    pub text: String,
}

/// Pick the template bucket for a message. Deterministic.
#[must_use]
pub fn categorize(message: &str) -> Category {
    categorize_with_sentiment(message, analyze_sentiment(message))
}

fn categorize_with_sentiment(message: &str, sentiment: Sentiment) -> Category {
    match sentiment {
        Sentiment::Low => Category::LowMood,
        Sentiment::Excited => Category::Excited,
        Sentiment::Neutral => {
            let lower = message.to_lowercase();
            TOPIC_RULES
                .iter()
                .find(|(_, keywords)| keywords.iter().any(|kw| lower.contains(kw)))
                .map_or(Category::Default, |(category, _)| *category)
        }
    }
}

/// Rule-based reply picker.
///
/// The category is fixed by the message; the template within it is drawn
/// uniformly from `R`. Use [`ResponseSelector::with_rng`] with a seeded rng
/// to pin outputs.
pub struct ResponseSelector<R = ThreadRng> {
    bank: ResponseBank,
    rng: R,
}

impl ResponseSelector<ThreadRng> {
    /// Selector backed by the thread-local, unseeded rng
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(rand::rng())
    }
}

impl Default for ResponseSelector<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> ResponseSelector<R> {
    #[must_use]
    pub fn with_rng(rng: R) -> Self {
        Self {
            bank: ResponseBank::standard(),
            rng,
        }
    }

    #[must_use]
    pub fn bank(&self) -> &ResponseBank {
        &self.bank
    }

    /// Classify `message` and draw a reply for it
    pub fn select(&mut self, message: &str, ctx: &ConversationContext) -> SelectedResponse {
        let sentiment = analyze_sentiment(message);
        let category = categorize_with_sentiment(message, sentiment);
        let templates = self.bank.templates(category, ctx);

        let index = if templates.len() > 1 {
            self.rng.random_range(0..templates.len())
        } else {
            0
        };

        log::debug!(
            "Selected {category} reply #{index} (sentiment: {sentiment}, {} candidates)",
            templates.len()
        );

        SelectedResponse {
            category,
            sentiment,
            text: render(templates[index], ctx),
        }
    }

    /// Reply text only
    pub fn respond(&mut self, message: &str, ctx: &ConversationContext) -> String {
        self.select(message, ctx).text
    }
}
