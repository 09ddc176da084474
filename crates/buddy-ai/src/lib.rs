pub mod context;
pub mod insights;
pub mod prompt;
pub mod responses;
pub mod selector;
pub mod sentiment;

pub use context::{ConversationContext, PromptMessage};
pub use insights::{mood_emoji, ChartPoint, InsightsGenerator, InsightsSummary, WeeklyInsights};
pub use prompt::{build_chat_request, build_system_prompt, ChatRequest, NO_GOALS_PLACEHOLDER};
pub use responses::{Category, ResponseBank, NO_GOALS_RESPONSE, PRODUCTIVITY_THRESHOLD};
pub use selector::{categorize, ResponseSelector, SelectedResponse};
pub use sentiment::{analyze_sentiment, matched_keyword, Sentiment};
