use buddy_storage::ChatRole;
use serde::Serialize;

use crate::context::{ConversationContext, PromptMessage};

/// Shown in place of the goal list when no goals are set
pub const NO_GOALS_PLACEHOLDER: &str = "No goals set yet";

/// Build the companion persona instructions for an external language model
#[must_use]
pub fn build_system_prompt(ctx: &ConversationContext) -> String {
    let goals = if ctx.goals.is_empty() {
        NO_GOALS_PLACEHOLDER.to_string()
    } else {
        ctx.goal_list()
    };

    format!(
        "You are DailyBuddy, an AI companion designed to help {name} track daily habits, mood, productivity, and goals.

Your personality:
- Friendly, warm, and genuinely supportive like a real buddy
- Conversational and natural (avoid robotic language)
- Motivating but realistic (no empty platitudes)
- Empathetic to emotions while being action-oriented
- Use occasional emojis naturally (not overboard)
- Remember context from the conversation
- Ask follow-up questions to show genuine care

Current context:
- User's mood today: {mood}/10
- Productivity level: {productivity}/10
- Today's goals: {goals}

Your role:
1. Listen empathetically to how they're feeling
2. If mood is low: offer support and help them identify one small positive step
3. If mood is high: celebrate with them and encourage maintaining momentum
4. Help them reflect on progress toward goals
5. Provide actionable suggestions, not generic advice
6. Keep responses concise (2-3 sentences typically)
7. Be genuinely interested in their day and challenges
8. Occasionally ask about mood or productivity to encourage tracking

Remember: You're a buddy, not a therapist. Be supportive but know your limits.",
        name = ctx.user_name,
        mood = ctx.user_mood,
        productivity = ctx.productivity,
    )
}

/// Everything an external chat model needs for the next reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatRequest {
    pub system: String,
    pub messages: Vec<PromptMessage>,
}

/// Package the system prompt with the prior transcript and the new user message
#[must_use]
pub fn build_chat_request(ctx: &ConversationContext, user_message: &str) -> ChatRequest {
    let mut messages = ctx.previous_messages.clone();
    messages.push(PromptMessage {
        role: ChatRole::User,
        content: user_message.to_string(),
    });

    ChatRequest {
        system: build_system_prompt(ctx),
        messages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use buddy_storage::ChatMessage;

    #[test]
    fn test_prompt_embeds_context() {
        let ctx = ConversationContext::new("Sam", 3, 8).with_goals(["Run 5k", "Read"]);
        let prompt = build_system_prompt(&ctx);

        assert!(prompt.starts_with("You are DailyBuddy, an AI companion designed to help Sam track"));
        assert!(prompt.contains("- User's mood today: 3/10\n"));
        assert!(prompt.contains("- Productivity level: 8/10\n"));
        assert!(prompt.contains("- Today's goals: Run 5k, Read\n"));
        assert!(prompt.ends_with("Be supportive but know your limits."));
    }

    #[test]
    fn test_prompt_without_goals() {
        let prompt = build_system_prompt(&ConversationContext::new("Sam", 5, 5));
        assert!(prompt.contains("- Today's goals: No goals set yet\n"));
    }

    #[test]
    fn test_chat_request_appends_user_message() {
        let history = vec![ChatMessage::assistant("Hey Sam!".to_string())];
        let ctx = ConversationContext::new("Sam", 5, 5).with_history(&history);
        let request = build_chat_request(&ctx, "hello");

        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, ChatRole::Assistant);
        assert_eq!(request.messages[1].role, ChatRole::User);
        assert_eq!(request.messages[1].content, "hello");
        assert_eq!(request.system, build_system_prompt(&ctx));

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["messages"][1]["role"], "user");
    }
}
