#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::context::ConversationContext;

/// Template bucket a reply is drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    LowMood,
    Excited,
    Goal,
    Productivity,
    MoodQuery,
    Reflection,
    Default,
}

impl Category {
    pub const ALL: [Self; 7] = [
        Self::LowMood,
        Self::Excited,
        Self::Goal,
        Self::Productivity,
        Self::MoodQuery,
        Self::Reflection,
        Self::Default,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LowMood => "low-mood",
            Self::Excited => "excited",
            Self::Goal => "goal",
            Self::Productivity => "productivity",
            Self::MoodQuery => "mood-query",
            Self::Reflection => "reflection",
            Self::Default => "default",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Score at or above which productivity is praised
pub const PRODUCTIVITY_THRESHOLD: u8 = 7;

/// Reply to a goal question when no goals are set
pub const NO_GOALS_RESPONSE: &str = "I don't see any goals set yet. What's one thing you'd like to accomplish today? Setting a goal helps create direction. \u{1F3AF}";

const LOW_MOOD: &[&str] = &[
    "I hear you, {name}. Those days happen to everyone. \u{1F499} What's one small thing that could make today a bit better?",
    "That sounds tough, {name}. Remember, you've overcome challenges before. Want to talk about what's weighing on you?",
    "I'm here for you, {name}. Sometimes the best thing is to take a break and be gentle with yourself. How can I help?",
    "Bad days are temporary, {name}, but your resilience is permanent. Let's focus on what you can control right now.",
    "It's okay to not be okay, {name}. Let's identify one positive step forward, no matter how small. \u{1F331}",
];

const EXCITED: &[&str] = &[
    "That's amazing, {name}! \u{1F389} Your energy is contagious. Keep riding this wave!",
    "Yes, {name}! I love this enthusiasm! What's next on your list? Let's keep this momentum going! \u{1F680}",
    "This is incredible, {name}! You're crushing it. How does this success feel? \u{1F31F}",
    "Wow, {name}, that's awesome! You deserve to celebrate this. What did you do to achieve it?",
];

const GOALS: &[&str] = &[
    "Great question! You've got {goal_count} goals for today. My top advice: focus on the most important one first. Which matters most to you?",
    "I see you have {goal_count} goals today. Let's prioritize\u{2014}which one would make you feel most accomplished if you finished it?",
    "Your goals are {goal_list}. Remember, progress over perfection. Pick one and start small. \u{1F4AA}",
];

const NO_GOALS: &[&str] = &[NO_GOALS_RESPONSE];

const PRODUCTIVITY_HIGH: &[&str] =
    &["Your productivity today is at {productivity}/10. That's solid! Keep it up!"];

const PRODUCTIVITY_LOW: &[&str] = &[
    "Your productivity today is at {productivity}/10. Let's boost it. What's one distraction you can remove right now?",
];

const MOOD_QUERY: &[&str] = &[
    "I'm here and ready to help! \u{1F60A} Your mood today is {mood}/10. Want to talk about what's influencing that?",
];

const REFLECTION: &[&str] = &[
    "Let's reflect: What was one win today, no matter how small?",
    "Reflection time: What did you learn about yourself today?",
    "Think back: What would you do differently tomorrow? \u{1F914}",
    "Reflection moment: What are you grateful for today?",
];

const SUPPORTIVE: &[&str] = &[
    "I hear you! Tell me more about that. \u{1F442}",
    "That's interesting. How did that make you feel?",
    "I'm following you. What's your take on this?",
    "Got it! What would help you most right now?",
    "That's something to think about. Any ideas on next steps?",
];

/// Fixed reply templates per category.
///
/// Placeholders: `{name}`, `{goal_count}`, `{goal_list}`, `{productivity}`, `{mood}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseBank {
    low_mood: &'static [&'static str],
    excited: &'static [&'static str],
    goals: &'static [&'static str],
    no_goals: &'static [&'static str],
    productivity_high: &'static [&'static str],
    productivity_low: &'static [&'static str],
    mood_query: &'static [&'static str],
    reflection: &'static [&'static str],
    supportive: &'static [&'static str],
}

impl ResponseBank {
    /// The built-in bank
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            low_mood: LOW_MOOD,
            excited: EXCITED,
            goals: GOALS,
            no_goals: NO_GOALS,
            productivity_high: PRODUCTIVITY_HIGH,
            productivity_low: PRODUCTIVITY_LOW,
            mood_query: MOOD_QUERY,
            reflection: REFLECTION,
            supportive: SUPPORTIVE,
        }
    }

    /// Templates a category may draw from for this context.
    ///
    /// Goal replies depend on whether any goals are set; productivity replies
    /// depend on [`PRODUCTIVITY_THRESHOLD`]. Never empty.
    #[must_use]
    pub fn templates(&self, category: Category, ctx: &ConversationContext) -> &'static [&'static str] {
        match category {
            Category::LowMood => self.low_mood,
            Category::Excited => self.excited,
            Category::Goal if ctx.goals.is_empty() => self.no_goals,
            Category::Goal => self.goals,
            Category::Productivity if ctx.productivity >= PRODUCTIVITY_THRESHOLD => {
                self.productivity_high
            }
            Category::Productivity => self.productivity_low,
            Category::MoodQuery => self.mood_query,
            Category::Reflection => self.reflection,
            Category::Default => self.supportive,
        }
    }

    /// Every reply a category can produce for this context
    #[must_use]
    pub fn candidates(&self, category: Category, ctx: &ConversationContext) -> Vec<String> {
        self.templates(category, ctx)
            .iter()
            .map(|template| render(template, ctx))
            .collect()
    }
}

impl Default for ResponseBank {
    fn default() -> Self {
        Self::standard()
    }
}

/// Fill template placeholders from the context in a single pass, so values
/// containing braces are never expanded again. Unknown placeholders are kept.
#[must_use]
pub fn render(template: &str, ctx: &ConversationContext) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        let filled = tail
            .find('}')
            .and_then(|end| placeholder(&tail[1..end], ctx).map(|value| (end, value)));
        match filled {
            Some((end, value)) => {
                out.push_str(&value);
                rest = &tail[end + 1..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

fn placeholder(key: &str, ctx: &ConversationContext) -> Option<String> {
    match key {
        "name" => Some(ctx.user_name.clone()),
        "goal_count" => Some(ctx.goals.len().to_string()),
        "goal_list" => Some(ctx.goal_list()),
        "productivity" => Some(ctx.productivity.to_string()),
        "mood" => Some(ctx.user_mood.to_string()),
        _ => None,
    }
}
