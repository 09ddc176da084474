use super::*;

fn ctx() -> ConversationContext {
    ConversationContext::new("Sam", 3, 5)
}

// ============================================================================
// Template bank tests
// ============================================================================

#[test]
fn test_every_category_has_templates() {
    let bank = ResponseBank::standard();
    let with_goals = ctx().with_goals(["Read"]);
    for category in Category::ALL {
        assert!(!bank.templates(category, &ctx()).is_empty(), "{category}");
        assert!(!bank.templates(category, &with_goals).is_empty(), "{category}");
    }
}

#[test]
fn test_low_mood_and_excited_always_name_the_user() {
    let bank = ResponseBank::standard();
    for category in [Category::LowMood, Category::Excited] {
        for reply in bank.candidates(category, &ctx()) {
            assert!(reply.contains("Sam"), "{reply}");
            assert!(!reply.contains("{name}"));
        }
    }
}

#[test]
fn test_goal_candidates_without_goals() {
    let bank = ResponseBank::standard();
    assert_eq!(
        bank.candidates(Category::Goal, &ctx()),
        vec![NO_GOALS_RESPONSE.to_string()]
    );
}

#[test]
fn test_goal_candidates_mention_count_or_list() {
    let bank = ResponseBank::standard();
    let context = ctx().with_goals(["Run 5k", "Read"]);
    let replies = bank.candidates(Category::Goal, &context);
    assert_eq!(replies.len(), 3);
    for reply in &replies {
        assert!(
            reply.contains("2 goals") || reply.contains("Run 5k, Read"),
            "{reply}"
        );
    }
}

#[test]
fn test_productivity_threshold_boundary() {
    let bank = ResponseBank::standard();

    let high = ConversationContext::new("Sam", 5, 7);
    let replies = bank.candidates(Category::Productivity, &high);
    assert_eq!(
        replies,
        vec!["Your productivity today is at 7/10. That's solid! Keep it up!".to_string()]
    );

    let low = ConversationContext::new("Sam", 5, 6);
    let replies = bank.candidates(Category::Productivity, &low);
    assert_eq!(replies.len(), 1);
    assert!(replies[0].starts_with("Your productivity today is at 6/10. Let's boost it."));
}

#[test]
fn test_mood_query_interpolates_mood() {
    let bank = ResponseBank::standard();
    let replies = bank.candidates(Category::MoodQuery, &ConversationContext::new("Sam", 8, 5));
    assert_eq!(replies.len(), 1);
    assert!(replies[0].contains("Your mood today is 8/10."));
}

#[test]
fn test_static_lists_sizes() {
    let bank = ResponseBank::default();
    assert_eq!(bank.templates(Category::LowMood, &ctx()).len(), 5);
    assert_eq!(bank.templates(Category::Excited, &ctx()).len(), 4);
    assert_eq!(bank.templates(Category::Reflection, &ctx()).len(), 4);
    assert_eq!(bank.templates(Category::Default, &ctx()).len(), 5);
}

// ============================================================================
// render tests
// ============================================================================

#[test]
fn test_render_all_placeholders() {
    let context = ConversationContext::new("Sam", 4, 9).with_goals(["A", "B", "C"]);
    let out = render(
        "{name}|{goal_count}|{goal_list}|{productivity}|{mood}",
        &context,
    );
    assert_eq!(out, "Sam|3|A, B, C|9|4");
}

#[test]
fn test_render_keeps_unknown_and_unclosed_braces() {
    let out = render("{unknown} and {name", &ctx());
    assert_eq!(out, "{unknown} and {name");
}

#[test]
fn test_render_does_not_expand_values() {
    let context = ConversationContext::new("{mood}", 4, 5);
    assert_eq!(render("Hi {name}", &context), "Hi {mood}");
}

#[test]
fn test_category_display() {
    assert_eq!(Category::LowMood.to_string(), "low-mood");
    assert_eq!(Category::MoodQuery.to_string(), "mood-query");
    assert_eq!(
        serde_json::to_string(&Category::LowMood).unwrap(),
        "\"low-mood\""
    );
}
