use super::*;
use buddy_storage::ChatMessage;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
}

fn signed_in() -> SessionState {
    SessionState::new(day(10)).sign_in("Sam", None).unwrap()
}

// ============================================================================
// Profile tests
// ============================================================================

#[test]
fn test_sign_in_trims_name() {
    let state = SessionState::new(day(10))
        .sign_in("  Sam  ", Some("1234"))
        .unwrap();
    assert_eq!(state.user_name().unwrap(), "Sam");
    assert_eq!(state.profile.unwrap().pin.as_deref(), Some("1234"));
}

#[test]
fn test_sign_in_rejects_blank_name_and_short_pin() {
    assert_eq!(
        SessionState::new(day(10)).sign_in("   ", None).unwrap_err(),
        StateError::EmptyName
    );
    assert_eq!(
        SessionState::new(day(10))
            .sign_in("Sam", Some("123"))
            .unwrap_err(),
        StateError::PinTooShort
    );
}

#[test]
fn test_sign_out_keeps_tracking_data() {
    let state = signed_in().add_goal("Read").unwrap().sign_out();
    assert_eq!(state.user_name().unwrap_err(), StateError::NotSignedIn);
    assert_eq!(state.daily.goals, vec!["Read".to_string()]);
}

// ============================================================================
// Score tests
// ============================================================================

#[test]
fn test_scores_accept_bounds() {
    let state = signed_in().set_mood(1).unwrap().set_productivity(10).unwrap();
    assert_eq!(state.daily.mood, 1);
    assert_eq!(state.daily.productivity, 10);
}

#[test]
fn test_scores_reject_out_of_range() {
    assert_eq!(
        signed_in().set_mood(0).unwrap_err(),
        StateError::ScoreOutOfRange {
            field: "mood",
            value: 0
        }
    );
    let err = signed_in().set_productivity(11).unwrap_err();
    assert_eq!(err.to_string(), "productivity must be between 1 and 10, got 11");
}

// ============================================================================
// Goal tests
// ============================================================================

#[test]
fn test_add_and_remove_goals() {
    let state = signed_in()
        .add_goal(" Run 5k ")
        .unwrap()
        .add_goal("Read")
        .unwrap()
        .add_goal("Call mom")
        .unwrap()
        .remove_goal(1)
        .unwrap();
    assert_eq!(
        state.daily.goals,
        vec!["Run 5k".to_string(), "Call mom".to_string()]
    );
}

#[test]
fn test_goal_errors() {
    assert_eq!(signed_in().add_goal("  ").unwrap_err(), StateError::EmptyGoal);
    assert_eq!(
        signed_in().remove_goal(0).unwrap_err(),
        StateError::GoalIndexOutOfRange { index: 0, len: 0 }
    );
}

// ============================================================================
// roll_over tests
// ============================================================================

#[test]
fn test_roll_over_same_day_is_noop() {
    let state = signed_in().set_mood(9).unwrap();
    let rolled = state.clone().roll_over(day(10));
    assert_eq!(rolled, state);
}

#[test]
fn test_roll_over_past_date_is_noop() {
    let state = signed_in().set_mood(9).unwrap();
    assert_eq!(state.clone().roll_over(day(9)), state);
}

#[test]
fn test_roll_over_next_day_extends_streak() {
    let mut state = signed_in().set_mood(9).unwrap().add_goal("Read").unwrap();
    state.daily.streak = 4;

    let rolled = state.roll_over(day(11));
    assert_eq!(rolled.daily.date, day(11));
    assert_eq!(rolled.daily.streak, 5);
    assert_eq!(rolled.daily.mood, 5);
    assert_eq!(rolled.daily.productivity, 5);
    assert!(rolled.daily.goals.is_empty());
    assert_eq!(rolled.user_name().unwrap(), "Sam");
}

#[test]
fn test_roll_over_after_gap_resets_streak() {
    let mut state = signed_in();
    state.daily.streak = 4;
    assert_eq!(state.roll_over(day(13)).daily.streak, 1);
}

// ============================================================================
// History and context tests
// ============================================================================

#[test]
fn test_trim_history_keeps_newest() {
    let mut state = signed_in();
    state.settings.history_limit = 3;
    for i in 0..5 {
        state.history.push(ChatMessage::assistant(format!("m{i}")));
    }

    let state = state.trim_history();
    let contents: Vec<&str> = state.history.iter().map(|m| m.content.as_str()).collect();
    assert_eq!(contents, vec!["m2", "m3", "m4"]);
}

#[test]
fn test_trim_history_keeps_latest_exchange() {
    let mut state = signed_in();
    state.settings.history_limit = 0;
    for i in 0..4 {
        state.history.push(ChatMessage::assistant(format!("m{i}")));
    }
    assert_eq!(state.trim_history().history.len(), 2);
}

#[test]
fn test_context_snapshot() {
    let mut state = signed_in()
        .set_mood(3)
        .unwrap()
        .set_productivity(8)
        .unwrap()
        .add_goal("Read")
        .unwrap();
    state.history.push(ChatMessage::assistant("hi".to_string()));

    let ctx = state.context().unwrap();
    assert_eq!(ctx.user_name, "Sam");
    assert_eq!(ctx.user_mood, 3);
    assert_eq!(ctx.productivity, 8);
    assert_eq!(ctx.goals, vec!["Read".to_string()]);
    assert_eq!(ctx.previous_messages.len(), 1);
}

#[test]
fn test_context_requires_sign_in() {
    assert_eq!(
        SessionState::new(day(10)).context().unwrap_err(),
        StateError::NotSignedIn
    );
}
