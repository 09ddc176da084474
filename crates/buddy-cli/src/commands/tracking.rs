/// Mood, productivity and goal command handlers
use anyhow::Result;
use buddy_ai::mood_emoji;
use std::path::Path;
use tabled::{Table, Tabled};

use super::helpers::{number_to_index, print_header};
use super::session::Session;

#[derive(Tabled)]
struct GoalRow {
    #[tabled(rename = "#")]
    number: usize,
    #[tabled(rename = "Goal")]
    goal: String,
}

pub fn handle_mood(db_path: &Path, value: Option<u8>) -> Result<()> {
    let mut session = Session::open(db_path)?;
    if let Some(mood) = value {
        let state = session.state.clone().set_mood(mood)?;
        session.commit(state)?;
    }

    let mood = session.state.daily.mood;
    println!("Mood today: {mood}/10 {}", mood_emoji(mood));
    Ok(())
}

pub fn handle_productivity(db_path: &Path, value: Option<u8>) -> Result<()> {
    let mut session = Session::open(db_path)?;
    if let Some(productivity) = value {
        let state = session.state.clone().set_productivity(productivity)?;
        session.commit(state)?;
    }

    println!(
        "Productivity today: {}/10",
        session.state.daily.productivity
    );
    Ok(())
}

pub fn handle_goal_add(db_path: &Path, text: &str) -> Result<()> {
    let mut session = Session::open(db_path)?;
    let state = session.state.clone().add_goal(text)?;
    session.commit(state)?;

    let count = session.state.daily.goals.len();
    println!("Added goal #{count}: {}", text.trim());
    Ok(())
}

pub fn handle_goal_remove(db_path: &Path, number: usize) -> Result<()> {
    let mut session = Session::open(db_path)?;
    let Some(index) = number_to_index(number) else {
        anyhow::bail!("Goal numbers start at 1 (see `buddy goal list`)");
    };
    let removed = session.state.daily.goals.get(index).cloned();

    let state = session.state.clone().remove_goal(index)?;
    session.commit(state)?;

    if let Some(goal) = removed {
        println!("Removed goal: {goal}");
    }
    Ok(())
}

pub fn handle_goal_list(db_path: &Path) -> Result<()> {
    let session = Session::open(db_path)?;
    let goals = &session.state.daily.goals;

    if goals.is_empty() {
        println!("No goals set yet. Add one with: buddy goal add <text>");
        return Ok(());
    }

    print_header(&format!("Goals for {}", session.state.daily.date));
    let rows: Vec<GoalRow> = goals
        .iter()
        .enumerate()
        .map(|(i, goal)| GoalRow {
            number: i + 1,
            goal: goal.clone(),
        })
        .collect();
    println!("{}", Table::new(rows));
    Ok(())
}
