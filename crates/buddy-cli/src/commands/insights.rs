/// Insights command handler
use anyhow::Result;
use buddy_ai::mood_emoji;
use buddy_core::weekly_insights;
use std::path::Path;
use tabled::{Table, Tabled};

use super::helpers::print_header;
use super::session::Session;

#[derive(Tabled)]
struct DayRow {
    #[tabled(rename = "Day")]
    day: String,
    #[tabled(rename = "Mood")]
    mood: String,
    #[tabled(rename = "Productivity")]
    productivity: u8,
    #[tabled(rename = "Happiness")]
    happiness: u8,
}

pub fn handle_insights(db_path: &Path) -> Result<()> {
    let session = Session::open(db_path)?;
    let insights = weekly_insights(&session.db, &session.state)?;
    let summary = insights.summary;

    print_header("Your Week");
    println!(
        "Avg mood: {}/10 {}",
        summary.avg_mood,
        mood_emoji(summary.avg_mood)
    );
    println!("Avg productivity: {}/10", summary.avg_productivity);
    println!("Goals today: {}", summary.goals_today);
    println!(
        "Current streak: {} day{}",
        summary.current_streak,
        if summary.current_streak == 1 { "" } else { "s" }
    );

    let rows: Vec<DayRow> = insights
        .chart
        .iter()
        .map(|point| DayRow {
            day: point.date.format("%b %-d").to_string(),
            mood: if point.tracked {
                point.mood.to_string()
            } else {
                format!("{} (untracked)", point.mood)
            },
            productivity: point.productivity,
            happiness: point.happiness,
        })
        .collect();
    println!("\n{}", Table::new(rows));
    Ok(())
}
