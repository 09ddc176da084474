
use buddy_storage::DailyData;
use chrono::{Duration, NaiveDate};
use serde::Serialize;

/// Days shown in the weekly view
pub const WEEK_DAYS: i64 = 7;

/// Score assumed for days with nothing recorded
pub const UNTRACKED_SCORE: u8 = 6;

/// One day in the weekly trend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChartPoint {
    pub date: NaiveDate,
    pub mood: u8,
    pub productivity: u8,
    /// Rounded mean of mood and productivity
    pub happiness: u8,
    /// Whether a stored entry backs this day
    pub tracked: bool,
}

/// Headline numbers for the insights view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InsightsSummary {
    pub avg_mood: u8,
    pub avg_productivity: u8,
    pub goals_today: usize,
    pub current_streak: u32,
}

/// Seven-day trend plus summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeeklyInsights {
    pub chart: Vec<ChartPoint>,
    pub summary: InsightsSummary,
}

/// Generate insights from daily tracking data
pub struct InsightsGenerator;

impl InsightsGenerator {
    /// Build the week ending on `end` (inclusive), oldest day first.
    ///
    /// Entries outside the window are ignored.
    #[must_use]
    pub fn weekly(entries: &[DailyData], end: NaiveDate) -> WeeklyInsights {
        let start = end - Duration::days(WEEK_DAYS - 1);
        let in_window: Vec<&DailyData> = entries
            .iter()
            .filter(|e| e.date >= start && e.date <= end)
            .collect();

        let chart = Self::chart(&in_window, start);
        let today = in_window.iter().find(|e| e.date == end);

        let (avg_mood, avg_productivity) = if in_window.is_empty() {
            (
                rounded_mean(chart.iter().map(|p| p.mood)),
                rounded_mean(chart.iter().map(|p| p.productivity)),
            )
        } else {
            (
                rounded_mean(in_window.iter().map(|e| e.mood)),
                rounded_mean(in_window.iter().map(|e| e.productivity)),
            )
        };

        WeeklyInsights {
            chart,
            summary: InsightsSummary {
                avg_mood,
                avg_productivity,
                goals_today: today.map_or(0, |e| e.goals.len()),
                current_streak: today.map_or(1, |e| e.streak),
            },
        }
    }

    fn chart(entries: &[&DailyData], start: NaiveDate) -> Vec<ChartPoint> {
        (0..WEEK_DAYS)
            .map(|offset| {
                let date = start + Duration::days(offset);
                match entries.iter().find(|e| e.date == date) {
                    Some(entry) => ChartPoint {
                        date,
                        mood: entry.mood,
                        productivity: entry.productivity,
                        happiness: happiness(entry.mood, entry.productivity),
                        tracked: true,
                    },
                    None => ChartPoint {
                        date,
                        mood: UNTRACKED_SCORE,
                        productivity: UNTRACKED_SCORE,
                        happiness: happiness(UNTRACKED_SCORE, UNTRACKED_SCORE),
                        tracked: false,
                    },
                }
            })
            .collect()
    }
}

/// Rounded mean of mood and productivity, halves rounding up
#[must_use]
pub fn happiness(mood: u8, productivity: u8) -> u8 {
    rounded_mean([mood, productivity])
}

/// Emoji face for a mood score
#[must_use]
pub fn mood_emoji(mood: u8) -> &'static str {
    match mood {
        0..=2 => "\u{1F622}",
        3..=4 => "\u{1F610}",
        5..=6 => "\u{1F642}",
        7..=8 => "\u{1F60A}",
        _ => "\u{1F929}",
    }
}

fn rounded_mean(values: impl IntoIterator<Item = u8>) -> u8 {
    let (sum, count) = values
        .into_iter()
        .fold((0u32, 0u32), |(sum, count), v| (sum + u32::from(v), count + 1));
    if count == 0 {
        return 0;
    }
    // (sum / count) rounded half up, integer only
    u8::try_from((2 * sum + count) / (2 * count)).unwrap_or(u8::MAX)
}
