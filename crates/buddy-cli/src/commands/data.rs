/// Data export and reset command handlers
use anyhow::{Context, Result};
use buddy_storage::{ChatMessage, DailyData, Settings};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::{Path, PathBuf};

use super::session::Session;

#[derive(Serialize)]
struct ExportedProfile {
    name: String,
    has_pin: bool,
    created_at: DateTime<Utc>,
}

#[derive(Serialize)]
struct Export {
    exported_at: DateTime<Utc>,
    profile: Option<ExportedProfile>,
    settings: Settings,
    daily_entries: Vec<DailyData>,
    messages: Vec<ChatMessage>,
}

pub fn handle_export(db_path: &Path, output: Option<PathBuf>) -> Result<()> {
    let session = Session::open(db_path)?;

    let mut daily_entries = session.db.get_all_daily_entries()?;
    daily_entries.retain(|e| e.date != session.state.daily.date);
    daily_entries.push(session.state.daily.clone());
    daily_entries.sort_by_key(|e| e.date);

    let export = Export {
        exported_at: Utc::now(),
        profile: session.state.profile.as_ref().map(|p| ExportedProfile {
            name: p.name.clone(),
            has_pin: p.pin.is_some(),
            created_at: p.created_at,
        }),
        settings: session.state.settings.clone(),
        daily_entries,
        messages: session.db.get_messages()?,
    };
    let json = serde_json::to_string_pretty(&export)?;

    match output {
        Some(path) => {
            std::fs::write(&path, json)
                .with_context(|| format!("Failed to write export to {}", path.display()))?;
            println!(
                "Exported {} days and {} messages to {}",
                export.daily_entries.len(),
                export.messages.len(),
                path.display()
            );
        }
        None => println!("{json}"),
    }
    Ok(())
}

pub fn handle_reset(db_path: &Path, confirmed: bool) -> Result<()> {
    if !confirmed {
        println!("This deletes your profile, tracking data and chat history.");
        println!("Run again with --yes to confirm.");
        return Ok(());
    }

    let session = Session::open(db_path)?;
    session.db.reset_all()?;
    println!("All data deleted.");
    Ok(())
}
