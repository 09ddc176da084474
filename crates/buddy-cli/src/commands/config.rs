/// Configuration management command handlers
use anyhow::Result;
use buddy_storage::{AiMode, Settings};
use std::path::Path;

use super::helpers::print_header;
use super::session::Session;

const KEYS: &[&str] = &["ai_mode", "history_limit"];

pub fn handle_config_get(db_path: &Path, key: &str) -> Result<()> {
    let session = Session::open(db_path)?;
    let value = get_config_value(&session.state.settings, key)?;
    println!("{key} = {value}");
    Ok(())
}

pub fn handle_config_set(db_path: &Path, key: &str, value: &str) -> Result<()> {
    let mut session = Session::open(db_path)?;
    let mut state = session.state.clone();
    set_config_value(&mut state.settings, key, value)?;
    session.commit(state.trim_history())?;
    println!("Set {key} = {value}");
    Ok(())
}

pub fn handle_config_list(db_path: &Path) -> Result<()> {
    let session = Session::open(db_path)?;

    print_header("Configuration");
    for key in KEYS {
        println!("  {key} = {}", get_config_value(&session.state.settings, key)?);
    }
    Ok(())
}

fn get_config_value(settings: &Settings, key: &str) -> Result<String> {
    match key {
        "ai_mode" => Ok(settings.ai_mode.to_string()),
        "history_limit" => Ok(settings.history_limit.to_string()),
        _ => anyhow::bail!("Unknown config key: {key}. Valid keys: {}", KEYS.join(", ")),
    }
}

fn set_config_value(settings: &mut Settings, key: &str, value: &str) -> Result<()> {
    match key {
        "ai_mode" => settings.ai_mode = value.parse::<AiMode>()?,
        "history_limit" => {
            let limit: u32 = value
                .parse()
                .map_err(|_| anyhow::anyhow!("history_limit must be a whole number"))?;
            if limit < 2 {
                anyhow::bail!("history_limit must be at least 2");
            }
            settings.history_limit = limit;
        }
        _ => anyhow::bail!("Unknown config key: {key}. Valid keys: {}", KEYS.join(", ")),
    }
    Ok(())
}
