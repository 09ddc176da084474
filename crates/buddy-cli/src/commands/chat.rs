/// Chat, history and prompt command handlers
use anyhow::{Context, Result};
use buddy_ai::{build_chat_request, build_system_prompt, ChatRequest};
use buddy_core::Companion;
use buddy_storage::{AiMode, ChatRole};
use serde::Serialize;
use std::path::Path;
use tabled::{Table, Tabled};

use super::helpers::{print_header, truncate_str};
use super::session::Session;

#[derive(Serialize)]
struct TurnOutput<'a> {
    category: String,
    sentiment: String,
    reply: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    request: Option<&'a ChatRequest>,
}

#[derive(Tabled)]
struct HistoryRow {
    #[tabled(rename = "Time")]
    time: String,
    #[tabled(rename = "Who")]
    who: String,
    #[tabled(rename = "Message")]
    message: String,
}

pub fn handle_chat(db_path: &Path, message: &str, mode: Option<&str>, json: bool) -> Result<()> {
    let mut session = Session::open(db_path)?;
    let mode = match mode {
        Some(m) => m.parse::<AiMode>()?,
        None => session.state.settings.ai_mode,
    };

    let mut companion = Companion::new();
    let (state, turn) = companion.respond(session.state.clone(), message, mode)?;
    session.commit(state)?;

    if json {
        let output = TurnOutput {
            category: turn.category.to_string(),
            sentiment: turn.sentiment.to_string(),
            reply: &turn.reply.content,
            request: turn.request.as_ref(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", turn.reply.content);
    if let Some(hint) = smart_mode_hint(turn.request.as_ref()) {
        eprintln!("{hint}");
    }
    Ok(())
}

/// Stderr note for text output when a model request was built but not shown
fn smart_mode_hint(request: Option<&ChatRequest>) -> Option<&'static str> {
    request.map(|_| {
        "Smart mode: pass `buddy chat --json` or `buddy prompt --json` output to your model of choice"
    })
}

pub fn handle_history(db_path: &Path, limit: Option<usize>) -> Result<()> {
    let session = Session::open(db_path)?;
    let history = &session.state.history;

    if history.is_empty() {
        println!("No messages yet. Start with: buddy chat \"hello\"");
        return Ok(());
    }

    let name = session.state.user_name().unwrap_or("You");
    let skip = limit.map_or(0, |limit| history.len().saturating_sub(limit));
    let rows: Vec<HistoryRow> = history
        .iter()
        .skip(skip)
        .map(|m| HistoryRow {
            time: m.timestamp.format("%m-%d %H:%M").to_string(),
            who: match m.role {
                ChatRole::User => name.to_string(),
                ChatRole::Assistant => String::from("DailyBuddy"),
            },
            message: truncate_str(&m.content, 80),
        })
        .collect();

    print_header("Chat History");
    println!("{}", Table::new(rows));
    Ok(())
}

pub fn handle_history_clear(db_path: &Path) -> Result<()> {
    let mut session = Session::open(db_path)?;
    let count = session.state.history.len();
    let mut state = session.state.clone();
    state.history.clear();
    session.commit(state)?;
    println!("Deleted {count} messages");
    Ok(())
}

pub fn handle_prompt(db_path: &Path, json: bool, message: Option<&str>) -> Result<()> {
    let session = Session::open(db_path)?;
    let ctx = session.state.context()?;

    if json {
        let request = match message {
            Some(message) => build_chat_request(&ctx, message),
            None => ChatRequest {
                system: build_system_prompt(&ctx),
                messages: ctx.previous_messages.clone(),
            },
        };
        let out = serde_json::to_string_pretty(&request).context("Failed to serialize request")?;
        println!("{out}");
    } else {
        println!("{}", build_system_prompt(&ctx));
    }
    Ok(())
}
