mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "buddy")]
#[command(about = "DailyBuddy: track your mood, productivity and goals", long_about = None)]
struct Cli {
    /// Database file (defaults to the local data directory)
    #[arg(long, global = true, env = buddy_core::config::DB_PATH_ENV)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Sign in (or switch user)
    Login {
        /// Your name
        name: String,
        /// Optional PIN, at least 4 characters
        #[arg(long)]
        pin: Option<String>,
    },
    /// Sign out; tracking data and chat history are kept
    Logout,
    /// Show who is signed in
    Whoami,
    /// Talk to your buddy
    Chat {
        /// Message text
        #[arg(required = true, num_args = 1..)]
        message: Vec<String>,
        /// Reply mode for this message: smart or simulated (defaults to the configured mode)
        #[arg(short, long)]
        mode: Option<String>,
        /// Print the turn as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show or set today's mood (1-10)
    Mood {
        value: Option<u8>,
    },
    /// Show or set today's productivity (1-10)
    Productivity {
        value: Option<u8>,
    },
    /// Manage today's goals
    Goal {
        #[command(subcommand)]
        action: GoalAction,
    },
    /// Show chat history
    History {
        /// Number of most recent messages to show
        #[arg(short, long)]
        limit: Option<usize>,
        /// Delete the chat history instead
        #[arg(long)]
        clear: bool,
    },
    /// Print the system prompt for an external language model
    Prompt {
        /// Print a JSON request with the transcript instead
        #[arg(long)]
        json: bool,
        /// Append this user message to the JSON request
        #[arg(short, long, requires = "json")]
        message: Option<String>,
    },
    /// Weekly mood and productivity insights
    Insights,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Data management commands
    Data {
        #[command(subcommand)]
        action: DataAction,
    },
}

#[derive(Subcommand, Debug)]
enum GoalAction {
    /// Add a goal for today
    Add {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Remove a goal by its number in `goal list`
    Remove {
        number: usize,
    },
    /// List today's goals
    List,
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Get a configuration value
    Get {
        /// Configuration key (`ai_mode` or `history_limit`)
        key: String,
    },
    /// Set a configuration value
    Set {
        /// Configuration key (`ai_mode` or `history_limit`)
        key: String,
        /// Value to set
        value: String,
    },
    /// List all configuration
    List,
}

#[derive(Subcommand, Debug)]
enum DataAction {
    /// Export all data as JSON
    Export {
        /// Output file path (prints to stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Delete all stored data
    Reset {
        /// Confirm deletion
        #[arg(long)]
        yes: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_secs()
        .init();

    let db_path = buddy_core::config::resolve_db_path(cli.db)?;

    match cli.command {
        Commands::Login { name, pin } => {
            commands::profile::handle_login(&db_path, &name, pin.as_deref())
        }
        Commands::Logout => commands::profile::handle_logout(&db_path),
        Commands::Whoami => commands::profile::handle_whoami(&db_path),
        Commands::Chat {
            message,
            mode,
            json,
        } => commands::chat::handle_chat(&db_path, &message.join(" "), mode.as_deref(), json),
        Commands::Mood { value } => commands::tracking::handle_mood(&db_path, value),
        Commands::Productivity { value } => {
            commands::tracking::handle_productivity(&db_path, value)
        }
        Commands::Goal { action } => match action {
            GoalAction::Add { text } => commands::tracking::handle_goal_add(&db_path, &text.join(" ")),
            GoalAction::Remove { number } => {
                commands::tracking::handle_goal_remove(&db_path, number)
            }
            GoalAction::List => commands::tracking::handle_goal_list(&db_path),
        },
        Commands::History { limit, clear } => {
            if clear {
                commands::chat::handle_history_clear(&db_path)
            } else {
                commands::chat::handle_history(&db_path, limit)
            }
        }
        Commands::Prompt { json, message } => {
            commands::chat::handle_prompt(&db_path, json, message.as_deref())
        }
        Commands::Insights => commands::insights::handle_insights(&db_path),
        Commands::Config { action } => match action {
            ConfigAction::Get { key } => commands::config::handle_config_get(&db_path, &key),
            ConfigAction::Set { key, value } => {
                commands::config::handle_config_set(&db_path, &key, &value)
            }
            ConfigAction::List => commands::config::handle_config_list(&db_path),
        },
        Commands::Data { action } => match action {
            DataAction::Export { output } => commands::data::handle_export(&db_path, output),
            DataAction::Reset { yes } => commands::data::handle_reset(&db_path, yes),
        },
    }
}
