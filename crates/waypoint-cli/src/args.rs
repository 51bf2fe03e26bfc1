use std::path::PathBuf;

use clap::Parser;
use waypoint_core::workflow::DEFAULT_HISTORY_LIMIT;

use crate::config::LlmArgs;

/// Waypoint: a planning agent that turns tasks into short step-by-step plans
///
/// Serves a web page where a task is submitted, planned by an LLM and stored
/// as a decision in a local SQLite database, next to the history of earlier
/// decisions.
#[derive(Parser)]
#[command(version, about, name = "waypoint")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/waypoint/agent_decisions.db
    #[arg(long)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long)]
    pub no_color: bool,

    /// Address to bind the web server to
    #[arg(long, default_value = "127.0.0.1")]
    pub bind: String,

    /// Port to listen on
    #[arg(long, short, default_value_t = 8501)]
    pub port: u16,

    /// Number of decisions shown in the history sidebar
    #[arg(long, default_value_t = DEFAULT_HISTORY_LIMIT)]
    pub history_limit: usize,

    #[command(flatten)]
    pub llm: LlmArgs,
}
