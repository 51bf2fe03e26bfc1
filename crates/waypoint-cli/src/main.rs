//! Waypoint planning agent
//!
//! Launches the web UI over a local Decision Store.

mod args;
mod banner;
mod config;
mod renderer;
mod web;

use std::sync::Arc;

use anyhow::{Context, Result};
use args::Args;
use banner::Banner;
use clap::Parser;
use log::info;
use renderer::TerminalRenderer;
use waypoint_core::{DecisionStoreBuilder, GroqClient, TaskPlanner, Workflow};
use web::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before the logger so RUST_LOG can come from it too
    dotenvy::dotenv().ok();
    env_logger::init();

    let Args {
        database_file,
        no_color,
        bind,
        port,
        history_limit,
        llm,
    } = Args::parse();

    let client = GroqClient::new(llm.groq_config()?).context("Failed to create Groq client")?;
    let planner = TaskPlanner::new(Arc::new(client));

    let store = DecisionStoreBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to open decision store")?;
    let stored_decisions = store
        .list_all()
        .await
        .context("Failed to read decision history")?
        .len();

    info!("Waypoint started");

    let listener = web::bind(&bind, port).await?;
    let addr = listener.local_addr().context("Failed to read bound address")?;

    TerminalRenderer::new(!no_color).render(
        &Banner {
            addr,
            database: store.database_path(),
            model: &llm.model,
            stored_decisions,
        }
        .to_string(),
    );

    let state = AppState {
        workflow: Workflow::new(planner, store).with_history_limit(history_limit),
        model: llm.model,
    };

    web::serve(listener, state).await
}
