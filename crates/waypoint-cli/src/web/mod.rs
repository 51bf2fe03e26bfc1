//! Web UI for the planning agent.
//!
//! Every request rebuilds the page from the Decision Store; the only state
//! carried between requests is the `current` decision ID, sent back by the
//! page as a hidden form field or query parameter.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use axum::{
    extract::{Path, Query, State},
    response::Html,
    routing::{get, post},
    Form, Router,
};
use log::{error, info};
use serde::Deserialize;
use tokio::net::TcpListener;
use waypoint_core::{Action, SessionState, Workflow};

mod page;

/// Shared state for all handlers.
#[derive(Clone)]
pub struct AppState {
    pub workflow: Workflow,
    /// Model name shown in the page footer.
    pub model: String,
}

/// Optional reference to the decision currently on screen.
#[derive(Debug, Default, Deserialize)]
pub struct CurrentForm {
    current: Option<String>,
}

impl CurrentForm {
    fn id(&self) -> Option<u64> {
        parse_current(self.current.as_deref())
    }
}

#[derive(Debug, Deserialize)]
pub struct TaskForm {
    #[serde(default)]
    task: String,
    current: Option<String>,
}

/// The current decision ID, ignoring empty or malformed values.
fn parse_current(raw: Option<&str>) -> Option<u64> {
    raw.and_then(|s| s.trim().parse().ok())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/tasks", post(submit_task))
        .route("/examples/{index}", post(run_example))
        .route("/decisions/{id}/delete", post(delete_decision))
        .with_state(state)
}

/// Binds the listening socket for `host:port`.
pub async fn bind(host: &str, port: u16) -> Result<TcpListener> {
    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .with_context(|| format!("Invalid bind address {host}:{port}"))?;

    TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))
}

/// Serves the UI on `listener` until Ctrl+C.
pub async fn serve(listener: TcpListener, state: AppState) -> Result<()> {
    if let Ok(addr) = listener.local_addr() {
        info!("Waypoint listening on http://{addr}");
    }

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Web server failed")?;

    info!("Waypoint shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for Ctrl+C: {e}");
        std::future::pending::<()>().await;
    }
}

async fn respond(app: &AppState, current: Option<u64>, action: Action) -> Html<String> {
    let state = SessionState::with_current(app.workflow.restore_current(current).await);
    let view = app.workflow.handle(state, action).await;
    Html(page::render_page(&view, &app.model))
}

async fn index(State(app): State<AppState>, Query(query): Query<CurrentForm>) -> Html<String> {
    respond(&app, query.id(), Action::Refresh).await
}

async fn submit_task(State(app): State<AppState>, Form(form): Form<TaskForm>) -> Html<String> {
    let current = parse_current(form.current.as_deref());
    respond(&app, current, Action::SubmitTask(form.task)).await
}

async fn run_example(
    State(app): State<AppState>,
    Path(index): Path<usize>,
    Form(form): Form<CurrentForm>,
) -> Html<String> {
    respond(&app, form.id(), Action::RunExample(index)).await
}

async fn delete_decision(
    State(app): State<AppState>,
    Path(id): Path<u64>,
    Form(form): Form<CurrentForm>,
) -> Html<String> {
    respond(&app, form.id(), Action::DeleteDecision(id)).await
}
