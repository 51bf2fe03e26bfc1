//! Per-action handlers for the planning agent.
//!
//! Each user interaction is an [`Action`]. [`Workflow::handle`] takes the
//! caller's [`SessionState`] together with the action and returns a
//! [`PageView`]: the new state plus the history to show next to it. Nothing
//! is kept between calls other than what the caller passes back in and what
//! sits in the Decision Store.
//!
//! ```text
//! SessionState ─┐
//!               ├─▶ Workflow::handle ─▶ PageView { state, history }
//!       Action ─┘        │
//!                        ├─▶ TaskPlanner (LLM)
//!                        └─▶ DecisionStore (SQLite)
//! ```
//!
//! Handlers never fail: planning and storage errors become a [`Notice`] on
//! the returned state, so the caller can always render a page.

use log::{info, warn};
use serde::Serialize;

use crate::{
    error::WaypointError,
    models::Decision,
    params::{Id, ListDecisions},
    planner::TaskPlanner,
    store::DecisionStore,
};

/// Number of history entries shown when nothing else is configured.
pub const DEFAULT_HISTORY_LIMIT: usize = 8;

/// A canned task offered as a one-click scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExampleTask {
    pub label: &'static str,
    pub task: &'static str,
}

/// The fixed test scenarios.
pub const EXAMPLE_TASKS: &[ExampleTask] = &[
    ExampleTask {
        label: "SaaS Dashboard",
        task: "Launch new SaaS dashboard",
    },
    ExampleTask {
        label: "Intern Onboarding",
        task: "Create onboarding plan for new engineering intern",
    },
];

/// A message shown to the user after an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "level", content = "message", rename_all = "lowercase")]
pub enum Notice {
    Success(String),
    Warning(String),
    Error(String),
}

impl Notice {
    /// The message text, whatever the level.
    pub fn message(&self) -> &str {
        match self {
            Notice::Success(m) | Notice::Warning(m) | Notice::Error(m) => m,
        }
    }

    /// Lowercase level name.
    pub fn level(&self) -> &'static str {
        match self {
            Notice::Success(_) => "success",
            Notice::Warning(_) => "warning",
            Notice::Error(_) => "error",
        }
    }

    /// Maps a failed action to a notice. Planning failures are warnings,
    /// everything else is a storage error.
    fn from_error(err: &WaypointError) -> Self {
        match err {
            WaypointError::InvalidInput { reason, .. } => Notice::Warning(reason.clone()),
            e if e.is_planning_failure() => Notice::Warning(format!("Planning failed: {e}")),
            e => Notice::Error(format!("Storage failed: {e}")),
        }
    }
}

/// Session state carried from one action to the next.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SessionState {
    /// The plan currently shown in the main panel
    pub current: Option<Decision>,
    /// Feedback from the last action
    pub notice: Option<Notice>,
}

impl SessionState {
    /// State showing `current` with no notice.
    pub fn with_current(current: Option<Decision>) -> Self {
        Self {
            current,
            notice: None,
        }
    }
}

/// A user interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Plan a typed task
    SubmitTask(String),
    /// Plan one of [`EXAMPLE_TASKS`] by index
    RunExample(usize),
    /// Remove a decision from the history
    DeleteDecision(u64),
    /// Re-read the history only
    Refresh,
}

/// Everything needed to render a page after an action.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PageView {
    pub state: SessionState,
    /// Most recent decisions first
    pub history: Vec<Decision>,
}

/// Wires the planner and the store together behind [`Workflow::handle`].
#[derive(Clone)]
pub struct Workflow {
    planner: TaskPlanner,
    store: DecisionStore,
    history_limit: usize,
}

impl Workflow {
    pub fn new(planner: TaskPlanner, store: DecisionStore) -> Self {
        Self {
            planner,
            store,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }

    /// Sets how many decisions the history holds.
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    /// The store this workflow writes to.
    pub fn store(&self) -> &DecisionStore {
        &self.store
    }

    /// Applies `action` to `state` and returns the page to show.
    pub async fn handle(&self, state: SessionState, action: Action) -> PageView {
        let state = match action {
            Action::SubmitTask(task) => self.submit_task(state, &task).await,
            Action::RunExample(index) => match EXAMPLE_TASKS.get(index) {
                Some(example) => self.submit_task(state, example.task).await,
                None => SessionState {
                    notice: Some(Notice::Warning(format!("Unknown example scenario {index}"))),
                    ..state
                },
            },
            Action::DeleteDecision(id) => self.delete_decision(state, id).await,
            Action::Refresh => state,
        };

        self.render(state).await
    }

    /// Plans `task`, stores the result and makes it current.
    ///
    /// On failure the previous current plan stays on screen and nothing is
    /// stored.
    async fn submit_task(&self, state: SessionState, task: &str) -> SessionState {
        let task = task.trim();
        if task.is_empty() {
            return SessionState {
                notice: Some(Notice::Warning("Please enter a task description".to_string())),
                ..state
            };
        }

        let outcome = match self.planner.plan(task).await {
            Ok(plan) => self.store.create(task, plan).await,
            Err(e) => Err(e),
        };

        match outcome {
            Ok(decision) => {
                info!("Planned decision {} with {} steps", decision.id, decision.plan_steps.len());
                let notice = Notice::Success(format!(
                    "Plan saved | {} steps",
                    decision.plan_steps.len()
                ));
                SessionState {
                    current: Some(decision),
                    notice: Some(notice),
                }
            }
            Err(e) => {
                warn!("Task {task:?} was not planned: {e}");
                SessionState {
                    notice: Some(Notice::from_error(&e)),
                    ..state
                }
            }
        }
    }

    /// Deletes a decision. Unknown IDs are ignored without a notice.
    async fn delete_decision(&self, state: SessionState, id: u64) -> SessionState {
        match self.store.delete(&Id { id }).await {
            Ok(removed) => {
                let current = state.current.filter(|d| d.id != id);
                let notice = removed.then(|| Notice::Success(format!("Deleted decision {id}")));
                SessionState { current, notice }
            }
            Err(e) => {
                warn!("Failed to delete decision {id}: {e}");
                SessionState {
                    notice: Some(Notice::from_error(&e)),
                    ..state
                }
            }
        }
    }

    /// Loads the history for the page. A failed read keeps the page usable
    /// and reports the error unless an earlier notice is already shown.
    async fn render(&self, mut state: SessionState) -> PageView {
        let params = ListDecisions {
            limit: Some(self.history_limit),
            task_contains: None,
        };

        let history = match self.store.list(&params).await {
            Ok(history) => history,
            Err(e) => {
                warn!("Failed to load decision history: {e}");
                if state.notice.is_none() {
                    state.notice = Some(Notice::from_error(&e));
                }
                Vec::new()
            }
        };

        PageView { state, history }
    }

    /// Looks up a decision to restore as the current one, e.g. from a
    /// request parameter. Lookup failures are treated as "not found".
    pub async fn restore_current(&self, id: Option<u64>) -> Option<Decision> {
        let id = id?;
        match self.store.get(&Id { id }).await {
            Ok(decision) => decision,
            Err(e) => {
                warn!("Failed to restore decision {id}: {e}");
                None
            }
        }
    }
}
