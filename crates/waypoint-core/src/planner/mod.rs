//! Task planning: one LLM round trip from a task description to a [`Plan`].
//!
//! The whole contract is `plan(task) -> Result<Plan>`:
//!
//! 1. build one prompt embedding the task ([`prompt::planning_prompt`]),
//! 2. send it through an [`LlmClient`] once, with no retry,
//! 3. parse the answer into steps ([`parser::parse_plan_steps`]),
//! 4. apply the step-count policy: extra steps beyond [`MAX_STEPS`] are
//!    dropped, fewer than [`MIN_STEPS`] fail the call.
//!
//! Nothing is persisted here; see [`crate::workflow`] for the full
//! interaction.

use std::sync::Arc;

use log::{debug, warn};

use crate::{
    error::{Result, WaypointError},
    llm::{CompletionRequest, LlmClient},
    models::{Plan, MAX_STEPS, MIN_STEPS},
};

pub mod parser;
pub mod prompt;

/// Turns task descriptions into plans through an LLM.
#[derive(Clone)]
pub struct TaskPlanner {
    llm: Arc<dyn LlmClient>,
}

impl TaskPlanner {
    /// Creates a planner that sends its prompts to `llm`.
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }

    /// Produces a plan of 3 to 5 steps for `task`.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if `task` is blank (the LLM is not called)
    /// - `Llm` if the request fails
    /// - `PlanningFailed` if the answer holds fewer than 3 usable steps
    pub async fn plan(&self, task: &str) -> Result<Plan> {
        let task = task.trim();
        if task.is_empty() {
            return Err(WaypointError::invalid_input("task_description")
                .with_reason("Task description cannot be empty"));
        }

        let request = CompletionRequest::user(prompt::planning_prompt(task));
        let response = self.llm.complete(request).await?;

        let text = response.content.unwrap_or_default();
        let mut steps = parser::parse_plan_steps(&text);
        debug!("Parsed {} candidate steps for task {task:?}", steps.len());

        if steps.len() > MAX_STEPS {
            debug!("Keeping the first {MAX_STEPS} steps of the model's answer");
            steps.truncate(MAX_STEPS);
        }

        if steps.len() < MIN_STEPS {
            warn!(
                "Model returned {} usable steps for task {task:?}, need at least {MIN_STEPS}",
                steps.len()
            );
            return Err(WaypointError::planning_failed(format!(
                "the model returned {} usable steps, expected {MIN_STEPS} to {MAX_STEPS}",
                steps.len()
            )));
        }

        Plan::new(steps).map_err(|e| WaypointError::planning_failed(e.to_string()))
    }
}
