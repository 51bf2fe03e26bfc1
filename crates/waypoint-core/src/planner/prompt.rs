//! Prompt construction for the planning call.

use crate::models::{MAX_STEPS, MIN_STEPS};

/// Builds the single prompt sent to the model for `task`.
pub fn planning_prompt(task: &str) -> String {
    let blanks: String = (1..=MAX_STEPS).map(|i| format!("{i}. \n")).collect();
    format!(
        "WORKER MODE: Plan this task like a software engineer.\n\
         \n\
         Task: {task}\n\
         \n\
         Return ONLY a clean numbered list of {MIN_STEPS}-{MAX_STEPS} actionable steps:\n\
         {blanks}"
    )
    .trim_end()
    .to_string()
}
