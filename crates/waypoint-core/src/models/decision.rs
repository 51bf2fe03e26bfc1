//! Decision model definition and related functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A persisted pairing of a task description with its generated plan.
///
/// Decisions are immutable once stored; the only way to change the history
/// is to delete a decision.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Decision {
    /// Unique identifier assigned by the store
    pub id: u64,

    /// The original free-text task
    pub task_description: String,

    /// Ordered plan steps (3 to 5 entries)
    pub plan_steps: Vec<String>,

    /// Timestamp when the decision was created (UTC)
    pub created_at: Timestamp,
}

impl Decision {
    /// Short headline shown for the decision, e.g. `Plan Generated: 3 steps`.
    pub fn summary(&self) -> String {
        format!("Plan Generated: {} steps", self.plan_steps.len())
    }

    /// One-line explanation of how the plan came about.
    pub fn reasoning(&self) -> String {
        format!(
            "Generated {} actionable steps based on task requirements",
            self.plan_steps.len()
        )
    }

    /// The task description cut to at most `max_chars` characters, with an
    /// ellipsis when something was removed.
    pub fn task_preview(&self, max_chars: usize) -> String {
        let mut chars = self.task_description.chars();
        let preview: String = chars.by_ref().take(max_chars).collect();
        if chars.next().is_some() {
            format!("{preview}...")
        } else {
            preview
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decision(task: &str, steps: usize) -> Decision {
        Decision {
            id: 1,
            task_description: task.to_string(),
            plan_steps: (1..=steps).map(|i| format!("Step {i}")).collect(),
            created_at: Timestamp::UNIX_EPOCH,
        }
    }

    #[test]
    fn test_summary_and_reasoning_count_steps() {
        let d = decision("Plan a team offsite", 4);
        assert_eq!(d.summary(), "Plan Generated: 4 steps");
        assert_eq!(
            d.reasoning(),
            "Generated 4 actionable steps based on task requirements"
        );
    }

    #[test]
    fn test_task_preview() {
        let d = decision("Create onboarding plan for new engineering intern", 3);
        assert_eq!(d.task_preview(10), "Create onb...");
        assert_eq!(d.task_preview(200), d.task_description);

        let unicode = decision("Überprüfung", 3);
        assert_eq!(unicode.task_preview(3), "Übe...");
    }
}
