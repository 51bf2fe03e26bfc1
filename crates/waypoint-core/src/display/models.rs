//! Display implementations for domain models.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{Decision, Plan};

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps().iter().enumerate() {
            writeln!(f, "{}. {step}", i + 1)?;
        }
        Ok(())
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.task_description)?;
        writeln!(f)?;

        writeln!(f, "- Decision: {}", self.summary())?;
        writeln!(f, "- Why: {}", self.reasoning())?;
        writeln!(f, "- When: {}", LocalDateTime(&self.created_at))?;

        writeln!(f, "\n## Steps")?;
        writeln!(f)?;
        for (i, step) in self.plan_steps.iter().enumerate() {
            writeln!(f, "{}. {step}", i + 1)?;
        }
        writeln!(f)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;

    #[test]
    fn test_decision_display() {
        let decision = Decision {
            id: 7,
            task_description: "Plan a team offsite".to_string(),
            plan_steps: vec![
                "Pick date".to_string(),
                "Book venue".to_string(),
                "Send invites".to_string(),
            ],
            created_at: Timestamp::from_second(1_640_995_200).unwrap(),
        };

        let output = decision.to_string();
        assert!(output.starts_with("# 7. Plan a team offsite\n"));
        assert!(output.contains("- Decision: Plan Generated: 3 steps"));
        assert!(output.contains("## Steps\n\n1. Pick date\n2. Book venue\n3. Send invites\n"));
    }

    #[test]
    fn test_plan_display_numbers_steps() {
        let plan = Plan::new(["a", "b", "c"]).unwrap();
        assert_eq!(plan.to_string(), "1. a\n2. b\n3. c\n");
    }
}
