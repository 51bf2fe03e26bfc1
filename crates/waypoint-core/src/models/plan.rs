//! Plan model definition and validation.

use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WaypointError};

/// Fewest steps a plan may contain.
pub const MIN_STEPS: usize = 3;

/// Most steps a plan may contain.
pub const MAX_STEPS: usize = 5;

/// An ordered sequence of 3 to 5 non-empty plan steps.
///
/// The only way to obtain a `Plan` is [`Plan::new`], so holding one means
/// the step-count invariant already holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Plan(Vec<String>);

impl Plan {
    /// Validates and wraps a list of steps.
    ///
    /// Each step is trimmed. Fails with `InvalidInput` when a step is blank
    /// or the count falls outside `MIN_STEPS..=MAX_STEPS`.
    pub fn new<I, S>(steps: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let steps: Vec<String> = steps
            .into_iter()
            .map(|s| s.into().trim().to_string())
            .collect();

        if let Some(position) = steps.iter().position(String::is_empty) {
            return Err(WaypointError::invalid_input("plan_steps")
                .with_reason(format!("step {} is empty", position + 1)));
        }

        if !(MIN_STEPS..=MAX_STEPS).contains(&steps.len()) {
            return Err(WaypointError::invalid_input("plan_steps").with_reason(format!(
                "expected between {MIN_STEPS} and {MAX_STEPS} steps, got {}",
                steps.len()
            )));
        }

        Ok(Self(steps))
    }

    /// The steps in order.
    pub fn steps(&self) -> &[String] {
        &self.0
    }

    /// Consumes the plan, returning the steps.
    pub fn into_steps(self) -> Vec<String> {
        self.0
    }
}

impl Deref for Plan {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'de> Deserialize<'de> for Plan {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let steps = Vec::<String>::deserialize(deserializer)?;
        Plan::new(steps).map_err(serde::de::Error::custom)
    }
}
