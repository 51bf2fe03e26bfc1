//! Data models for decisions and plans.
//!
//! A [`Decision`] is the only persisted entity: a task description, the
//! [`Plan`] generated for it and the time it was created. Display
//! implementations live in [`crate::display`].

pub mod decision;
pub mod filters;
pub mod plan;

pub use decision::Decision;
pub use filters::DecisionFilter;
pub use plan::{Plan, MAX_STEPS, MIN_STEPS};
