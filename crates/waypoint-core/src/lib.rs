//! Core library for the Waypoint planning agent.
//!
//! Waypoint turns a free-text task into a short ordered plan with one LLM
//! call, stores the result as a [`Decision`] in SQLite and keeps a browsable
//! history of past decisions.
//!
//! # Layers
//!
//! - [`planner`]: builds the prompt, calls the [`llm`] client, parses steps
//! - [`store`]: async Decision Store over the synchronous [`db`] layer
//! - [`workflow`]: one handler per user action over explicit session state
//! - [`display`]: markdown and timestamp formatting
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use waypoint_core::{
//!     Action, DecisionStoreBuilder, GroqClient, GroqConfig, SessionState, TaskPlanner, Workflow,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let llm = GroqClient::new(GroqConfig::new(std::env::var("GROQ_API_KEY")?))?;
//! let store = DecisionStoreBuilder::new()
//!     .with_database_path(Some("agent_decisions.db"))
//!     .build()
//!     .await?;
//!
//! let workflow = Workflow::new(TaskPlanner::new(Arc::new(llm)), store);
//! let view = workflow
//!     .handle(SessionState::default(), Action::SubmitTask("Plan a team offsite".into()))
//!     .await;
//!
//! if let Some(decision) = &view.state.current {
//!     println!("{decision}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod llm;
pub mod models;
pub mod params;
pub mod planner;
pub mod store;
pub mod workflow;

// Re-export commonly used types
pub use db::Database;
pub use error::{Result, WaypointError};
pub use llm::{GroqClient, GroqConfig, LlmClient, LlmError};
pub use models::{Decision, DecisionFilter, Plan};
pub use params::{Id, ListDecisions};
pub use planner::TaskPlanner;
pub use store::{DecisionStore, DecisionStoreBuilder};
pub use workflow::{Action, Notice, PageView, SessionState, Workflow, EXAMPLE_TASKS};
