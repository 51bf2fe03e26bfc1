//! Display formatting for decisions.
//!
//! Domain models implement [`std::fmt::Display`] as markdown (see
//! [`models`]); [`datetime`] holds the timestamp wrappers shared with the
//! web page.
//!
//! ```rust
//! use waypoint_core::Decision;
//! use jiff::Timestamp;
//!
//! let decision = Decision {
//!     id: 1,
//!     task_description: "Plan a team offsite".to_string(),
//!     plan_steps: vec!["Pick date".into(), "Book venue".into(), "Send invites".into()],
//!     created_at: Timestamp::now(),
//! };
//!
//! let output = decision.to_string();
//! assert!(output.starts_with("# 1. Plan a team offsite"));
//! assert!(output.contains("1. Pick date"));
//! ```

pub mod datetime;
pub mod models;

pub use datetime::{LocalDateTime, ShortDateTime};
