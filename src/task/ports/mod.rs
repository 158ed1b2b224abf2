//! Port contracts for task management.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

pub mod tracker;

pub use tracker::{IssueTracker, IssueTrackerError, IssueTrackerResult};

#[cfg(test)]
pub use tracker::MockIssueTracker;
