//! Adapter implementations of the task ports.

pub mod jira;
pub mod memory;
