//! Taskbridge: task management on top of the Jira issue tracker.
//!
//! This crate maps a simple project / task / checklist model onto tracker
//! issues and sub-issues. Tasks are located by title with JQL searches and
//! moved between statuses through the tracker's workflow transitions.
//!
//! # Architecture
//!
//! Taskbridge follows hexagonal architecture principles:
//!
//! - **Domain**: Pure task model with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (Jira REST, in-memory)
//!
//! # Modules
//!
//! - [`task`]: Task, status, checklist and query operations
//! - [`logging`]: Tracing subscriber setup for binaries

pub mod logging;
pub mod task;
