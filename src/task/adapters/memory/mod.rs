//! In-memory adapters used by tests and local experiments.

mod tracker;

pub use tracker::InMemoryIssueTracker;
