//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The project key is empty or contains characters outside `[A-Za-z0-9_]`.
    #[error("invalid project key '{0}', expected letters, digits or underscores")]
    InvalidProjectKey(String),

    /// The issue key is empty or contains whitespace.
    #[error("invalid issue key '{0}'")]
    InvalidIssueKey(String),

    /// The transition identifier is empty after trimming.
    #[error("transition identifier must not be empty")]
    EmptyTransitionId,

    /// A task title or checklist item name is empty after trimming.
    #[error("summary must not be empty")]
    EmptySummary,

    /// An issue type name is empty after trimming.
    #[error("issue type name must not be empty")]
    EmptyIssueType,

    /// A target status name is empty after trimming.
    #[error("status name must not be empty")]
    EmptyStatusName,
}

/// Error returned while parsing a task listing filter.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task filter: {0}, expected all, wip or done")]
pub struct ParseTaskFilterError(pub String);
