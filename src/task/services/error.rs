//! Service-level errors for task operations.

use crate::task::{domain::TaskDomainError, ports::IssueTrackerError};
use thiserror::Error;

/// Errors returned by the task services.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// No task matched the title in the project.
    #[error("task '{title}' not found in project '{project_name}'")]
    TaskNotFound {
        /// Project label supplied by the caller.
        project_name: String,
        /// Title that was searched for.
        title: String,
    },

    /// The task has no checklist item matching the name.
    #[error("checklist item '{item}' not found for task '{title}'")]
    ChecklistItemNotFound {
        /// Checklist item name that was searched for.
        item: String,
        /// Parent task title.
        title: String,
    },

    /// Every checklist item of the task is done, or it has none.
    #[error("no unchecked checklist items found for task '{title}'")]
    NoUncheckedChecklistItems {
        /// Parent task title.
        title: String,
    },

    /// Input validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),

    /// The tracker call failed.
    #[error(transparent)]
    Tracker(#[from] IssueTrackerError),
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;
