//! Tracker port: the remote issue-tracking system behind every task.

use crate::task::domain::{
    Issue, IssueKey, IssueQuery, NewIssue, ProjectKey, Transition, TransitionId,
};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for issue tracker operations.
pub type IssueTrackerResult<T> = Result<T, IssueTrackerError>;

/// Issue tracker contract.
///
/// Each method is a single request/response round trip. Implementations hold
/// no task state of their own.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IssueTracker: Send + Sync {
    /// Confirms the project exists and is reachable with the configured
    /// credentials.
    ///
    /// # Errors
    ///
    /// Returns [`IssueTrackerError::ProjectUnavailable`] when the project
    /// cannot be read.
    async fn verify_project(&self, project: &ProjectKey) -> IssueTrackerResult<()>;

    /// Runs a search and returns matching issues in query order.
    async fn search(&self, query: &IssueQuery) -> IssueTrackerResult<Vec<Issue>>;

    /// Creates an issue.
    ///
    /// Returns `None` when the tracker accepted the request without reporting
    /// a key.
    async fn create_issue(&self, issue: &NewIssue) -> IssueTrackerResult<Option<IssueKey>>;

    /// Replaces an issue's description with plain text.
    async fn update_description(
        &self,
        key: &IssueKey,
        description: &str,
    ) -> IssueTrackerResult<()>;

    /// Lists the transitions currently available for an issue.
    ///
    /// An unknown issue yields an empty list.
    async fn transitions(&self, key: &IssueKey) -> IssueTrackerResult<Vec<Transition>>;

    /// Applies a transition to an issue.
    async fn apply_transition(
        &self,
        key: &IssueKey,
        transition: &TransitionId,
    ) -> IssueTrackerResult<()>;

    /// Deletes an issue, optionally with its sub-issues.
    ///
    /// Deleting an issue that no longer exists is not an error.
    async fn delete_issue(&self, key: &IssueKey, with_subtasks: bool) -> IssueTrackerResult<()>;
}

/// Errors returned by issue tracker implementations.
#[derive(Debug, Clone, Error)]
pub enum IssueTrackerError {
    /// The project could not be read during connection checks.
    #[error("failed to connect to project {project}: {reason}")]
    ProjectUnavailable {
        /// Project key that was checked.
        project: ProjectKey,
        /// Underlying failure description.
        reason: String,
    },

    /// The tracker answered with a non-success status.
    #[error("tracker rejected request with HTTP {status}: {body}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Response body, possibly empty.
        body: String,
    },

    /// The tracker response could not be interpreted.
    #[error("invalid tracker response: {0}")]
    InvalidResponse(String),

    /// Network or client failure.
    #[error("tracker transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl IssueTrackerError {
    /// Wraps a transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
