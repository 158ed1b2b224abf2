//! Status change by workflow transition lookup.

use super::{TaskServiceResult, TransitionOutcome};
use crate::task::{
    domain::{Issue, find_transition},
    ports::IssueTracker,
};
use std::sync::Arc;
use tracing::{info, warn};

/// Moves issues between statuses through the tracker's workflow.
///
/// Transitions are listed fresh for every call; the first one landing in the
/// requested status is applied.
pub struct TransitionResolver<T>
where
    T: IssueTracker,
{
    tracker: Arc<T>,
}

impl<T> Clone for TransitionResolver<T>
where
    T: IssueTracker,
{
    fn clone(&self) -> Self {
        Self {
            tracker: Arc::clone(&self.tracker),
        }
    }
}

impl<T> TransitionResolver<T>
where
    T: IssueTracker,
{
    /// Creates a resolver over the tracker.
    #[must_use]
    pub const fn new(tracker: Arc<T>) -> Self {
        Self { tracker }
    }

    /// Moves `issue` into `target_status` if the workflow allows it.
    ///
    /// A missing transition is reported as
    /// [`TransitionOutcome::Unavailable`], not as an error. On success the
    /// returned issue carries the new status.
    ///
    /// # Errors
    ///
    /// Returns tracker errors from listing or applying transitions.
    pub async fn move_to(
        &self,
        mut issue: Issue,
        target_status: &str,
    ) -> TaskServiceResult<TransitionOutcome> {
        let transitions = self.tracker.transitions(&issue.key).await?;
        let Some(transition) = find_transition(&transitions, target_status).cloned() else {
            warn!(issue = %issue.key, target_status, "no transition leads to target status");
            return Ok(TransitionOutcome::Unavailable { issue });
        };

        self.tracker
            .apply_transition(&issue.key, &transition.id)
            .await?;
        info!(
            issue = %issue.key,
            transition = %transition.id,
            target_status,
            "applied transition"
        );
        issue.status.clone_from(&transition.to_status);
        Ok(TransitionOutcome::Applied { issue, transition })
    }
}
