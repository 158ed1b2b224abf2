//! Task listings and project purge.

use super::{TaskListing, TaskServiceResult, TasksDeleted};
use crate::task::{
    domain::{Clause, Issue, IssueQuery, ProjectSettings, TaskFilter, TaskSummary},
    ports::IssueTracker,
};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info};

/// Largest number of issues considered by [`TaskQueryService::delete_all_tasks`].
pub const PURGE_SEARCH_LIMIT: u32 = 1000;

/// Task listing service.
pub struct TaskQueryService<T>
where
    T: IssueTracker,
{
    tracker: Arc<T>,
    settings: ProjectSettings,
}

impl<T> Clone for TaskQueryService<T>
where
    T: IssueTracker,
{
    fn clone(&self) -> Self {
        Self {
            tracker: Arc::clone(&self.tracker),
            settings: self.settings.clone(),
        }
    }
}

impl<T> TaskQueryService<T>
where
    T: IssueTracker,
{
    /// Creates a query service.
    #[must_use]
    pub const fn new(tracker: Arc<T>, settings: ProjectSettings) -> Self {
        Self { tracker, settings }
    }

    /// Lists top-level tasks, optionally restricted to one status.
    ///
    /// # Errors
    ///
    /// Returns tracker errors when the search fails.
    pub async fn get_tasks(
        &self,
        project_name: &str,
        filter: TaskFilter,
    ) -> TaskServiceResult<TaskListing> {
        let mut query = IssueQuery::in_project(self.settings.project_key()).and(Clause::TopLevel);
        if let Some(status) = filter.status() {
            query = query.and(Clause::StatusIs(status.tracker_name().to_owned()));
        }

        let tasks = self
            .tracker
            .search(&query)
            .await?
            .into_iter()
            .map(TaskSummary::from)
            .collect::<Vec<_>>();
        debug!(%filter, count = tasks.len(), "listed tasks");

        Ok(TaskListing {
            project_name: project_name.to_owned(),
            filter,
            tasks,
        })
    }

    /// Deletes every task in the project together with its checklist items.
    ///
    /// Top-level issues are deleted with their sub-tasks; sub-tasks whose
    /// parent was not part of the search result are deleted on their own.
    /// The reported count covers every issue the search returned, checklist
    /// items included.
    ///
    /// # Errors
    ///
    /// Returns tracker errors from the search or any deletion. Deletions
    /// performed before the failure are not rolled back.
    pub async fn delete_all_tasks(&self, project_name: &str) -> TaskServiceResult<TasksDeleted> {
        let query = IssueQuery::in_project(self.settings.project_key()).limit(PURGE_SEARCH_LIMIT);
        let issues = self.tracker.search(&query).await?;

        for issue in deletion_roots(&issues) {
            self.tracker.delete_issue(&issue.key, true).await?;
            debug!(issue = %issue.key, "deleted issue");
        }
        let count = issues.len();
        info!(project = %self.settings.project_key(), count, "deleted all tasks");

        Ok(TasksDeleted {
            project_name: project_name.to_owned(),
            count,
        })
    }
}

/// Selects the issues to delete directly: top-level issues plus sub-issues
/// whose parent is absent from `issues`.
fn deletion_roots(issues: &[Issue]) -> Vec<&Issue> {
    let present: HashSet<_> = issues.iter().map(|issue| &issue.key).collect();
    issues
        .iter()
        .filter(|issue| {
            issue
                .parent
                .as_ref()
                .is_none_or(|parent| !present.contains(parent))
        })
        .collect()
}
