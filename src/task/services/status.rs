//! Task status inspection and workflow moves.

use super::{
    StatusChange, StatusReport, TaskServiceResult, TransitionResolver, lookup::find_task,
};
use crate::task::{
    domain::{ProjectSettings, Summary, TaskDomainError, TaskStatus},
    ports::IssueTracker,
};
use std::sync::Arc;

/// Task status service.
pub struct StatusService<T>
where
    T: IssueTracker,
{
    tracker: Arc<T>,
    resolver: TransitionResolver<T>,
    settings: ProjectSettings,
}

impl<T> Clone for StatusService<T>
where
    T: IssueTracker,
{
    fn clone(&self) -> Self {
        Self {
            tracker: Arc::clone(&self.tracker),
            resolver: self.resolver.clone(),
            settings: self.settings.clone(),
        }
    }
}

impl<T> StatusService<T>
where
    T: IssueTracker,
{
    /// Creates a status service.
    #[must_use]
    pub fn new(tracker: Arc<T>, settings: ProjectSettings) -> Self {
        Self {
            resolver: TransitionResolver::new(Arc::clone(&tracker)),
            tracker,
            settings,
        }
    }

    /// Moves a task to `In Progress`.
    ///
    /// # Errors
    ///
    /// See [`Self::set_task_status`].
    pub async fn mark_as_in_progress(
        &self,
        project_name: &str,
        title: &str,
    ) -> TaskServiceResult<StatusChange> {
        self.set_task_status(project_name, title, TaskStatus::InProgress.tracker_name())
            .await
    }

    /// Moves a task to `Done`.
    ///
    /// # Errors
    ///
    /// See [`Self::set_task_status`].
    pub async fn mark_as_completed(
        &self,
        project_name: &str,
        title: &str,
    ) -> TaskServiceResult<StatusChange> {
        self.set_task_status(project_name, title, TaskStatus::Done.tracker_name())
            .await
    }

    /// Reports the tracker status of a task.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskServiceError::TaskNotFound`] when no task matches
    /// the title.
    pub async fn get_task_status(
        &self,
        project_name: &str,
        title: &str,
    ) -> TaskServiceResult<StatusReport> {
        let summary = Summary::new(title)?;
        let issue = find_task(
            &*self.tracker,
            self.settings.project_key(),
            project_name,
            &summary,
        )
        .await?;
        Ok(StatusReport {
            title: summary,
            issue,
        })
    }

    /// Moves a task to the named tracker status.
    ///
    /// The status name must match a transition target exactly. When no
    /// transition leads there the returned change is marked unavailable.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskServiceError::TaskNotFound`] when no task matches
    /// the title, domain errors for blank input and tracker errors from the
    /// workflow calls.
    pub async fn set_task_status(
        &self,
        project_name: &str,
        title: &str,
        target_status: &str,
    ) -> TaskServiceResult<StatusChange> {
        let summary = Summary::new(title)?;
        if target_status.trim().is_empty() {
            return Err(TaskDomainError::EmptyStatusName.into());
        }

        let issue = find_task(
            &*self.tracker,
            self.settings.project_key(),
            project_name,
            &summary,
        )
        .await?;
        let outcome = self.resolver.move_to(issue, target_status).await?;

        Ok(StatusChange {
            title: summary,
            target_status: target_status.to_owned(),
            outcome,
        })
    }
}
