//! Single entry point bundling every task service over one tracker.

use super::{
    ChecklistItemCompletion, ChecklistService, ChecklistUpdated, DescriptionUpdated,
    NextChecklistItem, NextTask, StatusChange, StatusReport, StatusService, TaskCreated,
    TaskListing, TaskQueryService, TaskService, TaskServiceResult, TasksDeleted,
};
use crate::task::{
    domain::{ProjectSettings, TaskFilter},
    ports::IssueTracker,
};
use mockable::Clock;
use std::sync::Arc;

/// Task manager façade.
///
/// All services share the same tracker handle. None of them keeps state
/// between calls.
pub struct TaskManager<T, C>
where
    T: IssueTracker,
    C: Clock + Send + Sync,
{
    tracker: Arc<T>,
    settings: ProjectSettings,
    tasks: TaskService<T, C>,
    status: StatusService<T>,
    checklist: ChecklistService<T>,
    query: TaskQueryService<T>,
}

impl<T, C> TaskManager<T, C>
where
    T: IssueTracker,
    C: Clock + Send + Sync,
{
    /// Wires every service to the tracker.
    #[must_use]
    pub fn new(tracker: Arc<T>, clock: Arc<C>, settings: ProjectSettings) -> Self {
        Self {
            tasks: TaskService::new(Arc::clone(&tracker), clock, settings.clone()),
            status: StatusService::new(Arc::clone(&tracker), settings.clone()),
            checklist: ChecklistService::new(Arc::clone(&tracker), settings.clone()),
            query: TaskQueryService::new(Arc::clone(&tracker), settings.clone()),
            tracker,
            settings,
        }
    }

    /// Confirms the configured project is reachable.
    ///
    /// # Errors
    ///
    /// Returns tracker errors when the project cannot be read.
    pub async fn verify(&self) -> TaskServiceResult<()> {
        self.tracker
            .verify_project(self.settings.project_key())
            .await?;
        Ok(())
    }

    /// Returns the project settings.
    #[must_use]
    pub const fn settings(&self) -> &ProjectSettings {
        &self.settings
    }

    /// See [`TaskService::add_task`].
    ///
    /// # Errors
    ///
    /// Propagates the service error.
    pub async fn add_task(
        &self,
        project_name: &str,
        title: &str,
        description: &str,
    ) -> TaskServiceResult<TaskCreated> {
        self.tasks.add_task(project_name, title, description).await
    }

    /// See [`TaskService::get_next_task`].
    ///
    /// # Errors
    ///
    /// Propagates the service error.
    pub async fn get_next_task(&self, project_name: &str) -> TaskServiceResult<NextTask> {
        self.tasks.get_next_task(project_name).await
    }

    /// See [`TaskService::update_task_description`].
    ///
    /// # Errors
    ///
    /// Propagates the service error.
    pub async fn update_task_description(
        &self,
        project_name: &str,
        title: &str,
        description: &str,
    ) -> TaskServiceResult<DescriptionUpdated> {
        self.tasks
            .update_task_description(project_name, title, description)
            .await
    }

    /// See [`StatusService::mark_as_in_progress`].
    ///
    /// # Errors
    ///
    /// Propagates the service error.
    pub async fn mark_as_in_progress(
        &self,
        project_name: &str,
        title: &str,
    ) -> TaskServiceResult<StatusChange> {
        self.status.mark_as_in_progress(project_name, title).await
    }

    /// See [`StatusService::mark_as_completed`].
    ///
    /// # Errors
    ///
    /// Propagates the service error.
    pub async fn mark_as_completed(
        &self,
        project_name: &str,
        title: &str,
    ) -> TaskServiceResult<StatusChange> {
        self.status.mark_as_completed(project_name, title).await
    }

    /// See [`StatusService::get_task_status`].
    ///
    /// # Errors
    ///
    /// Propagates the service error.
    pub async fn get_task_status(
        &self,
        project_name: &str,
        title: &str,
    ) -> TaskServiceResult<StatusReport> {
        self.status.get_task_status(project_name, title).await
    }

    /// See [`StatusService::set_task_status`].
    ///
    /// # Errors
    ///
    /// Propagates the service error.
    pub async fn set_task_status(
        &self,
        project_name: &str,
        title: &str,
        target_status: &str,
    ) -> TaskServiceResult<StatusChange> {
        self.status
            .set_task_status(project_name, title, target_status)
            .await
    }

    /// See [`ChecklistService::update_task_with_checklist`].
    ///
    /// # Errors
    ///
    /// Propagates the service error.
    pub async fn update_task_with_checklist<I, S>(
        &self,
        project_name: &str,
        title: &str,
        items: I,
    ) -> TaskServiceResult<ChecklistUpdated>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.checklist
            .update_task_with_checklist(project_name, title, items)
            .await
    }

    /// See [`ChecklistService::complete_checklist_item`].
    ///
    /// # Errors
    ///
    /// Propagates the service error.
    pub async fn complete_checklist_item(
        &self,
        project_name: &str,
        title: &str,
        item: &str,
    ) -> TaskServiceResult<ChecklistItemCompletion> {
        self.checklist
            .complete_checklist_item(project_name, title, item)
            .await
    }

    /// See [`ChecklistService::get_next_unchecked_checklist_item`].
    ///
    /// # Errors
    ///
    /// Propagates the service error.
    pub async fn get_next_unchecked_checklist_item(
        &self,
        project_name: &str,
        title: &str,
    ) -> TaskServiceResult<NextChecklistItem> {
        self.checklist
            .get_next_unchecked_checklist_item(project_name, title)
            .await
    }

    /// See [`TaskQueryService::get_tasks`].
    ///
    /// # Errors
    ///
    /// Propagates the service error.
    pub async fn get_tasks(
        &self,
        project_name: &str,
        filter: TaskFilter,
    ) -> TaskServiceResult<TaskListing> {
        self.query.get_tasks(project_name, filter).await
    }

    /// See [`TaskQueryService::delete_all_tasks`].
    ///
    /// # Errors
    ///
    /// Propagates the service error.
    pub async fn delete_all_tasks(&self, project_name: &str) -> TaskServiceResult<TasksDeleted> {
        self.query.delete_all_tasks(project_name).await
    }
}
