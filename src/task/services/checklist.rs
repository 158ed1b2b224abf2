//! Checklists stored as sub-tasks of a task.

use super::{
    ChecklistItemCompletion, ChecklistUpdated, NextChecklistItem, TaskServiceError,
    TaskServiceResult, TransitionResolver, lookup::find_task,
};
use crate::task::{
    domain::{Clause, IssueQuery, NewIssue, Ordering, ProjectSettings, Summary, TaskStatus},
    ports::IssueTracker,
};
use std::sync::Arc;
use tracing::{debug, info};

/// Checklist service.
pub struct ChecklistService<T>
where
    T: IssueTracker,
{
    tracker: Arc<T>,
    resolver: TransitionResolver<T>,
    settings: ProjectSettings,
}

impl<T> Clone for ChecklistService<T>
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

impl<T> ChecklistService<T>
where
    T: IssueTracker,
{
    /// Creates a checklist service.
    #[must_use]
    pub fn new(tracker: Arc<T>, settings: ProjectSettings) -> Self {
        Self {
            resolver: TransitionResolver::new(Arc::clone(&tracker)),
            tracker,
            settings,
        }
    }

    /// Appends checklist items to a task, one sub-task per item, in order.
    ///
    /// Every item is validated before anything is created.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::TaskNotFound`] when no task matches the
    /// title, domain errors for blank item names and tracker errors when a
    /// creation fails. Items created before a failure are kept.
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
        let summary = Summary::new(title)?;
        let item_summaries = items
            .into_iter()
            .map(Summary::new)
            .collect::<Result<Vec<_>, _>>()?;

        let parent = find_task(
            &*self.tracker,
            self.settings.project_key(),
            project_name,
            &summary,
        )
        .await?;

        let mut created = Vec::with_capacity(item_summaries.len());
        for item in item_summaries {
            let sub_task = NewIssue::new(
                self.settings.project_key().clone(),
                self.settings.subtask_type().clone(),
                item,
            )
            .with_parent(parent.key.clone());
            if let Some(key) = self.tracker.create_issue(&sub_task).await? {
                debug!(parent = %parent.key, item = %key, "created checklist item");
                created.push(key);
            }
        }
        info!(parent = %parent.key, count = created.len(), "checklist updated");

        Ok(ChecklistUpdated {
            project_name: project_name.to_owned(),
            title: summary,
            parent,
            created,
        })
    }

    /// Moves the first checklist item matching `item` to `Done`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::TaskNotFound`] or
    /// [`TaskServiceError::ChecklistItemNotFound`] when the lookups fail, and
    /// tracker errors from the workflow calls.
    pub async fn complete_checklist_item(
        &self,
        project_name: &str,
        title: &str,
        item: &str,
    ) -> TaskServiceResult<ChecklistItemCompletion> {
        let summary = Summary::new(title)?;
        let item_summary = Summary::new(item)?;
        let parent = find_task(
            &*self.tracker,
            self.settings.project_key(),
            project_name,
            &summary,
        )
        .await?;

        let query = IssueQuery::children_of(&parent.key)
            .and(Clause::SummaryContains(item_summary.as_str().to_owned()))
            .limit(1);
        let sub_task = self
            .tracker
            .search(&query)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| TaskServiceError::ChecklistItemNotFound {
                item: item_summary.as_str().to_owned(),
                title: summary.as_str().to_owned(),
            })?;

        let outcome = self
            .resolver
            .move_to(sub_task, TaskStatus::Done.tracker_name())
            .await?;
        Ok(ChecklistItemCompletion {
            project_name: project_name.to_owned(),
            title: summary,
            item: item_summary,
            outcome,
        })
    }

    /// Returns the oldest checklist item that is not `Done`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::TaskNotFound`] when no task matches the
    /// title and [`TaskServiceError::NoUncheckedChecklistItems`] when every
    /// item is done or the task has none.
    pub async fn get_next_unchecked_checklist_item(
        &self,
        project_name: &str,
        title: &str,
    ) -> TaskServiceResult<NextChecklistItem> {
        let summary = Summary::new(title)?;
        let parent = find_task(
            &*self.tracker,
            self.settings.project_key(),
            project_name,
            &summary,
        )
        .await?;

        let query = IssueQuery::children_of(&parent.key)
            .and(Clause::StatusIsNot(
                TaskStatus::Done.tracker_name().to_owned(),
            ))
            .order_by(Ordering::CreatedAsc)
            .limit(1);
        let item = self
            .tracker
            .search(&query)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| TaskServiceError::NoUncheckedChecklistItems {
                title: summary.as_str().to_owned(),
            })?;

        Ok(NextChecklistItem {
            title: summary,
            item,
        })
    }
}
