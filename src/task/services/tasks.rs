//! Task creation, lookup and description maintenance.

use super::{
    DescriptionUpdated, NextTask, TaskCreated, TaskServiceResult, lookup::find_task,
};
use crate::task::{
    domain::{Clause, IssueQuery, NewIssue, Ordering, ProjectSettings, Summary, TaskStatus},
    ports::IssueTracker,
};
use chrono::{DateTime, TimeZone};
use mockable::Clock;
use std::sync::Arc;
use tracing::info;

/// Timestamp layout used in description history markers.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Task CRUD service.
pub struct TaskService<T, C>
where
    T: IssueTracker,
    C: Clock + Send + Sync,
{
    tracker: Arc<T>,
    clock: Arc<C>,
    settings: ProjectSettings,
}

impl<T, C> Clone for TaskService<T, C>
where
    T: IssueTracker,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            tracker: Arc::clone(&self.tracker),
            clock: Arc::clone(&self.clock),
            settings: self.settings.clone(),
        }
    }
}

impl<T, C> TaskService<T, C>
where
    T: IssueTracker,
    C: Clock + Send + Sync,
{
    /// Creates a task service.
    #[must_use]
    pub const fn new(tracker: Arc<T>, clock: Arc<C>, settings: ProjectSettings) -> Self {
        Self {
            tracker,
            clock,
            settings,
        }
    }

    /// Creates a task in the configured project.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskServiceError::Domain`] for a blank title and
    /// tracker errors when creation fails.
    pub async fn add_task(
        &self,
        project_name: &str,
        title: &str,
        description: &str,
    ) -> TaskServiceResult<TaskCreated> {
        let summary = Summary::new(title)?;
        let issue = NewIssue::new(
            self.settings.project_key().clone(),
            self.settings.task_type().clone(),
            summary.clone(),
        )
        .with_description(description);

        let key = self.tracker.create_issue(&issue).await?;
        info!(
            project = %self.settings.project_key(),
            ?key,
            title = %summary,
            "created task"
        );
        Ok(TaskCreated {
            project_name: project_name.to_owned(),
            title: summary,
            key,
        })
    }

    /// Returns the highest-priority, oldest task still to do.
    ///
    /// # Errors
    ///
    /// Returns tracker errors when the search fails.
    pub async fn get_next_task(&self, project_name: &str) -> TaskServiceResult<NextTask> {
        let query = IssueQuery::in_project(self.settings.project_key())
            .and(Clause::TopLevel)
            .and(Clause::StatusIs(TaskStatus::Todo.tracker_name().to_owned()))
            .order_by(Ordering::PriorityDesc)
            .order_by(Ordering::CreatedAsc)
            .limit(1);

        let task = self.tracker.search(&query).await?.into_iter().next();
        Ok(NextTask {
            project_name: project_name.to_owned(),
            task,
        })
    }

    /// Appends a timestamped entry to a task's description.
    ///
    /// An existing description is kept and followed by an
    /// `--- Updated on <timestamp> ---` marker; an empty one is replaced by
    /// a `--- Created on <timestamp> ---` marker.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskServiceError::TaskNotFound`] when no task matches
    /// the title, and tracker errors when the update fails.
    pub async fn update_task_description(
        &self,
        project_name: &str,
        title: &str,
        description: &str,
    ) -> TaskServiceResult<DescriptionUpdated> {
        let summary = Summary::new(title)?;
        let issue = find_task(
            &*self.tracker,
            self.settings.project_key(),
            project_name,
            &summary,
        )
        .await?;

        let updated = append_history(&issue.description, description, self.clock.local());
        self.tracker.update_description(&issue.key, &updated).await?;
        info!(issue = %issue.key, "updated task description");

        Ok(DescriptionUpdated {
            project_name: project_name.to_owned(),
            title: summary,
            issue,
            description: updated,
        })
    }
}

/// Builds the description text written by
/// [`TaskService::update_task_description`].
#[must_use]
pub fn append_history<Tz>(current: &str, addition: &str, at: DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let timestamp = at.format(TIMESTAMP_FORMAT);
    if current.is_empty() {
        format!("--- Created on {timestamp} ---\n{addition}")
    } else {
        format!("{current}\n\n--- Updated on {timestamp} ---\n{addition}")
    }
}
