//! Result values of task operations.
//!
//! Each outcome carries the affected tracker records and renders a one-line
//! human-readable report through `Display`.

use crate::task::domain::{
    Issue, IssueKey, Summary, TaskFilter, TaskStatus, TaskSummary, Transition,
};
use std::fmt;

/// Result of asking the workflow to move an issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// The transition was applied.
    Applied {
        /// Issue after the move.
        issue: Issue,
        /// Transition that was applied.
        transition: Transition,
    },
    /// No available transition leads to the requested status.
    Unavailable {
        /// Issue, unchanged.
        issue: Issue,
    },
}

impl TransitionOutcome {
    /// Returns the issue the transition was attempted on.
    #[must_use]
    pub const fn issue(&self) -> &Issue {
        match self {
            Self::Applied { issue, .. } | Self::Unavailable { issue } => issue,
        }
    }

    /// Returns `true` when the transition was applied.
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }
}

/// A task was created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskCreated {
    /// Project label supplied by the caller.
    pub project_name: String,
    /// Task title.
    pub title: Summary,
    /// Key reported by the tracker, if any.
    pub key: Option<IssueKey>,
}

impl fmt::Display for TaskCreated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = self.key.as_ref().map_or("None", IssueKey::as_str);
        write!(
            f,
            "Added new task '{}' to {} (Key: {key})",
            self.title, self.project_name
        )
    }
}

/// The next task waiting to be started, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextTask {
    /// Project label supplied by the caller.
    pub project_name: String,
    /// Highest-ranked task still to do.
    pub task: Option<Issue>,
}

impl fmt::Display for NextTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.task {
            Some(task) => write!(
                f,
                "Next available task: {} - {}",
                task.summary, task.description
            ),
            None => write!(f, "No available tasks found in '{}'.", self.project_name),
        }
    }
}

/// A task description was rewritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptionUpdated {
    /// Project label supplied by the caller.
    pub project_name: String,
    /// Title used for the lookup.
    pub title: Summary,
    /// Task as found before the update.
    pub issue: Issue,
    /// Full description text that was written.
    pub description: String,
}

impl fmt::Display for DescriptionUpdated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Description updated for task '{}' in project '{}'.",
            self.title, self.project_name
        )
    }
}

/// Current status of a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    /// Title used for the lookup.
    pub title: Summary,
    /// Task record.
    pub issue: Issue,
}

impl StatusReport {
    /// Returns the normalized status.
    #[must_use]
    pub fn status(&self) -> TaskStatus {
        TaskStatus::from_tracker_name(&self.issue.status)
    }
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Task '{}' status: {}", self.title, self.issue.status)
    }
}

/// Result of a task status change request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusChange {
    /// Title used for the lookup.
    pub title: Summary,
    /// Requested tracker status name.
    pub target_status: String,
    /// What the workflow did.
    pub outcome: TransitionOutcome,
}

impl fmt::Display for StatusChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.outcome.is_applied() {
            write!(
                f,
                "Task '{}' status set to {}.",
                self.title, self.target_status
            )
        } else {
            write!(
                f,
                "Cannot transition task '{}' to {} (transition not available)",
                self.title, self.target_status
            )
        }
    }
}

/// Checklist items were added to a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistUpdated {
    /// Project label supplied by the caller.
    pub project_name: String,
    /// Title used for the lookup.
    pub title: Summary,
    /// Parent task.
    pub parent: Issue,
    /// Keys of the sub-tasks the tracker reported as created.
    pub created: Vec<IssueKey>,
}

impl fmt::Display for ChecklistUpdated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Created {} checklist items as subtasks for task '{}' in project '{}'.",
            self.created.len(),
            self.title,
            self.project_name
        )
    }
}

/// Result of completing a checklist item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistItemCompletion {
    /// Project label supplied by the caller.
    pub project_name: String,
    /// Parent task title.
    pub title: Summary,
    /// Checklist item name used for the lookup.
    pub item: Summary,
    /// What the workflow did with the sub-task.
    pub outcome: TransitionOutcome,
}

impl fmt::Display for ChecklistItemCompletion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.outcome.is_applied() {
            write!(
                f,
                "Checklist item '{}' in task '{}' in project '{}' completed.",
                self.item, self.title, self.project_name
            )
        } else {
            write!(
                f,
                "Cannot complete checklist item '{}' (transition not available)",
                self.item
            )
        }
    }
}

/// The oldest checklist item that is not done.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextChecklistItem {
    /// Parent task title.
    pub title: Summary,
    /// Sub-task record.
    pub item: Issue,
}

impl fmt::Display for NextChecklistItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Next unchecked checklist item for task '{}': {}",
            self.title, self.item.summary
        )
    }
}

/// Tasks matching a listing filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskListing {
    /// Project label supplied by the caller.
    pub project_name: String,
    /// Filter that was applied.
    pub filter: TaskFilter,
    /// Matching tasks.
    pub tasks: Vec<TaskSummary>,
}

impl fmt::Display for TaskListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let project = &self.project_name;
        let count = self.tasks.len();
        match (self.filter, count) {
            (TaskFilter::All, 0) => write!(f, "No tasks found in project '{project}'."),
            (TaskFilter::Wip, 0) => write!(
                f,
                "No work in progress tasks found in project '{project}'."
            ),
            (TaskFilter::Done, 0) => {
                write!(f, "No completed tasks found in project '{project}'.")
            }
            (TaskFilter::All, _) => write!(f, "Found {count} task(s) in project '{project}'."),
            (TaskFilter::Wip, _) => write!(
                f,
                "Found {count} work in progress task(s) in project '{project}'."
            ),
            (TaskFilter::Done, _) => write!(
                f,
                "Found {count} completed task(s) in project '{project}'."
            ),
        }
    }
}

/// Tasks were purged from the project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TasksDeleted {
    /// Project label supplied by the caller.
    pub project_name: String,
    /// Number of issues removed, checklist items included.
    pub count: usize,
}

impl fmt::Display for TasksDeleted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "All {} tasks in project '{}' have been deleted.",
            self.count, self.project_name
        )
    }
}
