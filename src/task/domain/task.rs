//! Task view types layered over tracker issues.

use super::{Issue, IssueKey, IssueTypeName, ParseTaskFilterError, ProjectKey};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Simplified task status.
///
/// The tracker may expose many workflow states. Only three are meaningful
/// here, and anything unrecognized is treated as not started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Work has not started.
    Todo,
    /// Work is in progress.
    #[serde(rename = "wip")]
    InProgress,
    /// Work is complete.
    Done,
}

impl TaskStatus {
    /// Returns the normalized short name (`todo`, `wip`, `done`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "wip",
            Self::Done => "done",
        }
    }

    /// Returns the status name used by the tracker workflow.
    #[must_use]
    pub const fn tracker_name(self) -> &'static str {
        match self {
            Self::Todo => "To Do",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
        }
    }

    /// Maps a tracker status name onto the simplified status.
    #[must_use]
    pub fn from_tracker_name(name: &str) -> Self {
        match name {
            "Done" => Self::Done,
            "In Progress" => Self::InProgress,
            _ => Self::Todo,
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Filter applied when listing tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskFilter {
    /// Every task in the project.
    #[default]
    All,
    /// Tasks currently in progress.
    Wip,
    /// Completed tasks.
    Done,
}

impl TaskFilter {
    /// Returns the canonical filter name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Wip => "wip",
            Self::Done => "done",
        }
    }

    /// Returns the tracker status the filter restricts to, if any.
    #[must_use]
    pub const fn status(self) -> Option<TaskStatus> {
        match self {
            Self::All => None,
            Self::Wip => Some(TaskStatus::InProgress),
            Self::Done => Some(TaskStatus::Done),
        }
    }
}

impl TryFrom<&str> for TaskFilter {
    type Error = ParseTaskFilterError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "all" => Ok(Self::All),
            "wip" => Ok(Self::Wip),
            "done" => Ok(Self::Done),
            _ => Err(ParseTaskFilterError(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Flattened task record returned by task listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSummary {
    /// Task title.
    pub name: String,
    /// Plain-text description.
    pub description: String,
    /// Normalized status.
    pub status: TaskStatus,
    /// Tracker issue key.
    pub id: IssueKey,
}

impl From<Issue> for TaskSummary {
    fn from(issue: Issue) -> Self {
        Self {
            status: TaskStatus::from_tracker_name(&issue.status),
            name: issue.summary,
            description: issue.description,
            id: issue.key,
        }
    }
}

/// Project-wide settings shared by every task service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSettings {
    project_key: ProjectKey,
    task_type: IssueTypeName,
    subtask_type: IssueTypeName,
}

impl ProjectSettings {
    /// Creates settings for the given project and issue types.
    #[must_use]
    pub const fn new(
        project_key: ProjectKey,
        task_type: IssueTypeName,
        subtask_type: IssueTypeName,
    ) -> Self {
        Self {
            project_key,
            task_type,
            subtask_type,
        }
    }

    /// Returns the project key.
    #[must_use]
    pub const fn project_key(&self) -> &ProjectKey {
        &self.project_key
    }

    /// Returns the issue type used for tasks.
    #[must_use]
    pub const fn task_type(&self) -> &IssueTypeName {
        &self.task_type
    }

    /// Returns the issue type used for checklist items.
    #[must_use]
    pub const fn subtask_type(&self) -> &IssueTypeName {
        &self.subtask_type
    }
}
