//! Issue records exchanged with the tracker.

use super::{IssueKey, ProjectKey, TaskDomainError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Trimmed, non-empty issue summary used for task titles and checklist items.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Summary(String);

impl Summary {
    /// Creates a validated summary.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptySummary`] if the value is empty after
    /// trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(TaskDomainError::EmptySummary);
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the summary as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Name of a tracker issue type, for example `Task` or `Subtask`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IssueTypeName(String);

impl IssueTypeName {
    /// Creates a validated issue type name.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyIssueType`] when the value is empty.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(TaskDomainError::EmptyIssueType);
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the type name as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IssueTypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Issue as read back from the tracker.
///
/// The description has already been flattened to plain text by the adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Tracker issue key.
    pub key: IssueKey,
    /// Issue summary (task title or checklist item name).
    pub summary: String,
    /// Plain-text description; empty when the issue has none.
    pub description: String,
    /// Tracker status name, for example `In Progress`.
    pub status: String,
    /// Issue type name, when reported.
    pub issue_type: Option<String>,
    /// Parent issue key for sub-issues.
    pub parent: Option<IssueKey>,
}

impl Issue {
    /// Returns `true` when this issue hangs under a parent issue.
    #[must_use]
    pub const fn is_sub_issue(&self) -> bool {
        self.parent.is_some()
    }
}

/// Payload for creating a new issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewIssue {
    project: ProjectKey,
    issue_type: IssueTypeName,
    summary: Summary,
    description: Option<String>,
    parent: Option<IssueKey>,
}

impl NewIssue {
    /// Creates a top-level issue payload.
    #[must_use]
    pub const fn new(project: ProjectKey, issue_type: IssueTypeName, summary: Summary) -> Self {
        Self {
            project,
            issue_type,
            summary,
            description: None,
            parent: None,
        }
    }

    /// Sets the plain-text description. Blank descriptions are dropped.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let value = description.into();
        self.description = (!value.trim().is_empty()).then_some(value);
        self
    }

    /// Places the issue under a parent, making it a sub-issue.
    #[must_use]
    pub fn with_parent(mut self, parent: IssueKey) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Returns the owning project.
    #[must_use]
    pub const fn project(&self) -> &ProjectKey {
        &self.project
    }

    /// Returns the issue type.
    #[must_use]
    pub const fn issue_type(&self) -> &IssueTypeName {
        &self.issue_type
    }

    /// Returns the summary.
    #[must_use]
    pub const fn summary(&self) -> &Summary {
        &self.summary
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the parent key for sub-issues.
    #[must_use]
    pub const fn parent(&self) -> Option<&IssueKey> {
        self.parent.as_ref()
    }
}
