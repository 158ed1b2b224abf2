//! JSON payloads exchanged with the Jira REST API v3.

use super::adf::AdfNode;
use crate::task::domain::{Issue, IssueKey, NewIssue, TaskDomainError, Transition, TransitionId};
use serde::{Deserialize, Serialize};

/// Fields requested on every search.
pub const SEARCH_FIELDS: [&str; 5] = ["summary", "description", "status", "issuetype", "parent"];

/// Body of `POST /search`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRequest<'a> {
    /// JQL text.
    pub jql: &'a str,
    /// Result cap.
    #[serde(rename = "maxResults")]
    pub max_results: u32,
    /// Requested issue fields.
    pub fields: &'a [&'a str],
}

/// Response of `POST /search`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    /// Matching issues.
    #[serde(default)]
    pub issues: Vec<WireIssue>,
}

/// Issue as returned by searches.
#[derive(Debug, Clone, Deserialize)]
pub struct WireIssue {
    /// Issue key.
    pub key: String,
    /// Requested fields.
    #[serde(default)]
    pub fields: WireFields,
}

/// Subset of issue fields the adapter reads.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WireFields {
    /// Issue summary.
    #[serde(default)]
    pub summary: String,
    /// ADF description, absent or null when empty.
    #[serde(default)]
    pub description: Option<AdfNode>,
    /// Current status.
    #[serde(default)]
    pub status: Option<NamedRef>,
    /// Issue type.
    #[serde(default)]
    pub issuetype: Option<NamedRef>,
    /// Parent issue for sub-tasks.
    #[serde(default)]
    pub parent: Option<KeyRef>,
}

/// Object identified by name, such as a status or issue type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedRef {
    /// Display name.
    pub name: String,
}

/// Object identified by key, such as a project or parent issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyRef {
    /// Key value.
    pub key: String,
}

impl WireIssue {
    /// Converts the wire issue into the domain record.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError`] when the issue or parent key is malformed.
    pub fn into_issue(self) -> Result<Issue, TaskDomainError> {
        let fields = self.fields;
        Ok(Issue {
            key: IssueKey::new(self.key)?,
            summary: fields.summary,
            description: fields
                .description
                .map(|doc| doc.plain_text())
                .unwrap_or_default(),
            status: fields.status.map(|status| status.name).unwrap_or_default(),
            issue_type: fields.issuetype.map(|issue_type| issue_type.name),
            parent: fields
                .parent
                .map(|parent| IssueKey::new(parent.key))
                .transpose()?,
        })
    }
}

/// Body of `POST /issue`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateIssueRequest {
    /// Fields of the new issue.
    pub fields: CreateIssueFields,
}

/// Fields of a new issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateIssueFields {
    /// Owning project.
    pub project: KeyRef,
    /// Parent issue for sub-tasks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<KeyRef>,
    /// Issue type.
    pub issuetype: NamedRef,
    /// Summary line.
    pub summary: String,
    /// ADF description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<AdfNode>,
}

impl From<&NewIssue> for CreateIssueRequest {
    fn from(issue: &NewIssue) -> Self {
        Self {
            fields: CreateIssueFields {
                project: KeyRef {
                    key: issue.project().as_str().to_owned(),
                },
                parent: issue.parent().map(|parent| KeyRef {
                    key: parent.as_str().to_owned(),
                }),
                issuetype: NamedRef {
                    name: issue.issue_type().as_str().to_owned(),
                },
                summary: issue.summary().as_str().to_owned(),
                description: issue.description().map(AdfNode::document),
            },
        }
    }
}

/// Response of `POST /issue`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedIssue {
    /// Key of the new issue.
    pub key: String,
}

/// Body of `PUT /issue/{key}` when replacing the description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateDescriptionRequest {
    /// Fields to update.
    pub fields: DescriptionFields,
}

/// Description-only field update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DescriptionFields {
    /// New ADF description.
    pub description: AdfNode,
}

impl UpdateDescriptionRequest {
    /// Wraps plain text as the new description.
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self {
            fields: DescriptionFields {
                description: AdfNode::document(text),
            },
        }
    }
}

/// Response of `GET /issue/{key}/transitions`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransitionsResponse {
    /// Available transitions.
    #[serde(default)]
    pub transitions: Vec<WireTransition>,
}

/// Transition as listed by the tracker.
#[derive(Debug, Clone, Deserialize)]
pub struct WireTransition {
    /// Transition identifier.
    pub id: String,
    /// Transition name.
    #[serde(default)]
    pub name: String,
    /// Target status.
    pub to: NamedRef,
}

impl WireTransition {
    /// Converts the wire transition into the domain value.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTransitionId`] for a blank identifier.
    pub fn into_transition(self) -> Result<Transition, TaskDomainError> {
        Ok(Transition {
            id: TransitionId::new(self.id)?,
            name: self.name,
            to_status: self.to.name,
        })
    }
}

/// Body of `POST /issue/{key}/transitions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransitionRequest {
    /// Transition to apply.
    pub transition: TransitionRef,
}

/// Transition reference by identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransitionRef {
    /// Transition identifier.
    pub id: String,
}

impl From<&TransitionId> for TransitionRequest {
    fn from(id: &TransitionId) -> Self {
        Self {
            transition: TransitionRef {
                id: id.as_str().to_owned(),
            },
        }
    }
}
