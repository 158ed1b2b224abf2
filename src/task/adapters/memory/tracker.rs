//! In-memory issue tracker for service and integration tests.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{
        Clause, Issue, IssueKey, IssueQuery, NewIssue, Ordering, ProjectKey, TaskStatus,
        Transition, TransitionId,
    },
    ports::{IssueTracker, IssueTrackerError, IssueTrackerResult},
};

/// Thread-safe in-memory tracker with a simple three-status workflow.
///
/// Every status can move to every other status through one transition per
/// target. Individual targets can be blocked to model restricted workflows.
#[derive(Debug, Clone, Default)]
pub struct InMemoryIssueTracker {
    state: Arc<RwLock<InMemoryTrackerState>>,
}

#[derive(Debug, Default)]
struct InMemoryTrackerState {
    projects: HashSet<ProjectKey>,
    issues: Vec<StoredIssue>,
    counters: HashMap<ProjectKey, u64>,
    blocked_targets: HashSet<String>,
    next_sequence: u64,
}

#[derive(Debug, Clone)]
struct StoredIssue {
    project: ProjectKey,
    issue: Issue,
    priority: u8,
    sequence: u64,
}

/// Priority given to issues unless a test overrides it.
const DEFAULT_PRIORITY: u8 = 3;

const WORKFLOW: [(&str, &str, TaskStatus); 3] = [
    ("11", "Reopen", TaskStatus::Todo),
    ("21", "Start progress", TaskStatus::InProgress),
    ("31", "Done", TaskStatus::Done),
];

impl InMemoryIssueTracker {
    /// Creates an empty tracker that knows no projects.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a tracker with a single registered project.
    #[must_use]
    pub fn with_project(project: ProjectKey) -> Self {
        let tracker = Self::new();
        if let Ok(mut state) = tracker.state.write() {
            state.projects.insert(project);
        }
        tracker
    }

    /// Makes transitions into `status` unavailable.
    ///
    /// # Errors
    ///
    /// Returns tracker transport errors when lock acquisition fails.
    pub fn block_transitions_to(&self, status: impl Into<String>) -> IssueTrackerResult<()> {
        let mut state = self.write_state()?;
        state.blocked_targets.insert(status.into());
        Ok(())
    }

    /// Overrides the priority of an issue. Lower numbers rank higher.
    ///
    /// # Errors
    ///
    /// Returns [`IssueTrackerError::Rejected`] with status 404 when the issue
    /// does not exist.
    pub fn set_priority(&self, key: &IssueKey, priority: u8) -> IssueTrackerResult<()> {
        let mut state = self.write_state()?;
        let stored = state
            .issues
            .iter_mut()
            .find(|stored| &stored.issue.key == key)
            .ok_or_else(|| not_found(key))?;
        stored.priority = priority;
        Ok(())
    }

    /// Returns a snapshot of every stored issue in creation order.
    ///
    /// # Errors
    ///
    /// Returns tracker transport errors when lock acquisition fails.
    pub fn issues(&self) -> IssueTrackerResult<Vec<Issue>> {
        let state = self.read_state()?;
        Ok(state
            .issues
            .iter()
            .map(|stored| stored.issue.clone())
            .collect())
    }

    fn read_state(
        &self,
    ) -> IssueTrackerResult<std::sync::RwLockReadGuard<'_, InMemoryTrackerState>> {
        self.state
            .read()
            .map_err(|err| IssueTrackerError::transport(std::io::Error::other(err.to_string())))
    }

    fn write_state(
        &self,
    ) -> IssueTrackerResult<std::sync::RwLockWriteGuard<'_, InMemoryTrackerState>> {
        self.state
            .write()
            .map_err(|err| IssueTrackerError::transport(std::io::Error::other(err.to_string())))
    }
}

fn not_found(key: &IssueKey) -> IssueTrackerError {
    IssueTrackerError::Rejected {
        status: 404,
        body: format!("issue {key} does not exist"),
    }
}

/// Case-insensitive phrase match standing in for the tracker's text search.
fn summary_matches(summary: &str, phrase: &str) -> bool {
    summary.to_lowercase().contains(&phrase.to_lowercase())
}

fn matches_clause(stored: &StoredIssue, clause: &Clause) -> bool {
    let issue = &stored.issue;
    match clause {
        Clause::Project(project) => &stored.project == project,
        Clause::SummaryContains(phrase) => summary_matches(&issue.summary, phrase),
        Clause::Parent(parent) => issue.parent.as_ref() == Some(parent),
        Clause::TopLevel => issue.parent.is_none(),
        Clause::StatusIs(status) => &issue.status == status,
        Clause::StatusIsNot(status) => &issue.status != status,
    }
}

fn compare(left: &StoredIssue, right: &StoredIssue, ordering: &[Ordering]) -> std::cmp::Ordering {
    ordering
        .iter()
        .map(|key| match key {
            Ordering::PriorityDesc => left.priority.cmp(&right.priority),
            Ordering::CreatedAsc => left.sequence.cmp(&right.sequence),
        })
        .find(|result| result.is_ne())
        .unwrap_or_else(|| left.sequence.cmp(&right.sequence))
}

#[async_trait]
impl IssueTracker for InMemoryIssueTracker {
    async fn verify_project(&self, project: &ProjectKey) -> IssueTrackerResult<()> {
        let state = self.read_state()?;
        if state.projects.contains(project) {
            return Ok(());
        }
        Err(IssueTrackerError::ProjectUnavailable {
            project: project.clone(),
            reason: "HTTP 404".to_owned(),
        })
    }

    async fn search(&self, query: &IssueQuery) -> IssueTrackerResult<Vec<Issue>> {
        let state = self.read_state()?;
        let mut matched: Vec<&StoredIssue> = state
            .issues
            .iter()
            .filter(|stored| {
                query
                    .clauses()
                    .iter()
                    .all(|clause| matches_clause(stored, clause))
            })
            .collect();
        matched.sort_by(|left, right| compare(left, right, query.ordering()));

        let limit = usize::try_from(query.max_results()).unwrap_or(usize::MAX);
        Ok(matched
            .into_iter()
            .take(limit)
            .map(|stored| stored.issue.clone())
            .collect())
    }

    async fn create_issue(&self, issue: &NewIssue) -> IssueTrackerResult<Option<IssueKey>> {
        let mut state = self.write_state()?;
        let project = issue.project().clone();
        if !state.projects.contains(&project) {
            return Err(IssueTrackerError::Rejected {
                status: 400,
                body: format!("project {project} does not exist"),
            });
        }
        if let Some(parent) = issue.parent()
            && !state.issues.iter().any(|stored| &stored.issue.key == parent)
        {
            return Err(IssueTrackerError::Rejected {
                status: 400,
                body: format!("parent issue {parent} does not exist"),
            });
        }

        let counter = state.counters.entry(project.clone()).or_insert(0);
        *counter += 1;
        let key = IssueKey::new(format!("{project}-{counter}"))
            .map_err(|err| IssueTrackerError::InvalidResponse(err.to_string()))?;

        state.next_sequence += 1;
        let sequence = state.next_sequence;
        state.issues.push(StoredIssue {
            project,
            issue: Issue {
                key: key.clone(),
                summary: issue.summary().as_str().to_owned(),
                description: issue.description().unwrap_or_default().to_owned(),
                status: TaskStatus::Todo.tracker_name().to_owned(),
                issue_type: Some(issue.issue_type().as_str().to_owned()),
                parent: issue.parent().cloned(),
            },
            priority: DEFAULT_PRIORITY,
            sequence,
        });
        Ok(Some(key))
    }

    async fn update_description(
        &self,
        key: &IssueKey,
        description: &str,
    ) -> IssueTrackerResult<()> {
        let mut state = self.write_state()?;
        let stored = state
            .issues
            .iter_mut()
            .find(|stored| &stored.issue.key == key)
            .ok_or_else(|| not_found(key))?;
        description.clone_into(&mut stored.issue.description);
        Ok(())
    }

    async fn transitions(&self, key: &IssueKey) -> IssueTrackerResult<Vec<Transition>> {
        let state = self.read_state()?;
        let Some(stored) = state.issues.iter().find(|stored| &stored.issue.key == key) else {
            return Ok(Vec::new());
        };

        WORKFLOW
            .iter()
            .filter(|(_, _, target)| target.tracker_name() != stored.issue.status)
            .filter(|(_, _, target)| !state.blocked_targets.contains(target.tracker_name()))
            .map(|(id, name, target)| {
                Ok(Transition {
                    id: TransitionId::new(*id)
                        .map_err(|err| IssueTrackerError::InvalidResponse(err.to_string()))?,
                    name: (*name).to_owned(),
                    to_status: target.tracker_name().to_owned(),
                })
            })
            .collect()
    }

    async fn apply_transition(
        &self,
        key: &IssueKey,
        transition: &TransitionId,
    ) -> IssueTrackerResult<()> {
        let mut state = self.write_state()?;
        let blocked = state.blocked_targets.clone();
        let stored = state
            .issues
            .iter_mut()
            .find(|stored| &stored.issue.key == key)
            .ok_or_else(|| not_found(key))?;

        let target = WORKFLOW
            .iter()
            .find(|(id, _, _)| *id == transition.as_str())
            .map(|(_, _, target)| target.tracker_name())
            .filter(|target| *target != stored.issue.status && !blocked.contains(*target))
            .ok_or_else(|| IssueTrackerError::Rejected {
                status: 400,
                body: format!("transition {transition} is not valid for issue {key}"),
            })?;

        target.clone_into(&mut stored.issue.status);
        Ok(())
    }

    async fn delete_issue(&self, key: &IssueKey, with_subtasks: bool) -> IssueTrackerResult<()> {
        let mut state = self.write_state()?;
        let has_children = state
            .issues
            .iter()
            .any(|stored| stored.issue.parent.as_ref() == Some(key));
        if has_children && !with_subtasks {
            return Err(IssueTrackerError::Rejected {
                status: 400,
                body: format!("issue {key} has subtasks"),
            });
        }

        state.issues.retain(|stored| {
            &stored.issue.key != key && stored.issue.parent.as_ref() != Some(key)
        });
        Ok(())
    }
}
