//! Domain model for task and checklist management.
//!
//! Tasks and checklist items are views over tracker issues and sub-issues.
//! The domain holds validated identifiers, the simplified status model, the
//! workflow transition lookup and the structured query type. Nothing here
//! performs I/O.

mod error;
mod ids;
mod issue;
mod query;
mod task;
mod transition;

pub use error::{ParseTaskFilterError, TaskDomainError};
pub use ids::{IssueKey, ProjectKey, TransitionId};
pub use issue::{Issue, IssueTypeName, NewIssue, Summary};
pub use query::{Clause, DEFAULT_SEARCH_LIMIT, IssueQuery, Ordering};
pub use task::{ProjectSettings, TaskFilter, TaskStatus, TaskSummary};
pub use transition::{Transition, find_transition};
