//! Application services for task, status, checklist and query operations.

mod checklist;
mod error;
mod lookup;
mod manager;
mod outcome;
mod query;
mod status;
mod tasks;
mod transition;

pub use checklist::ChecklistService;
pub use error::{TaskServiceError, TaskServiceResult};
pub use manager::TaskManager;
pub use outcome::{
    ChecklistItemCompletion, ChecklistUpdated, DescriptionUpdated, NextChecklistItem, NextTask,
    StatusChange, StatusReport, TaskCreated, TaskListing, TasksDeleted, TransitionOutcome,
};
pub use query::{PURGE_SEARCH_LIMIT, TaskQueryService};
pub use status::StatusService;
pub use tasks::{TaskService, append_history};
pub use transition::TransitionResolver;
