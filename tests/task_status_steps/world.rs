//! Shared world state for task status BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskbridge::task::{
    adapters::memory::InMemoryIssueTracker,
    domain::{IssueTypeName, ProjectKey, ProjectSettings},
    services::{StatusChange, TaskManager, TaskServiceError},
};

/// Project label used by every scenario.
pub const PROJECT_NAME: &str = "Scenario Project";

/// Manager type used by the BDD world.
pub type ScenarioManager = TaskManager<InMemoryIssueTracker, DefaultClock>;

/// Scenario world for task status behaviour tests.
pub struct StatusWorld {
    pub tracker: Arc<InMemoryIssueTracker>,
    pub manager: ScenarioManager,
    pub last_change: Option<Result<StatusChange, TaskServiceError>>,
}

impl StatusWorld {
    /// Creates a world over an empty tracker with the `BDD` project.
    ///
    /// # Panics
    ///
    /// Panics if the fixed project settings fail validation.
    #[must_use]
    pub fn new() -> Self {
        let project = ProjectKey::new("BDD").expect("valid project key");
        let settings = ProjectSettings::new(
            project.clone(),
            IssueTypeName::new("Task").expect("valid issue type"),
            IssueTypeName::new("Subtask").expect("valid issue type"),
        );
        let tracker = Arc::new(InMemoryIssueTracker::with_project(project));
        let manager = TaskManager::new(Arc::clone(&tracker), Arc::new(DefaultClock), settings);

        Self {
            tracker,
            manager,
            last_change: None,
        }
    }

    /// Returns the recorded status change result.
    ///
    /// # Errors
    ///
    /// Returns an error if no status change was attempted yet.
    pub fn last_change(&self) -> Result<&Result<StatusChange, TaskServiceError>, eyre::Report> {
        self.last_change
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing status change in scenario world"))
    }
}

impl Default for StatusWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> StatusWorld {
    StatusWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
