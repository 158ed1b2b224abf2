//! Shared helpers for in-memory tracker integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskbridge::task::{
    adapters::memory::InMemoryIssueTracker,
    domain::{IssueTypeName, ProjectKey, ProjectSettings},
    services::TaskManager,
};

/// Project label used in outcome messages.
pub const PROJECT_NAME: &str = "Demo Project";

/// Manager type exercised by the integration tests.
pub type DemoManager = TaskManager<InMemoryIssueTracker, DefaultClock>;

/// Manager together with the tracker it writes to.
pub struct Board {
    pub tracker: Arc<InMemoryIssueTracker>,
    pub manager: DemoManager,
}

/// Builds project settings for the `DEMO` project.
///
/// # Errors
///
/// Returns an error if any of the fixed names fails validation.
pub fn demo_settings() -> Result<ProjectSettings, eyre::Report> {
    Ok(ProjectSettings::new(
        ProjectKey::new("DEMO")?,
        IssueTypeName::new("Task")?,
        IssueTypeName::new("Subtask")?,
    ))
}

/// Provides a manager over an empty tracker that knows the `DEMO` project.
///
/// # Errors
///
/// Returns an error if the project settings cannot be built.
#[fixture]
pub fn board() -> Result<Board, eyre::Report> {
    let settings = demo_settings()?;
    let tracker = Arc::new(InMemoryIssueTracker::with_project(
        settings.project_key().clone(),
    ));
    let manager = TaskManager::new(Arc::clone(&tracker), Arc::new(DefaultClock), settings);
    Ok(Board { tracker, manager })
}
