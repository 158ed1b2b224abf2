//! Shared fixtures for task unit tests.

use std::sync::Arc;

use crate::task::{
    adapters::memory::InMemoryIssueTracker,
    domain::{IssueTypeName, ProjectKey, ProjectSettings},
    services::TaskManager,
};
use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use rstest::fixture;

pub const PROJECT: &str = "Test Project";

/// Clock frozen at a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

pub type TestManager = TaskManager<InMemoryIssueTracker, FixedClock>;

pub fn project_key() -> ProjectKey {
    ProjectKey::new("OPS").expect("valid project key")
}

#[fixture]
pub fn settings() -> ProjectSettings {
    ProjectSettings::new(
        project_key(),
        IssueTypeName::new("Task").expect("valid issue type"),
        IssueTypeName::new("Subtask").expect("valid issue type"),
    )
}

#[fixture]
pub fn clock() -> FixedClock {
    FixedClock(
        Utc.with_ymd_and_hms(2024, 5, 17, 9, 30, 0)
            .single()
            .expect("valid timestamp"),
    )
}

#[fixture]
pub fn tracker() -> Arc<InMemoryIssueTracker> {
    Arc::new(InMemoryIssueTracker::with_project(project_key()))
}

/// Manager and the tracker behind it, so tests can inspect tracker state.
pub struct Harness {
    pub tracker: Arc<InMemoryIssueTracker>,
    pub manager: TestManager,
    pub clock: FixedClock,
}

#[fixture]
pub fn harness(
    tracker: Arc<InMemoryIssueTracker>,
    clock: FixedClock,
    settings: ProjectSettings,
) -> Harness {
    Harness {
        manager: TaskManager::new(Arc::clone(&tracker), Arc::new(clock), settings),
        tracker,
        clock,
    }
}
