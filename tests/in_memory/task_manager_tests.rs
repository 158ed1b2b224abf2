//! Task creation, description and status flows through the façade.

use super::helpers::{Board, PROJECT_NAME, board};
use rstest::rstest;
use taskbridge::task::{
    domain::TaskStatus,
    services::{TaskServiceError, TransitionOutcome},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn verify_accepts_configured_project(
    #[from(board)] board: Result<Board, eyre::Report>,
) -> Result<(), eyre::Report> {
    let board = board?;

    board.manager.verify().await?;
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn demo_flow_moves_task_through_workflow(
    #[from(board)] board: Result<Board, eyre::Report>,
) -> Result<(), eyre::Report> {
    let board = board?;
    let manager = &board.manager;

    let created = manager
        .add_task(PROJECT_NAME, "Test Task", "Initial description")
        .await?;
    eyre::ensure!(
        created.to_string() == "Added new task 'Test Task' to Demo Project (Key: DEMO-1)",
        "unexpected creation message: {created}"
    );

    let next = manager.get_next_task(PROJECT_NAME).await?;
    eyre::ensure!(
        next.to_string() == "Next available task: Test Task - Initial description",
        "unexpected next task message: {next}"
    );

    manager
        .update_task_description(PROJECT_NAME, "Test Task", "Updated description")
        .await?;
    let started = manager
        .mark_as_in_progress(PROJECT_NAME, "Test Task")
        .await?;
    eyre::ensure!(started.outcome.is_applied(), "start was not applied");

    let status = manager.get_task_status(PROJECT_NAME, "Test Task").await?;
    eyre::ensure!(
        status.to_string() == "Task 'Test Task' status: In Progress",
        "unexpected status message: {status}"
    );

    let completed = manager.mark_as_completed(PROJECT_NAME, "Test Task").await?;
    eyre::ensure!(
        matches!(completed.outcome, TransitionOutcome::Applied { .. }),
        "completion was not applied"
    );
    let final_status = manager.get_task_status(PROJECT_NAME, "Test Task").await?;
    eyre::ensure!(final_status.status() == TaskStatus::Done, "task is not done");

    let next = manager.get_next_task(PROJECT_NAME).await?;
    eyre::ensure!(
        next.to_string() == "No available tasks found in 'Demo Project'.",
        "unexpected next task message: {next}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn description_history_keeps_previous_text(
    #[from(board)] board: Result<Board, eyre::Report>,
) -> Result<(), eyre::Report> {
    let board = board?;
    board
        .manager
        .add_task(PROJECT_NAME, "History", "Original")
        .await?;

    let updated = board
        .manager
        .update_task_description(PROJECT_NAME, "History", "Addendum")
        .await?;

    eyre::ensure!(
        updated.description.starts_with("Original\n\n--- Updated on "),
        "history marker missing: {}",
        updated.description
    );
    eyre::ensure!(
        updated.description.ends_with(" ---\nAddendum"),
        "addition missing: {}",
        updated.description
    );
    let stored = board.tracker.issues()?;
    eyre::ensure!(
        stored.first().map(|issue| issue.description.as_str())
            == Some(updated.description.as_str()),
        "tracker holds a different description"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_task_is_reported_with_project_name(
    #[from(board)] board: Result<Board, eyre::Report>,
) -> Result<(), eyre::Report> {
    let board = board?;

    let result = board
        .manager
        .set_task_status(PROJECT_NAME, "Missing", "Done")
        .await;

    let Err(err) = result else {
        eyre::bail!("expected lookup failure");
    };
    eyre::ensure!(
        matches!(err, TaskServiceError::TaskNotFound { .. }),
        "unexpected error: {err:?}"
    );
    eyre::ensure!(
        err.to_string() == "task 'Missing' not found in project 'Demo Project'",
        "unexpected message: {err}"
    );
    Ok(())
}
