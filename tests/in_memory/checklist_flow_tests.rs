//! Checklist flows through the façade.

use super::helpers::{Board, PROJECT_NAME, board};
use rstest::rstest;
use taskbridge::task::services::TaskServiceError;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn checklist_is_worked_off_in_order(
    #[from(board)] board: Result<Board, eyre::Report>,
) -> Result<(), eyre::Report> {
    let board = board?;
    let manager = &board.manager;
    manager.add_task(PROJECT_NAME, "Test Task", "").await?;

    let updated = manager
        .update_task_with_checklist(PROJECT_NAME, "Test Task", ["Item 1", "Item 2", "Item 3"])
        .await?;
    eyre::ensure!(updated.created.len() == 3, "expected three sub-tasks");

    for expected in ["Item 1", "Item 2", "Item 3"] {
        let next = manager
            .get_next_unchecked_checklist_item(PROJECT_NAME, "Test Task")
            .await?;
        eyre::ensure!(
            next.item.summary == expected,
            "expected {expected}, got {}",
            next.item.summary
        );
        let completion = manager
            .complete_checklist_item(PROJECT_NAME, "Test Task", expected)
            .await?;
        eyre::ensure!(completion.outcome.is_applied(), "{expected} not completed");
    }

    let result = manager
        .get_next_unchecked_checklist_item(PROJECT_NAME, "Test Task")
        .await;
    eyre::ensure!(
        matches!(
            result,
            Err(TaskServiceError::NoUncheckedChecklistItems { .. })
        ),
        "expected every item to be done, got {result:?}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn checklist_items_never_count_as_tasks(
    #[from(board)] board: Result<Board, eyre::Report>,
) -> Result<(), eyre::Report> {
    let board = board?;
    let manager = &board.manager;
    manager.add_task(PROJECT_NAME, "Parent", "").await?;
    manager
        .update_task_with_checklist(PROJECT_NAME, "Parent", ["Parent step"])
        .await?;
    manager.mark_as_in_progress(PROJECT_NAME, "Parent").await?;

    let next = manager.get_next_task(PROJECT_NAME).await?;
    eyre::ensure!(next.task.is_none(), "sub-task offered as next task");

    let status = manager.get_task_status(PROJECT_NAME, "Parent step").await;
    eyre::ensure!(
        matches!(status, Err(TaskServiceError::TaskNotFound { .. })),
        "sub-task resolved as a task: {status:?}"
    );
    Ok(())
}
