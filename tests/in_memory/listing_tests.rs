//! Listings and purge through the façade.

use super::helpers::{Board, PROJECT_NAME, board};
use rstest::rstest;
use taskbridge::task::domain::TaskFilter;

async fn seed(board: &Board) -> Result<(), eyre::Report> {
    let manager = &board.manager;
    for title in ["Plan", "Build", "Ship"] {
        manager.add_task(PROJECT_NAME, title, "").await?;
    }
    manager
        .update_task_with_checklist(PROJECT_NAME, "Build", ["Compile", "Link"])
        .await?;
    manager.mark_as_in_progress(PROJECT_NAME, "Build").await?;
    manager.mark_as_completed(PROJECT_NAME, "Ship").await?;
    Ok(())
}

#[rstest]
#[case("all", 3)]
#[case("WIP", 1)]
#[case(" done ", 1)]
#[tokio::test(flavor = "multi_thread")]
async fn parsed_filters_select_tasks(
    #[from(board)] board: Result<Board, eyre::Report>,
    #[case] raw_filter: &str,
    #[case] expected: usize,
) -> Result<(), eyre::Report> {
    let board = board?;
    seed(&board).await?;
    let filter = TaskFilter::try_from(raw_filter)?;

    let listing = board.manager.get_tasks(PROJECT_NAME, filter).await?;

    eyre::ensure!(
        listing.tasks.len() == expected,
        "filter {filter} returned {} tasks",
        listing.tasks.len()
    );
    if let Some(status) = filter.status() {
        eyre::ensure!(
            listing.tasks.iter().all(|task| task.status == status),
            "filter {filter} returned a task in another status"
        );
    }
    Ok(())
}

#[rstest]
fn unknown_filter_is_rejected() {
    assert!(TaskFilter::try_from("blocked").is_err());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn purge_empties_the_project(
    #[from(board)] board: Result<Board, eyre::Report>,
) -> Result<(), eyre::Report> {
    let board = board?;
    seed(&board).await?;

    let deleted = board.manager.delete_all_tasks(PROJECT_NAME).await?;

    eyre::ensure!(
        deleted.to_string() == "All 5 tasks in project 'Demo Project' have been deleted.",
        "unexpected purge message: {deleted}"
    );
    let listing = board.manager.get_tasks(PROJECT_NAME, TaskFilter::All).await?;
    eyre::ensure!(listing.tasks.is_empty(), "tasks survived the purge");
    eyre::ensure!(
        board.tracker.issues()?.is_empty(),
        "sub-tasks survived the purge"
    );
    Ok(())
}
