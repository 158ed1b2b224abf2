//! Then steps for task status BDD scenarios.

use super::world::{PROJECT_NAME, StatusWorld, run_async};
use rstest_bdd_macros::then;
use taskbridge::task::services::TaskServiceError;

#[then(r#"the task "{title}" has status "{status}""#)]
fn task_has_status(world: &StatusWorld, title: String, status: String) -> Result<(), eyre::Report> {
    let report = run_async(world.manager.get_task_status(PROJECT_NAME, &title))
        .map_err(|err| eyre::eyre!("status lookup failed: {err}"))?;

    if report.issue.status != status {
        return Err(eyre::eyre!(
            "expected status {status}, found {}",
            report.issue.status
        ));
    }
    Ok(())
}

#[then(r#"the status change reports "{message}""#)]
fn status_change_reports(world: &StatusWorld, message: String) -> Result<(), eyre::Report> {
    let change = world
        .last_change()?
        .as_ref()
        .map_err(|err| eyre::eyre!("unexpected status change failure: {err}"))?;

    if change.to_string() != message {
        return Err(eyre::eyre!("expected '{message}', got '{change}'"));
    }
    Ok(())
}

#[then("the status change is reported as unavailable")]
fn status_change_unavailable(world: &StatusWorld) -> Result<(), eyre::Report> {
    let change = world
        .last_change()?
        .as_ref()
        .map_err(|err| eyre::eyre!("unexpected status change failure: {err}"))?;

    if change.outcome.is_applied() {
        return Err(eyre::eyre!("expected unavailable transition, got {change}"));
    }
    if !change.to_string().ends_with("(transition not available)") {
        return Err(eyre::eyre!("unexpected message: {change}"));
    }
    Ok(())
}

#[then("the status change fails because the task was not found")]
fn status_change_not_found(world: &StatusWorld) -> Result<(), eyre::Report> {
    let result = world.last_change()?;

    if !matches!(result, Err(TaskServiceError::TaskNotFound { .. })) {
        return Err(eyre::eyre!("expected TaskNotFound error, got {result:?}"));
    }
    Ok(())
}

#[then(r#"the next unchecked checklist item of "{title}" is "{item}""#)]
fn next_unchecked_item(world: &StatusWorld, title: String, item: String) -> Result<(), eyre::Report> {
    let next = run_async(
        world
            .manager
            .get_next_unchecked_checklist_item(PROJECT_NAME, &title),
    )
    .map_err(|err| eyre::eyre!("next checklist item lookup failed: {err}"))?;

    if next.item.summary != item {
        return Err(eyre::eyre!(
            "expected next item {item}, found {}",
            next.item.summary
        ));
    }
    Ok(())
}
