//! When steps for task status BDD scenarios.

use super::world::{PROJECT_NAME, StatusWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;

#[when(r#"the task "{title}" is moved to "{status}""#)]
fn move_task(world: &mut StatusWorld, title: String, status: String) {
    let result = run_async(world.manager.set_task_status(PROJECT_NAME, &title, &status));
    world.last_change = Some(result);
}

#[when(r#"the checklist item "{item}" of task "{title}" is completed"#)]
fn complete_item(world: &mut StatusWorld, item: String, title: String) -> Result<(), eyre::Report> {
    let completion = run_async(
        world
            .manager
            .complete_checklist_item(PROJECT_NAME, &title, &item),
    )
    .wrap_err("complete checklist item")?;
    eyre::ensure!(
        completion.outcome.is_applied(),
        "checklist item was not completed: {completion}"
    );
    Ok(())
}
