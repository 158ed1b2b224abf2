//! Given steps for task status BDD scenarios.

use super::world::{PROJECT_NAME, StatusWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given(r#"a task titled "{title}" exists"#)]
fn task_exists(world: &mut StatusWorld, title: String) -> Result<(), eyre::Report> {
    run_async(world.manager.add_task(PROJECT_NAME, &title, "scenario task"))
        .wrap_err("create task for scenario")?;
    Ok(())
}

#[given(r#"the workflow blocks transitions to "{status}""#)]
fn workflow_blocks(world: &mut StatusWorld, status: String) -> Result<(), eyre::Report> {
    world
        .tracker
        .block_transitions_to(status)
        .wrap_err("block workflow transition")?;
    Ok(())
}

#[given(r#"the task "{title}" has checklist items "{items}""#)]
fn task_has_checklist(
    world: &mut StatusWorld,
    title: String,
    items: String,
) -> Result<(), eyre::Report> {
    let names = items.split(',').map(str::trim);
    let updated = run_async(
        world
            .manager
            .update_task_with_checklist(PROJECT_NAME, &title, names),
    )
    .wrap_err("create checklist for scenario")?;
    eyre::ensure!(!updated.created.is_empty(), "no checklist items created");
    Ok(())
}
