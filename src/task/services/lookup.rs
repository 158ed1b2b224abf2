//! Title lookup shared by the services.

use super::{TaskServiceError, TaskServiceResult};
use crate::task::{
    domain::{Clause, Issue, IssueQuery, ProjectKey, Summary},
    ports::IssueTracker,
};

/// Finds the first top-level issue whose summary matches `title`.
///
/// Titles are not unique in the tracker. When several tasks match, the
/// tracker's default ordering decides which one is returned.
pub(crate) async fn find_task<T>(
    tracker: &T,
    project: &ProjectKey,
    project_name: &str,
    title: &Summary,
) -> TaskServiceResult<Issue>
where
    T: IssueTracker + ?Sized,
{
    let query = IssueQuery::in_project(project)
        .and(Clause::TopLevel)
        .and(Clause::SummaryContains(title.as_str().to_owned()))
        .limit(1);

    tracker
        .search(&query)
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| TaskServiceError::TaskNotFound {
            project_name: project_name.to_owned(),
            title: title.as_str().to_owned(),
        })
}
