//! Structured issue queries rendered to the tracker's query language.

use super::{IssueKey, ProjectKey};

/// Default number of results for list-style searches.
pub const DEFAULT_SEARCH_LIMIT: u32 = 50;

/// A single filter condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Clause {
    /// Issue belongs to the project.
    Project(ProjectKey),
    /// Summary text-matches the phrase.
    SummaryContains(String),
    /// Issue is a sub-issue of the parent.
    Parent(IssueKey),
    /// Issue has no parent.
    TopLevel,
    /// Issue is in the named status.
    StatusIs(String),
    /// Issue is not in the named status.
    StatusIsNot(String),
}

/// Sort keys supported by searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ordering {
    /// Highest priority first.
    PriorityDesc,
    /// Oldest first.
    CreatedAsc,
}

impl Ordering {
    const fn as_jql(self) -> &'static str {
        match self {
            Self::PriorityDesc => "priority DESC",
            Self::CreatedAsc => "created ASC",
        }
    }
}

/// Conjunction of clauses with optional ordering and a result cap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueQuery {
    clauses: Vec<Clause>,
    ordering: Vec<Ordering>,
    limit: u32,
}

impl IssueQuery {
    /// Starts a query scoped to a project.
    #[must_use]
    pub fn in_project(project: &ProjectKey) -> Self {
        Self {
            clauses: vec![Clause::Project(project.clone())],
            ordering: Vec::new(),
            limit: DEFAULT_SEARCH_LIMIT,
        }
    }

    /// Starts a query over the sub-issues of a parent.
    #[must_use]
    pub fn children_of(parent: &IssueKey) -> Self {
        Self {
            clauses: vec![Clause::Parent(parent.clone())],
            ordering: Vec::new(),
            limit: DEFAULT_SEARCH_LIMIT,
        }
    }

    /// Adds a clause.
    #[must_use]
    pub fn and(mut self, clause: Clause) -> Self {
        self.clauses.push(clause);
        self
    }

    /// Appends a sort key.
    #[must_use]
    pub fn order_by(mut self, ordering: Ordering) -> Self {
        self.ordering.push(ordering);
        self
    }

    /// Caps the number of results.
    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Returns the clauses.
    #[must_use]
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// Returns the sort keys in priority order.
    #[must_use]
    pub fn ordering(&self) -> &[Ordering] {
        &self.ordering
    }

    /// Returns the result cap.
    #[must_use]
    pub const fn max_results(&self) -> u32 {
        self.limit
    }

    /// Renders the query as JQL.
    #[must_use]
    pub fn to_jql(&self) -> String {
        let mut jql = self
            .clauses
            .iter()
            .map(render_clause)
            .collect::<Vec<_>>()
            .join(" AND ");

        if !self.ordering.is_empty() {
            let keys = self
                .ordering
                .iter()
                .map(|ordering| ordering.as_jql())
                .collect::<Vec<_>>()
                .join(", ");
            jql.push_str(" ORDER BY ");
            jql.push_str(&keys);
        }

        jql
    }
}

fn render_clause(clause: &Clause) -> String {
    match clause {
        Clause::Project(key) => format!("project = {key}"),
        Clause::SummaryContains(text) => format!("summary ~ {}", quote(text)),
        Clause::Parent(key) => format!("parent = {key}"),
        Clause::TopLevel => "parent is EMPTY".to_owned(),
        Clause::StatusIs(status) => format!("status = {}", quote(status)),
        Clause::StatusIsNot(status) => format!("status != {}", quote(status)),
    }
}

/// Wraps a value in a JQL string literal.
fn quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for ch in value.chars() {
        if matches!(ch, '"' | '\\') {
            quoted.push('\\');
        }
        quoted.push(ch);
    }
    quoted.push('"');
    quoted
}
