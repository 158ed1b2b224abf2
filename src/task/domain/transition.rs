//! Workflow transitions between tracker statuses.

use super::TransitionId;
use serde::{Deserialize, Serialize};

/// A workflow edge available for an issue at the time it was listed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    /// Transition identifier to submit when applying it.
    pub id: TransitionId,
    /// Display name of the transition, for example `Start progress`.
    pub name: String,
    /// Name of the status the issue lands in.
    pub to_status: String,
}

impl Transition {
    /// Returns `true` when the transition lands in `status`.
    ///
    /// Status names are compared exactly.
    #[must_use]
    pub fn leads_to(&self, status: &str) -> bool {
        self.to_status == status
    }
}

/// Picks the first transition that lands in `target_status`.
#[must_use]
pub fn find_transition<'a>(
    transitions: &'a [Transition],
    target_status: &str,
) -> Option<&'a Transition> {
    transitions
        .iter()
        .find(|transition| transition.leads_to(target_status))
}
