//! Task and checklist management over a remote issue tracker.
//!
//! Tasks are top-level tracker issues, checklist items are their sub-tasks,
//! and status changes go through the tracker's workflow transitions. The
//! module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
