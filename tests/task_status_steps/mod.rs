//! Step definitions for task status BDD scenarios.

pub mod world;

mod given;
mod then;
mod when;
