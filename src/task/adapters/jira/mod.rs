//! Jira Cloud adapter.
//!
//! [`JiraClient`] speaks REST API v3 with basic authentication and maps
//! Jira issues, sub-tasks and workflow transitions onto the task domain.

mod adf;
mod client;
mod config;
mod wire;

pub use adf::AdfNode;
pub use client::JiraClient;
pub use config::{
    API_TOKEN_VAR, ConfigError, JiraConfig, PROJECT_KEY_VAR, REQUEST_TIMEOUT_VAR, SERVER_URL_VAR,
    SUBTASK_ISSUE_TYPE_VAR, TASK_ISSUE_TYPE_VAR, USERNAME_VAR,
};
pub use wire::{
    CreateIssueRequest, SEARCH_FIELDS, SearchRequest, SearchResponse, TransitionRequest,
    TransitionsResponse, UpdateDescriptionRequest, WireIssue, WireTransition,
};
