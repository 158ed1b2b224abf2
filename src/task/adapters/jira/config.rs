//! Connection settings for the Jira adapter.

use crate::task::domain::{IssueTypeName, ProjectKey, ProjectSettings, TaskDomainError};
use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Environment variable holding the Jira site URL.
pub const SERVER_URL_VAR: &str = "JIRA_SERVER_URL";
/// Environment variable holding the account e-mail or user name.
pub const USERNAME_VAR: &str = "JIRA_USERNAME";
/// Environment variable holding the API token.
pub const API_TOKEN_VAR: &str = "JIRA_API_TOKEN";
/// Environment variable holding the project key.
pub const PROJECT_KEY_VAR: &str = "JIRA_PROJECT_KEY";
/// Optional override for the task issue type name.
pub const TASK_ISSUE_TYPE_VAR: &str = "JIRA_TASK_ISSUE_TYPE";
/// Optional override for the sub-task issue type name.
pub const SUBTASK_ISSUE_TYPE_VAR: &str = "JIRA_SUBTASK_ISSUE_TYPE";
/// Optional override for the per-request timeout in seconds.
pub const REQUEST_TIMEOUT_VAR: &str = "JIRA_REQUEST_TIMEOUT_SECS";

const DEFAULT_TASK_ISSUE_TYPE: &str = "Task";
const DEFAULT_SUBTASK_ISSUE_TYPE: &str = "Subtask";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const VERIFY_TIMEOUT_SECS: u64 = 10;

/// Errors raised while assembling [`JiraConfig`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is missing or blank.
    #[error("missing required setting {0}")]
    Missing(&'static str),

    /// The server URL is not an HTTP(S) URL.
    #[error("server URL '{0}' must start with 'http://' or 'https://'")]
    InvalidServerUrl(String),

    /// The timeout is not a positive whole number of seconds.
    #[error("invalid value '{value}' for {name}, expected a positive integer")]
    InvalidTimeout {
        /// Variable name.
        name: &'static str,
        /// Rejected value.
        value: String,
    },

    /// A value failed domain validation.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
}

/// Jira connection and project settings.
#[derive(Clone, PartialEq, Eq)]
pub struct JiraConfig {
    server_url: String,
    username: String,
    api_token: String,
    project: ProjectSettings,
    request_timeout: Duration,
}

impl JiraConfig {
    /// Creates a configuration with default issue types and timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the URL or a credential is blank or
    /// malformed.
    pub fn new(
        server_url: impl Into<String>,
        username: impl Into<String>,
        api_token: impl Into<String>,
        project_key: ProjectKey,
    ) -> Result<Self, ConfigError> {
        let normalized_url = normalize_server_url(server_url.into())?;
        let user = require(USERNAME_VAR, Some(username.into()))?;
        let token = require(API_TOKEN_VAR, Some(api_token.into()))?;

        Ok(Self {
            server_url: normalized_url,
            username: user,
            api_token: token,
            project: ProjectSettings::new(
                project_key,
                IssueTypeName::new(DEFAULT_TASK_ISSUE_TYPE)?,
                IssueTypeName::new(DEFAULT_SUBTASK_ISSUE_TYPE)?,
            ),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        })
    }

    /// Reads the configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a required variable is missing or any
    /// value is malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads the configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a required variable is missing or any
    /// value is malformed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let server_url = require(SERVER_URL_VAR, lookup(SERVER_URL_VAR))?;
        let username = require(USERNAME_VAR, lookup(USERNAME_VAR))?;
        let api_token = require(API_TOKEN_VAR, lookup(API_TOKEN_VAR))?;
        let project_key = ProjectKey::new(require(PROJECT_KEY_VAR, lookup(PROJECT_KEY_VAR))?)?;

        let mut config = Self::new(server_url, username, api_token, project_key)?;

        let task_type = optional(lookup(TASK_ISSUE_TYPE_VAR))
            .map(IssueTypeName::new)
            .transpose()?;
        let subtask_type = optional(lookup(SUBTASK_ISSUE_TYPE_VAR))
            .map(IssueTypeName::new)
            .transpose()?;
        config.project = ProjectSettings::new(
            config.project.project_key().clone(),
            task_type.unwrap_or_else(|| config.project.task_type().clone()),
            subtask_type.unwrap_or_else(|| config.project.subtask_type().clone()),
        );

        let timeout = optional(lookup(REQUEST_TIMEOUT_VAR))
            .map(|raw| parse_timeout(REQUEST_TIMEOUT_VAR, &raw))
            .transpose()?
            .unwrap_or_else(|| config.request_timeout());
        Ok(config.with_request_timeout(timeout))
    }

    /// Overrides the per-request timeout.
    #[must_use]
    pub const fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Returns the site URL without a trailing slash.
    #[must_use]
    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    /// Returns the REST API v3 base URL.
    #[must_use]
    pub fn api_base_url(&self) -> String {
        format!("{}/rest/api/3", self.server_url)
    }

    /// Returns the user name used for basic authentication.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the API token used for basic authentication.
    #[must_use]
    pub fn api_token(&self) -> &str {
        &self.api_token
    }

    /// Returns the project settings.
    #[must_use]
    pub const fn project(&self) -> &ProjectSettings {
        &self.project
    }

    /// Returns the per-request timeout.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// Returns the timeout for the connection check.
    #[must_use]
    pub const fn verify_timeout(&self) -> Duration {
        Duration::from_secs(VERIFY_TIMEOUT_SECS)
    }
}

impl fmt::Debug for JiraConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JiraConfig")
            .field("server_url", &self.server_url)
            .field("username", &self.username)
            .field("api_token", &"<redacted>")
            .field("project", &self.project)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_owned())
        .filter(|trimmed| !trimmed.is_empty())
}

fn require(name: &'static str, value: Option<String>) -> Result<String, ConfigError> {
    optional(value).ok_or(ConfigError::Missing(name))
}

fn normalize_server_url(raw: String) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ConfigError::Missing(SERVER_URL_VAR));
    }
    let has_scheme = trimmed.starts_with("http://") || trimmed.starts_with("https://");
    if !has_scheme {
        return Err(ConfigError::InvalidServerUrl(raw));
    }
    Ok(trimmed.to_owned())
}

fn parse_timeout(name: &'static str, raw: &str) -> Result<Duration, ConfigError> {
    match raw.parse::<u64>() {
        Ok(seconds) if seconds > 0 => Ok(Duration::from_secs(seconds)),
        _ => Err(ConfigError::InvalidTimeout {
            name,
            value: raw.to_owned(),
        }),
    }
}
