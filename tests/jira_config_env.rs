//! Jira configuration loaded from the process environment.

mod test_helpers;

use std::time::Duration;

use rstest::rstest;
use taskbridge::task::adapters::jira::{
    API_TOKEN_VAR, ConfigError, JiraConfig, PROJECT_KEY_VAR, REQUEST_TIMEOUT_VAR, SERVER_URL_VAR,
    TASK_ISSUE_TYPE_VAR, USERNAME_VAR,
};
use test_helpers::JiraEnvGuard;

const REQUIRED: [(&str, &str); 4] = [
    (SERVER_URL_VAR, "https://example.atlassian.net"),
    (USERNAME_VAR, "bot@example.test"),
    (API_TOKEN_VAR, "token-value"),
    (PROJECT_KEY_VAR, "DEMO"),
];

#[rstest]
fn from_env_reads_required_and_optional_vars() -> Result<(), eyre::Report> {
    let mut values = REQUIRED.to_vec();
    values.push((TASK_ISSUE_TYPE_VAR, "Story"));
    values.push((REQUEST_TIMEOUT_VAR, "12"));
    let _guard = JiraEnvGuard::with_values(&values);

    let config = JiraConfig::from_env()?;

    eyre::ensure!(
        config.api_base_url() == "https://example.atlassian.net/rest/api/3",
        "unexpected base URL {}",
        config.api_base_url()
    );
    eyre::ensure!(config.project().project_key().as_str() == "DEMO", "wrong project");
    eyre::ensure!(config.project().task_type().as_str() == "Story", "wrong task type");
    eyre::ensure!(
        config.project().subtask_type().as_str() == "Subtask",
        "wrong sub-task type"
    );
    eyre::ensure!(
        config.request_timeout() == Duration::from_secs(12),
        "wrong timeout"
    );
    Ok(())
}

#[rstest]
fn from_env_reports_first_missing_var() {
    let _guard = JiraEnvGuard::with_values(&[(SERVER_URL_VAR, "https://example.atlassian.net")]);

    let result = JiraConfig::from_env();

    assert_eq!(result, Err(ConfigError::Missing(USERNAME_VAR)));
}
