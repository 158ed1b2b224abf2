//! Scoped process environment for configuration tests.

use std::env;
use std::sync::{Mutex, MutexGuard, OnceLock};

use taskbridge::task::adapters::jira::{
    API_TOKEN_VAR, PROJECT_KEY_VAR, REQUEST_TIMEOUT_VAR, SERVER_URL_VAR, SUBTASK_ISSUE_TYPE_VAR,
    TASK_ISSUE_TYPE_VAR, USERNAME_VAR,
};

/// Every variable read by `JiraConfig::from_env`.
pub const JIRA_VARS: [&str; 7] = [
    SERVER_URL_VAR,
    USERNAME_VAR,
    API_TOKEN_VAR,
    PROJECT_KEY_VAR,
    TASK_ISSUE_TYPE_VAR,
    SUBTASK_ISSUE_TYPE_VAR,
    REQUEST_TIMEOUT_VAR,
];

static ENV_MUTEX: OnceLock<Mutex<()>> = OnceLock::new();

/// Holds the environment lock and restores the Jira variables on drop.
pub struct JiraEnvGuard {
    previous: Vec<(&'static str, Option<String>)>,
    _lock: MutexGuard<'static, ()>,
}

impl JiraEnvGuard {
    /// Clears every Jira variable, then applies `values`.
    pub fn with_values(values: &[(&'static str, &str)]) -> Self {
        let lock = env_lock();
        let previous = JIRA_VARS
            .iter()
            .map(|name| (*name, env::var(name).ok()))
            .collect();

        for name in JIRA_VARS {
            // SAFETY: the global mutex serializes environment mutations in tests.
            unsafe { env::remove_var(name) };
        }
        for (name, value) in values {
            // SAFETY: the global mutex serializes environment mutations in tests.
            unsafe { env::set_var(name, value) };
        }

        Self {
            previous,
            _lock: lock,
        }
    }
}

impl Drop for JiraEnvGuard {
    fn drop(&mut self) {
        for (name, value) in self.previous.drain(..) {
            // SAFETY: the global mutex serializes environment mutations in tests.
            unsafe {
                match value {
                    Some(previous) => env::set_var(name, previous),
                    None => env::remove_var(name),
                }
            }
        }
    }
}

fn env_lock() -> MutexGuard<'static, ()> {
    ENV_MUTEX
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
}
