//! HTTP adapter implementing [`IssueTracker`] against Jira Cloud.

use super::config::JiraConfig;
use super::wire::{
    CreateIssueRequest, CreatedIssue, SEARCH_FIELDS, SearchRequest, SearchResponse,
    TransitionRequest, TransitionsResponse, UpdateDescriptionRequest,
};
use crate::task::{
    domain::{Issue, IssueKey, IssueQuery, NewIssue, ProjectKey, Transition, TransitionId},
    ports::{IssueTracker, IssueTrackerError, IssueTrackerResult},
};
use async_trait::async_trait;
use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

const USER_AGENT: &str = concat!("taskbridge/", env!("CARGO_PKG_VERSION"));

/// Jira REST API v3 client.
#[derive(Debug, Clone)]
pub struct JiraClient {
    http: Client,
    base_url: String,
    username: String,
    api_token: String,
    request_timeout: Duration,
    verify_timeout: Duration,
}

impl JiraClient {
    /// Builds a client without contacting the server.
    ///
    /// # Errors
    ///
    /// Returns [`IssueTrackerError::Transport`] when the HTTP client cannot
    /// be built.
    pub fn new(config: &JiraConfig) -> IssueTrackerResult<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(IssueTrackerError::transport)?;

        Ok(Self {
            http,
            base_url: config.api_base_url(),
            username: config.username().to_owned(),
            api_token: config.api_token().to_owned(),
            request_timeout: config.request_timeout(),
            verify_timeout: config.verify_timeout(),
        })
    }

    /// Builds a client and verifies access to the configured project.
    ///
    /// # Errors
    ///
    /// Returns [`IssueTrackerError::ProjectUnavailable`] when the project
    /// cannot be read with the configured credentials.
    pub async fn connect(config: &JiraConfig) -> IssueTrackerResult<Self> {
        let client = Self::new(config)?;
        client
            .verify_project(config.project().project_key())
            .await?;
        Ok(client)
    }

    /// Returns the REST API base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Sends a request and returns the raw body.
    ///
    /// A 404 response and an empty body both yield `None`.
    async fn send<B: Serialize + Sync>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        query: &[(&str, &str)],
    ) -> IssueTrackerResult<Option<String>> {
        debug!(%method, path, "sending tracker request");
        let mut request = self
            .http
            .request(method, self.endpoint(path))
            .basic_auth(&self.username, Some(&self.api_token))
            .timeout(self.request_timeout);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(payload) = body {
            request = request.json(payload);
        }

        let response = request.send().await.map_err(IssueTrackerError::transport)?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            debug!(path, "tracker returned 404");
            return Ok(None);
        }

        let text = response.text().await.map_err(IssueTrackerError::transport)?;
        if !status.is_success() {
            return Err(IssueTrackerError::Rejected {
                status: status.as_u16(),
                body: text,
            });
        }
        Ok((!text.trim().is_empty()).then_some(text))
    }

    async fn send_json<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> IssueTrackerResult<Option<T>>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        self.send(method, path, body, &[])
            .await?
            .map(|text| decode(&text))
            .transpose()
    }
}

fn decode<T: DeserializeOwned>(text: &str) -> IssueTrackerResult<T> {
    serde_json::from_str(text).map_err(|err| IssueTrackerError::InvalidResponse(err.to_string()))
}

fn invalid(err: impl std::fmt::Display) -> IssueTrackerError {
    IssueTrackerError::InvalidResponse(err.to_string())
}

#[async_trait]
impl IssueTracker for JiraClient {
    async fn verify_project(&self, project: &ProjectKey) -> IssueTrackerResult<()> {
        let url = self.endpoint(&format!("/project/{project}"));
        let unavailable = |reason: String| IssueTrackerError::ProjectUnavailable {
            project: project.clone(),
            reason,
        };

        let response = self
            .http
            .get(url)
            .basic_auth(&self.username, Some(&self.api_token))
            .timeout(self.verify_timeout)
            .send()
            .await
            .map_err(|err| unavailable(err.to_string()))?;
        response
            .error_for_status()
            .map_err(|err| unavailable(err.to_string()))?;
        debug!(%project, "verified tracker project access");
        Ok(())
    }

    async fn search(&self, query: &IssueQuery) -> IssueTrackerResult<Vec<Issue>> {
        let jql = query.to_jql();
        let body = SearchRequest {
            jql: &jql,
            max_results: query.max_results(),
            fields: &SEARCH_FIELDS,
        };
        debug!(%jql, "searching issues");

        let response: Option<SearchResponse> =
            self.send_json(Method::POST, "/search", Some(&body)).await?;
        response
            .unwrap_or_default()
            .issues
            .into_iter()
            .map(|issue| issue.into_issue().map_err(invalid))
            .collect()
    }

    async fn create_issue(&self, issue: &NewIssue) -> IssueTrackerResult<Option<IssueKey>> {
        let body = CreateIssueRequest::from(issue);
        let created: Option<CreatedIssue> =
            self.send_json(Method::POST, "/issue", Some(&body)).await?;
        created
            .map(|payload| IssueKey::new(payload.key).map_err(invalid))
            .transpose()
    }

    async fn update_description(
        &self,
        key: &IssueKey,
        description: &str,
    ) -> IssueTrackerResult<()> {
        let body = UpdateDescriptionRequest::new(description);
        self.send(Method::PUT, &format!("/issue/{key}"), Some(&body), &[])
            .await?;
        Ok(())
    }

    async fn transitions(&self, key: &IssueKey) -> IssueTrackerResult<Vec<Transition>> {
        let response: Option<TransitionsResponse> = self
            .send_json::<(), _>(Method::GET, &format!("/issue/{key}/transitions"), None)
            .await?;
        response
            .unwrap_or_default()
            .transitions
            .into_iter()
            .map(|transition| transition.into_transition().map_err(invalid))
            .collect()
    }

    async fn apply_transition(
        &self,
        key: &IssueKey,
        transition: &TransitionId,
    ) -> IssueTrackerResult<()> {
        let body = TransitionRequest::from(transition);
        self.send(
            Method::POST,
            &format!("/issue/{key}/transitions"),
            Some(&body),
            &[],
        )
        .await?;
        Ok(())
    }

    async fn delete_issue(&self, key: &IssueKey, with_subtasks: bool) -> IssueTrackerResult<()> {
        let flag = if with_subtasks { "true" } else { "false" };
        self.send::<()>(
            Method::DELETE,
            &format!("/issue/{key}"),
            None,
            &[("deleteSubtasks", flag)],
        )
        .await?;
        Ok(())
    }
}
