//! HTTP client for the scan server's task API.

use super::types::{TaskCreateRequest, TaskId, TaskInfo};
use crate::error::{Result, ScanGateError};
use reqwest::header;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info};

const CREATE_PATH: &str = "api/v1/task/create";
const INFO_PATH: &str = "api/v1/task/info";

/// Client for creating scan tasks and waiting on their completion.
pub struct ScanClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
    poll_interval: Duration,
    max_polls: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct CreateTaskResponse {
    #[serde(default)]
    data: Option<TaskId>,
}

#[derive(Debug, Deserialize)]
struct TaskInfoResponse {
    data: Option<TaskInfo>,
}

impl ScanClient {
    /// Create a client for the given server.
    ///
    /// The token is sent verbatim in the `Authorization` header; no scheme
    /// prefix is added.
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(ScanGateError::ClientBuild)?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
            poll_interval: Duration::from_secs(5),
            max_polls: None,
        })
    }

    /// Set the time to wait between status polls.
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Bound the number of status polls. `None` waits forever.
    pub fn with_max_polls(mut self, limit: Option<u32>) -> Self {
        self.max_polls = limit;
        self
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Create a scan task.
    ///
    /// Returns the task id from the response's `data` field. An empty id
    /// means the server declined to create a task; callers decide how to
    /// fail.
    pub async fn create_task(&self, payload: &TaskCreateRequest) -> Result<TaskId> {
        let url = self.endpoint(CREATE_PATH);
        info!(url = %url, "Creating scan task");

        let response = self
            .http
            .post(&url)
            .header(header::AUTHORIZATION, &self.token)
            .json(payload)
            .send()
            .await
            .map_err(|source| ScanGateError::Http {
                url: url.clone(),
                source,
            })?;

        debug!(status = %response.status(), "task/create responded");
        let body = response.text().await.map_err(|source| ScanGateError::Http {
            url: url.clone(),
            source,
        })?;
        debug!(body = %body, "task/create response body");

        let parsed: CreateTaskResponse =
            serde_json::from_str(&body).map_err(|e| ScanGateError::MalformedResponse {
                url,
                message: e.to_string(),
            })?;

        Ok(parsed.data.unwrap_or_default())
    }

    /// Fetch the current state of a task.
    pub async fn fetch_task_info(&self, task_id: &TaskId) -> Result<TaskInfo> {
        let url = self.endpoint(INFO_PATH);

        let response = self
            .http
            .get(&url)
            .query(&[("task_id", task_id.as_str())])
            .header(header::AUTHORIZATION, &self.token)
            .send()
            .await
            .map_err(|source| ScanGateError::Http {
                url: url.clone(),
                source,
            })?;

        debug!(status = %response.status(), "task/info responded");
        let body = response.text().await.map_err(|source| ScanGateError::Http {
            url: url.clone(),
            source,
        })?;

        let parsed: TaskInfoResponse =
            serde_json::from_str(&body).map_err(|e| ScanGateError::MalformedResponse {
                url: url.clone(),
                message: e.to_string(),
            })?;

        parsed.data.ok_or(ScanGateError::MalformedResponse {
            url,
            message: "missing `data` field".to_string(),
        })
    }

    /// Poll a task until its scan status is terminal and return the final
    /// state.
    ///
    /// Polls at the configured interval with no backoff. Without a
    /// `max_polls` bound this waits as long as the server keeps reporting
    /// the task as queued or scanning.
    pub async fn wait_task(&self, task_id: &TaskId) -> Result<TaskInfo> {
        let mut polls: u32 = 0;
        loop {
            let task_info = self.fetch_task_info(task_id).await?;
            if task_info.scan_status.is_terminal() {
                info!(
                    task_id = %task_id,
                    scan_status = %task_info.scan_status,
                    audit_status = %task_info.audit_status,
                    "Scan task finished"
                );
                return Ok(task_info);
            }

            polls += 1;
            if let Some(limit) = self.max_polls {
                if polls >= limit {
                    return Err(ScanGateError::PollLimitExceeded {
                        task_id: task_id.to_string(),
                        polls,
                    });
                }
            }

            debug!(
                task_id = %task_id,
                scan_status = %task_info.scan_status,
                "Scan still running, waiting"
            );
            tokio::time::sleep(self.poll_interval).await;
        }
    }
}
