//! HTTP client helpers for tests.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(DEFAULT_TIMEOUT_SECS);

pub struct TestClient {
    client: reqwest::Client,
    base_url: String,
}

/// A ranking response with the headers tests care about.
#[derive(Debug)]
pub struct RankResponse {
    pub status: u16,
    pub cvrank_status: String,
    pub request_id: Option<String>,
    pub body: Value,
}

impl RankResponse {
    pub fn ids(&self) -> Vec<Value> {
        self.body
            .as_array()
            .map(|items| items.iter().map(|c| c["cv_id"].clone()).collect())
            .unwrap_or_default()
    }

    pub fn similarities(&self) -> Vec<f64> {
        self.body
            .as_array()
            .map(|items| {
                items
                    .iter()
                    .filter_map(|c| c["similarity"].as_f64())
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl TestClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}/{}", self.base_url, path)
    }

    /// POSTs `body` to the ranking endpoint at `path`.
    pub async fn rank_at(&self, path: &str, body: &Value) -> Result<RankResponse, TestClientError> {
        let resp = self.client.post(self.url(path)).json(body).send().await?;
        Self::into_rank_response(resp).await
    }

    pub async fn rank(&self, body: &Value) -> Result<RankResponse, TestClientError> {
        self.rank_at("/", body).await
    }

    /// POSTs a raw (possibly malformed) body.
    pub async fn rank_raw(&self, body: &'static str) -> Result<RankResponse, TestClientError> {
        let resp = self
            .client
            .post(self.url("/"))
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await?;
        Self::into_rank_response(resp).await
    }

    async fn into_rank_response(resp: reqwest::Response) -> Result<RankResponse, TestClientError> {
        let status = resp.status().as_u16();
        let header = |name: &str| {
            resp.headers()
                .get(name)
                .and_then(|h| h.to_str().ok())
                .map(str::to_string)
        };
        let cvrank_status = header("x-cvrank-status").unwrap_or_else(|| "unknown".to_string());
        let request_id = header("x-cvrank-request-id");
        let body = resp.json().await?;

        Ok(RankResponse {
            status,
            cvrank_status,
            request_id,
            body,
        })
    }

    pub async fn health(&self) -> Result<HealthResponse, TestClientError> {
        let resp = self.client.get(self.url("/healthz")).send().await?;

        if resp.status().is_success() {
            Ok(resp.json().await?)
        } else {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            Err(TestClientError::UnexpectedStatus(status, body))
        }
    }

    pub async fn ready(&self) -> Result<ReadyResponse, TestClientError> {
        let resp = self.client.get(self.url("/ready")).send().await?;

        if resp.status().is_success() {
            Ok(resp.json().await?)
        } else {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            Err(TestClientError::UnexpectedStatus(status, body))
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ComponentStatus {
    pub http: String,
    pub embedding: String,
    pub embedder_mode: String,
    pub translator_mode: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReadyResponse {
    pub status: String,
    pub components: ComponentStatus,
}

impl ReadyResponse {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TestClientError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Unexpected HTTP status: {0} - Body: {1}")]
    UnexpectedStatus(u16, String),
}
