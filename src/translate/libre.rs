//! LibreTranslate-compatible HTTP client.
//!
//! Speaks the `/detect` and `/translate` JSON endpoints. Transient failures
//! (transport errors, 429, 5xx) are retried with a fixed backoff.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client as HttpClient, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::config::TranslationConfig;
use super::{LanguageDetector, TranslateError, TranslationBackend, Translator};

#[derive(Debug, Serialize)]
struct DetectRequest<'a> {
    q: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct DetectCandidate {
    language: String,
    #[serde(default)]
    confidence: f64,
}

#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

/// Client for a LibreTranslate-compatible service.
#[derive(Debug, Clone)]
pub struct LibreTranslateClient {
    http: HttpClient,
    base_url: Url,
    api_key: Option<String>,
    max_retries: usize,
    retry_backoff: Duration,
}

impl LibreTranslateClient {
    /// Builds a client from `config.endpoint`.
    pub fn new(config: &TranslationConfig) -> Result<Self, TranslateError> {
        let endpoint = config
            .endpoint
            .as_deref()
            .ok_or_else(|| TranslateError::InvalidConfig {
                reason: "endpoint is required for the remote backend".to_string(),
            })?;

        let mut base_url = Url::parse(endpoint).map_err(|e| TranslateError::InvalidConfig {
            reason: format!("invalid endpoint '{}': {}", endpoint, e),
        })?;

        // Url::join drops the last segment unless the path ends with '/'.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let http = HttpClient::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| TranslateError::InvalidConfig {
                reason: format!("failed to build HTTP client: {}", e),
            })?;

        Ok(Self {
            http,
            base_url,
            api_key: config.api_key.clone(),
            max_retries: config.max_retries,
            retry_backoff: config.retry_backoff,
        })
    }

    /// Returns the normalized base URL (always ends with `/`).
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, TranslateError> {
        self.base_url
            .join(path)
            .map_err(|e| TranslateError::InvalidConfig {
                reason: format!("failed to build URL for '{}': {}", path, e),
            })
    }

    async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R, TranslateError>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        let mut attempt = 0usize;

        loop {
            attempt += 1;

            match self.send_once(url.clone(), body).await {
                Ok(value) => return Ok(value),
                Err(e) if e.is_transient() && attempt <= self.max_retries => {
                    warn!(
                        path,
                        attempt,
                        max_retries = self.max_retries,
                        error = %e,
                        "Translation request failed, retrying"
                    );
                    tokio::time::sleep(self.retry_backoff).await;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn send_once<B, R>(&self, url: Url, body: &B) -> Result<R, TranslateError>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        let response = self.http.post(url).json(body).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TranslateError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<R>().await?)
    }
}

#[async_trait]
impl LanguageDetector for LibreTranslateClient {
    async fn detect(&self, text: &str) -> Result<String, TranslateError> {
        let request = DetectRequest {
            q: text,
            api_key: self.api_key.as_deref(),
        };

        let candidates: Vec<DetectCandidate> = self.post_json("detect", &request).await?;

        let best = candidates
            .into_iter()
            .max_by(|a, b| a.confidence.total_cmp(&b.confidence))
            .ok_or(TranslateError::NoDetection)?;

        debug!(
            language = %best.language,
            confidence = best.confidence,
            "Detected language"
        );

        Ok(best.language.to_lowercase())
    }
}

#[async_trait]
impl Translator for LibreTranslateClient {
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, TranslateError> {
        let request = TranslateRequest {
            q: text,
            source,
            target,
            format: "text",
            api_key: self.api_key.as_deref(),
        };

        let response: TranslateResponse = self.post_json("translate", &request).await?;
        Ok(response.translated_text)
    }
}

impl TranslationBackend for LibreTranslateClient {
    fn mode(&self) -> &'static str {
        "remote"
    }
}
