use std::env;
use std::time::Duration;

use crate::config::ConfigError;
use crate::constants::{
    DEFAULT_SOURCE_LANG, DEFAULT_TARGET_LANG, DEFAULT_TRANSLATE_CONCURRENCY,
    DEFAULT_TRANSLATE_RETRIES, DEFAULT_TRANSLATE_TIMEOUT_MS, DEFAULT_TRANSLATION_CACHE_CAPACITY,
};

#[derive(Debug, Clone)]
/// Configuration for the translation layer.
pub struct TranslationConfig {
    /// LibreTranslate-compatible base URL. `None` selects the passthrough backend.
    pub endpoint: Option<String>,
    /// Optional API key sent with every request.
    pub api_key: Option<String>,
    /// Text detected in this language gets translated.
    pub source_lang: String,
    /// Translation target language.
    pub target_lang: String,
    /// Per-request HTTP timeout.
    pub timeout: Duration,
    /// Retries on transient failures (0 = single attempt).
    pub max_retries: usize,
    /// Delay between retries.
    pub retry_backoff: Duration,
    /// Max translations in flight per batch.
    pub concurrency: usize,
    /// Max memoized translations.
    pub cache_capacity: u64,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            api_key: None,
            source_lang: DEFAULT_SOURCE_LANG.to_string(),
            target_lang: DEFAULT_TARGET_LANG.to_string(),
            timeout: Duration::from_millis(DEFAULT_TRANSLATE_TIMEOUT_MS),
            max_retries: DEFAULT_TRANSLATE_RETRIES,
            retry_backoff: Duration::from_millis(250),
            concurrency: DEFAULT_TRANSLATE_CONCURRENCY,
            cache_capacity: DEFAULT_TRANSLATION_CACHE_CAPACITY,
        }
    }
}

impl TranslationConfig {
    const ENV_URL: &'static str = "CVRANK_TRANSLATE_URL";
    const ENV_API_KEY: &'static str = "CVRANK_TRANSLATE_API_KEY";
    const ENV_SOURCE_LANG: &'static str = "CVRANK_SOURCE_LANG";
    const ENV_TARGET_LANG: &'static str = "CVRANK_TARGET_LANG";
    const ENV_TIMEOUT_MS: &'static str = "CVRANK_TRANSLATE_TIMEOUT_MS";
    const ENV_RETRIES: &'static str = "CVRANK_TRANSLATE_RETRIES";
    const ENV_CONCURRENCY: &'static str = "CVRANK_TRANSLATE_CONCURRENCY";
    const ENV_CACHE_CAPACITY: &'static str = "CVRANK_TRANSLATION_CACHE_CAPACITY";

    /// Passthrough config (no remote service).
    pub fn passthrough() -> Self {
        Self::default()
    }

    /// Remote config pointing at `endpoint`.
    pub fn remote(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: Some(endpoint.into()),
            ..Default::default()
        }
    }

    /// Loads config from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let endpoint = optional_string(Self::ENV_URL);
        let api_key = optional_string(Self::ENV_API_KEY);
        let source_lang =
            optional_string(Self::ENV_SOURCE_LANG).unwrap_or(defaults.source_lang.clone());
        let target_lang =
            optional_string(Self::ENV_TARGET_LANG).unwrap_or(defaults.target_lang.clone());
        let timeout_ms = parse_number(
            Self::ENV_TIMEOUT_MS,
            defaults.timeout.as_millis() as u64,
        )?;
        let max_retries = parse_number(Self::ENV_RETRIES, defaults.max_retries)?;
        let concurrency = parse_number(Self::ENV_CONCURRENCY, defaults.concurrency)?;
        let cache_capacity = parse_number(Self::ENV_CACHE_CAPACITY, defaults.cache_capacity)?;

        let config = Self {
            endpoint,
            api_key,
            source_lang: source_lang.to_lowercase(),
            target_lang: target_lang.to_lowercase(),
            timeout: Duration::from_millis(timeout_ms),
            max_retries,
            concurrency,
            cache_capacity,
            ..defaults
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks URL syntax, language codes and non-zero limits.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref endpoint) = self.endpoint {
            let url = reqwest::Url::parse(endpoint).map_err(|e| ConfigError::InvalidUrl {
                name: Self::ENV_URL,
                value: endpoint.clone(),
                reason: e.to_string(),
            })?;
            if !matches!(url.scheme(), "http" | "https") {
                return Err(ConfigError::InvalidUrl {
                    name: Self::ENV_URL,
                    value: endpoint.clone(),
                    reason: format!("unsupported scheme '{}'", url.scheme()),
                });
            }
        }

        for (name, value) in [
            (Self::ENV_SOURCE_LANG, &self.source_lang),
            (Self::ENV_TARGET_LANG, &self.target_lang),
        ] {
            if value.is_empty() || !value.chars().all(|c| c.is_ascii_alphabetic() || c == '-') {
                return Err(ConfigError::InvalidValue {
                    name,
                    value: value.clone(),
                    reason: "expected a language code such as 'id' or 'en'".to_string(),
                });
            }
        }

        if self.concurrency == 0 {
            return Err(ConfigError::InvalidValue {
                name: Self::ENV_CONCURRENCY,
                value: "0".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }

        if self.timeout.is_zero() {
            return Err(ConfigError::InvalidValue {
                name: Self::ENV_TIMEOUT_MS,
                value: "0".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }

        Ok(())
    }

    /// Returns `true` if a remote service is configured.
    pub fn is_remote(&self) -> bool {
        self.endpoint.is_some()
    }
}

fn optional_string(var_name: &str) -> Option<String> {
    env::var(var_name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_number<T>(var_name: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(var_name) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|e: T::Err| ConfigError::InvalidValue {
                name: var_name,
                value,
                reason: e.to_string(),
            }),
        Err(_) => Ok(default),
    }
}
