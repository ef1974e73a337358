//! Environment-backed configuration.
//!
//! Every setting has a default. Override with `CVRANK_*` environment variables.
//! Translation settings live in [`TranslationConfig`](crate::translate::TranslationConfig).

pub mod error;


pub use error::ConfigError;

use std::env;
use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;

use crate::constants::DEFAULT_MAX_CANDIDATES;

/// Server configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `CVRANK_*` overrides on top of defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port. Default: `8080`.
    pub port: u16,

    /// IP address to bind to. Default: `0.0.0.0`.
    pub bind_addr: IpAddr,

    /// Directory holding `config.json`, `model.safetensors` and `tokenizer.json`.
    ///
    /// When unset the encoder runs in stub mode.
    pub model_path: Option<PathBuf>,

    /// Upper bound on CVs accepted in one request. Default: `1000`.
    pub max_candidates: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            bind_addr: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            model_path: None,
            max_candidates: DEFAULT_MAX_CANDIDATES,
        }
    }
}

impl Config {
    const ENV_PORT: &'static str = "CVRANK_PORT";
    const ENV_BIND_ADDR: &'static str = "CVRANK_BIND_ADDR";
    const ENV_MODEL_PATH: &'static str = "CVRANK_MODEL_PATH";
    const ENV_MAX_CANDIDATES: &'static str = "CVRANK_MAX_CANDIDATES";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = Self::parse_port_from_env(defaults.port)?;
        let bind_addr = Self::parse_bind_addr_from_env(defaults.bind_addr)?;
        let model_path = Self::parse_optional_path_from_env(Self::ENV_MODEL_PATH);
        let max_candidates =
            Self::parse_positive_from_env(Self::ENV_MAX_CANDIDATES, defaults.max_candidates)?;

        Ok(Self {
            port,
            bind_addr,
            model_path,
            max_candidates,
        })
    }

    /// Validates paths and basic invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref path) = self.model_path {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_dir() {
                return Err(ConfigError::NotADirectory { path: path.clone() });
            }
        }

        if self.max_candidates == 0 {
            return Err(ConfigError::InvalidValue {
                name: Self::ENV_MAX_CANDIDATES,
                value: "0".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }

        Ok(())
    }

    /// Returns `"{bind_addr}:{port}"` (useful for logging/binding).
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    fn parse_port_from_env(default: u16) -> Result<u16, ConfigError> {
        match env::var(Self::ENV_PORT) {
            Ok(value) => {
                let port: u16 = value.parse().map_err(|e| ConfigError::PortParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if port == 0 {
                    return Err(ConfigError::InvalidPort { value });
                }

                Ok(port)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_bind_addr_from_env(default: IpAddr) -> Result<IpAddr, ConfigError> {
        match env::var(Self::ENV_BIND_ADDR) {
            Ok(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidBindAddr { value, source: e }),
            Err(_) => Ok(default),
        }
    }

    fn parse_optional_path_from_env(var_name: &str) -> Option<PathBuf> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }

    fn parse_positive_from_env(var_name: &'static str, default: usize) -> Result<usize, ConfigError> {
        match env::var(var_name) {
            Ok(value) => match value.trim().parse::<usize>() {
                Ok(0) => Err(ConfigError::InvalidValue {
                    name: var_name,
                    value,
                    reason: "must be greater than zero".to_string(),
                }),
                Ok(parsed) => Ok(parsed),
                Err(e) => Err(ConfigError::InvalidValue {
                    name: var_name,
                    value,
                    reason: e.to_string(),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}
