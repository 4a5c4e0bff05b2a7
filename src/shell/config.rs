//! Runtime configuration, read from `COMPOSITE__*` environment variables.
//!
//! `COMPOSITE__SERVER__PORT=7001` sets `server.port`,
//! `COMPOSITE__DOWNSTREAM__MODE=http` switches the readers to the remote stores.

use std::time::Duration;

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

pub const CONFIG_ENV_PREFIX: &str = "COMPOSITE";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub downstream: DownstreamConfig,
    /// Used when `RUST_LOG` is not set.
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            downstream: DownstreamConfig::default(),
            log_level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Address reported in `serviceAddresses`; defaults to `host:port`.
    pub service_address: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 7000,
            service_address: None,
        }
    }
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn service_address(&self) -> String {
        self.service_address
            .clone()
            .unwrap_or_else(|| self.bind_address())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DownstreamMode {
    /// Stores are hosted by this process and fed by in-memory channels.
    #[default]
    InProcess,
    /// Stores are reached over HTTP at the configured base URLs.
    Http,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DownstreamConfig {
    pub mode: DownstreamMode,
    pub read_timeout_ms: u64,
    pub product_url: String,
    pub recommendation_url: String,
    pub review_url: String,
}

impl Default for DownstreamConfig {
    fn default() -> Self {
        Self {
            mode: DownstreamMode::InProcess,
            read_timeout_ms: 3000,
            product_url: "http://product:8080".to_string(),
            recommendation_url: "http://recommendation:8080".to_string(),
            review_url: "http://review:8080".to_string(),
        }
    }
}

impl DownstreamConfig {
    pub fn read_timeout(&self) -> Duration {
        Duration::from_millis(self.read_timeout_ms)
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(
            Environment::with_prefix(CONFIG_ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
    }

    pub fn load_from(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(environment)
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod app_config_tests {
    use super::*;
    use rstest::rstest;

    fn environment(vars: &[(&str, &str)]) -> Environment {
        let source = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::with_prefix(CONFIG_ENV_PREFIX)
            .separator("__")
            .try_parsing(true)
            .source(Some(source))
    }

    #[rstest]
    fn it_should_fall_back_to_the_defaults() {
        let config = AppConfig::load_from(environment(&[])).unwrap();

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.server.bind_address(), "0.0.0.0:7000");
        assert_eq!(config.downstream.mode, DownstreamMode::InProcess);
        assert_eq!(config.downstream.read_timeout(), Duration::from_secs(3));
        assert_eq!(config.log_level, "info");
    }

    #[rstest]
    fn it_should_read_nested_values_from_the_environment() {
        let config = AppConfig::load_from(environment(&[
            ("COMPOSITE__SERVER__PORT", "7001"),
            ("COMPOSITE__SERVER__SERVICE_ADDRESS", "composite-1"),
            ("COMPOSITE__DOWNSTREAM__MODE", "http"),
            ("COMPOSITE__DOWNSTREAM__READ_TIMEOUT_MS", "250"),
            ("COMPOSITE__DOWNSTREAM__PRODUCT_URL", "http://localhost:7002"),
            ("COMPOSITE__LOG_LEVEL", "debug"),
        ]))
        .unwrap();

        assert_eq!(config.server.port, 7001);
        assert_eq!(config.server.service_address(), "composite-1");
        assert_eq!(config.downstream.mode, DownstreamMode::Http);
        assert_eq!(config.downstream.read_timeout(), Duration::from_millis(250));
        assert_eq!(config.downstream.product_url, "http://localhost:7002");
        assert_eq!(config.downstream.review_url, "http://review:8080");
        assert_eq!(config.log_level, "debug");
    }

    #[rstest]
    fn it_should_reject_an_unknown_mode() {
        let result = AppConfig::load_from(environment(&[("COMPOSITE__DOWNSTREAM__MODE", "grpc")]));
        assert!(result.is_err());
    }
}
