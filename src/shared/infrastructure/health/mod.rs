//! Health probes for the downstream stores.
//!
//! Probes sit outside the read and write paths; a [`HealthMonitor`] polls all
//! of them concurrently and reports UP only when every probe is UP.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HealthStatus {
    Up,
    Down,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentHealth {
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ComponentHealth {
    pub fn up() -> Self {
        Self {
            status: HealthStatus::Up,
            error: None,
        }
    }

    pub fn down(error: impl Into<String>) -> Self {
        Self {
            status: HealthStatus::Down,
            error: Some(error.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub components: BTreeMap<String, ComponentHealth>,
}

#[async_trait]
pub trait HealthProbe: Send + Sync {
    fn name(&self) -> &str;
    async fn check(&self) -> ComponentHealth;
}

#[derive(Default, Clone)]
pub struct HealthMonitor {
    probes: Vec<Arc<dyn HealthProbe>>,
}

impl HealthMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_probe(mut self, probe: Arc<dyn HealthProbe>) -> Self {
        self.probes.push(probe);
        self
    }

    pub async fn report(&self) -> HealthReport {
        let checks = self.probes.iter().map(|probe| async move {
            (probe.name().to_string(), probe.check().await)
        });
        let components: BTreeMap<String, ComponentHealth> =
            futures::future::join_all(checks).await.into_iter().collect();

        let status = if components
            .values()
            .all(|component| component.status == HealthStatus::Up)
        {
            HealthStatus::Up
        } else {
            HealthStatus::Down
        };
        HealthReport { status, components }
    }
}

/// Calls `{base_url}/health` on a remote store.
pub struct HttpHealthProbe {
    name: String,
    url: String,
    client: reqwest::Client,
}

impl HttpHealthProbe {
    pub fn new(name: impl Into<String>, base_url: &str, client: reqwest::Client) -> Self {
        Self {
            name: name.into(),
            url: format!("{}/health", base_url.trim_end_matches('/')),
            client,
        }
    }
}

#[async_trait]
impl HealthProbe for HttpHealthProbe {
    fn name(&self) -> &str {
        &self.name
    }

    async fn check(&self) -> ComponentHealth {
        tracing::debug!(url = %self.url, "calling health endpoint");
        match self.client.get(&self.url).send().await {
            Ok(response) if response.status().is_success() => ComponentHealth::up(),
            Ok(response) => ComponentHealth::down(format!("status {}", response.status())),
            Err(error) => ComponentHealth::down(error.to_string()),
        }
    }
}
