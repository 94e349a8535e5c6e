//! Daemon connector
//!
//! Connects to the container runtime's management endpoint and fetches the
//! daemon info and container list. The verdict engine only sees the
//! [`DaemonClient`] trait, so the transport can change without touching it.

pub mod translate;
pub mod types;

pub use types::*;

use crate::config::DaemonConfig;
use crate::error::ConnectorError;
use async_trait::async_trait;
use bollard::{container::ListContainersOptions, ClientVersion, Docker};
use tracing::{debug, info};

/// Capabilities the verdict engine needs from the runtime
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DaemonClient: Send + Sync {
    /// Daemon-wide information
    async fn info(&self) -> Result<DaemonInfo, ConnectorError>;

    /// All containers, including stopped ones when `all` is set
    async fn list_containers(&self, all: bool) -> Result<Vec<ContainerRecord>, ConnectorError>;
}

/// Docker Engine API client backed by bollard
#[derive(Debug, Clone)]
pub struct DockerConnector {
    docker: Docker,
}

impl DockerConnector {
    /// Build a client for the configured endpoint
    ///
    /// No request is sent here. A Unix socket path that does not exist is
    /// rejected immediately; a TCP daemon that is down, or a path that is not
    /// a daemon socket, only fails on the first call.
    pub fn connect(config: &DaemonConfig) -> Result<Self, ConnectorError> {
        let version = match config.api_version.as_deref() {
            Some(raw) => parse_api_version(raw)?,
            None => *bollard::API_DEFAULT_VERSION,
        };

        info!(
            "Connecting to Docker at {} (API v{}.{}, timeout {}s)",
            config.endpoint, version.major_version, version.minor_version, config.timeout_secs
        );

        let endpoint = config.endpoint.as_str();
        let connected = if endpoint.starts_with("unix://") || endpoint.starts_with('/') {
            Docker::connect_with_unix(endpoint, config.timeout_secs, &version)
        } else if endpoint.starts_with("tcp://") || endpoint.starts_with("http://") {
            Docker::connect_with_http(endpoint, config.timeout_secs, &version)
        } else {
            return Err(ConnectorError::ClientCreation {
                details: format!("unsupported endpoint {endpoint}"),
            });
        };

        let docker = connected.map_err(|e| ConnectorError::ClientCreation {
            details: e.to_string(),
        })?;

        Ok(Self { docker })
    }
}

#[async_trait]
impl DaemonClient for DockerConnector {
    async fn info(&self) -> Result<DaemonInfo, ConnectorError> {
        let raw = self
            .docker
            .info()
            .await
            .map_err(|e| ConnectorError::DaemonUnavailable {
                source: Box::new(e),
            })?;

        let info = translate::daemon_info(raw);
        debug!(
            "Daemon {} reports {} containers",
            info.name, info.container_count
        );
        Ok(info)
    }

    async fn list_containers(&self, all: bool) -> Result<Vec<ContainerRecord>, ConnectorError> {
        debug!("Listing containers (all: {})", all);

        let list_options = ListContainersOptions::<String> {
            all,
            ..Default::default()
        };

        let containers = self
            .docker
            .list_containers(Some(list_options))
            .await
            .map_err(|e| ConnectorError::ListFailed {
                source: Box::new(e),
            })?;

        Ok(containers
            .into_iter()
            .map(translate::container_record)
            .collect())
    }
}

fn parse_api_version(raw: &str) -> Result<ClientVersion, ConnectorError> {
    let invalid = || ConnectorError::ClientCreation {
        details: format!("invalid API version {raw:?}, expected <major>.<minor>"),
    };

    let (major, minor) = raw.trim_start_matches('v').split_once('.').ok_or_else(invalid)?;

    Ok(ClientVersion {
        major_version: major.parse().map_err(|_| invalid())?,
        minor_version: minor.parse().map_err(|_| invalid())?,
    })
}
