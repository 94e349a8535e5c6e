//! Settings and the resolved check plan

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default Docker endpoint
pub const DEFAULT_ENDPOINT: &str = "unix:///var/run/docker.sock";

/// Layered settings: compiled defaults, TOML file, environment, CLI flags
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckConfig {
    pub daemon: DaemonConfig,
    pub probe: ProbeConfig,
    pub thresholds: Thresholds,
}

/// Docker daemon connection settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DaemonConfig {
    /// Unix socket (`unix://...`) or TCP (`tcp://host:port`) endpoint
    pub endpoint: String,

    /// Client-level timeout for every daemon request
    pub timeout_secs: u64,

    /// Pinned Engine API version (`major.minor`)
    pub api_version: Option<String>,
}

/// Port health probe settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// TCP connect timeout per port
    pub timeout_ms: u64,

    /// Ports never probed
    pub blacklist: Vec<u16>,
}

/// Summary-mode bounds on the daemon's total container count
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    pub warning: Option<i64>,
    pub critical: Option<i64>,
}

impl Default for DaemonConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: 10,
            api_version: None,
        }
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            timeout_ms: 1000,
            blacklist: vec![],
        }
    }
}

impl ProbeConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// What a single run checks
#[derive(Debug, Clone, PartialEq)]
pub enum CheckMode {
    /// Daemon-wide container count against thresholds
    Summary(Thresholds),
    /// One named container
    Container(ContainerCheck),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContainerCheck {
    pub name: String,
    pub health: bool,
    pub blacklist: Vec<u16>,
}

/// Immutable input of one run
#[derive(Debug, Clone, PartialEq)]
pub struct CheckPlan {
    pub daemon: DaemonConfig,
    pub probe: ProbeConfig,
    pub mode: CheckMode,
}

impl CheckPlan {
    /// Summary when no container is named, container check otherwise
    pub fn new(config: CheckConfig, container: Option<String>, health: bool) -> Self {
        let mode = match container {
            Some(name) => CheckMode::Container(ContainerCheck {
                name,
                health,
                blacklist: config.probe.blacklist.clone(),
            }),
            None => CheckMode::Summary(config.thresholds),
        };

        Self {
            daemon: config.daemon,
            probe: config.probe,
            mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CheckConfig::default();
        assert_eq!(config.daemon.endpoint, "unix:///var/run/docker.sock");
        assert_eq!(config.daemon.timeout_secs, 10);
        assert_eq!(config.probe.timeout(), Duration::from_secs(1));
        assert_eq!(config.thresholds, Thresholds::default());
    }

    #[test]
    fn test_plan_modes() {
        let mut config = CheckConfig::default();
        config.probe.blacklist = vec![9090];
        config.thresholds.warning = Some(3);

        let plan = CheckPlan::new(config.clone(), None, false);
        assert_eq!(
            plan.mode,
            CheckMode::Summary(Thresholds {
                warning: Some(3),
                critical: None
            })
        );

        let plan = CheckPlan::new(config, Some("web".to_string()), true);
        assert_eq!(
            plan.mode,
            CheckMode::Container(ContainerCheck {
                name: "web".to_string(),
                health: true,
                blacklist: vec![9090],
            })
        );
    }
}
