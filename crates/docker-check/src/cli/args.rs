//! CLI argument parsing and check plan resolution
//!
//! Flags override the environment and the configuration file; the result is
//! frozen into a [`CheckPlan`].

use crate::config::{loader, CheckConfig, CheckPlan, ConfigValidation};
use crate::error::ConfigurationError;
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;
use tracing::warn;

/// Report Docker daemon and container health as a monitoring plugin verdict
#[derive(Parser, Debug, Clone)]
#[command(name = "check_docker", author, version, about, long_about = None)]
pub struct CheckArgs {
    /// Unix or TCP socket of the Docker daemon [default: unix:///var/run/docker.sock]
    #[arg(long, value_name = "ENDPOINT")]
    pub base: Option<String>,

    /// Name of the container to check; omit for a daemon summary
    #[arg(long, value_name = "NAME")]
    pub container: Option<String>,

    /// Probe the container's published TCP ports
    #[arg(long, requires = "container")]
    pub health: bool,

    /// Warn when the daemon runs this many containers or fewer (summary)
    #[arg(long, value_name = "COUNT", allow_negative_numbers = true)]
    pub warning: Option<i64>,

    /// Critical when the daemon runs this many containers or fewer (summary)
    #[arg(long, value_name = "COUNT", allow_negative_numbers = true)]
    pub critical: Option<i64>,

    /// Ports excluded from the health probe
    #[arg(long, value_name = "PORT", num_args = 0..)]
    pub blacklist: Option<Vec<u16>>,

    /// Daemon request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Port probe timeout in milliseconds
    #[arg(long, value_name = "MS")]
    pub probe_timeout: Option<u64>,

    /// Pin the Docker Engine API version (e.g. 1.41)
    #[arg(long, value_name = "VERSION")]
    pub api_version: Option<String>,

    /// Configuration file path
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log level written to stderr (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn")]
    pub log_level: String,
}

#[derive(Debug, Serialize)]
struct CliOverrides {
    daemon: DaemonOverrides,
    probe: ProbeOverrides,
    thresholds: ThresholdOverrides,
}

#[derive(Debug, Serialize)]
struct DaemonOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    timeout_secs: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_version: Option<String>,
}

#[derive(Debug, Serialize)]
struct ProbeOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    timeout_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    blacklist: Option<Vec<u16>>,
}

#[derive(Debug, Serialize)]
struct ThresholdOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    warning: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    critical: Option<i64>,
}

impl CheckArgs {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            daemon: DaemonOverrides {
                endpoint: self.base.clone(),
                timeout_secs: self.timeout,
                api_version: self.api_version.clone(),
            },
            probe: ProbeOverrides {
                timeout_ms: self.probe_timeout,
                blacklist: self.blacklist.clone(),
            },
            thresholds: ThresholdOverrides {
                warning: self.warning,
                critical: self.critical,
            },
        }
    }
}

/// Check plan resolver
pub struct AppConfigResolver;

impl AppConfigResolver {
    /// Layer configuration sources and resolve the run's plan
    pub fn resolve(args: &CheckArgs) -> Result<CheckPlan, ConfigurationError> {
        Self::resolve_with_options(
            args,
            loader::LoadOptions {
                config_path: args.config.clone(),
                ..Default::default()
            },
        )
    }

    pub fn resolve_with_options(
        args: &CheckArgs,
        options: loader::LoadOptions,
    ) -> Result<CheckPlan, ConfigurationError> {
        let config: CheckConfig = loader::load(options, &args.overrides())?;

        config.validate()?;
        for warning in config.warnings() {
            warn!("{}", warning);
        }

        Ok(CheckPlan::new(config, args.container.clone(), args.health))
    }
}
