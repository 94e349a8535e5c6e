//! # Configuration Loader
//!
//! Figment-based configuration loading with layered support:
//! 1. Compiled defaults
//! 2. TOML configuration file
//! 3. Environment variable overrides (`CHECK_DOCKER_*`)
//! 4. Command line flags
//!
//! Nested fields use a double underscore in environment variables, e.g.
//! `CHECK_DOCKER_DAEMON__ENDPOINT` or `CHECK_DOCKER_PROBE__BLACKLIST="[22, 9090]"`.

use super::CheckConfig;
use crate::error::ConfigurationError;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable prefix
pub const DEFAULT_ENV_PREFIX: &str = "CHECK_DOCKER";

/// System-wide configuration file, used when present
const SYSTEM_CONFIG_FILE: &str = "/etc/check_docker/config.toml";

/// Configuration loading options
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Optional path to configuration file
    pub config_path: Option<PathBuf>,
    /// Environment variable prefix
    pub env_prefix: String,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            config_path: None,
            env_prefix: DEFAULT_ENV_PREFIX.to_string(),
        }
    }
}

/// Load configuration, applying `overrides` as the highest-priority layer
///
/// A file requested explicitly (option or `<PREFIX>_CONFIG`) must exist; the
/// system-wide file is optional.
pub fn load<O>(options: LoadOptions, overrides: &O) -> Result<CheckConfig, ConfigurationError>
where
    O: Serialize,
{
    debug!("Loading configuration with options: {:?}", options);

    let mut figment = Figment::new().merge(Serialized::defaults(CheckConfig::default()));

    match determine_config_path(options.config_path, &options.env_prefix) {
        Some(path) => {
            if !path.exists() {
                return Err(ConfigurationError::FileNotFound {
                    path: path.display().to_string(),
                });
            }
            figment = add_file_provider(figment, &path)?;
        }
        None => {
            let system = Path::new(SYSTEM_CONFIG_FILE);
            if system.exists() {
                figment = add_file_provider(figment, system)?;
            }
        }
    }

    figment = figment
        .merge(
            Env::prefixed(&format!("{}_", options.env_prefix))
                .split("__")
                .ignore(&["CONFIG"]),
        )
        .merge(Serialized::defaults(overrides));

    let config: CheckConfig = figment
        .extract()
        .map_err(|err| ConfigurationError::ParseError {
            details: err.to_string(),
        })?;

    debug!("Configuration loaded: {:?}", config);
    Ok(config)
}

fn determine_config_path(override_path: Option<PathBuf>, env_prefix: &str) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    std::env::var(format!("{env_prefix}_CONFIG"))
        .ok()
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

fn add_file_provider(figment: Figment, path: &Path) -> Result<Figment, ConfigurationError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("toml");

    match extension.to_lowercase().as_str() {
        "toml" => {
            debug!("Loading configuration from file: {}", path.display());
            Ok(figment.merge(Toml::file(path)))
        }
        _ => Err(ConfigurationError::ParseError {
            details: format!(
                "Unsupported configuration file format: {extension} (supported: toml)"
            ),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[derive(Serialize, Default)]
    struct NoOverrides {}

    fn options(prefix: &str, path: Option<PathBuf>) -> LoadOptions {
        LoadOptions {
            config_path: path,
            env_prefix: prefix.to_string(),
        }
    }

    #[test]
    #[serial]
    fn test_load_defaults() {
        let config = load(options("TEST_CD_DEFAULTS", None), &NoOverrides::default()).unwrap();
        assert_eq!(config, CheckConfig::default());
    }

    #[test]
    #[serial]
    fn test_load_from_toml_file() {
        let mut file = NamedTempFile::with_suffix(".toml").unwrap();
        file.write_all(
            br#"
            [daemon]
            endpoint = "tcp://10.0.0.2:2375"
            timeout_secs = 3

            [probe]
            blacklist = [22, 9090]

            [thresholds]
            warning = 4
            critical = 2
            "#,
        )
        .unwrap();

        let config = load(
            options("TEST_CD_FILE", Some(file.path().to_path_buf())),
            &NoOverrides::default(),
        )
        .unwrap();

        assert_eq!(config.daemon.endpoint, "tcp://10.0.0.2:2375");
        assert_eq!(config.daemon.timeout_secs, 3);
        assert_eq!(config.probe.blacklist, vec![22, 9090]);
        assert_eq!(config.probe.timeout_ms, 1000);
        assert_eq!(config.thresholds.warning, Some(4));
        assert_eq!(config.thresholds.critical, Some(2));
    }

    #[test]
    #[serial]
    fn test_env_overrides_file() {
        let mut file = NamedTempFile::with_suffix(".toml").unwrap();
        file.write_all(b"[daemon]\ntimeout_secs = 3\n").unwrap();

        let prefix = "TEST_CD_ENV";
        env::set_var(format!("{prefix}_DAEMON__TIMEOUT_SECS"), "7");
        env::set_var(format!("{prefix}_THRESHOLDS__CRITICAL"), "1");

        let result = load(
            options(prefix, Some(file.path().to_path_buf())),
            &NoOverrides::default(),
        );

        env::remove_var(format!("{prefix}_DAEMON__TIMEOUT_SECS"));
        env::remove_var(format!("{prefix}_THRESHOLDS__CRITICAL"));

        let config = result.unwrap();
        assert_eq!(config.daemon.timeout_secs, 7);
        assert_eq!(config.thresholds.critical, Some(1));
    }

    #[test]
    #[serial]
    fn test_config_path_from_env() {
        let mut file = NamedTempFile::with_suffix(".toml").unwrap();
        file.write_all(b"[probe]\ntimeout_ms = 250\n").unwrap();

        let prefix = "TEST_CD_PATH";
        env::set_var(format!("{prefix}_CONFIG"), file.path());
        let result = load(options(prefix, None), &NoOverrides::default());
        env::remove_var(format!("{prefix}_CONFIG"));

        assert_eq!(result.unwrap().probe.timeout_ms, 250);
    }

    #[test]
    #[serial]
    fn test_file_not_found_when_requested() {
        let path = PathBuf::from("/non/existent/check_docker.toml");
        let result = load(options("TEST_CD_MISSING", Some(path)), &NoOverrides::default());

        match result.unwrap_err() {
            ConfigurationError::FileNotFound { path } => {
                assert_eq!(path, "/non/existent/check_docker.toml");
            }
            other => panic!("Expected FileNotFound error, got {other:?}"),
        }
    }

    #[test]
    #[serial]
    fn test_unsupported_format() {
        let file = NamedTempFile::with_suffix(".yaml").unwrap();
        let result = load(
            options("TEST_CD_FORMAT", Some(file.path().to_path_buf())),
            &NoOverrides::default(),
        );
        assert!(matches!(result, Err(ConfigurationError::ParseError { .. })));
    }
}
