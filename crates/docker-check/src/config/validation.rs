//! Configuration validation

use super::CheckConfig;
use crate::error::ConfigurationError;

/// Configuration validation trait
pub trait ConfigValidation {
    fn validate(&self) -> Result<(), ConfigurationError>;
    fn warnings(&self) -> Vec<String>;
}

impl ConfigValidation for CheckConfig {
    fn validate(&self) -> Result<(), ConfigurationError> {
        if self.daemon.endpoint.trim().is_empty() {
            return Err(ConfigurationError::InvalidValue {
                key: "daemon.endpoint".to_string(),
                value: String::new(),
                reason: "endpoint must not be empty".to_string(),
            });
        }

        if self.daemon.timeout_secs == 0 {
            return Err(ConfigurationError::InvalidValue {
                key: "daemon.timeout_secs".to_string(),
                value: "0".to_string(),
                reason: "timeout must be greater than 0".to_string(),
            });
        }

        if self.probe.timeout_ms == 0 {
            return Err(ConfigurationError::InvalidValue {
                key: "probe.timeout_ms".to_string(),
                value: "0".to_string(),
                reason: "timeout must be greater than 0".to_string(),
            });
        }

        Ok(())
    }

    fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if let (Some(warning), Some(critical)) = (self.thresholds.warning, self.thresholds.critical)
        {
            if warning <= critical {
                warnings.push(format!(
                    "Warning threshold {warning} is not above critical threshold {critical}; \
                     the warning state can never be reported"
                ));
            }
        }

        if self.probe.timeout_ms > 10_000 {
            warnings.push(
                "Probe timeout above 10s may exceed the scheduler's check timeout".to_string(),
            );
        }

        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = CheckConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.warnings().is_empty());
    }

    #[test]
    fn test_zero_timeouts_rejected() {
        let mut config = CheckConfig::default();
        config.daemon.timeout_secs = 0;
        assert!(config.validate().is_err());

        let mut config = CheckConfig::default();
        config.probe.timeout_ms = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("probe.timeout_ms"));
    }

    #[test]
    fn test_empty_endpoint_rejected() {
        let mut config = CheckConfig::default();
        config.daemon.endpoint = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unreachable_warning_threshold() {
        let mut config = CheckConfig::default();
        config.thresholds.warning = Some(2);
        config.thresholds.critical = Some(4);
        assert_eq!(config.warnings().len(), 1);

        config.thresholds.warning = Some(6);
        assert!(config.warnings().is_empty());
    }
}
