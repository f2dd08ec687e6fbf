use crate::config::EnvironmentProvider;
use crate::config::errors::ConfigError;

/// Where a loaded setting came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValueSource {
    EnvironmentVariable { name: String },
    Default,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigValue {
    pub value: String,
    pub source: ConfigValueSource,
}

/// Configuration specification with environment variable → default priority
pub struct ConfigSpec {
    env_var: String,
    default_value: Option<String>,
    min_length: Option<usize>,
    validator: Option<fn(&str) -> Result<(), String>>,
}

impl ConfigSpec {
    pub fn new(env_var: &str) -> Self {
        Self {
            env_var: env_var.to_string(),
            default_value: None,
            min_length: None,
            validator: None,
        }
    }

    pub fn default_value(mut self, value: &str) -> Self {
        self.default_value = Some(value.to_string());
        self
    }

    pub fn min_length(mut self, length: usize) -> Self {
        self.min_length = Some(length);
        self
    }

    pub fn validator(mut self, f: fn(&str) -> Result<(), String>) -> Self {
        self.validator = Some(f);
        self
    }

    /// Resolve the setting, validating whichever value wins
    ///
    /// # Returns
    /// * `Ok(ConfigValue)` - Value and the source it was taken from
    /// * `Err(ConfigError)` - No value and no default, or validation failed
    pub fn load(&self, env: &dyn EnvironmentProvider) -> Result<ConfigValue, ConfigError> {
        let loaded = match env.get_var(&self.env_var) {
            Some(value) => ConfigValue {
                value,
                source: ConfigValueSource::EnvironmentVariable {
                    name: self.env_var.clone(),
                },
            },
            None => match &self.default_value {
                Some(default) => ConfigValue {
                    value: default.clone(),
                    source: ConfigValueSource::Default,
                },
                None => {
                    return Err(ConfigError::MissingSetting {
                        setting_name: self.env_var.clone(),
                    });
                }
            },
        };

        self.validate_value(&loaded.value)?;
        Ok(loaded)
    }

    fn validate_value(&self, value: &str) -> Result<(), ConfigError> {
        if let Some(min_len) = self.min_length {
            if value.len() < min_len {
                return Err(ConfigError::InvalidSetting {
                    setting_name: self.env_var.clone(),
                    reason: format!("Value must be at least {} characters long", min_len),
                });
            }
        }

        if let Some(validator) = self.validator {
            validator(value).map_err(|reason| ConfigError::InvalidSetting {
                setting_name: self.env_var.clone(),
                reason,
            })?;
        }

        Ok(())
    }

    /// Validate a port number is within `min..=max`
    pub fn validate_port_range(value: &str, min: u16, max: u16) -> Result<(), String> {
        let parsed = value
            .trim()
            .parse::<u16>()
            .map_err(|_| format!("Expected port number between {} and {}", min, max))?;

        if parsed < min || parsed > max {
            return Err(format!("Port {} is outside valid range {}-{}", parsed, min, max));
        }

        Ok(())
    }

    pub fn parse_port(value: &str, setting_name: &str) -> Result<u16, ConfigError> {
        value
            .trim()
            .parse::<u16>()
            .map_err(|e| ConfigError::ParseError {
                setting_name: setting_name.to_string(),
                error: format!("Expected port number (1-65535), got '{}': {}", value, e),
            })
    }

    /// Accept IP addresses and plain hostnames; no DNS resolution
    pub fn validate_host_address(value: &str) -> Result<(), String> {
        if value.is_empty() {
            return Err("Host address cannot be empty".to_string());
        }

        if value.parse::<std::net::IpAddr>().is_ok() {
            return Ok(());
        }

        let valid_hostname = value
            .split('.')
            .all(|label| {
                !label.is_empty()
                    && !label.starts_with('-')
                    && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
            });

        if valid_hostname {
            Ok(())
        } else {
            Err(format!("Invalid host address: {}", value))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MockEnvironment;

    #[test]
    fn test_env_value_wins_over_default() {
        let env = MockEnvironment::default().with_var("PORT", "8080");
        let value = ConfigSpec::new("PORT").default_value("3000").load(&env).unwrap();

        assert_eq!(value.value, "8080");
        assert_eq!(
            value.source,
            ConfigValueSource::EnvironmentVariable { name: "PORT".to_string() }
        );
    }

    #[test]
    fn test_default_used_when_env_missing() {
        let env = MockEnvironment::default();
        let value = ConfigSpec::new("PORT").default_value("3000").load(&env).unwrap();

        assert_eq!(value.value, "3000");
        assert_eq!(value.source, ConfigValueSource::Default);
    }

    #[test]
    fn test_missing_without_default_is_error() {
        let env = MockEnvironment::default();
        let err = ConfigSpec::new("DATABASE_URL").load(&env).unwrap_err();

        assert_eq!(
            err,
            ConfigError::MissingSetting { setting_name: "DATABASE_URL".to_string() }
        );
    }

    #[test]
    fn test_min_length_rejects_empty_value() {
        let env = MockEnvironment::default().with_var("DATABASE_URL", "");
        let result = ConfigSpec::new("DATABASE_URL").min_length(1).load(&env);

        assert!(matches!(result, Err(ConfigError::InvalidSetting { .. })));
    }

    #[test]
    fn test_port_range_validation() {
        assert!(ConfigSpec::validate_port_range("3000", 1, 65535).is_ok());
        assert!(ConfigSpec::validate_port_range("0", 1, 65535).is_err());
        assert!(ConfigSpec::validate_port_range("99999", 1, 65535).is_err());
        assert!(ConfigSpec::validate_port_range("http", 1, 65535).is_err());
    }

    #[test]
    fn test_host_address_validation() {
        assert!(ConfigSpec::validate_host_address("0.0.0.0").is_ok());
        assert!(ConfigSpec::validate_host_address("::1").is_ok());
        assert!(ConfigSpec::validate_host_address("localhost").is_ok());
        assert!(ConfigSpec::validate_host_address("api.example.com").is_ok());
        assert!(ConfigSpec::validate_host_address("").is_err());
        assert!(ConfigSpec::validate_host_address("bad host").is_err());
        assert!(ConfigSpec::validate_host_address("-edge.example").is_err());
    }
}
