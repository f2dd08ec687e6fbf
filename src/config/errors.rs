use thiserror::Error;

/// Startup configuration failures
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Required setting '{setting_name}' has no value")]
    MissingSetting { setting_name: String },

    #[error("Invalid setting '{setting_name}': {reason}")]
    InvalidSetting { setting_name: String, reason: String },

    #[error("Failed to parse setting '{setting_name}': {error}")]
    ParseError { setting_name: String, error: String },
}
