use thiserror::Error;

#[derive(Error, Debug)]
pub enum SortError {
    #[error("Validation error: {field} must be positive, got {value}")]
    ValidationError { field: String, value: i64 },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl SortError {
    pub fn is_validation(&self) -> bool {
        matches!(self, SortError::ValidationError { .. })
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SortError::ValidationError { field, value } => {
                format!("Package {} is invalid: {}", field, value)
            }
            SortError::ConfigError { message } => format!("Configuration problem: {}", message),
            SortError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
            SortError::IoError(e) => format!("Could not read file: {}", e),
            SortError::TomlError(e) => format!("Configuration file is not valid TOML: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SortError::ValidationError { .. } => "Dimensions and mass must all be greater than zero",
            SortError::ConfigError { .. } | SortError::InvalidConfigValueError { .. } => {
                "Check the [thresholds] section; every threshold must be at least 1"
            }
            SortError::IoError(_) => "Make sure the config file exists and is readable",
            SortError::TomlError(_) => "Fix the TOML syntax in the config file",
        }
    }
}

pub type Result<T> = std::result::Result<T, SortError>;
