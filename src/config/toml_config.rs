use crate::config::{Thresholds, LENGTH_THRESHOLD, VOLUME_THRESHOLD, WEIGHT_THRESHOLD};
use crate::utils::error::{Result, SortError};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub thresholds: ThresholdsConfig,
}

/// Every key is optional; missing ones fall back to the built-in constants.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThresholdsConfig {
    pub volume: Option<u64>,
    pub length: Option<u64>,
    pub weight: Option<u64>,
}

impl TomlConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SortError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// Replace `${VAR_NAME}` with the environment value; unknown names are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SortError::ConfigError {
            message: format!("env var pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn thresholds(&self) -> Thresholds {
        Thresholds {
            volume: self.thresholds.volume.unwrap_or(VOLUME_THRESHOLD),
            length: self.thresholds.length.unwrap_or(LENGTH_THRESHOLD),
            weight: self.thresholds.weight.unwrap_or(WEIGHT_THRESHOLD),
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.thresholds().validate()
    }
}
