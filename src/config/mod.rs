#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ThresholdProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, Validate};
use serde::{Deserialize, Serialize};

pub const VOLUME_THRESHOLD: u64 = 1_000_000;
pub const LENGTH_THRESHOLD: u64 = 150;
pub const WEIGHT_THRESHOLD: u64 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thresholds {
    pub volume: u64,
    pub length: u64,
    pub weight: u64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            volume: VOLUME_THRESHOLD,
            length: LENGTH_THRESHOLD,
            weight: WEIGHT_THRESHOLD,
        }
    }
}

impl ThresholdProvider for Thresholds {
    fn volume_threshold(&self) -> u64 {
        self.volume
    }

    fn length_threshold(&self) -> u64 {
        self.length
    }

    fn weight_threshold(&self) -> u64 {
        self.weight
    }
}

impl Validate for Thresholds {
    fn validate(&self) -> Result<()> {
        validate_positive_number("thresholds.volume", self.volume, 1)?;
        validate_positive_number("thresholds.length", self.length, 1)?;
        validate_positive_number("thresholds.weight", self.weight, 1)?;
        Ok(())
    }
}
