use crate::utils::error::SortError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A package whose dimensions and mass have all passed validation.
///
/// Fields are private so the only way to obtain one is through
/// [`crate::core::classifier::create`], which guarantees every value is
/// strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Package {
    width: u64,
    height: u64,
    length: u64,
    mass: u64,
}

impl Package {
    pub(crate) fn from_validated(width: u64, height: u64, length: u64, mass: u64) -> Self {
        Self {
            width,
            height,
            length,
            mass,
        }
    }

    pub fn width(&self) -> u64 {
        self.width
    }

    pub fn height(&self) -> u64 {
        self.height
    }

    pub fn length(&self) -> u64 {
        self.length
    }

    pub fn mass(&self) -> u64 {
        self.mass
    }

    /// Width × height × length, saturating at `u128::MAX`.
    pub fn volume(&self) -> u128 {
        u128::from(self.width)
            .saturating_mul(u128::from(self.height))
            .saturating_mul(u128::from(self.length))
    }

    pub fn dimensions(&self) -> [u64; 3] {
        [self.width, self.height, self.length]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Label {
    Standard,
    Special,
    Rejected,
}

impl Label {
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Standard => "STANDARD",
            Label::Special => "SPECIAL",
            Label::Rejected => "REJECTED",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Label {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "STANDARD" => Ok(Label::Standard),
            "SPECIAL" => Ok(Label::Special),
            "REJECTED" => Ok(Label::Rejected),
            other => Err(SortError::ConfigError {
                message: format!("unknown label: {}", other),
            }),
        }
    }
}

/// Full outcome of classifying one set of inputs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub package: Option<Package>,
    pub bulky: bool,
    pub heavy: bool,
    pub label: Label,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}
