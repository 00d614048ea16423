pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use config::toml_config::TomlConfig;
pub use config::{Thresholds, LENGTH_THRESHOLD, VOLUME_THRESHOLD, WEIGHT_THRESHOLD};
pub use self::core::classifier::{classify, create, is_bulky, is_heavy, Classifier};
pub use domain::model::{Assessment, Label, Package};
pub use utils::error::{Result, SortError};
