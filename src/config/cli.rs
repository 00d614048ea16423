use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "package-sorter")]
#[command(about = "Sort a package into STANDARD, SPECIAL or REJECTED")]
pub struct CliConfig {
    #[arg(allow_negative_numbers = true)]
    pub width: i64,

    #[arg(allow_negative_numbers = true)]
    pub height: i64,

    #[arg(allow_negative_numbers = true)]
    pub length: i64,

    #[arg(allow_negative_numbers = true)]
    pub mass: i64,

    /// Path to a TOML file overriding the default thresholds
    #[arg(short, long)]
    pub config: Option<String>,

    /// Print the full assessment as JSON instead of the bare label
    #[arg(long)]
    pub json: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positional_measurements() {
        let config = CliConfig::try_parse_from(["package-sorter", "1", "2", "3", "4"]).unwrap();
        assert_eq!((config.width, config.height, config.length, config.mass), (1, 2, 3, 4));
        assert!(config.config.is_none());
        assert!(!config.json);
    }

    #[test]
    fn test_parse_negative_and_flags() {
        let config = CliConfig::try_parse_from([
            "package-sorter",
            "-5",
            "1",
            "1",
            "1",
            "--json",
            "--config",
            "sorter.toml",
        ])
        .unwrap();
        assert_eq!(config.width, -5);
        assert!(config.json);
        assert_eq!(config.config.as_deref(), Some("sorter.toml"));
    }

    #[test]
    fn test_missing_mass_is_an_error() {
        assert!(CliConfig::try_parse_from(["package-sorter", "1", "2", "3"]).is_err());
    }
}
