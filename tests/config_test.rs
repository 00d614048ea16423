use anyhow::Result;
use package_sorter::utils::validation::Validate;
use package_sorter::{Classifier, Label, TomlConfig};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_thresholds_from_file_drive_classification() -> Result<()> {
    let mut temp_file = NamedTempFile::new()?;
    temp_file.write_all(
        br#"
[thresholds]
volume = 1000
length = 50
weight = 5
"#,
    )?;

    let config = TomlConfig::from_file(temp_file.path())?;
    config.validate()?;

    let classifier = Classifier::new(config.thresholds());
    assert_eq!(classifier.classify(10, 10, 10, 1), Label::Special);
    assert_eq!(classifier.classify(1, 1, 50, 5), Label::Rejected);
    assert_eq!(classifier.classify(2, 2, 2, 2), Label::Standard);

    Ok(())
}

#[test]
fn test_invalid_thresholds_fail_validation() -> Result<()> {
    let config = TomlConfig::from_toml_str("[thresholds]\nvolume = 0\n")?;
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("thresholds.volume"));
    assert!(!err.recovery_suggestion().is_empty());
    Ok(())
}

#[test]
fn test_malformed_toml_is_reported() {
    let err = TomlConfig::from_toml_str("[thresholds\nvolume = 1").unwrap_err();
    assert!(err.user_friendly_message().contains("TOML"));
}
