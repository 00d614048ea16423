use clap::Parser;
use package_sorter::utils::{logger, validation::Validate};
use package_sorter::{Classifier, CliConfig, Thresholds, TomlConfig};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    let thresholds = match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading thresholds from: {}", path);
            let loaded = TomlConfig::from_file(path).and_then(|toml| {
                toml.validate()?;
                Ok(toml.thresholds())
            });
            match loaded {
                Ok(thresholds) => thresholds,
                Err(e) => {
                    tracing::error!("❌ Configuration failed: {}", e);
                    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
                    eprintln!("❌ {}", e.user_friendly_message());
                    std::process::exit(1);
                }
            }
        }
        None => Thresholds::default(),
    };

    let classifier = Classifier::new(thresholds);
    let assessment = classifier.assess(config.width, config.height, config.length, config.mass);

    if let Some(reason) = &assessment.reason {
        tracing::warn!("Package rejected: {}", reason);
    }

    if config.json {
        println!("{}", serde_json::to_string_pretty(&assessment)?);
    } else {
        println!("{}", assessment.label);
    }

    Ok(())
}
