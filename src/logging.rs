//! log4rs setup for the binary.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;

const FALLBACK_PATTERN: &str = "{d(%H:%M:%S)} {h({l})} {t} - {m}{n}";

/// Initialise log4rs from `config_file`, or log warnings to stderr if it is missing.
pub fn init_logging(config_file: &Path) -> Result<(), Box<dyn Error>> {
    if config_file.exists() {
        log4rs::init_file(config_file, Default::default()).map_err(|e| {
            format!(
                "Error initializing log4rs from {}: {e}",
                config_file.display()
            )
        })?;
        log::debug!("Logging configured from {}", config_file.display());
    } else {
        log4rs::init_config(fallback_config()?)?;
        log::debug!(
            "No log config at {}, using stderr console",
            config_file.display()
        );
    }
    Ok(())
}

fn fallback_config() -> Result<Config, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(FALLBACK_PATTERN)))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_LOG_CONFIG;

    #[test]
    fn test_fallback_config_builds() {
        let config = fallback_config().unwrap();
        assert_eq!(config.root().level(), LevelFilter::Warn);
    }

    #[test]
    fn test_shipped_config_is_quiet() {
        let config = log4rs::config::load_config_file(DEFAULT_LOG_CONFIG, Default::default())
            .expect("log4rs.yml should load");
        assert_eq!(config.root().level(), LevelFilter::Warn);
        for logger in config.loggers() {
            assert!(
                logger.level() <= LevelFilter::Warn,
                "logger {} is louder than warn",
                logger.name()
            );
        }
    }
}
