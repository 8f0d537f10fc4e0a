//! Runtime configuration and logging setup for the binary.

use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Config as LogConfig, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;

/// Environment variable naming the log4rs config file.
pub const LOG_CONFIG_ENV: &str = "CIDR_OVERLAP_LOG_CONFIG";
/// Default log4rs config file.
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path to the log4rs YAML file.
    pub log_config: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_config: DEFAULT_LOG_CONFIG.to_string(),
        }
    }
}

impl Config {
    /// Load `.env` (if present) and read the configuration from the environment.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Config {
            log_config: std::env::var(LOG_CONFIG_ENV)
                .unwrap_or_else(|_| DEFAULT_LOG_CONFIG.to_string()),
        }
    }

    /// Initialize log4rs from the config file, or log warnings to stderr when
    /// the file does not exist.
    pub fn init_logging(&self) -> Result<(), Box<dyn Error>> {
        if Path::new(&self.log_config).exists() {
            log4rs::init_file(&self.log_config, Default::default())
                .map_err(|e| format!("Error initializing log4rs from {}: {e}", self.log_config))?;
        } else {
            log4rs::init_config(fallback_log_config()?)?;
            log::debug!("No {} found, logging to stderr", self.log_config);
        }
        Ok(())
    }
}

fn fallback_log_config() -> Result<LogConfig, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(log4rs::append::console::Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{h({l})} {m}{n}")))
        .build();
    let config = LogConfig::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
    Ok(config)
}
