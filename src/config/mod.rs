//! Configuration management for BetSlip
//!
//! Loads from YAML files + environment variables via .env

use anyhow::{bail, Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSection,
    pub slip: SlipConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppSection {
    /// Version tag for logging
    pub tag: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SlipConfig {
    /// Maximum selections a slip accepts
    pub max_selections: usize,
    /// Prefix for rendered amounts
    pub currency_symbol: String,
}

impl Default for SlipConfig {
    fn default() -> Self {
        Self {
            max_selections: 12,
            currency_symbol: "$".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when RUST_LOG is unset
    pub level: String,
    /// "pretty" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from file and environment
    pub fn load() -> Result<Self> {
        // Load .env file first
        dotenvy::dotenv().ok();

        let config = Config::builder()
            .set_default("app.tag", env!("CARGO_PKG_VERSION"))?
            // Slip defaults
            .set_default("slip.max_selections", 12)?
            .set_default("slip.currency_symbol", "$")?
            // Logging defaults
            .set_default("logging.level", "info")?
            .set_default("logging.format", "pretty")?
            // Load config file if exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // Override with environment variables (BETSLIP_*)
            .add_source(Environment::with_prefix("BETSLIP").separator("__"))
            .build()
            .context("Failed to build configuration")?;

        let app_config: AppConfig = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;
        app_config.validate()?;

        Ok(app_config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.slip.max_selections == 0 {
            bail!("slip.max_selections must be at least 1");
        }
        match self.logging.format.as_str() {
            "pretty" | "json" => Ok(()),
            other => bail!("logging.format must be \"pretty\" or \"json\", got {:?}", other),
        }
    }

    /// Generate a digest of the config for logging
    pub fn digest(&self) -> String {
        format!(
            "tag={} max_selections={} currency={} log_level={} log_format={}",
            self.app.tag,
            self.slip.max_selections,
            self.slip.currency_symbol,
            self.logging.level,
            self.logging.format
        )
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app: AppSection {
                tag: env!("CARGO_PKG_VERSION").to_string(),
            },
            slip: SlipConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl std::fmt::Display for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.digest())
    }
}
