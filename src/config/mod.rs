pub mod toml_config;

pub use toml_config::{default_feeds, ReaderConfig, ServiceConfig};

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "feedreader")]
#[command(about = "Load RSS feeds and print their entries")]
pub struct CliConfig {
    #[arg(long, help = "Path to a TOML configuration file")]
    pub config: Option<String>,

    #[arg(long, default_value = "0", help = "Index of the feed to load")]
    pub feed: usize,

    #[arg(long, help = "List the registered feeds and exit")]
    pub list: bool,

    #[arg(long, help = "Override the feed parsing service endpoint")]
    pub service_endpoint: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 合併 TOML 檔案與命令列參數
    pub fn reader_config(&self) -> Result<ReaderConfig> {
        let mut config = match &self.config {
            Some(path) => ReaderConfig::from_file(path)?,
            None => ReaderConfig::default(),
        };

        if let Some(endpoint) = &self.service_endpoint {
            config.service.endpoint = endpoint.clone();
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validation::validate_non_empty_string("config", path)?;
        }
        if let Some(endpoint) = &self.service_endpoint {
            validation::validate_url("service_endpoint", endpoint)?;
        }
        Ok(())
    }
}
