use crate::adapters::http::{DEFAULT_SERVICE_ENDPOINT, DEFAULT_TIMEOUT_SECONDS};
use crate::domain::model::FeedDescriptor;
use crate::utils::error::{FeedError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReaderConfig {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default = "default_feeds")]
    pub feeds: Vec<FeedDescriptor>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub endpoint: String,
    pub timeout_seconds: Option<u64>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_SERVICE_ENDPOINT.to_string(),
            timeout_seconds: Some(DEFAULT_TIMEOUT_SECONDS),
        }
    }
}

/// 應用程式啟動時預先載入的 feed
pub fn default_feeds() -> Vec<FeedDescriptor> {
    vec![
        FeedDescriptor::new("Udacity Blog", "http://blog.udacity.com/feed"),
        FeedDescriptor::new("CSS Tricks", "http://feeds.feedburner.com/CssTricks"),
        FeedDescriptor::new("HTML5 Rocks", "http://feeds.feedburner.com/html5rocks"),
        FeedDescriptor::new(
            "Linear Digressions",
            "http://feeds.feedburner.com/udacity-linear-digressions",
        ),
    ]
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            service: ServiceConfig::default(),
            feeds: default_feeds(),
        }
    }
}

impl ReaderConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(FeedError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| FeedError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${FEED_SERVICE})，找不到的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| FeedError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn service_endpoint(&self) -> &str {
        &self.service.endpoint
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.service.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS))
    }
}

impl Validate for ReaderConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("service.endpoint", &self.service.endpoint)?;

        if let Some(timeout) = self.service.timeout_seconds {
            validation::validate_positive_number("service.timeout_seconds", timeout, 1)?;
        }

        if self.feeds.is_empty() {
            return Err(FeedError::ConfigValidationError {
                field: "feeds".to_string(),
                message: "at least one feed is required".to_string(),
            });
        }

        for (i, feed) in self.feeds.iter().enumerate() {
            validation::validate_non_empty_string(&format!("feeds[{}].name", i), &feed.name)?;
            validation::validate_url(&format!("feeds[{}].url", i), &feed.url)?;
        }

        Ok(())
    }
}
