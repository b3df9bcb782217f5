use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("Feed index {index} is out of range (registry holds {len} feeds)")]
    OutOfRange { index: usize, len: usize },

    #[error("Feed registry cannot be empty")]
    EmptyRegistry,

    #[error("Refusing to remove the last remaining feed")]
    LastFeed,

    #[error("Feed '{name}' was removed before it finished loading")]
    FeedRemoved { name: String },

    #[error("Invalid feed {field}: {reason}")]
    InvalidFeed { field: String, reason: String },

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Feed service returned {status} for {url}")]
    FeedServiceError { status: u16, url: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl FeedError {
    /// 給終端使用者看的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            FeedError::OutOfRange { index, len } => {
                format!("找不到第 {} 個 feed，目前只有 {} 個", index, len)
            }
            FeedError::EmptyRegistry => "Feed 清單是空的".to_string(),
            FeedError::LastFeed => "至少需要保留一個 feed".to_string(),
            FeedError::FeedRemoved { name } => format!("Feed「{}」載入期間已被移除", name),
            FeedError::InvalidFeed { field, reason } => {
                format!("Feed 設定錯誤 ({}): {}", field, reason)
            }
            FeedError::HttpError(_) | FeedError::FeedServiceError { .. } => {
                "無法取得 feed 內容".to_string()
            }
            FeedError::SerializationError(_) => "Feed 內容格式錯誤".to_string(),
            FeedError::IoError(e) => format!("檔案讀寫失敗: {}", e),
            FeedError::ConfigError { .. }
            | FeedError::ConfigValidationError { .. }
            | FeedError::InvalidConfigValueError { .. } => format!("配置錯誤: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            FeedError::OutOfRange { .. } | FeedError::FeedRemoved { .. } => {
                "Use --list to see the available feed indices"
            }
            FeedError::EmptyRegistry | FeedError::LastFeed => {
                "Add at least one [[feeds]] entry to the configuration"
            }
            FeedError::InvalidFeed { .. } => "Every feed needs a non-empty name and url",
            FeedError::HttpError(_) | FeedError::FeedServiceError { .. } => {
                "Check the network connection and the [service] endpoint"
            }
            FeedError::SerializationError(_) => {
                "The feed service returned an unexpected payload; verify the endpoint"
            }
            FeedError::IoError(_) => "Check that the file exists and is readable",
            _ => "Review the configuration file",
        }
    }
}

pub type Result<T> = std::result::Result<T, FeedError>;
