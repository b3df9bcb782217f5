use crate::utils::error::{FeedError, Result};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};

/// 一個 RSS 來源：顯示名稱與 feed 網址。
///
/// 登錄表以 `Arc<FeedDescriptor>` 保存，重複判斷看的是同一個配置 (`Arc::ptr_eq`)，
/// 不是欄位相等。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedDescriptor {
    pub name: String,
    pub url: String,
}

impl FeedDescriptor {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

impl Validate for FeedDescriptor {
    fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(FeedError::InvalidFeed {
                field: "name".to_string(),
                reason: "name cannot be empty".to_string(),
            });
        }
        if self.url.trim().is_empty() {
            return Err(FeedError::InvalidFeed {
                field: "url".to_string(),
                reason: format!("url of feed '{}' cannot be empty", self.name),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub title: String,
    pub link: String,
    #[serde(default)]
    pub snippet: String,
}

impl Entry {
    pub fn new(title: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
            snippet: String::new(),
        }
    }

    pub fn with_snippet(mut self, snippet: impl Into<String>) -> Self {
        self.snippet = snippet.into();
        self
    }
}

/// 一次載入完成後的結果
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    pub index: usize,
    pub feed_name: String,
    pub entry_count: usize,
}
