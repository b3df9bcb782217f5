use crate::domain::model::FeedDescriptor;
use crate::utils::error::{FeedError, Result};
use crate::utils::validation::Validate;
use std::sync::Arc;

/// 有序的 feed 清單，index 0 是預設 feed。
///
/// 重複判斷以配置身分為準：同一個 `Arc` 再加一次不會生效，
/// 但欄位相同的另一個 `Arc` 會被視為新的 feed。
#[derive(Debug, Clone)]
pub struct FeedRegistry {
    feeds: Vec<Arc<FeedDescriptor>>,
}

impl FeedRegistry {
    pub fn new(feeds: Vec<Arc<FeedDescriptor>>) -> Result<Self> {
        if feeds.is_empty() {
            return Err(FeedError::EmptyRegistry);
        }

        let mut registry = Self {
            feeds: Vec::with_capacity(feeds.len()),
        };
        for feed in feeds {
            registry.add_feed(feed);
        }
        Ok(registry)
    }

    pub fn from_descriptors(feeds: Vec<FeedDescriptor>) -> Result<Self> {
        Self::new(feeds.into_iter().map(Arc::new).collect())
    }

    /// 加入 feed，回傳新的長度；已存在的同一個 `Arc` 直接回傳目前長度。
    pub fn add_feed(&mut self, feed: Arc<FeedDescriptor>) -> usize {
        if self.contains(&feed) {
            tracing::debug!("Feed '{}' already registered, skipping", feed.name);
            return self.feeds.len();
        }

        tracing::info!("Registering feed '{}' ({})", feed.name, feed.url);
        self.feeds.push(feed);
        self.feeds.len()
    }

    pub fn remove_feed(&mut self, index: usize) -> Result<Arc<FeedDescriptor>> {
        if index >= self.feeds.len() {
            return Err(FeedError::OutOfRange {
                index,
                len: self.feeds.len(),
            });
        }

        let removed = self.feeds.remove(index);
        tracing::info!("Removed feed '{}' at index {}", removed.name, index);
        Ok(removed)
    }

    pub fn get(&self, index: usize) -> Result<Arc<FeedDescriptor>> {
        self.feeds
            .get(index)
            .cloned()
            .ok_or(FeedError::OutOfRange {
                index,
                len: self.feeds.len(),
            })
    }

    pub fn position(&self, feed: &Arc<FeedDescriptor>) -> Option<usize> {
        self.feeds.iter().position(|f| Arc::ptr_eq(f, feed))
    }

    pub fn contains(&self, feed: &Arc<FeedDescriptor>) -> bool {
        self.position(feed).is_some()
    }

    pub fn len(&self) -> usize {
        self.feeds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.feeds.is_empty()
    }

    pub fn snapshot(&self) -> Vec<Arc<FeedDescriptor>> {
        self.feeds.clone()
    }
}

impl Validate for FeedRegistry {
    fn validate(&self) -> Result<()> {
        if self.feeds.is_empty() {
            return Err(FeedError::EmptyRegistry);
        }
        self.feeds.iter().try_for_each(|feed| feed.validate())
    }
}
