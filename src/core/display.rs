use crate::domain::model::{Entry, FeedDescriptor};
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// 目前畫面上顯示的 feed 內容
///
/// 保存的是 feed 本身而不是 index，清單變動後 index 要向登錄表重新查詢。
#[derive(Debug, Clone, Default)]
pub struct DisplaySurface {
    feed: Option<Arc<FeedDescriptor>>,
    entries: Vec<Entry>,
    rendered_at: Option<DateTime<Utc>>,
}

impl DisplaySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// 整批替換，舊條目不會殘留
    pub fn render(&mut self, feed: Arc<FeedDescriptor>, entries: Vec<Entry>) {
        self.feed = Some(feed);
        self.entries = entries;
        self.rendered_at = Some(Utc::now());
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn entry_titles(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.title.clone()).collect()
    }

    pub fn header_title(&self) -> Option<&str> {
        self.feed.as_deref().map(|f| f.name.as_str())
    }

    pub fn feed(&self) -> Option<&Arc<FeedDescriptor>> {
        self.feed.as_ref()
    }

    pub fn rendered_at(&self) -> Option<DateTime<Utc>> {
        self.rendered_at
    }
}
