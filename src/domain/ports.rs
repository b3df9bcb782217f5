use crate::domain::model::{Entry, FeedDescriptor};
use crate::utils::error::Result;
use async_trait::async_trait;

/// 取得某個 feed 的條目（HTTP、測試替身等）
#[async_trait]
pub trait FeedSource: Send + Sync {
    async fn fetch_entries(&self, feed: &FeedDescriptor) -> Result<Vec<Entry>>;
}

/// 與呈現層解耦的畫面狀態
#[async_trait]
pub trait RenderableState: Send + Sync {
    async fn is_menu_visible(&self) -> bool;
    async fn rendered_entry_titles(&self) -> Vec<String>;
    async fn header_title(&self) -> Option<String>;
}
