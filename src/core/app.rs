use crate::adapters::http::ParseServiceSource;
use crate::config::ReaderConfig;
use crate::core::display::DisplaySurface;
use crate::core::loader::FeedLoader;
use crate::core::menu::MenuVisibility;
use crate::core::registry::FeedRegistry;
use crate::domain::model::{Entry, FeedDescriptor, LoadOutcome};
use crate::domain::ports::{FeedSource, RenderableState};
use crate::utils::error::{FeedError, Result};
use crate::utils::validation::Validate;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// 閱讀器的應用程式狀態：feed 清單、載入器、畫面與選單
pub struct FeedReader<S: FeedSource> {
    registry: Arc<RwLock<FeedRegistry>>,
    display: Arc<RwLock<DisplaySurface>>,
    loader: FeedLoader<S>,
    menu: RwLock<MenuVisibility>,
}

impl FeedReader<ParseServiceSource> {
    pub fn from_config(config: &ReaderConfig) -> Result<Self> {
        config.validate()?;
        let source = ParseServiceSource::new(config.service_endpoint(), config.timeout())?;
        tracing::debug!("Using feed service {}", source.endpoint());
        let registry = FeedRegistry::from_descriptors(config.feeds.clone())?;
        Self::new(registry, source)
    }
}

impl<S: FeedSource> FeedReader<S> {
    pub fn new(registry: FeedRegistry, source: S) -> Result<Self> {
        registry.validate()?;

        let registry = Arc::new(RwLock::new(registry));
        let display = Arc::new(RwLock::new(DisplaySurface::new()));
        let loader = FeedLoader::new(source, Arc::clone(&registry), Arc::clone(&display));

        Ok(Self {
            registry,
            display,
            loader,
            menu: RwLock::new(MenuVisibility::new()),
        })
    }

    /// 啟動時載入第一個 feed
    pub async fn init(&self) -> Result<LoadOutcome> {
        self.loader.load_feed(0).await
    }

    pub async fn feeds(&self) -> Vec<Arc<FeedDescriptor>> {
        self.registry.read().await.snapshot()
    }

    pub async fn feed_count(&self) -> usize {
        self.registry.read().await.len()
    }

    pub async fn add_feed(&self, feed: Arc<FeedDescriptor>) -> Result<usize> {
        feed.validate()?;
        Ok(self.registry.write().await.add_feed(feed))
    }

    /// 移除 feed，但不允許清單變成空的
    pub async fn remove_feed(&self, index: usize) -> Result<Arc<FeedDescriptor>> {
        let mut registry = self.registry.write().await;
        if index < registry.len() && registry.len() == 1 {
            return Err(FeedError::LastFeed);
        }
        registry.remove_feed(index)
    }

    pub async fn load_feed(&self, index: usize) -> Result<LoadOutcome> {
        self.loader.load_feed(index).await
    }

    pub async fn load_feed_with<F>(&self, index: usize, on_complete: F) -> Result<LoadOutcome>
    where
        F: FnOnce() + Send,
    {
        self.loader.load_feed_with(index, on_complete).await
    }

    pub async fn toggle_menu(&self) -> bool {
        self.menu.write().await.toggle()
    }

    /// 從選單點選 feed：收起選單並載入
    pub async fn select_feed(&self, index: usize) -> Result<LoadOutcome> {
        self.menu.write().await.hide();
        self.loader.load_feed(index).await
    }

    pub async fn rendered_entries(&self) -> Vec<Entry> {
        self.display.read().await.entries().to_vec()
    }

    /// 目前顯示的 feed 在清單中的位置；已被移除則為 `None`
    pub async fn displayed_feed_index(&self) -> Option<usize> {
        // 與載入器相同的鎖順序：先登錄表再畫面
        let registry = self.registry.read().await;
        let display = self.display.read().await;
        display.feed().and_then(|feed| registry.position(feed))
    }
}

#[async_trait]
impl<S: FeedSource> RenderableState for FeedReader<S> {
    async fn is_menu_visible(&self) -> bool {
        self.menu.read().await.is_visible()
    }

    async fn rendered_entry_titles(&self) -> Vec<String> {
        self.display.read().await.entry_titles()
    }

    async fn header_title(&self) -> Option<String> {
        self.display.read().await.header_title().map(str::to_string)
    }
}
