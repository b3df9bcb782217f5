use crate::core::display::DisplaySurface;
use crate::core::registry::FeedRegistry;
use crate::domain::model::LoadOutcome;
use crate::domain::ports::FeedSource;
use crate::utils::error::{FeedError, Result};
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

pub struct FeedLoader<S: FeedSource> {
    source: S,
    registry: Arc<RwLock<FeedRegistry>>,
    display: Arc<RwLock<DisplaySurface>>,
    // 從抓取到渲染全程持有，兩次載入不會交錯
    gate: Mutex<()>,
}

impl<S: FeedSource> FeedLoader<S> {
    pub fn new(
        source: S,
        registry: Arc<RwLock<FeedRegistry>>,
        display: Arc<RwLock<DisplaySurface>>,
    ) -> Self {
        Self {
            source,
            registry,
            display,
            gate: Mutex::new(()),
        }
    }

    /// 載入第 `index` 個 feed，渲染完成後才回傳。
    ///
    /// 失敗時畫面保持原樣。
    pub async fn load_feed(&self, index: usize) -> Result<LoadOutcome> {
        let _guard = self.gate.lock().await;

        let feed = self.registry.read().await.get(index)?;
        tracing::info!("Loading feed #{} '{}'", index, feed.name);

        let entries = self.source.fetch_entries(&feed).await?;
        let entry_count = entries.len();
        tracing::debug!("Fetched {} entries from {}", entry_count, feed.url);

        // 抓取期間清單可能被改動：持有讀鎖確認 feed 仍在，再渲染
        let registry = self.registry.read().await;
        let position = registry.position(&feed).ok_or_else(|| FeedError::FeedRemoved {
            name: feed.name.clone(),
        })?;
        self.display.write().await.render(Arc::clone(&feed), entries);
        drop(registry);
        tracing::info!("Rendered {} entries for '{}'", entry_count, feed.name);

        Ok(LoadOutcome {
            index: position,
            feed_name: feed.name.clone(),
            entry_count,
        })
    }

    /// 回呼版本：不論成功與否，`on_complete` 都只會在載入結束後呼叫一次。
    pub async fn load_feed_with<F>(&self, index: usize, on_complete: F) -> Result<LoadOutcome>
    where
        F: FnOnce() + Send,
    {
        let result = self.load_feed(index).await;
        if let Err(e) = &result {
            tracing::warn!("Loading feed #{} failed: {}", index, e);
        }
        on_complete();
        result
    }

    pub fn display(&self) -> Arc<RwLock<DisplaySurface>> {
        Arc::clone(&self.display)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Entry, FeedDescriptor};
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    struct MockSource {
        entries: HashMap<String, Vec<Entry>>,
        delays: HashMap<String, Duration>,
    }

    impl MockSource {
        fn new() -> Self {
            Self {
                entries: HashMap::new(),
                delays: HashMap::new(),
            }
        }

        fn with_feed(mut self, url: &str, titles: &[&str]) -> Self {
            let entries = titles
                .iter()
                .map(|t| Entry::new(*t, format!("{}/{}", url, t)))
                .collect();
            self.entries.insert(url.to_string(), entries);
            self
        }

        fn with_delay(mut self, url: &str, delay: Duration) -> Self {
            self.delays.insert(url.to_string(), delay);
            self
        }
    }

    #[async_trait]
    impl FeedSource for MockSource {
        async fn fetch_entries(&self, feed: &FeedDescriptor) -> Result<Vec<Entry>> {
            if let Some(delay) = self.delays.get(&feed.url) {
                tokio::time::sleep(*delay).await;
            }
            self.entries
                .get(&feed.url)
                .cloned()
                .ok_or_else(|| FeedError::FeedServiceError {
                    status: 404,
                    url: feed.url.clone(),
                })
        }
    }

    fn loader(source: MockSource) -> FeedLoader<MockSource> {
        let registry = FeedRegistry::from_descriptors(vec![
            FeedDescriptor::new("One", "https://one.example.com"),
            FeedDescriptor::new("Two", "https://two.example.com"),
            FeedDescriptor::new("Broken", "https://broken.example.com"),
        ])
        .unwrap();
        FeedLoader::new(
            source,
            Arc::new(RwLock::new(registry)),
            Arc::new(RwLock::new(DisplaySurface::new())),
        )
    }

    #[tokio::test]
    async fn test_load_feed_renders_entries() {
        let loader = loader(MockSource::new().with_feed("https://one.example.com", &["a", "b"]));

        let outcome = loader.load_feed(0).await.unwrap();

        assert_eq!(outcome.entry_count, 2);
        assert_eq!(outcome.feed_name, "One");
        let display = loader.display();
        let display = display.read().await;
        assert_eq!(display.entry_titles(), vec!["a", "b"]);
        assert_eq!(display.header_title(), Some("One"));
    }

    #[tokio::test]
    async fn test_load_feed_out_of_range() {
        let loader = loader(MockSource::new());
        let err = loader.load_feed(9).await.unwrap_err();
        assert!(matches!(err, FeedError::OutOfRange { index: 9, len: 3 }));
    }

    #[tokio::test]
    async fn test_failed_load_keeps_previous_content() {
        let loader = loader(MockSource::new().with_feed("https://one.example.com", &["a"]));
        loader.load_feed(0).await.unwrap();

        assert!(loader.load_feed(2).await.is_err());

        let display = loader.display();
        assert_eq!(display.read().await.entry_titles(), vec!["a"]);
    }

    #[tokio::test]
    async fn test_callback_fires_once_on_success_and_failure() {
        let loader = loader(MockSource::new().with_feed("https://one.example.com", &["a"]));
        let calls = AtomicUsize::new(0);

        assert!(loader
            .load_feed_with(0, || {
                calls.fetch_add(1, Ordering::SeqCst);
            })
            .await
            .is_ok());
        assert!(loader
            .load_feed_with(2, || {
                calls.fetch_add(1, Ordering::SeqCst);
            })
            .await
            .is_err());

        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_concurrent_loads_do_not_interleave() {
        let source = MockSource::new()
            .with_feed("https://one.example.com", &["slow-1", "slow-2"])
            .with_feed("https://two.example.com", &["fast-1"])
            .with_delay("https://one.example.com", Duration::from_millis(50));
        let loader = Arc::new(loader(source));

        let first = {
            let loader = Arc::clone(&loader);
            tokio::spawn(async move { loader.load_feed(0).await })
        };
        // 讓第一個載入先拿到 gate
        tokio::time::sleep(Duration::from_millis(10)).await;
        let second = loader.load_feed(1).await.unwrap();
        first.await.unwrap().unwrap();

        assert_eq!(second.feed_name, "Two");
        let display = loader.display();
        assert_eq!(display.read().await.entry_titles(), vec!["fast-1"]);
    }

    #[tokio::test]
    async fn test_feed_removed_during_load_is_not_rendered() {
        let source = MockSource::new()
            .with_feed("https://one.example.com", &["a"])
            .with_feed("https://two.example.com", &["late"])
            .with_delay("https://two.example.com", Duration::from_millis(50));
        let loader = Arc::new(loader(source));
        loader.load_feed(0).await.unwrap();

        let pending = {
            let loader = Arc::clone(&loader);
            tokio::spawn(async move { loader.load_feed(1).await })
        };
        tokio::time::sleep(Duration::from_millis(10)).await;
        loader.registry.write().await.remove_feed(1).unwrap();

        let err = pending.await.unwrap().unwrap_err();
        assert!(matches!(err, FeedError::FeedRemoved { ref name } if name == "Two"));

        let display = loader.display();
        let display = display.read().await;
        assert_eq!(display.entry_titles(), vec!["a"]);
        assert_eq!(display.header_title(), Some("One"));
    }

    #[tokio::test]
    async fn test_outcome_index_reflects_position_at_render() {
        let source = MockSource::new()
            .with_feed("https://two.example.com", &["b"])
            .with_delay("https://two.example.com", Duration::from_millis(50));
        let loader = Arc::new(loader(source));

        let pending = {
            let loader = Arc::clone(&loader);
            tokio::spawn(async move { loader.load_feed(1).await })
        };
        tokio::time::sleep(Duration::from_millis(10)).await;
        loader.registry.write().await.remove_feed(0).unwrap();

        let outcome = pending.await.unwrap().unwrap();
        assert_eq!(outcome.index, 0);
        assert_eq!(outcome.feed_name, "Two");
    }
}
