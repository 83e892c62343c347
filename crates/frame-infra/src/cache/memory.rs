//! In-memory selection cache with a per-entry TTL.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::RwLock;

use frame_core::domain::MediaItem;
use frame_core::ports::{CacheError, Clock, SelectionCache};

struct CacheEntry {
    items: Vec<MediaItem>,
    expires_at: Instant,
}

/// Per-user selection cache backed by a HashMap behind an async RwLock.
///
/// Entries hold ephemeral base URLs, so the TTL must stay below the upstream
/// 60-minute URL expiry; the default is 55 minutes. Eviction is passive -
/// expired entries are dropped when read. Writes replace the whole entry, so
/// concurrent refreshes for the same user end in last-writer-wins, never an
/// interleaved state. Data is lost on process restart.
pub struct InMemorySelectionCache {
    store: RwLock<HashMap<String, CacheEntry>>,
    clock: Arc<dyn Clock>,
    ttl: Duration,
}

impl InMemorySelectionCache {
    pub fn new(clock: Arc<dyn Clock>, ttl: Duration) -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
            clock,
            ttl,
        }
    }

    fn is_expired(&self, entry: &CacheEntry) -> bool {
        self.clock.now() > entry.expires_at
    }
}

#[async_trait]
impl SelectionCache for InMemorySelectionCache {
    async fn get(&self, user_id: &str) -> Option<Vec<MediaItem>> {
        let store = self.store.read().await;
        let entry = store.get(user_id)?;

        if self.is_expired(entry) {
            drop(store);
            let mut store = self.store.write().await;
            store.remove(user_id);
            return None;
        }

        Some(entry.items.clone())
    }

    async fn put(&self, user_id: &str, items: &[MediaItem]) -> Result<(), CacheError> {
        let mut store = self.store.write().await;
        store.insert(
            user_id.to_string(),
            CacheEntry {
                items: items.to_vec(),
                expires_at: self.clock.now() + self.ttl,
            },
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Clock that only moves when told to.
    struct ManualClock {
        base: Instant,
        offset: Mutex<Duration>,
    }

    impl ManualClock {
        fn new() -> Self {
            Self {
                base: Instant::now(),
                offset: Mutex::new(Duration::ZERO),
            }
        }

        fn advance(&self, by: Duration) {
            *self.offset.lock().unwrap() += by;
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> Instant {
            self.base + *self.offset.lock().unwrap()
        }
    }

    fn photo(id: &str) -> MediaItem {
        MediaItem {
            id: id.into(),
            description: None,
            mime_type: Some("image/jpeg".into()),
            base_url: None,
            product_url: None,
            media_metadata: None,
        }
    }

    const TTL: Duration = Duration::from_secs(55 * 60);

    #[tokio::test]
    async fn put_then_get_returns_the_entry() {
        let clock = Arc::new(ManualClock::new());
        let cache = InMemorySelectionCache::new(clock, TTL);

        let items = vec![photo("a"), photo("b")];
        cache.put("u1", &items).await.unwrap();
        assert_eq!(cache.get("u1").await, Some(items));
        assert_eq!(cache.get("u2").await, None);
    }

    #[tokio::test]
    async fn entries_expire_after_the_ttl() {
        let clock = Arc::new(ManualClock::new());
        let cache = InMemorySelectionCache::new(clock.clone(), TTL);

        cache.put("u1", &[photo("a")]).await.unwrap();

        clock.advance(Duration::from_secs(54 * 60));
        assert!(cache.get("u1").await.is_some());

        clock.advance(Duration::from_secs(2 * 60));
        assert_eq!(cache.get("u1").await, None);
        // A second read still misses after the passive eviction.
        assert_eq!(cache.get("u1").await, None);
    }

    #[tokio::test]
    async fn writes_replace_wholesale_and_restart_the_ttl() {
        let clock = Arc::new(ManualClock::new());
        let cache = InMemorySelectionCache::new(clock.clone(), TTL);

        cache.put("u1", &[photo("a")]).await.unwrap();
        clock.advance(Duration::from_secs(50 * 60));
        cache.put("u1", &[photo("b")]).await.unwrap();

        // Past the first write's expiry, within the second's.
        clock.advance(Duration::from_secs(10 * 60));
        assert_eq!(cache.get("u1").await, Some(vec![photo("b")]));
    }
}
