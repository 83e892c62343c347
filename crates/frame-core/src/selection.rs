//! The photo-selection orchestrator.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::MediaItem;
use crate::error::LibraryError;
use crate::ports::{MediaLibrary, SelectionCache};
use crate::sample::{sample_unique, shuffle};

/// One album is sampled per this many albums in the library.
const ALBUM_SAMPLE_DIVISOR: f64 = 15.0;

/// Photos drawn per sampled album: `ceil(sampled_albums / 10)`.
const PHOTO_SAMPLE_DIVISOR: f64 = 10.0;

/// Computes the rotating slideshow selection for a user and keeps the
/// per-user cache up to date.
///
/// On a cache miss (or forced refresh) it samples a subset of the user's
/// albums, then a subset of each sampled album's photos, shuffles the
/// combined result, and caches it. The partial accumulation is written to the
/// cache after every album so a mid-loop failure still leaves a useful entry.
pub struct PhotoPicker {
    cache: Arc<dyn SelectionCache>,
}

impl PhotoPicker {
    pub fn new(cache: Arc<dyn SelectionCache>) -> Self {
        Self { cache }
    }

    /// Return the user's current selection, from cache when possible.
    pub async fn selection(
        &self,
        user_id: &str,
        library: &dyn MediaLibrary,
        force_refresh: bool,
    ) -> Result<Vec<MediaItem>, LibraryError> {
        let mut rng = StdRng::from_os_rng();
        self.selection_with_rng(user_id, library, force_refresh, &mut rng)
            .await
    }

    /// Same as [`selection`](Self::selection) with a caller-supplied RNG.
    pub async fn selection_with_rng<R: Rng>(
        &self,
        user_id: &str,
        library: &dyn MediaLibrary,
        force_refresh: bool,
        rng: &mut R,
    ) -> Result<Vec<MediaItem>, LibraryError> {
        if !force_refresh
            && let Some(cached) = self.cache.get(user_id).await
            && !cached.is_empty()
        {
            return Ok(cached);
        }

        let albums = library.list_albums().await?;
        let album_count = (albums.len() as f64 / ALBUM_SAMPLE_DIVISOR).round() as usize;
        let sampled_albums = sample_unique(&albums, album_count, rng);
        let photos_per_album =
            (sampled_albums.len() as f64 / PHOTO_SAMPLE_DIVISOR).ceil() as usize;

        let mut selection: Vec<MediaItem> = Vec::new();
        for album in &sampled_albums {
            let photos = library.search_album(&album.id).await?;
            selection.extend(sample_unique(&photos, photos_per_album, rng));
            // Partial write: a failure on a later album still leaves
            // everything accumulated so far.
            self.write_cache(user_id, &selection).await;
        }

        shuffle(&mut selection, rng);
        self.write_cache(user_id, &selection).await;
        Ok(selection)
    }

    /// Cache writes are best-effort; a failed write never fails the request.
    async fn write_cache(&self, user_id: &str, items: &[MediaItem]) {
        let _ = self.cache.put(user_id, items).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::domain::Album;
    use crate::error::ApiError;
    use crate::ports::CacheError;

    fn album(id: &str) -> Album {
        Album {
            id: id.into(),
            title: Some(format!("Album {id}")),
            media_items_count: Some("5".into()),
        }
    }

    fn photo(id: &str) -> MediaItem {
        MediaItem {
            id: id.into(),
            description: None,
            mime_type: Some("image/jpeg".into()),
            base_url: Some(format!("https://lh3.example/{id}")),
            product_url: None,
            media_metadata: None,
        }
    }

    fn albums(n: usize) -> Vec<Album> {
        (0..n).map(|i| album(&format!("a{i}"))).collect()
    }

    /// Library fake: fixed album list, scripted per-call search results.
    /// An empty script means every search yields the same five photos.
    struct FakeLibrary {
        albums: Vec<Album>,
        script: Mutex<Vec<Result<Vec<MediaItem>, LibraryError>>>,
        search_calls: Mutex<u32>,
    }

    impl FakeLibrary {
        fn new(albums: Vec<Album>) -> Self {
            Self {
                albums,
                script: Mutex::new(Vec::new()),
                search_calls: Mutex::new(0),
            }
        }

        fn with_script(
            albums: Vec<Album>,
            mut script: Vec<Result<Vec<MediaItem>, LibraryError>>,
        ) -> Self {
            script.reverse();
            Self {
                albums,
                script: Mutex::new(script),
                search_calls: Mutex::new(0),
            }
        }

        fn search_calls(&self) -> u32 {
            *self.search_calls.lock().unwrap()
        }
    }

    #[async_trait]
    impl MediaLibrary for FakeLibrary {
        async fn list_albums(&self) -> Result<Vec<Album>, LibraryError> {
            Ok(self.albums.clone())
        }

        async fn search_album(&self, album_id: &str) -> Result<Vec<MediaItem>, LibraryError> {
            *self.search_calls.lock().unwrap() += 1;
            match self.script.lock().unwrap().pop() {
                Some(result) => result,
                None => Ok((0..5)
                    .map(|i| photo(&format!("{album_id}-p{i}")))
                    .collect()),
            }
        }
    }

    /// Cache fake that records every write in order.
    #[derive(Default)]
    struct RecordingCache {
        entry: Mutex<Option<Vec<MediaItem>>>,
        puts: Mutex<Vec<Vec<MediaItem>>>,
    }

    #[async_trait]
    impl SelectionCache for RecordingCache {
        async fn get(&self, _user_id: &str) -> Option<Vec<MediaItem>> {
            self.entry.lock().unwrap().clone()
        }

        async fn put(&self, _user_id: &str, items: &[MediaItem]) -> Result<(), CacheError> {
            *self.entry.lock().unwrap() = Some(items.to_vec());
            self.puts.lock().unwrap().push(items.to_vec());
            Ok(())
        }
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[tokio::test]
    async fn cached_selection_is_returned_unchanged() {
        let cache = Arc::new(RecordingCache::default());
        let cached = vec![photo("cached-1"), photo("cached-2")];
        *cache.entry.lock().unwrap() = Some(cached.clone());

        let library = FakeLibrary::new(albums(30));
        let picker = PhotoPicker::new(cache);
        let result = picker
            .selection_with_rng("u1", &library, false, &mut rng())
            .await
            .unwrap();

        assert_eq!(result, cached);
        assert_eq!(library.search_calls(), 0);
    }

    #[tokio::test]
    async fn empty_cache_entry_counts_as_a_miss() {
        let cache = Arc::new(RecordingCache::default());
        *cache.entry.lock().unwrap() = Some(vec![]);

        let library = FakeLibrary::new(albums(30));
        let picker = PhotoPicker::new(cache);
        let result = picker
            .selection_with_rng("u1", &library, false, &mut rng())
            .await
            .unwrap();

        assert!(!result.is_empty());
        assert_eq!(library.search_calls(), 2);
    }

    #[tokio::test]
    async fn force_refresh_bypasses_the_cache() {
        let cache = Arc::new(RecordingCache::default());
        *cache.entry.lock().unwrap() = Some(vec![photo("stale")]);

        let library = FakeLibrary::new(albums(30));
        let picker = PhotoPicker::new(cache);
        let result = picker
            .selection_with_rng("u1", &library, true, &mut rng())
            .await
            .unwrap();

        assert_eq!(library.search_calls(), 2);
        assert!(result.iter().all(|p| p.id != "stale"));
    }

    #[tokio::test]
    async fn thirty_albums_sample_two() {
        let cache = Arc::new(RecordingCache::default());
        let library = FakeLibrary::new(albums(30));
        let picker = PhotoPicker::new(cache.clone());

        let result = picker
            .selection_with_rng("u1", &library, false, &mut rng())
            .await
            .unwrap();

        // round(30 / 15) = 2 albums, ceil(2 / 10) = 1 photo each.
        assert_eq!(library.search_calls(), 2);
        assert_eq!(result.len(), 2);
        // Final cache entry matches the returned selection.
        assert_eq!(cache.puts.lock().unwrap().last().unwrap(), &result);
    }

    #[tokio::test]
    async fn zero_albums_yield_an_empty_selection_without_searching() {
        let cache = Arc::new(RecordingCache::default());
        let library = FakeLibrary::new(vec![]);
        let picker = PhotoPicker::new(cache.clone());

        let result = picker
            .selection_with_rng("u1", &library, false, &mut rng())
            .await
            .unwrap();

        assert!(result.is_empty());
        assert_eq!(library.search_calls(), 0);
        // The empty entry is still written.
        assert_eq!(*cache.puts.lock().unwrap(), vec![Vec::<MediaItem>::new()]);
    }

    #[tokio::test]
    async fn albums_without_valid_photos_contribute_nothing() {
        let cache = Arc::new(RecordingCache::default());
        let library = FakeLibrary::with_script(albums(30), vec![Ok(vec![]), Ok(vec![])]);
        let picker = PhotoPicker::new(cache);

        let result = picker
            .selection_with_rng("u1", &library, false, &mut rng())
            .await
            .unwrap();

        assert!(result.is_empty());
        assert_eq!(library.search_calls(), 2);
    }

    #[tokio::test]
    async fn mid_loop_error_short_circuits_but_keeps_the_partial_cache() {
        let cache = Arc::new(RecordingCache::default());
        let first_album = vec![photo("x1"), photo("x2"), photo("x3")];
        let upstream = ApiError::status(500, "INTERNAL", "backend exploded");
        let library = FakeLibrary::with_script(
            albums(30),
            vec![
                Ok(first_album.clone()),
                Err(LibraryError::Api(upstream.clone())),
            ],
        );
        let picker = PhotoPicker::new(cache.clone());

        let err = picker
            .selection_with_rng("u1", &library, false, &mut rng())
            .await
            .unwrap_err();

        assert_eq!(err, LibraryError::Api(upstream));
        // One partial write happened before the failure, drawn from the
        // first album's pool.
        let puts = cache.puts.lock().unwrap();
        assert_eq!(puts.len(), 1);
        assert_eq!(puts[0].len(), 1);
        assert!(first_album.contains(&puts[0][0]));
    }

    #[tokio::test]
    async fn selection_is_drawn_from_the_sampled_albums() {
        let cache = Arc::new(RecordingCache::default());
        let library = FakeLibrary::new(albums(60));
        let picker = PhotoPicker::new(cache);

        let result = picker
            .selection_with_rng("u1", &library, false, &mut rng())
            .await
            .unwrap();

        // round(60 / 15) = 4 albums, ceil(4 / 10) = 1 each.
        assert_eq!(result.len(), 4);
        let mut ids: Vec<&str> = result.iter().map(|p| p.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 4, "selection repeated a photo");
        assert!(result.iter().all(|p| p.is_image()));
    }
}
