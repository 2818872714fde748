//! Image cache for instant gallery navigation.
//!
//! Caches decoded RGB8 pixel data with an LRU policy so next/prev transitions
//! and reopened galleries display without hitting the decoder again.

use lru::LruCache;
use std::num::NonZeroUsize;
use std::path::PathBuf;

/// Decoded RGB8 pixel data.
#[derive(Clone)]
pub struct CachedImage {
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl CachedImage {
    pub fn new(data: Vec<u8>, width: u32, height: u32) -> Self {
        Self {
            data,
            width,
            height,
        }
    }
}

/// LRU cache for storing decoded images.
pub struct ImageCache {
    cache: LruCache<PathBuf, CachedImage>,
}

impl ImageCache {
    /// Creates a new image cache with the specified capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            cache: LruCache::new(NonZeroUsize::new(capacity).expect("Capacity must be non-zero")),
        }
    }

    /// Retrieves an image from the cache if it exists.
    pub fn get(&mut self, path: &PathBuf) -> Option<CachedImage> {
        let result = self.cache.get(path).cloned();
        if result.is_some() {
            log::debug!("Cache HIT: {}", path.display());
        } else {
            log::debug!("Cache MISS: {}", path.display());
        }
        result
    }

    /// Stores an image in the cache.
    pub fn put(&mut self, path: PathBuf, cached_image: CachedImage) {
        log::debug!(
            "Cache PUT: {} ({}x{})",
            path.display(),
            cached_image.width,
            cached_image.height
        );
        self.cache.put(path, cached_image);
    }

    /// Checks if an image is in the cache.
    pub fn contains(&mut self, path: &PathBuf) -> bool {
        self.cache.contains(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evicts_least_recently_used() {
        let mut cache = ImageCache::new(2);
        cache.put(PathBuf::from("a.png"), CachedImage::new(vec![0; 3], 1, 1));
        cache.put(PathBuf::from("b.png"), CachedImage::new(vec![0; 3], 1, 1));

        // Touch "a" so "b" is the eviction candidate.
        assert!(cache.get(&PathBuf::from("a.png")).is_some());
        cache.put(PathBuf::from("c.png"), CachedImage::new(vec![0; 3], 1, 1));

        assert!(cache.contains(&PathBuf::from("a.png")));
        assert!(!cache.contains(&PathBuf::from("b.png")));
        assert!(cache.contains(&PathBuf::from("c.png")));
    }
}
