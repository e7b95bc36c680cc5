//! Image cache for fast navigation.
//!
//! Keeps recently decoded pictures using an LRU policy so stepping back and
//! forth through a list does not decode the same file again.

use crate::image_loader::DecodedImage;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

/// LRU cache for storing decoded images.
pub struct ImageCache {
    cache: LruCache<PathBuf, DecodedImage>,
}

impl ImageCache {
    /// Creates a new image cache with the specified capacity (at least one entry).
    pub fn new(capacity: usize) -> Self {
        Self {
            cache: LruCache::new(NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN)),
        }
    }

    /// Retrieves an image from the cache if it exists.
    pub fn get(&mut self, path: &Path) -> Option<DecodedImage> {
        let result = self.cache.get(path).cloned();
        if result.is_some() {
            log::debug!("Cache HIT: {}", path.display());
        } else {
            log::debug!("Cache MISS: {}", path.display());
        }
        result
    }

    /// Stores an image in the cache.
    pub fn put(&mut self, path: PathBuf, image: DecodedImage) {
        log::debug!(
            "Cache PUT: {} ({}x{})",
            path.display(),
            image.width,
            image.height
        );
        self.cache.put(path, image);
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.cache.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(width: u32, height: u32) -> DecodedImage {
        DecodedImage::new(vec![0; (width * height * 4) as usize], width, height)
    }

    #[test]
    fn returns_stored_image() {
        let mut cache = ImageCache::new(2);
        cache.put(PathBuf::from("/a.png"), image(2, 3));

        let cached = cache.get(Path::new("/a.png")).expect("image should be cached");
        assert_eq!((cached.width, cached.height), (2, 3));
        assert!(cache.get(Path::new("/b.png")).is_none());
    }

    #[test]
    fn evicts_least_recently_used() {
        let mut cache = ImageCache::new(2);
        cache.put(PathBuf::from("/a.png"), image(1, 1));
        cache.put(PathBuf::from("/b.png"), image(1, 1));
        cache.get(Path::new("/a.png"));
        cache.put(PathBuf::from("/c.png"), image(1, 1));

        assert_eq!(cache.len(), 2);
        assert!(cache.get(Path::new("/a.png")).is_some());
        assert!(cache.get(Path::new("/b.png")).is_none());
    }

    #[test]
    fn zero_capacity_still_holds_one_image() {
        let mut cache = ImageCache::new(0);
        cache.put(PathBuf::from("/a.png"), image(1, 1));
        assert_eq!(cache.len(), 1);
    }
}
