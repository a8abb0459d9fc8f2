//! In-process cache of rendered pages, keyed by route path.
//!
//! Entries live until the revalidation webhook (or a restart) invalidates
//! them. Single-node; rendering is cheap enough that a miss just renders.

use std::collections::HashMap;
use std::sync::RwLock;

#[derive(Default)]
pub struct PageCache {
    entries: RwLock<HashMap<String, String>>,
}

impl PageCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, path: &str) -> Option<String> {
        self.entries.read().unwrap().get(path).cloned()
    }

    pub fn insert(&self, path: impl Into<String>, body: impl Into<String>) {
        self.entries.write().unwrap().insert(path.into(), body.into());
    }

    /// Drop one cached path. A no-op when the path is not cached.
    pub fn invalidate(&self, path: &str) {
        if self.entries.write().unwrap().remove(path).is_some() {
            tracing::info!(path, "invalidated cached page");
        }
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().unwrap().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_get_roundtrip() {
        let cache = PageCache::new();
        assert!(cache.get("/").is_none());
        cache.insert("/", "<html>home</html>");
        assert_eq!(cache.get("/").as_deref(), Some("<html>home</html>"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn invalidate_removes_entry() {
        let cache = PageCache::new();
        cache.insert("/blog/a-post", "body");
        cache.invalidate("/blog/a-post");
        assert!(cache.get("/blog/a-post").is_none());
        // invalidating again is harmless
        cache.invalidate("/blog/a-post");
        assert!(cache.is_empty());
    }
}
