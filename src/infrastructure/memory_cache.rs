use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::domain::filter::CacheKey;
use crate::domain::order::CachedPage;
use crate::domain::ports::ListCache;

/// Process-local list cache. Clones share the same entries.
///
/// Pages are stored behind `Arc` and `set` swaps the whole pointer, so a
/// reader holding a page never sees it change underneath.
#[derive(Clone, Default)]
pub struct InMemoryListCache {
    pages: Arc<RwLock<HashMap<CacheKey, Arc<CachedPage>>>>,
}

impl InMemoryListCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.pages.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, key: &CacheKey) -> bool {
        self.pages
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(key)
    }
}

impl ListCache for InMemoryListCache {
    fn get(&self, key: &CacheKey) -> Option<Arc<CachedPage>> {
        self.pages
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: CacheKey, page: CachedPage) -> Arc<CachedPage> {
        let page = Arc::new(page);
        self.pages
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, Arc::clone(&page));
        page
    }

    fn update<F>(&self, key: &CacheKey, f: F) -> bool
    where
        F: FnOnce(&CachedPage) -> CachedPage,
    {
        let mut pages = self.pages.write().unwrap_or_else(PoisonError::into_inner);
        let Some(entry) = pages.get_mut(key) else {
            return false;
        };
        let next = f(entry);
        *entry = Arc::new(next);
        true
    }
}
