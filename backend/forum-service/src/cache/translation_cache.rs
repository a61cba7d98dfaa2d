use crate::cache::{CacheKey, TranslationCache};
use crate::domain::{PostId, TranslationCacheEntry};
use crate::error::CollaboratorResult;
use crate::metrics::TRANSLATION_CACHE_EVENTS;
use dashmap::DashMap;
use tracing::debug;

/// Process-local translation cache backed by a `DashMap`
#[derive(Default)]
pub struct InMemoryTranslationCache {
    store: DashMap<String, TranslationCacheEntry>,
}

impl InMemoryTranslationCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

#[async_trait::async_trait]
impl TranslationCache for InMemoryTranslationCache {
    async fn get(
        &self,
        post_id: PostId,
        target_language: &str,
    ) -> CollaboratorResult<Option<TranslationCacheEntry>> {
        let key = CacheKey::translation(post_id, target_language);

        match self.store.get(&key) {
            Some(entry) => {
                debug!(key = %key, "Cache hit");
                TRANSLATION_CACHE_EVENTS.with_label_values(&["hit"]).inc();
                Ok(Some(entry.clone()))
            }
            None => {
                debug!(key = %key, "Cache miss");
                TRANSLATION_CACHE_EVENTS.with_label_values(&["miss"]).inc();
                Ok(None)
            }
        }
    }

    async fn put(&self, entry: TranslationCacheEntry) -> CollaboratorResult<()> {
        let key = CacheKey::translation(entry.post_id, &entry.target_language);
        debug!(key = %key, "Cache set");
        self.store.insert(key, entry);
        TRANSLATION_CACHE_EVENTS.with_label_values(&["write"]).inc();
        Ok(())
    }

    async fn invalidate_post(&self, post_id: PostId) -> CollaboratorResult<usize> {
        let prefix = CacheKey::translation_prefix(post_id);
        let mut removed = 0usize;
        self.store.retain(|key, _| {
            let keep = !key.starts_with(&prefix);
            if !keep {
                removed += 1;
            }
            keep
        });

        if removed > 0 {
            debug!(post_id = %post_id, removed, "Cache invalidated");
            TRANSLATION_CACHE_EVENTS
                .with_label_values(&["invalidate"])
                .inc_by(removed as u64);
        }
        Ok(removed)
    }
}
