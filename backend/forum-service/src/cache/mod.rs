//! Translation caching layer
//!
//! Post-scoped translations are written once per `(post_id, language)` and
//! overwritten on re-insert. Entries live for the lifetime of the process;
//! there is no TTL.

mod keys;
pub mod translation_cache;

pub use keys::{CacheKey, CACHE_VERSION};
pub use translation_cache::InMemoryTranslationCache;

use crate::domain::{PostId, TranslationCacheEntry};
use crate::error::CollaboratorResult;

#[async_trait::async_trait]
pub trait TranslationCache: Send + Sync {
    /// Look up a cached translation
    async fn get(
        &self,
        post_id: PostId,
        target_language: &str,
    ) -> CollaboratorResult<Option<TranslationCacheEntry>>;

    /// Insert or overwrite a translation
    async fn put(&self, entry: TranslationCacheEntry) -> CollaboratorResult<()>;

    /// Drop every cached translation of a post, returning how many were removed
    async fn invalidate_post(&self, post_id: PostId) -> CollaboratorResult<usize>;
}
