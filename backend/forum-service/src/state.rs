use crate::cache::{InMemoryTranslationCache, TranslationCache};
use crate::config::Config;
use crate::error::CollaboratorResult;
use crate::providers::{LibreTranslateProvider, TranslationProvider};
use crate::repository::{ContentStore, InMemoryContentStore};
use crate::services::{
    FeedService, PostLocks, PostService, ReplyService, TranslationService, VoteService,
};
use std::sync::Arc;

/// Wires the forum services around one store, one provider and one cache.
///
/// All services share a single `PostLocks` table so votes, edits, reply
/// appends and translation cache writes on the same post are serialized
/// against each other.
pub struct AppState {
    pub posts: PostService,
    pub votes: VoteService,
    pub replies: ReplyService,
    pub feed: FeedService,
    pub translations: TranslationService,
}

impl AppState {
    pub fn new(
        store: Arc<dyn ContentStore>,
        provider: Arc<dyn TranslationProvider>,
        cache: Arc<dyn TranslationCache>,
    ) -> Self {
        let locks = PostLocks::new();

        Self {
            posts: PostService::new(store.clone(), locks.clone())
                .with_translation_cache(cache.clone()),
            votes: VoteService::new(store.clone(), locks.clone()),
            replies: ReplyService::new(store.clone(), locks.clone()),
            feed: FeedService::new(store.clone()),
            translations: TranslationService::new(store, provider, cache, locks),
        }
    }

    /// In-memory store and cache with the configured HTTP translation provider
    pub fn from_config(config: &Config) -> CollaboratorResult<Self> {
        let provider = LibreTranslateProvider::new(&config.translation)?;

        Ok(Self::new(
            Arc::new(InMemoryContentStore::new()),
            Arc::new(provider),
            Arc::new(InMemoryTranslationCache::new()),
        ))
    }
}
