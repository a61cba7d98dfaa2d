use crate::cache::{CacheKey, TranslationCache};
use crate::domain::{PostId, TranslationCacheEntry};
use crate::error::{ForumError, ForumResult};
use crate::metrics::TRANSLATION_PROVIDER_CALLS;
use crate::providers::TranslationProvider;
use crate::repository::ContentStore;
use crate::services::{fetch_post, locks::PostLocks};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// On-demand translation of ad-hoc text and stored posts.
///
/// Ad-hoc text (drafts, comments being typed) is never cached. Post
/// translations are cached per `(post_id, language)` and served from the
/// cache until the post is edited.
pub struct TranslationService {
    store: Arc<dyn ContentStore>,
    provider: Arc<dyn TranslationProvider>,
    cache: Arc<dyn TranslationCache>,
    locks: PostLocks,
}

impl TranslationService {
    pub fn new(
        store: Arc<dyn ContentStore>,
        provider: Arc<dyn TranslationProvider>,
        cache: Arc<dyn TranslationCache>,
        locks: PostLocks,
    ) -> Self {
        Self {
            store,
            provider,
            cache,
            locks,
        }
    }

    /// Translate text that is not tied to a stored post
    #[instrument(skip(self, text))]
    pub async fn translate(&self, text: &str, target_language: &str) -> ForumResult<String> {
        let target_language = normalize_target(target_language)?;
        if text.trim().is_empty() {
            return Err(ForumError::EmptyText);
        }

        self.call_provider(text, &target_language).await
    }

    /// Translate a stored post's content, reusing a cached result when present
    #[instrument(skip(self))]
    pub async fn translate_post(
        &self,
        post_id: PostId,
        target_language: &str,
    ) -> ForumResult<String> {
        let target_language = normalize_target(target_language)?;

        if let Some(entry) = self.cache.get(post_id, &target_language).await? {
            debug!(post_id = %post_id, "Serving cached translation");
            return Ok(entry.translated_text);
        }

        let post = fetch_post(self.store.as_ref(), post_id).await?;
        if post.content.trim().is_empty() {
            return Err(ForumError::EmptyText);
        }

        let translated = self.call_provider(&post.content, &target_language).await?;

        // Edits save and invalidate under the post lock, so the content seen
        // here is current until the guard drops.
        let _guard = self.locks.acquire(post_id).await;
        let current = fetch_post(self.store.as_ref(), post_id).await?;
        if current.content != post.content {
            debug!(post_id = %post_id, "Post edited during translation, skipping cache write");
            return Ok(translated);
        }

        self.cache
            .put(TranslationCacheEntry::new(
                post_id,
                &target_language,
                translated.clone(),
            ))
            .await?;

        Ok(translated)
    }

    /// Drop every cached translation of a post
    pub async fn invalidate_post(&self, post_id: PostId) -> ForumResult<usize> {
        Ok(self.cache.invalidate_post(post_id).await?)
    }

    async fn call_provider(&self, text: &str, target_language: &str) -> ForumResult<String> {
        match self.provider.translate(text, target_language).await {
            Ok(translated) => {
                TRANSLATION_PROVIDER_CALLS
                    .with_label_values(&["success"])
                    .inc();
                Ok(translated)
            }
            Err(e) => {
                TRANSLATION_PROVIDER_CALLS
                    .with_label_values(&["error"])
                    .inc();
                warn!(provider = self.provider.name(), error = %e, "Translation failed");
                Err(e.into())
            }
        }
    }
}

fn normalize_target(target_language: &str) -> ForumResult<String> {
    let normalized = CacheKey::normalize_language(target_language);
    if normalized.is_empty() {
        return Err(ForumError::InvalidTarget(
            "target language is required".to_string(),
        ));
    }
    Ok(normalized)
}
