/// Post service - creation, edits and reference links of forum posts
use crate::cache::TranslationCache;
use crate::domain::{Post, PostId, PostKind};
use crate::error::{ForumError, ForumResult};
use crate::repository::ContentStore;
use crate::services::{fetch_post, locks::PostLocks};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

pub struct PostService {
    store: Arc<dyn ContentStore>,
    locks: PostLocks,
    translations: Option<Arc<dyn TranslationCache>>,
}

impl PostService {
    pub fn new(store: Arc<dyn ContentStore>, locks: PostLocks) -> Self {
        Self {
            store,
            locks,
            translations: None,
        }
    }

    /// Drop cached translations whenever a post's content changes
    pub fn with_translation_cache(mut self, cache: Arc<dyn TranslationCache>) -> Self {
        self.translations = Some(cache);
        self
    }

    /// Create a new top-level post with zero votes and no replies
    #[instrument(skip(self, title, content))]
    pub async fn create_original_post(
        &self,
        title: &str,
        content: &str,
        creator_username: &str,
    ) -> ForumResult<Post> {
        if title.trim().is_empty() || content.trim().is_empty() {
            return Err(ForumError::EmptyContent);
        }

        let post = Post::new_original(
            title.to_string(),
            content.to_string(),
            creator_username.to_string(),
        );
        self.store.save(&post).await?;

        info!(post_id = %post.id, "Original post created");
        Ok(post)
    }

    /// Get a post by ID
    pub async fn get_post(&self, post_id: PostId) -> ForumResult<Post> {
        fetch_post(self.store.as_ref(), post_id).await
    }

    /// Replace a post's content.
    ///
    /// No ownership check happens here; use [`PostService::edit_text_as`]
    /// when the acting user is known.
    #[instrument(skip(self, new_text))]
    pub async fn edit_text(&self, post_id: PostId, new_text: &str) -> ForumResult<Post> {
        let _guard = self.locks.acquire(post_id).await;

        let mut post = fetch_post(self.store.as_ref(), post_id).await?;
        post.content = new_text.to_string();
        self.store.save(&post).await?;
        self.invalidate_translations(post_id).await;

        debug!(post_id = %post_id, "Post content edited");
        Ok(post)
    }

    /// Replace a post's content on behalf of `acting_username`, who must be its creator
    #[instrument(skip(self, new_text))]
    pub async fn edit_text_as(
        &self,
        post_id: PostId,
        acting_username: &str,
        new_text: &str,
    ) -> ForumResult<Post> {
        if new_text.trim().is_empty() {
            return Err(ForumError::EmptyContent);
        }

        let post = fetch_post(self.store.as_ref(), post_id).await?;
        if post.creator_username != acting_username {
            warn!(post_id = %post_id, "Edit rejected: user is not the creator");
            return Err(ForumError::NotCreator {
                post_id,
                username: acting_username.to_string(),
            });
        }

        self.edit_text(post_id, new_text).await
    }

    /// Point an original post at another post it quotes or links to
    #[instrument(skip(self))]
    pub async fn attach_reference(
        &self,
        post_id: PostId,
        referenced_post_id: PostId,
    ) -> ForumResult<Post> {
        if post_id == referenced_post_id {
            return Err(ForumError::InvalidTarget(
                "a post cannot reference itself".to_string(),
            ));
        }

        let _guard = self.locks.acquire(post_id).await;

        let mut post = fetch_post(self.store.as_ref(), post_id).await?;
        if self.store.get_by_id(referenced_post_id).await?.is_none() {
            return Err(ForumError::ReferenceNotFound(referenced_post_id));
        }

        match &mut post.kind {
            PostKind::Original {
                referenced_post, ..
            } => *referenced_post = Some(referenced_post_id),
            _ => {
                return Err(ForumError::InvalidTarget(
                    "only original posts can reference another post".to_string(),
                ))
            }
        }
        self.store.save(&post).await?;

        debug!(post_id = %post_id, referenced = %referenced_post_id, "Reference attached");
        Ok(post)
    }

    async fn invalidate_translations(&self, post_id: PostId) {
        if let Some(cache) = &self.translations {
            // A failed invalidation must not undo a successful edit
            if let Err(e) = cache.invalidate_post(post_id).await {
                warn!(post_id = %post_id, error = %e, "Failed to invalidate cached translations");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::InMemoryTranslationCache;
    use crate::domain::{TranslationCacheEntry, VoteTally};
    use crate::repository::InMemoryContentStore;
    use uuid::Uuid;

    fn service() -> (PostService, Arc<InMemoryContentStore>) {
        let store = Arc::new(InMemoryContentStore::new());
        (PostService::new(store.clone(), PostLocks::new()), store)
    }

    #[tokio::test]
    async fn test_create_original_post() {
        let (service, store) = service();

        let post = service
            .create_original_post("T", "Hello", "alice")
            .await
            .unwrap();

        assert_eq!(post.title(), Some("T"));
        assert_eq!(post.creator_username, "alice");
        assert_eq!(post.votes, VoteTally::default());
        assert!(post.children().is_empty());
        assert_eq!(store.get_by_id(post.id).await.unwrap(), Some(post));
    }

    #[tokio::test]
    async fn test_create_rejects_blank_fields() {
        let (service, _) = service();

        let result = service.create_original_post("  ", "Hello", "alice").await;
        assert!(matches!(result, Err(ForumError::EmptyContent)));

        let result = service.create_original_post("T", "\n\t", "alice").await;
        assert!(matches!(result, Err(ForumError::EmptyContent)));
    }

    #[tokio::test]
    async fn test_edit_text_replaces_content() {
        let (service, _) = service();
        let post = service
            .create_original_post("T", "Hello", "alice")
            .await
            .unwrap();

        let edited = service.edit_text(post.id, "Goodbye").await.unwrap();

        assert_eq!(edited.content, "Goodbye");
        assert_eq!(service.get_post(post.id).await.unwrap().content, "Goodbye");
        assert_eq!(edited.created_at, post.created_at);
    }

    #[tokio::test]
    async fn test_edit_text_as_requires_creator() {
        let (service, _) = service();
        let post = service
            .create_original_post("T", "Hello", "alice")
            .await
            .unwrap();

        let result = service.edit_text_as(post.id, "mallory", "pwned").await;
        assert!(matches!(result, Err(ForumError::NotCreator { .. })));

        let edited = service.edit_text_as(post.id, "alice", "Hi").await.unwrap();
        assert_eq!(edited.content, "Hi");
    }

    #[tokio::test]
    async fn test_edit_missing_post() {
        let (service, _) = service();
        let id = Uuid::new_v4();

        let result = service.edit_text(id, "x").await;
        assert!(matches!(result, Err(ForumError::ContentNotFound(missing)) if missing == id));
    }

    #[tokio::test]
    async fn test_edit_invalidates_cached_translations() {
        let store = Arc::new(InMemoryContentStore::new());
        let cache = Arc::new(InMemoryTranslationCache::new());
        let service =
            PostService::new(store, PostLocks::new()).with_translation_cache(cache.clone());
        let post = service
            .create_original_post("T", "Hello", "alice")
            .await
            .unwrap();
        cache
            .put(TranslationCacheEntry::new(post.id, "fr", "Bonjour".into()))
            .await
            .unwrap();

        service.edit_text(post.id, "Goodbye").await.unwrap();

        assert!(cache.get(post.id, "fr").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_attach_reference() {
        let (service, _) = service();
        let target = service
            .create_original_post("Target", "quoted", "bob")
            .await
            .unwrap();
        let post = service
            .create_original_post("T", "see above", "alice")
            .await
            .unwrap();

        let linked = service.attach_reference(post.id, target.id).await.unwrap();

        assert!(linked.has_reference());
        assert_eq!(linked.referenced_post(), Some(target.id));
    }

    #[tokio::test]
    async fn test_attach_reference_missing_target() {
        let (service, _) = service();
        let post = service
            .create_original_post("T", "Hello", "alice")
            .await
            .unwrap();
        let missing = Uuid::new_v4();

        let result = service.attach_reference(post.id, missing).await;
        assert!(matches!(result, Err(ForumError::ReferenceNotFound(id)) if id == missing));
        assert!(!service.get_post(post.id).await.unwrap().has_reference());
    }

    #[tokio::test]
    async fn test_attach_reference_rejects_self_and_replies() {
        let (service, store) = service();
        let post = service
            .create_original_post("T", "Hello", "alice")
            .await
            .unwrap();
        let reply = Post::new_reply(post.id, "bob".into(), "hi".into());
        store.save(&reply).await.unwrap();

        let result = service.attach_reference(post.id, post.id).await;
        assert!(matches!(result, Err(ForumError::InvalidTarget(_))));

        let result = service.attach_reference(reply.id, post.id).await;
        assert!(matches!(result, Err(ForumError::InvalidTarget(_))));
    }
}
