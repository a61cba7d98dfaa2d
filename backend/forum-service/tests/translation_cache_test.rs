/// Translation cache flow against a mocked provider
///
/// Test Coverage:
/// - Cache check happens before the provider call
/// - Provider is called exactly once per (post, language)
/// - Edits through the post service invalidate cached translations
/// - Provider errors are surfaced and leave the cache empty
use forum_service::cache::{InMemoryTranslationCache, TranslationCache};
use forum_service::error::{CollaboratorError, CollaboratorResult};
use forum_service::providers::TranslationProvider;
use forum_service::repository::InMemoryContentStore;
use forum_service::{AppState, ForumError};
use mockall::mock;
use mockall::predicate::eq;
use std::sync::Arc;
use tokio_test::{assert_err, assert_ok};

mock! {
    pub Provider {}

    #[async_trait::async_trait]
    impl TranslationProvider for Provider {
        async fn translate(&self, text: &str, target_language: &str) -> CollaboratorResult<String>;
        fn name(&self) -> &'static str;
    }
}

fn state(provider: MockProvider) -> (AppState, Arc<InMemoryTranslationCache>) {
    let cache = Arc::new(InMemoryTranslationCache::new());
    let state = AppState::new(
        Arc::new(InMemoryContentStore::new()),
        Arc::new(provider),
        cache.clone(),
    );
    (state, cache)
}

#[tokio::test]
async fn test_provider_called_once_per_post_and_language() {
    let mut provider = MockProvider::new();
    provider
        .expect_translate()
        .with(eq("Hello"), eq("fr"))
        .times(1)
        .returning(|_, _| Ok("Bonjour".to_string()));
    provider.expect_name().return_const("mock");

    let (state, cache) = state(provider);
    let post = state
        .posts
        .create_original_post("T", "Hello", "alice")
        .await
        .unwrap();

    for _ in 0..3 {
        let translated = assert_ok!(state.translations.translate_post(post.id, "fr").await);
        assert_eq!(translated, "Bonjour");
    }

    let entry = cache.get(post.id, "fr").await.unwrap().unwrap();
    assert_eq!(entry.translated_text, "Bonjour");
    assert_eq!(entry.post_id, post.id);
}

#[tokio::test]
async fn test_edit_invalidates_and_retranslates() {
    let mut provider = MockProvider::new();
    provider
        .expect_translate()
        .with(eq("Hello"), eq("fr"))
        .times(1)
        .returning(|_, _| Ok("Bonjour".to_string()));
    provider
        .expect_translate()
        .with(eq("Goodbye"), eq("fr"))
        .times(1)
        .returning(|_, _| Ok("Au revoir".to_string()));
    provider.expect_name().return_const("mock");

    let (state, _) = state(provider);
    let post = state
        .posts
        .create_original_post("T", "Hello", "alice")
        .await
        .unwrap();

    let first = assert_ok!(state.translations.translate_post(post.id, "fr").await);
    assert_eq!(first, "Bonjour");
    state
        .posts
        .edit_text_as(post.id, "alice", "Goodbye")
        .await
        .unwrap();
    let second = assert_ok!(state.translations.translate_post(post.id, "fr").await);
    assert_eq!(second, "Au revoir");
}

#[tokio::test]
async fn test_adhoc_translation_bypasses_cache() {
    let mut provider = MockProvider::new();
    provider
        .expect_translate()
        .times(2)
        .returning(|text, lang| Ok(format!("{}:{}", lang, text)));
    provider.expect_name().return_const("mock");

    let (state, cache) = state(provider);

    assert_eq!(
        state.translations.translate("draft", "es").await.unwrap(),
        "es:draft"
    );
    assert_eq!(
        state.translations.translate("draft", "es").await.unwrap(),
        "es:draft"
    );
    assert!(cache.is_empty());
}

#[tokio::test]
async fn test_provider_error_surfaces() {
    let mut provider = MockProvider::new();
    provider
        .expect_translate()
        .times(1)
        .returning(|_, _| Err(CollaboratorError::Provider("unavailable".into())));
    provider.expect_name().return_const("mock");

    let (state, cache) = state(provider);
    let post = state
        .posts
        .create_original_post("T", "Hello", "alice")
        .await
        .unwrap();

    let err = assert_err!(state.translations.translate_post(post.id, "fr").await);

    assert!(matches!(err, ForumError::Collaborator(_)));
    assert!(!err.is_client_error());
    assert!(cache.is_empty());
}

#[tokio::test]
async fn test_blank_text_never_reaches_provider() {
    let mut provider = MockProvider::new();
    provider.expect_translate().never();

    let (state, _) = state(provider);

    let err = assert_err!(state.translations.translate("\t \n", "fr").await);
    assert!(matches!(err, ForumError::EmptyText));
}
