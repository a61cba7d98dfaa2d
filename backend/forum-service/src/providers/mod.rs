pub mod libretranslate;

pub use libretranslate::LibreTranslateProvider;

use crate::error::CollaboratorResult;

/// External machine-translation backend.
///
/// Failures are surfaced to the caller as-is; the core never retries.
#[async_trait::async_trait]
pub trait TranslationProvider: Send + Sync {
    /// Translate `text` into `target_language` (ISO 639-1 code)
    async fn translate(&self, text: &str, target_language: &str) -> CollaboratorResult<String>;

    /// Get provider name
    fn name(&self) -> &'static str;
}
