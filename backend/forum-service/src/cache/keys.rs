//! Translation cache key schema
//!
//! Key format: v{VERSION}:translation:{post_id}:{language}

use crate::domain::PostId;

/// Cache schema version - increment when changing key formats
pub const CACHE_VERSION: u32 = 1;

/// Cache key builder
pub struct CacheKey;

impl CacheKey {
    /// Translation of one post into one language.
    /// Language codes are case-insensitive, so "EN" and "en" share an entry.
    pub fn translation(post_id: PostId, target_language: &str) -> String {
        format!(
            "v{}:translation:{}:{}",
            CACHE_VERSION,
            post_id,
            Self::normalize_language(target_language)
        )
    }

    /// Prefix shared by every translation of a post
    pub fn translation_prefix(post_id: PostId) -> String {
        format!("v{}:translation:{}:", CACHE_VERSION, post_id)
    }

    pub fn normalize_language(target_language: &str) -> String {
        target_language.trim().to_lowercase()
    }
}
