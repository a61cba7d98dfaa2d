pub mod models;

pub use models::{Post, PostId, PostKind, TranslationCacheEntry, VoteTally};
