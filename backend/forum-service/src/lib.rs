/// Forum Service Library
///
/// Content and ranking core of the discussion forum: the post hierarchy,
/// vote tallies, the ranked feed, threaded replies and cached translations.
///
/// # Modules
///
/// - `domain`: Post variants, vote tallies and translation cache entries
/// - `repository`: Content store trait and the in-memory store
/// - `cache`: Translation cache trait, key schema and in-memory cache
/// - `providers`: Translation provider trait and the HTTP provider
/// - `services`: Votes, replies, feed ranking, search and translation
/// - `state`: Service wiring
/// - `error`: Error types
/// - `config`: Configuration management
/// - `telemetry`: Tracing setup
/// - `metrics`: Prometheus collectors
pub mod cache;
pub mod config;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod providers;
pub mod repository;
pub mod services;
pub mod state;
pub mod telemetry;

pub use config::Config;
pub use domain::{Post, PostId, PostKind, TranslationCacheEntry, VoteTally};
pub use error::{CollaboratorError, ForumError, ForumResult};
pub use state::AppState;
