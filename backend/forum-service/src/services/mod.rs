/// Business logic layer
pub mod feed;
pub mod locks;
pub mod posts;
pub mod ranking;
pub mod replies;
pub mod search;
pub mod translation;
pub mod votes;

pub use feed::{FeedEntry, FeedService};
pub use locks::PostLocks;
pub use posts::PostService;
pub use ranking::{rank_feed, reference_preview, PREVIEW_CHARS};
pub use replies::{ReplyService, ThreadView};
pub use search::search;
pub use translation::TranslationService;
pub use votes::{VoteOutcome, VoteService};

use crate::domain::{Post, PostId};
use crate::error::{ForumError, ForumResult};
use crate::repository::ContentStore;

/// Resolve a post or fail with `ContentNotFound`
pub(crate) async fn fetch_post(store: &dyn ContentStore, post_id: PostId) -> ForumResult<Post> {
    store
        .get_by_id(post_id)
        .await?
        .ok_or(ForumError::ContentNotFound(post_id))
}
