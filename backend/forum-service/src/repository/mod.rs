pub mod memory;

pub use memory::InMemoryContentStore;

use crate::domain::{Post, PostId};
use crate::error::CollaboratorResult;

/// Key-addressable post storage.
///
/// The store is the single source of truth: services always re-read after a
/// write instead of keeping their own copy of a post.
#[async_trait::async_trait]
pub trait ContentStore: Send + Sync {
    /// Get a post of any kind by id
    async fn get_by_id(&self, id: PostId) -> CollaboratorResult<Option<Post>>;

    /// All original posts, in creation order
    async fn get_all(&self) -> CollaboratorResult<Vec<Post>>;

    /// Insert or replace a post
    async fn save(&self, post: &Post) -> CollaboratorResult<()>;

    /// Persist new vote tallies for an existing post
    async fn save_vote(&self, id: PostId, upvotes: u64, downvotes: u64) -> CollaboratorResult<()>;

    /// Resolve several posts at once, skipping ids that do not resolve
    async fn get_many(&self, ids: &[PostId]) -> CollaboratorResult<Vec<Post>> {
        let mut posts = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some(post) = self.get_by_id(*id).await? {
                posts.push(post);
            }
        }
        Ok(posts)
    }
}
