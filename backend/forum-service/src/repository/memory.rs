//! Process-local content store
//!
//! Backs tests and single-node deployments. Posts live in a `DashMap`; each
//! entry remembers its insertion sequence so `get_all` can return creation
//! order without relying on timestamp resolution.

use crate::domain::{Post, PostId, VoteTally};
use crate::error::{CollaboratorError, CollaboratorResult};
use crate::repository::ContentStore;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

#[derive(Debug, Clone)]
struct StoredPost {
    seq: u64,
    post: Post,
}

#[derive(Default)]
pub struct InMemoryContentStore {
    posts: DashMap<PostId, StoredPost>,
    next_seq: AtomicU64,
}

impl InMemoryContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

#[async_trait::async_trait]
impl ContentStore for InMemoryContentStore {
    async fn get_by_id(&self, id: PostId) -> CollaboratorResult<Option<Post>> {
        Ok(self.posts.get(&id).map(|entry| entry.post.clone()))
    }

    async fn get_all(&self) -> CollaboratorResult<Vec<Post>> {
        let mut originals: Vec<StoredPost> = self
            .posts
            .iter()
            .filter(|entry| entry.post.is_original())
            .map(|entry| entry.value().clone())
            .collect();
        originals.sort_by_key(|stored| stored.seq);

        Ok(originals.into_iter().map(|stored| stored.post).collect())
    }

    async fn save(&self, post: &Post) -> CollaboratorResult<()> {
        self.posts
            .entry(post.id)
            .and_modify(|stored| stored.post = post.clone())
            .or_insert_with(|| {
                let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
                debug!(post_id = %post.id, seq, "Stored new post");
                StoredPost {
                    seq,
                    post: post.clone(),
                }
            });
        Ok(())
    }

    async fn save_vote(&self, id: PostId, upvotes: u64, downvotes: u64) -> CollaboratorResult<()> {
        let mut entry = self
            .posts
            .get_mut(&id)
            .ok_or_else(|| CollaboratorError::Store(format!("no post with id {}", id)))?;
        entry.post.votes = VoteTally::new(upvotes, downvotes);
        Ok(())
    }
}
