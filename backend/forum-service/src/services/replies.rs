/// Reply service - attaches replies and thread replies to their parents
use crate::domain::{Post, PostId, PostKind};
use crate::error::{ForumError, ForumResult};
use crate::metrics::REPLIES_TOTAL;
use crate::repository::ContentStore;
use crate::services::{fetch_post, locks::PostLocks};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// An original post with its replies materialized, in insertion order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadView {
    pub post: Post,
    pub replies: Vec<ReplyView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyView {
    pub reply: Post,
    pub thread_replies: Vec<Post>,
}

/// Nesting is capped at three levels: original → reply → thread.
/// Replying to a thread post creates another thread post under the same
/// top-level reply instead of a fourth level.
pub struct ReplyService {
    store: Arc<dyn ContentStore>,
    locks: PostLocks,
}

impl ReplyService {
    pub fn new(store: Arc<dyn ContentStore>, locks: PostLocks) -> Self {
        Self { store, locks }
    }

    /// Reply to `parent_id` as `username`.
    ///
    /// Returns a `Reply` when the parent is an original post and a `Thread`
    /// otherwise.
    #[instrument(skip(self, content))]
    pub async fn reply(
        &self,
        parent_id: PostId,
        username: &str,
        content: &str,
    ) -> ForumResult<Post> {
        if content.trim().is_empty() {
            return Err(ForumError::EmptyContent);
        }

        let parent = fetch_post(self.store.as_ref(), parent_id).await?;

        let (post, anchor_id) = match &parent.kind {
            PostKind::Original { .. } => (
                Post::new_reply(parent_id, username.to_string(), content.to_string()),
                parent_id,
            ),
            PostKind::Reply { .. } => (
                Post::new_thread(
                    parent_id,
                    parent_id,
                    username.to_string(),
                    content.to_string(),
                ),
                parent_id,
            ),
            PostKind::Thread { root_reply_id, .. } => (
                Post::new_thread(
                    parent_id,
                    *root_reply_id,
                    username.to_string(),
                    content.to_string(),
                ),
                *root_reply_id,
            ),
        };

        self.attach(anchor_id, &post).await?;

        let kind = if post.is_reply() { "reply" } else { "thread" };
        REPLIES_TOTAL.with_label_values(&[kind]).inc();
        info!(post_id = %post.id, anchor_id = %anchor_id, kind, "Reply attached");

        Ok(post)
    }

    /// Save `post` and append its id to the child list of `anchor_id`
    async fn attach(&self, anchor_id: PostId, post: &Post) -> ForumResult<()> {
        let _guard = self.locks.acquire(anchor_id).await;

        // Re-read under the lock so concurrent appends are not lost
        let mut anchor = fetch_post(self.store.as_ref(), anchor_id).await?;

        match &mut anchor.kind {
            PostKind::Original { replies, .. } => replies.push(post.id),
            PostKind::Reply { thread_replies, .. } => thread_replies.push(post.id),
            PostKind::Thread { .. } => {
                return Err(ForumError::InvalidTarget(format!(
                    "thread post {} cannot own replies",
                    anchor_id
                )))
            }
        }

        // The child must exist before the parent lists it
        self.store.save(post).await?;
        self.store.save(&anchor).await?;

        debug!(anchor_id = %anchor_id, children = anchor.children().len(), "Parent updated");
        Ok(())
    }

    /// Materialize an original post's replies and their thread replies
    #[instrument(skip(self))]
    pub async fn thread(&self, post_id: PostId) -> ForumResult<ThreadView> {
        let post = fetch_post(self.store.as_ref(), post_id).await?;
        if !post.is_original() {
            return Err(ForumError::InvalidTarget(format!(
                "post {} is not an original post",
                post_id
            )));
        }

        let mut replies = Vec::with_capacity(post.children().len());
        for reply in self.store.get_many(post.children()).await? {
            let thread_replies = self.store.get_many(reply.children()).await?;
            replies.push(ReplyView {
                reply,
                thread_replies,
            });
        }

        Ok(ThreadView { post, replies })
    }
}
