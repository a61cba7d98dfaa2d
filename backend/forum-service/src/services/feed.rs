use crate::domain::{Post, PostId};
use crate::error::ForumResult;
use crate::repository::ContentStore;
use crate::services::{rank_feed, reference_preview, search};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, instrument, warn};

/// A ranked post plus the preview of the post it references, if any
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedEntry {
    pub post: Post,
    pub score: i64,
    pub reference_preview: Option<String>,
}

pub struct FeedService {
    store: Arc<dyn ContentStore>,
}

impl FeedService {
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self { store }
    }

    /// All original posts, highest net score first
    #[instrument(skip(self))]
    pub async fn browse(&self) -> ForumResult<Vec<FeedEntry>> {
        let start = Instant::now();
        let posts = self.store.get_all().await?;
        let entries = self.decorate(rank_feed(posts)).await?;

        debug!(
            count = entries.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Feed ranked"
        );
        Ok(entries)
    }

    /// Original posts whose title contains `keyword`, ranked like the feed
    #[instrument(skip(self))]
    pub async fn search(&self, keyword: &str) -> ForumResult<Vec<FeedEntry>> {
        let posts = self.store.get_all().await?;
        let matches = rank_feed(search(posts, keyword));

        debug!(count = matches.len(), "Search completed");
        self.decorate(matches).await
    }

    async fn decorate(&self, posts: Vec<Post>) -> ForumResult<Vec<FeedEntry>> {
        let mut entries = Vec::with_capacity(posts.len());
        for post in posts {
            let reference_preview = match post.referenced_post() {
                Some(referenced_id) => self.preview(post.id, referenced_id).await?,
                None => None,
            };
            entries.push(FeedEntry {
                score: post.score(),
                post,
                reference_preview,
            });
        }
        Ok(entries)
    }

    async fn preview(&self, post_id: PostId, referenced_id: PostId) -> ForumResult<Option<String>> {
        match self.store.get_by_id(referenced_id).await? {
            Some(referenced) => Ok(Some(reference_preview(&referenced))),
            None => {
                warn!(post_id = %post_id, referenced = %referenced_id, "Referenced post missing");
                Ok(None)
            }
        }
    }
}
