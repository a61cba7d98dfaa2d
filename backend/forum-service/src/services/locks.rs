use crate::domain::PostId;
use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// Per-post write locks
///
/// Every read-modify-write of a post (vote, edit, reply append) holds the
/// post's lock for the whole sequence so the check-then-act is atomic.
/// Distinct posts never contend.
#[derive(Clone, Default)]
pub struct PostLocks {
    locks: Arc<DashMap<PostId, Arc<Mutex<()>>>>,
}

impl PostLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive access to a post
    pub async fn acquire(&self, post_id: PostId) -> OwnedMutexGuard<()> {
        // Clone the Arc out so the DashMap shard guard is released before awaiting
        let lock = self
            .locks
            .entry(post_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        lock.lock_owned().await
    }

    pub fn len(&self) -> usize {
        self.locks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locks.is_empty()
    }
}
