use crate::domain::{PostId, VoteTally};
use crate::error::ForumResult;
use crate::metrics::VOTES_TOTAL;
use crate::repository::ContentStore;
use crate::services::{fetch_post, locks::PostLocks};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Result of a vote request
///
/// A downvote that would push the net score below zero is not an error: it
/// leaves the tally untouched and reports `FloorReached`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum VoteOutcome {
    Applied(VoteTally),
    FloorReached(VoteTally),
}

impl VoteOutcome {
    /// Tally after the request, whether or not it changed anything
    pub fn tally(&self) -> VoteTally {
        match self {
            VoteOutcome::Applied(tally) | VoteOutcome::FloorReached(tally) => *tally,
        }
    }

    pub fn is_applied(&self) -> bool {
        matches!(self, VoteOutcome::Applied(_))
    }

    /// `(upvotes, downvotes)` after the request
    pub fn as_pair(&self) -> (u64, u64) {
        self.tally().as_pair()
    }
}

/// Vote engine. Upvotes are unrestricted; downvotes are capped by existing
/// positive sentiment so `downvotes <= upvotes` always holds.
///
/// Votes are not attributed to voters, so repeat votes are not detected.
pub struct VoteService {
    store: Arc<dyn ContentStore>,
    locks: PostLocks,
}

impl VoteService {
    pub fn new(store: Arc<dyn ContentStore>, locks: PostLocks) -> Self {
        Self { store, locks }
    }

    #[instrument(skip(self))]
    pub async fn apply_vote(&self, post_id: PostId, is_upvote: bool) -> ForumResult<VoteOutcome> {
        let _guard = self.locks.acquire(post_id).await;

        let post = fetch_post(self.store.as_ref(), post_id).await?;
        let current = post.votes;
        let direction = if is_upvote { "up" } else { "down" };

        let outcome = if is_upvote {
            VoteOutcome::Applied(VoteTally::new(current.upvotes + 1, current.downvotes))
        } else if current.can_downvote() {
            VoteOutcome::Applied(VoteTally::new(current.upvotes, current.downvotes + 1))
        } else {
            VoteOutcome::FloorReached(current)
        };

        if let VoteOutcome::Applied(tally) = outcome {
            self.store
                .save_vote(post_id, tally.upvotes, tally.downvotes)
                .await?;
            VOTES_TOTAL.with_label_values(&[direction, "applied"]).inc();
            debug!(
                post_id = %post_id,
                upvotes = tally.upvotes,
                downvotes = tally.downvotes,
                "Vote applied"
            );
        } else {
            VOTES_TOTAL.with_label_values(&[direction, "floor"]).inc();
            debug!(post_id = %post_id, "Downvote ignored: net score already at floor");
        }

        Ok(outcome)
    }

    pub async fn upvote(&self, post_id: PostId) -> ForumResult<VoteOutcome> {
        self.apply_vote(post_id, true).await
    }

    pub async fn downvote(&self, post_id: PostId) -> ForumResult<VoteOutcome> {
        self.apply_vote(post_id, false).await
    }
}
