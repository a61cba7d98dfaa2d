use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Post identifier. Assigned once at creation and never reused.
pub type PostId = Uuid;

/// Upvote/downvote pair for a single post
///
/// `downvotes <= upvotes` holds for every tally produced by the vote service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteTally {
    pub upvotes: u64,
    pub downvotes: u64,
}

impl VoteTally {
    pub fn new(upvotes: u64, downvotes: u64) -> Self {
        Self { upvotes, downvotes }
    }

    /// Net score used by the feed ranking, saturating at the `i64` bounds
    pub fn score(&self) -> i64 {
        let up = i64::try_from(self.upvotes).unwrap_or(i64::MAX);
        let down = i64::try_from(self.downvotes).unwrap_or(i64::MAX);
        up.saturating_sub(down)
    }

    /// Whether one more downvote keeps the net score at or above zero
    pub fn can_downvote(&self) -> bool {
        self.upvotes.saturating_sub(self.downvotes) >= 1
    }

    pub fn as_pair(&self) -> (u64, u64) {
        (self.upvotes, self.downvotes)
    }
}

/// Variant-specific part of a post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PostKind {
    /// Top-level post that opens a discussion
    Original {
        title: String,
        replies: Vec<PostId>,
        referenced_post: Option<PostId>,
    },
    /// Direct reply to an original post
    Reply {
        parent_id: PostId,
        thread_replies: Vec<PostId>,
    },
    /// Reply to a reply. `root_reply_id` is the reply that owns the thread;
    /// every thread post hangs off it no matter how deep the conversation goes.
    Thread {
        parent_id: PostId,
        root_reply_id: PostId,
    },
}

/// Forum post entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub creator_username: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub votes: VoteTally,
    #[serde(flatten)]
    pub kind: PostKind,
}

impl Post {
    fn new(creator_username: String, content: String, kind: PostKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            creator_username,
            content,
            created_at: Utc::now(),
            votes: VoteTally::default(),
            kind,
        }
    }

    pub fn new_original(title: String, content: String, creator_username: String) -> Self {
        Self::new(
            creator_username,
            content,
            PostKind::Original {
                title,
                replies: Vec::new(),
                referenced_post: None,
            },
        )
    }

    pub fn new_reply(parent_id: PostId, creator_username: String, content: String) -> Self {
        Self::new(
            creator_username,
            content,
            PostKind::Reply {
                parent_id,
                thread_replies: Vec::new(),
            },
        )
    }

    pub fn new_thread(
        parent_id: PostId,
        root_reply_id: PostId,
        creator_username: String,
        content: String,
    ) -> Self {
        Self::new(
            creator_username,
            content,
            PostKind::Thread {
                parent_id,
                root_reply_id,
            },
        )
    }

    pub fn is_original(&self) -> bool {
        matches!(self.kind, PostKind::Original { .. })
    }

    pub fn is_reply(&self) -> bool {
        matches!(self.kind, PostKind::Reply { .. })
    }

    pub fn is_thread(&self) -> bool {
        matches!(self.kind, PostKind::Thread { .. })
    }

    /// Title of an original post. Replies never carry one.
    pub fn title(&self) -> Option<&str> {
        match &self.kind {
            PostKind::Original { title, .. } => Some(title.as_str()),
            _ => None,
        }
    }

    /// Parent of a reply or thread post
    pub fn parent_id(&self) -> Option<PostId> {
        match &self.kind {
            PostKind::Original { .. } => None,
            PostKind::Reply { parent_id, .. } | PostKind::Thread { parent_id, .. } => {
                Some(*parent_id)
            }
        }
    }

    pub fn referenced_post(&self) -> Option<PostId> {
        match &self.kind {
            PostKind::Original {
                referenced_post, ..
            } => *referenced_post,
            _ => None,
        }
    }

    pub fn has_reference(&self) -> bool {
        self.referenced_post().is_some()
    }

    /// Direct replies of an original post, or thread replies of a reply
    pub fn children(&self) -> &[PostId] {
        match &self.kind {
            PostKind::Original { replies, .. } => replies.as_slice(),
            PostKind::Reply { thread_replies, .. } => thread_replies.as_slice(),
            PostKind::Thread { .. } => &[],
        }
    }

    pub fn score(&self) -> i64 {
        self.votes.score()
    }
}

/// Cached translation of a post's content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationCacheEntry {
    pub post_id: PostId,
    pub target_language: String,
    pub translated_text: String,
    pub cached_at: DateTime<Utc>,
}

impl TranslationCacheEntry {
    pub fn new(post_id: PostId, target_language: &str, translated_text: String) -> Self {
        Self {
            post_id,
            target_language: target_language.to_string(),
            translated_text,
            cached_at: Utc::now(),
        }
    }
}
