use crate::domain::{Post, PostKind};
use std::cmp::Reverse;

/// Characters of content kept in a reference preview
pub const PREVIEW_CHARS: usize = 50;

const ELLIPSIS: &str = "...";

/// Order posts by net score (`upvotes - downvotes`), highest first.
///
/// The sort is stable: posts with equal scores keep their input order and
/// no secondary key such as recency is applied.
pub fn rank_feed(mut posts: Vec<Post>) -> Vec<Post> {
    posts.sort_by_key(|post| Reverse(post.score()));
    posts
}

/// Preview text shown under a post that references `referenced`.
///
/// Original posts preview as their title. Anything else previews as the
/// first [`PREVIEW_CHARS`] characters of its content, followed by `...`
/// when the content is longer than that.
pub fn reference_preview(referenced: &Post) -> String {
    match &referenced.kind {
        PostKind::Original { title, .. } => title.clone(),
        PostKind::Reply { .. } | PostKind::Thread { .. } => truncate(&referenced.content),
    }
}

fn truncate(content: &str) -> String {
    match content.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}{}", &content[..cut], ELLIPSIS),
        None => content.to_string(),
    }
}
