use crate::domain::Post;

/// Keep posts whose title contains `keyword`, ignoring case.
///
/// An empty or blank keyword keeps every post. Posts without a title
/// (replies) can only match that blank keyword. Input order is preserved.
pub fn search(posts: Vec<Post>, keyword: &str) -> Vec<Post> {
    if keyword.trim().is_empty() {
        return posts;
    }

    let needle = keyword.to_lowercase();
    posts
        .into_iter()
        .filter(|post| {
            post.title()
                .map(|title| title.to_lowercase().contains(&needle))
                .unwrap_or(false)
        })
        .collect()
}
