//! Prometheus collectors for forum-service.

use lazy_static::lazy_static;
use prometheus::{register_int_counter_vec, Encoder, IntCounterVec, TextEncoder};

lazy_static! {
    /// Votes processed, segmented by direction (up/down) and outcome (applied/floor).
    pub static ref VOTES_TOTAL: IntCounterVec = register_int_counter_vec!(
        "forum_votes_total",
        "Votes processed segmented by direction and outcome",
        &["direction", "outcome"]
    )
    .expect("failed to register forum_votes_total");

    /// Replies attached, segmented by created kind (reply/thread).
    pub static ref REPLIES_TOTAL: IntCounterVec = register_int_counter_vec!(
        "forum_replies_total",
        "Replies attached segmented by created post kind",
        &["kind"]
    )
    .expect("failed to register forum_replies_total");

    /// Translation cache events (hit/miss/write/invalidate).
    pub static ref TRANSLATION_CACHE_EVENTS: IntCounterVec = register_int_counter_vec!(
        "forum_translation_cache_events_total",
        "Translation cache events segmented by event",
        &["event"]
    )
    .expect("failed to register forum_translation_cache_events_total");

    /// Translation provider calls (success/error).
    pub static ref TRANSLATION_PROVIDER_CALLS: IntCounterVec = register_int_counter_vec!(
        "forum_translation_provider_calls_total",
        "Translation provider calls segmented by result",
        &["result"]
    )
    .expect("failed to register forum_translation_provider_calls_total");
}

/// Render every registered collector in the Prometheus text format.
pub fn render() -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();

    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;

    String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_includes_forum_collectors() {
        VOTES_TOTAL.with_label_values(&["up", "applied"]).inc();

        let text = render().unwrap();
        assert!(text.contains("forum_votes_total"));
    }
}
