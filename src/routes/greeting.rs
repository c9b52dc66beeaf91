//! Greeting handlers.

use chrono::{SecondsFormat, Utc};
use tracing::instrument;

/// Fixed response body for the hello endpoint.
///
/// Kept literal on purpose: the endpoint has never been time-of-day aware
/// and callers already match on this exact string.
pub const HELLO_BODY: &str = "Good Afternoon";

/// Root greeting: `Hello World` plus the request's wall-clock UTC time.
#[instrument(name = "greeting::index")]
pub async fn index() -> String {
    format!(
        "Hello World {}",
        Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
    )
}

/// Versioned hello endpoint, unconditionally afternoon.
#[instrument(name = "greeting::hello")]
pub async fn hello() -> &'static str {
    HELLO_BODY
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[tokio::test]
    async fn index_embeds_a_parseable_utc_timestamp() {
        let body = index().await;
        let stamp = body.strip_prefix("Hello World ").unwrap();
        let parsed = DateTime::parse_from_rfc3339(stamp).unwrap();

        let delta = (Utc::now() - parsed.with_timezone(&Utc)).num_seconds().abs();
        assert!(delta < 5, "timestamp drifted {delta}s from now");
    }

    #[tokio::test]
    async fn hello_is_always_afternoon() {
        assert_eq!(hello().await, "Good Afternoon");
    }
}
