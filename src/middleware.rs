//! Request ID middleware for correlating logs with requests.
//!
//! Every request gets a UUID v4 and a tracing span covering its whole
//! lifecycle, so the startup line is not the only thing an operator sees
//! when the kill switch fires.

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use tracing::Instrument;
use uuid::Uuid;

/// Request ID, stored in request extensions.
///
/// No handler consumes this yet; it is the hook for future surfaces that
/// want to echo the ID back to clients (e.g. an `x-request-id` header).
#[derive(Clone, Debug)]
pub struct RequestId(pub Uuid);

/// Outermost middleware layer: tags the request with an ID and logs its
/// completion with status and latency inside the request span.
pub async fn request_id_layer(mut request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4();
    let span = tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %request.method(),
        path = %request.uri().path(),
    );
    request.extensions_mut().insert(RequestId(request_id));

    let start = Instant::now();
    async move {
        let response = next.run(request).await;
        tracing::info!(
            status = response.status().as_u16(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Request completed"
        );
        response
    }
    .instrument(span)
    .await
}
