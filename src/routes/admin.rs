//! Admin kill switch.
//!
//! `POST /api/v1/admin/kill` terminates the process on purpose, with a
//! non-zero exit status, so an external supervisor's restart-on-crash path
//! can be exercised end to end. Authorization is a single shared secret in
//! the `x-api-key` header, compared byte-for-byte against the secret
//! injected at startup.

use axum::{extract::State, http::HeaderMap, Json};
use serde::Serialize;
use tracing::instrument;

use crate::error::AdminError;
use crate::state::AppState;

/// Header carrying the caller's copy of the admin secret.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Acknowledgement body for an authorized kill request.
#[derive(Debug, Serialize)]
pub struct KillAck {
    pub message: &'static str,
}

/// Kill handler.
///
/// The handler only validates and signals; the exit itself happens in the
/// supervisor task after this response has gone out. See [`crate::shutdown`].
#[instrument(name = "admin::kill", skip(state, headers))]
pub async fn kill(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<KillAck>, AdminError> {
    let expected = state
        .config
        .admin
        .api_key
        .as_deref()
        .ok_or_else(|| {
            tracing::warn!("Kill request rejected, no admin secret configured");
            AdminError::NotConfigured
        })?;

    let provided = headers
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok());

    if provided != Some(expected) {
        tracing::warn!(
            key_present = provided.is_some(),
            "Kill request rejected, bad or missing api key"
        );
        return Err(AdminError::Unauthorized);
    }

    state.shutdown.request_terminate();

    Ok(Json(KillAck {
        message: "Server will shut down now for test purposes",
    }))
}
