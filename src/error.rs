//! Error types for the admin surface.
//!
//! The service has exactly two user-visible failure modes, both on the kill
//! endpoint: the server-side secret is not configured (500), or the caller's
//! secret is missing/wrong (401). Every other route is infallible.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum AdminError {
    /// No secret configured on the server; the endpoint is disabled.
    #[error("ADMIN_API_KEY is not configured on the server")]
    NotConfigured,

    /// Missing or mismatched `x-api-key` header.
    #[error("Unauthorized")]
    Unauthorized,
}

impl IntoResponse for AdminError {
    fn into_response(self) -> Response {
        let status = match self {
            AdminError::NotConfigured => StatusCode::INTERNAL_SERVER_ERROR,
            AdminError::Unauthorized => StatusCode::UNAUTHORIZED,
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_configured_maps_to_500() {
        let response = AdminError::NotConfigured.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn unauthorized_maps_to_401() {
        let response = AdminError::Unauthorized.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn error_messages_are_stable() {
        // Clients and the supervisor tooling match on these strings.
        assert_eq!(
            AdminError::NotConfigured.to_string(),
            "ADMIN_API_KEY is not configured on the server"
        );
        assert_eq!(AdminError::Unauthorized.to_string(), "Unauthorized");
    }
}
