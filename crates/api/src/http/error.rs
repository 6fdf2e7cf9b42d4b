//! Error-to-response mapping for the JSON endpoints

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use meetlink_domain::constants::{SANITIZED_PROVIDER_ERROR, UNAUTHENTICATED_MESSAGE};
use meetlink_domain::MeetLinkError;
use serde::Serialize;

/// JSON error body: `{"error": <message>}`
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Map a domain error to its HTTP response.
///
/// 401 is reserved for the missing-bundle precondition. Provider failures,
/// including a provider-side 401 on an expired token, map to 500 with the
/// detail replaced by a fixed message unless `expose_provider_errors` is
/// set. Callers log the full detail before mapping.
pub fn error_response(error: &MeetLinkError, expose_provider_errors: bool) -> Response {
    let (status, message) = status_and_message(error, expose_provider_errors);
    (status, Json(ErrorBody { error: message })).into_response()
}

fn status_and_message(
    error: &MeetLinkError,
    expose_provider_errors: bool,
) -> (StatusCode, String) {
    match error {
        MeetLinkError::Auth(_) => (StatusCode::UNAUTHORIZED, UNAUTHENTICATED_MESSAGE.to_string()),
        MeetLinkError::InvalidInput(detail) => (StatusCode::BAD_REQUEST, detail.clone()),
        MeetLinkError::Provider(detail) if expose_provider_errors => {
            (StatusCode::INTERNAL_SERVER_ERROR, detail.clone())
        }
        MeetLinkError::Provider(_) => {
            (StatusCode::INTERNAL_SERVER_ERROR, SANITIZED_PROVIDER_ERROR.to_string())
        }
        other => (StatusCode::INTERNAL_SERVER_ERROR, other.to_string()),
    }
}
