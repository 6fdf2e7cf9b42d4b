//! Authorization flow handlers

use std::collections::HashMap;

use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Extension;
use tracing::{error, warn};

use super::error::error_response;
use super::session::CurrentSession;
use crate::context::AppContext;

/// `GET /auth/provider` - redirect the browser to the provider consent page
pub async fn begin(State(context): State<AppContext>) -> Response {
    match context.auth_flow.begin_authorization() {
        Ok(url) => found(&url),
        Err(err) => {
            error!(error = %err, "failed to build authorization URL");
            error_response(&err, context.config.server.expose_provider_errors)
        }
    }
}

/// `GET /auth/provider/callback` - complete the code exchange
///
/// Success stores the token bundle in the session and redirects to `/`. A
/// provider `error` parameter or a missing `code` is a 400; a failed
/// exchange is a 500. Failures answer in plain text and leave the session
/// without a bundle.
pub async fn callback(
    State(context): State<AppContext>,
    Extension(session): Extension<CurrentSession>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if let Some(denial) = params.get("error") {
        warn!(error = %denial, "provider denied the authorization request");
        return (StatusCode::BAD_REQUEST, "Error during authentication.").into_response();
    }

    let Some(code) = params.get("code") else {
        return (StatusCode::BAD_REQUEST, "Missing authorization code.").into_response();
    };

    match context.auth_flow.complete_authorization(&session.id, code).await {
        Ok(()) => found("/"),
        Err(err) => {
            error!(error = %err, session_id = %session.id, "authorization code exchange failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "Error during authentication.").into_response()
        }
    }
}

// axum's Redirect helpers emit 303/307; the provider handoff uses a plain
// 302 Found.
fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}
