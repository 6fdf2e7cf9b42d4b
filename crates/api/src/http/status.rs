//! Login status handler

use axum::extract::State;
use axum::{Extension, Json};
use serde::Serialize;
use tracing::warn;

use super::session::CurrentSession;
use crate::context::AppContext;

#[derive(Debug, Serialize)]
pub struct StatusBody {
    #[serde(rename = "loggedIn")]
    pub logged_in: bool,
}

/// `GET /get-status` - whether the current session holds a token bundle
///
/// A store failure reads as logged out; this endpoint never answers with an
/// error status.
pub async fn get_status(
    State(context): State<AppContext>,
    Extension(session): Extension<CurrentSession>,
) -> Json<StatusBody> {
    let logged_in = match context.auth_flow.is_authenticated(&session.id).await {
        Ok(value) => value,
        Err(err) => {
            warn!(
                error = %err,
                session_id = %session.id,
                "status lookup failed; reporting logged out"
            );
            false
        }
    };

    Json(StatusBody { logged_in })
}
