//! Meeting creation handler

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use serde::Serialize;
use tracing::error;

use super::error::error_response;
use super::session::CurrentSession;
use crate::context::AppContext;
use crate::utils::logging::error_label;

#[derive(Debug, Serialize)]
pub struct MeetingBody {
    pub link: String,
}

/// `GET /create-meeting` - create an instant meeting for the session
///
/// Answers `{"link": <join link>}` on success. Without a token bundle the
/// provider is never called and the response is 401.
pub async fn create_meeting(
    State(context): State<AppContext>,
    Extension(session): Extension<CurrentSession>,
) -> Response {
    match context.meetings.create_meeting(&session.id).await {
        Ok(meeting) => Json(MeetingBody { link: meeting.join_link }).into_response(),
        Err(err) => {
            error!(
                error = %err,
                error_kind = error_label(&err),
                session_id = %session.id,
                "meeting creation failed"
            );
            error_response(&err, context.config.server.expose_provider_errors)
        }
    }
}
