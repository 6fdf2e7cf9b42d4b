//! Session middleware - cookie resolution and issuance

use axum::extract::{Request, State};
use axum::http::header::SET_COOKIE;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;
use meetlink_domain::{Session, SessionId};
use tracing::warn;

use super::cookies;
use crate::context::AppContext;

/// The session resolved for the current request.
///
/// Inserted into request extensions by [`attach_session`]; handlers read it
/// via `Extension<CurrentSession>`.
#[derive(Debug, Clone)]
pub struct CurrentSession {
    pub id: SessionId,
    pub is_new: bool,
}

/// Resolve the session for the request, creating one on first contact.
///
/// A missing, malformed, or tampered cookie yields a fresh session, and so
/// does a validly signed cookie whose session is gone (process restart).
/// Fresh sessions are stored eagerly and the response carries the
/// `Set-Cookie` header.
pub async fn attach_session(
    State(context): State<AppContext>,
    mut request: Request,
    next: Next,
) -> Response {
    let cookie_name = context.config.session.cookie_name.clone();
    let presented = cookies::extract_cookie_value(request.headers(), &cookie_name)
        .and_then(|value| context.cookie_codec.decode(&value));

    let (session_id, is_new) = match presented {
        Some(id) => match context.sessions.get(&id).await {
            Ok(Some(_)) => (id, false),
            Ok(None) => (fresh_session(&context).await, true),
            Err(err) => {
                warn!(error = %err, "session lookup failed; issuing a fresh session");
                (fresh_session(&context).await, true)
            }
        },
        None => (fresh_session(&context).await, true),
    };

    request.extensions_mut().insert(CurrentSession { id: session_id.clone(), is_new });

    let mut response = next.run(request).await;

    if is_new {
        let cookie = cookies::session_set_cookie(
            &cookie_name,
            &context.cookie_codec.encode(&session_id),
            context.config.session.ttl_seconds,
        );
        match HeaderValue::from_str(&cookie) {
            Ok(header) => {
                response.headers_mut().append(SET_COOKIE, header);
            }
            Err(err) => warn!(error = %err, "failed to encode session cookie header"),
        }
    }

    response
}

async fn fresh_session(context: &AppContext) -> SessionId {
    let session = Session::new(SessionId::generate());
    let id = session.id.clone();

    // A store failure degrades to an unauthenticated session; the request
    // itself still goes through.
    if let Err(err) = context.sessions.set(session).await {
        warn!(error = %err, session_id = %id, "failed to store fresh session");
    }

    id
}
