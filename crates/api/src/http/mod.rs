//! HTTP surface - router assembly and request handlers

pub mod auth;
pub mod cookies;
pub mod error;
pub mod meeting;
pub mod session;
pub mod status;

use axum::middleware;
use axum::routing::get;
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::context::AppContext;

/// Assemble the application router.
///
/// Unmatched paths fall through to the static frontend directory, so `/`
/// serves `index.html`. The session middleware wraps every route including
/// the static fallback; each response on a fresh session carries the
/// session cookie.
pub fn build_router(context: AppContext) -> Router {
    let static_dir = context.config.server.static_dir.clone();

    Router::new()
        .route("/auth/provider", get(auth::begin))
        .route("/auth/provider/callback", get(auth::callback))
        .route("/get-status", get(status::get_status))
        .route("/create-meeting", get(meeting::create_meeting))
        .fallback_service(ServeDir::new(static_dir))
        .layer(middleware::from_fn_with_state(context.clone(), session::attach_session))
        .layer(TraceLayer::new_for_http())
        .with_state(context)
}
