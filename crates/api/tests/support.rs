//! Shared harness for the HTTP integration tests
//!
//! Builds the real router over a mock provider: wiremock stands in for the
//! Google token and calendar endpoints, and requests are driven through
//! `tower::ServiceExt::oneshot` without opening a socket.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, Response, StatusCode};
use axum::Router;
use meetlink_domain::{Config, MeetingConfig, OAuthConfig, ServerConfig, SessionConfig};
use meetlink_infra::InMemorySessionStore;
use meetlink_lib::{build_router, AppContext};
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Router, session store, and provider mock, wired through the real context.
pub struct TestApp {
    pub router: Router,
    pub sessions: Arc<InMemorySessionStore>,
    pub provider: MockServer,
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with(|_| {}).await
}

/// Like [`spawn_app`], with a hook to adjust the config before wiring.
pub async fn spawn_app_with(adjust: impl FnOnce(&mut Config)) -> TestApp {
    let provider = MockServer::start().await;

    let mut oauth = OAuthConfig::google(
        "cid".to_string(),
        "csecret".to_string(),
        "http://localhost:3000/auth/provider/callback".to_string(),
    );
    oauth.auth_url = format!("{}/o/oauth2/v2/auth", provider.uri());
    oauth.token_url = format!("{}/token", provider.uri());

    let mut config = Config {
        server: ServerConfig::default(),
        oauth,
        session: SessionConfig::new("test-session-secret".to_string()),
        meeting: MeetingConfig { api_base_url: provider.uri(), ..MeetingConfig::default() },
    };
    adjust(&mut config);

    let sessions = Arc::new(InMemorySessionStore::new());
    let context = AppContext::with_store(config, sessions.clone());

    TestApp { router: build_router(context), sessions, provider }
}

// ============================================================================
// Request Helpers
// ============================================================================

/// Drive a GET request through the router, optionally with a cookie header.
pub async fn get(router: &Router, uri: &str, cookie: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    let request = builder.body(Body::empty()).expect("request should build");

    router.clone().oneshot(request).await.expect("router should answer")
}

/// The session cookie pair (`name=value`) issued on the response.
pub fn session_cookie(response: &Response<Body>) -> String {
    let raw = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("response should carry a session cookie")
        .to_str()
        .expect("cookie header should be ascii");

    raw.split(';').next().expect("cookie should have a value").to_string()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes =
        axum::body::to_bytes(response.into_body(), usize::MAX).await.expect("body should collect");
    serde_json::from_slice(&bytes).expect("body should be JSON")
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes =
        axum::body::to_bytes(response.into_body(), usize::MAX).await.expect("body should collect");
    String::from_utf8(bytes.to_vec()).expect("body should be UTF-8")
}

// ============================================================================
// Provider Mocks
// ============================================================================

/// Mount a token exchange answering with the given access token.
pub async fn mock_token_exchange(provider: &MockServer, access_token: &str) {
    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": access_token,
            "refresh_token": "1//refresh",
            "token_type": "Bearer",
            "expires_in": 3599
        })))
        .mount(provider)
        .await;
}

/// Mount an events.insert answering with the given join link.
pub async fn mock_event_insert(provider: &MockServer, link: &str) {
    Mock::given(method("POST"))
        .and(path("/calendars/primary/events"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "evt-1",
            "status": "confirmed",
            "hangoutLink": link
        })))
        .mount(provider)
        .await;
}

/// Complete the authorization callback and return the issued session cookie.
///
/// A token exchange mock must already be mounted.
pub async fn authenticate(app: &TestApp) -> String {
    let response = get(&app.router, "/auth/provider/callback?code=test-code", None).await;
    assert_eq!(response.status(), StatusCode::FOUND, "callback should redirect");

    session_cookie(&response)
}
