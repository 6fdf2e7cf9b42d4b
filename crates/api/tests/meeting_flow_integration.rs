//! Integration tests for the meeting creation endpoint
//!
//! **Coverage:**
//! - Happy path: bearer-authenticated events.insert, link passed through
//! - Unauthenticated precondition: 401 and zero provider calls
//! - Provider failures: our 500, session bundle untouched, recovery
//! - Error-message sanitization and the expose_provider_errors override

#[path = "support.rs"]
mod support;

use axum::http::StatusCode;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

// ============================================================================
// Happy Path
// ============================================================================

/// Validates the full creation round trip against a mocked calendar API.
///
/// Assertions:
/// - The insert call carries the session's bearer token and
///   `conferenceDataVersion=1`
/// - The response link equals the provider's join link, unmodified
#[tokio::test(flavor = "multi_thread")]
async fn test_create_meeting_returns_provider_link() {
    let app = support::spawn_app().await;
    support::mock_token_exchange(&app.provider, "T1").await;

    Mock::given(method("POST"))
        .and(path("/calendars/primary/events"))
        .and(query_param("conferenceDataVersion", "1"))
        .and(header("authorization", "Bearer T1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "evt-1",
            "hangoutLink": "https://meet.example/xyz"
        })))
        .expect(1)
        .mount(&app.provider)
        .await;

    let cookie = support::authenticate(&app).await;
    let response = support::get(&app.router, "/create-meeting", Some(&cookie)).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        support::body_json(response).await,
        serde_json::json!({ "link": "https://meet.example/xyz" })
    );
}

// ============================================================================
// Unauthenticated Precondition
// ============================================================================

/// Validates the missing-bundle precondition for the creation endpoint.
///
/// Assertions:
/// - 401 with the exact unauthenticated body
/// - The provider is never contacted (`expect(0)` verified on drop)
#[tokio::test(flavor = "multi_thread")]
async fn test_create_meeting_without_session_bundle() {
    let app = support::spawn_app().await;

    Mock::given(method("POST"))
        .and(path("/calendars/primary/events"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.provider)
        .await;

    let response = support::get(&app.router, "/create-meeting", None).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        support::body_json(response).await,
        serde_json::json!({ "error": "User not authenticated" })
    );
}

// ============================================================================
// Provider Failures
// ============================================================================

/// Validates that a provider outage is scoped to a single request.
///
/// Assertions:
/// - The failed call answers 500 with a non-empty error field
/// - The session keeps its bundle (status still logged in)
/// - A later call succeeds once the provider recovers
#[tokio::test(flavor = "multi_thread")]
async fn test_provider_failure_keeps_session_bundle() {
    let app = support::spawn_app().await;
    support::mock_token_exchange(&app.provider, "T1").await;

    // First insert attempt fails; the mock then stops matching and the
    // success mock below takes over.
    Mock::given(method("POST"))
        .and(path("/calendars/primary/events"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .up_to_n_times(1)
        .mount(&app.provider)
        .await;
    support::mock_event_insert(&app.provider, "https://meet.example/recovered").await;

    let cookie = support::authenticate(&app).await;

    let failed = support::get(&app.router, "/create-meeting", Some(&cookie)).await;
    assert_eq!(failed.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let failed_body = support::body_json(failed).await;
    assert!(
        !failed_body["error"].as_str().unwrap_or_default().is_empty(),
        "error field should be non-empty"
    );

    let status = support::get(&app.router, "/get-status", Some(&cookie)).await;
    assert_eq!(support::body_json(status).await, serde_json::json!({ "loggedIn": true }));

    let recovered = support::get(&app.router, "/create-meeting", Some(&cookie)).await;
    assert_eq!(recovered.status(), StatusCode::OK);
    assert_eq!(
        support::body_json(recovered).await,
        serde_json::json!({ "link": "https://meet.example/recovered" })
    );
}

/// An expired token surfaces as a provider failure, not as our 401. The 401
/// status is reserved for the missing-bundle precondition.
#[tokio::test(flavor = "multi_thread")]
async fn test_provider_401_maps_to_our_500() {
    let app = support::spawn_app().await;
    support::mock_token_exchange(&app.provider, "expired-token").await;

    Mock::given(method("POST"))
        .and(path("/calendars/primary/events"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "error": { "code": 401, "message": "Invalid Credentials" }
        })))
        .mount(&app.provider)
        .await;

    let cookie = support::authenticate(&app).await;
    let response = support::get(&app.router, "/create-meeting", Some(&cookie)).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

// ============================================================================
// Error Sanitization
// ============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn test_provider_error_sanitized_by_default() {
    let app = support::spawn_app().await;
    support::mock_token_exchange(&app.provider, "T1").await;

    Mock::given(method("POST"))
        .and(path("/calendars/primary/events"))
        .respond_with(ResponseTemplate::new(403).set_body_string("quota exceeded for project"))
        .mount(&app.provider)
        .await;

    let cookie = support::authenticate(&app).await;
    let response = support::get(&app.router, "/create-meeting", Some(&cookie)).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        support::body_json(response).await,
        serde_json::json!({ "error": "Failed to create calendar event" })
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_provider_error_exposed_when_configured() {
    let app = support::spawn_app_with(|config| {
        config.server.expose_provider_errors = true;
    })
    .await;
    support::mock_token_exchange(&app.provider, "T1").await;

    Mock::given(method("POST"))
        .and(path("/calendars/primary/events"))
        .respond_with(ResponseTemplate::new(403).set_body_string("quota exceeded for project"))
        .mount(&app.provider)
        .await;

    let cookie = support::authenticate(&app).await;
    let response = support::get(&app.router, "/create-meeting", Some(&cookie)).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = support::body_json(response).await;
    let message = body["error"].as_str().unwrap_or_default();

    assert!(message.contains("403"), "raw detail should carry the status: {message}");
    assert!(message.contains("quota exceeded"), "raw detail should pass through: {message}");
}
