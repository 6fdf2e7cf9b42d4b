//! Google provider integration
//!
//! OAuth2 authorization-code flow and Calendar v3 event creation with
//! conference data attached. Endpoint URLs come from configuration so tests
//! can point both clients at a mock server.

pub mod auth;
pub mod calendar;

pub use auth::GoogleAuthClient;
pub use calendar::GoogleCalendarClient;
