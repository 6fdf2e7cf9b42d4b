//! Shared test helpers for `meetlink-core` integration tests.
//!
//! These helpers provide reusable fixtures and lightweight mocks so the
//! service tests can focus on behaviour instead of boilerplate.

pub mod ports;

use meetlink_domain::TokenBundle;

/// Build a token bundle with the given access token and sane defaults.
pub fn bundle(access_token: &str) -> TokenBundle {
    TokenBundle::new(access_token.to_string(), None, "Bearer".to_string(), 3600, None)
}
