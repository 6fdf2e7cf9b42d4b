//! Port interfaces for the authorization flow

use async_trait::async_trait;
use meetlink_domain::{Result, TokenBundle};

/// Trait for the OAuth2 authorization provider
#[async_trait]
pub trait AuthorizationProvider: Send + Sync {
    /// Build the authorization URL the browser is redirected to
    fn authorization_url(&self) -> Result<String>;

    /// Exchange an authorization code for a token bundle
    async fn exchange_code(&self, code: &str) -> Result<TokenBundle>;
}
