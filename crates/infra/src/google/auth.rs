//! Google OAuth 2.0 client
//!
//! Server-side confidential-client flow:
//! - Browser authorization URL building
//! - Authorization code exchange
//!
//! The client secret never leaves the server; the browser only ever sees the
//! authorization URL and the redirect back from the provider.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use meetlink_core::auth::ports::AuthorizationProvider;
use meetlink_domain::{MeetLinkError, OAuthConfig, Result, TokenBundle};
use reqwest::Client;
use serde::Deserialize;

/// OAuth 2.0 client for the authorization-code flow
#[derive(Debug, Clone)]
pub struct GoogleAuthClient {
    config: OAuthConfig,
    client: Client,
}

impl GoogleAuthClient {
    /// Create a new client with the given configuration
    #[must_use]
    pub fn new(config: OAuthConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { config, client }
    }

    /// Build the authorization URL for browser-based consent
    ///
    /// Requests offline access so the provider issues a refresh token
    /// alongside the access token.
    #[must_use]
    pub fn build_authorization_url(&self) -> String {
        let params = vec![
            ("response_type".to_string(), "code".to_string()),
            ("client_id".to_string(), self.config.client_id.clone()),
            ("redirect_uri".to_string(), self.config.redirect_uri.clone()),
            ("scope".to_string(), self.config.scopes.join(" ")),
            ("access_type".to_string(), "offline".to_string()),
        ];

        let query_string = params
            .iter()
            .map(|(k, v)| format!("{k}={}", urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        format!("{}?{}", self.config.auth_url, query_string)
    }

    /// Exchange an authorization code for tokens
    ///
    /// # Arguments
    /// * `code` - Authorization code from the redirect callback
    ///
    /// # Errors
    /// Returns an authorization error when the provider rejects the code or
    /// the response cannot be parsed, and a network error when the request
    /// itself fails.
    pub async fn exchange(&self, code: &str) -> Result<TokenBundle> {
        let request_body = vec![
            ("grant_type".to_string(), "authorization_code".to_string()),
            ("client_id".to_string(), self.config.client_id.clone()),
            ("client_secret".to_string(), self.config.client_secret.clone()),
            ("code".to_string(), code.to_string()),
            ("redirect_uri".to_string(), self.config.redirect_uri.clone()),
        ];

        let response = self
            .client
            .post(&self.config.token_url)
            .form(&request_body)
            .send()
            .await
            .map_err(|e| MeetLinkError::Network(format!("Token exchange request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = match response.json::<OAuthErrorBody>().await {
                Ok(body) => body.to_string(),
                Err(_) => "unparseable error body".to_string(),
            };
            return Err(MeetLinkError::Auth(format!(
                "Token exchange failed ({status}): {detail}"
            )));
        }

        let token_response: TokenExchangeResponse = response
            .json()
            .await
            .map_err(|e| MeetLinkError::Auth(format!("Failed to parse token response: {e}")))?;

        Ok(token_response.into())
    }
}

#[async_trait]
impl AuthorizationProvider for GoogleAuthClient {
    fn authorization_url(&self) -> Result<String> {
        Ok(self.build_authorization_url())
    }

    async fn exchange_code(&self, code: &str) -> Result<TokenBundle> {
        self.exchange(code).await
    }
}

/// Token endpoint success payload
#[derive(Debug, Deserialize)]
struct TokenExchangeResponse {
    access_token: String,
    refresh_token: Option<String>,
    token_type: Option<String>,
    expires_in: Option<i64>,
    scope: Option<String>,
}

impl From<TokenExchangeResponse> for TokenBundle {
    fn from(response: TokenExchangeResponse) -> Self {
        Self::new(
            response.access_token,
            response.refresh_token,
            response.token_type.unwrap_or_else(|| "Bearer".to_string()),
            response.expires_in.unwrap_or(0),
            response.scope,
        )
    }
}

/// Token endpoint error payload
#[derive(Debug, Deserialize)]
struct OAuthErrorBody {
    error: String,
    error_description: Option<String>,
}

impl fmt::Display for OAuthErrorBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.error_description {
            Some(description) => write!(f, "{}: {description}", self.error),
            None => f.write_str(&self.error),
        }
    }
}
