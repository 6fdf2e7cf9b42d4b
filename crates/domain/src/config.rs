//! Configuration structures
//!
//! Pure data; loading and validation live in the infra config loader.

use serde::{Deserialize, Serialize};

use crate::constants::{
    CALENDAR_EVENTS_SCOPE, DEFAULT_CALENDAR_ID, DEFAULT_HOST, DEFAULT_MEETING_DESCRIPTION,
    DEFAULT_MEETING_DURATION_MINUTES, DEFAULT_MEETING_SUMMARY, DEFAULT_PORT,
    DEFAULT_SESSION_TTL_SECS, DEFAULT_STATIC_DIR, DEFAULT_TIMEZONE, GOOGLE_AUTH_URL,
    GOOGLE_CALENDAR_API_BASE, GOOGLE_TOKEN_URL, SESSION_COOKIE_NAME,
};

/// Top-level application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    pub oauth: OAuthConfig,
    pub session: SessionConfig,
    #[serde(default)]
    pub meeting: MeetingConfig,
}

/// HTTP listener settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory served at `/` (index.html plus assets)
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
    /// Pass raw provider error text through to clients instead of the
    /// sanitized message. Off by default.
    #[serde(default)]
    pub expose_provider_errors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
            expose_provider_errors: false,
        }
    }
}

/// OAuth2 client settings for the authorization provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OAuthConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    #[serde(default = "default_auth_url")]
    pub auth_url: String,
    #[serde(default = "default_token_url")]
    pub token_url: String,
    #[serde(default = "default_scopes")]
    pub scopes: Vec<String>,
}

impl OAuthConfig {
    /// Google preset: real endpoints, the single calendar-events scope.
    #[must_use]
    pub fn google(client_id: String, client_secret: String, redirect_uri: String) -> Self {
        Self {
            client_id,
            client_secret,
            redirect_uri,
            auth_url: default_auth_url(),
            token_url: default_token_url(),
            scopes: default_scopes(),
        }
    }
}

/// Session cookie settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Secret the cookie signature key is derived from
    pub secret: String,
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    #[serde(default = "default_session_ttl")]
    pub ttl_seconds: i64,
}

impl SessionConfig {
    #[must_use]
    pub fn new(secret: String) -> Self {
        Self {
            secret,
            cookie_name: default_cookie_name(),
            ttl_seconds: default_session_ttl(),
        }
    }
}

/// Fixed shape of every created meeting
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeetingConfig {
    #[serde(default = "default_summary")]
    pub summary: String,
    #[serde(default = "default_description")]
    pub description: String,
    #[serde(default = "default_duration")]
    pub duration_minutes: i64,
    /// IANA timezone name; validated against the tz database at load time
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default = "default_calendar_id")]
    pub calendar_id: String,
    #[serde(default = "default_api_base")]
    pub api_base_url: String,
}

impl Default for MeetingConfig {
    fn default() -> Self {
        Self {
            summary: default_summary(),
            description: default_description(),
            duration_minutes: default_duration(),
            timezone: default_timezone(),
            calendar_id: default_calendar_id(),
            api_base_url: default_api_base(),
        }
    }
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_static_dir() -> String {
    DEFAULT_STATIC_DIR.to_string()
}

fn default_auth_url() -> String {
    GOOGLE_AUTH_URL.to_string()
}

fn default_token_url() -> String {
    GOOGLE_TOKEN_URL.to_string()
}

fn default_scopes() -> Vec<String> {
    vec![CALENDAR_EVENTS_SCOPE.to_string()]
}

fn default_cookie_name() -> String {
    SESSION_COOKIE_NAME.to_string()
}

fn default_session_ttl() -> i64 {
    DEFAULT_SESSION_TTL_SECS
}

fn default_summary() -> String {
    DEFAULT_MEETING_SUMMARY.to_string()
}

fn default_description() -> String {
    DEFAULT_MEETING_DESCRIPTION.to_string()
}

fn default_duration() -> i64 {
    DEFAULT_MEETING_DURATION_MINUTES
}

fn default_timezone() -> String {
    DEFAULT_TIMEZONE.to_string()
}

fn default_calendar_id() -> String {
    DEFAULT_CALENDAR_ID.to_string()
}

fn default_api_base() -> String {
    GOOGLE_CALENDAR_API_BASE.to_string()
}
