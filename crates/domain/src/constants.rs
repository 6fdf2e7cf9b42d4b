//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Server defaults
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_STATIC_DIR: &str = "static";

// Session defaults
pub const SESSION_COOKIE_NAME: &str = "meetlink.sid";
pub const DEFAULT_SESSION_TTL_SECS: i64 = 86_400;

// Provider endpoints (overridable through config for tests and alt deployments)
pub const GOOGLE_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
pub const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
pub const GOOGLE_CALENDAR_API_BASE: &str = "https://www.googleapis.com/calendar/v3";
pub const CALENDAR_EVENTS_SCOPE: &str = "https://www.googleapis.com/auth/calendar.events";

// Meeting defaults
pub const DEFAULT_MEETING_SUMMARY: &str = "Instant Meeting";
pub const DEFAULT_MEETING_DESCRIPTION: &str = "A quick meeting created by the Instant Meet App.";
pub const DEFAULT_MEETING_DURATION_MINUTES: i64 = 60;
pub const DEFAULT_TIMEZONE: &str = "Asia/Kolkata";
pub const DEFAULT_CALENDAR_ID: &str = "primary";
pub const MEETING_REQUEST_ID_PREFIX: &str = "meetlink";

// User-facing messages
pub const UNAUTHENTICATED_MESSAGE: &str = "User not authenticated";
pub const SANITIZED_PROVIDER_ERROR: &str = "Failed to create calendar event";
