//! # MeetLink Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - Google OAuth and Calendar HTTP clients
//! - In-memory session storage
//! - Signed session cookie codec
//! - Configuration loading (environment and file)
//!
//! ## Architecture
//! - Implements traits defined in `meetlink-core`
//! - Depends on `meetlink-domain` and `meetlink-core`
//! - Contains all "impure" code (I/O, clocks, network)

pub mod config;
pub mod google;
pub mod session;

// Re-export commonly used items
pub use google::{GoogleAuthClient, GoogleCalendarClient};
pub use session::{InMemorySessionStore, SessionCookieCodec};
