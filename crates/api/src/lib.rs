//! # MeetLink API
//!
//! HTTP application layer - router, handlers, and entry-point wiring.
//!
//! This crate contains:
//! - The axum router and request handlers
//! - Session middleware (cookie resolution and issuance)
//! - Application context (dependency injection)
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture
//! - Serves the static frontend alongside the JSON API

pub mod context;
pub mod http;
pub mod utils;

// Re-export for convenience
pub use context::AppContext;
pub use http::build_router;
