//! # MeetLink Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port/adapter interfaces (traits)
//! - Use cases and services
//! - The UI flow state machine
//!
//! ## Architecture Principles
//! - Only depends on `meetlink-domain`
//! - No HTTP or storage code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod auth;
pub mod meeting;
pub mod ui;

// Infrastructure ports
pub mod session_ports;

// Re-export specific items to avoid ambiguity
pub use auth::ports::AuthorizationProvider;
pub use auth::AuthFlowService;
pub use meeting::ports::MeetingProvider;
pub use meeting::MeetingService;
pub use session_ports::SessionStore;
pub use ui::{AuthView, LinkModal, MeetingAction, UiEvent, UiModel};
