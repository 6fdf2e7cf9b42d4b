//! Authorization flow operations
//!
//! Redirect-based OAuth2 authorization-code exchange against the provider.

pub mod ports;
pub mod service;

pub use ports::AuthorizationProvider;
pub use service::AuthFlowService;
