//! Meeting creation operations
//!
//! Builds time-boxed meeting requests and delegates resource creation to the
//! provider port.

pub mod ports;
pub mod service;

pub use ports::MeetingProvider;
pub use service::MeetingService;
