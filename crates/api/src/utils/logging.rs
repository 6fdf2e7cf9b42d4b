//! Logging setup and error labeling

use meetlink_domain::MeetLinkError;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` overrides the default filter. Call once, before any other
/// logging.
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry().with(env_filter).with(fmt::layer()).init();
}

/// Convert a `MeetLinkError` into a stable label suitable for log fields.
#[inline]
pub fn error_label(error: &MeetLinkError) -> &'static str {
    match error {
        MeetLinkError::Config(_) => "config",
        MeetLinkError::Auth(_) => "auth",
        MeetLinkError::Provider(_) => "provider",
        MeetLinkError::Network(_) => "network",
        MeetLinkError::Session(_) => "session",
        MeetLinkError::InvalidInput(_) => "invalid_input",
        MeetLinkError::Internal(_) => "internal",
    }
}
