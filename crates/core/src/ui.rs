//! UI flow state machine
//!
//! The browser frontend is a thin projection of this machine: every DOM
//! mutation in `static/app.js` corresponds to one transition here, driven by
//! discrete events, so the flow is testable with no rendering surface.
//!
//! Three independent axes:
//! - [`AuthView`]: login screen vs. application screen, decided once per page
//!   load from the status endpoint.
//! - [`MeetingAction`]: lifecycle of the create-meeting control. Completions
//!   apply in arrival order (last response wins); a second request while one
//!   is in flight is legal and simply re-enters the loading state, matching
//!   the at-least-once, no-in-flight-guard semantics of the backend.
//! - [`LinkModal`]: the static-card browsing modal, which shares no state
//!   with the meeting flow.

/// How long the result copy control shows its acknowledgment, in milliseconds
pub const COPY_ACK_MILLIS: u64 = 2_000;

/// How long the modal copy toast stays visible, in milliseconds
pub const TOAST_MILLIS: u64 = 3_000;

/// Clipboard payload for the meeting result: a templated invitation message,
/// not the bare link.
#[must_use]
pub fn meeting_copy_text(link: &str) -> String {
    format!(
        "Hi Team,\n\nLet's connect quickly. Please join the meeting using the link below.\n\n{link}\n\nThanks!"
    )
}

/// Coarse authentication view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthView {
    /// Authorization entry point is shown
    #[default]
    LoggedOut,
    /// Meeting-creation screen is shown
    LoggedIn,
}

/// Meeting-creation action state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MeetingAction {
    /// Nothing requested yet, control enabled
    #[default]
    Idle,
    /// Request in flight, control disabled, loading indicator shown
    Loading,
    /// Last completed request succeeded; result area renders the link
    Ready { link: String },
    /// Last completed request failed; inline error text shown
    Failed { message: String },
}

/// Static-card link modal
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LinkModal {
    #[default]
    Closed,
    Open { title: String, link: String },
}

/// Events the frontend feeds into the machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Status endpoint answered on page load
    StatusLoaded { logged_in: bool },
    /// Status endpoint was unreachable; treated as logged out
    StatusCheckFailed,
    /// User triggered meeting creation (fires one backend call per event)
    CreateRequested,
    /// A creation call returned a link
    CreateSucceeded { link: String },
    /// A creation call failed (backend error or fetch failure)
    CreateFailed { message: String },
    /// User clicked a static card
    CardSelected { title: String, link: String },
    /// User dismissed the modal
    ModalDismissed,
}

/// Complete UI model
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiModel {
    pub view: AuthView,
    pub action: MeetingAction,
    pub modal: LinkModal,
}

impl UiModel {
    /// Apply one event to the model.
    pub fn apply(&mut self, event: UiEvent) {
        match event {
            UiEvent::StatusLoaded { logged_in } => {
                self.view = if logged_in { AuthView::LoggedIn } else { AuthView::LoggedOut };
            }
            UiEvent::StatusCheckFailed => {
                self.view = AuthView::LoggedOut;
            }
            UiEvent::CreateRequested => {
                self.action = MeetingAction::Loading;
            }
            UiEvent::CreateSucceeded { link } => {
                self.action = MeetingAction::Ready { link };
            }
            UiEvent::CreateFailed { message } => {
                self.action = MeetingAction::Failed { message };
            }
            UiEvent::CardSelected { title, link } => {
                self.modal = LinkModal::Open { title, link };
            }
            UiEvent::ModalDismissed => {
                self.modal = LinkModal::Closed;
            }
        }
    }

    /// Whether the create control accepts clicks (disabled only while a
    /// request is in flight; always re-enabled on completion).
    #[must_use]
    pub fn is_create_enabled(&self) -> bool {
        !matches!(self.action, MeetingAction::Loading)
    }
}
