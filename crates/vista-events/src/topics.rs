//! Event topic identifiers used by subscribers.

use crate::payloads::AppEvent;

/// Machine-friendly discriminator for log fields and filters.
#[must_use]
pub const fn event_kind(event: &AppEvent) -> &'static str {
    event.kind()
}

/// Whether the event asks the shell to change which overlay is visible.
#[must_use]
pub const fn is_overlay_event(event: &AppEvent) -> bool {
    matches!(
        event,
        AppEvent::ShowDashSearch | AppEvent::ShowModal { .. } | AppEvent::HideModal
    )
}
