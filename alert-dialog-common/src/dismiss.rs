//! How an open alert dialog may be dismissed
//!
//! Escape closes it unless a handler prevents that. Anything the dialog
//! shell reports as a close request (a backdrop click, or the shell's own
//! Escape handling) is treated as an interaction outside the content, and
//! an alert dialog never closes on those.

use std::cell::Cell;

use tracing::debug;

use crate::events::{dispatch_with_default, DialogEvent, DialogEventKind, Preventable};

/// Dismissal state of one content region
#[derive(Debug, Default)]
pub struct Dismissal {
    escape_seen: Cell<bool>,
}

impl Dismissal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key pressed inside the content.
    ///
    /// On Escape, fires [`DialogEventKind::EscapeKeyDown`] through `handler`
    /// and calls `close` unless it was prevented. Returns whether it closed.
    pub fn key_down(
        &self,
        is_escape: bool,
        handler: impl FnOnce(&DialogEvent),
        close: impl FnOnce(),
    ) -> bool {
        self.escape_seen.set(is_escape);
        if !is_escape {
            return false;
        }
        dispatch_with_default(
            &DialogEvent::new(DialogEventKind::EscapeKeyDown),
            handler,
            close,
        )
    }

    /// The dialog shell asked to close.
    ///
    /// A request following an Escape already handled by
    /// [`key_down`](Self::key_down) is dropped. Anything else fires
    /// [`DialogEventKind::InteractOutside`] through `handler` and is then
    /// refused. Returns whether `close` ran, which is never.
    pub fn close_requested(
        &self,
        handler: impl FnOnce(&DialogEvent),
        close: impl FnOnce(),
    ) -> bool {
        if self.escape_seen.replace(false) {
            return false;
        }
        let event = DialogEvent::new(DialogEventKind::InteractOutside);
        let closed = dispatch_with_default(
            &event,
            |event| {
                handler(event);
                event.prevent_default();
            },
            close,
        );
        if !closed {
            debug!(kind = ?event.kind(), "Alert dialog stays open");
        }
        closed
    }
}
