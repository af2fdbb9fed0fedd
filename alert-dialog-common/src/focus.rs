//! Focus redirection to the cancel control

use std::cell::Cell;
use std::rc::Rc;

use tracing::debug;

use crate::events::{compose_handlers, DialogEvent, Preventable};
use crate::slot::SharedSlot;

/// Options for moving focus
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FocusOptions {
    /// Keep the current scroll position while focusing
    pub prevent_scroll: bool,
}

const CANCEL_FOCUS: FocusOptions = FocusOptions {
    prevent_scroll: true,
};

/// Something that can receive keyboard focus
pub trait FocusTarget {
    fn focus(&self, options: FocusOptions);
}

impl<T: FocusTarget + ?Sized> FocusTarget for Rc<T> {
    fn focus(&self, options: FocusOptions) {
        (**self).focus(options)
    }
}

/// Hand-off between alert dialog content and its cancel control.
///
/// The content fires open auto-focus from its own mount handler, and the
/// renderer may deliver that before the cancel control inside it has
/// mounted. A cancel control therefore declares itself when it is first
/// rendered, which always precedes any mount. If the content opens while a
/// declared cancel control has no handle yet, the redirect is parked and
/// [`register`](Self::register) completes it.
pub struct CancelFocus<H> {
    handle: SharedSlot<H>,
    declared: Rc<Cell<usize>>,
    pending: Rc<Cell<bool>>,
}

impl<H> CancelFocus<H> {
    pub fn new() -> Self {
        Self {
            handle: SharedSlot::new(),
            declared: Rc::new(Cell::new(0)),
            pending: Rc::new(Cell::new(false)),
        }
    }

    /// A cancel control was rendered under the content
    pub fn declare(&self) {
        self.declared.set(self.declared.get() + 1);
    }

    /// A cancel control went away.
    ///
    /// Its handle is dropped only if `owns` recognises it, so an earlier
    /// control unmounting does not clear a later one.
    pub fn withdraw(&self, owns: impl FnOnce(&H) -> bool) {
        self.handle.release_if(owns);
        let remaining = self.declared.get().saturating_sub(1);
        self.declared.set(remaining);
        if remaining == 0 {
            self.pending.set(false);
        }
    }

    pub fn is_declared(&self) -> bool {
        self.declared.get() > 0
    }

    /// Whether an open auto-focus is waiting for the cancel control to mount
    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }
}

impl<H: FocusTarget + Clone> CancelFocus<H> {
    /// A cancel control mounted. Last one wins.
    pub fn register(&self, handle: H) {
        self.handle.set(handle.clone());
        if self.pending.replace(false) {
            handle.focus(CANCEL_FOCUS);
        }
    }

    fn handle(&self) -> Option<H> {
        self.handle.get()
    }
}

impl<H> Clone for CancelFocus<H> {
    fn clone(&self) -> Self {
        Self {
            handle: self.handle.clone(),
            declared: Rc::clone(&self.declared),
            pending: Rc::clone(&self.pending),
        }
    }
}

impl<H> Default for CancelFocus<H> {
    fn default() -> Self {
        Self::new()
    }
}

/// Built-in open auto-focus handler of alert dialog content.
///
/// Cancels the default focus and sends focus to the cancel control: right
/// away when it has mounted, otherwise as soon as it does. Without any
/// cancel control the event is left alone and the content gets focus.
///
/// Returns whether focus goes to the cancel control.
pub fn focus_cancel_on_open<E, H>(event: &E, target: &CancelFocus<H>) -> bool
where
    E: Preventable + ?Sized,
    H: FocusTarget + Clone,
{
    if let Some(cancel) = target.handle() {
        event.prevent_default();
        cancel.focus(CANCEL_FOCUS);
        return true;
    }
    if target.is_declared() {
        event.prevent_default();
        target.pending.set(true);
        debug!("Cancel control not mounted yet, focusing it once it is");
        return true;
    }
    debug!("No cancel control rendered, keeping default open focus");
    false
}

/// The caller's open auto-focus handler followed by the cancel redirect,
/// which is skipped when the caller prevented the event
pub fn open_auto_focus_handler<U, H>(
    user: Option<U>,
    target: CancelFocus<H>,
) -> impl FnMut(&DialogEvent)
where
    U: FnMut(&DialogEvent),
    H: FocusTarget + Clone,
{
    compose_handlers(
        user,
        move |event: &DialogEvent| {
            focus_cancel_on_open(event, &target);
        },
        true,
    )
}
