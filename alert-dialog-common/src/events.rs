//! Preventable events and handler composition
//!
//! Alert dialog content exposes extension points (open auto-focus, escape
//! key, outside interaction). Each fires a [`DialogEvent`]; a handler that
//! calls `prevent_default()` suppresses whatever the dialog would have done
//! next.

use std::cell::Cell;
use std::rc::Rc;

/// An event whose default behaviour can be cancelled by a handler
pub trait Preventable {
    fn prevent_default(&self);
    fn is_default_prevented(&self) -> bool;
}

/// Which extension point fired the event
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogEventKind {
    /// Content mounted and focus is about to move into it
    OpenAutoFocus,
    /// Escape pressed while focus is inside the content
    EscapeKeyDown,
    /// Pointer interaction outside the content (overlay click)
    InteractOutside,
}

/// Event passed to dialog extension points.
///
/// Clones share the prevented flag, so a handler receiving a clone can still
/// cancel the default.
#[derive(Clone, Debug)]
pub struct DialogEvent {
    kind: DialogEventKind,
    prevented: Rc<Cell<bool>>,
}

impl DialogEvent {
    pub fn new(kind: DialogEventKind) -> Self {
        Self {
            kind,
            prevented: Rc::new(Cell::new(false)),
        }
    }

    pub fn kind(&self) -> DialogEventKind {
        self.kind
    }
}

impl Preventable for DialogEvent {
    fn prevent_default(&self) {
        self.prevented.set(true);
    }

    fn is_default_prevented(&self) -> bool {
        self.prevented.get()
    }
}

/// Compose a caller-supplied handler with a built-in one.
///
/// The caller's handler runs first. The built-in handler runs afterwards
/// unless `check_for_default_prevented` is set and the caller prevented the
/// event.
pub fn compose_handlers<E, U, D>(
    user: Option<U>,
    mut default: D,
    check_for_default_prevented: bool,
) -> impl FnMut(&E)
where
    E: Preventable + ?Sized,
    U: FnMut(&E),
    D: FnMut(&E),
{
    let mut user = user;
    move |event: &E| {
        if let Some(user) = user.as_mut() {
            user(event);
        }
        if !check_for_default_prevented || !event.is_default_prevented() {
            default(event);
        }
    }
}

/// Fire an extension point: run `handler`, then the `default`
/// behaviour unless the handler prevented it.
///
/// Returns whether the default ran.
pub fn dispatch_with_default<E: Preventable + ?Sized>(
    event: &E,
    handler: impl FnOnce(&E),
    default: impl FnOnce(),
) -> bool {
    handler(event);
    if event.is_default_prevented() {
        return false;
    }
    default();
    true
}
