//! Single-slot shared cell
//!
//! One component creates the slot and hands clones to its descendants. All
//! clones point at the same cell; the last `set` wins. Single-threaded by
//! construction (`Rc`), matching the UI thread it lives on.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

pub struct SharedSlot<T> {
    inner: Rc<RefCell<Option<T>>>,
}

impl<T> SharedSlot<T> {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(None)),
        }
    }

    /// Store a value, returning the one it replaced
    pub fn set(&self, value: T) -> Option<T> {
        self.inner.borrow_mut().replace(value)
    }

    pub fn take(&self) -> Option<T> {
        self.inner.borrow_mut().take()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_none()
    }

    /// Clear the slot only if `owns` accepts the current value.
    ///
    /// Lets a writer withdraw its own value on unmount without wiping a value
    /// written later by someone else.
    pub fn release_if(&self, owns: impl FnOnce(&T) -> bool) -> bool {
        let mut inner = self.inner.borrow_mut();
        if inner.as_ref().is_some_and(owns) {
            *inner = None;
            return true;
        }
        false
    }
}

impl<T: Clone> SharedSlot<T> {
    /// Clone the current value out, leaving it in place
    pub fn get(&self) -> Option<T> {
        self.inner.borrow().clone()
    }
}

impl<T> Clone for SharedSlot<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> Default for SharedSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for SharedSlot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedSlot")
            .field("occupied", &!self.is_empty())
            .finish()
    }
}
