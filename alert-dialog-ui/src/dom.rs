//! Browser-backed focus and element lookup
//!
//! `MountedFocus` wraps the element handle Dioxus hands out in `onmounted`.
//! Focus calls are async on that handle, so they are spawned on the calling
//! component's scope; failures are logged rather than surfaced.
//!
//! `MountedData::set_focus` has no scroll options. When a caller asks for
//! `prevent_scroll`, the window scroll position is captured before focusing
//! and put back afterwards.

use std::rc::Rc;

use alert_dialog_common::{ElementLookup, FocusOptions, FocusTarget, LookupError};
use dioxus::prelude::*;
use tracing::debug;

/// Looks elements up by id in the live document
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentLookup;

impl ElementLookup for DocumentLookup {
    fn element_exists(&self, id: &str) -> Result<bool, LookupError> {
        let window = web_sys_x::window().ok_or(LookupError::NoWindow)?;
        let document = window.document().ok_or(LookupError::NoDocument)?;
        Ok(document.get_element_by_id(id).is_some())
    }
}

/// Focusable handle to a mounted element
#[derive(Clone)]
pub struct MountedFocus(Rc<MountedData>);

impl MountedFocus {
    pub fn new(element: Rc<MountedData>) -> Self {
        Self(element)
    }

    /// Whether both handles refer to the same mount
    pub fn same_element(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl FocusTarget for MountedFocus {
    fn focus(&self, options: FocusOptions) {
        let element = self.0.clone();
        let scroll = if options.prevent_scroll {
            window_scroll()
        } else {
            None
        };

        spawn(async move {
            if let Err(e) = element.set_focus(true).await {
                debug!("Failed to move focus: {:?}", e);
                return;
            }
            if let Some((x, y)) = scroll {
                restore_window_scroll(x, y);
            }
        });
    }
}

fn window_scroll() -> Option<(f64, f64)> {
    let window = web_sys_x::window()?;
    Some((window.scroll_x().ok()?, window.scroll_y().ok()?))
}

fn restore_window_scroll(x: f64, y: f64) {
    if let Some(window) = web_sys_x::window() {
        window.scroll_to_with_x_and_y(x, y);
    }
}
