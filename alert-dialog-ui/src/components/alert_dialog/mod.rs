//! Alert dialog
//!
//! A modal dialog that interrupts the user with something they must
//! acknowledge. The root owns the open state; the content is mounted inside
//! the `dioxus_primitives::dialog::DialogRoot` shell while open. On top of
//! that shell:
//! - the content has `role="alertdialog"` and is labelled and described by
//!   the dialog's own title and description unless told otherwise
//! - focus opens on the cancel control instead of the content
//! - clicking outside does not dismiss it
//!
//! ```ignore
//! AlertDialogRoot {
//!     AlertDialogTrigger { "Delete album" }
//!     AlertDialogOverlay {}
//!     AlertDialogContent {
//!         AlertDialogTitle { "Delete album?" }
//!         AlertDialogDescription { "This removes every release of the album." }
//!         AlertDialogCancel { "Keep it" }
//!         AlertDialogAction { on_click: move |_| delete(), "Delete" }
//!     }
//! }
//! ```

mod content;
mod parts;
mod root;
mod warnings;

pub use content::{AlertDialogContent, CancelTarget};
pub use parts::{
    AlertDialogAction, AlertDialogCancel, AlertDialogDescription, AlertDialogOverlay,
    AlertDialogTitle, AlertDialogTrigger,
};
pub use root::{AlertDialogRoot, AlertDialogState};
pub use warnings::AccessibilityWarnings;
