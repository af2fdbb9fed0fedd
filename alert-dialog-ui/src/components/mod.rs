//! Dialog components

pub mod alert_dialog;
pub mod button;
pub mod tag;

pub use alert_dialog::{
    AccessibilityWarnings, AlertDialogAction, AlertDialogCancel, AlertDialogContent,
    AlertDialogDescription, AlertDialogOverlay, AlertDialogRoot, AlertDialogState,
    AlertDialogTitle, AlertDialogTrigger, CancelTarget,
};
pub use button::ChromelessButton;
pub use tag::{render_tag, Tag};
