//! alert-dialog-ui - Accessible alert dialog components for Dioxus
//!
//! The alert dialog family is layered on the `dioxus-primitives` dialog
//! shell, which provides the backdrop and modal container. This crate adds
//! the alert semantics on top, plus the browser-backed focus and element
//! lookup they need.

pub mod attributes;
pub mod components;
pub mod diagnostics;
pub mod dom;
mod events;

pub use alert_dialog_common::{
    DiagnosticsConfig, DialogEvent, DialogEventKind, Preventable, WarningMode,
};
pub use components::*;
pub use diagnostics::{use_diagnostics, Diagnostics};
pub use dom::{DocumentLookup, MountedFocus};
