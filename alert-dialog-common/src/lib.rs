//! alert-dialog-common - Renderer-agnostic pieces of the alert dialog
//!
//! Everything here is plain Rust with no UI framework attached, so the
//! rules the components rely on (id generation, accessible-name resolution,
//! event composition, cancel-focus redirection, dismissal and the
//! accessibility audit) can be exercised directly in unit tests.

pub mod a11y;
pub mod config;
pub mod dismiss;
pub mod events;
pub mod focus;
pub mod ids;
pub mod naming;
pub mod slot;

pub use a11y::{audit, report, AccessibilityWarning, AuditInput, ElementLookup, LookupError};
pub use config::{ConfigError, DiagnosticsConfig, WarningMode, WARNINGS_ENV_VAR};
pub use events::{
    compose_handlers, dispatch_with_default, DialogEvent, DialogEventKind, Preventable,
};
pub use dismiss::Dismissal;
pub use focus::{
    focus_cancel_on_open, open_auto_focus_handler, CancelFocus, FocusOptions, FocusTarget,
};
pub use ids::{next_id, DialogIds};
pub use naming::{resolve_naming, NamingOverrides, ResolvedNaming};
pub use slot::SharedSlot;
