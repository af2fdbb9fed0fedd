use alert_dialog_common::{audit, report, AuditInput};
use dioxus::prelude::*;
use tracing::debug;

use crate::diagnostics::use_diagnostics;

/// Audits the surrounding content's accessible name and description after
/// it mounts, and again whenever `input` changes. Renders nothing.
#[component]
pub fn AccessibilityWarnings(input: AuditInput) -> Element {
    let diagnostics = use_diagnostics();

    use_effect(use_reactive((&input,), move |(input,)| {
        match audit(&input, diagnostics.lookup()) {
            Ok(warnings) => report(&warnings),
            Err(e) => debug!("Skipping alert dialog accessibility audit: {}", e),
        }
    }));

    rsx! {}
}
