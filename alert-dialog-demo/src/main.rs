//! alert-dialog demo - Web page exercising the alert dialog
//!
//! Renders a few dialogs side by side. The second one has no description,
//! so with warnings enabled the browser console shows the accessibility
//! audit at work.

use alert_dialog_ui::{
    AlertDialogAction, AlertDialogCancel, AlertDialogContent, AlertDialogDescription,
    AlertDialogOverlay, AlertDialogRoot, AlertDialogTitle, AlertDialogTrigger, DialogEvent,
    Diagnostics, DiagnosticsConfig, Preventable,
};
use dioxus::prelude::*;
use tracing::{debug, info, Level};

fn configure_logging() {
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    if let Err(e) = dioxus::logger::init(level) {
        eprintln!("Failed to initialize logging: {}", e);
    }
}

#[component]
fn App() -> Element {
    use_context_provider(|| Diagnostics::new(DiagnosticsConfig::from_env()));

    rsx! {
        main { class: "demo",
            h1 { "Alert dialog" }
            DeleteAlbumDialog {}
            LabelOnlyDialog {}
            StayOnTriggerDialog {}
        }
    }
}

/// Controlled dialog with a cancel and a destructive action
#[component]
fn DeleteAlbumDialog() -> Element {
    let mut open = use_signal(|| false);
    let mut deleted = use_signal(|| false);
    let controlled = use_memo(move || Some(open()));

    rsx! {
        section {
            h2 { "Delete album" }
            if deleted() {
                p { "Album deleted." }
            }
            AlertDialogRoot {
                open: controlled,
                on_open_change: move |value: bool| open.set(value),
                AlertDialogTrigger { class: "button danger", "Delete album" }
                AlertDialogOverlay { class: "overlay" }
                AlertDialogContent {
                    class: "panel",
                    on_escape_key_down: move |_: DialogEvent| debug!("Delete album dialog dismissed with Escape"),
                    AlertDialogTitle { "Delete album?" }
                    AlertDialogDescription {
                        "Every release of this album will be removed from the library."
                    }
                    div { class: "actions",
                        AlertDialogCancel { class: "button", "Keep it" }
                        AlertDialogAction {
                            class: "button danger",
                            on_click: move |_| {
                                info!("Album deleted");
                                deleted.set(true);
                            },
                            "Delete"
                        }
                    }
                }
            }
        }
    }
}

/// Named through `aria_label` with no description, which the audit reports
#[component]
fn LabelOnlyDialog() -> Element {
    rsx! {
        section {
            h2 { "Label only" }
            AlertDialogRoot {
                AlertDialogTrigger { class: "button", "Sign out" }
                AlertDialogOverlay { class: "overlay" }
                AlertDialogContent { class: "panel", aria_label: "Sign out",
                    p { "You will need to sign in again to sync your library." }
                    div { class: "actions",
                        AlertDialogCancel { class: "button", "Stay signed in" }
                        AlertDialogAction { class: "button", "Sign out" }
                    }
                }
            }
        }
    }
}

/// Caller keeps focus where it was by preventing the open auto-focus
#[component]
fn StayOnTriggerDialog() -> Element {
    rsx! {
        section {
            h2 { "Custom open focus" }
            AlertDialogRoot {
                AlertDialogTrigger { class: "button", "Clear queue" }
                AlertDialogOverlay { class: "overlay" }
                AlertDialogContent {
                    class: "panel",
                    on_open_auto_focus: move |event: DialogEvent| event.prevent_default(),
                    AlertDialogTitle { "Clear the queue?" }
                    AlertDialogDescription { "Playback stops after the current track." }
                    div { class: "actions",
                        AlertDialogCancel { class: "button", "Cancel" }
                        AlertDialogAction { class: "button", "Clear" }
                    }
                }
            }
        }
    }
}

fn main() {
    configure_logging();
    dioxus::launch(App);
}
