use std::rc::Rc;

use alert_dialog_common::{
    dispatch_with_default, open_auto_focus_handler, resolve_naming, AuditInput, CancelFocus,
    DialogEvent, DialogEventKind, DialogIds, Dismissal, FocusOptions, FocusTarget,
    NamingOverrides,
};
use dioxus::prelude::*;
use dioxus_primitives::dialog;

use crate::attributes::{attribute, merge, strip, take_text};
use crate::components::alert_dialog::root::AlertDialogState;
use crate::components::alert_dialog::warnings::AccessibilityWarnings;
use crate::diagnostics::use_diagnostics;
use crate::dom::MountedFocus;
use crate::events::forward_dialog;

/// Where the cancel control of the surrounding content hands over its
/// element
#[derive(Clone, Default)]
pub struct CancelTarget {
    pub focus: CancelFocus<MountedFocus>,
}

/// Content region of an alert dialog.
///
/// Rendered inside the `dioxus_primitives` dialog shell, which supplies the
/// backdrop and only mounts the content while the dialog is open.
///
/// `aria_label`, `aria_labelledby` and `aria_describedby` replace the links
/// to the dialog's own title and description; an `aria_label` suppresses
/// `aria-labelledby` entirely. `id` and `role` are always set by the
/// component and dropped if passed.
#[component]
pub fn AlertDialogContent(
    /// Fired when the content mounts; preventing it keeps focus where it is
    #[props(default)]
    on_open_auto_focus: Option<EventHandler<DialogEvent>>,
    /// Fired on Escape; preventing it keeps the dialog open
    #[props(default)]
    on_escape_key_down: Option<EventHandler<DialogEvent>>,
    /// Fired on a click outside the content, which never closes the dialog
    #[props(default)]
    on_interact_outside: Option<EventHandler<DialogEvent>>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let state = use_context::<AlertDialogState>();
    let ids = use_context::<DialogIds>();
    let diagnostics = use_diagnostics();
    let target = use_context_provider(CancelTarget::default);
    let dismissal = use_hook(|| Rc::new(Dismissal::new()));
    let shell_open = use_memo(move || Some(state.is_open()));

    let mut attributes = attributes;
    let overrides = NamingOverrides {
        aria_label: take_text(&mut attributes, "aria-label"),
        aria_labelledby: take_text(&mut attributes, "aria-labelledby"),
        aria_describedby: take_text(&mut attributes, "aria-describedby"),
    };
    strip(&mut attributes, &["id", "role"]);

    let naming = resolve_naming(&overrides, &ids);
    let mut owned = Vec::new();
    if let Some(label) = naming.label {
        owned.push(attribute("aria-label", label));
    }
    if let Some(labelled_by) = naming.labelled_by {
        owned.push(attribute("aria-labelledby", labelled_by));
    }
    if let Some(described_by) = naming.described_by {
        owned.push(attribute("aria-describedby", described_by));
    }
    let attributes = merge(owned, attributes);

    let audit_input = AuditInput {
        title_id: ids.title_id.clone(),
        description_id: ids.description_id.clone(),
        aria_label: overrides.aria_label,
        aria_labelledby: overrides.aria_labelledby,
        aria_describedby: overrides.aria_describedby,
    };

    let mut open_auto_focus = open_auto_focus_handler(
        on_open_auto_focus.map(forward_dialog),
        target.focus.clone(),
    );
    let handle_mounted = move |event: MountedEvent| {
        let content = MountedFocus::new(event.data());
        dispatch_with_default(
            &DialogEvent::new(DialogEventKind::OpenAutoFocus),
            |event| open_auto_focus(event),
            || content.focus(FocusOptions::default()),
        );
    };

    let escape = dismissal.clone();
    let handle_keydown = move |event: KeyboardEvent| {
        escape.key_down(
            event.key() == Key::Escape,
            |event| {
                if let Some(ref handler) = on_escape_key_down {
                    handler.call(event.clone());
                }
            },
            || state.set_open(false),
        );
    };

    // The shell asks to close on backdrop clicks and on its own Escape handling
    let handle_open_change = move |open: bool| {
        if open {
            state.set_open(true);
            return;
        }
        dismissal.close_requested(
            |event| {
                if let Some(ref handler) = on_interact_outside {
                    handler.call(event.clone());
                }
            },
            || state.set_open(false),
        );
    };

    rsx! {
        dialog::DialogRoot {
            open: shell_open,
            on_open_change: handle_open_change,
            attributes: state.overlay_attributes(),
            div {
                role: "alertdialog",
                aria_modal: "true",
                tabindex: "-1",
                "data-state": "open",
                onclick: move |event: MouseEvent| event.stop_propagation(),
                onmounted: handle_mounted,
                onkeydown: handle_keydown,
                ..attributes,
                if diagnostics.warnings_enabled() {
                    AccessibilityWarnings { input: audit_input }
                }
                {children}
            }
        }
    }
}
