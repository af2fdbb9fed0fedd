use alert_dialog_common::{compose_handlers, DialogIds, SharedSlot};
use dioxus::prelude::*;
use tracing::debug;

use crate::attributes::{attribute, merge, strip};
use crate::components::alert_dialog::content::CancelTarget;
use crate::components::alert_dialog::root::AlertDialogState;
use crate::components::button::ChromelessButton;
use crate::components::tag::{render_tag, Tag};
use crate::dom::MountedFocus;
use crate::events::{forward, ElementEvent};

/// Button that opens the dialog.
///
/// Carries `aria-haspopup`, `aria-expanded` and `data-state` for the
/// current open state. A caller's `on_click` runs first and can keep the
/// dialog from toggling by preventing the event.
#[component]
pub fn AlertDialogTrigger(
    #[props(default)] on_click: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let state = use_context::<AlertDialogState>();
    let is_open = state.is_open();

    let owned = vec![
        attribute("aria-haspopup", "dialog"),
        attribute("aria-expanded", if is_open { "true" } else { "false" }),
        attribute("data-state", if is_open { "open" } else { "closed" }),
    ];

    let mut handle_click = compose_handlers::<ElementEvent<MouseData>, _, _>(
        on_click.map(forward),
        move |_: &ElementEvent<MouseData>| state.set_open(!state.is_open()),
        true,
    );

    rsx! {
        ChromelessButton {
            on_click: move |e: MouseEvent| handle_click(&ElementEvent(e)),
            attributes: merge(owned, attributes),
            {children}
        }
    }
}

/// Backdrop behind the content.
///
/// The dialog shell renders the backdrop element itself; the attributes
/// given here (typically a `class`) are applied to it. Renders nothing of
/// its own.
#[component]
pub fn AlertDialogOverlay(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let mut state = use_context::<AlertDialogState>();

    use_effect(use_reactive((&attributes,), move |(attributes,)| {
        state.set_overlay_attributes(attributes);
    }));

    rsx! {}
}

/// Heading that names the dialog; an `<h2>` unless `tag` says otherwise
#[component]
pub fn AlertDialogTitle(
    #[props(default = Tag::H2)] tag: Tag,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let ids = use_context::<DialogIds>();
    let mut attributes = attributes;
    strip(&mut attributes, &["id"]);
    render_tag(
        tag,
        merge(vec![attribute("id", ids.title_id)], attributes),
        children,
    )
}

/// Text that describes the dialog; a `<p>` unless `tag` says otherwise
#[component]
pub fn AlertDialogDescription(
    #[props(default = Tag::P)] tag: Tag,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let ids = use_context::<DialogIds>();
    let mut attributes = attributes;
    strip(&mut attributes, &["id"]);
    render_tag(
        tag,
        merge(vec![attribute("id", ids.description_id)], attributes),
        children,
    )
}

/// Close control that receives focus when the dialog opens.
///
/// It announces itself to the surrounding content on first render, so the
/// content can hold the open focus for it even if the content mounts first.
/// `on_mounted` still receives the mount event after the hand-over.
#[component]
pub fn AlertDialogCancel(
    #[props(default)] on_mounted: Option<EventHandler<MountedEvent>>,
    #[props(default)] on_click: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let target = try_use_context::<CancelTarget>();
    let own = use_hook(|| {
        if let Some(ref target) = target {
            target.focus.declare();
        }
        SharedSlot::<MountedFocus>::new()
    });

    use_drop({
        let target = target.clone();
        let own = own.clone();
        move || {
            let Some(target) = target else {
                return;
            };
            let mine = own.take();
            target.focus.withdraw(|held| {
                mine.as_ref()
                    .is_some_and(|mine| held.same_element(mine))
            });
        }
    });

    let handle_mounted = move |event: MountedEvent| {
        let element = MountedFocus::new(event.data());
        own.set(element.clone());
        match target {
            Some(ref target) => target.focus.register(element),
            None => debug!("AlertDialogCancel mounted outside AlertDialogContent"),
        }
        if let Some(ref handler) = on_mounted {
            handler.call(event);
        }
    };

    rsx! {
        CloseButton {
            on_mounted: handle_mounted,
            on_click,
            attributes,
            {children}
        }
    }
}

/// Button confirming the dialog's action.
///
/// Closes the dialog after the caller's `on_click` runs, unless that handler
/// prevents the event.
#[component]
pub fn AlertDialogAction(
    #[props(default)] on_mounted: Option<EventHandler<MountedEvent>>,
    #[props(default)] on_click: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    rsx! {
        CloseButton { on_mounted, on_click, attributes, {children} }
    }
}

/// Button closing the dialog
#[component]
fn CloseButton(
    #[props(default)] on_mounted: Option<EventHandler<MountedEvent>>,
    #[props(default)] on_click: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let state = use_context::<AlertDialogState>();

    let mut handle_click = compose_handlers::<ElementEvent<MouseData>, _, _>(
        on_click.map(forward),
        move |_: &ElementEvent<MouseData>| state.set_open(false),
        true,
    );

    rsx! {
        ChromelessButton {
            on_mounted,
            on_click: move |e: MouseEvent| handle_click(&ElementEvent(e)),
            attributes,
            {children}
        }
    }
}
