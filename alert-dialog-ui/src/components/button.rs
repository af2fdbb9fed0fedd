use dioxus::prelude::*;

/// Unstyled `<button type="button">` that forwards its mount and click events
#[component]
pub fn ChromelessButton(
    #[props(default)] disabled: bool,
    #[props(default)] on_mounted: Option<EventHandler<MountedEvent>>,
    #[props(default)] on_click: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    rsx! {
        button {
            r#type: "button",
            disabled,
            aria_disabled: if disabled { Some("true") } else { None },
            onmounted: move |e| {
                if let Some(ref handler) = on_mounted {
                    handler.call(e);
                }
            },
            onclick: move |e| {
                if disabled {
                    return;
                }
                if let Some(ref handler) = on_click {
                    handler.call(e);
                }
            },
            ..attributes,
            {children}
        }
    }
}
