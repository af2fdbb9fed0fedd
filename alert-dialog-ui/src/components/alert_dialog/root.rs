use alert_dialog_common::DialogIds;
use dioxus::prelude::*;

/// Open state of one alert dialog, shared with its parts
#[derive(Clone, Copy)]
pub struct AlertDialogState {
    open: Memo<bool>,
    set_open: Callback<bool>,
    overlay: Signal<Vec<Attribute>>,
}

impl AlertDialogState {
    pub fn is_open(&self) -> bool {
        self.open.cloned()
    }

    pub fn set_open(&self, open: bool) {
        self.set_open.call(open);
    }

    /// Attributes for the backdrop, as last given to `AlertDialogOverlay`
    pub fn overlay_attributes(&self) -> Vec<Attribute> {
        self.overlay.cloned()
    }

    pub(crate) fn set_overlay_attributes(&mut self, attributes: Vec<Attribute>) {
        self.overlay.set(attributes);
    }
}

/// Root of one alert dialog.
///
/// Owns the open state, controlled through `open` or kept internally from
/// `default_open`, and generates the title and description ids once per
/// mount. Every requested change is reported through `on_open_change`.
#[component]
pub fn AlertDialogRoot(
    /// Controlled open state; `None` leaves the root in charge
    #[props(default)]
    open: ReadSignal<Option<bool>>,
    /// Initial state when uncontrolled
    #[props(default)]
    default_open: bool,
    /// Called with every requested open state change
    #[props(default)]
    on_open_change: Option<EventHandler<bool>>,
    children: Element,
) -> Element {
    let mut uncontrolled = use_signal(|| default_open);
    let is_open = use_memo(move || open().unwrap_or_else(|| uncontrolled()));
    let overlay = use_signal(Vec::new);

    let set_open = use_callback(move |value: bool| {
        if open.peek().is_none() {
            uncontrolled.set(value);
        }
        if let Some(ref handler) = on_open_change {
            handler.call(value);
        }
    });

    use_context_provider(|| AlertDialogState {
        open: is_open,
        set_open,
        overlay,
    });
    use_context_provider(DialogIds::generate);

    rsx! {
        {children}
    }
}
