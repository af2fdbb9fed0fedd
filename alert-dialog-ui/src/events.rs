//! Bridges Dioxus element events into `compose_handlers`

use alert_dialog_common::Preventable;
use dioxus::prelude::*;

/// A Dioxus event seen through [`Preventable`]
pub(crate) struct ElementEvent<T: 'static>(pub Event<T>);

impl<T: 'static> Preventable for ElementEvent<T> {
    fn prevent_default(&self) {
        self.0.prevent_default();
    }

    fn is_default_prevented(&self) -> bool {
        !self.0.default_action_enabled()
    }
}

/// Adapt a caller's element event handler for composition
pub(crate) fn forward<T: 'static>(
    handler: EventHandler<Event<T>>,
) -> impl FnMut(&ElementEvent<T>) {
    move |event: &ElementEvent<T>| handler.call(event.0.clone())
}

/// Adapt a caller's dialog event handler for composition
pub(crate) fn forward_dialog<E: Clone + 'static>(handler: EventHandler<E>) -> impl FnMut(&E) {
    move |event: &E| handler.call(event.clone())
}
