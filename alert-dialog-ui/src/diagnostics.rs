//! Accessibility diagnostics shared through context

use std::rc::Rc;

use alert_dialog_common::{DiagnosticsConfig, ElementLookup};
use dioxus::prelude::*;

use crate::dom::DocumentLookup;

/// Diagnostics settings for every alert dialog below the provider.
///
/// Without a provider, warnings follow the build profile and elements are
/// looked up in the live document.
///
/// ```ignore
/// use_context_provider(|| Diagnostics::new(DiagnosticsConfig::from_env()));
/// ```
#[derive(Clone)]
pub struct Diagnostics {
    pub config: DiagnosticsConfig,
    lookup: Rc<dyn ElementLookup>,
}

impl Diagnostics {
    pub fn new(config: DiagnosticsConfig) -> Self {
        Self {
            config,
            lookup: Rc::new(DocumentLookup),
        }
    }

    /// Replace the element lookup used by the audit
    pub fn with_lookup(mut self, lookup: impl ElementLookup + 'static) -> Self {
        self.lookup = Rc::new(lookup);
        self
    }

    pub fn lookup(&self) -> &dyn ElementLookup {
        self.lookup.as_ref()
    }

    pub fn warnings_enabled(&self) -> bool {
        self.config.warnings_enabled()
    }
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::new(DiagnosticsConfig::default())
    }
}

/// Diagnostics from context, or the defaults
pub fn use_diagnostics() -> Diagnostics {
    try_use_context::<Diagnostics>().unwrap_or_default()
}
