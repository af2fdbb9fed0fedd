//! Helpers for spread attribute lists
//!
//! Components that accept `extends = GlobalAttributes` receive the caller's
//! attributes as a `Vec<Attribute>`. These helpers add the attributes a
//! component owns and pull out the ones it interprets itself.

use dioxus::core::{AttributeValue, IntoAttributeValue};
use dioxus::prelude::*;

/// Build a plain (non-namespaced, non-volatile) attribute
pub fn attribute(name: &'static str, value: impl IntoAttributeValue) -> Attribute {
    Attribute::new(name, value, None, false)
}

/// Remove every attribute called `name`, returning the last text value seen
pub fn take_text(attributes: &mut Vec<Attribute>, name: &str) -> Option<String> {
    let mut found = None;
    attributes.retain(|attr| {
        if attr.name != name {
            return true;
        }
        if let AttributeValue::Text(text) = &attr.value {
            found = Some(text.clone());
        }
        false
    });
    found
}

/// Drop attributes the component owns and callers may not override
pub fn strip(attributes: &mut Vec<Attribute>, names: &[&str]) {
    attributes.retain(|attr| !names.contains(&attr.name));
}

/// Owned attributes first, then whatever the caller passed
pub fn merge(owned: Vec<Attribute>, passed: Vec<Attribute>) -> Vec<Attribute> {
    let mut merged = owned;
    merged.extend(passed);
    merged
}
