//! Element selection for components whose tag callers may change
//!
//! ```ignore
//! AlertDialogTitle { tag: Tag::H3, "Delete album?" }
//! ```

use dioxus::prelude::*;

/// Element a polymorphic component renders as
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tag {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    P,
    Div,
    Span,
    Section,
    Header,
    Label,
    Strong,
}

/// Render `tag` with the given attributes and children
pub fn render_tag(tag: Tag, attributes: Vec<Attribute>, children: Element) -> Element {
    match tag {
        Tag::H1 => rsx! { h1 { ..attributes, {children} } },
        Tag::H2 => rsx! { h2 { ..attributes, {children} } },
        Tag::H3 => rsx! { h3 { ..attributes, {children} } },
        Tag::H4 => rsx! { h4 { ..attributes, {children} } },
        Tag::H5 => rsx! { h5 { ..attributes, {children} } },
        Tag::H6 => rsx! { h6 { ..attributes, {children} } },
        Tag::P => rsx! { p { ..attributes, {children} } },
        Tag::Div => rsx! { div { ..attributes, {children} } },
        Tag::Span => rsx! { span { ..attributes, {children} } },
        Tag::Section => rsx! { section { ..attributes, {children} } },
        Tag::Header => rsx! { header { ..attributes, {children} } },
        Tag::Label => rsx! { label { ..attributes, {children} } },
        Tag::Strong => rsx! { strong { ..attributes, {children} } },
    }
}
