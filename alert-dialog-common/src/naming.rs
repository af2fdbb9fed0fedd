//! Accessible name and description resolution for alert dialog content

use crate::ids::DialogIds;

/// Explicit naming props passed to the content by the caller
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NamingOverrides {
    pub aria_label: Option<String>,
    pub aria_labelledby: Option<String>,
    pub aria_describedby: Option<String>,
}

/// Attribute values to render on the content element
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResolvedNaming {
    /// `aria-label`
    pub label: Option<String>,
    /// `aria-labelledby`, never set together with `label`
    pub labelled_by: Option<String>,
    /// `aria-describedby`
    pub described_by: Option<String>,
}

/// Resolve the content's naming attributes.
///
/// An explicit label wins over any id-based linkage. Otherwise
/// `aria_labelledby` is used, falling back to the title id. The description
/// falls back to the description id. Blank overrides count as absent.
pub fn resolve_naming(overrides: &NamingOverrides, ids: &DialogIds) -> ResolvedNaming {
    let label = non_blank(&overrides.aria_label);

    let labelled_by = if label.is_some() {
        None
    } else {
        Some(non_blank(&overrides.aria_labelledby).unwrap_or_else(|| ids.title_id.clone()))
    };

    let described_by =
        non_blank(&overrides.aria_describedby).unwrap_or_else(|| ids.description_id.clone());

    ResolvedNaming {
        label,
        labelled_by,
        described_by: Some(described_by),
    }
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .filter(|v| !v.trim().is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids() -> DialogIds {
        DialogIds {
            title_id: "title-1".into(),
            description_id: "description-2".into(),
        }
    }

    #[test]
    fn test_defaults_link_to_title_and_description() {
        let naming = resolve_naming(&NamingOverrides::default(), &ids());
        assert_eq!(naming.label, None);
        assert_eq!(naming.labelled_by.as_deref(), Some("title-1"));
        assert_eq!(naming.described_by.as_deref(), Some("description-2"));
    }

    #[test]
    fn test_explicit_label_suppresses_labelledby() {
        let overrides = NamingOverrides {
            aria_label: Some("Delete album".into()),
            ..Default::default()
        };
        let naming = resolve_naming(&overrides, &ids());
        assert_eq!(naming.label.as_deref(), Some("Delete album"));
        assert_eq!(naming.labelled_by, None);
    }

    #[test]
    fn test_label_wins_over_explicit_labelledby() {
        let overrides = NamingOverrides {
            aria_label: Some("Delete album".into()),
            aria_labelledby: Some("other-id".into()),
            ..Default::default()
        };
        let naming = resolve_naming(&overrides, &ids());
        assert_eq!(naming.label.as_deref(), Some("Delete album"));
        assert_eq!(naming.labelled_by, None);
    }

    #[test]
    fn test_explicit_labelledby_replaces_title_id() {
        let overrides = NamingOverrides {
            aria_labelledby: Some("other-id".into()),
            ..Default::default()
        };
        let naming = resolve_naming(&overrides, &ids());
        assert_eq!(naming.labelled_by.as_deref(), Some("other-id"));
    }

    #[test]
    fn test_explicit_describedby_replaces_description_id() {
        let overrides = NamingOverrides {
            aria_describedby: Some("details".into()),
            ..Default::default()
        };
        let naming = resolve_naming(&overrides, &ids());
        assert_eq!(naming.described_by.as_deref(), Some("details"));
    }

    #[test]
    fn test_blank_label_is_ignored() {
        let overrides = NamingOverrides {
            aria_label: Some("   ".into()),
            ..Default::default()
        };
        let naming = resolve_naming(&overrides, &ids());
        assert_eq!(naming.label, None);
        assert_eq!(naming.labelled_by.as_deref(), Some("title-1"));
    }
}
