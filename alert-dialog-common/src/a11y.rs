//! Developer-time accessibility audit
//!
//! Checks that an open alert dialog has an accessible name and description
//! that resolve to something rendered. Findings are reported as `tracing`
//! warnings; nothing here fails a render.

use std::fmt;

use thiserror::Error;
use tracing::warn;

/// Failure to inspect the rendered document
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LookupError {
    #[error("no window available")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
}

/// Answers whether an element with a given id is currently rendered
pub trait ElementLookup {
    fn element_exists(&self, id: &str) -> Result<bool, LookupError>;
}

/// Inputs the audit depends on; a change to any of them re-runs it
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuditInput {
    pub title_id: String,
    pub description_id: String,
    pub aria_label: Option<String>,
    pub aria_labelledby: Option<String>,
    pub aria_describedby: Option<String>,
}

/// A missing piece of the dialog's accessible naming
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AccessibilityWarning {
    MissingLabel { title_id: String },
    MissingDescription { description_id: String },
}

impl fmt::Display for AccessibilityWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingLabel { title_id } => write!(
                f,
                "`AlertDialogContent` requires a label for screen reader users. \
                 Render an `AlertDialogTitle`, or pass `aria_label` or `aria_labelledby` \
                 to `AlertDialogContent` (no element with id `{}` found).",
                title_id
            ),
            Self::MissingDescription { description_id } => write!(
                f,
                "`AlertDialogContent` requires a description for screen reader users. \
                 Render an `AlertDialogDescription`, or pass `aria_describedby` \
                 to `AlertDialogContent` (no element with id `{}` found).",
                description_id
            ),
        }
    }
}

/// Audit one open dialog.
///
/// The name is present when an explicit label is set, when `aria_labelledby`
/// points at a rendered element, or when the dialog's own title is rendered.
/// The description is present when `aria_describedby` or the dialog's own
/// description resolves.
pub fn audit(
    input: &AuditInput,
    lookup: &dyn ElementLookup,
) -> Result<Vec<AccessibilityWarning>, LookupError> {
    let mut warnings = Vec::new();

    let has_label = input
        .aria_label
        .as_deref()
        .is_some_and(|label| !label.trim().is_empty())
        || any_resolves(lookup, input.aria_labelledby.as_deref())?
        || lookup.element_exists(&input.title_id)?;
    if !has_label {
        warnings.push(AccessibilityWarning::MissingLabel {
            title_id: input.title_id.clone(),
        });
    }

    let has_description = any_resolves(lookup, input.aria_describedby.as_deref())?
        || lookup.element_exists(&input.description_id)?;
    if !has_description {
        warnings.push(AccessibilityWarning::MissingDescription {
            description_id: input.description_id.clone(),
        });
    }

    Ok(warnings)
}

/// Emit one warning per finding on the `alert_dialog::a11y` target
pub fn report(warnings: &[AccessibilityWarning]) {
    for warning in warnings {
        warn!(target: "alert_dialog::a11y", "{}", warning);
    }
}

/// ARIA id references are whitespace-separated lists; any hit counts
fn any_resolves(lookup: &dyn ElementLookup, ids: Option<&str>) -> Result<bool, LookupError> {
    let Some(ids) = ids else {
        return Ok(false);
    };
    for id in ids.split_whitespace() {
        if lookup.element_exists(id)? {
            return Ok(true);
        }
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::io;
    use std::sync::{Arc, Mutex};

    struct RenderedIds(HashSet<&'static str>);

    impl RenderedIds {
        fn new(ids: &[&'static str]) -> Self {
            Self(ids.iter().copied().collect())
        }
    }

    impl ElementLookup for RenderedIds {
        fn element_exists(&self, id: &str) -> Result<bool, LookupError> {
            Ok(self.0.contains(id))
        }
    }

    struct NoDocument;

    impl ElementLookup for NoDocument {
        fn element_exists(&self, _id: &str) -> Result<bool, LookupError> {
            Err(LookupError::NoDocument)
        }
    }

    fn input() -> AuditInput {
        AuditInput {
            title_id: "t".into(),
            description_id: "d".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_title_and_description_rendered() {
        let warnings = audit(&input(), &RenderedIds::new(&["t", "d"])).unwrap();
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_nothing_rendered_warns_for_both() {
        let warnings = audit(&input(), &RenderedIds::new(&[])).unwrap();
        assert_eq!(
            warnings,
            vec![
                AccessibilityWarning::MissingLabel {
                    title_id: "t".into()
                },
                AccessibilityWarning::MissingDescription {
                    description_id: "d".into()
                },
            ]
        );
    }

    #[test]
    fn test_explicit_label_satisfies_name() {
        let input = AuditInput {
            aria_label: Some("Delete album".into()),
            ..input()
        };
        let warnings = audit(&input, &RenderedIds::new(&["d"])).unwrap();
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_labelledby_must_resolve() {
        let input = AuditInput {
            aria_labelledby: Some("heading".into()),
            ..input()
        };
        let warnings = audit(&input, &RenderedIds::new(&["d"])).unwrap();
        assert_eq!(warnings.len(), 1);
        assert!(matches!(
            warnings[0],
            AccessibilityWarning::MissingLabel { .. }
        ));

        let warnings = audit(&input, &RenderedIds::new(&["heading", "d"])).unwrap();
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_labelledby_list_resolves_on_any_id() {
        let input = AuditInput {
            aria_labelledby: Some("missing heading".into()),
            ..input()
        };
        let warnings = audit(&input, &RenderedIds::new(&["heading", "d"])).unwrap();
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_describedby_resolves_without_description() {
        let input = AuditInput {
            aria_describedby: Some("details".into()),
            ..input()
        };
        let warnings = audit(&input, &RenderedIds::new(&["t", "details"])).unwrap();
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_messages_name_the_missing_piece() {
        let label = AccessibilityWarning::MissingLabel {
            title_id: "t".into(),
        }
        .to_string();
        let description = AccessibilityWarning::MissingDescription {
            description_id: "d".into(),
        }
        .to_string();

        assert!(label.contains("AlertDialogTitle"));
        assert!(label.contains("aria_label"));
        assert!(!label.contains("description"));
        assert!(description.contains("AlertDialogDescription"));
        assert!(description.contains("aria_describedby"));
        assert!(!description.contains("label"));
    }

    #[test]
    fn test_lookup_failure_propagates() {
        assert_eq!(audit(&input(), &NoDocument), Err(LookupError::NoDocument));
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capture_report(warnings: &[AccessibilityWarning]) -> String {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        tracing::subscriber::with_default(subscriber, || report(warnings));
        let bytes = captured.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_report_emits_one_warning_per_finding() {
        let warnings = audit(&input(), &RenderedIds::new(&[])).unwrap();
        let output = capture_report(&warnings);

        assert_eq!(output.lines().filter(|l| l.contains("WARN")).count(), 2);
        assert_eq!(output.lines().filter(|l| l.contains("label")).count(), 1);
        assert_eq!(
            output.lines().filter(|l| l.contains("description")).count(),
            1
        );
    }

    #[test]
    fn test_report_is_silent_when_complete() {
        let warnings = audit(&input(), &RenderedIds::new(&["t", "d"])).unwrap();
        assert!(capture_report(&warnings).is_empty());
    }

    #[test]
    fn test_every_audit_reports_again() {
        let lookup = RenderedIds::new(&["t"]);
        let first = capture_report(&audit(&input(), &lookup).unwrap());
        let second = capture_report(&audit(&input(), &lookup).unwrap());
        assert_eq!(first.lines().count(), 1);
        assert_eq!(second.lines().count(), 1);
    }
}
