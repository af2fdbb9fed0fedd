//! Unique element ids

use std::sync::atomic::{AtomicU64, Ordering};

/// Counter shared by every id generated in this process
static ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Generate a process-unique id of the form `{prefix}-{n}`.
pub fn next_id(prefix: &str) -> String {
    let id = ID_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{}-{}", prefix, id)
}

/// Ids linking one alert dialog's content to its title and description.
///
/// Generated once when the dialog root mounts and kept for the lifetime of
/// that instance, so re-renders never change them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DialogIds {
    pub title_id: String,
    pub description_id: String,
}

impl DialogIds {
    pub fn generate() -> Self {
        Self {
            title_id: next_id("alert-dialog-title"),
            description_id: next_id("alert-dialog-description"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_id_uses_prefix() {
        let id = next_id("dialog-content");
        assert!(id.starts_with("dialog-content-"));
    }

    #[test]
    fn test_generated_ids_are_non_empty_and_distinct() {
        let ids = DialogIds::generate();
        assert!(!ids.title_id.is_empty());
        assert!(!ids.description_id.is_empty());
        assert_ne!(ids.title_id, ids.description_id);
    }

    #[test]
    fn test_instances_never_share_ids() {
        let first = DialogIds::generate();
        let second = DialogIds::generate();
        let all = [
            &first.title_id,
            &first.description_id,
            &second.title_id,
            &second.description_id,
        ];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_ids_unique_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| (0..100).map(|_| next_id("t")).collect::<Vec<_>>()))
            .collect();
        let mut all: Vec<String> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        let total = all.len();
        all.sort();
        all.dedup();
        assert_eq!(all.len(), total);
    }
}
