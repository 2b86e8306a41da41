//! Categorization of enabled shortcuts into dispatch buckets
//!
//! The engine never scans the raw entry list at dispatch time; it works off
//! a [`CategorizedShortcuts`] table rebuilt whenever the entry list,
//! condition set or active sub-context changes.

use std::collections::HashMap;

use tracing::debug;

use crate::condition::{evaluate_condition, Conditions};
use crate::shortcut::ShortcutEntry;

/// The enabled shortcut set, partitioned by key shape.
///
/// Every entry lands in exactly one bucket, chosen syntactically: a key
/// containing a space is a prefix chord, a key containing `+` (and no
/// space) is a modifier combo, anything else is a direct key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategorizedShortcuts {
    /// Lowercase single key → entry
    pub direct: HashMap<String, ShortcutEntry>,
    /// Lowercase modifier-combo strings with their entries, in merge
    /// order. This bucket is scanned with a predicate at dispatch time
    /// rather than looked up by key, so the order matters: distinct
    /// combos can match the same event (`"cmd+k"` and `"meta+k"`), and
    /// the later-merged one must win.
    pub modified: Vec<(String, ShortcutEntry)>,
    /// Lowercase prefix token → lowercase suffix token → entry
    pub prefix_groups: HashMap<String, HashMap<String, ShortcutEntry>>,
}

impl CategorizedShortcuts {
    pub fn is_empty(&self) -> bool {
        self.direct.is_empty() && self.modified.is_empty() && self.prefix_groups.is_empty()
    }

    /// Look up a modifier-combo entry by its lowercase combo string
    pub fn modified_entry(&self, combo: &str) -> Option<&ShortcutEntry> {
        self.modified
            .iter()
            .find(|(existing, _)| existing == combo)
            .map(|(_, entry)| entry)
    }
}

/// Partition `entries` into dispatch buckets.
///
/// Entries are dropped when their `when` expression evaluates false, or
/// when they carry a `sub_context` that is not the active one (an entry
/// with a `sub_context` is never visible without an active sub-context).
/// Later entries overwrite earlier ones that land on the same bucket key;
/// that last-write-wins rule is how a more specific context overrides a
/// more general one.
pub fn categorize(
    entries: &[ShortcutEntry],
    conditions: &Conditions,
    active_sub_context: Option<&str>,
) -> CategorizedShortcuts {
    let mut table = CategorizedShortcuts::default();

    for entry in entries {
        if !evaluate_condition(&entry.when, conditions) {
            continue;
        }

        if let Some(sub_context) = &entry.sub_context {
            if active_sub_context != Some(sub_context.as_str()) {
                continue;
            }
        }

        let key = entry.key.to_lowercase();

        if key.contains(' ') {
            let tokens: Vec<&str> = key.split(' ').collect();
            if let [prefix, suffix] = tokens[..] {
                table
                    .prefix_groups
                    .entry(prefix.to_string())
                    .or_default()
                    .insert(suffix.to_string(), entry.clone());
            } else {
                // Only two-token chords are supported; anything else is
                // excluded rather than treated as an error.
                debug!(key = %entry.key, action = %entry.action, "ignoring malformed chord key");
            }
        } else if key.contains('+') {
            // Rebinding a combo moves it to the end so it also wins any
            // overlap with combos merged before it.
            table.modified.retain(|(existing, _)| existing != &key);
            table.modified.push((key, entry.clone()));
        } else {
            table.direct.insert(key, entry.clone());
        }
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(key: &str, action: &str) -> ShortcutEntry {
        ShortcutEntry::new(key, action)
    }

    #[test]
    fn test_buckets_are_disjoint() {
        let entries = vec![entry("g p", "chord"), entry("ctrl+k", "combo"), entry("a", "direct")];
        let table = categorize(&entries, &Conditions::new(), None);

        assert_eq!(table.prefix_groups["g"]["p"].action, "chord");
        assert_eq!(table.modified_entry("ctrl+k").unwrap().action, "combo");
        assert_eq!(table.direct["a"].action, "direct");

        assert_eq!(table.direct.len(), 1);
        assert_eq!(table.modified.len(), 1);
        assert_eq!(table.prefix_groups.len(), 1);
    }

    #[test]
    fn test_keys_are_lowercased() {
        let entries = vec![entry("Ctrl+K", "combo"), entry("G P", "chord")];
        let table = categorize(&entries, &Conditions::new(), None);

        assert!(table.modified_entry("ctrl+k").is_some());
        assert_eq!(table.prefix_groups["g"]["p"].action, "chord");
    }

    #[test]
    fn test_disabled_entries_excluded() {
        let entries = vec![
            entry("a", "enabled"),
            ShortcutEntry::new("b", "disabled").when("canEdit"),
        ];
        let table = categorize(&entries, &Conditions::new(), None);

        assert!(table.direct.contains_key("a"));
        assert!(!table.direct.contains_key("b"));
    }

    #[test]
    fn test_malformed_chord_keys_ignored() {
        let entries = vec![entry("g p x", "three"), entry("g  p", "doubled-space")];
        let table = categorize(&entries, &Conditions::new(), None);
        assert!(table.is_empty());
    }

    #[test]
    fn test_sub_context_must_match() {
        let entries = vec![
            ShortcutEntry::new("q", "questionnaires").sub_context("timeline"),
            entry("a", "unrestricted"),
        ];

        let table = categorize(&entries, &Conditions::new(), Some("timeline"));
        assert!(table.direct.contains_key("q"));
        assert!(table.direct.contains_key("a"));

        let table = categorize(&entries, &Conditions::new(), Some("billing"));
        assert!(!table.direct.contains_key("q"));
        assert!(table.direct.contains_key("a"));
    }

    #[test]
    fn sub_context_requires_active_sub_context() {
        let entries = vec![ShortcutEntry::new("q", "questionnaires").sub_context("timeline")];
        let table = categorize(&entries, &Conditions::new(), None);
        assert!(table.is_empty());
    }

    #[test]
    fn test_last_write_wins() {
        let entries = vec![entry("a", "general"), entry("a", "specific")];
        let table = categorize(&entries, &Conditions::new(), None);
        assert_eq!(table.direct["a"].action, "specific");
    }

    #[test]
    fn test_combo_rebinding_replaces_and_moves_last() {
        let entries = vec![
            entry("ctrl+k", "general"),
            entry("meta+k", "other"),
            entry("ctrl+k", "specific"),
        ];
        let table = categorize(&entries, &Conditions::new(), None);

        assert_eq!(table.modified.len(), 2);
        assert_eq!(table.modified_entry("ctrl+k").unwrap().action, "specific");
        assert_eq!(table.modified.last().unwrap().1.action, "specific");
    }

    #[test]
    fn test_recategorization_is_idempotent() {
        let entries = vec![
            entry("g p", "chord"),
            entry("ctrl+k", "combo"),
            ShortcutEntry::new("e", "edit").when("canEdit"),
        ];
        let conditions = Conditions::new().with("canEdit", true);

        let first = categorize(&entries, &conditions, Some("timeline"));
        let second = categorize(&entries, &conditions, Some("timeline"));
        assert_eq!(first, second);
    }
}
