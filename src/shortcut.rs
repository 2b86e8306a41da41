//! Shortcut entries and the declarative shortcut table
//!
//! The shortcut table is a static configuration resource: a map from
//! context name to an ordered list of entries, loaded once at startup and
//! immutable at runtime. See [`crate::config`] for loading it from JSON or
//! YAML.

use std::collections::HashMap;

use serde::Deserialize;

fn default_when() -> String {
    "always".to_string()
}

/// A single declarative shortcut
///
/// `key` is a single character (`"a"`), a modifier combo (`"ctrl+k"`) or a
/// two-token prefix chord (`"g p"`). `when` is a condition expression (see
/// [`crate::condition`]) or the literal `"always"`. An entry with a
/// `sub_context` is visible only while that sub-context is active.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortcutEntry {
    pub key: String,
    pub action: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_when")]
    pub when: String,
    #[serde(default)]
    pub sub_context: Option<String>,
}

impl ShortcutEntry {
    /// Create an always-enabled entry
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
            description: String::new(),
            when: default_when(),
            sub_context: None,
        }
    }

    /// Set the description (builder pattern)
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the enablement expression (builder pattern)
    pub fn when(mut self, when: impl Into<String>) -> Self {
        self.when = when.into();
        self
    }

    /// Restrict the entry to a sub-context (builder pattern)
    pub fn sub_context(mut self, sub_context: impl Into<String>) -> Self {
        self.sub_context = Some(sub_context.into());
        self
    }
}

/// The full shortcut table: context name → ordered entries
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct ShortcutsConfig(HashMap<String, Vec<ShortcutEntry>>);

impl ShortcutsConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a context's entry list
    pub fn insert_context(&mut self, name: impl Into<String>, entries: Vec<ShortcutEntry>) {
        self.0.insert(name.into(), entries);
    }

    /// Look up the entries for a flat context name
    pub fn context(&self, name: &str) -> Option<&[ShortcutEntry]> {
        self.0.get(name).map(Vec::as_slice)
    }

    /// Iterate over all context names
    pub fn context_names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Merge the entries of the given flat context names, in order.
    ///
    /// Unknown names are skipped. Later contexts come later in the result,
    /// which is what lets them override earlier bindings during
    /// categorization (last write wins).
    pub fn collect(&self, names: &[String]) -> Vec<ShortcutEntry> {
        let mut merged = Vec::new();
        for name in names {
            if let Some(entries) = self.0.get(name) {
                merged.extend(entries.iter().cloned());
            }
        }
        merged
    }
}
