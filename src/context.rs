//! Context expansion for hierarchical shortcut contexts
//!
//! A context key names a feature area whose shortcut set should be active.
//! Keys can be hierarchical (`"facility:patient:home"`) and can combine
//! several hierarchies (`"facility:patient & billing:invoice"`); expansion
//! yields every ancestor prefix, most general first, so that a specific
//! screen inherits (and can override) the bindings of its parents.

/// Expand a context key into the flat context names whose shortcut sets
/// should be merged, using `:` as the hierarchy separator.
///
/// ```
/// use keychord::context::expand_context;
///
/// assert_eq!(
///     expand_context("facility:patient:home"),
///     vec!["facility", "facility:patient", "facility:patient:home"],
/// );
/// ```
pub fn expand_context(context_key: &str) -> Vec<String> {
    expand_context_with(context_key, ':')
}

/// Expand a context key with a custom hierarchy separator.
///
/// Runs of the separator collapse, leading/trailing separators are ignored,
/// and duplicates are dropped across `&`-joined branches while preserving
/// first-seen order. Empty or whitespace-only input expands to nothing.
pub fn expand_context_with(context_key: &str, separator: char) -> Vec<String> {
    let trimmed = context_key.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    let mut expanded: Vec<String> = Vec::new();

    for branch in trimmed.split('&') {
        let branch = branch.trim();
        if branch.is_empty() {
            continue;
        }

        // Empty tokens (from doubled or boundary separators) collapse away.
        let mut path = String::new();
        for token in branch.split(separator).filter(|t| !t.is_empty()) {
            if !path.is_empty() {
                path.push(separator);
            }
            path.push_str(token);

            if !expanded.iter().any(|seen| seen == &path) {
                expanded.push(path.clone());
            }
        }
    }

    expanded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_level() {
        assert_eq!(expand_context("facility"), vec!["facility"]);
    }

    #[test]
    fn test_hierarchy() {
        assert_eq!(
            expand_context("facility:patient:home"),
            vec!["facility", "facility:patient", "facility:patient:home"]
        );
    }

    #[test]
    fn test_multiple_branches() {
        assert_eq!(
            expand_context("facility:patient & billing:invoice"),
            vec!["facility", "facility:patient", "billing", "billing:invoice"]
        );
    }

    #[test]
    fn test_branches_deduplicate() {
        assert_eq!(
            expand_context("facility:patient & facility:billing"),
            vec!["facility", "facility:patient", "facility:billing"]
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(expand_context(""), Vec::<String>::new());
        assert_eq!(expand_context("   "), Vec::<String>::new());
    }

    #[test]
    fn test_separator_collapsing() {
        assert_eq!(expand_context("a::b:"), vec!["a", "a:b"]);
        assert_eq!(expand_context(":a:b"), vec!["a", "a:b"]);
        assert_eq!(expand_context(":::"), Vec::<String>::new());
    }

    #[test]
    fn test_empty_branches_dropped() {
        assert_eq!(expand_context("a & & b"), vec!["a", "b"]);
    }

    #[test]
    fn test_custom_separator() {
        assert_eq!(
            expand_context_with("a.b.c", '.'),
            vec!["a", "a.b", "a.b.c"]
        );
    }

    #[test]
    fn test_output_length_matches_token_count() {
        // One entry per token per branch, when nothing deduplicates.
        let expanded = expand_context("a:b:c & d:e");
        assert_eq!(expanded.len(), 5);
        assert_eq!(expanded.iter().collect::<std::collections::HashSet<_>>().len(), 5);
    }

    #[test]
    fn test_each_entry_prefixes_the_next_within_branch() {
        let expanded = expand_context("a:b:c");
        for pair in expanded.windows(2) {
            assert!(pair[1].starts_with(&format!("{}:", pair[0])));
        }
    }
}
