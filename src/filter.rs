//! Pure filtering of the role catalog by search term
//!
//! Deterministic, side-effect-free substring matching. An empty term returns
//! the full catalog; otherwise an entry matches when any of its title, label,
//! or context contains the term case-insensitively. Result order always
//! follows catalog order; there is no ranking.

use crate::catalog::{Catalog, RoleDefinition};

/// Filter the catalog, returning matching roles in catalog order
#[must_use]
pub fn filter<'a>(catalog: &'a Catalog, term: &str) -> Vec<&'a RoleDefinition> {
    filter_indices(catalog, term)
        .into_iter()
        .filter_map(|idx| catalog.get(idx))
        .collect()
}

/// Filter the catalog, returning matching catalog positions in order
///
/// Display layers keep positions rather than references so the cursor can be
/// mapped back to the catalog without borrowing it.
#[must_use]
pub fn filter_indices(catalog: &Catalog, term: &str) -> Vec<usize> {
    if term.is_empty() {
        return (0..catalog.len()).collect();
    }

    let needle = term.to_lowercase();
    catalog
        .iter()
        .enumerate()
        .filter(|(_, role)| matches_term(role, &needle))
        .map(|(idx, _)| idx)
        .collect()
}

/// Check a single role against a pre-lowercased needle
fn matches_term(role: &RoleDefinition, needle: &str) -> bool {
    role.title.to_lowercase().contains(needle)
        || role.label.to_lowercase().contains(needle)
        || role.context.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_term_returns_full_catalog() {
        let catalog = Catalog::builtin();
        let result = filter(&catalog, "");

        assert_eq!(result.len(), catalog.len());
        for (got, expected) in result.iter().zip(catalog.iter()) {
            assert_eq!(*got, expected);
        }
    }

    #[test]
    fn test_sql_matches_db_magician_only() {
        let catalog = Catalog::builtin();
        let result = filter(&catalog, "sql");

        let titles: Vec<&str> = result.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["DB Magician"]);
    }

    #[test]
    fn test_no_match_returns_empty() {
        let catalog = Catalog::builtin();

        assert!(filter(&catalog, "nonexistent").is_empty());
        assert!(filter_indices(&catalog, "nonexistent").is_empty());
    }

    #[test]
    fn test_case_insensitive() {
        let catalog = Catalog::builtin();

        let lower = filter(&catalog, "python");
        let upper = filter(&catalog, "PYTHON");
        assert_eq!(lower, upper);
        assert_eq!(lower[0].title, "Pythonista");
    }

    #[test]
    fn test_matches_via_context() {
        let catalog = Catalog::builtin();

        // "next.js" only appears in the TypeScripter context text
        let result = filter(&catalog, "next.js");
        let titles: Vec<&str> = result.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["TypeScripter"]);
    }

    #[test]
    fn test_preserves_catalog_order() {
        let catalog = Catalog::builtin();

        // "help" appears in every context string
        let indices = filter_indices(&catalog, "help");
        assert_eq!(indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_idempotent() {
        let catalog = Catalog::builtin();

        assert_eq!(filter(&catalog, "script"), filter(&catalog, "script"));
        assert_eq!(filter_indices(&catalog, "script"), filter_indices(&catalog, "script"));
    }

    #[test]
    fn test_substring_not_tokenized() {
        let catalog = Catalog::builtin();

        // Mid-word substring matches: "thonis" is inside "Pythonista"
        let result = filter(&catalog, "thonis");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Pythonista");
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::new(Vec::new());

        assert!(filter(&catalog, "").is_empty());
        assert!(filter(&catalog, "anything").is_empty());
    }
}
