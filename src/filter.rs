//! Substring filtering over the catalog.
//!
//! Deliberately not fuzzy: the match is an exact case-insensitive substring
//! test, and results keep catalog order. Returns indices into the catalog so
//! the caller can keep a single source of truth for entry data.

use crate::catalog::Catalog;

/// Return the indices of all catalog entries whose name contains `query`
/// case-insensitively. An empty (or whitespace-only) query matches the whole
/// catalog, preserving order.
pub fn filter(catalog: &Catalog, query: &str) -> Vec<usize> {
    let needle = query.trim();
    if needle.is_empty() {
        return (0..catalog.len()).collect();
    }

    let needle = needle.to_lowercase();
    catalog
        .iter()
        .enumerate()
        .filter(|(_, water)| water.name.to_lowercase().contains(&needle))
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::sample_catalog;

    #[test]
    fn empty_query_is_identity() {
        let catalog = sample_catalog();
        assert_eq!(filter(&catalog, ""), vec![0, 1, 2, 3]);
        assert_eq!(filter(&catalog, "   "), vec![0, 1, 2, 3]);
    }

    #[test]
    fn matches_are_case_insensitive_and_ordered() {
        let catalog = sample_catalog();
        // "see" should hit Neddersee, Großeichsener See and Lüttsee, in
        // catalog order, and skip Kiebitzmoor.
        assert_eq!(filter(&catalog, "see"), vec![0, 1, 2]);
        assert_eq!(filter(&catalog, "SEE"), vec![0, 1, 2]);
    }

    #[test]
    fn umlauts_match_case_insensitively() {
        let catalog = sample_catalog();
        assert_eq!(filter(&catalog, "lütt"), vec![2]);
        assert_eq!(filter(&catalog, "LÜTT"), vec![2]);
    }

    #[test]
    fn no_match_yields_empty_list() {
        let catalog = sample_catalog();
        assert!(filter(&catalog, "Atlantik").is_empty());
    }

    #[test]
    fn every_result_contains_the_query() {
        let catalog = sample_catalog();
        for index in filter(&catalog, "moor") {
            let name = catalog.get(index).unwrap().name.to_lowercase();
            assert!(name.contains("moor"));
        }
    }
}
