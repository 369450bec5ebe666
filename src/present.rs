//! Derives what the map widget should display from the current state.

use crate::catalog::Catalog;
use crate::filter;
use crate::search::SearchState;

/// The derived presentation handed to the map canvas each frame. Never
/// stored; recomputed whenever any input changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayState {
    /// Catalog indices of the markers to draw, in catalog order.
    pub annotations: Vec<usize>,
    /// Whether each marker also renders its name. Does not affect which
    /// markers are shown.
    pub show_labels: bool,
}

/// Select the annotations to draw: the filtered subset while the user is
/// actively searching with a non-empty query, the full catalog otherwise.
pub fn present(catalog: &Catalog, search: &SearchState, show_labels: bool) -> DisplayState {
    let annotations = if search.shows_results() {
        filter::filter(catalog, search.query())
    } else {
        (0..catalog.len()).collect()
    };

    DisplayState {
        annotations,
        show_labels,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::sample_catalog;
    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn type_query(state: &mut SearchState, text: &str) {
        for ch in text.chars() {
            state.input(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE));
        }
    }

    #[test]
    fn idle_shows_the_full_catalog_even_with_a_stale_query() {
        let catalog = sample_catalog();
        let search = SearchState::new("moor");
        let display = present(&catalog, &search, true);
        assert_eq!(display.annotations, vec![0, 1, 2, 3]);
    }

    #[test]
    fn editing_with_an_empty_query_shows_the_full_catalog() {
        let catalog = sample_catalog();
        let mut search = SearchState::new("");
        search.focus();
        let display = present(&catalog, &search, true);
        assert_eq!(display.annotations, vec![0, 1, 2, 3]);
    }

    #[test]
    fn editing_with_a_query_shows_the_filtered_subset_in_order() {
        let catalog = sample_catalog();
        let mut search = SearchState::new("");
        search.focus();
        type_query(&mut search, "see");
        let display = present(&catalog, &search, false);
        assert_eq!(display.annotations, vec![0, 1, 2]);
    }

    #[test]
    fn toggling_labels_never_changes_the_annotations() {
        let catalog = sample_catalog();
        let mut search = SearchState::new("");
        search.focus();
        type_query(&mut search, "see");

        let with_labels = present(&catalog, &search, true);
        let without_labels = present(&catalog, &search, false);
        assert_eq!(with_labels.annotations, without_labels.annotations);
        assert!(with_labels.show_labels);
        assert!(!without_labels.show_labels);
    }
}
