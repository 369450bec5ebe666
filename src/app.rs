//! Application state and key routing.
//!
//! `App` owns the catalog, the viewport, the search state, and the label
//! flag, and translates key events into the corresponding operations. All
//! mutations are synchronous; the presentation for each frame is derived in
//! `render` from the state held here.

use anyhow::Result;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::widgets::ListState;
use serde::Serialize;
use tracing::{debug, info};

use crate::catalog::{Catalog, Water};
use crate::filter;
use crate::present::{self, DisplayState};
use crate::search::SearchState;
use crate::theme::Theme;
use crate::viewport::{Region, Viewport};

/// UI options resolved from configuration before the app starts.
#[derive(Debug, Clone)]
pub struct UiConfig {
    pub start_region: Region,
    pub initial_query: String,
    pub show_labels: bool,
    pub theme: Theme,
    pub prompt_title: Option<String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            start_region: crate::viewport::default_start_region(),
            initial_query: String::new(),
            show_labels: true,
            theme: Theme::default(),
            prompt_title: None,
        }
    }
}

/// What the process reports when the user quits.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MapOutcome {
    pub query: String,
    pub focused: Option<FocusedWater>,
}

/// The water body last jumped to via search, if any.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FocusedWater {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl FocusedWater {
    fn from_water(water: &Water) -> Self {
        Self {
            name: water.name.clone(),
            latitude: water.coordinate.latitude,
            longitude: water.coordinate.longitude,
        }
    }
}

pub struct App {
    pub(crate) catalog: Catalog,
    pub(crate) viewport: Viewport,
    pub(crate) search: SearchState,
    pub(crate) show_labels: bool,
    pub(crate) theme: Theme,
    pub(crate) prompt_title: Option<String>,
    /// Catalog indices behind the visible result list. Refreshed on every
    /// query edit; empty while the list is hidden.
    pub(crate) results: Vec<usize>,
    pub(crate) list_state: ListState,
    last_jump: Option<FocusedWater>,
}

impl App {
    pub fn new(catalog: Catalog, config: UiConfig) -> Self {
        let mut app = Self {
            catalog,
            viewport: Viewport::new(config.start_region),
            search: SearchState::new(config.initial_query),
            show_labels: config.show_labels,
            theme: config.theme,
            prompt_title: config.prompt_title,
            results: Vec::new(),
            list_state: ListState::default(),
            last_jump: None,
        };
        app.refresh_results();
        app
    }

    /// Derive the per-frame presentation.
    pub fn display(&self) -> DisplayState {
        present::present(&self.catalog, &self.search, self.show_labels)
    }

    pub fn region(&self) -> Region {
        self.viewport.region()
    }

    pub fn outcome(&self) -> MapOutcome {
        MapOutcome {
            query: self.search.query().to_string(),
            focused: self.last_jump.clone(),
        }
    }

    /// Apply one key event. `Some(outcome)` means the user quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<Option<MapOutcome>> {
        if self.search.is_editing() {
            self.handle_editing_key(key);
            return Ok(None);
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Ok(Some(self.outcome())),
            KeyCode::Char('/') => {
                self.search.focus();
                self.refresh_results();
            }
            KeyCode::Char('+') | KeyCode::Char('=') => self.viewport.zoom_in(),
            KeyCode::Char('-') => self.viewport.zoom_out(),
            KeyCode::Char('r') => self.viewport.reset(),
            KeyCode::Char('t') => self.show_labels = !self.show_labels,
            KeyCode::Left => self.viewport.pan(-1.0, 0.0),
            KeyCode::Right => self.viewport.pan(1.0, 0.0),
            KeyCode::Up => self.viewport.pan(0.0, 1.0),
            KeyCode::Down => self.viewport.pan(0.0, -1.0),
            _ => {}
        }
        Ok(None)
    }

    fn handle_editing_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                // Focus lost without a selection; the query stays as typed.
                self.search.blur();
                self.refresh_results();
            }
            KeyCode::Enter => self.select_highlighted(),
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.search.clear();
                self.refresh_results();
            }
            KeyCode::Up => self.move_selection_up(),
            KeyCode::Down => self.move_selection_down(),
            _ => {
                if self.search.input(key) {
                    self.refresh_results();
                }
            }
        }
    }

    /// Jump to the highlighted result: adopt its name as the query, recenter
    /// the viewport, and leave the editing phase.
    fn select_highlighted(&mut self) {
        let Some(water) = self.highlighted_water().cloned() else {
            return;
        };

        info!(name = %water.name, "jumping to search result");
        self.search.select(&water.name);
        self.viewport.recenter(water.coordinate);
        self.last_jump = Some(FocusedWater::from_water(&water));
        self.refresh_results();
    }

    pub(crate) fn highlighted_water(&self) -> Option<&Water> {
        let selected = self.list_state.selected()?;
        let index = *self.results.get(selected)?;
        self.catalog.get(index)
    }

    /// Recompute the visible result list from the current query and clamp
    /// the highlighted row into range.
    fn refresh_results(&mut self) {
        if self.search.shows_results() {
            self.results = filter::filter(&self.catalog, self.search.query());
            debug!(
                query = self.search.query(),
                matches = self.results.len(),
                "query refreshed"
            );
        } else {
            self.results.clear();
        }
        self.ensure_selection();
    }

    fn ensure_selection(&mut self) {
        if self.results.is_empty() {
            self.list_state.select(None);
        } else if let Some(selected) = self.list_state.selected() {
            if selected >= self.results.len() {
                self.list_state.select(Some(self.results.len() - 1));
            }
        } else {
            self.list_state.select(Some(0));
        }
    }

    fn move_selection_up(&mut self) {
        if let Some(selected) = self.list_state.selected()
            && selected > 0
        {
            self.list_state.select(Some(selected - 1));
        }
    }

    fn move_selection_down(&mut self) {
        if let Some(selected) = self.list_state.selected()
            && selected + 1 < self.results.len()
        {
            self.list_state.select(Some(selected + 1));
        }
    }
}
