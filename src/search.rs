//! Search interaction state.
//!
//! Focus handling is an explicit two-phase machine so the transitions can be
//! tested without any UI framework: `Idle` (no result list, query possibly
//! stale) and `Editing` (result list live-follows the query).

use ratatui::crossterm::event::KeyEvent;

use crate::input::QueryInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Editing,
}

/// Owns the query text and the editing phase.
#[derive(Debug, Clone)]
pub struct SearchState {
    phase: Phase,
    input: QueryInput,
}

impl SearchState {
    pub fn new(initial_query: impl Into<String>) -> Self {
        Self {
            phase: Phase::Idle,
            input: QueryInput::new(initial_query),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_editing(&self) -> bool {
        self.phase == Phase::Editing
    }

    pub fn query(&self) -> &str {
        self.input.text()
    }

    pub fn input_widget(&self) -> &QueryInput {
        &self.input
    }

    /// Whether the result list should be visible: only while editing with a
    /// non-empty query. An empty filtered list is still a valid, displayable
    /// state.
    pub fn shows_results(&self) -> bool {
        self.is_editing() && !self.query().trim().is_empty()
    }

    /// The search field gained focus.
    pub fn focus(&mut self) {
        self.phase = Phase::Editing;
    }

    /// The search field lost focus without a selection; the query is
    /// retained as typed.
    pub fn blur(&mut self) {
        self.phase = Phase::Idle;
    }

    /// A result was selected: the query becomes the selected name and
    /// editing ends. The caller is responsible for recentering the viewport
    /// on the selected coordinate.
    pub fn select(&mut self, name: &str) {
        self.input.set_text(name);
        self.phase = Phase::Idle;
    }

    /// Reset the query to empty. Deliberately does not touch the phase —
    /// dismissing the field is a separate decision made by the caller.
    pub fn clear(&mut self) {
        self.input.clear();
    }

    /// Forward a key event to the line editor. Returns true when the query
    /// text changed.
    pub fn input(&mut self, key: KeyEvent) -> bool {
        self.input.input(key)
    }
}
