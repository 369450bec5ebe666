//! Terminal lifecycle and the synchronous event loop.
//!
//! One logical thread of control: poll for an input event, apply it, redraw.
//! State updates therefore happen exactly in event delivery order.

use std::time::Duration;

use anyhow::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{self, Event, KeyEventKind};

use crate::app::{App, MapOutcome, UiConfig};
use crate::catalog::Catalog;

/// How long one poll waits before redrawing anyway.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Construct an [`App`] for the catalog and run it to completion.
pub fn run(catalog: Catalog, config: UiConfig) -> Result<MapOutcome> {
    let mut app = App::new(catalog, config);
    app.run()
}

impl App {
    /// Pump the terminal event loop until the user quits.
    pub fn run(&mut self) -> Result<MapOutcome> {
        let mut terminal = ratatui::init();
        let result = self.event_loop(&mut terminal);
        ratatui::restore();
        result
    }

    fn event_loop(&mut self, terminal: &mut DefaultTerminal) -> Result<MapOutcome> {
        terminal.clear()?;
        loop {
            terminal.draw(|frame| self.draw(frame))?;

            if !event::poll(POLL_INTERVAL)? {
                continue;
            }
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if let Some(outcome) = self.handle_key(key)? {
                        return Ok(outcome);
                    }
                }
                // Resizes are picked up by the next draw.
                _ => {}
            }
        }
    }
}
