//! Frame rendering: query row, map canvas, result overlay, status row.
//!
//! Everything here is a pure projection of [`App`](crate::app::App) state;
//! no state is mutated during drawing except the stateful list highlight.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::Style;
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::canvas::{Canvas, Map, MapResolution};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::present::DisplayState;
use crate::viewport::Region;

/// Widest the result overlay will grow, in columns.
const OVERLAY_MAX_WIDTH: u16 = 54;
/// Tallest the result overlay will grow, in rows (including its border).
const OVERLAY_MAX_HEIGHT: u16 = 12;

impl App {
    pub fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area().inner(Margin {
            vertical: 0,
            horizontal: 1,
        });

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(area);

        let display = self.display();

        self.render_query_row(frame, layout[0]);
        self.render_map(frame, layout[1], &display);
        self.render_status_row(frame, layout[2], &display);

        if self.search.shows_results() {
            self.render_results_overlay(frame, layout[1]);
        }
    }

    fn render_query_row(&self, frame: &mut Frame, area: Rect) {
        let prompt = self
            .prompt_title
            .as_deref()
            .unwrap_or("Gewässer suchen");
        let prompt_text = format!("{prompt} > ");
        let prompt_width = (prompt_text.width() as u16).min(area.width);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(prompt_width), Constraint::Min(1)])
            .split(area);

        let prompt_widget = Paragraph::new(prompt_text).style(self.theme.prompt);
        frame.render_widget(prompt_widget, columns[0]);

        if self.search.is_editing() {
            self.search
                .input_widget()
                .render(frame, columns[1], self.theme.input);
        } else {
            let idle = Paragraph::new(self.search.query()).style(self.theme.empty);
            frame.render_widget(idle, columns[1]);
        }
    }

    fn render_map(&self, frame: &mut Frame, area: Rect, display: &DisplayState) {
        let region = self.region();
        let (x_bounds, y_bounds) = bounds_of(region);

        let theme = self.theme;
        let catalog = &self.catalog;
        let canvas = Canvas::default()
            .marker(Marker::Braille)
            .x_bounds(x_bounds)
            .y_bounds(y_bounds)
            .paint(|ctx| {
                ctx.draw(&Map {
                    color: theme.coastline,
                    resolution: MapResolution::High,
                });
                ctx.layer();

                for &index in &display.annotations {
                    let Some(water) = catalog.get(index) else {
                        continue;
                    };
                    let mut spans = vec![Span::styled("●", Style::new().fg(theme.marker))];
                    if display.show_labels {
                        spans.push(Span::styled(
                            format!(" {}", water.name),
                            Style::new().fg(theme.label),
                        ));
                    }
                    ctx.print(
                        water.coordinate.longitude,
                        water.coordinate.latitude,
                        Line::from(spans),
                    );
                }
            });
        frame.render_widget(canvas, area);

        if display.annotations.is_empty() {
            let empty = Paragraph::new("No matching waters")
                .alignment(Alignment::Center)
                .style(self.theme.empty);
            let mut message_area = area;
            if message_area.height > 1 {
                message_area.y += message_area.height / 2;
                message_area.height = 1;
            }
            frame.render_widget(empty, message_area);
        }
    }

    fn render_results_overlay(&mut self, frame: &mut Frame, map_area: Rect) {
        let width = OVERLAY_MAX_WIDTH.min(map_area.width.saturating_sub(2));
        let height = (self.results.len() as u16 + 2)
            .min(OVERLAY_MAX_HEIGHT)
            .min(map_area.height);
        if width < 4 || height < 3 {
            return;
        }

        let overlay = Rect {
            x: map_area.x + 1,
            y: map_area.y,
            width,
            height,
        };

        let items: Vec<ListItem> = self
            .results
            .iter()
            .filter_map(|&index| self.catalog.get(index))
            .map(|water| ListItem::new(water.name.clone()))
            .collect();

        let title = format!(" {} Treffer ", self.results.len());
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(self.theme.overlay_border)
                    .title(title),
            )
            .highlight_style(self.theme.result_highlight)
            .highlight_symbol("▶ ");

        frame.render_widget(Clear, overlay);
        frame.render_stateful_widget(list, overlay, &mut self.list_state);
    }

    fn render_status_row(&self, frame: &mut Frame, area: Rect, display: &DisplayState) {
        let region = self.region();
        let hints = if self.search.is_editing() {
            "↑/↓ select · Enter jump · Ctrl-U clear · Esc done"
        } else {
            "/ search · ←↑↓→ pan · +/- zoom · r reset · t labels · q quit"
        };
        let status = format!(
            "{} waters · center {:.3}, {:.3} · span {:.3} × {:.3} · {hints}",
            display.annotations.len(),
            region.center.latitude,
            region.center.longitude,
            region.span.latitude_delta,
            region.span.longitude_delta,
        );
        frame.render_widget(Paragraph::new(status).style(self.theme.status), area);
    }
}

/// Convert a region into canvas x/y bounds (longitude on x, latitude on y).
fn bounds_of(region: Region) -> ([f64; 2], [f64; 2]) {
    let half_lon = region.span.longitude_delta / 2.0;
    let half_lat = region.span.latitude_delta / 2.0;
    (
        [
            region.center.longitude - half_lon,
            region.center.longitude + half_lon,
        ],
        [
            region.center.latitude - half_lat,
            region.center.latitude + half_lat,
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::UiConfig;
    use crate::catalog::Coordinate;
    use crate::catalog::tests::sample_catalog;
    use crate::viewport::Span;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn rendered(app: &mut App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();
        terminal.backend().to_string()
    }

    #[test]
    fn draws_prompt_and_status() {
        let mut app = App::new(sample_catalog(), UiConfig::default());
        let view = rendered(&mut app, 100, 24);
        assert!(view.contains("Gewässer suchen >"));
        assert!(view.contains("4 waters"));
        assert!(view.contains("center 53.770, 11.150"));
    }

    #[test]
    fn editing_with_matches_shows_the_overlay() {
        let mut app = App::new(sample_catalog(), UiConfig::default());
        app.handle_key(KeyEvent::new(KeyCode::Char('/'), KeyModifiers::NONE))
            .unwrap();
        for ch in "see".chars() {
            app.handle_key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE))
                .unwrap();
        }
        let view = rendered(&mut app, 100, 24);
        assert!(view.contains("3 Treffer"));
        assert!(view.contains("Neddersee"));
    }

    #[test]
    fn labels_render_only_when_enabled() {
        let config = UiConfig {
            start_region: Region::new(Coordinate::new(53.7033, 11.0630), Span::new(0.05, 0.05)),
            ..UiConfig::default()
        };
        let mut app = App::new(sample_catalog(), config);
        let with_labels = rendered(&mut app, 100, 30);
        assert!(with_labels.contains("Neddersee"));

        app.handle_key(KeyEvent::new(KeyCode::Char('t'), KeyModifiers::NONE))
            .unwrap();
        let without_labels = rendered(&mut app, 100, 30);
        assert!(!without_labels.contains("Neddersee"));
    }

    #[test]
    fn bounds_are_centered_on_the_region() {
        let region = Region::new(Coordinate::new(53.0, 11.0), Span::new(0.5, 1.0));
        let (x, y) = bounds_of(region);
        assert_eq!(x, [10.5, 11.5]);
        assert_eq!(y, [52.75, 53.25]);
    }
}
