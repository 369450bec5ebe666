//! Single-line editor for the search query field.

use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::{Position, Rect};
use ratatui::style::Style;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

/// Owns the query text and a character-based cursor.
#[derive(Debug, Default, Clone)]
pub struct QueryInput {
    text: String,
    /// Cursor position in characters, 0..=char count.
    cursor: usize,
}

impl QueryInput {
    pub fn new(initial: impl Into<String>) -> Self {
        let text = initial.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the whole text and move the cursor to the end.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.text.chars().count();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Apply a key event to the editor. Returns true when the text changed
    /// (cursor-only movement returns false).
    pub fn input(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(ch)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                let at = self.byte_offset(self.cursor);
                self.text.insert(at, ch);
                self.cursor += 1;
                true
            }
            KeyCode::Backspace => {
                if self.cursor == 0 {
                    return false;
                }
                let start = self.byte_offset(self.cursor - 1);
                let end = self.byte_offset(self.cursor);
                self.text.replace_range(start..end, "");
                self.cursor -= 1;
                true
            }
            KeyCode::Delete => {
                if self.cursor >= self.text.chars().count() {
                    return false;
                }
                let start = self.byte_offset(self.cursor);
                let end = self.byte_offset(self.cursor + 1);
                self.text.replace_range(start..end, "");
                true
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                false
            }
            KeyCode::Right => {
                if self.cursor < self.text.chars().count() {
                    self.cursor += 1;
                }
                false
            }
            KeyCode::Home => {
                self.cursor = 0;
                false
            }
            KeyCode::End => {
                self.cursor = self.text.chars().count();
                false
            }
            _ => false,
        }
    }

    /// Render the text into `area` and place the terminal cursor after the
    /// character the editing cursor sits on.
    pub fn render(&self, frame: &mut Frame, area: Rect, style: Style) {
        let widget = Paragraph::new(self.text.as_str()).style(style);
        frame.render_widget(widget, area);

        let before_cursor = &self.text[..self.byte_offset(self.cursor)];
        let column = area
            .x
            .saturating_add(before_cursor.width() as u16)
            .min(area.right().saturating_sub(1).max(area.x));
        frame.set_cursor_position(Position::new(column, area.y));
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map(|(offset, _)| offset)
            .unwrap_or(self.text.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn typing_appends_at_the_cursor() {
        let mut input = QueryInput::default();
        for ch in "see".chars() {
            assert!(input.input(press(KeyCode::Char(ch))));
        }
        assert_eq!(input.text(), "see");
    }

    #[test]
    fn backspace_handles_multibyte_characters() {
        let mut input = QueryInput::new("Lüttsee");
        for _ in 0..5 {
            assert!(input.input(press(KeyCode::Backspace)));
        }
        assert_eq!(input.text(), "Lü");
        assert!(input.input(press(KeyCode::Backspace)));
        assert_eq!(input.text(), "L");
    }

    #[test]
    fn cursor_movement_does_not_report_a_change() {
        let mut input = QueryInput::new("see");
        assert!(!input.input(press(KeyCode::Left)));
        assert!(!input.input(press(KeyCode::Home)));
        assert!(!input.input(press(KeyCode::End)));
    }

    #[test]
    fn insert_in_the_middle() {
        let mut input = QueryInput::new("se");
        input.input(press(KeyCode::Left));
        input.input(press(KeyCode::Char('e')));
        assert_eq!(input.text(), "see");
    }

    #[test]
    fn control_chords_are_ignored() {
        let mut input = QueryInput::new("see");
        let chord = KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL);
        assert!(!input.input(chord));
        assert_eq!(input.text(), "see");
    }
}
