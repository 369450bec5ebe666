//! Color themes for the terminal UI.

use ratatui::style::{Color, Modifier, Style};

/// Style set used across the search row, map canvas, and overlays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub prompt: Style,
    pub input: Style,
    pub empty: Style,
    pub status: Style,
    pub result_highlight: Style,
    pub overlay_border: Style,
    /// Color of the marker glyphs on the map canvas.
    pub marker: Color,
    /// Color of the marker name labels.
    pub label: Color,
    /// Color of the coastline backdrop.
    pub coastline: Color,
}

pub const SLATE: Theme = Theme {
    prompt: Style::new().fg(Color::LightCyan),
    input: Style::new().fg(Color::Rgb(226, 232, 240)),
    empty: Style::new().fg(Color::DarkGray),
    status: Style::new().fg(Color::Rgb(148, 163, 184)),
    result_highlight: Style::new()
        .bg(Color::Rgb(30, 41, 59))
        .fg(Color::Rgb(250, 204, 21))
        .add_modifier(Modifier::BOLD),
    overlay_border: Style::new().fg(Color::Rgb(71, 85, 105)),
    marker: Color::LightBlue,
    label: Color::Rgb(226, 232, 240),
    coastline: Color::Rgb(71, 85, 105),
};

pub const BALTIC: Theme = Theme {
    prompt: Style::new().fg(Color::LightGreen),
    input: Style::new().fg(Color::White),
    empty: Style::new().fg(Color::DarkGray),
    status: Style::new().fg(Color::Gray),
    result_highlight: Style::new()
        .bg(Color::Rgb(7, 59, 76))
        .fg(Color::Rgb(255, 209, 102))
        .add_modifier(Modifier::BOLD),
    overlay_border: Style::new().fg(Color::Rgb(17, 138, 178)),
    marker: Color::Rgb(17, 138, 178),
    label: Color::Rgb(239, 247, 246),
    coastline: Color::Rgb(6, 90, 96),
};

impl Default for Theme {
    fn default() -> Self {
        SLATE
    }
}

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME: &str = "slate";

/// Names accepted by `--theme`, in display order.
pub fn names() -> &'static [&'static str] {
    &["slate", "baltic"]
}

/// Look up a builtin theme by name (case-insensitive).
pub fn by_name(name: &str) -> Option<Theme> {
    match name.trim().to_ascii_lowercase().as_str() {
        "slate" => Some(SLATE),
        "baltic" => Some(BALTIC),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_name_resolves() {
        for name in names() {
            assert!(by_name(name).is_some(), "theme '{name}' should resolve");
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(by_name("SLATE"), Some(SLATE));
        assert_eq!(by_name(" Baltic "), Some(BALTIC));
        assert_eq!(by_name("mapkit"), None);
    }
}
