//! Theme configuration for the TUI.
//!
//! Supports light and dark themes with automatic terminal detection.

use std::fmt;
use std::str::FromStr;

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::block::BorderType;

/// Light or dark appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Indicator shown next to the toggle.
    pub fn icon(&self) -> &'static str {
        match self {
            ThemeMode::Light => "☀",
            ThemeMode::Dark => "☾",
        }
    }

    /// Pick a mode from the terminal's background luminance.
    pub fn detect() -> Self {
        match terminal_light::luma() {
            Ok(luma) if luma > 0.5 => ThemeMode::Light,
            _ => ThemeMode::Dark,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(format!("unknown theme: {}", other)),
        }
    }
}

/// Color and style theme for the TUI.
///
/// Use [`Theme::for_mode()`] to build one, or [`Theme::auto_detect()`] to
/// pick from the terminal background.
#[derive(Debug, Clone)]
pub struct Theme {
    pub mode: ThemeMode,
    /// Base style painted under every view.
    pub base: Style,
    /// Accent color for highlights and the active sort column.
    pub highlight: Color,
    pub gold: Color,
    pub silver: Color,
    pub bronze: Color,
    /// Secondary text such as full country names and ranks.
    pub muted: Color,
    pub error: Color,
    /// Color for borders and separators.
    pub border: Color,
    /// Style for header rows in tables.
    pub header: Style,
    /// Style for the header cell of the active sort column.
    pub header_active: Style,
    /// Style for selected/highlighted rows.
    pub selected: Style,
    /// Border style (rounded, plain, etc.).
    pub border_type: BorderType,
}

impl Theme {
    /// Create a dark theme suitable for dark terminal backgrounds.
    pub fn dark() -> Self {
        Self {
            mode: ThemeMode::Dark,
            base: Style::default().fg(Color::Rgb(229, 231, 235)).bg(Color::Rgb(17, 24, 39)),
            highlight: Color::Cyan,
            gold: Color::Rgb(255, 215, 0),
            silver: Color::Rgb(192, 192, 192),
            bronze: Color::Rgb(205, 127, 50),
            muted: Color::Gray,
            error: Color::LightRed,
            border: Color::Gray,
            header: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            header_active: Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            selected: Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD),
            border_type: BorderType::Rounded,
        }
    }

    /// Create a light theme suitable for light terminal backgrounds.
    pub fn light() -> Self {
        Self {
            mode: ThemeMode::Light,
            base: Style::default().fg(Color::Rgb(31, 41, 55)).bg(Color::Rgb(249, 250, 251)),
            highlight: Color::Blue,
            gold: Color::Rgb(184, 134, 11),
            silver: Color::Rgb(112, 112, 112),
            bronze: Color::Rgb(160, 82, 45),
            muted: Color::DarkGray,
            error: Color::Red,
            border: Color::DarkGray,
            header: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            header_active: Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            selected: Style::default().bg(Color::LightBlue).add_modifier(Modifier::BOLD),
            border_type: BorderType::Rounded,
        }
    }

    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    /// Auto-detect based on terminal background
    pub fn auto_detect() -> Self {
        Self::for_mode(ThemeMode::detect())
    }

    /// The opposite theme.
    pub fn toggled(&self) -> Self {
        Self::for_mode(self.mode.toggled())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parse_and_display() {
        assert_eq!("dark".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
        assert_eq!(" light\n".parse::<ThemeMode>(), Ok(ThemeMode::Light));
        assert!("auto".parse::<ThemeMode>().is_err());
        assert_eq!(ThemeMode::Dark.to_string(), "dark");
    }

    #[test]
    fn test_toggle() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(Theme::light().toggled().mode, ThemeMode::Dark);
        assert_eq!(Theme::dark().toggled().mode, ThemeMode::Light);
    }

    #[test]
    fn test_for_mode() {
        assert_eq!(Theme::for_mode(ThemeMode::Dark).mode, ThemeMode::Dark);
        assert_eq!(Theme::for_mode(ThemeMode::Light).highlight, Color::Blue);
    }
}
