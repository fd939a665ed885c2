//! Common UI components shared across screens.
//!
//! This module contains the header, status bar, loading and error panels,
//! and the help overlay.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::App;

/// Olympic ring colors, left to right.
const RING_COLORS: [Color; 5] = [
    Color::Rgb(0, 129, 200),
    Color::Rgb(252, 177, 49),
    Color::Gray,
    Color::Rgb(0, 166, 81),
    Color::Rgb(238, 51, 78),
];

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Render the title, rings, subtitle, and theme indicator.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let mut title = vec![Span::styled(
        " Medal Count ",
        Style::default().fg(theme.highlight).add_modifier(Modifier::BOLD),
    )];
    title.extend(
        RING_COLORS
            .iter()
            .map(|&color| Span::styled("◯", Style::default().fg(color).add_modifier(Modifier::BOLD))),
    );

    let lines = vec![
        Line::from(title),
        Line::from(Span::styled(
            " Olympic Medal Standings",
            Style::default().fg(theme.muted),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);

    let toggle = Line::from(vec![
        Span::styled(theme.mode.icon(), Style::default().fg(theme.highlight)),
        Span::styled(" t ", Style::default().fg(theme.muted)),
    ]);
    frame.render_widget(Paragraph::new(toggle).alignment(Alignment::Right), area);
}

/// Render the status bar at the bottom.
///
/// Shows the data source, current location, time since the last load, and
/// controls, or a temporary status message while one is active.
pub fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    if let Some(msg) = app.get_status_message() {
        let paragraph =
            Paragraph::new(format!(" {} ", msg)).style(Style::default().fg(app.theme.highlight));
        frame.render_widget(paragraph, area);
        return;
    }

    let controls = if app.pipeline().is_loading() {
        "q:quit"
    } else if app.pipeline().error().is_some() {
        "r:retry q:quit"
    } else {
        "1-4/s:sort t:theme e:export ?:help q:quit"
    };

    let updated = match app.pipeline().last_updated() {
        Some(at) if !app.pipeline().is_loading() => {
            format!(" | Updated {:.1}s ago", at.elapsed().as_secs_f64())
        }
        _ => String::new(),
    };

    let status = format!(
        " {} | {}{} | {}",
        app.source_description(),
        app.location,
        updated,
        controls
    );

    let paragraph = Paragraph::new(status).style(Style::default().add_modifier(Modifier::DIM));
    frame.render_widget(paragraph, area);
}

/// Spinner panel shown while a fetch is in flight.
pub fn render_loading(frame: &mut Frame, app: &App, area: Rect) {
    let spinner = SPINNER_FRAMES[app.spinner_frame % SPINNER_FRAMES.len()];
    let line = Line::from(vec![
        Span::styled(spinner, Style::default().fg(app.theme.highlight)),
        Span::raw(" Loading medal data..."),
    ]);

    let panel = centered(area, 40, 3);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));
    frame.render_widget(
        Paragraph::new(line).alignment(Alignment::Center).block(block),
        panel,
    );
}

/// Error panel with the failure, a hint, and the retry key.
pub fn render_error(frame: &mut Frame, app: &App, area: Rect) {
    let Some(error) = app.pipeline().error() else {
        return;
    };

    let lines = vec![
        Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(app.theme.error),
        )),
        Line::from(""),
        Line::from(error.hint()),
        Line::from(""),
        Line::from(Span::styled(
            "Press r to try again",
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];

    let block = Block::default()
        .title(" Failed to Load Medal Data ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.error));

    let panel = centered(area, 72, 9);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block),
        panel,
    );
}

/// Render the help overlay with keyboard shortcuts.
///
/// Displayed as a centered modal on top of the current screen.
pub fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let help_text = vec![
        Line::from(vec![Span::styled("Keyboard Shortcuts", app.theme.header)]),
        Line::from(""),
        Line::from(vec![Span::styled(" Sorting", bold)]),
        Line::from("  1/2/3/4     Gold/Silver/Bronze/Total"),
        Line::from("  s           Cycle sort column"),
        Line::from("  click       Sort by that header"),
        Line::from(""),
        Line::from(vec![Span::styled(" Navigation", bold)]),
        Line::from("  ↑/↓ j/k     Move selection"),
        Line::from("  Home/End    Jump to first/last"),
        Line::from(""),
        Line::from(vec![Span::styled(" General", bold)]),
        Line::from("  t           Toggle theme"),
        Line::from("  r           Reload data"),
        Line::from("  e           Export to JSON"),
        Line::from("  q           Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press any key to close",
            Style::default().add_modifier(Modifier::DIM),
        )]),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.highlight))
        .style(app.theme.base);

    let paragraph = Paragraph::new(help_text).block(block);

    // Center the help overlay - responsive to terminal size
    let help_area = centered(area, 44, 20);

    // Clear the area behind the help
    frame.render_widget(Clear, help_area);
    frame.render_widget(paragraph, help_area);
}

/// A `width` x `height` rectangle centered in `area`, shrunk to fit.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(ratatui::layout::Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(ratatui::layout::Flex::Center)
        .areas(row);
    cell
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_fits() {
        let area = Rect::new(0, 2, 80, 20);
        let panel = centered(area, 40, 4);
        assert_eq!(panel.width, 40);
        assert_eq!(panel.height, 4);
        assert_eq!(panel.x, 20);
        assert_eq!(panel.y, 10);
    }

    #[test]
    fn test_centered_shrinks() {
        let panel = centered(Rect::new(0, 0, 30, 5), 72, 9);
        assert_eq!(panel, Rect::new(0, 0, 30, 5));
    }
}
