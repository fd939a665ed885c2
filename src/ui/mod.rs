//! Terminal rendering.

pub mod common;
pub mod preference;
pub mod standings;
pub mod theme;

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    widgets::{Block, Paragraph},
    Frame,
};

use crate::app::{App, Screen};

pub use preference::ThemeStore;
pub use theme::{Theme, ThemeMode};

/// Minimum terminal size for a usable display.
pub const MIN_WIDTH: u16 = 60;
pub const MIN_HEIGHT: u16 = 12;

/// Draw one frame.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    frame.render_widget(Block::default().style(app.theme.base), area);
    app.header_hitboxes.clear();

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let msg = format!(
            "Terminal too small: {}x{}\nMinimum: {}x{}\n\nResize to continue",
            area.width, area.height, MIN_WIDTH, MIN_HEIGHT
        );
        let paragraph = Paragraph::new(msg)
            .alignment(Alignment::Center)
            .style(Style::default().fg(app.theme.error));
        let centered = Rect::new(0, (area.height / 2).saturating_sub(2), area.width, 5)
            .intersection(area);
        frame.render_widget(paragraph, centered);
        return;
    }

    let chunks = Layout::vertical([
        Constraint::Length(2), // Title and subtitle
        Constraint::Min(8),    // Content
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    common::render_header(frame, app, chunks[0]);

    match app.screen() {
        Screen::Loading => common::render_loading(frame, app, chunks[1]),
        Screen::Failed(_) => common::render_error(frame, app, chunks[1]),
        Screen::Standings => standings::render(frame, app, chunks[1]),
    }

    common::render_status_bar(frame, app, chunks[2]);

    if app.show_help {
        common::render_help(frame, app, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Location, MedalEntry, MedalEntryWithTotal, SortKey};
    use crate::source::{ChannelSource, FetchError, FetchResult};
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
    use tokio::sync::mpsc::UnboundedSender;
    use url::Url;

    fn app() -> (UnboundedSender<FetchResult>, App) {
        let (tx, source) = ChannelSource::create("test feed");
        let base = Url::parse("http://localhost:3000/").unwrap();
        let mut app = App::new(
            Box::new(source),
            Location::new(base),
            Theme::dark(),
            ThemeStore::disabled(),
        );
        app.start();
        (tx, app)
    }

    fn sample() -> Vec<MedalEntryWithTotal> {
        [("USA", 9, 7, 12), ("RUS", 13, 11, 9), ("NOR", 11, 5, 10)]
            .into_iter()
            .map(|(c, g, s, b)| MedalEntryWithTotal::derive(MedalEntry::new(c, g, s, b)).unwrap())
            .collect()
    }

    fn render(app: &mut App, width: u16, height: u16) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut out = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn line_of(text: &str, needle: &str) -> Option<usize> {
        text.lines().position(|line| line.contains(needle))
    }

    #[test]
    fn test_loading_screen() {
        let (_tx, mut app) = app();
        let screen = text(&render(&mut app, 80, 20));
        assert!(screen.contains("Medal Count"));
        assert!(screen.contains("Loading medal data"));
        assert!(screen.contains("test feed"));
        assert!(!screen.contains("Updated"));
    }

    #[test]
    fn test_standings_table() {
        let (tx, mut app) = app();
        tx.send(Ok(sample())).unwrap();
        app.tick();

        let screen = text(&render(&mut app, 80, 20));
        assert!(screen.contains("Gold ↓"));
        let rus = line_of(&screen, "Russia").unwrap();
        let nor = line_of(&screen, "Norway").unwrap();
        let usa = line_of(&screen, "United States").unwrap();
        assert!(rus < nor && nor < usa);
        assert!(screen.contains("| Updated "));
    }

    #[test]
    fn test_header_hitboxes_cover_labels() {
        let (tx, mut app) = app();
        tx.send(Ok(sample())).unwrap();
        app.tick();

        let buffer = render(&mut app, 80, 20);
        assert_eq!(app.header_hitboxes.len(), 4);

        let total = app
            .header_hitboxes
            .iter()
            .find(|h| h.key == SortKey::Total)
            .copied()
            .unwrap();
        assert_eq!(buffer[(total.x, total.row)].symbol(), "T");

        assert_eq!(app.sort_key_at(total.x, total.row), Some(SortKey::Total));
        app.set_sort(SortKey::Total);
        let screen = text(&render(&mut app, 80, 20));
        assert!(screen.contains("Total ↓"));
        assert!(screen.contains("?sort=total"));
    }

    #[test]
    fn test_error_panel() {
        let (tx, mut app) = app();
        tx.send(Err(FetchError::Http {
            status: 500,
            message: "Internal server error".to_string(),
        }))
        .unwrap();
        app.tick();

        let screen = text(&render(&mut app, 100, 20));
        assert!(screen.contains("Failed to Load Medal Data"));
        assert!(screen.contains("Internal server error"));
        assert!(screen.contains("Press r to try again"));
        assert!(app.header_hitboxes.is_empty());
    }

    #[test]
    fn test_too_small() {
        let (_tx, mut app) = app();
        let screen = text(&render(&mut app, 40, 10));
        assert!(screen.contains("Terminal too small"));
    }

    #[test]
    fn test_help_overlay() {
        let (tx, mut app) = app();
        tx.send(Ok(sample())).unwrap();
        app.tick();
        app.toggle_help();

        let screen = text(&render(&mut app, 80, 30));
        assert!(screen.contains("Keyboard Shortcuts"));
        assert!(screen.contains("Toggle theme"));
    }
}
