//! Standings table.

use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, HighlightSpacing, Row, Table, TableState},
    Frame,
};

use crate::app::{App, HeaderHitbox};
use crate::data::country::{country_name, flag, has_flag};
use crate::data::SortKey;

const HIGHLIGHT_SYMBOL: &str = "▶ ";
const COLUMN_SPACING: u16 = 1;

/// Rank, Country, then one column per sort key in `SortKey::ALL` order.
const WIDTHS: [Constraint; 6] = [
    Constraint::Length(4),
    Constraint::Fill(1),
    Constraint::Length(8),
    Constraint::Length(8),
    Constraint::Length(8),
    Constraint::Length(8),
];

/// Render the ranked table and record where the sortable headers landed.
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let standings = app.standings();
    let theme = &app.theme;

    let mut header_cells = vec![Cell::from("Rank"), Cell::from("Country")];
    header_cells.extend(SortKey::ALL.iter().map(|&key| {
        if key == app.sort_key {
            Cell::from(format!("{} ↓", key.label())).style(theme.header_active)
        } else {
            Cell::from(key.label())
        }
    }));
    let header = Row::new(header_cells).height(1).style(theme.header);

    let rows: Vec<Row> = standings
        .iter()
        .map(|(rank, entry)| {
            let country = Line::from(vec![
                Span::styled(
                    format!("{} ", flag(entry.code())),
                    flag_style(entry.code(), theme.muted),
                ),
                Span::styled(entry.code().to_string(), Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(
                    format!(" {}", country_name(entry.code())),
                    Style::default().fg(theme.muted),
                ),
            ]);
            let medal = |count: u32, color: Color| {
                Cell::from(count.to_string())
                    .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            };

            Row::new(vec![
                Cell::from(rank.to_string()).style(Style::default().fg(theme.muted)),
                Cell::from(country),
                medal(entry.gold(), theme.gold),
                medal(entry.silver(), theme.silver),
                medal(entry.bronze(), theme.bronze),
                Cell::from(entry.total().to_string()).style(Style::default().add_modifier(Modifier::BOLD)),
            ])
        })
        .collect();

    let selected = app.selected_index.min(standings.len().saturating_sub(1));
    let position_info = if standings.is_empty() {
        String::new()
    } else {
        format!(" [{}/{}]", selected + 1, standings.len())
    };
    let title = format!(
        " Standings ({}) [sort: {}]{} ",
        standings.len(),
        app.sort_key,
        position_info
    );

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.border));
    let inner = block.inner(area);

    let table = Table::new(rows, WIDTHS)
        .header(header)
        .block(block)
        .column_spacing(COLUMN_SPACING)
        .flex(Flex::Start)
        .row_highlight_style(theme.selected)
        .highlight_symbol(HIGHLIGHT_SYMBOL)
        .highlight_spacing(HighlightSpacing::Always);

    let mut state = TableState::default();
    if !standings.is_empty() {
        state.select(Some(selected));
    }

    frame.render_stateful_widget(table, area, &mut state);
    app.header_hitboxes = header_hitboxes(inner);
}

/// Placeholder flags for unknown codes are dimmed.
fn flag_style(code: &str, muted: Color) -> Style {
    if has_flag(code) {
        Style::default()
    } else {
        Style::default().fg(muted)
    }
}

/// Header cells of the sortable columns, laid out the way the table lays
/// out its columns after the highlight gutter.
fn header_hitboxes(inner: Rect) -> Vec<HeaderHitbox> {
    if inner.height == 0 {
        return Vec::new();
    }
    let gutter = HIGHLIGHT_SYMBOL.chars().count() as u16;
    let columns_area = Rect::new(
        inner.x + gutter.min(inner.width),
        inner.y,
        inner.width.saturating_sub(gutter),
        1,
    );
    let columns = Layout::horizontal(WIDTHS)
        .flex(Flex::Start)
        .spacing(COLUMN_SPACING)
        .split(columns_area);

    SortKey::ALL
        .iter()
        .zip(columns.iter().skip(2))
        .filter(|(_, rect)| rect.width > 0)
        .map(|(&key, rect)| HeaderHitbox {
            row: rect.y,
            x: rect.x,
            width: rect.width,
            key,
        })
        .collect()
}
