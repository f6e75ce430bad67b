//! Generic table panel: draws any `RenderedTable` with per-cell theming.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table, Widget},
};

use fluxpool_core::table::{CellValue, RenderedTable, SortDirection};

use crate::app::SortSpec;
use crate::theme::Theme;

const BAR_WIDTH: usize = 10;

pub struct TablePanel<'a> {
    table: &'a RenderedTable,
    selected_index: usize,
    sort: Option<&'a SortSpec>,
    title: &'a str,
    theme: &'a Theme,
}

impl<'a> TablePanel<'a> {
    pub fn new(
        table: &'a RenderedTable,
        selected_index: usize,
        sort: Option<&'a SortSpec>,
        title: &'a str,
        theme: &'a Theme,
    ) -> Self {
        Self {
            table,
            selected_index,
            sort,
            title,
            theme,
        }
    }

    fn header_title(&self, key: &str, title: &str) -> String {
        match self.sort {
            Some(sort) if sort.key == key => {
                let arrow = match sort.direction {
                    SortDirection::Ascending => '▲',
                    SortDirection::Descending => '▼',
                };
                format!("{title} {arrow}")
            }
            _ => title.to_string(),
        }
    }

    /// First row to draw so the selection stays on screen.
    fn scroll_offset(&self, visible: usize) -> usize {
        if visible == 0 || self.selected_index < visible {
            0
        } else {
            self.selected_index + 1 - visible
        }
    }
}

/// Terminal text for one cell.
pub fn cell_text(cell: &CellValue) -> String {
    match cell {
        CellValue::Progress { percent, caption, .. } => {
            let filled = usize::from(*percent).min(100) * BAR_WIDTH / 100;
            format!(
                "{}{} {percent:>3}% {caption}",
                "█".repeat(filled),
                "░".repeat(BAR_WIDTH - filled)
            )
        }
        CellValue::Action(action) => format!("[{}]", action.label()),
        other => other.display(),
    }
}

/// Column width: the widest of header and cells, capped.
fn column_width(table: &RenderedTable, col: usize) -> u16 {
    let header = table.headers[col].title.chars().count() + 2;
    let widest = table
        .rows
        .iter()
        .filter_map(|r| r.cells.get(col))
        .map(|c| cell_text(c).chars().count())
        .max()
        .unwrap_or(0);
    header.max(widest).min(32) as u16
}

impl<'a> Widget for TablePanel<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(format!(" {} ({}) ", self.title, self.table.len()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.accent))
            .style(Style::default().bg(self.theme.background));

        let header = Row::new(self.table.headers.iter().map(|h| {
            Cell::from(self.header_title(h.key, h.title)).style(
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD),
            )
        }))
        .height(1);

        // Borders and header take three lines.
        let visible = area.height.saturating_sub(3) as usize;
        let offset = self.scroll_offset(visible);

        let rows = self
            .table
            .rows
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible.max(1))
            .map(|(i, row)| {
                let cells = row.cells.iter().map(|cell| {
                    Cell::from(cell_text(cell)).style(self.theme.cell_style(cell))
                });
                let style = if i == self.selected_index {
                    Style::default()
                        .bg(self.theme.neutral)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                Row::new(cells).style(style).height(1)
            });

        let widths: Vec<Constraint> = (0..self.table.headers.len())
            .map(|col| Constraint::Length(column_width(self.table, col)))
            .collect();

        let table = Table::new(rows, widths)
            .header(header)
            .block(block)
            .column_spacing(1);

        table.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fluxpool_core::table::RowAction;

    #[test]
    fn progress_cells_draw_a_bar() {
        let cell = CellValue::Progress {
            percent: 40,
            positive: true,
            caption: "12.00 ETH".into(),
        };
        assert_eq!(cell_text(&cell), "████░░░░░░  40% 12.00 ETH");
        assert_eq!(cell_text(&CellValue::Action(RowAction::Share)), "[Share]");
    }

    #[test]
    fn sorted_header_carries_arrow() {
        let theme = Theme::default();
        let table = RenderedTable::default();
        let sort = SortSpec {
            key: "pnl".into(),
            direction: SortDirection::Descending,
        };
        let panel = TablePanel::new(&table, 0, Some(&sort), "Spot", &theme);
        assert_eq!(panel.header_title("pnl", "PnL"), "PnL ▼");
        assert_eq!(panel.header_title("size", "Size"), "Size");
    }

    #[test]
    fn scroll_keeps_selection_visible() {
        let theme = Theme::default();
        let table = RenderedTable::default();
        let panel = TablePanel::new(&table, 30, None, "Trades", &theme);
        assert_eq!(panel.scroll_offset(20), 11);
        let panel = TablePanel::new(&table, 5, None, "Trades", &theme);
        assert_eq!(panel.scroll_offset(20), 0);
    }
}
