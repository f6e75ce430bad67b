//! Top-level UI layout: tab bar, active table, status bar, dialog overlay.

pub mod dialog;
pub mod status_bar;
pub mod table_panel;

use chrono::{DateTime, Utc};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Tabs};

use fluxpool_core::Tab;

use crate::app::App;
use crate::theme::{self, Theme};
use table_panel::TablePanel;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &App, now: DateTime<Utc>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(f.area());

    draw_tabs(f, chunks[0], app.active_tab());

    let theme = Theme::default();
    let table = app.table(now);
    let panel = TablePanel::new(
        &table,
        app.cursor,
        app.sort.as_ref(),
        app.active_tab().label(),
        &theme,
    );
    f.render_widget(panel, chunks[1]);

    status_bar::render(f, chunks[2], app);

    if app.dashboard.dialog().is_open() {
        dialog::render(f, chunks[1], app.dashboard.dialog());
    }
}

fn draw_tabs(f: &mut Frame, area: Rect, active: Tab) {
    let titles: Vec<Line> = Tab::ALL
        .iter()
        .map(|tab| Line::from(format!("{} {}", tab.index() + 1, tab.label())))
        .collect();
    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::panel_border(true))
                .title(" FluxPool ")
                .title_style(theme::accent_bold()),
        )
        .select(active.index())
        .style(theme::muted())
        .highlight_style(theme::accent().add_modifier(Modifier::REVERSED));
    f.render_widget(tabs, area);
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
