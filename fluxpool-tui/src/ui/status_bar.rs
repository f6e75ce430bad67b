//! Bottom status bar: key hints, feed state, last status message.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::{App, StatusLevel};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let mut spans: Vec<Span> = Vec::new();

    let feed = if app.dashboard.is_active() {
        Span::styled(" ● LIVE ", theme::positive())
    } else {
        Span::styled(" ○ IDLE ", theme::muted())
    };
    spans.push(feed);

    spans.push(Span::styled(
        "1-5/Tab:tabs j/k:move o:sort r:reverse s:share c:close q:quit",
        theme::muted(),
    ));

    if let Some((msg, level)) = &app.status_message {
        spans.push(Span::raw(" | "));
        let style = match level {
            StatusLevel::Info => theme::accent(),
            StatusLevel::Warning => theme::warning(),
            StatusLevel::Error => theme::negative(),
        };
        spans.push(Span::styled(msg.as_str(), style));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
