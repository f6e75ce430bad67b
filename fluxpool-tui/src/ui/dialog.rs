//! Broadcast dialog overlay.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use fluxpool_core::broadcast::{BroadcastDialog, DialogState};
use fluxpool_core::table::primitives::is_positive;

use crate::theme;
use crate::ui::centered_rect;

/// Same signed classification the tables use.
fn pnl_style(formatted: &str) -> Style {
    if is_positive(formatted) {
        theme::positive()
    } else {
        theme::negative()
    }
}

pub fn render(f: &mut Frame, area: Rect, dialog: &BroadcastDialog) {
    let Some(position) = dialog.position() else {
        return;
    };
    let popup = centered_rect(60, 40, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(format!(" Broadcast {} ", position.symbol))
        .title_style(theme::accent_bold());

    let pnl = pnl_style(&position.pnl_absolute);

    let mut lines = vec![
        Line::from(vec![
            Span::styled(format!("{} {} ", position.kind, position.size), theme::muted()),
            Span::styled(
                format!("{} ({})", position.pnl_absolute, position.pnl_percent),
                pnl,
            ),
        ]),
        Line::from(""),
    ];

    match dialog.state() {
        DialogState::Confirmed => {
            lines.push(Line::from(Span::styled("Broadcast sent!", theme::positive())));
        }
        _ => {
            let draft = if dialog.message().is_empty() {
                Span::styled(
                    format!("Share your thoughts about {}...", position.symbol),
                    theme::muted(),
                )
            } else {
                Span::raw(format!("{}▏", dialog.message()))
            };
            lines.push(Line::from(draft));
            lines.push(Line::from(""));
            let hint_style = if dialog.can_submit() {
                theme::accent()
            } else {
                theme::muted()
            };
            lines.push(Line::from(vec![
                Span::styled(format!("{} left  ", dialog.remaining_chars()), theme::muted()),
                Span::styled("[Enter] broadcast  ", hint_style),
                Span::styled("[Esc] cancel", theme::muted()),
            ]));
        }
    }

    let para = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    f.render_widget(para, popup);
}
