//! Neon-on-dark theme tokens for the FluxPool dashboard.
//!
//! # Color Palette
//! - **Background**: Deep violet-black (base layer)
//! - **Accent**: Electric violet (focus, active tab, links)
//! - **Positive**: Neon green (gains, buys)
//! - **Negative**: Hot pink (losses, sells)
//! - **Warning**: Neon orange (ignored actions, store errors)
//! - **Muted**: Steel blue (hints, hashes, secondary text)

use ratatui::style::{Color, Modifier, Style};

use fluxpool_core::domain::Side;
use fluxpool_core::table::{CellValue, RowAction};

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Deep violet-black background (primary surface)
    pub background: Color,
    /// Electric violet (focus, highlights)
    pub accent: Color,
    /// Neon green (positive values, buys)
    pub positive: Color,
    /// Hot pink (negative values, sells)
    pub negative: Color,
    /// Neon orange (warnings)
    pub warning: Color,
    /// Cool purple (neutral info)
    pub neutral: Color,
    /// Steel blue (muted text)
    pub muted: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::neon()
    }
}

impl Theme {
    pub fn neon() -> Self {
        Self {
            background: Color::Rgb(16, 12, 24),
            accent: Color::Rgb(167, 139, 250),
            positive: Color::Rgb(0, 255, 128),
            negative: Color::Rgb(255, 20, 147),
            warning: Color::Rgb(255, 140, 0),
            neutral: Color::Rgb(147, 112, 219),
            muted: Color::Rgb(100, 149, 237),
            text_primary: Color::White,
            text_secondary: Color::Rgb(170, 170, 170),
        }
    }

    /// Green for gains, pink for everything else (signed-string convention).
    pub fn pnl_color(&self, positive: bool) -> Color {
        if positive {
            self.positive
        } else {
            self.negative
        }
    }

    pub fn side_color(&self, side: Side) -> Color {
        self.pnl_color(side.is_buy())
    }

    pub fn action_color(&self, action: RowAction) -> Color {
        match action {
            RowAction::Share => self.accent,
            RowAction::Close => self.warning,
        }
    }

    /// Style for one rendered cell.
    pub fn cell_style(&self, cell: &CellValue) -> Style {
        let fg = match cell {
            CellValue::Text(_) => self.text_primary,
            CellValue::Signed { positive, .. } | CellValue::Progress { positive, .. } => {
                self.pnl_color(*positive)
            }
            CellValue::Side(side) => self.side_color(*side),
            CellValue::Relative { .. } => self.text_secondary,
            CellValue::Link { .. } => self.accent,
            CellValue::Mono(_) => self.muted,
            CellValue::Action(action) => self.action_color(*action),
        };
        let style = Style::default().fg(fg);
        match cell {
            CellValue::Side(_) | CellValue::Action(_) => style.add_modifier(Modifier::BOLD),
            CellValue::Link { .. } => style.add_modifier(Modifier::UNDERLINED),
            _ => style,
        }
    }
}

// Shared style shorthands used by the ui modules.

pub fn accent() -> Style {
    Style::default().fg(Theme::default().accent)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn muted() -> Style {
    Style::default().fg(Theme::default().muted)
}

pub fn warning() -> Style {
    Style::default().fg(Theme::default().warning)
}

pub fn negative() -> Style {
    Style::default().fg(Theme::default().negative)
}

pub fn positive() -> Style {
    Style::default().fg(Theme::default().positive)
}

pub fn panel_border(active: bool) -> Style {
    if active {
        accent()
    } else {
        muted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_creation() {
        let theme = Theme::default();
        assert_eq!(theme.background, Color::Rgb(16, 12, 24));
        assert_eq!(theme.positive, Color::Rgb(0, 255, 128));
    }

    #[test]
    fn test_signed_cells_follow_sign() {
        let theme = Theme::default();
        let up = CellValue::Signed { text: "+$1.00".into(), positive: true };
        let down = CellValue::Signed { text: "-$1.00".into(), positive: false };
        assert_eq!(theme.cell_style(&up).fg, Some(theme.positive));
        assert_eq!(theme.cell_style(&down).fg, Some(theme.negative));
    }

    #[test]
    fn test_side_and_action_colors() {
        let theme = Theme::default();
        assert_eq!(theme.side_color(Side::Buy), theme.positive);
        assert_eq!(theme.side_color(Side::Sell), theme.negative);
        assert_eq!(theme.action_color(RowAction::Close), theme.warning);
        let share = theme.cell_style(&CellValue::Action(RowAction::Share));
        assert!(share.add_modifier.contains(Modifier::BOLD));
    }
}
