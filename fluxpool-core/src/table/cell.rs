//! Rendered cell values.
//!
//! A cell is data, not markup: the shell decides colors and widgets from the
//! variant. Every cell can produce its plain display text and a sort key.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use crate::domain::Side;

/// Per-row action exposed by an action column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowAction {
    /// Open the broadcast dialog for this position.
    Share,
    /// Close this position.
    Close,
}

impl RowAction {
    pub fn label(self) -> &'static str {
        match self {
            RowAction::Share => "Share",
            RowAction::Close => "Close",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    /// Signed figure; `positive` drives green/red.
    Signed { text: String, positive: bool },
    Side(Side),
    /// Relative age, sorted by the underlying instant.
    Relative { text: String, at: DateTime<Utc> },
    /// Navigable identity reference.
    Link { label: String, href: String },
    /// Fixed-width token such as a shortened hash.
    Mono(String),
    /// Bar with a caption beside it.
    Progress { percent: u8, positive: bool, caption: String },
    Action(RowAction),
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        CellValue::Text(value.into())
    }

    pub fn display(&self) -> String {
        match self {
            CellValue::Text(text)
            | CellValue::Signed { text, .. }
            | CellValue::Relative { text, .. }
            | CellValue::Mono(text) => text.clone(),
            CellValue::Side(side) => side.label().to_string(),
            CellValue::Link { label, .. } => label.clone(),
            CellValue::Progress { percent, caption, .. } => format!("{percent}% {caption}"),
            CellValue::Action(action) => action.label().to_string(),
        }
    }

    pub fn sort_key(&self) -> SortKey {
        match self {
            CellValue::Relative { at, .. } => SortKey::Number(at.timestamp_millis() as f64),
            CellValue::Progress { percent, .. } => SortKey::Number(f64::from(*percent)),
            CellValue::Action(_) => SortKey::Empty,
            CellValue::Side(side) => SortKey::Text(side.label().to_string()),
            other => {
                let text = other.display();
                match parse_leading_number(&text) {
                    Some(n) => SortKey::Number(n),
                    None => SortKey::Text(text.to_lowercase()),
                }
            }
        }
    }
}

/// Comparable projection of a cell. Numbers sort before text, text before empty.
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey {
    Number(f64),
    Text(String),
    Empty,
}

impl SortKey {
    pub fn compare(&self, other: &SortKey) -> Ordering {
        match (self, other) {
            (SortKey::Number(a), SortKey::Number(b)) => a.total_cmp(b),
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            (SortKey::Empty, SortKey::Empty) => Ordering::Equal,
            (SortKey::Number(_), _) => Ordering::Less,
            (_, SortKey::Number(_)) => Ordering::Greater,
            (SortKey::Text(_), SortKey::Empty) => Ordering::Less,
            (SortKey::Empty, SortKey::Text(_)) => Ordering::Greater,
        }
    }
}

/// Read the number at the start of a formatted figure, ignoring sign, `$` and
/// thousands separators: `"-$1,234.50"` → `-1234.5`, `"2.45 ETH"` → `2.45`.
pub fn parse_leading_number(text: &str) -> Option<f64> {
    let mut rest = text.trim_start();
    let mut negative = false;
    if let Some(stripped) = rest.strip_prefix('-') {
        negative = true;
        rest = stripped;
    } else if let Some(stripped) = rest.strip_prefix('+') {
        rest = stripped;
    }
    let rest = rest.strip_prefix('$').unwrap_or(rest);
    let digits: String = rest
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == ',' || *c == '.')
        .filter(|c| *c != ',')
        .collect();
    if !digits.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    let value: f64 = digits.parse().ok()?;
    Some(if negative { -value } else { value })
}
