//! Position rows for the spot and curve tables.
//!
//! Fields are display strings, already formatted (`"+$122.50"`, `"2.45 ETH"`).
//! The serde names match the persisted broadcast format, so a `Position`
//! round-trips through the broadcast store unchanged.

use super::ids::PositionId;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PositionKind {
    Long,
    Short,
    Curve,
}

impl PositionKind {
    pub fn label(self) -> &'static str {
        match self {
            PositionKind::Long => "Long",
            PositionKind::Short => "Short",
            PositionKind::Curve => "Curve",
        }
    }
}

impl fmt::Display for PositionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub id: PositionId,
    pub symbol: String,
    #[serde(rename = "type")]
    pub kind: PositionKind,
    pub size: String,
    #[serde(rename = "entry")]
    pub entry_price: String,
    #[serde(rename = "current")]
    pub current_price: String,
    #[serde(rename = "pnl")]
    pub pnl_absolute: String,
    #[serde(rename = "pnlPercent")]
    pub pnl_percent: String,
    #[serde(rename = "curve", default, skip_serializing_if = "Option::is_none")]
    pub curve_name: Option<String>,
}

impl Position {
    /// Re-label a spot position as a curve position on the named pool.
    pub fn on_curve(&self, curve_name: impl Into<String>) -> Self {
        Self {
            kind: PositionKind::Curve,
            curve_name: Some(curve_name.into()),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eth_long() -> Position {
        Position {
            id: PositionId(1),
            symbol: "ETH/USDT".into(),
            kind: PositionKind::Long,
            size: "2.45 ETH".into(),
            entry_price: "$2,400.00".into(),
            current_price: "$2,450.00".into(),
            pnl_absolute: "+$122.50".into(),
            pnl_percent: "+2.08%".into(),
            curve_name: None,
        }
    }

    #[test]
    fn wire_names_match_persisted_format() {
        let json = serde_json::to_value(eth_long()).unwrap();
        assert_eq!(json["type"], "Long");
        assert_eq!(json["entry"], "$2,400.00");
        assert_eq!(json["pnlPercent"], "+2.08%");
        assert!(json.get("curve").is_none());
    }

    #[test]
    fn on_curve_keeps_figures_and_sets_kind() {
        let curve = eth_long().on_curve("Balancer");
        assert_eq!(curve.kind, PositionKind::Curve);
        assert_eq!(curve.curve_name.as_deref(), Some("Balancer"));
        assert_eq!(curve.pnl_absolute, "+$122.50");
        let json = serde_json::to_value(&curve).unwrap();
        assert_eq!(json["curve"], "Balancer");
    }
}
