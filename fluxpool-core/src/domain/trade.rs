//! TradeEvent: one synthetic print on the live feed.

use super::ids::TradeId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Aggressor side of a trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    pub fn label(self) -> &'static str {
        match self {
            Side::Buy => "BUY",
            Side::Sell => "SELL",
        }
    }

    pub fn is_buy(self) -> bool {
        matches!(self, Side::Buy)
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A synthetic trade event. Immutable once built; the feed shares it behind `Arc`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeEvent {
    pub id: TradeId,
    pub timestamp: DateTime<Utc>,
    pub side: Side,
    /// Quantity in ETH, three decimals.
    pub quantity: f64,
    /// Price in USD, two decimals.
    pub price: f64,
    /// Pre-formatted market cap, e.g. `"$12,345,678"`.
    pub market_cap: String,
    /// `0x`-prefixed 64-char hex hash.
    pub transaction_ref: String,
    pub identity_label: Option<String>,
}

impl TradeEvent {
    pub fn quantity_display(&self) -> String {
        format!("{:.3}", self.quantity)
    }

    pub fn price_display(&self) -> String {
        format!("${:.2}", self.price)
    }
}
