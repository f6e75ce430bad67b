//! Holder and leaderboard rows.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holder {
    pub id: u32,
    pub identity_or_address: String,
    pub holding_amount: String,
    pub avg_buy_price: String,
    pub avg_sell_price: String,
    pub position_size: String,
    pub eth_balance: String,
    pub pnl_absolute: String,
    /// Share of the original position already sold, 0..=100.
    pub sold_percent: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopTrader {
    pub rank: u32,
    pub identity_or_address: String,
    pub balance: String,
    pub bought_summary: String,
    pub sold_summary: String,
    pub pnl_absolute: String,
    pub pnl_percent: String,
    pub remaining_summary: String,
}
