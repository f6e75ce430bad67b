//! Per-entity column tables.
//!
//! Each row type has its own descriptor list built from the shared
//! primitives. Variants are composed, never subclassed: curve positions are
//! the position list with a curve-name column in front, and the spot and curve
//! views each append the share action.

use crate::domain::{Holder, Position, TopTrader, TradeEvent};

use super::cell::{CellValue, RowAction};
use super::column::{extend, prepend, Column, ColumnSet};
use super::primitives::{identity_link, identity_or_fallback, is_positive, short_ref, signed, time_ago};

pub fn trade_columns() -> ColumnSet<TradeEvent> {
    ColumnSet::new(vec![
        Column::new("timestamp", "Time", |t: &TradeEvent, ctx| CellValue::Relative {
            text: time_ago(t.timestamp, ctx.now),
            at: t.timestamp,
        }),
        Column::new("side", "Type", |t: &TradeEvent, _| CellValue::Side(t.side)),
        Column::text("quantity", "Amount (ETH)", TradeEvent::quantity_display),
        Column::text("price", "Price (USD)", TradeEvent::price_display),
        Column::text("market_cap", "Market Cap", |t: &TradeEvent| t.market_cap.clone()),
        Column::new("identity", "User Address", |t: &TradeEvent, ctx| {
            identity_or_fallback(t.identity_label.as_deref(), &t.transaction_ref, ctx.links.as_ref())
        }),
        Column::new("transaction_ref", "Transaction Hash", |t: &TradeEvent, _| {
            CellValue::Mono(short_ref(&t.transaction_ref))
        })
        .unsortable(),
    ])
}

pub fn position_columns() -> ColumnSet<Position> {
    ColumnSet::new(vec![
        Column::text("symbol", "Symbol", |p: &Position| p.symbol.clone()),
        Column::text("kind", "Type", |p: &Position| p.kind.label().to_string()),
        Column::text("size", "Size", |p: &Position| p.size.clone()),
        Column::text("entry", "Entry", |p: &Position| p.entry_price.clone()),
        Column::text("current", "Current", |p: &Position| p.current_price.clone()),
        Column::new("pnl", "PnL", |p: &Position, _| signed(&p.pnl_absolute)),
        Column::new("pnl_percent", "%", |p: &Position, _| signed(&p.pnl_percent)),
        Column::new("close", "", |_: &Position, _| CellValue::Action(RowAction::Close)).unsortable(),
    ])
}

pub fn curve_name_column() -> Column<Position> {
    Column::text("curve", "Curve", |p: &Position| p.curve_name.clone().unwrap_or_default())
}

/// Position columns with the curve name in front.
pub fn curve_columns(positions: &ColumnSet<Position>) -> ColumnSet<Position> {
    prepend(&[curve_name_column()], positions)
}

pub fn share_column() -> Column<Position> {
    Column::new("share", "", |_: &Position, _| CellValue::Action(RowAction::Share)).unsortable()
}

pub fn holder_columns() -> ColumnSet<Holder> {
    ColumnSet::new(vec![
        Column::new("address", "Address", |h: &Holder, ctx| {
            identity_link(&h.identity_or_address, ctx.links.as_ref())
        }),
        Column::text("holding", "Holding", |h: &Holder| h.holding_amount.clone()),
        Column::text("avg_buy", "Avg Buy", |h: &Holder| h.avg_buy_price.clone()),
        Column::text("avg_sold", "Avg Sold", |h: &Holder| h.avg_sell_price.clone()),
        Column::text("position_size", "Position Size", |h: &Holder| h.position_size.clone()),
        Column::text("eth_balance", "ETH Balance", |h: &Holder| h.eth_balance.clone()),
        Column::new("pnl", "PnL", |h: &Holder, _| signed(&h.pnl_absolute)),
        Column::new("sold_percent", "Sold %", |h: &Holder, _| CellValue::Progress {
            percent: h.sold_percent.min(100),
            positive: is_positive(&h.pnl_absolute),
            caption: h.position_size.clone(),
        }),
    ])
}

pub fn top_trader_columns() -> ColumnSet<TopTrader> {
    ColumnSet::new(vec![
        Column::text("rank", "#", |t: &TopTrader| t.rank.to_string()),
        Column::new("wallet", "Wallet", |t: &TopTrader, ctx| {
            identity_link(&t.identity_or_address, ctx.links.as_ref())
        }),
        Column::text("balance", "ETH Balance", |t: &TopTrader| t.balance.clone()),
        Column::text("bought", "Bought (Avg Buy)", |t: &TopTrader| t.bought_summary.clone()),
        Column::text("sold", "Sold (Avg Sell)", |t: &TopTrader| t.sold_summary.clone()),
        Column::new("pnl", "PnL", |t: &TopTrader, _| signed(&t.pnl_absolute)),
        Column::new("pnl_percent", "%", |t: &TopTrader, _| signed(&t.pnl_percent)),
        Column::text("remaining", "Remaining", |t: &TopTrader| t.remaining_summary.clone()),
    ])
}

/// Column sets for the five dashboard views, built once and shared.
#[derive(Debug, Clone)]
pub struct ColumnRegistry {
    pub trades: ColumnSet<TradeEvent>,
    /// Base position list that both position views extend.
    pub positions: ColumnSet<Position>,
    pub spot: ColumnSet<Position>,
    pub curve: ColumnSet<Position>,
    pub holders: ColumnSet<Holder>,
    pub traders: ColumnSet<TopTrader>,
}

impl ColumnRegistry {
    pub fn new() -> Self {
        let positions = position_columns();
        let share = share_column();
        let spot = extend(&positions, &[share.clone()]);
        let curve = extend(&curve_columns(&positions), &[share]);
        Self {
            trades: trade_columns(),
            positions,
            spot,
            curve,
            holders: holder_columns(),
            traders: top_trader_columns(),
        }
    }
}

impl Default for ColumnRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn spot_is_positions_plus_share() {
        let reg = ColumnRegistry::new();
        assert_eq!(reg.spot.len(), reg.positions.len() + 1);
        assert_eq!(reg.spot.keys().last(), Some(&"share"));
        assert_eq!(reg.positions.keys().last(), Some(&"close"));
    }

    #[test]
    fn curve_prepends_name_and_appends_share() {
        let reg = ColumnRegistry::new();
        let keys = reg.curve.keys();
        assert_eq!(keys.first(), Some(&"curve"));
        assert_eq!(keys.last(), Some(&"share"));
        assert_eq!(reg.curve.len(), reg.positions.len() + 2);
    }

    #[test]
    fn views_share_base_renderers() {
        let reg = ColumnRegistry::new();
        for key in reg.positions.keys() {
            let base = reg.positions.get(key).unwrap().renderer();
            assert!(Arc::ptr_eq(base, reg.spot.get(key).unwrap().renderer()));
            assert!(Arc::ptr_eq(base, reg.curve.get(key).unwrap().renderer()));
        }
        assert!(Arc::ptr_eq(
            reg.spot.get("share").unwrap().renderer(),
            reg.curve.get("share").unwrap().renderer()
        ));
    }

    #[test]
    fn trade_headers_in_display_order() {
        let headers: Vec<_> = trade_columns().iter().map(|c| c.header).collect();
        assert_eq!(
            headers,
            vec![
                "Time",
                "Type",
                "Amount (ETH)",
                "Price (USD)",
                "Market Cap",
                "User Address",
                "Transaction Hash"
            ]
        );
    }
}
