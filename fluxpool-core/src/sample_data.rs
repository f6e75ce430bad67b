//! Static demo datasets for the position, holder and leaderboard tables.
//!
//! Spot positions are fixed. Everything else is drawn from one RNG stream, so
//! a seeded run shows the same tables every time.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::{Holder, Position, PositionId, PositionKind, TopTrader};
use crate::format::{format_signed_percent, format_signed_usd};
use crate::labels::{CURVE_NAMES, IDENTITY_POOL};
use crate::rng::{RngStreams, SAMPLE_STREAM};

const HOLDER_COUNT: u32 = 10;
const TRADER_COUNT: u32 = 20;
/// Leaderboard ranks that are always in profit.
const TOP_RANKS_POSITIVE: u32 = 5;
const TRADER_POSITIVE_PROBABILITY: f64 = 0.8;

#[derive(Debug, Clone, PartialEq)]
pub struct SampleData {
    pub spot: Vec<Position>,
    pub curve: Vec<Position>,
    pub holders: Vec<Holder>,
    pub traders: Vec<TopTrader>,
}

impl SampleData {
    pub fn from_streams(streams: &RngStreams) -> Self {
        let mut rng = streams.rng_for(SAMPLE_STREAM, 0);
        Self::generate(&mut rng)
    }

    pub fn generate(rng: &mut StdRng) -> Self {
        let spot = spot_positions();
        let curve = curve_positions(&spot);
        let holders = (0..HOLDER_COUNT).map(|i| holder(rng, i)).collect();
        let traders = (0..TRADER_COUNT).map(|i| top_trader(rng, i)).collect();
        Self {
            spot,
            curve,
            holders,
            traders,
        }
    }
}

pub fn spot_positions() -> Vec<Position> {
    let row = |id, symbol: &str, kind, size: &str, entry: &str, current: &str, pnl: &str, pct: &str| {
        Position {
            id: PositionId(id),
            symbol: symbol.into(),
            kind,
            size: size.into(),
            entry_price: entry.into(),
            current_price: current.into(),
            pnl_absolute: pnl.into(),
            pnl_percent: pct.into(),
            curve_name: None,
        }
    };
    vec![
        row(1, "ETH/USDT", PositionKind::Long, "2.45 ETH", "$2,400.00", "$2,450.00", "+$122.50", "+2.08%"),
        row(2, "BTC/USDT", PositionKind::Short, "0.15 BTC", "$43,200.00", "$43,000.00", "+$30.00", "+0.46%"),
        row(3, "UNI/USDT", PositionKind::Long, "150 UNI", "$6.50", "$7.85", "+$202.50", "+20.77%"),
    ]
}

/// The spot rows re-labelled onto curve pools, names cycled in order.
pub fn curve_positions(spot: &[Position]) -> Vec<Position> {
    spot.iter()
        .zip(CURVE_NAMES.iter().cycle())
        .map(|(p, name)| p.on_curve(*name))
        .collect()
}

fn pick_identity(rng: &mut StdRng, fallback: u32) -> String {
    IDENTITY_POOL
        .choose(rng)
        .map(|s| s.to_string())
        .unwrap_or_else(|| format!("trader{fallback}.fluxpool.eth"))
}

fn holder(rng: &mut StdRng, i: u32) -> Holder {
    let sold: u8 = rng.gen_range(0..100);
    let negative = i % 3 == 0;
    let pnl = rng.gen_range(0.0..10_000.0);
    Holder {
        id: i + 1,
        identity_or_address: pick_identity(rng, i),
        holding_amount: format!("{} ETH", 100 - u32::from(sold)),
        avg_buy_price: format!("${:.2}", rng.gen_range(2000.0..3000.0)),
        avg_sell_price: format!("${:.2}", rng.gen_range(2000.0..3000.0)),
        position_size: format!("{:.2} ETH", rng.gen_range(0.0..100.0)),
        eth_balance: format!("{:.2}", rng.gen_range(0.0..100.0)),
        pnl_absolute: format_signed_usd(if negative { -pnl } else { pnl }),
        sold_percent: sold,
    }
}

fn top_trader(rng: &mut StdRng, i: u32) -> TopTrader {
    let rank = i + 1;
    let identity = IDENTITY_POOL[i as usize % IDENTITY_POOL.len()].to_string();
    let balance = format!("{:.2}", rng.gen_range(0.0..500.0));
    let bought = format!(
        "${:.2}K ({:.1}M / {})",
        rng.gen_range(0.0..10_000.0),
        rng.gen_range(0.0..1000.0),
        rng.gen_range(1..=10)
    );
    let sold = format!(
        "${:.2}K ({:.1}M / {})",
        rng.gen_range(0.0..20_000.0),
        rng.gen_range(0.0..1000.0),
        rng.gen_range(1..=100)
    );
    let (pnl, pct) = if rank <= TOP_RANKS_POSITIVE {
        (rng.gen_range(1000.0..11_000.0), rng.gen_range(10.0..40.0))
    } else {
        let positive = rng.gen_bool(TRADER_POSITIVE_PROBABILITY);
        let sign = if positive { 1.0 } else { -1.0 };
        (sign * rng.gen_range(0.0..10_000.0), sign * rng.gen_range(0.0..30.0))
    };
    let remaining = format!(
        "${:.1} ({}%)",
        rng.gen_range(0.0..5000.0),
        rng.gen_range(0..100)
    );
    TopTrader {
        rank,
        identity_or_address: identity,
        balance,
        bought_summary: bought,
        sold_summary: sold,
        pnl_absolute: format_signed_usd(pnl),
        pnl_percent: format_signed_percent(pct),
        remaining_summary: remaining,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::primitives::is_positive;

    fn sample(seed: u64) -> SampleData {
        SampleData::from_streams(&RngStreams::new(seed))
    }

    #[test]
    fn sizes_match_tables() {
        let data = sample(7);
        assert_eq!(data.spot.len(), 3);
        assert_eq!(data.curve.len(), 3);
        assert_eq!(data.holders.len(), 10);
        assert_eq!(data.traders.len(), 20);
    }

    #[test]
    fn same_seed_same_data() {
        assert_eq!(sample(42), sample(42));
        assert_ne!(sample(42).holders, sample(43).holders);
    }

    #[test]
    fn curve_rows_cycle_names() {
        let data = sample(1);
        let names: Vec<_> = data.curve.iter().filter_map(|p| p.curve_name.as_deref()).collect();
        assert_eq!(names, vec!["Uniswap V3", "Curve.fi", "Balancer"]);
        assert!(data.curve.iter().all(|p| p.kind == PositionKind::Curve));
        assert_eq!(data.curve[0].pnl_absolute, data.spot[0].pnl_absolute);
    }

    #[test]
    fn every_third_holder_is_negative() {
        let data = sample(9);
        for (i, h) in data.holders.iter().enumerate() {
            assert_eq!(is_positive(&h.pnl_absolute), i % 3 != 0, "holder {i}");
            assert!(h.sold_percent < 100);
        }
    }

    #[test]
    fn top_five_traders_are_positive() {
        for seed in 0..10 {
            let data = sample(seed);
            for t in data.traders.iter().take(5) {
                assert!(is_positive(&t.pnl_absolute));
                assert!(is_positive(&t.pnl_percent));
            }
            let ranks: Vec<_> = data.traders.iter().map(|t| t.rank).collect();
            assert_eq!(ranks, (1..=20).collect::<Vec<_>>());
        }
    }
}
