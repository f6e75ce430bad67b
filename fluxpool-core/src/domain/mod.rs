//! Domain types for the FluxPool feed

pub mod holder;
pub mod ids;
pub mod position;
pub mod trade;

pub use holder::{Holder, TopTrader};
pub use ids::{PositionId, TradeId};
pub use position::{Position, PositionKind};
pub use trade::{Side, TradeEvent};
