//! FluxPool TUI - terminal dashboard over the live synthetic trade feed
//!
//! Five tabs over one shared table pipeline:
//! - Trades (live feed, newest first)
//! - Spot and Curve positions with per-row share and close actions
//! - Token holders and top traders
//!
//! Sharing a position opens the broadcast dialog, which persists the
//! message and closes itself shortly after confirmation.

pub mod app;
pub mod input;
pub mod persistence;
pub mod theme;
pub mod ui;

pub use app::App;
pub use input::handle_key;
pub use theme::Theme;

#[cfg(test)]
mod test_helpers;
