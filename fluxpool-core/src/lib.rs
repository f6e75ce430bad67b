//! FluxPool Core: synthetic trade feed, table composition and broadcast flow.
//!
//! This crate is the engine behind the dashboard shell:
//! - Domain types (trade events, positions, holders, top traders)
//! - Cancellable single-shot timers driven by caller-supplied time
//! - Self-rescheduling trade generator feeding a bounded newest-first buffer
//! - Declarative column descriptors, composition and rendering
//! - Append-only broadcast log over a key-value store, with its dialog machine
//! - Dashboard facade tying the above to a tab controller

pub mod broadcast;
pub mod config;
pub mod dashboard;
pub mod domain;
pub mod feed;
pub mod format;
pub mod labels;
pub mod rng;
pub mod sample_data;
pub mod schedule;
pub mod store;
pub mod table;
pub mod view;

pub use config::DashboardConfig;
pub use dashboard::{Dashboard, TickOutcome};
pub use view::Tab;
