//! Live feed simulation
//!
//! - EventBuffer: bounded newest-first store
//! - EventGenerator: chained-timer producer that owns the buffer
//! - FeedSession: activate/deactivate lifecycle around one generator

pub mod buffer;
pub mod generator;
pub mod session;

pub use buffer::{EventBuffer, FeedSnapshot};
pub use generator::EventGenerator;
pub use session::FeedSession;
