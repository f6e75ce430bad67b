//! Broadcast sharing flow
//!
//! - BroadcastRecord: validated, append-only entry (position + message + time)
//! - BroadcastLog: persisted collection behind a narrow repository trait
//! - BroadcastDialog: Closed → Open → Confirmed → Closed state machine

pub mod dialog;
pub mod log;
pub mod record;

use thiserror::Error;

use crate::store::StoreError;

pub use dialog::{BroadcastDialog, DialogState};
pub use self::log::{BroadcastLog, BroadcastRepository, KvBroadcastRepository};
pub use record::BroadcastRecord;

#[derive(Debug, Error)]
pub enum BroadcastError {
    #[error("broadcast message is empty")]
    EmptyMessage,

    #[error("broadcast message is {len} characters, limit is {max}")]
    MessageTooLong { len: usize, max: usize },

    #[error("broadcast dialog is not open")]
    NotOpen,

    #[error("stored broadcast collection is corrupt: {0}")]
    Corrupt(#[source] serde_json::Error),

    #[error("failed to encode broadcast collection: {0}")]
    Encode(#[source] serde_json::Error),

    #[error(transparent)]
    Store(#[from] StoreError),
}
