//! One shared position with its message.
//!
//! Wire format is `{ "pos": <Position>, "message": "...", "time": "<RFC 3339>" }`.
//! Deserialization goes through the same validation as [`BroadcastRecord::new`],
//! so a record with a blank message cannot exist in memory.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::BroadcastError;
use crate::domain::Position;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RecordWire", into = "RecordWire")]
pub struct BroadcastRecord {
    position: Position,
    message: String,
    created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize)]
struct RecordWire {
    pos: Position,
    message: String,
    time: DateTime<Utc>,
}

impl BroadcastRecord {
    /// Trim `raw_message` and build a record. Fails when the trimmed message
    /// is empty or longer than `max_chars` characters.
    pub fn new(
        position: Position,
        raw_message: &str,
        created_at: DateTime<Utc>,
        max_chars: usize,
    ) -> Result<Self, BroadcastError> {
        let message = raw_message.trim();
        if message.is_empty() {
            return Err(BroadcastError::EmptyMessage);
        }
        let len = message.chars().count();
        if len > max_chars {
            return Err(BroadcastError::MessageTooLong { len, max: max_chars });
        }
        Ok(Self {
            position,
            message: message.to_string(),
            created_at,
        })
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl TryFrom<RecordWire> for BroadcastRecord {
    type Error = BroadcastError;

    fn try_from(wire: RecordWire) -> Result<Self, Self::Error> {
        // Stored records predate any limit change; only emptiness is re-checked.
        Self::new(wire.pos, &wire.message, wire.time, usize::MAX)
    }
}

impl From<BroadcastRecord> for RecordWire {
    fn from(record: BroadcastRecord) -> Self {
        Self {
            pos: record.position,
            message: record.message,
            time: record.created_at,
        }
    }
}
