//! Share dialog state machine.
//!
//! ```text
//! Closed --open_with_position--> Open --submit ok--> Confirmed --auto-close--> Closed
//!                                 |  \--cancel----------------------------------^
//!                                 \--submit err (stays Open)
//! ```
//!
//! Confirmed closes itself after a fixed delay, driven by [`BroadcastDialog::poll`].

use chrono::{DateTime, Duration, Utc};

use super::log::BroadcastLog;
use super::BroadcastError;
use crate::config::BroadcastConfig;
use crate::domain::Position;
use crate::schedule::TimerSlot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogState {
    Closed,
    Open,
    Confirmed,
}

#[derive(Debug)]
pub struct BroadcastDialog {
    state: DialogState,
    position: Option<Position>,
    message: String,
    max_chars: usize,
    auto_close: Duration,
    timer: TimerSlot,
    revision: u64,
}

impl BroadcastDialog {
    pub fn new(config: &BroadcastConfig) -> Self {
        Self {
            state: DialogState::Closed,
            position: None,
            message: String::new(),
            max_chars: config.max_message_chars,
            auto_close: Duration::milliseconds(config.auto_close_ms as i64),
            timer: TimerSlot::new(),
            revision: 0,
        }
    }

    pub fn state(&self) -> DialogState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state != DialogState::Closed
    }

    pub fn position(&self) -> Option<&Position> {
        self.position.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Bumped on every observable change.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn can_submit(&self) -> bool {
        self.state == DialogState::Open && !self.message.trim().is_empty()
    }

    pub fn remaining_chars(&self) -> usize {
        self.max_chars.saturating_sub(self.message.chars().count())
    }

    /// When the confirmed dialog will close itself.
    pub fn closes_at(&self) -> Option<DateTime<Utc>> {
        self.timer.pending().map(|shot| shot.deadline())
    }

    /// Closed → Open with an empty message. Ignored in any other state.
    pub fn open_with_position(&mut self, position: Position) -> bool {
        if self.state != DialogState::Closed {
            log::warn!(
                "share for {} ignored: dialog is {:?}",
                position.symbol,
                self.state
            );
            return false;
        }
        log::debug!("dialog opened for {}", position.symbol);
        self.position = Some(position);
        self.message.clear();
        self.state = DialogState::Open;
        self.revision += 1;
        true
    }

    /// Replace the draft message, clamped to the character limit. Open only.
    pub fn edit_message(&mut self, text: &str) -> bool {
        if self.state != DialogState::Open {
            return false;
        }
        self.message = text.chars().take(self.max_chars).collect();
        self.revision += 1;
        true
    }

    /// Append one character to the draft if there is room.
    pub fn push_char(&mut self, c: char) -> bool {
        if self.state != DialogState::Open || self.remaining_chars() == 0 {
            return false;
        }
        self.message.push(c);
        self.revision += 1;
        true
    }

    /// Remove the last character of the draft.
    pub fn pop_char(&mut self) -> bool {
        if self.state != DialogState::Open || self.message.pop().is_none() {
            return false;
        }
        self.revision += 1;
        true
    }

    /// Persist the draft. On success the dialog confirms and arms its
    /// auto-close timer; on any error it stays Open with the draft intact.
    pub fn submit(&mut self, log: &BroadcastLog, now: DateTime<Utc>) -> Result<(), BroadcastError> {
        if self.state != DialogState::Open {
            return Err(BroadcastError::NotOpen);
        }
        let Some(position) = self.position.clone() else {
            return Err(BroadcastError::NotOpen);
        };
        if self.message.trim().is_empty() {
            return Err(BroadcastError::EmptyMessage);
        }
        log.append(position, &self.message, now)?;
        self.state = DialogState::Confirmed;
        self.timer.arm(now, self.auto_close);
        self.revision += 1;
        Ok(())
    }

    /// Auto-close a confirmed dialog once its delay has elapsed.
    pub fn poll(&mut self, now: DateTime<Utc>) -> bool {
        if self.state == DialogState::Confirmed && self.timer.fire_if_due(now) {
            log::debug!("confirmed dialog auto-closed");
            self.reset();
            return true;
        }
        false
    }

    /// Close without appending. From Confirmed this also cancels the
    /// auto-close timer.
    pub fn cancel(&mut self) -> bool {
        match self.state {
            DialogState::Closed => false,
            DialogState::Open | DialogState::Confirmed => {
                self.timer.cancel();
                self.reset();
                true
            }
        }
    }

    fn reset(&mut self) {
        self.state = DialogState::Closed;
        self.position = None;
        self.message.clear();
        self.revision += 1;
    }
}
