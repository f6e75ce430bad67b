//! Bounded newest-first event buffer.

use std::collections::VecDeque;
use std::sync::Arc;

use crate::domain::{TradeEvent, TradeId};

/// Fixed-capacity store of the most recent trade events.
///
/// Invariants: `len() <= capacity()`, and ids strictly descend from front
/// to back. Insert and eviction are O(1).
#[derive(Debug)]
pub struct EventBuffer {
    events: VecDeque<Arc<TradeEvent>>,
    capacity: usize,
}

impl EventBuffer {
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "event buffer capacity must be positive");
        Self {
            events: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Insert at the front, evicting from the back past capacity.
    /// Returns the number of evicted events.
    pub fn push(&mut self, event: Arc<TradeEvent>) -> usize {
        debug_assert!(
            self.head_id().map_or(true, |head| event.id > head),
            "event {} pushed behind head {:?}",
            event.id,
            self.head_id()
        );
        self.events.push_front(event);
        let mut evicted = 0;
        while self.events.len() > self.capacity {
            self.events.pop_back();
            evicted += 1;
        }
        evicted
    }

    /// Owned, ordered copy of the current contents. Later pushes do not affect it.
    pub fn snapshot(&self) -> FeedSnapshot {
        FeedSnapshot {
            events: self.events.iter().cloned().collect(),
        }
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn head(&self) -> Option<&TradeEvent> {
        self.events.front().map(Arc::as_ref)
    }

    fn head_id(&self) -> Option<TradeId> {
        self.head().map(|e| e.id)
    }
}

/// Read-only newest-first view of the buffer at one instant.
#[derive(Debug, Clone, Default)]
pub struct FeedSnapshot {
    events: Vec<Arc<TradeEvent>>,
}

impl FeedSnapshot {
    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TradeEvent> {
        self.events.iter().map(Arc::as_ref)
    }

    pub fn get(&self, index: usize) -> Option<&TradeEvent> {
        self.events.get(index).map(Arc::as_ref)
    }

    pub fn ids(&self) -> Vec<TradeId> {
        self.iter().map(|e| e.id).collect()
    }
}
