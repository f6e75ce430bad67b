//! Feed lifecycle: one generator per activation of the feed view.
//!
//! Activation builds a fresh generator on its own RNG session, backfills it
//! and starts the timer chain. Deactivation cancels the timer first and only
//! then discards the buffer, so a late tick can never write into a torn-down
//! feed.

use chrono::{DateTime, Utc};

use super::buffer::FeedSnapshot;
use super::generator::EventGenerator;
use crate::config::FeedConfig;
use crate::rng::{RngStreams, FEED_STREAM};

pub struct FeedSession {
    config: FeedConfig,
    streams: RngStreams,
    generator: Option<EventGenerator>,
    activations: u64,
}

impl FeedSession {
    pub fn new(config: FeedConfig, streams: RngStreams) -> Self {
        Self {
            config,
            streams,
            generator: None,
            activations: 0,
        }
    }

    /// Bring the feed up. Returns `false` if it is already active.
    pub fn activate(&mut self, now: DateTime<Utc>) -> bool {
        if self.generator.is_some() {
            return false;
        }
        let rng = self.streams.rng_for(FEED_STREAM, self.activations);
        self.activations += 1;
        let mut generator = EventGenerator::new(self.config.clone(), rng);
        generator.seed_backfill(now);
        generator.start(now);
        self.generator = Some(generator);
        log::info!("feed session {} activated", self.activations);
        true
    }

    /// Tear the feed down: cancel the pending timer, then drop the buffer.
    pub fn deactivate(&mut self) -> bool {
        match self.generator.take() {
            Some(mut generator) => {
                generator.stop();
                generator.clear();
                log::info!("feed session {} deactivated", self.activations);
                true
            }
            None => false,
        }
    }

    /// Drive the generator; returns emissions on this tick (0 when inactive).
    pub fn poll(&mut self, now: DateTime<Utc>) -> usize {
        self.generator.as_mut().map_or(0, |g| g.poll(now))
    }

    /// Current events, newest first. Empty while inactive.
    pub fn snapshot(&self) -> FeedSnapshot {
        self.generator
            .as_ref()
            .map(EventGenerator::snapshot)
            .unwrap_or_default()
    }

    pub fn is_active(&self) -> bool {
        self.generator.is_some()
    }

    pub fn revision(&self) -> u64 {
        self.generator.as_ref().map_or(0, EventGenerator::revision)
    }

    pub fn generator(&self) -> Option<&EventGenerator> {
        self.generator.as_ref()
    }

    pub fn activations(&self) -> u64 {
        self.activations
    }
}

impl Drop for FeedSession {
    fn drop(&mut self) {
        self.deactivate();
    }
}
