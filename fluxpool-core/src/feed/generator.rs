//! Synthetic trade generator: a chained single-shot timer over a seeded RNG.
//!
//! The generator owns its [`EventBuffer`]; readers only ever get snapshots.
//! After each emission the next delay is drawn fresh and measured from the
//! firing time, so lateness in the caller's tick loop does not accumulate and
//! at most one emission is pending at any moment.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;

use super::buffer::{EventBuffer, FeedSnapshot};
use crate::config::FeedConfig;
use crate::domain::{Side, TradeEvent, TradeId};
use crate::format::format_thousands;
use crate::labels::IDENTITY_POOL;
use crate::schedule::TimerSlot;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";
const TX_HASH_HEX_LEN: usize = 64;
const MARKET_CAP_MIN: u64 = 1_000_000;
const MARKET_CAP_SPAN: u64 = 100_000_000;

pub struct EventGenerator {
    config: FeedConfig,
    rng: StdRng,
    buffer: EventBuffer,
    next_id: TradeId,
    timer: TimerSlot,
    running: bool,
    emitted: u64,
    revision: u64,
}

impl EventGenerator {
    pub fn new(config: FeedConfig, rng: StdRng) -> Self {
        let buffer = EventBuffer::new(config.capacity);
        Self {
            config,
            rng,
            buffer,
            next_id: TradeId(1),
            timer: TimerSlot::new(),
            running: false,
            emitted: 0,
            revision: 0,
        }
    }

    /// Pre-load a batch of backdated events so the feed is not empty on open.
    ///
    /// Timestamps fall within the configured window before `now` and rise
    /// with the id. Only allowed on a fresh generator; returns the number of
    /// events inserted.
    pub fn seed_backfill(&mut self, now: DateTime<Utc>) -> usize {
        if self.next_id != TradeId(1) {
            log::warn!("backfill skipped: generator already produced events");
            return 0;
        }
        let window_ms = self.config.seed_window_secs.saturating_mul(1000);
        let mut offsets: Vec<u64> = (0..self.config.seed_batch)
            .map(|_| if window_ms == 0 { 0 } else { self.rng.gen_range(0..window_ms) })
            .collect();
        // Largest offset first: the oldest event gets the smallest id.
        offsets.sort_unstable_by(|a, b| b.cmp(a));
        for offset in &offsets {
            let timestamp = now - Duration::milliseconds(*offset as i64);
            self.emit_at(timestamp);
        }
        log::debug!("backfilled {} events", offsets.len());
        offsets.len()
    }

    /// Schedule the first live emission. Returns `false` if already running.
    pub fn start(&mut self, now: DateTime<Utc>) -> bool {
        if self.running {
            log::warn!("generator start ignored: already running");
            return false;
        }
        self.running = true;
        let delay = self.draw_delay();
        self.timer.arm(now, delay);
        log::info!("feed generator started, first emission in {}ms", delay.num_milliseconds());
        true
    }

    /// Fire the pending emission if it is due. Returns the number of events
    /// emitted, which is 0 or 1.
    pub fn poll(&mut self, now: DateTime<Utc>) -> usize {
        if !self.running || !self.timer.fire_if_due(now) {
            return 0;
        }
        let event = self.emit_at(now);
        self.emitted += 1;
        log::debug!(
            "trade {} {} {} @ {}",
            event.id,
            event.side,
            event.quantity_display(),
            event.price_display()
        );
        let delay = self.draw_delay();
        self.timer.arm(now, delay);
        1
    }

    /// Cancel the pending emission. No event is produced after this returns.
    /// Safe to call repeatedly or when nothing is pending.
    pub fn stop(&mut self) -> bool {
        let was_running = self.running;
        self.running = false;
        self.timer.cancel();
        if was_running {
            log::info!("feed generator stopped after {} live emissions", self.emitted);
        }
        was_running
    }

    /// Drop every buffered event. Callers stop the generator first.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.revision += 1;
    }

    pub fn snapshot(&self) -> FeedSnapshot {
        self.buffer.snapshot()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn next_deadline(&self) -> Option<DateTime<Utc>> {
        self.timer.pending().map(|shot| shot.deadline())
    }

    /// Live emissions since construction (backfill excluded).
    pub fn emitted(&self) -> u64 {
        self.emitted
    }

    /// Bumped on every buffer change; pollers compare it to skip redraws.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn config(&self) -> &FeedConfig {
        &self.config
    }

    fn emit_at(&mut self, timestamp: DateTime<Utc>) -> Arc<TradeEvent> {
        let id = self.next_id;
        self.next_id = id.next();
        let event = Arc::new(self.synthesize(id, timestamp));
        let evicted = self.buffer.push(Arc::clone(&event));
        if evicted > 0 {
            log::trace!("evicted {evicted} events past capacity {}", self.buffer.capacity());
        }
        self.revision += 1;
        event
    }

    fn synthesize(&mut self, id: TradeId, timestamp: DateTime<Utc>) -> TradeEvent {
        let side = if self.rng.gen_bool(0.5) { Side::Buy } else { Side::Sell };

        let raw_price = self.rng.gen_range(self.config.price_min..self.config.price_max);
        let price = (raw_price * 100.0).floor() / 100.0;

        // `max - [0, max)` lands in `(0, max]`; rounding up keeps it above zero.
        let max_qty = self.config.max_quantity;
        let raw_qty = max_qty - self.rng.gen_range(0.0..max_qty);
        let quantity = ((raw_qty * 1000.0).ceil() / 1000.0).min(max_qty);

        let cap = MARKET_CAP_MIN + self.rng.gen_range(0..MARKET_CAP_SPAN);
        let market_cap = format!("${}", format_thousands(cap));

        let transaction_ref = self.random_tx_hash();

        let identity_label = if self.rng.gen::<f64>() < self.config.identity_probability {
            IDENTITY_POOL.choose(&mut self.rng).map(|label| (*label).to_string())
        } else {
            None
        };

        TradeEvent {
            id,
            timestamp,
            side,
            quantity,
            price,
            market_cap,
            transaction_ref,
            identity_label,
        }
    }

    fn random_tx_hash(&mut self) -> String {
        let mut hash = String::with_capacity(2 + TX_HASH_HEX_LEN);
        hash.push_str("0x");
        for _ in 0..TX_HASH_HEX_LEN {
            hash.push(HEX_DIGITS[self.rng.gen_range(0..16)] as char);
        }
        hash
    }

    fn draw_delay(&mut self) -> Duration {
        let (min, max) = (self.config.min_delay_ms, self.config.max_delay_ms);
        let ms = if max > min { self.rng.gen_range(min..max) } else { min };
        Duration::milliseconds(ms as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::SeedableRng;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap()
    }

    fn generator(config: FeedConfig) -> EventGenerator {
        EventGenerator::new(config, StdRng::seed_from_u64(42))
    }

    /// Step the clock in 100ms increments until one emission happens.
    fn advance_until_emission(g: &mut EventGenerator, now: &mut DateTime<Utc>) {
        for _ in 0..100 {
            *now += Duration::milliseconds(100);
            if g.poll(*now) == 1 {
                return;
            }
        }
        panic!("no emission within 10s");
    }

    #[test]
    fn first_emission_waits_for_the_drawn_delay() {
        let mut g = generator(FeedConfig::default());
        assert!(g.start(t0()));
        let deadline = g.next_deadline().unwrap();
        let delay = (deadline - t0()).num_milliseconds();
        assert!((1000..3000).contains(&delay), "delay {delay}");

        assert_eq!(g.poll(t0() + Duration::milliseconds(999)), 0);
        assert_eq!(g.poll(deadline), 1);
        assert_eq!(g.len(), 1);
    }

    #[test]
    fn each_emission_reschedules_within_bounds() {
        let mut g = generator(FeedConfig::default());
        let mut now = t0();
        g.start(now);
        for _ in 0..20 {
            advance_until_emission(&mut g, &mut now);
            let next = g.next_deadline().expect("rescheduled");
            let delay = (next - now).num_milliseconds();
            assert!((1000..3000).contains(&delay), "delay {delay}");
        }
        assert_eq!(g.emitted(), 20);
    }

    #[test]
    fn a_late_poll_emits_only_once() {
        let mut g = generator(FeedConfig::default());
        g.start(t0());
        assert_eq!(g.poll(t0() + Duration::seconds(60)), 1);
        assert_eq!(g.poll(t0() + Duration::seconds(60)), 0);
    }

    #[test]
    fn ids_strictly_increase() {
        let mut g = generator(FeedConfig::default());
        let mut now = t0();
        g.seed_backfill(now);
        g.start(now);
        for _ in 0..40 {
            advance_until_emission(&mut g, &mut now);
        }
        let ids = g.snapshot().ids();
        assert!(ids.windows(2).all(|w| w[0] > w[1]));
        assert_eq!(ids[0], TradeId(60));
    }

    #[test]
    fn stop_prevents_further_emissions() {
        let mut g = generator(FeedConfig::default());
        g.start(t0());
        assert!(g.stop());
        assert!(!g.stop());
        assert_eq!(g.poll(t0() + Duration::seconds(10)), 0);
        assert!(g.next_deadline().is_none());
        assert!(g.is_empty());
    }

    #[test]
    fn double_start_is_ignored() {
        let mut g = generator(FeedConfig::default());
        assert!(g.start(t0()));
        let deadline = g.next_deadline();
        assert!(!g.start(t0() + Duration::milliseconds(500)));
        assert_eq!(g.next_deadline(), deadline);
    }

    #[test]
    fn backfill_is_newest_first_within_window() {
        let mut g = generator(FeedConfig::default());
        assert_eq!(g.seed_backfill(t0()), 20);
        let snap = g.snapshot();
        assert_eq!(snap.len(), 20);
        assert_eq!(snap.get(0).unwrap().id, TradeId(20));
        assert_eq!(snap.get(19).unwrap().id, TradeId(1));
        for e in snap.iter() {
            let age = (t0() - e.timestamp).num_seconds();
            assert!((0..60).contains(&age), "age {age}");
        }
        let stamps: Vec<_> = snap.iter().map(|e| e.timestamp).collect();
        assert!(stamps.windows(2).all(|w| w[0] >= w[1]));
        // A second backfill would break id ordering.
        assert_eq!(g.seed_backfill(t0()), 0);
    }

    #[test]
    fn synthesized_fields_respect_ranges() {
        let mut g = generator(FeedConfig::default());
        g.seed_backfill(t0());
        for e in g.snapshot().iter() {
            assert!((2400.0..2500.0).contains(&e.price), "price {}", e.price);
            assert!(e.quantity > 0.0 && e.quantity <= 10.0, "qty {}", e.quantity);
            assert!(e.market_cap.starts_with('$'));
            assert_eq!(e.transaction_ref.len(), 66);
            assert!(e.transaction_ref[2..].chars().all(|c| c.is_ascii_hexdigit()));
            if let Some(label) = &e.identity_label {
                assert!(IDENTITY_POOL.contains(&label.as_str()));
            }
        }
    }

    #[test]
    fn identity_probability_extremes() {
        let mut always = FeedConfig::default();
        always.identity_probability = 1.0;
        let mut g = generator(always);
        g.seed_backfill(t0());
        assert!(g.snapshot().iter().all(|e| e.identity_label.is_some()));

        let mut never = FeedConfig::default();
        never.identity_probability = 0.0;
        let mut g = generator(never);
        g.seed_backfill(t0());
        assert!(g.snapshot().iter().all(|e| e.identity_label.is_none()));
    }

    #[test]
    fn revision_tracks_buffer_changes() {
        let mut g = generator(FeedConfig::default());
        let r0 = g.revision();
        g.seed_backfill(t0());
        assert_eq!(g.revision(), r0 + 20);
        g.clear();
        assert_eq!(g.revision(), r0 + 21);
        assert!(g.is_empty());
    }
}
