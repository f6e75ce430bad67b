//! Deterministic RNG streams.
//!
//! A master seed is expanded into independent sub-seeds per `(stream, session)`
//! pair with BLAKE3. The feed and the sample datasets draw from different
//! streams, and each feed activation gets its own session index, so a seeded
//! dashboard reproduces the same trades and tables on every run.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Stream name used by the live trade generator.
pub const FEED_STREAM: &str = "feed";
/// Stream name used by the sample position/holder/trader tables.
pub const SAMPLE_STREAM: &str = "sample";

#[derive(Debug, Clone)]
pub struct RngStreams {
    master_seed: u64,
}

impl RngStreams {
    pub fn new(master_seed: u64) -> Self {
        Self { master_seed }
    }

    /// Seed from the OS entropy source; used when no seed is configured.
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    pub fn master_seed(&self) -> u64 {
        self.master_seed
    }

    /// Derive the sub-seed for one `(stream, session)` pair.
    ///
    /// Derivation is hash-based, so the result does not depend on which other
    /// streams were derived first.
    pub fn sub_seed(&self, stream: &str, session: u64) -> u64 {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&self.master_seed.to_le_bytes());
        hasher.update(stream.as_bytes());
        hasher.update(&session.to_le_bytes());
        let hash = hasher.finalize();
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&hash.as_bytes()[..8]);
        u64::from_le_bytes(bytes)
    }

    pub fn rng_for(&self, stream: &str, session: u64) -> StdRng {
        StdRng::seed_from_u64(self.sub_seed(stream, session))
    }
}
