//! Dashboard configuration: TOML file with per-field defaults.
//!
//! Every tunable constant of the feed and the broadcast flow lives here, so a
//! config file only needs the keys it wants to override:
//!
//! ```toml
//! seed = 42
//!
//! [feed]
//! min_delay_ms = 500
//! identity_probability = 0.25
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Upper bound for every millisecond delay, so deadlines stay far inside
/// chrono's representable range.
pub const MAX_DELAY_MS: u64 = 24 * 60 * 60 * 1000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Live feed tunables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Buffer capacity (most recent events kept).
    pub capacity: usize,
    /// Lower bound (inclusive) of the delay between emissions.
    pub min_delay_ms: u64,
    /// Upper bound (exclusive) of the delay between emissions.
    pub max_delay_ms: u64,
    /// Chance that an event carries an identity label.
    pub identity_probability: f64,
    pub price_min: f64,
    pub price_max: f64,
    /// Quantities are drawn from `(0, max_quantity]`.
    pub max_quantity: f64,
    /// Number of backdated events pre-loaded on activation.
    pub seed_batch: usize,
    /// Backdated events fall within this many seconds before activation.
    pub seed_window_secs: u64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            capacity: 50,
            min_delay_ms: 1000,
            max_delay_ms: 3000,
            identity_probability: 0.17,
            price_min: 2400.0,
            price_max: 2500.0,
            max_quantity: 10.0,
            seed_batch: 20,
            seed_window_secs: 60,
        }
    }
}

/// Broadcast flow tunables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BroadcastConfig {
    /// Store key holding the JSON array of broadcasts.
    pub namespace: String,
    pub max_message_chars: usize,
    /// Delay before a confirmed dialog closes itself.
    pub auto_close_ms: u64,
}

impl Default for BroadcastConfig {
    fn default() -> Self {
        Self {
            namespace: "fluxpool-broadcasts".into(),
            max_message_chars: 240,
            auto_close_ms: 1500,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Master seed for all random streams. `None` seeds from entropy.
    pub seed: Option<u64>,
    pub feed: FeedConfig,
    pub broadcast: BroadcastConfig,
}

impl DashboardConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let feed = &self.feed;
        if feed.capacity == 0 {
            return Err(ConfigError::Invalid("feed.capacity must be at least 1".into()));
        }
        if feed.min_delay_ms >= feed.max_delay_ms {
            return Err(ConfigError::Invalid(format!(
                "feed delay range is empty: [{}, {})",
                feed.min_delay_ms, feed.max_delay_ms
            )));
        }
        if !(0.0..=1.0).contains(&feed.identity_probability) {
            return Err(ConfigError::Invalid(format!(
                "feed.identity_probability must be within [0, 1], got {}",
                feed.identity_probability
            )));
        }
        if feed.max_delay_ms > MAX_DELAY_MS {
            return Err(ConfigError::Invalid(format!(
                "feed.max_delay_ms must be at most {MAX_DELAY_MS}, got {}",
                feed.max_delay_ms
            )));
        }
        if feed.seed_window_secs.saturating_mul(1000) > MAX_DELAY_MS {
            return Err(ConfigError::Invalid(format!(
                "feed.seed_window_secs must be at most {}, got {}",
                MAX_DELAY_MS / 1000,
                feed.seed_window_secs
            )));
        }
        // The span must be finite too, or uniform sampling overflows.
        if !(feed.price_min < feed.price_max && (feed.price_max - feed.price_min).is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "feed price range must be finite and non-empty: [{}, {})",
                feed.price_min, feed.price_max
            )));
        }
        if !(feed.max_quantity > 0.0 && feed.max_quantity.is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "feed.max_quantity must be positive and finite, got {}",
                feed.max_quantity
            )));
        }
        if self.broadcast.max_message_chars == 0 {
            return Err(ConfigError::Invalid(
                "broadcast.max_message_chars must be at least 1".into(),
            ));
        }
        if self.broadcast.auto_close_ms > MAX_DELAY_MS {
            return Err(ConfigError::Invalid(format!(
                "broadcast.auto_close_ms must be at most {MAX_DELAY_MS}, got {}",
                self.broadcast.auto_close_ms
            )));
        }
        if self.broadcast.namespace.trim().is_empty() {
            return Err(ConfigError::Invalid("broadcast.namespace must not be empty".into()));
        }
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Invalid(format!("serialize: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_carry_the_documented_constants() {
        let config = DashboardConfig::default();
        assert_eq!(config.feed.capacity, 50);
        assert_eq!(config.feed.min_delay_ms, 1000);
        assert_eq!(config.feed.max_delay_ms, 3000);
        assert_eq!(config.feed.identity_probability, 0.17);
        assert_eq!(config.broadcast.max_message_chars, 240);
        assert_eq!(config.broadcast.auto_close_ms, 1500);
        assert_eq!(config.broadcast.namespace, "fluxpool-broadcasts");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_toml_overrides_only_named_keys() {
        let config = DashboardConfig::from_toml(
            "seed = 42\n[feed]\nmin_delay_ms = 500\nidentity_probability = 0.5\n",
        )
        .unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.feed.min_delay_ms, 500);
        assert_eq!(config.feed.max_delay_ms, 3000);
        assert_eq!(config.feed.identity_probability, 0.5);
        assert_eq!(config.broadcast, BroadcastConfig::default());
    }

    #[test]
    fn empty_delay_range_rejected() {
        let err = DashboardConfig::from_toml("[feed]\nmin_delay_ms = 3000\nmax_delay_ms = 3000\n")
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn probability_out_of_range_rejected() {
        let err = DashboardConfig::from_toml("[feed]\nidentity_probability = 1.5\n").unwrap_err();
        assert!(err.to_string().contains("identity_probability"));
    }

    #[test]
    fn non_finite_quantity_and_prices_rejected() {
        let err = DashboardConfig::from_toml("seed = 1\n[feed]\nmax_quantity = inf\n").unwrap_err();
        assert!(err.to_string().contains("max_quantity"));
        let err = DashboardConfig::from_toml("[feed]\nprice_max = inf\n").unwrap_err();
        assert!(err.to_string().contains("price range"));
        let err = DashboardConfig::from_toml("[feed]\nprice_max = nan\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        let err = DashboardConfig::from_toml("[feed]\nprice_min = -1.7e308\nprice_max = 1.7e308\n")
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn delays_are_bounded() {
        let err = DashboardConfig::from_toml("[feed]\nmax_delay_ms = 9223372036854775807\n")
            .unwrap_err();
        assert!(err.to_string().contains("max_delay_ms"));
        let err = DashboardConfig::from_toml("[broadcast]\nauto_close_ms = 100000000\n")
            .unwrap_err();
        assert!(err.to_string().contains("auto_close_ms"));
        let err = DashboardConfig::from_toml("[feed]\nseed_window_secs = 100000000\n").unwrap_err();
        assert!(err.to_string().contains("seed_window_secs"));

        let at_limit = format!("[feed]\nmax_delay_ms = {MAX_DELAY_MS}\n");
        assert!(DashboardConfig::from_toml(&at_limit).is_ok());
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        let err = DashboardConfig::from_toml("[feed\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn toml_roundtrip() {
        let mut config = DashboardConfig::default();
        config.seed = Some(7);
        config.feed.capacity = 10;
        let text = config.to_toml().unwrap();
        let back = DashboardConfig::from_toml(&text).unwrap();
        assert_eq!(back, config);
    }
}
