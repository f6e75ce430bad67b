//! Dashboard facade.
//!
//! Owns the feed session, the demo datasets, the column registry, the tab
//! state and the broadcast flow. A shell drives it with `tick(now)` and reads
//! `render_active(now)`; nothing in here touches a clock or a thread.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::broadcast::{BroadcastDialog, BroadcastError, BroadcastLog};
use crate::config::{ConfigError, DashboardConfig};
use crate::domain::Position;
use crate::feed::{FeedSession, FeedSnapshot};
use crate::rng::RngStreams;
use crate::sample_data::SampleData;
use crate::store::KeyValueStore;
use crate::table::{ColumnRegistry, LinkResolver, ProfileLinks, RenderContext, RenderedTable, TableComposer};
use crate::view::{Tab, ViewController};

/// What one tick changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    pub emitted: usize,
    pub dialog_closed: bool,
}

impl TickOutcome {
    pub fn changed(&self) -> bool {
        self.emitted > 0 || self.dialog_closed
    }
}

pub struct Dashboard {
    feed: FeedSession,
    data: SampleData,
    columns: ColumnRegistry,
    view: ViewController,
    dialog: BroadcastDialog,
    log: BroadcastLog,
    links: Arc<dyn LinkResolver>,
}

impl Dashboard {
    /// Dashboard persisting broadcasts to `store`. Seeds from `config.seed`,
    /// or from entropy when unset. Rejects configs that fail validation.
    pub fn new<S>(config: &DashboardConfig, store: S) -> Result<Self, ConfigError>
    where
        S: KeyValueStore + Send + 'static,
    {
        let streams = config
            .seed
            .map_or_else(RngStreams::from_entropy, RngStreams::new);
        let log = BroadcastLog::with_store(store, &config.broadcast);
        Self::with_parts(config, streams, log)
    }

    pub fn with_parts(
        config: &DashboardConfig,
        streams: RngStreams,
        log: BroadcastLog,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        log::info!("dashboard seeded with {}", streams.master_seed());
        Ok(Self {
            feed: FeedSession::new(config.feed.clone(), streams.clone()),
            data: SampleData::from_streams(&streams),
            columns: ColumnRegistry::new(),
            view: ViewController::new(),
            dialog: BroadcastDialog::new(&config.broadcast),
            log,
            links: Arc::new(ProfileLinks),
        })
    }

    pub fn with_links(mut self, links: Arc<dyn LinkResolver>) -> Self {
        self.links = links;
        self
    }

    /// Bring the live feed up. No-op while already active.
    pub fn activate(&mut self, now: DateTime<Utc>) -> bool {
        self.feed.activate(now)
    }

    /// Tear the feed down and dismiss any open dialog.
    pub fn deactivate(&mut self) -> bool {
        self.dialog.cancel();
        self.feed.deactivate()
    }

    pub fn tick(&mut self, now: DateTime<Utc>) -> TickOutcome {
        TickOutcome {
            emitted: self.feed.poll(now),
            dialog_closed: self.dialog.poll(now),
        }
    }

    pub fn render(&self, tab: Tab, now: DateTime<Utc>) -> RenderedTable {
        let composer = TableComposer::new(RenderContext::with_links(now, Arc::clone(&self.links)));
        let cols = &self.columns;
        match tab {
            Tab::Trades => {
                let snapshot = self.feed.snapshot();
                composer.render(&cols.trades, snapshot.iter())
            }
            Tab::Spot => composer.render(&cols.spot, &self.data.spot),
            Tab::Curve => composer.render(&cols.curve, &self.data.curve),
            Tab::Holders => composer.render(&cols.holders, &self.data.holders),
            Tab::Traders => composer.render(&cols.traders, &self.data.traders),
        }
    }

    pub fn render_active(&self, now: DateTime<Utc>) -> RenderedTable {
        self.render(self.view.active(), now)
    }

    /// Position at `index` in the active tab's dataset, if the tab lists positions.
    pub fn position_at(&self, index: usize) -> Option<&Position> {
        let tab = self.view.active();
        if !tab.has_positions() {
            return None;
        }
        let rows = if tab == Tab::Curve { &self.data.curve } else { &self.data.spot };
        rows.get(index)
    }

    /// Open the broadcast dialog for the position at `index`.
    pub fn share_row(&mut self, index: usize) -> bool {
        match self.position_at(index).cloned() {
            Some(position) => self.dialog.open_with_position(position),
            None => {
                log::warn!("share ignored: no position row {index} on {}", self.view.active());
                false
            }
        }
    }

    /// Close-position action. Returns the notice to show.
    pub fn close_row(&self, index: usize) -> Option<String> {
        let position = self.position_at(index)?;
        log::info!("close requested for {} ({})", position.symbol, position.id);
        Some(format!("Close position: {} (id: {})", position.symbol, position.id))
    }

    pub fn edit_broadcast(&mut self, text: &str) -> bool {
        self.dialog.edit_message(text)
    }

    pub fn submit_broadcast(&mut self, now: DateTime<Utc>) -> Result<(), BroadcastError> {
        self.dialog.submit(&self.log, now)
    }

    pub fn cancel_broadcast(&mut self) -> bool {
        self.dialog.cancel()
    }

    pub fn select_tab(&mut self, tab: Tab) -> bool {
        self.view.select(tab)
    }

    pub fn next_tab(&mut self) -> Tab {
        self.view.next()
    }

    pub fn prev_tab(&mut self) -> Tab {
        self.view.prev()
    }

    pub fn active_tab(&self) -> Tab {
        self.view.active()
    }

    pub fn is_active(&self) -> bool {
        self.feed.is_active()
    }

    pub fn feed_snapshot(&self) -> FeedSnapshot {
        self.feed.snapshot()
    }

    pub fn feed(&self) -> &FeedSession {
        &self.feed
    }

    pub fn data(&self) -> &SampleData {
        &self.data
    }

    pub fn columns(&self) -> &ColumnRegistry {
        &self.columns
    }

    pub fn dialog(&self) -> &BroadcastDialog {
        &self.dialog
    }

    pub fn dialog_mut(&mut self) -> &mut BroadcastDialog {
        &mut self.dialog
    }

    pub fn broadcasts(&self) -> &BroadcastLog {
        &self.log
    }
}

impl std::fmt::Debug for Dashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dashboard")
            .field("active_tab", &self.view.active())
            .field("feed_active", &self.feed.is_active())
            .field("dialog", &self.dialog.state())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::broadcast::DialogState;
    use crate::store::MemoryStore;
    use chrono::{Duration, TimeZone};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 2, 1, 12, 0, 0).unwrap()
    }

    fn dashboard() -> Dashboard {
        let config = DashboardConfig {
            seed: Some(11),
            ..DashboardConfig::default()
        };
        Dashboard::new(&config, MemoryStore::new()).unwrap()
    }

    #[test]
    fn activation_backfills_trades() {
        let mut dash = dashboard();
        assert!(dash.render_active(t0()).is_empty());
        dash.activate(t0());
        let table = dash.render_active(t0());
        assert_eq!(table.len(), 20);
        assert_eq!(table.headers.len(), 7);
    }

    #[test]
    fn tab_switch_leaves_feed_running() {
        let mut dash = dashboard();
        dash.activate(t0());
        dash.select_tab(Tab::Holders);
        assert!(dash.is_active());
        let mut now = t0();
        let mut emitted = 0;
        for _ in 0..200 {
            now += Duration::milliseconds(50);
            emitted += dash.tick(now).emitted;
        }
        assert!(emitted >= 3, "emitted {emitted} in 10s");
        assert_eq!(dash.render_active(now).len(), 10);
    }

    #[test]
    fn share_only_on_position_tabs() {
        let mut dash = dashboard();
        assert!(!dash.share_row(0));
        dash.select_tab(Tab::Curve);
        assert!(dash.share_row(1));
        assert_eq!(dash.dialog().state(), DialogState::Open);
        assert_eq!(
            dash.dialog().position().and_then(|p| p.curve_name.as_deref()),
            Some("Curve.fi")
        );
        assert!(!dash.share_row(99));
    }

    #[test]
    fn close_row_reports_notice() {
        let mut dash = dashboard();
        assert_eq!(dash.close_row(0), None);
        dash.select_tab(Tab::Spot);
        assert_eq!(dash.close_row(1).as_deref(), Some("Close position: BTC/USDT (id: 2)"));
    }

    #[test]
    fn broadcast_roundtrip_through_facade() {
        let mut dash = dashboard();
        dash.select_tab(Tab::Spot);
        dash.share_row(0);
        dash.edit_broadcast("gm");
        dash.submit_broadcast(t0()).unwrap();
        assert_eq!(dash.dialog().state(), DialogState::Confirmed);
        assert!(dash.tick(t0() + Duration::milliseconds(1500)).dialog_closed);
        let records = dash.broadcasts().records().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].position().symbol, "ETH/USDT");
    }

    #[test]
    fn deactivate_clears_feed_and_dialog() {
        let mut dash = dashboard();
        dash.activate(t0());
        dash.select_tab(Tab::Spot);
        dash.share_row(0);
        assert!(dash.deactivate());
        assert!(dash.feed_snapshot().is_empty());
        assert_eq!(dash.dialog().state(), DialogState::Closed);
        assert_eq!(dash.tick(t0() + Duration::seconds(10)), TickOutcome::default());
    }

    #[test]
    fn unusable_configs_are_rejected_before_the_feed_runs() {
        let mut config = DashboardConfig {
            seed: Some(1),
            ..DashboardConfig::default()
        };
        config.feed.capacity = 0;
        assert!(matches!(
            Dashboard::new(&config, MemoryStore::new()),
            Err(ConfigError::Invalid(_))
        ));

        config.feed.capacity = 50;
        config.feed.max_quantity = f64::INFINITY;
        assert!(Dashboard::new(&config, MemoryStore::new()).is_err());

        config.feed.max_quantity = 10.0;
        config.broadcast.auto_close_ms = u64::MAX;
        assert!(Dashboard::new(&config, MemoryStore::new()).is_err());
    }

    #[test]
    fn validated_config_survives_a_minute_of_ticks() {
        let config = DashboardConfig::from_toml(
            "seed = 1\n[feed]\nmax_quantity = 1e300\nprice_min = 0.0\nprice_max = 1e300\n",
        )
        .unwrap();
        let mut dash = Dashboard::new(&config, MemoryStore::new()).unwrap();
        dash.activate(t0());
        let mut now = t0();
        for _ in 0..1200 {
            now += Duration::milliseconds(50);
            dash.tick(now);
        }
        assert!(dash.render_active(now).len() > 20);
    }
}
