//! End-to-end dashboard scenarios driven by a simulated 50ms clock.

use chrono::{DateTime, Duration, TimeZone, Utc};

use fluxpool_core::broadcast::DialogState;
use fluxpool_core::config::DashboardConfig;
use fluxpool_core::store::MemoryStore;
use fluxpool_core::table::{CellValue, SortDirection};
use fluxpool_core::{Dashboard, Tab};

const TICK: i64 = 50;

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 2, 1, 12, 0, 0).unwrap()
}

fn dashboard(seed: u64) -> Dashboard {
    let config = DashboardConfig {
        seed: Some(seed),
        ..DashboardConfig::default()
    };
    Dashboard::new(&config, MemoryStore::new()).unwrap()
}

/// Advance `dash` by `ms` in 50ms ticks; returns the new time and emissions.
fn run(dash: &mut Dashboard, from: DateTime<Utc>, ms: i64) -> (DateTime<Utc>, usize) {
    let mut now = from;
    let mut emitted = 0;
    for _ in 0..ms / TICK {
        now += Duration::milliseconds(TICK);
        let outcome = dash.tick(now);
        assert!(outcome.emitted <= 1);
        emitted += outcome.emitted;
    }
    (now, emitted)
}

#[test]
fn feed_fills_to_capacity_and_stays_bounded() {
    let mut dash = dashboard(3);
    dash.activate(t0());
    // 30 emissions need at most 30 * 3s; run well past that.
    let (now, emitted) = run(&mut dash, t0(), 120_000);
    assert!(emitted >= 30, "emitted {emitted}");
    let table = dash.render_active(now);
    assert_eq!(table.len(), 50);

    let ids = dash.feed_snapshot().ids();
    assert_eq!(ids[0].0, 20 + emitted as u64);
    assert!(ids.windows(2).all(|w| w[0] > w[1]));
}

#[test]
fn seeded_runs_are_reproducible() {
    let mut a = dashboard(99);
    let mut b = dashboard(99);
    a.activate(t0());
    b.activate(t0());
    let (now, _) = run(&mut a, t0(), 10_000);
    run(&mut b, t0(), 10_000);
    assert_eq!(a.render_active(now), b.render_active(now));
}

#[test]
fn trade_rows_render_relative_time_and_fallback_identity() {
    let mut dash = dashboard(5);
    dash.activate(t0());
    let table = dash.render_active(t0() + Duration::seconds(90));
    for row in 0..table.len() {
        let time = table.cell(row, "timestamp").unwrap().display();
        assert!(time.ends_with("m ago"), "{time}");
        match table.cell(row, "identity").unwrap() {
            CellValue::Link { label, href } => {
                assert!(label.ends_with(".fluxpool.eth"));
                assert_eq!(href, &format!("/profile/{label}"));
            }
            CellValue::Mono(short) => {
                assert!(short.starts_with("0x"));
                assert_eq!(short.chars().count(), 17);
            }
            other => panic!("unexpected identity cell {other:?}"),
        }
    }
}

#[test]
fn sorting_maps_back_to_source_rows_for_share() {
    let mut dash = dashboard(8);
    dash.select_tab(Tab::Spot);
    let mut table = dash.render_active(t0());
    table.sort_by("pnl", SortDirection::Descending).unwrap();
    // UNI/USDT has the largest PnL.
    let top = table.rows[0].source_index;
    assert!(dash.share_row(top));
    assert_eq!(
        dash.dialog().position().map(|p| p.symbol.as_str()),
        Some("UNI/USDT")
    );
}

#[test]
fn share_submit_and_auto_close_while_feed_runs() {
    let mut dash = dashboard(21);
    dash.activate(t0());
    dash.select_tab(Tab::Curve);
    assert!(dash.share_row(2));
    dash.edit_broadcast("balancer szn");
    let (now, _) = run(&mut dash, t0(), 500);
    dash.submit_broadcast(now).unwrap();

    let (later, _) = run(&mut dash, now, 1450);
    assert_eq!(dash.dialog().state(), DialogState::Confirmed);
    run(&mut dash, later, 100);
    assert_eq!(dash.dialog().state(), DialogState::Closed);

    let records = dash.broadcasts().records().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].position().curve_name.as_deref(), Some("Balancer"));
    assert!(dash.is_active());
}

#[test]
fn every_tab_renders_its_column_count() {
    let mut dash = dashboard(2);
    dash.activate(t0());
    let expected = [
        (Tab::Trades, 7),
        (Tab::Spot, 9),
        (Tab::Curve, 10),
        (Tab::Holders, 8),
        (Tab::Traders, 8),
    ];
    for (tab, columns) in expected {
        dash.select_tab(tab);
        let table = dash.render_active(t0());
        assert_eq!(table.headers.len(), columns, "{tab}");
        assert!(!table.is_empty(), "{tab}");
    }
}
