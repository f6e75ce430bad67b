//! Shared builders for TUI unit tests.

use chrono::{DateTime, TimeZone, Utc};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

use fluxpool_core::store::MemoryStore;
use fluxpool_core::{Dashboard, DashboardConfig};

use crate::app::App;

pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 2, 1, 12, 0, 0).unwrap()
}

/// App over a seeded dashboard with an in-memory broadcast store.
pub fn app() -> App {
    let config = DashboardConfig {
        seed: Some(17),
        ..DashboardConfig::default()
    };
    App::new(Dashboard::new(&config, MemoryStore::new()).unwrap())
}

pub fn press(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}
