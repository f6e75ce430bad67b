//! Shell state persistence: JSON save/load across restarts.

use std::path::Path;

use serde::{Deserialize, Serialize};

use fluxpool_core::table::SortDirection;
use fluxpool_core::Tab;

use crate::app::{App, SortSpec};

/// Serializable subset of shell state that persists across restarts.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedState {
    pub active_tab: Tab,
    pub sort_key: Option<String>,
    pub sort_descending: bool,
}

/// Load persisted state from disk. Returns defaults if file is missing or corrupt.
pub fn load(path: &Path) -> PersistedState {
    match std::fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("ignoring unreadable state file {}: {e}", path.display());
            PersistedState::default()
        }),
        Err(_) => PersistedState::default(),
    }
}

/// Save persisted state to disk. Creates parent directories if needed.
pub fn save(path: &Path, state: &PersistedState) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(state)?;
    std::fs::write(path, json)?;
    Ok(())
}

pub fn extract(app: &App) -> PersistedState {
    PersistedState {
        active_tab: app.active_tab(),
        sort_key: app.sort.as_ref().map(|s| s.key.clone()),
        sort_descending: app
            .sort
            .as_ref()
            .is_some_and(|s| s.direction == SortDirection::Descending),
    }
}

pub fn apply(app: &mut App, state: PersistedState) {
    app.select_tab(state.active_tab);
    app.sort = state.sort_key.map(|key| SortSpec {
        key,
        direction: if state.sort_descending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        },
    });
}
