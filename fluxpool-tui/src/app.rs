//! Application state: single-owner, main-thread only.
//!
//! Wraps the core dashboard with the shell-only bits: row cursor, sort
//! choice, status line and the quit flag.

use chrono::{DateTime, Utc};

use fluxpool_core::table::{RenderedTable, SortDirection};
use fluxpool_core::{Dashboard, Tab, TickOutcome};

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// Active sort: column key and direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub key: String,
    pub direction: SortDirection,
}

pub struct App {
    pub dashboard: Dashboard,
    pub running: bool,
    /// Cursor into the displayed (sorted) rows of the active tab.
    pub cursor: usize,
    pub sort: Option<SortSpec>,
    pub status_message: Option<(String, StatusLevel)>,
}

impl App {
    pub fn new(dashboard: Dashboard) -> Self {
        Self {
            dashboard,
            running: true,
            cursor: 0,
            sort: None,
            status_message: None,
        }
    }

    pub fn tick(&mut self, now: DateTime<Utc>) -> TickOutcome {
        let outcome = self.dashboard.tick(now);
        if outcome.dialog_closed {
            self.set_status("Broadcast sent");
        }
        outcome
    }

    pub fn active_tab(&self) -> Tab {
        self.dashboard.active_tab()
    }

    /// Active tab rendered and sorted as displayed.
    pub fn table(&self, now: DateTime<Utc>) -> RenderedTable {
        let mut table = self.dashboard.render_active(now);
        if let Some(sort) = &self.sort {
            // A sort key from another tab simply does not apply here.
            let _ = table.sort_by(&sort.key, sort.direction);
        }
        table
    }

    pub fn select_tab(&mut self, tab: Tab) {
        if self.dashboard.select_tab(tab) {
            self.on_tab_changed();
        }
    }

    pub fn next_tab(&mut self) {
        self.dashboard.next_tab();
        self.on_tab_changed();
    }

    pub fn prev_tab(&mut self) {
        self.dashboard.prev_tab();
        self.on_tab_changed();
    }

    fn on_tab_changed(&mut self) {
        self.cursor = 0;
        self.sort = None;
    }

    pub fn cursor_down(&mut self, rows: usize) {
        if self.cursor + 1 < rows {
            self.cursor += 1;
        }
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Source index of the row under the cursor.
    pub fn selected_source(&self, table: &RenderedTable) -> Option<usize> {
        table.rows.get(self.cursor).map(|row| row.source_index)
    }

    /// Move the sort to the next sortable column, ascending.
    pub fn cycle_sort(&mut self, table: &RenderedTable) {
        let sortable: Vec<&str> = table
            .headers
            .iter()
            .filter(|h| h.sortable)
            .map(|h| h.key)
            .collect();
        if sortable.is_empty() {
            return;
        }
        let next = match &self.sort {
            Some(current) => sortable
                .iter()
                .position(|k| *k == current.key)
                .map_or(0, |i| (i + 1) % sortable.len()),
            None => 0,
        };
        self.sort = Some(SortSpec {
            key: sortable[next].to_string(),
            direction: SortDirection::Ascending,
        });
    }

    pub fn reverse_sort(&mut self) {
        if let Some(sort) = &mut self.sort {
            sort.direction = sort.direction.flip();
        }
    }

    pub fn share_selected(&mut self, now: DateTime<Utc>) {
        let table = self.table(now);
        match self.selected_source(&table) {
            Some(index) if self.dashboard.share_row(index) => {
                self.status_message = None;
            }
            _ => self.set_warning("Share is available on position rows"),
        }
    }

    pub fn close_selected(&mut self, now: DateTime<Utc>) {
        let table = self.table(now);
        let notice = self
            .selected_source(&table)
            .and_then(|index| self.dashboard.close_row(index));
        match notice {
            Some(notice) => self.set_status(notice),
            None => self.set_warning("Close is available on position rows"),
        }
    }

    pub fn submit_broadcast(&mut self, now: DateTime<Utc>) {
        if let Err(e) = self.dashboard.submit_broadcast(now) {
            self.set_error(e.to_string());
        }
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Error));
    }
}
