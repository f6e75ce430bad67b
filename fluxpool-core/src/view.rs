//! Which table is on screen.
//!
//! Switching tabs is pure UI state; it never starts or stops the feed.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Tab {
    #[default]
    Trades,
    Spot,
    Curve,
    Holders,
    Traders,
}

impl Tab {
    pub const ALL: [Tab; 5] = [Tab::Trades, Tab::Spot, Tab::Curve, Tab::Holders, Tab::Traders];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Trades => "Trades",
            Tab::Spot => "Spot Positions",
            Tab::Curve => "Curve Positions",
            Tab::Holders => "Holders",
            Tab::Traders => "Top Traders",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Tab::Trades => 0,
            Tab::Spot => 1,
            Tab::Curve => 2,
            Tab::Holders => 3,
            Tab::Traders => 4,
        }
    }

    pub fn from_index(index: usize) -> Option<Tab> {
        Self::ALL.get(index).copied()
    }

    /// Tabs whose rows are positions and expose share/close actions.
    pub fn has_positions(self) -> bool {
        matches!(self, Tab::Spot | Tab::Curve)
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Default)]
pub struct ViewController {
    active: Tab,
}

impl ViewController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Tab {
        self.active
    }

    /// Returns `true` when the active tab changed.
    pub fn select(&mut self, tab: Tab) -> bool {
        if self.active == tab {
            return false;
        }
        log::debug!("tab {} -> {}", self.active, tab);
        self.active = tab;
        true
    }

    pub fn next(&mut self) -> Tab {
        let next = (self.active.index() + 1) % Tab::ALL.len();
        self.select(Tab::ALL[next]);
        self.active
    }

    pub fn prev(&mut self) -> Tab {
        let prev = (self.active.index() + Tab::ALL.len() - 1) % Tab::ALL.len();
        self.select(Tab::ALL[prev]);
        self.active
    }
}
