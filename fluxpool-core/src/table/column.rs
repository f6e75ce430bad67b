//! Column descriptors and append-only composition.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use super::cell::CellValue;
use super::primitives::{LinkResolver, ProfileLinks};

/// Read-only inputs a renderer may consult besides the row.
#[derive(Clone)]
pub struct RenderContext {
    pub now: DateTime<Utc>,
    pub links: Arc<dyn LinkResolver>,
}

impl RenderContext {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now,
            links: Arc::new(ProfileLinks),
        }
    }

    pub fn with_links(now: DateTime<Utc>, links: Arc<dyn LinkResolver>) -> Self {
        Self { now, links }
    }
}

impl fmt::Debug for RenderContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderContext").field("now", &self.now).finish_non_exhaustive()
    }
}

/// Pure function from a row to one cell.
pub type CellRenderer<R> = Arc<dyn Fn(&R, &RenderContext) -> CellValue + Send + Sync>;

/// One displayable column for rows of type `R`.
pub struct Column<R> {
    pub key: &'static str,
    pub header: &'static str,
    pub sortable: bool,
    render: CellRenderer<R>,
}

impl<R> Column<R> {
    pub fn new<F>(key: &'static str, header: &'static str, render: F) -> Self
    where
        F: Fn(&R, &RenderContext) -> CellValue + Send + Sync + 'static,
    {
        Self {
            key,
            header,
            sortable: true,
            render: Arc::new(render),
        }
    }

    /// Column whose cell is plain text taken from the row.
    pub fn text<F>(key: &'static str, header: &'static str, field: F) -> Self
    where
        F: Fn(&R) -> String + Send + Sync + 'static,
    {
        Self::new(key, header, move |row, _| CellValue::Text(field(row)))
    }

    pub fn unsortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    pub fn render(&self, row: &R, ctx: &RenderContext) -> CellValue {
        (self.render)(row, ctx)
    }

    /// Shared handle to the renderer; composition clones this, never the closure.
    pub fn renderer(&self) -> &CellRenderer<R> {
        &self.render
    }
}

impl<R> Clone for Column<R> {
    fn clone(&self) -> Self {
        Self {
            key: self.key,
            header: self.header,
            sortable: self.sortable,
            render: Arc::clone(&self.render),
        }
    }
}

impl<R> fmt::Debug for Column<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("header", &self.header)
            .field("sortable", &self.sortable)
            .finish()
    }
}

/// Immutable, cheaply clonable list of columns.
pub struct ColumnSet<R> {
    columns: Arc<[Column<R>]>,
}

impl<R> ColumnSet<R> {
    pub fn new(columns: Vec<Column<R>>) -> Self {
        Self {
            columns: columns.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Column<R>> {
        self.columns.iter()
    }

    pub fn get(&self, key: &str) -> Option<&Column<R>> {
        self.columns.iter().find(|c| c.key == key)
    }

    pub fn keys(&self) -> Vec<&'static str> {
        self.columns.iter().map(|c| c.key).collect()
    }

    /// True when both sets are the same allocation.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.columns, &other.columns)
    }
}

impl<R> Clone for ColumnSet<R> {
    fn clone(&self) -> Self {
        Self {
            columns: Arc::clone(&self.columns),
        }
    }
}

impl<R> fmt::Debug for ColumnSet<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.columns.iter()).finish()
    }
}

/// `base` followed by `extra`, as a new set. `base` is untouched and its
/// renderers are shared with the result.
pub fn extend<R>(base: &ColumnSet<R>, extra: &[Column<R>]) -> ColumnSet<R> {
    ColumnSet::new(base.iter().chain(extra.iter()).cloned().collect())
}

/// `extra` followed by `base`, as a new set.
pub fn prepend<R>(extra: &[Column<R>], base: &ColumnSet<R>) -> ColumnSet<R> {
    ColumnSet::new(extra.iter().chain(base.iter()).cloned().collect())
}
