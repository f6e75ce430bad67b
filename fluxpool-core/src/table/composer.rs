//! Turns a column set and a row sequence into a rendered grid.

use thiserror::Error;

use super::cell::CellValue;
use super::column::{ColumnSet, RenderContext};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("unknown column: {0}")]
    UnknownColumn(String),
    #[error("column is not sortable: {0}")]
    NotSortable(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flip(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeaderCell {
    pub key: &'static str,
    pub title: &'static str,
    pub sortable: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedRow {
    /// Index of the source row in the input order; survives sorting.
    pub source_index: usize,
    pub cells: Vec<CellValue>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderedTable {
    pub headers: Vec<HeaderCell>,
    pub rows: Vec<RenderedRow>,
}

impl RenderedTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, key: &str) -> Option<usize> {
        self.headers.iter().position(|h| h.key == key)
    }

    /// Cell at `(row, key)` in current row order.
    pub fn cell(&self, row: usize, key: &str) -> Option<&CellValue> {
        let col = self.column_index(key)?;
        self.rows.get(row)?.cells.get(col)
    }

    /// Stable sort on one column's sort keys.
    pub fn sort_by(&mut self, key: &str, direction: SortDirection) -> Result<(), TableError> {
        let col = self
            .column_index(key)
            .ok_or_else(|| TableError::UnknownColumn(key.to_string()))?;
        let header = &self.headers[col];
        if !header.sortable {
            return Err(TableError::NotSortable(header.key));
        }
        let mut keyed: Vec<_> = self
            .rows
            .drain(..)
            .map(|row| (row.cells[col].sort_key(), row))
            .collect();
        keyed.sort_by(|(a, _), (b, _)| match direction {
            SortDirection::Ascending => a.compare(b),
            SortDirection::Descending => b.compare(a),
        });
        self.rows = keyed.into_iter().map(|(_, row)| row).collect();
        Ok(())
    }
}

/// Renders rows against a fixed context.
#[derive(Debug, Clone)]
pub struct TableComposer {
    ctx: RenderContext,
}

impl TableComposer {
    pub fn new(ctx: RenderContext) -> Self {
        Self { ctx }
    }

    pub fn context(&self) -> &RenderContext {
        &self.ctx
    }

    /// Every row gets one cell per column, in column order. Rows keep their
    /// input order.
    pub fn render<'a, R, I>(&self, columns: &ColumnSet<R>, rows: I) -> RenderedTable
    where
        R: 'a,
        I: IntoIterator<Item = &'a R>,
    {
        let headers = columns
            .iter()
            .map(|c| HeaderCell {
                key: c.key,
                title: c.header,
                sortable: c.sortable,
            })
            .collect();
        let rows = rows
            .into_iter()
            .enumerate()
            .map(|(source_index, row)| RenderedRow {
                source_index,
                cells: columns.iter().map(|c| c.render(row, &self.ctx)).collect(),
            })
            .collect();
        RenderedTable { headers, rows }
    }
}
