//! Declarative table composition.
//!
//! Columns are data (key, header, sortability, renderer). Per-entity sets live
//! in [`registry`]; [`composer`] turns a set and a row sequence into a grid.

pub mod cell;
pub mod column;
pub mod composer;
pub mod primitives;
pub mod registry;

pub use cell::{CellValue, RowAction, SortKey};
pub use column::{extend, prepend, CellRenderer, Column, ColumnSet, RenderContext};
pub use composer::{HeaderCell, RenderedRow, RenderedTable, SortDirection, TableComposer, TableError};
pub use primitives::{LinkResolver, ProfileLinks};
pub use registry::ColumnRegistry;
