//! Grid dimensions for newly created inventories.

use crate::inventory::Grid;
use crate::item::Item;

/// Number of rows in a default inventory.
pub const DEFAULT_ROWS: usize = 10;
/// Number of columns in a default inventory.
pub const DEFAULT_COLS: usize = 10;

/// Dimensions of an empty inventory grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridConfig {
    /// Number of rows.
    pub rows: usize,
    /// Number of cells in each row.
    pub cols: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
        }
    }
}

impl GridConfig {
    /// Set the number of rows.
    pub fn with_rows(mut self, rows: usize) -> Self {
        self.rows = rows;
        self
    }

    /// Set the number of columns.
    pub fn with_cols(mut self, cols: usize) -> Self {
        self.cols = cols;
        self
    }

    /// Build a `rows x cols` grid filled with empty items.
    pub fn empty_grid(&self) -> Grid {
        vec![vec![Item::empty(); self.cols]; self.rows]
    }
}
