//! Grid inventories.
//!
//! An inventory owns a grid of item slots and at most one equipped item.
//! It caches the total weight and number of occupied cells so both can be
//! read in constant time. The equipped item never counts towards either.

use std::mem;

use serde::{Deserialize, Serialize};

use crate::config::GridConfig;
use crate::error::{KsError, KsResult};
use crate::item::Item;

/// Rows of item slots. Rows may differ in length.
pub type Grid = Vec<Vec<Item>>;

/// A grid of item slots with an optional equipped item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "InventoryRepr", into = "InventoryRepr")]
pub struct Inventory {
    grid: Grid,
    equipped: Option<Box<Item>>,
    weight: f32,
    count: usize,
}

impl Inventory {
    /// Create an inventory from an existing grid, optionally with an item
    /// already equipped.
    ///
    /// Weight and count are computed from the grid alone.
    pub fn new(grid: Grid, equipped: Option<Item>) -> Self {
        let (weight, count) = aggregate(&grid);
        Self {
            grid,
            equipped: equipped.map(Box::new),
            weight,
            count,
        }
    }

    /// Create an inventory from a grid with nothing equipped.
    pub fn from_grid(grid: Grid) -> Self {
        Self::new(grid, None)
    }

    /// Create an empty inventory with the configured dimensions.
    pub fn with_config(config: &GridConfig) -> Self {
        Self::from_grid(config.empty_grid())
    }

    /// An inventory with no rows and nothing equipped. This is the state a
    /// source is left in after [`Inventory::take`].
    pub fn empty() -> Self {
        Self::from_grid(Vec::new())
    }

    // -----------------------------------------------------------------------
    // Equipped slot
    // -----------------------------------------------------------------------

    /// The currently equipped item, if any.
    pub fn equipped(&self) -> Option<&Item> {
        self.equipped.as_deref()
    }

    /// Mutable access to the equipped item, if any.
    pub fn equipped_mut(&mut self) -> Option<&mut Item> {
        self.equipped.as_deref_mut()
    }

    /// Equip an item.
    ///
    /// The inventory does not release the previously equipped item. It is
    /// handed back to the caller, who becomes responsible for it; dropping
    /// the returned value is the only way it goes away.
    #[must_use = "the previously equipped item is returned to the caller"]
    pub fn equip(&mut self, item: Item) -> Option<Item> {
        log::debug!("equipping {item}");
        let previous = self.equipped.replace(Box::new(item)).map(|b| *b);
        if let Some(old) = &previous {
            log::debug!("replaced equipped item {old}; ownership returned to caller");
        }
        previous
    }

    /// Release the equipped item and clear the slot. Does nothing if the
    /// slot is already empty.
    pub fn discard_equipped(&mut self) {
        if let Some(item) = self.equipped.take() {
            log::debug!("discarded equipped item {item}");
        }
    }

    // -----------------------------------------------------------------------
    // Grid access
    // -----------------------------------------------------------------------

    /// A copy of the whole grid. Changes to the copy do not affect the
    /// inventory.
    pub fn items(&self) -> Grid {
        self.grid.clone()
    }

    /// Total weight of all occupied cells.
    pub fn weight(&self) -> f32 {
        self.weight
    }

    /// Number of occupied cells.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns true if no cell is occupied. The equipped slot is ignored.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Number of rows in the grid.
    pub fn rows(&self) -> usize {
        self.grid.len()
    }

    /// Length of the given row, or `None` past the last row.
    pub fn row_len(&self, row: usize) -> Option<usize> {
        self.grid.get(row).map(Vec::len)
    }

    /// A copy of the item at `(row, col)`.
    pub fn at(&self, row: usize, col: usize) -> KsResult<Item> {
        self.cell(row, col).cloned()
    }

    /// Store an item in an empty cell.
    ///
    /// Returns `Ok(false)` without touching anything if the cell is already
    /// occupied. Storing an empty-category item fills the cell but leaves the
    /// totals unchanged.
    pub fn store(&mut self, row: usize, col: usize, item: Item) -> KsResult<bool> {
        let cell = self.cell_mut(row, col)?;
        if !cell.is_empty() {
            log::debug!("cell ({row}, {col}) already holds {cell}");
            return Ok(false);
        }

        let counted = !item.is_empty();
        let weight = item.weight;
        log::debug!("storing {item} at ({row}, {col})");
        *cell = item;

        if counted {
            self.weight += weight;
            self.count += 1;
        }
        Ok(true)
    }

    /// Remove and return the item at `(row, col)`, leaving an empty cell.
    ///
    /// Returns `Ok(None)` if the cell was already empty.
    pub fn take_at(&mut self, row: usize, col: usize) -> KsResult<Option<Item>> {
        let cell = self.cell_mut(row, col)?;
        if cell.is_empty() {
            return Ok(None);
        }

        let item = mem::take(cell);
        log::debug!("took {item} from ({row}, {col})");

        // Subtracting can lose the lighter items when a heavy one leaves, so
        // the totals are rebuilt from the grid.
        (self.weight, self.count) = aggregate(&self.grid);
        Ok(Some(item))
    }

    /// Iterate over occupied cells as `(row, col, item)`.
    pub fn iter_items(&self) -> impl Iterator<Item = (usize, usize, &Item)> {
        self.grid.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, item)| !item.is_empty())
                .map(move |(c, item)| (r, c, item))
        })
    }

    // -----------------------------------------------------------------------
    // Ownership transfer
    // -----------------------------------------------------------------------

    /// Move everything out of this inventory, leaving it as
    /// [`Inventory::empty`].
    ///
    /// The grid and the equipped item are transferred, not copied. The
    /// source stays usable: it has no rows, so `at` and `store` on it report
    /// out-of-range.
    pub fn take(&mut self) -> Inventory {
        mem::replace(self, Self::empty())
    }

    fn cell(&self, row: usize, col: usize) -> KsResult<&Item> {
        self.grid
            .get(row)
            .and_then(|r| r.get(col))
            .ok_or_else(|| out_of_range(row, col))
    }

    fn cell_mut(&mut self, row: usize, col: usize) -> KsResult<&mut Item> {
        self.grid
            .get_mut(row)
            .and_then(|r| r.get_mut(col))
            .ok_or_else(|| out_of_range(row, col))
    }
}

impl Default for Inventory {
    /// A 10x10 grid of empty cells with nothing equipped.
    fn default() -> Self {
        Self::with_config(&GridConfig::default())
    }
}

fn out_of_range(row: usize, col: usize) -> KsError {
    log::debug!("rejected inventory access at ({row}, {col})");
    KsError::OutOfRange { row, col }
}

/// Sum the weight and count of occupied cells.
fn aggregate(grid: &Grid) -> (f32, usize) {
    grid.iter()
        .flatten()
        .filter(|item| !item.is_empty())
        .fold((0.0, 0), |(weight, count), item| {
            (weight + item.weight, count + 1)
        })
}

/// Serialized form. Totals are not stored; they are recomputed on load.
#[derive(Serialize, Deserialize)]
struct InventoryRepr {
    grid: Grid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    equipped: Option<Item>,
}

impl From<InventoryRepr> for Inventory {
    fn from(repr: InventoryRepr) -> Self {
        Self::new(repr.grid, repr.equipped)
    }
}

impl From<Inventory> for InventoryRepr {
    fn from(inv: Inventory) -> Self {
        Self {
            grid: inv.grid,
            equipped: inv.equipped.map(|b| *b),
        }
    }
}
