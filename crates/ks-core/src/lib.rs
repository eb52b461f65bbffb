//! Core types for Knapsack: items, grid inventories, and players.
//!
//! An [`Inventory`] owns a grid of [`Item`] slots plus at most one equipped
//! item, and keeps running weight/count totals over the occupied cells. A
//! [`Player`] owns exactly one inventory by value.

/// Grid dimensions used when creating fresh inventories.
pub mod config;
/// Error types used throughout the crate.
pub mod error;
/// Grid inventory with an equipped slot and cached aggregates.
pub mod inventory;
/// Items and their categories.
pub mod item;
/// Player wrapper owning one inventory.
pub mod player;

/// Re-export configuration types.
pub use config::{DEFAULT_COLS, DEFAULT_ROWS, GridConfig};
/// Re-export error types.
pub use error::{KsError, KsResult};
/// Re-export inventory types.
pub use inventory::{Grid, Inventory};
/// Re-export item types.
pub use item::{Item, ItemCategory};
/// Re-export player types.
pub use player::Player;
