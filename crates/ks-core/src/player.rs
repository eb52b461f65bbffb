use std::fmt;
use std::mem;

use serde::{Deserialize, Serialize};

use crate::inventory::Inventory;

/// A named player owning one inventory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    inventory: Inventory,
}

impl Player {
    /// Create a player with a default 10x10 inventory.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_inventory(name, Inventory::default())
    }

    /// Create a player owning the given inventory.
    ///
    /// The inventory is taken by value; pass `inventory.clone()` to keep an
    /// independent copy.
    pub fn with_inventory(name: impl Into<String>, inventory: Inventory) -> Self {
        Self {
            name: name.into(),
            inventory,
        }
    }

    /// The player's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Read access to the player's inventory.
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Mutable access to the player's inventory. The player keeps ownership;
    /// the borrow cannot outlive it.
    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }

    /// Move the name and inventory out, leaving an empty name and an
    /// [`Inventory::empty`] behind.
    pub fn take(&mut self) -> Player {
        Self {
            name: mem::take(&mut self.name),
            inventory: self.inventory.take(),
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} items, {} weight)",
            self.name,
            self.inventory.count(),
            self.inventory.weight()
        )
    }
}
