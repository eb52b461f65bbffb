use std::fmt;

use serde::{Deserialize, Serialize};

/// The category of an item. The set is closed.
///
/// [`ItemCategory::None`] marks an empty grid cell: items of this category
/// carry no weight in the inventory totals and are never counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    /// Absence of an item; the sentinel for unoccupied cells.
    #[default]
    None,
    /// Swords, bows, and anything else used to attack.
    Weapon,
    /// Shields, helmets, and other protective gear.
    Armor,
    /// Rings, amulets, trinkets.
    Accessory,
    /// Potions, food, and other single-use items.
    Consumable,
}

impl fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Weapon => write!(f, "weapon"),
            Self::Armor => write!(f, "armor"),
            Self::Accessory => write!(f, "accessory"),
            Self::Consumable => write!(f, "consumable"),
        }
    }
}

/// A named, weighted item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "ItemRepr")]
pub struct Item {
    /// Display name.
    pub name: String,
    /// Weight of a single item. Never negative.
    pub weight: f32,
    /// What kind of item this is.
    pub category: ItemCategory,
}

impl Item {
    /// Create a new item. Negative or NaN weights are clamped to zero.
    pub fn new(name: impl Into<String>, weight: f32, category: ItemCategory) -> Self {
        Self {
            name: name.into(),
            weight: weight.max(0.0),
            category,
        }
    }

    /// The empty-slot sentinel: no name, no weight, category `None`.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns true if this item marks an empty slot.
    pub fn is_empty(&self) -> bool {
        self.category == ItemCategory::None
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "(empty)");
        }
        write!(f, "{} ({}, {})", self.name, self.category, self.weight)
    }
}

/// Deserialized form. Goes through [`Item::new`] so weights are clamped.
#[derive(Deserialize)]
struct ItemRepr {
    name: String,
    weight: f32,
    category: ItemCategory,
}

impl From<ItemRepr> for Item {
    fn from(repr: ItemRepr) -> Self {
        Self::new(repr.name, repr.weight, repr.category)
    }
}
