//! Aggregate, bounds, and ownership invariants of inventories and players.

use ks_core::{GridConfig, Inventory, Item, ItemCategory, KsError, Player};
use proptest::prelude::*;

fn category() -> impl Strategy<Value = ItemCategory> {
    prop_oneof![
        Just(ItemCategory::None),
        Just(ItemCategory::Weapon),
        Just(ItemCategory::Armor),
        Just(ItemCategory::Accessory),
        Just(ItemCategory::Consumable),
    ]
}

fn item() -> impl Strategy<Value = Item> {
    ("[a-z]{1,8}", 0.0f32..50.0, category())
        .prop_map(|(name, weight, category)| Item::new(name, weight, category))
}

/// A possibly jagged grid of up to 6 rows.
fn grid() -> impl Strategy<Value = Vec<Vec<Item>>> {
    prop::collection::vec(prop::collection::vec(item(), 0..6), 0..6)
}

#[derive(Debug, Clone)]
enum Op {
    Store(usize, usize, Item),
    TakeAt(usize, usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0usize..8, 0usize..8, item()).prop_map(|(r, c, i)| Op::Store(r, c, i)),
        (0usize..8, 0usize..8).prop_map(|(r, c)| Op::TakeAt(r, c)),
    ]
}

fn recompute(inv: &Inventory) -> (f32, usize) {
    inv.items()
        .iter()
        .flatten()
        .filter(|item| !item.is_empty())
        .fold((0.0, 0), |(weight, count), item| (weight + item.weight, count + 1))
}

fn assert_totals(inv: &Inventory) {
    let (weight, count) = recompute(inv);
    assert_eq!(inv.count(), count);
    // Stores add in insertion order while a recount goes row by row, so the
    // two sums may differ in the last few bits.
    let tolerance = f32::EPSILON * 64.0 * weight.max(1.0);
    assert!(
        (inv.weight() - weight).abs() <= tolerance,
        "cached weight {} drifted from {}",
        inv.weight(),
        weight
    );
}

proptest! {
    #[test]
    fn construction_matches_grid(grid in grid(), equipped in prop::option::of(item())) {
        let inv = Inventory::new(grid, equipped);
        assert_totals(&inv);
    }

    #[test]
    fn totals_hold_after_any_sequence(grid in grid(), ops in prop::collection::vec(op(), 0..40)) {
        let mut inv = Inventory::from_grid(grid);
        for op in ops {
            let before = inv.clone();
            match op {
                Op::Store(r, c, item) => match inv.store(r, c, item) {
                    Ok(true) => {}
                    Ok(false) | Err(KsError::OutOfRange { .. }) => {
                        prop_assert_eq!(&inv, &before);
                    }
                },
                Op::TakeAt(r, c) => match inv.take_at(r, c) {
                    Ok(Some(_)) => {}
                    Ok(None) | Err(KsError::OutOfRange { .. }) => {
                        prop_assert_eq!(&inv, &before);
                    }
                },
            }
            assert_totals(&inv);
        }
    }

    #[test]
    fn bounds_follow_row_lengths(grid in grid(), r in 0usize..8, c in 0usize..8) {
        let in_bounds = grid.get(r).is_some_and(|row| c < row.len());
        let inv = Inventory::from_grid(grid);
        prop_assert_eq!(inv.at(r, c).is_ok(), in_bounds);
    }

    #[test]
    fn clone_is_independent(grid in grid(), equipped in item(), extra in item()) {
        let original = Inventory::new(grid, Some(equipped.clone()));
        let mut copy = original.clone();
        if let Some(item) = copy.equipped_mut() {
            item.name.push_str("-copy");
        }
        let _ = copy.equip(extra);
        prop_assert_eq!(original.equipped(), Some(&equipped));
    }

    #[test]
    fn take_leaves_empty_source(grid in grid(), equipped in prop::option::of(item())) {
        let mut source = Inventory::new(grid, equipped);
        let expected = source.clone();
        let moved = source.take();
        prop_assert_eq!(moved, expected);
        prop_assert_eq!(source.count(), 0);
        prop_assert_eq!(source.weight(), 0.0);
        prop_assert_eq!(source.rows(), 0);
        prop_assert!(source.equipped().is_none());
    }
}

#[test]
fn removing_heavy_item_matches_recount() {
    let mut inv = Inventory::default();
    for (col, weight) in [0.1, 0.2, 1e7].into_iter().enumerate() {
        let item = Item::new(format!("item{col}"), weight, ItemCategory::Accessory);
        assert!(inv.store(0, col, item).unwrap());
    }
    inv.take_at(0, 2).unwrap();
    assert_eq!(inv.weight(), Inventory::from_grid(inv.items()).weight());
    assert_eq!(inv.count(), 2);
}

#[test]
fn ten_by_ten_rejects_corner_past_the_edge() {
    let mut inv = Inventory::with_config(&GridConfig::default());
    assert_eq!(
        inv.at(10, 10),
        Err(KsError::OutOfRange { row: 10, col: 10 })
    );
    let potion = Item::new("Health Potion", 0.5, ItemCategory::Consumable);
    assert!(inv.store(9, 9, potion).unwrap());
}

#[test]
fn player_session() {
    let sword = Item::new("Excalibur", 10.5, ItemCategory::Weapon);
    let inventory = Inventory::new(
        vec![vec![sword; 2]; 2],
        Some(Item::new("Shield", 5.0, ItemCategory::Armor)),
    );
    let mut knight = Player::with_inventory("Knight", inventory);

    let helmet = Item::new("Helmet", 3.2, ItemCategory::Armor);
    let shield = knight.inventory_mut().equip(helmet);
    assert_eq!(shield.map(|s| s.name), Some("Shield".to_string()));

    knight.inventory_mut().discard_equipped();
    assert!(knight.inventory().equipped().is_none());

    let mut squire = knight.clone();
    let potion = Item::new("Health Potion", 0.5, ItemCategory::Consumable);
    assert!(!squire.inventory_mut().store(0, 0, potion).unwrap());

    let moved = squire.take();
    assert_eq!(moved.inventory().weight(), 42.0);
    assert_eq!(squire.name(), "");
    assert_eq!(knight.inventory().count(), 4);
}
