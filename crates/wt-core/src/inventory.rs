//! Counted stores for ingredients, potions, and trophies.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::category::{Category, ItemCount, join_counts};

/// Geralt's inventory: per-category name-to-quantity maps.
///
/// Quantities never go negative; a removal that would overdraw fails as a
/// whole and leaves the store untouched. Listing skips zero-quantity
/// entries (looted and fully spent items stay in the map with count 0).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Inventory {
    ingredients: BTreeMap<String, u32>,
    potions: BTreeMap<String, u32>,
    trophies: BTreeMap<String, u32>,
}

impl Inventory {
    /// Create an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    fn shelf(&self, category: Category) -> &BTreeMap<String, u32> {
        match category {
            Category::Ingredient => &self.ingredients,
            Category::Potion => &self.potions,
            Category::Trophy => &self.trophies,
        }
    }

    fn shelf_mut(&mut self, category: Category) -> &mut BTreeMap<String, u32> {
        match category {
            Category::Ingredient => &mut self.ingredients,
            Category::Potion => &mut self.potions,
            Category::Trophy => &mut self.trophies,
        }
    }

    /// Add `quantity` of an item to the given category.
    pub fn add(&mut self, category: Category, name: &str, quantity: u32) {
        *self
            .shelf_mut(category)
            .entry(name.to_string())
            .or_insert(0) += quantity;
    }

    /// Remove `quantity` of an item. Returns false (and removes nothing)
    /// if the current stock is insufficient.
    pub fn remove(&mut self, category: Category, name: &str, quantity: u32) -> bool {
        match self.shelf_mut(category).get_mut(name) {
            Some(stock) if *stock >= quantity => {
                *stock -= quantity;
                true
            }
            _ => false,
        }
    }

    /// Current stock of an item, 0 if never seen.
    pub fn quantity(&self, category: Category, name: &str) -> u32 {
        self.shelf(category).get(name).copied().unwrap_or(0)
    }

    /// All items of a category with positive quantity, sorted by name
    /// ascending, as `qty name, qty name, ...`. None when nothing is held.
    pub fn summary(&self, category: Category) -> Option<String> {
        let counts: Vec<ItemCount> = self
            .shelf(category)
            .iter()
            .filter(|&(_, &qty)| qty > 0)
            .map(|(name, &qty)| ItemCount::new(name.clone(), qty))
            .collect();

        if counts.is_empty() {
            None
        } else {
            Some(join_counts(&counts))
        }
    }
}
