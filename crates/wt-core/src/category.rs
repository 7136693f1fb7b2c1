//! Item categories and counted items.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::WtError;

/// The three kinds of countable items Geralt carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    /// Alchemy ingredients gathered by looting or trading.
    Ingredient,
    /// Brewed potions.
    Potion,
    /// Monster trophies earned in encounters.
    Trophy,
}

impl Category {
    /// The lowercase keyword used for this category in commands.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Ingredient => "ingredient",
            Self::Potion => "potion",
            Self::Trophy => "trophy",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for Category {
    type Err = WtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ingredient" => Ok(Self::Ingredient),
            "potion" => Ok(Self::Potion),
            "trophy" => Ok(Self::Trophy),
            other => Err(WtError::UnknownCategory(other.to_string())),
        }
    }
}

/// A named item with a quantity, e.g. `3 celandine`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemCount {
    /// Item name.
    pub name: String,
    /// Quantity of the item.
    pub quantity: u32,
}

impl ItemCount {
    /// Create a counted item.
    pub fn new(name: impl Into<String>, quantity: u32) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }
}

impl fmt::Display for ItemCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.quantity, self.name)
    }
}

/// Join counted items as `qty name, qty name, ...`.
pub(crate) fn join_counts(counts: &[ItemCount]) -> String {
    counts
        .iter()
        .map(ItemCount::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
