//! Core state containers for the Witcher tracker.
//!
//! This crate defines the in-memory stores the command interpreter mutates:
//! Geralt's [`Inventory`] of ingredients, potions, and trophies, the
//! [`Bestiary`] of known beasts and their counters, and the
//! [`AlchemyKnowledge`] of potion formulas and signs. It is independent of
//! the parser; stores can be constructed and driven programmatically.

/// Potion formulas and witcher signs.
pub mod alchemy;
/// Known beasts and their effective counters.
pub mod bestiary;
/// Item categories and counted items.
pub mod category;
/// Error types used throughout the crate.
pub mod error;
/// Counted stores for ingredients, potions, and trophies.
pub mod inventory;

/// Re-export alchemy types.
pub use alchemy::{AlchemyKnowledge, Formula};
/// Re-export bestiary types.
pub use bestiary::{Beast, Bestiary};
/// Re-export category types.
pub use category::{Category, ItemCount};
/// Re-export error types.
pub use error::{WtError, WtResult};
/// Re-export the inventory store.
pub use inventory::Inventory;
