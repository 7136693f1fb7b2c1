//! Potion formulas and witcher signs.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::category::{ItemCount, join_counts};

/// The ingredient list required to brew one potion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Formula {
    ingredients: Vec<ItemCount>,
}

impl Formula {
    /// Create a formula from an ordered ingredient list.
    pub fn new(ingredients: Vec<ItemCount>) -> Self {
        Self { ingredients }
    }

    /// The required ingredients, in learning order.
    pub fn ingredients(&self) -> &[ItemCount] {
        &self.ingredients
    }

    /// Ingredients sorted by quantity descending then name ascending,
    /// as `qty name, qty name, ...`.
    pub fn format(&self) -> String {
        let mut sorted = self.ingredients.clone();
        sorted.sort_by(|a, b| b.quantity.cmp(&a.quantity).then_with(|| a.name.cmp(&b.name)));
        join_counts(&sorted)
    }
}

/// Everything Geralt knows about alchemy: potion formulas and sign names.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AlchemyKnowledge {
    formulas: BTreeMap<String, Formula>,
    signs: BTreeSet<String>,
}

impl AlchemyKnowledge {
    /// Create an empty knowledge base.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a formula for the potion is known.
    pub fn has_formula(&self, potion: &str) -> bool {
        self.formulas.contains_key(potion)
    }

    /// Look up the formula for a potion.
    pub fn formula(&self, potion: &str) -> Option<&Formula> {
        self.formulas.get(potion)
    }

    /// Learn a potion formula. Returns false if the formula is already
    /// known; the stored formula is never overwritten.
    pub fn learn_formula(&mut self, potion: &str, ingredients: Vec<ItemCount>) -> bool {
        if self.has_formula(potion) {
            return false;
        }
        self.formulas
            .insert(potion.to_string(), Formula::new(ingredients));
        true
    }

    /// Register a sign name.
    pub fn add_sign(&mut self, name: &str) {
        self.signs.insert(name.to_string());
    }

    /// Whether a sign name is registered.
    pub fn has_sign(&self, name: &str) -> bool {
        self.signs.contains(name)
    }

    /// Formatted ingredient list for a potion, or None if no formula is
    /// known.
    pub fn format_formula(&self, potion: &str) -> Option<String> {
        self.formula(potion).map(Formula::format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn swallow() -> Vec<ItemCount> {
        vec![
            ItemCount::new("celandine", 3),
            ItemCount::new("mandrake", 2),
        ]
    }

    #[test]
    fn learn_and_query_formula() {
        let mut alchemy = AlchemyKnowledge::new();
        assert!(alchemy.learn_formula("Swallow", swallow()));
        assert!(alchemy.has_formula("Swallow"));
        assert_eq!(alchemy.formula("Swallow").unwrap().ingredients().len(), 2);
    }

    #[test]
    fn relearning_keeps_original() {
        let mut alchemy = AlchemyKnowledge::new();
        assert!(alchemy.learn_formula("Swallow", swallow()));
        assert!(!alchemy.learn_formula("Swallow", vec![ItemCount::new("vitriol", 9)]));
        assert_eq!(
            alchemy.format_formula("Swallow").unwrap(),
            "3 celandine, 2 mandrake"
        );
    }

    #[test]
    fn format_sorts_by_quantity_desc() {
        let mut alchemy = AlchemyKnowledge::new();
        alchemy.learn_formula(
            "Cat",
            vec![
                ItemCount::new("berbercane", 1),
                ItemCount::new("vitriol", 5),
                ItemCount::new("feainnewedd", 2),
            ],
        );
        assert_eq!(
            alchemy.format_formula("Cat").unwrap(),
            "5 vitriol, 2 feainnewedd, 1 berbercane"
        );
    }

    #[test]
    fn format_ties_break_alphabetically() {
        let mut alchemy = AlchemyKnowledge::new();
        alchemy.learn_formula(
            "Swallow",
            vec![
                ItemCount::new("mandrake", 3),
                ItemCount::new("celandine", 3),
            ],
        );
        assert_eq!(
            alchemy.format_formula("Swallow").unwrap(),
            "3 celandine, 3 mandrake"
        );
    }

    #[test]
    fn unknown_formula_is_none() {
        let alchemy = AlchemyKnowledge::new();
        assert!(alchemy.format_formula("Thunderbolt").is_none());
    }

    #[test]
    fn signs_are_deduplicated() {
        let mut alchemy = AlchemyKnowledge::new();
        alchemy.add_sign("Igni");
        alchemy.add_sign("Igni");
        assert!(alchemy.has_sign("Igni"));
        assert!(!alchemy.has_sign("Aard"));
    }

    #[test]
    fn serde_roundtrip() {
        let mut alchemy = AlchemyKnowledge::new();
        alchemy.learn_formula("Swallow", swallow());
        alchemy.add_sign("Quen");
        let json = serde_json::to_string(&alchemy).unwrap();
        let back: AlchemyKnowledge = serde_json::from_str(&json).unwrap();
        assert!(back.has_formula("Swallow"));
        assert!(back.has_sign("Quen"));
    }
}
