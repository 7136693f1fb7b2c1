//! Known beasts and their effective counters.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A beast and the counters known to work against it.
///
/// Signs and potions are kept in separate lists because learning and
/// encounter resolution treat them differently: a known sign is always
/// available, a potion must be in stock.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Beast {
    /// Beast name.
    pub name: String,
    /// Potions known to be effective, in learning order.
    pub effective_potions: Vec<String>,
    /// Signs known to be effective, in learning order.
    pub effective_signs: Vec<String>,
}

impl Beast {
    /// Create a beast with no known counters.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            effective_potions: Vec::new(),
            effective_signs: Vec::new(),
        }
    }

    /// Whether the given counter of the given kind is already recorded.
    pub fn knows(&self, counter: &str, is_sign: bool) -> bool {
        let list = if is_sign {
            &self.effective_signs
        } else {
            &self.effective_potions
        };
        list.iter().any(|c| c == counter)
    }

    fn record(&mut self, counter: &str, is_sign: bool) -> bool {
        if self.knows(counter, is_sign) {
            return false;
        }
        let list = if is_sign {
            &mut self.effective_signs
        } else {
            &mut self.effective_potions
        };
        list.push(counter.to_string());
        true
    }

    /// Potions and signs merged and sorted alphabetically.
    pub fn counters(&self) -> Vec<String> {
        let mut all: Vec<String> = self
            .effective_potions
            .iter()
            .chain(&self.effective_signs)
            .cloned()
            .collect();
        all.sort();
        all
    }
}

/// The bestiary: every beast Geralt has knowledge of.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Bestiary {
    beasts: BTreeMap<String, Beast>,
}

impl Bestiary {
    /// Create an empty bestiary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a beast is known at all.
    pub fn contains(&self, name: &str) -> bool {
        self.beasts.contains_key(name)
    }

    /// Look up a beast by name.
    pub fn get(&self, name: &str) -> Option<&Beast> {
        self.beasts.get(name)
    }

    /// Record a counter against a beast, creating the beast entry if
    /// needed. Returns false if that counter of that kind was already
    /// recorded (the entry is left unchanged).
    pub fn record_counter(&mut self, beast: &str, counter: &str, is_sign: bool) -> bool {
        self.beasts
            .entry(beast.to_string())
            .or_insert_with(|| Beast::new(beast))
            .record(counter, is_sign)
    }

    /// All counters known against a beast, sorted and comma-joined.
    /// None when the beast is unknown or has no recorded counters.
    pub fn counters(&self, beast: &str) -> Option<String> {
        let counters = self.get(beast)?.counters();
        if counters.is_empty() {
            None
        } else {
            Some(counters.join(", "))
        }
    }
}
