//! Command execution against the session state.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use wt_core::{AlchemyKnowledge, Bestiary, Category, Inventory, ItemCount};
use wt_parser::{Command, parse_line};

/// The outcome of processing one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// A reply line to print.
    Output(String),
    /// The exit command was given; the session is over.
    Exit,
}

/// One tracking session: Geralt's inventory, bestiary, and alchemy
/// knowledge, driven by input lines.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    inventory: Inventory,
    bestiary: Bestiary,
    alchemy: AlchemyKnowledge,
}

impl Session {
    /// Start a session with empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and execute one input line.
    pub fn process(&mut self, line: &str) -> Reply {
        let output = match parse_line(line) {
            Command::Loot { haul } => self.loot(&haul),
            Command::Trade {
                trophies,
                ingredients,
            } => self.trade(&trophies, &ingredients),
            Command::Brew { potion } => self.brew(&potion),
            Command::LearnEffectiveness {
                counter,
                is_sign,
                monster,
            } => self.learn_effectiveness(&counter, is_sign, &monster),
            Command::LearnFormula {
                potion,
                ingredients,
            } => self.learn_formula(&potion, ingredients),
            Command::Encounter { monster } => self.encounter(&monster),
            Command::QueryAllInventory { category } => self.query_all(category),
            Command::QueryInventory { category, name } => self.query_item(category, &name),
            Command::QueryBestiary { monster } => self.query_bestiary(&monster),
            Command::QueryAlchemy { potion } => self.query_alchemy(&potion),
            Command::Exit => return Reply::Exit,
            Command::Invalid => "INVALID".to_string(),
        };
        Reply::Output(output)
    }

    fn loot(&mut self, haul: &[ItemCount]) -> String {
        for item in haul {
            self.inventory
                .add(Category::Ingredient, &item.name, item.quantity);
        }
        "Alchemy ingredients obtained".to_string()
    }

    fn trade(&mut self, trophies: &[ItemCount], ingredients: &[ItemCount]) -> String {
        // The same trophy may appear in several pairs; settle against the
        // summed demand so stock cannot go negative.
        let needed = sum_by_name(trophies);
        let affordable = needed
            .iter()
            .all(|(name, &qty)| self.inventory.quantity(Category::Trophy, name) >= qty);
        if !affordable {
            return "Not enough trophies".to_string();
        }
        for (name, qty) in needed {
            self.inventory.remove(Category::Trophy, name, qty);
        }
        for item in ingredients {
            self.inventory
                .add(Category::Ingredient, &item.name, item.quantity);
        }
        "Trade successful".to_string()
    }

    fn brew(&mut self, potion: &str) -> String {
        let Some(formula) = self.alchemy.formula(potion) else {
            return format!("No formula for {potion}");
        };
        let needed = sum_by_name(formula.ingredients());
        let stocked = needed
            .iter()
            .all(|(name, &qty)| self.inventory.quantity(Category::Ingredient, name) >= qty);
        if !stocked {
            return "Not enough ingredients".to_string();
        }
        for (name, qty) in needed {
            self.inventory.remove(Category::Ingredient, name, qty);
        }
        self.inventory.add(Category::Potion, potion, 1);
        format!("Alchemy item created: {potion}")
    }

    fn learn_effectiveness(&mut self, counter: &str, is_sign: bool, monster: &str) -> String {
        let beast_existed = self.bestiary.contains(monster);
        if !self.bestiary.record_counter(monster, counter, is_sign) {
            return "Already known effectiveness".to_string();
        }
        if is_sign {
            self.alchemy.add_sign(counter);
        }
        if beast_existed {
            format!("Bestiary entry updated: {monster}")
        } else {
            format!("New bestiary entry added: {monster}")
        }
    }

    fn learn_formula(&mut self, potion: &str, ingredients: Vec<ItemCount>) -> String {
        if self.alchemy.learn_formula(potion, ingredients) {
            format!("New alchemy formula obtained: {potion}")
        } else {
            "Already known formula".to_string()
        }
    }

    fn encounter(&mut self, monster: &str) -> String {
        let unprepared = "Geralt is unprepared and barely escapes with his life".to_string();
        let Some(beast) = self.bestiary.get(monster) else {
            return unprepared;
        };
        let stocked_potions: Vec<String> = beast
            .effective_potions
            .iter()
            .filter(|p| self.inventory.quantity(Category::Potion, p) > 0)
            .cloned()
            .collect();
        // A known sign always works; a potion must be in stock.
        if stocked_potions.is_empty() && beast.effective_signs.is_empty() {
            return unprepared;
        }
        for potion in &stocked_potions {
            self.inventory.remove(Category::Potion, potion, 1);
        }
        self.inventory.add(Category::Trophy, monster, 1);
        format!("Geralt defeats {monster}")
    }

    fn query_all(&self, category: Category) -> String {
        self.inventory
            .summary(category)
            .unwrap_or_else(|| "None".to_string())
    }

    fn query_item(&self, category: Category, name: &str) -> String {
        self.inventory.quantity(category, name).to_string()
    }

    fn query_bestiary(&self, monster: &str) -> String {
        self.bestiary
            .counters(monster)
            .unwrap_or_else(|| format!("No knowledge of {monster}"))
    }

    fn query_alchemy(&self, potion: &str) -> String {
        self.alchemy
            .format_formula(potion)
            .unwrap_or_else(|| format!("No formula for {potion}"))
    }
}

/// Total quantity per name, in case a list names an item twice.
fn sum_by_name(items: &[ItemCount]) -> BTreeMap<&str, u32> {
    let mut totals = BTreeMap::new();
    for item in items {
        *totals.entry(item.name.as_str()).or_insert(0) += item.quantity;
    }
    totals
}
