//! Structured command parsing.
//!
//! [`parse_line`] cleans a line, tokenizes it once, and offers the same
//! token sequence to one recognizer per command shape, in a fixed
//! order. The first recognizer that accepts wins; if none does, the
//! line is [`Command::Invalid`]. Each recognizer extracts its operands
//! while validating, so no second pass over the text is needed.

use wt_core::{Category, ItemCount};

use crate::token::{self, Token};
use crate::tokenizer::tokenize;

/// A fully parsed input line with its operands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `Geralt loots <qty> <ingredient>, ...`: ingredients enter the
    /// inventory.
    Loot {
        /// Looted ingredients with quantities.
        haul: Vec<ItemCount>,
    },
    /// `Geralt trades <qty> <monster>, ... trophy for <qty>
    /// <ingredient>, ...`: trophies leave, ingredients arrive.
    Trade {
        /// Trophies handed over.
        trophies: Vec<ItemCount>,
        /// Ingredients received in return.
        ingredients: Vec<ItemCount>,
    },
    /// `Geralt brews <potion>`: consume the formula's ingredients,
    /// gain one potion.
    Brew {
        /// Potion to brew.
        potion: String,
    },
    /// `Geralt learns <counter> sign/potion is effective against
    /// <monster>`: extend the bestiary.
    LearnEffectiveness {
        /// Sign or potion name.
        counter: String,
        /// True for a sign, false for a potion.
        is_sign: bool,
        /// The beast the counter works against.
        monster: String,
    },
    /// `Geralt learns <potion> potion consists of <qty> <ingredient>,
    /// ...`: record a formula.
    LearnFormula {
        /// Potion the formula brews.
        potion: String,
        /// Required ingredients with quantities.
        ingredients: Vec<ItemCount>,
    },
    /// `Geralt encounters a <monster>`: fight, using known counters.
    Encounter {
        /// The beast encountered.
        monster: String,
    },
    /// `Total <category> ?`: list everything held in a category.
    QueryAllInventory {
        /// Category to list.
        category: Category,
    },
    /// `Total <category> <name> ?`: stock of one specific item.
    QueryInventory {
        /// Category the item belongs to.
        category: Category,
        /// Item name.
        name: String,
    },
    /// `What is effective against <monster> ?`: known counters.
    QueryBestiary {
        /// The beast asked about.
        monster: String,
    },
    /// `What is in <potion> ?`: the known formula.
    QueryAlchemy {
        /// The potion asked about.
        potion: String,
    },
    /// `Exit`: end the session.
    Exit,
    /// Anything that matches no command shape.
    Invalid,
}

/// Parse one raw input line into a [`Command`].
///
/// Surrounding whitespace is ignored; an empty line is invalid. The
/// recognizers are tried in a fixed order, though at most one can
/// accept any given line.
pub fn parse_line(input: &str) -> Command {
    let line = input.trim();
    if line.is_empty() {
        return Command::Invalid;
    }
    let tokens = tokenize(line);
    parse_loot(&tokens)
        .or_else(|| parse_trade(&tokens))
        .or_else(|| parse_brew(&tokens))
        .or_else(|| parse_effectiveness(&tokens))
        .or_else(|| parse_formula(&tokens))
        .or_else(|| parse_encounter(&tokens))
        .or_else(|| parse_inventory_query(&tokens))
        .or_else(|| parse_bestiary_query(&tokens))
        .or_else(|| parse_alchemy_query(&tokens))
        .or_else(|| (line == "Exit").then_some(Command::Exit))
        .unwrap_or(Command::Invalid)
}

/// Comma handling inside a quantity/name list.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Separators {
    /// Consecutive pairs must be separated by a comma.
    Required,
    /// A comma between pairs is accepted but not demanded.
    Optional,
}

/// Parse a `<qty> <name>` list. Quantities must be well-formed positive
/// integers, names single alphabetic words. A trailing comma or an
/// empty list is rejected; the slice must be consumed exactly.
fn parse_pairs(tokens: &[Token], separators: Separators) -> Option<Vec<ItemCount>> {
    let mut items = Vec::new();
    let mut i = 0;
    while i < tokens.len() {
        let quantity_text = tokens[i].text();
        if !token::is_positive_integer(quantity_text) {
            return None;
        }
        let quantity: u32 = quantity_text.parse().ok()?;
        let name = tokens.get(i + 1)?.text();
        if !token::is_alphabetic(name) {
            return None;
        }
        items.push(ItemCount::new(name, quantity));
        i += 2;
        if i >= tokens.len() {
            break;
        }
        if tokens[i] == Token::Comma {
            i += 1;
            if i >= tokens.len() {
                return None;
            }
        } else if separators == Separators::Required {
            return None;
        }
    }
    if items.is_empty() { None } else { Some(items) }
}

fn parse_loot(tokens: &[Token]) -> Option<Command> {
    if tokens.len() < 4 || !tokens[0].is_word("Geralt") || !tokens[1].is_word("loots") {
        return None;
    }
    if token::has_comma_error(tokens) {
        return None;
    }
    // Historical quirk: the comma between loot entries is optional.
    let haul = parse_pairs(&tokens[2..], Separators::Optional)?;
    Some(Command::Loot { haul })
}

fn parse_trade(tokens: &[Token]) -> Option<Command> {
    if tokens.len() < 8 || !tokens[0].is_word("Geralt") || !tokens[1].is_word("trades") {
        return None;
    }
    if token::has_comma_error(tokens) {
        return None;
    }
    // The first `for` splits offer from payment. It needs room for at
    // least one pair plus `trophy` before it and one pair after it.
    let for_index = tokens.iter().position(|t| t.is_word("for"))?;
    if for_index < 5 || for_index + 2 >= tokens.len() {
        return None;
    }
    if !tokens[for_index - 1].is_word("trophy") {
        return None;
    }
    let trophies = parse_pairs(&tokens[2..for_index - 1], Separators::Required)?;
    let ingredients = parse_pairs(&tokens[for_index + 1..], Separators::Required)?;
    Some(Command::Trade {
        trophies,
        ingredients,
    })
}

fn parse_brew(tokens: &[Token]) -> Option<Command> {
    match tokens {
        [geralt, brews, Token::Span(potion)]
            if geralt.is_word("Geralt")
                && brews.is_word("brews")
                && token::is_valid_name(potion) =>
        {
            Some(Command::Brew {
                potion: potion.clone(),
            })
        }
        _ => None,
    }
}

fn parse_effectiveness(tokens: &[Token]) -> Option<Command> {
    let [geralt, learns, counter, kind, is, effective, against, monster] = tokens else {
        return None;
    };
    if !geralt.is_word("Geralt")
        || !learns.is_word("learns")
        || !is.is_word("is")
        || !effective.is_word("effective")
        || !against.is_word("against")
    {
        return None;
    }
    let is_sign = if kind.is_word("sign") {
        true
    } else if kind.is_word("potion") {
        false
    } else {
        return None;
    };
    // Sign names are single words; potion names may span several.
    let counter = counter.text();
    let counter_ok = if is_sign {
        token::is_alphabetic(counter)
    } else {
        token::is_valid_name(counter)
    };
    let monster = monster.text();
    if !counter_ok || !token::is_alphabetic(monster) {
        return None;
    }
    Some(Command::LearnEffectiveness {
        counter: counter.to_string(),
        is_sign,
        monster: monster.to_string(),
    })
}

fn parse_formula(tokens: &[Token]) -> Option<Command> {
    if tokens.len() < 7
        || !tokens[0].is_word("Geralt")
        || !tokens[1].is_word("learns")
        || !tokens[3].is_word("potion")
        || !tokens[4].is_word("consists")
        || !tokens[5].is_word("of")
    {
        return None;
    }
    if token::has_comma_error(tokens) {
        return None;
    }
    let potion = tokens[2].text();
    if !token::is_valid_name(potion) {
        return None;
    }
    let ingredients = parse_pairs(&tokens[6..], Separators::Required)?;
    Some(Command::LearnFormula {
        potion: potion.to_string(),
        ingredients,
    })
}

fn parse_encounter(tokens: &[Token]) -> Option<Command> {
    let [geralt, encounters, article, monster] = tokens else {
        return None;
    };
    if !geralt.is_word("Geralt") || !encounters.is_word("encounters") || !article.is_word("a") {
        return None;
    }
    let monster = monster.text();
    if !token::is_alphabetic(monster) {
        return None;
    }
    Some(Command::Encounter {
        monster: monster.to_string(),
    })
}

fn parse_inventory_query(tokens: &[Token]) -> Option<Command> {
    if !matches!(tokens.len(), 3 | 4)
        || !tokens[0].is_word("Total")
        || *tokens.last()? != Token::Question
    {
        return None;
    }
    let category: Category = tokens[1].text().parse().ok()?;
    if tokens.len() == 3 {
        return Some(Command::QueryAllInventory { category });
    }
    let name = tokens[2].text();
    let name_ok = match category {
        Category::Potion => token::is_valid_name(name),
        Category::Ingredient | Category::Trophy => token::is_alphabetic(name),
    };
    if !name_ok {
        return None;
    }
    Some(Command::QueryInventory {
        category,
        name: name.to_string(),
    })
}

fn parse_bestiary_query(tokens: &[Token]) -> Option<Command> {
    let [what, is, effective, against, monster, question] = tokens else {
        return None;
    };
    if !what.is_word("What")
        || !is.is_word("is")
        || !effective.is_word("effective")
        || !against.is_word("against")
        || *question != Token::Question
    {
        return None;
    }
    let monster = monster.text();
    if !token::is_alphabetic(monster) {
        return None;
    }
    Some(Command::QueryBestiary {
        monster: monster.to_string(),
    })
}

fn parse_alchemy_query(tokens: &[Token]) -> Option<Command> {
    if tokens.len() < 5
        || !tokens[0].is_word("What")
        || !tokens[1].is_word("is")
        || !tokens[2].is_word("in")
        || *tokens.last()? != Token::Question
    {
        return None;
    }
    let name_tokens = &tokens[3..tokens.len() - 1];
    if name_tokens
        .iter()
        .any(|t| !token::is_valid_name(t.text()))
    {
        return None;
    }
    let potion = name_tokens
        .iter()
        .map(Token::text)
        .collect::<Vec<_>>()
        .join(" ");
    Some(Command::QueryAlchemy { potion })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(pairs: &[(&str, u32)]) -> Vec<ItemCount> {
        pairs
            .iter()
            .map(|(name, qty)| ItemCount::new(*name, *qty))
            .collect()
    }

    // ---- loot ----

    #[test]
    fn loot_single_ingredient() {
        assert_eq!(
            parse_line("Geralt loots 5 rebis"),
            Command::Loot {
                haul: counts(&[("rebis", 5)])
            }
        );
    }

    #[test]
    fn loot_multiple_ingredients() {
        assert_eq!(
            parse_line("Geralt loots 2 rebis, 3 vitriol, 1 quebrith"),
            Command::Loot {
                haul: counts(&[("rebis", 2), ("vitriol", 3), ("quebrith", 1)])
            }
        );
    }

    #[test]
    fn loot_commas_are_optional() {
        assert_eq!(
            parse_line("Geralt loots 2 rebis 3 vitriol"),
            Command::Loot {
                haul: counts(&[("rebis", 2), ("vitriol", 3)])
            }
        );
    }

    #[test]
    fn loot_zero_quantity_invalid() {
        assert_eq!(parse_line("Geralt loots 0 rebis"), Command::Invalid);
    }

    #[test]
    fn loot_leading_zero_invalid() {
        assert_eq!(parse_line("Geralt loots 05 rebis"), Command::Invalid);
    }

    #[test]
    fn loot_trailing_comma_invalid() {
        assert_eq!(parse_line("Geralt loots 2 rebis,"), Command::Invalid);
    }

    #[test]
    fn loot_doubled_comma_invalid() {
        assert_eq!(
            parse_line("Geralt loots 2 rebis,, 3 vitriol"),
            Command::Invalid
        );
    }

    #[test]
    fn loot_dangling_quantity_invalid() {
        assert_eq!(parse_line("Geralt loots 2 rebis 3"), Command::Invalid);
    }

    #[test]
    fn loot_numeric_name_invalid() {
        assert_eq!(parse_line("Geralt loots 2 33"), Command::Invalid);
    }

    // ---- trade ----

    #[test]
    fn trade_single_pair_each_side() {
        assert_eq!(
            parse_line("Geralt trades 2 nekker trophy for 5 rebis"),
            Command::Trade {
                trophies: counts(&[("nekker", 2)]),
                ingredients: counts(&[("rebis", 5)]),
            }
        );
    }

    #[test]
    fn trade_multiple_pairs() {
        assert_eq!(
            parse_line("Geralt trades 1 drowner, 2 nekker trophy for 4 rebis, 1 vitriol"),
            Command::Trade {
                trophies: counts(&[("drowner", 1), ("nekker", 2)]),
                ingredients: counts(&[("rebis", 4), ("vitriol", 1)]),
            }
        );
    }

    #[test]
    fn trade_missing_trophy_keyword_invalid() {
        assert_eq!(
            parse_line("Geralt trades 2 nekker for 5 rebis"),
            Command::Invalid
        );
    }

    #[test]
    fn trade_missing_for_invalid() {
        assert_eq!(
            parse_line("Geralt trades 2 nekker trophy 5 rebis"),
            Command::Invalid
        );
    }

    #[test]
    fn trade_empty_payment_invalid() {
        assert_eq!(
            parse_line("Geralt trades 2 nekker trophy for"),
            Command::Invalid
        );
    }

    #[test]
    fn trade_comma_before_trophy_invalid() {
        assert_eq!(
            parse_line("Geralt trades 2 nekker, trophy for 5 rebis"),
            Command::Invalid
        );
    }

    #[test]
    fn trade_missing_comma_between_trophies_invalid() {
        assert_eq!(
            parse_line("Geralt trades 1 drowner 2 nekker trophy for 5 rebis"),
            Command::Invalid
        );
    }

    #[test]
    fn trade_monster_named_trophy_is_accepted() {
        assert_eq!(
            parse_line("Geralt trades 1 trophy trophy for 2 rebis"),
            Command::Trade {
                trophies: counts(&[("trophy", 1)]),
                ingredients: counts(&[("rebis", 2)]),
            }
        );
    }

    // ---- brew ----

    #[test]
    fn brew_single_word_potion() {
        assert_eq!(
            parse_line("Geralt brews Swallow"),
            Command::Brew {
                potion: "Swallow".to_string()
            }
        );
    }

    #[test]
    fn brew_multi_word_potion() {
        assert_eq!(
            parse_line("Geralt brews Full Moon Decoction"),
            Command::Brew {
                potion: "Full Moon Decoction".to_string()
            }
        );
    }

    #[test]
    fn brew_name_with_digits_invalid() {
        assert_eq!(parse_line("Geralt brews Swallow2"), Command::Invalid);
    }

    #[test]
    fn brew_doubled_space_invalid() {
        assert_eq!(parse_line("Geralt brews Black  Blood"), Command::Invalid);
    }

    #[test]
    fn brew_nothing_invalid() {
        assert_eq!(parse_line("Geralt brews"), Command::Invalid);
    }

    // ---- learn effectiveness ----

    #[test]
    fn learn_sign_effectiveness() {
        assert_eq!(
            parse_line("Geralt learns Igni sign is effective against ghoul"),
            Command::LearnEffectiveness {
                counter: "Igni".to_string(),
                is_sign: true,
                monster: "ghoul".to_string(),
            }
        );
    }

    #[test]
    fn learn_potion_effectiveness_multi_word() {
        assert_eq!(
            parse_line("Geralt learns Black Blood potion is effective against bruxa"),
            Command::LearnEffectiveness {
                counter: "Black Blood".to_string(),
                is_sign: false,
                monster: "bruxa".to_string(),
            }
        );
    }

    #[test]
    fn learn_multi_word_sign_invalid() {
        assert_eq!(
            parse_line("Geralt learns Black Blood sign is effective against bruxa"),
            Command::Invalid
        );
    }

    #[test]
    fn learn_multi_word_monster_invalid() {
        assert_eq!(
            parse_line("Geralt learns Igni sign is effective against wild hunt"),
            Command::Invalid
        );
    }

    #[test]
    fn learn_sign_then_potion_keyword_invalid() {
        assert_eq!(
            parse_line("Geralt learns Igni sign potion is effective against ghoul"),
            Command::Invalid
        );
    }

    // ---- learn formula ----

    #[test]
    fn learn_formula() {
        assert_eq!(
            parse_line("Geralt learns Swallow potion consists of 3 celandine, 2 rebis"),
            Command::LearnFormula {
                potion: "Swallow".to_string(),
                ingredients: counts(&[("celandine", 3), ("rebis", 2)]),
            }
        );
    }

    #[test]
    fn learn_formula_multi_word_potion() {
        assert_eq!(
            parse_line("Geralt learns Full Moon potion consists of 1 mandrake"),
            Command::LearnFormula {
                potion: "Full Moon".to_string(),
                ingredients: counts(&[("mandrake", 1)]),
            }
        );
    }

    #[test]
    fn learn_formula_missing_comma_invalid() {
        assert_eq!(
            parse_line("Geralt learns Swallow potion consists of 3 celandine 2 rebis"),
            Command::Invalid
        );
    }

    #[test]
    fn learn_formula_trailing_comma_invalid() {
        assert_eq!(
            parse_line("Geralt learns Swallow potion consists of 3 celandine,"),
            Command::Invalid
        );
    }

    #[test]
    fn learn_formula_sign_keyword_invalid() {
        assert_eq!(
            parse_line("Geralt learns Igni sign consists of 3 celandine"),
            Command::Invalid
        );
    }

    #[test]
    fn learn_formula_no_ingredients_invalid() {
        assert_eq!(
            parse_line("Geralt learns Swallow potion consists of"),
            Command::Invalid
        );
    }

    #[test]
    fn learn_formula_ingredient_named_potion_is_accepted() {
        assert_eq!(
            parse_line("Geralt learns Cat potion consists of 2 potion"),
            Command::LearnFormula {
                potion: "Cat".to_string(),
                ingredients: counts(&[("potion", 2)]),
            }
        );
    }

    // ---- encounter ----

    #[test]
    fn encounter() {
        assert_eq!(
            parse_line("Geralt encounters a harpy"),
            Command::Encounter {
                monster: "harpy".to_string()
            }
        );
    }

    #[test]
    fn encounter_missing_article_invalid() {
        assert_eq!(parse_line("Geralt encounters harpy"), Command::Invalid);
    }

    #[test]
    fn encounter_multi_word_monster_invalid() {
        assert_eq!(
            parse_line("Geralt encounters a wild hunt"),
            Command::Invalid
        );
    }

    // ---- inventory queries ----

    #[test]
    fn query_all_categories() {
        assert_eq!(
            parse_line("Total ingredient ?"),
            Command::QueryAllInventory {
                category: Category::Ingredient
            }
        );
        assert_eq!(
            parse_line("Total potion ?"),
            Command::QueryAllInventory {
                category: Category::Potion
            }
        );
        assert_eq!(
            parse_line("Total trophy ?"),
            Command::QueryAllInventory {
                category: Category::Trophy
            }
        );
    }

    #[test]
    fn query_specific_item() {
        assert_eq!(
            parse_line("Total ingredient rebis ?"),
            Command::QueryInventory {
                category: Category::Ingredient,
                name: "rebis".to_string(),
            }
        );
    }

    #[test]
    fn query_specific_potion_multi_word() {
        assert_eq!(
            parse_line("Total potion Black Blood ?"),
            Command::QueryInventory {
                category: Category::Potion,
                name: "Black Blood".to_string(),
            }
        );
    }

    #[test]
    fn query_multi_word_ingredient_invalid() {
        assert_eq!(
            parse_line("Total ingredient dwarven spirit ?"),
            Command::Invalid
        );
    }

    #[test]
    fn query_unknown_category_invalid() {
        assert_eq!(parse_line("Total weapon ?"), Command::Invalid);
    }

    #[test]
    fn query_category_is_case_sensitive() {
        assert_eq!(parse_line("Total Ingredient ?"), Command::Invalid);
    }

    #[test]
    fn query_without_question_mark_invalid() {
        assert_eq!(parse_line("Total ingredient"), Command::Invalid);
    }

    #[test]
    fn query_trailing_garbage_invalid() {
        assert_eq!(parse_line("Total ingredient ? now"), Command::Invalid);
    }

    // ---- bestiary query ----

    #[test]
    fn bestiary_query() {
        assert_eq!(
            parse_line("What is effective against nekker ?"),
            Command::QueryBestiary {
                monster: "nekker".to_string()
            }
        );
    }

    #[test]
    fn bestiary_query_multi_word_monster_invalid() {
        assert_eq!(
            parse_line("What is effective against wild hunt ?"),
            Command::Invalid
        );
    }

    // ---- alchemy query ----

    #[test]
    fn alchemy_query() {
        assert_eq!(
            parse_line("What is in Swallow ?"),
            Command::QueryAlchemy {
                potion: "Swallow".to_string()
            }
        );
    }

    #[test]
    fn alchemy_query_multi_word() {
        assert_eq!(
            parse_line("What is in Full Moon ?"),
            Command::QueryAlchemy {
                potion: "Full Moon".to_string()
            }
        );
    }

    #[test]
    fn alchemy_query_question_mark_may_touch_name() {
        assert_eq!(
            parse_line("What is in Swallow?"),
            Command::QueryAlchemy {
                potion: "Swallow".to_string()
            }
        );
    }

    #[test]
    fn alchemy_query_missing_name_invalid() {
        assert_eq!(parse_line("What is in ?"), Command::Invalid);
    }

    #[test]
    fn alchemy_query_digits_invalid() {
        assert_eq!(parse_line("What is in Swallow2 ?"), Command::Invalid);
    }

    // ---- exit and fallback ----

    #[test]
    fn exit_exact() {
        assert_eq!(parse_line("Exit"), Command::Exit);
    }

    #[test]
    fn exit_surrounding_whitespace_ok() {
        assert_eq!(parse_line("  Exit  "), Command::Exit);
    }

    #[test]
    fn exit_wrong_case_invalid() {
        assert_eq!(parse_line("exit"), Command::Invalid);
        assert_eq!(parse_line("EXIT"), Command::Invalid);
    }

    #[test]
    fn exit_with_extra_words_invalid() {
        assert_eq!(parse_line("Exit now"), Command::Invalid);
    }

    #[test]
    fn empty_line_invalid() {
        assert_eq!(parse_line(""), Command::Invalid);
        assert_eq!(parse_line("   "), Command::Invalid);
    }

    #[test]
    fn unknown_sentence_invalid() {
        assert_eq!(parse_line("Yennefer brews Swallow"), Command::Invalid);
        assert_eq!(parse_line("Geralt sings"), Command::Invalid);
    }

    #[test]
    fn keywords_are_case_sensitive() {
        assert_eq!(parse_line("geralt loots 5 rebis"), Command::Invalid);
        assert_eq!(parse_line("Geralt Loots 5 rebis"), Command::Invalid);
    }

    #[test]
    fn extra_inner_whitespace_is_tolerated() {
        assert_eq!(
            parse_line("Geralt   loots   5   rebis"),
            Command::Loot {
                haul: counts(&[("rebis", 5)])
            }
        );
    }
}
