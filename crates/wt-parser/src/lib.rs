//! Command grammar recognizer for the Witcher tracker.
//!
//! Input lines are natural-language-like sentences (`Geralt loots 5
//! rebis`, `What is effective against harpy?`) matched against a small
//! fixed grammar. The [`tokenizer`] turns a line into semantic tokens;
//! the split strategy depends on the leading keywords, because some
//! commands embed free-text spans (multi-word potion and monster names)
//! that must not be word-split. The [`command`] module then tries one
//! structured parser per command shape, in a fixed precedence order, and
//! yields a [`Command`] carrying the operands, or [`Command::Invalid`].
//!
//! All keyword recognition is hand-rolled: the grammar mixes
//! whitespace-split words, comma list punctuation, and raw spans in ways
//! that depend on lookahead (the `Geralt learns` forms share a prefix and
//! are disambiguated by trying `is effective against` before
//! `consists of`), so a mode-less lexer cannot express it.

/// Structured command parsing and classification.
pub mod command;
/// Token type and lexical classifiers.
pub mod token;
/// Line tokenization with command-shape-aware splitting.
pub mod tokenizer;

pub use command::{Command, parse_line};
pub use token::Token;
pub use tokenizer::tokenize;
