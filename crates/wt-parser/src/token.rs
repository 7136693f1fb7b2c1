//! Semantic tokens and the lexical validity checks shared by the
//! command parsers.

use std::fmt;

/// One semantic token of an input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A whitespace-free chunk: a keyword, quantity, or single-word name.
    Word(String),
    /// A free-text stretch captured verbatim, possibly containing spaces.
    /// Produced for potion and monster names in positions where the
    /// grammar allows multi-word names.
    Span(String),
    /// A list separator.
    Comma,
    /// The query terminator.
    Question,
}

impl Token {
    /// Build a word token.
    pub fn word(text: impl Into<String>) -> Self {
        Self::Word(text.into())
    }

    /// Build a span token.
    pub fn span(text: impl Into<String>) -> Self {
        Self::Span(text.into())
    }

    /// The textual content of the token.
    pub fn text(&self) -> &str {
        match self {
            Self::Word(text) | Self::Span(text) => text,
            Self::Comma => ",",
            Self::Question => "?",
        }
    }

    /// Whether this token is exactly the given keyword word. Spans never
    /// match: a free-text name is not a keyword even if it reads like one.
    pub fn is_word(&self, keyword: &str) -> bool {
        matches!(self, Self::Word(text) if text == keyword)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Whether a token is a well-formed positive integer quantity: digits
/// only, no leading zero, value at least 1 and within `u32` range.
pub fn is_positive_integer(token: &str) -> bool {
    if token.is_empty() || (token.len() > 1 && token.starts_with('0')) {
        return false;
    }
    token.bytes().all(|b| b.is_ascii_digit()) && token.parse::<u32>().is_ok_and(|n| n > 0)
}

/// Whether a token is a single word of ASCII letters only.
pub fn is_alphabetic(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_alphabetic())
}

/// Whether a token is a valid multi-word name: ASCII letters separated
/// by single spaces, with no leading, trailing, or doubled spaces.
pub fn is_valid_name(token: &str) -> bool {
    if token.is_empty() || token.starts_with(' ') || token.ends_with(' ') {
        return false;
    }
    let mut previous_was_space = false;
    for c in token.chars() {
        if c == ' ' {
            if previous_was_space {
                return false;
            }
            previous_was_space = true;
        } else if c.is_ascii_alphabetic() {
            previous_was_space = false;
        } else {
            return false;
        }
    }
    true
}

/// Whether the token sequence misuses commas: a comma first, a comma
/// last, or two commas back to back.
pub fn has_comma_error(tokens: &[Token]) -> bool {
    let last = tokens.len().wrapping_sub(1);
    tokens.iter().enumerate().any(|(i, token)| {
        *token == Token::Comma
            && (i == 0 || i == last || tokens[i + 1] == Token::Comma)
    })
}
