//! Turns a cleaned input line into semantic tokens.
//!
//! The split strategy depends on the line's leading keywords. Query
//! lines (`What is in`, `What is effective against`, `Total`) capture
//! the subject as one span running up to the `?`. `Geralt brews` takes
//! the whole remainder as the potion name. `Geralt learns` scans ahead
//! for the first `sign` or `potion` keyword so that everything before it
//! becomes one name span, then tries the effectiveness wording before
//! the formula wording. Every other line, including `Geralt loots` and
//! `Geralt trades`, is split into whitespace-separated words with commas
//! as their own tokens.
//!
//! A line whose opening only partially matches a special shape (say
//! `What is here`) falls back to the generic word split; the command
//! parsers reject it from there.

use crate::token::Token;

/// Tokenize one line. The caller is expected to have trimmed
/// surrounding whitespace; [`crate::parse_line`] does so.
pub fn tokenize(line: &str) -> Vec<Token> {
    if let Some(tokens) = tokenize_question(line) {
        return tokens;
    }
    if let Some(tokens) = tokenize_total(line) {
        return tokens;
    }
    if let Some(tokens) = tokenize_geralt(line) {
        return tokens;
    }
    words_and_commas(line)
}

/// Byte cursor over one line. All grammar keywords and separators are
/// ASCII; spans between them may carry arbitrary text.
struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.src.len()
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn bump(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    /// Consume `keyword` if it appears here as a whole word (followed by
    /// whitespace or end of line).
    fn eat_keyword(&mut self, keyword: &str) -> bool {
        let Some(after) = self.rest().strip_prefix(keyword) else {
            return false;
        };
        if !after.chars().next().is_none_or(char::is_whitespace) {
            return false;
        }
        self.pos += keyword.len();
        true
    }

    /// Consume up to the next `?` (or end of line) and return the
    /// stretch with trailing whitespace trimmed, or None if it is empty.
    /// Leaves the cursor on the `?` itself.
    fn take_span_before_question(&mut self) -> Option<&'a str> {
        let rest = self.rest();
        let end = rest.find('?').unwrap_or(rest.len());
        self.pos += end;
        let span = rest[..end].trim_end();
        (!span.is_empty()).then_some(span)
    }

    /// Consume the longest run of characters matching `pred`.
    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let start = self.pos;
        while self.peek().is_some_and(&pred) {
            self.bump();
        }
        &self.src[start..self.pos]
    }
}

/// Generic split: maximal runs of non-space, non-comma characters as
/// words, each comma its own token.
fn words_and_commas(src: &str) -> Vec<Token> {
    let mut cursor = Cursor::new(src);
    let mut tokens = Vec::new();
    loop {
        cursor.skip_whitespace();
        if cursor.is_at_end() {
            return tokens;
        }
        if cursor.peek() == Some(',') {
            cursor.bump();
            tokens.push(Token::Comma);
            continue;
        }
        let word = cursor.take_while(|c| !c.is_whitespace() && c != ',');
        tokens.push(Token::word(word));
    }
}

/// Subject span, `?`, and whatever trails the `?` (word-split so the
/// parsers can see and reject trailing garbage).
fn finish_question(cursor: &mut Cursor<'_>, tokens: &mut Vec<Token>) {
    cursor.skip_whitespace();
    if let Some(span) = cursor.take_span_before_question() {
        tokens.push(Token::span(span));
    }
    if cursor.peek() == Some('?') {
        cursor.bump();
        tokens.push(Token::Question);
        tokens.extend(words_and_commas(cursor.rest()));
    }
}

/// `What is in <name> ?` and `What is effective against <monster> ?`.
fn tokenize_question(line: &str) -> Option<Vec<Token>> {
    let mut cursor = Cursor::new(line);
    cursor.skip_whitespace();
    if !cursor.eat_keyword("What") {
        return None;
    }
    cursor.skip_whitespace();
    if !cursor.eat_keyword("is") {
        return None;
    }
    cursor.skip_whitespace();
    if cursor.eat_keyword("in") {
        let mut tokens = vec![Token::word("What"), Token::word("is"), Token::word("in")];
        finish_question(&mut cursor, &mut tokens);
        return Some(tokens);
    }
    if cursor.eat_keyword("effective") {
        cursor.skip_whitespace();
        if cursor.eat_keyword("against") {
            let mut tokens = vec![
                Token::word("What"),
                Token::word("is"),
                Token::word("effective"),
                Token::word("against"),
            ];
            finish_question(&mut cursor, &mut tokens);
            return Some(tokens);
        }
    }
    None
}

/// `Total <category> ?` and `Total <category> <name> ?`.
fn tokenize_total(line: &str) -> Option<Vec<Token>> {
    let mut cursor = Cursor::new(line);
    cursor.skip_whitespace();
    if !cursor.eat_keyword("Total") {
        return None;
    }
    cursor.skip_whitespace();

    let mut tokens = vec![Token::word("Total")];
    // The category word may butt up against the `?`.
    let category = cursor.take_while(|c| !c.is_whitespace() && c != '?');
    if !category.is_empty() {
        tokens.push(Token::word(category));
    }
    cursor.skip_whitespace();
    if cursor.peek() == Some('?') {
        cursor.bump();
        tokens.push(Token::Question);
        tokens.extend(words_and_commas(cursor.rest()));
        return Some(tokens);
    }
    if cursor.is_at_end() {
        return Some(tokens);
    }
    finish_question(&mut cursor, &mut tokens);
    Some(tokens)
}

/// `Geralt brews <potion>` and the `Geralt learns` forms. Other Geralt
/// sentences use the generic split.
fn tokenize_geralt(line: &str) -> Option<Vec<Token>> {
    let mut cursor = Cursor::new(line);
    cursor.skip_whitespace();
    if !cursor.eat_keyword("Geralt") {
        return None;
    }
    cursor.skip_whitespace();
    if cursor.eat_keyword("brews") {
        let mut tokens = vec![Token::word("Geralt"), Token::word("brews")];
        cursor.skip_whitespace();
        if !cursor.is_at_end() {
            tokens.push(Token::span(cursor.rest()));
        }
        return Some(tokens);
    }
    if cursor.eat_keyword("learns") {
        return Some(tokenize_learns(&mut cursor));
    }
    None
}

/// After `Geralt learns`: scan word by word for the first `sign` or
/// `potion` keyword. The text before it is the counter or potion name
/// (one span). If no keyword appears, or nothing precedes it, only the
/// opening words are produced and the line cannot validate.
fn tokenize_learns(cursor: &mut Cursor<'_>) -> Vec<Token> {
    let mut tokens = vec![Token::word("Geralt"), Token::word("learns")];
    cursor.skip_whitespace();
    let subject_start = cursor.pos;
    loop {
        cursor.skip_whitespace();
        if cursor.is_at_end() {
            return tokens;
        }
        let word_start = cursor.pos;
        let word = cursor.take_while(|c| !c.is_whitespace());
        if word != "sign" && word != "potion" {
            continue;
        }
        let name = cursor.src[subject_start..word_start].trim();
        if name.is_empty() {
            return tokens;
        }
        tokens.push(Token::span(name));
        tokens.push(Token::word(word));

        // Two possible continuations share this prefix; try the
        // effectiveness wording first, then the formula wording.
        let resume = cursor.pos;
        if let Some(tail) = effectiveness_tail(cursor.src, resume) {
            tokens.extend(tail);
        } else if let Some(tail) = formula_tail(cursor.src, resume) {
            tokens.extend(tail);
        }
        return tokens;
    }
}

/// `is effective against <monster>` continuation of `Geralt learns`.
fn effectiveness_tail(src: &str, pos: usize) -> Option<Vec<Token>> {
    let mut cursor = Cursor { src, pos };
    cursor.skip_whitespace();
    if !cursor.eat_keyword("is") {
        return None;
    }
    cursor.skip_whitespace();
    if !cursor.eat_keyword("effective") {
        return None;
    }
    cursor.skip_whitespace();
    if !cursor.eat_keyword("against") {
        return None;
    }
    let mut tokens = vec![
        Token::word("is"),
        Token::word("effective"),
        Token::word("against"),
    ];
    cursor.skip_whitespace();
    if !cursor.is_at_end() {
        tokens.push(Token::span(cursor.rest()));
    }
    Some(tokens)
}

/// `consists of <qty> <ingredient>, ...` continuation of `Geralt
/// learns`. Quantities are maximal digit runs, so a malformed chunk
/// like `3x` splits into `3` and `x` for the validator to judge.
fn formula_tail(src: &str, pos: usize) -> Option<Vec<Token>> {
    let mut cursor = Cursor { src, pos };
    cursor.skip_whitespace();
    if !cursor.eat_keyword("consists") {
        return None;
    }
    cursor.skip_whitespace();
    if !cursor.eat_keyword("of") {
        return None;
    }
    let mut tokens = vec![Token::word("consists"), Token::word("of")];
    loop {
        cursor.skip_whitespace();
        if cursor.is_at_end() {
            return Some(tokens);
        }
        if cursor.peek().is_some_and(|c| c.is_ascii_digit()) {
            let digits = cursor.take_while(|c| c.is_ascii_digit());
            tokens.push(Token::word(digits));
            cursor.skip_whitespace();
            let name = cursor.take_while(|c| !c.is_whitespace() && c != ',');
            if !name.is_empty() {
                tokens.push(Token::word(name));
            }
        } else {
            let word = cursor.take_while(|c| !c.is_whitespace() && c != ',');
            if !word.is_empty() {
                tokens.push(Token::word(word));
            }
        }
        cursor.skip_whitespace();
        if cursor.peek() == Some(',') {
            cursor.bump();
            tokens.push(Token::Comma);
        }
    }
}
