use super::token::{Action, ParserResult, Token};
use crate::{alphabet::Alphabet, config::HyphenPolicy};

/// Punctuation kept inside a word when it sits between two word characters.
const APOSTROPHES: [char; 2] = ['\'', '\u{2019}'];

/// The line being tokenized and a read position into it.
///
/// The position is a byte offset that always sits on a char boundary.
#[derive(Debug, Clone, Default)]
pub struct LineBuffer {
    text: String,
    position: usize,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
        self.position = 0;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn rest(&self) -> &str {
        &self.text[self.position..]
    }

    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    pub fn next_char(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.position += c.len_utf8();
        Some(c)
    }

    pub fn advance(&mut self, bytes: usize) {
        self.seek(self.position + bytes);
    }

    pub fn seek(&mut self, position: usize) {
        debug_assert!(self.text.is_char_boundary(position.min(self.text.len())));
        self.position = position.min(self.text.len());
    }

    pub fn skip_to_end(&mut self) {
        self.position = self.text.len();
    }

    pub fn is_exhausted(&self) -> bool {
        self.position >= self.text.len()
    }
}

/// Collects the characters of the word being built.
#[derive(Debug, Clone, Default)]
pub struct TokenAccumulator {
    text: String,
    start: usize,
}

impl TokenAccumulator {
    pub fn push(&mut self, c: char, at: usize) {
        if self.text.is_empty() {
            self.start = at;
        }
        self.text.push(c);
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Finalizes the pending word, if there is one.
    pub fn take(&mut self) -> Option<Token> {
        if self.text.is_empty() {
            return None;
        }
        Some(Token {
            text: std::mem::take(&mut self.text),
            start: self.start,
        })
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }
}

/// A classifier's view of the line for a single step.
pub(crate) struct Cursor<'a> {
    line: &'a mut LineBuffer,
    alphabet: &'a Alphabet,
    hyphen: HyphenPolicy,
    in_word: bool,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(
        line: &'a mut LineBuffer,
        alphabet: &'a Alphabet,
        hyphen: HyphenPolicy,
        in_word: bool,
    ) -> Self {
        Self {
            line,
            alphabet,
            hyphen,
            in_word,
        }
    }

    pub(crate) fn next(&mut self) -> Option<char> {
        self.line.next_char()
    }

    pub(crate) fn peek(&self) -> Option<char> {
        self.line.peek()
    }

    pub(crate) fn rest(&self) -> &str {
        self.line.rest()
    }

    pub(crate) fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.line.advance(expected.len_utf8());
            true
        } else {
            false
        }
    }

    pub(crate) fn at_line_start(&self) -> bool {
        self.line.position() == 0
    }

    pub(crate) fn skip_rest(&mut self) {
        self.line.skip_to_end();
    }

    /// Moves past the next occurrence of `needle`. Without one the rest of the
    /// line is dropped and `false` is returned.
    pub(crate) fn skip_past(&mut self, needle: &str) -> bool {
        match self.rest().find(needle) {
            Some(index) => {
                self.line.advance(index + needle.len());
                true
            }
            None => {
                self.skip_rest();
                false
            }
        }
    }

    /// Runs `parser` on the unread input and consumes what it matched.
    /// Nothing is consumed when the parser fails.
    pub(crate) fn consume<O>(
        &mut self,
        mut parser: impl FnMut(&str) -> ParserResult<'_, O>,
    ) -> Option<O> {
        let rest = self.line.rest();
        let (remaining, output) = parser(rest).ok()?;
        let consumed = rest.len() - remaining.len();
        self.line.advance(consumed);
        Some(output)
    }

    pub(crate) fn is_word_char(&self, c: char) -> bool {
        self.alphabet.contains(c)
    }

    /// Plain-text treatment of a consumed character: alphabet members are word
    /// characters, apostrophes (and hyphens unless split) are word characters
    /// only between two word characters, everything else ends the word.
    pub(crate) fn text(&self, c: char) -> Action {
        if self.is_word_char(c) {
            return Action::Word(c);
        }
        let joins = APOSTROPHES.contains(&c) || (c == '-' && self.hyphen == HyphenPolicy::Join);
        if joins && self.in_word && self.peek().is_some_and(|next| self.is_word_char(next)) {
            Action::Word(c)
        } else {
            Action::Boundary
        }
    }
}
