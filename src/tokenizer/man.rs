//! # Man Page Classifier
//!
//! Reads troff/man source. Request lines (`.B`, `'br`) lose their request
//! name; escapes (`\fB`, `\(co`, `\*[X]`, `\s+2`) are dropped without hiding
//! the text around them; `\"` comments and `.ig`/`.de` blocks are skipped.

use nom::{
    branch::alt,
    bytes::complete::{tag, take, take_until, take_while, take_while_m_n},
    character::complete::{anychar, char, one_of, space0},
    combinator::{map, opt, recognize, value},
    error::context,
    sequence::{delimited, pair, preceded},
};

use super::{
    buffer::Cursor,
    token::{Action, ParserResult},
};
use crate::config::ManConfig;

/// Characters that start markup outside of a word.
pub(crate) const MARKUP_CHARACTERS: &str = "\\";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManState {
    Normal,
    Comment,
    /// Body of `.ig`, `.de` and friends, up to a line starting with `..`.
    IgnoreBlock,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Request {
    Comment,
    Named(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Escape {
    Comment,
    Hyphen,
    ZeroWidth,
    Discard,
}

#[derive(Debug, Clone)]
pub struct ManClassifier {
    state: ManState,
    config: ManConfig,
}

impl ManClassifier {
    pub fn new(config: &ManConfig) -> Self {
        Self {
            state: ManState::Normal,
            config: config.clone(),
        }
    }

    pub fn state(&self) -> ManState {
        self.state
    }

    pub(crate) fn reset(&mut self) {
        self.state = ManState::Normal;
    }

    pub(crate) fn end_of_line(&mut self) {
        if self.state == ManState::Comment {
            self.transition(ManState::Normal);
        }
    }

    pub(crate) fn step(&mut self, cursor: &mut Cursor<'_>) -> Option<Action> {
        match self.state {
            ManState::Comment => {
                cursor.skip_rest();
                None
            }
            ManState::IgnoreBlock => {
                if cursor.rest().is_empty() {
                    return None;
                }
                if cursor.at_line_start() && cursor.rest().starts_with("..") {
                    self.transition(ManState::Normal);
                }
                cursor.skip_rest();
                Some(Action::Boundary)
            }
            ManState::Normal => self.normal(cursor),
        }
    }

    fn transition(&mut self, state: ManState) {
        tracing::trace!(from = ?self.state, to = ?state, "man state");
        self.state = state;
    }

    fn normal(&mut self, cursor: &mut Cursor<'_>) -> Option<Action> {
        if cursor.at_line_start() {
            if let Some(request) = cursor.consume(request) {
                return Some(self.request(request, cursor));
            }
        }
        let action = match cursor.next()? {
            '\\' => self.escape(cursor),
            c => cursor.text(c),
        };
        Some(action)
    }

    fn request(&mut self, request: Request, cursor: &mut Cursor<'_>) -> Action {
        match request {
            Request::Comment => self.comment(cursor),
            Request::Named(name) if self.config.block_requests.contains(&name) => {
                self.transition(ManState::IgnoreBlock);
                cursor.skip_rest();
            }
            Request::Named(name) if self.config.non_textual_requests.contains(&name) => {
                self.comment(cursor)
            }
            Request::Named(_) => {}
        }
        Action::Boundary
    }

    fn comment(&mut self, cursor: &mut Cursor<'_>) {
        self.transition(ManState::Comment);
        cursor.skip_rest();
    }

    /// Everything after a backslash.
    fn escape(&mut self, cursor: &mut Cursor<'_>) -> Action {
        match cursor.consume(escape) {
            Some(Escape::Comment) => {
                self.comment(cursor);
                Action::Boundary
            }
            Some(Escape::Hyphen) => cursor.text('-'),
            Some(Escape::ZeroWidth) => Action::Skip,
            Some(Escape::Discard) | None => Action::Boundary,
        }
    }
}

fn request(input: &str) -> ParserResult<Request> {
    context(
        "request",
        preceded(
            pair(one_of(".'"), space0),
            alt((
                value(Request::Comment, tag("\\\"")),
                map(
                    take_while(|c: char| !c.is_whitespace() && c != '\\'),
                    |name: &str| Request::Named(name.to_string()),
                ),
            )),
        ),
    )(input)
}

fn escape(input: &str) -> ParserResult<Escape> {
    context(
        "escape",
        alt((
            value(Escape::Comment, one_of("\"#")),
            value(Escape::Hyphen, char('-')),
            value(Escape::ZeroWidth, one_of("&%|^/,)c")),
            // Fonts, strings, registers, macro arguments.
            value(
                Escape::Discard,
                preceded(one_of("fFgkmMnVY*$"), preceded(opt(one_of("+-")), escape_name)),
            ),
            value(Escape::Discard, preceded(char('s'), size)),
            // Escapes with a quoted argument: \w'…', \h'…', \v'…' and so on.
            value(
                Escape::Discard,
                preceded(one_of("ABCDHLNRSXZbhlovwx"), quoted),
            ),
            // Special glyphs: \(co, \[em].
            value(
                Escape::Discard,
                alt((preceded(char('('), take(2usize)), bracketed)),
            ),
            value(Escape::Discard, anychar),
        )),
    )(input)
}

fn escape_name(input: &str) -> ParserResult<&str> {
    alt((
        bracketed,
        preceded(char('('), take(2usize)),
        recognize(anychar),
    ))(input)
}

fn size(input: &str) -> ParserResult<&str> {
    preceded(
        opt(one_of("+-")),
        alt((
            bracketed,
            quoted,
            preceded(char('('), take(2usize)),
            take_while_m_n(1, 2, |c: char| c.is_ascii_digit()),
        )),
    )(input)
}

fn bracketed(input: &str) -> ParserResult<&str> {
    delimited(char('['), take_until("]"), char(']'))(input)
}

fn quoted(input: &str) -> ParserResult<&str> {
    delimited(char('\''), take_until("'"), char('\''))(input)
}
