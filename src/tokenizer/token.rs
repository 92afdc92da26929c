use nom::{error::VerboseError, IResult};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::Error;

/// A word extracted from a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    /// Byte offset of the first character of the word in the line.
    pub start: usize,
}

impl Token {
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl From<Token> for String {
    fn from(token: Token) -> Self {
        token.text
    }
}

impl PartialEq<&str> for Token {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// Markup dialect of the text being tokenized.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
pub enum Format {
    #[strum(serialize = "text")]
    #[serde(rename = "text")]
    PlainText,
    #[strum(serialize = "latex")]
    #[serde(rename = "latex")]
    Latex,
    #[strum(serialize = "man")]
    #[serde(rename = "man")]
    Man,
}

impl Format {
    pub fn from_name(name: &str) -> Result<Self, Error> {
        name.parse().map_err(|_| Error::UnknownFormat(name.to_string()))
    }
}

/// What a classifier step decided about the input it consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// The character belongs to the current word.
    Word(char),
    /// Ends the current word; the consumed input is dropped.
    Boundary,
    /// Zero-width markup: dropped without ending the word.
    Skip,
}

pub type ParserResult<'a, T> = IResult<&'a str, T, VerboseError<&'a str>>;
