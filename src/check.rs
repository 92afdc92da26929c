//! # Checker
//!
//! Runs lines through a [`Tokenizer`] and a [`Speller`]. [`Checker::parse`]
//! returns every word of a line; [`Checker::find`] only the words the speller
//! rejects. One checker carries markup state across the lines of one document.

use crate::{
    config::TokenizerConfig,
    speller::Speller,
    tokenizer::{token::Format, tokenizer::Tokenizer},
    InternalResult,
};

pub struct Checker<'s, S: Speller> {
    speller: &'s S,
    tokenizer: Tokenizer<'s>,
}

impl<'s, S: Speller> Checker<'s, S> {
    pub fn new(speller: &'s S, format: Format) -> Self {
        Self::with_config(speller, format, &TokenizerConfig::default())
    }

    pub fn with_config(speller: &'s S, format: Format, config: &TokenizerConfig) -> Self {
        Self {
            speller,
            tokenizer: Tokenizer::with_config(format, speller.alphabet(), config),
        }
    }

    pub fn from_name(speller: &'s S, name: &str) -> InternalResult<Self> {
        Ok(Self::new(speller, Format::from_name(name)?))
    }

    pub fn tokenizer(&mut self) -> &mut Tokenizer<'s> {
        &mut self.tokenizer
    }

    /// Every word of `text`.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn parse(&mut self, text: &str) -> Vec<String> {
        self.tokenizer
            .tokenize(text)
            .into_iter()
            .map(String::from)
            .collect()
    }

    /// The misspelled words of `text`, the `index`-th line of its document.
    ///
    /// A line the speller cannot represent in its encoding yields no words
    /// and a warning.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn find(&mut self, text: &str, index: usize) -> Vec<String> {
        let line = match self.speller.normalize(text) {
            Ok(line) => line,
            Err(e) => {
                tracing::warn!(
                    "Failed to convert line {} to {} encoding. Try spelling with a UTF8 dictionary.",
                    index + 1,
                    self.speller.encoding()
                );
                tracing::debug!(error = %e, "encoding conversion failed");
                return Vec::new();
            }
        };

        let speller = self.speller;
        self.tokenizer.set_line(&line);
        self.tokenizer
            .tokens()
            .filter(|token| !speller.spell(token.as_str()))
            .map(String::from)
            .collect()
    }

    pub fn parse_lines<I, L>(&mut self, lines: I) -> Vec<Vec<String>>
    where
        I: IntoIterator<Item = L>,
        L: AsRef<str>,
    {
        lines
            .into_iter()
            .map(|line| self.parse(line.as_ref()))
            .collect()
    }

    pub fn find_lines<I, L>(&mut self, lines: I) -> Vec<Vec<String>>
    where
        I: IntoIterator<Item = L>,
        L: AsRef<str>,
    {
        lines
            .into_iter()
            .enumerate()
            .map(|(index, line)| self.find(line.as_ref(), index))
            .collect()
    }
}
