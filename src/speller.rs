//! # Speller Interface
//!
//! The tokenizers only need three things from a dictionary: its alphabet,
//! a yes/no answer for a word, and a way to bring a line into the encoding
//! the dictionary works in. [`Speller`] captures exactly that; [`WordList`]
//! is a plain word-list implementation of it.

use std::{
    borrow::Cow,
    collections::HashSet,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use strum_macros::{Display, EnumString};

use crate::{alphabet::Alphabet, Error, InternalResult};

/// Working encoding of a dictionary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
pub enum Encoding {
    #[default]
    #[strum(serialize = "UTF-8")]
    Utf8,
    /// An 8-bit dictionary: only code points up to U+00FF can be checked.
    #[strum(serialize = "ISO8859-1")]
    Latin1,
}

impl Encoding {
    /// Fails on the first character this encoding cannot represent.
    pub fn check(self, line: &str) -> InternalResult<()> {
        let unrepresentable = match self {
            Encoding::Utf8 => None,
            Encoding::Latin1 => line.chars().find(|c| u32::from(*c) > 0xFF),
        };
        match unrepresentable {
            Some(character) => Err(Error::EncodingConversion {
                encoding: self.to_string(),
                character,
            }),
            None => Ok(()),
        }
    }
}

pub trait Speller {
    fn alphabet(&self) -> &Alphabet;

    fn spell(&self, word: &str) -> bool;

    fn is_word_character(&self, c: char) -> bool {
        self.alphabet().contains(c)
    }

    fn word_characters(&self) -> Vec<char> {
        self.alphabet().word_characters()
    }

    fn encoding(&self) -> Encoding {
        Encoding::Utf8
    }

    /// Brings a line into a form the dictionary can check. Lines that cannot
    /// be represented are rejected with [`Error::EncodingConversion`].
    fn normalize<'t>(&self, line: &'t str) -> InternalResult<Cow<'t, str>> {
        self.encoding().check(line)?;
        Ok(Cow::Borrowed(line))
    }
}

/// A dictionary that is just a set of accepted words.
///
/// Capitalized and all-caps spellings of listed words are accepted, and a
/// hyphenated compound is accepted when each of its parts is.
#[derive(Debug, Clone)]
pub struct WordList {
    words: HashSet<String>,
    alphabet: Alphabet,
    encoding: Encoding,
    break_hyphens: bool,
}

impl WordList {
    pub fn new(alphabet: Alphabet) -> Self {
        Self {
            words: HashSet::new(),
            alphabet,
            encoding: Encoding::default(),
            break_hyphens: true,
        }
    }

    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn with_hyphen_breaking(mut self, enabled: bool) -> Self {
        self.break_hyphens = enabled;
        self
    }

    /// Reads a word list, one word per line. Hunspell `.dic` files work too:
    /// a leading word count is skipped, as are affix flags after `/` and
    /// morphological fields after whitespace.
    pub fn from_reader<R: BufRead>(reader: R, alphabet: Alphabet) -> InternalResult<Self> {
        let mut list = Self::new(alphabet);
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if index == 0 && !line.is_empty() && line.chars().all(|c| c.is_ascii_digit()) {
                continue;
            }
            let entry = line.split_whitespace().next().unwrap_or("");
            let word = entry.split('/').next().unwrap_or("");
            if !word.is_empty() {
                list.add_word(word);
            }
        }
        tracing::debug!(words = list.len(), "loaded word list");
        Ok(list)
    }

    pub fn from_file<P: AsRef<Path>>(path: P, alphabet: Alphabet) -> InternalResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            Error::dictionary(format!("Failed to open {}: {}", path.display(), e))
        })?;
        Self::from_reader(BufReader::new(file), alphabet)
    }

    pub fn add_word(&mut self, word: &str) {
        self.words.insert(word.to_string());
    }

    /// Adds words to accept, such as a list of terms to ignore.
    pub fn add_words<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.add_word(word.as_ref());
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    fn lookup(&self, word: &str) -> bool {
        if self.words.contains(word) {
            return true;
        }
        let mut chars = word.chars();
        let Some(first) = chars.next() else {
            return false;
        };
        if !first.is_uppercase() {
            return false;
        }
        let lower = word.to_lowercase();
        if self.words.contains(&lower) {
            return true;
        }
        // "PARIS" for a listed "Paris".
        if chars.all(|c| !c.is_lowercase()) {
            let title = first.to_string() + &word[first.len_utf8()..].to_lowercase();
            return self.words.contains(&title);
        }
        false
    }
}

impl Speller for WordList {
    fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    fn spell(&self, word: &str) -> bool {
        if self.lookup(word) {
            return true;
        }
        self.break_hyphens
            && word.contains('-')
            && word
                .split('-')
                .all(|part| !part.is_empty() && self.lookup(part))
    }

    fn encoding(&self) -> Encoding {
        self.encoding
    }
}
