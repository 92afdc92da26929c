//! # Alphabet
//!
//! The set of code points that may appear inside a word. It is handed out by
//! the dictionary and only ever read by the tokenizers, so a single alphabet
//! can back any number of tokenizing sessions, on any number of threads.

use std::collections::HashSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Alphabet {
    chars: HashSet<char>,
    letters: bool,
}

impl Alphabet {
    /// Every Unicode alphabetic code point is a word character.
    pub fn letters() -> Self {
        Self {
            chars: HashSet::new(),
            letters: true,
        }
    }

    /// Unicode letters plus the dictionary's extra word characters
    /// (digits, for instance).
    pub fn with_word_chars<I: IntoIterator<Item = char>>(word_chars: I) -> Self {
        Self {
            chars: word_chars.into_iter().collect(),
            letters: true,
        }
    }

    /// Only the given code points are word characters.
    pub fn exact<I: IntoIterator<Item = char>>(chars: I) -> Self {
        Self {
            chars: chars.into_iter().collect(),
            letters: false,
        }
    }

    pub fn contains(&self, c: char) -> bool {
        (self.letters && c.is_alphabetic()) || self.chars.contains(&c)
    }

    /// The explicitly listed word characters, sorted.
    pub fn word_characters(&self) -> Vec<char> {
        let mut chars: Vec<char> = self.chars.iter().copied().collect();
        chars.sort_unstable();
        chars
    }
}

impl FromIterator<char> for Alphabet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self::exact(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters() {
        let alphabet = Alphabet::letters();
        for c in ['a', 'Z', 'é', 'ß', 'я', 'λ'] {
            assert!(alphabet.contains(c), "{c} should be a word character");
        }
        for c in ['1', '-', '\'', ' ', '\\'] {
            assert!(!alphabet.contains(c), "{c} should not be a word character");
        }
    }

    #[test]
    fn test_with_word_chars() {
        let alphabet = Alphabet::with_word_chars("0123456789".chars());
        assert!(alphabet.contains('7'));
        assert!(alphabet.contains('q'));
        assert!(!alphabet.contains('_'));
        assert_eq!(alphabet.word_characters().len(), 10);
    }

    #[test]
    fn test_exact() {
        let alphabet: Alphabet = "abc".chars().collect();
        assert!(alphabet.contains('b'));
        assert!(!alphabet.contains('d'));
        assert!(!alphabet.contains('é'));
        assert_eq!(alphabet.word_characters(), vec!['a', 'b', 'c']);
    }
}
