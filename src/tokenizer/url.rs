//! # URL Detection
//!
//! Finds the parts of a line that look like URLs, e-mail addresses or file
//! paths, so the tokenizer can drop them whole instead of spell checking
//! `https`, `example` and `com` one by one.
//!
//! A candidate run starts at a word character or `/` and continues over word
//! characters, digits and the punctuation that shows up in addresses. A run
//! counts as a URL when it matches [`URL_PATTERN`].

use std::ops::Range;

use lazy_static::lazy_static;
use regex::Regex;

use crate::alphabet::Alphabet;

lazy_static! {
    static ref URL_PATTERN: Regex =
        Regex::new(r"://|@|:\\|^/|^www\.|^[^./]+(?:\.[^./]+)+/").unwrap();
}

fn continues_url(alphabet: &Alphabet, c: char) -> bool {
    alphabet.contains(c) || c.is_ascii_digit() || "-_\\.:/~%*$[]?!@=&#+".contains(c)
}

/// Byte ranges of the URL-shaped runs of a line, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlSpans {
    spans: Vec<Range<usize>>,
}

impl UrlSpans {
    /// Runs end early at any of the `markup` characters, so a URL never
    /// swallows the comment or escape that follows it.
    pub fn scan(line: &str, alphabet: &Alphabet, markup: &str) -> Self {
        let mut spans = Vec::new();
        let mut run_start: Option<usize> = None;

        for (index, c) in line.char_indices() {
            match run_start {
                Some(start) if !continues_url(alphabet, c) || markup.contains(c) => {
                    Self::close(line, start..index, &mut spans);
                    run_start = None;
                }
                None if alphabet.contains(c) || c == '/' => run_start = Some(index),
                _ => {}
            }
        }
        if let Some(start) = run_start {
            Self::close(line, start..line.len(), &mut spans);
        }

        Self { spans }
    }

    fn close(line: &str, run: Range<usize>, spans: &mut Vec<Range<usize>>) {
        if URL_PATTERN.is_match(&line[run.clone()]) {
            spans.push(run);
        }
    }

    /// End of the URL covering `position`, if any.
    pub fn end_of(&self, position: usize) -> Option<usize> {
        let index = self.spans.partition_point(|span| span.end <= position);
        self.spans
            .get(index)
            .filter(|span| span.start <= position)
            .map(|span| span.end)
    }

}
