//! # Tokenizer Component
//!
//! The Tokenizer component pulls the words out of a line of text so that each
//! one can be handed to a spell checker. Lines may be plain text, LaTeX or
//! troff/man source; markup is recognized and dropped instead of being
//! reported as misspelled words.
//!
//! ## Component Structure
//!
//! * [`token`]: [`Token`](token::Token), [`Format`](token::Format) and the classifier actions
//! * [`buffer`]: the line buffer, the word accumulator and the cursor classifiers read through
//! * [`tokenizer`]: the shared token loop and the per-format [`Classifier`](tokenizer::Classifier)
//! * [`plain`], [`latex`], [`man`]: the per-format state machines
//! * [`url`]: detection of URL-shaped runs
//!
//! ## Usage Example
//!
//! ```rust
//! use spellscan::{Alphabet, Format, Tokenizer};
//!
//! let alphabet = Alphabet::letters();
//! let mut tokenizer = Tokenizer::new(Format::Latex, &alphabet);
//! tokenizer.set_line(r"see \cite{knuth84} here % not this");
//!
//! let words: Vec<String> = tokenizer.tokens().map(String::from).collect();
//! assert_eq!(words, vec!["see", "here"]);
//! ```

pub mod buffer;
pub mod latex;
pub mod man;
pub mod plain;
pub mod token;
#[allow(clippy::module_inception)]
pub mod tokenizer;
pub mod url;
