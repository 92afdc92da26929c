pub mod alphabet;
pub mod check;
pub mod config;
pub mod error;
pub mod speller;
pub mod tokenizer;

// Re-exports
pub use alphabet::Alphabet;
pub use check::Checker;
pub use config::{HyphenPolicy, TokenizerConfig};
pub use error::*;
pub use speller::{Encoding, Speller, WordList};
pub use tokenizer::{
    token::{Format, Token},
    tokenizer::{Classifier, Tokenizer, Tokens},
};
