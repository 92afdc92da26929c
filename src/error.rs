use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Raised when constructing a tokenizer for a format name that is not
    /// `text`, `latex` or `man`.
    #[error("Unknown parse format: {0}")]
    UnknownFormat(String),

    /// A line holds a character the dictionary's working encoding cannot represent.
    #[error("Failed to convert {character:?} to {encoding} encoding")]
    EncodingConversion { encoding: String, character: char },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Dictionary error: {0}")]
    Dictionary(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type InternalResult<T> = Result<T, Error>;

impl Error {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config(message.into())
    }

    pub fn dictionary<S: Into<String>>(message: S) -> Self {
        Error::Dictionary(message.into())
    }
}
