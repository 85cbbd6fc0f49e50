use thiserror::Error;

use crate::types::Language;

/// Error type returned by bitok public APIs.
#[derive(Debug, Error)]
pub enum TokenizeError {
    /// The tokenizer has no branch for the requested language.
    #[error("{tokenizer} tokenizer does not support {language}")]
    Unsupported {
        /// Name of the tokenizer that was asked.
        tokenizer: &'static str,
        /// Language that was requested.
        language: Language,
    },
    /// User-provided arguments were invalid.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// The morphological dictionary could not be loaded or queried.
    #[error("dictionary error: {0}")]
    Dictionary(String),
    /// Configuration values were rejected.
    #[error("config error: {0}")]
    Config(String),
    /// Reading a configuration file failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// A configuration file was not valid TOML for [`crate::TokenizerConfig`].
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TokenizeError>;
