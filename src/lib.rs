#![deny(missing_docs)]

//! Word, sentence and morpheme tokenization for English and Korean text.
//!
//! Every tokenizer implements [`Tokenizer`], a two-branch contract: a Korean
//! branch that every tokenizer has and an English branch that some do. The
//! [`Language`] flag passed to [`Tokenizer::tokenize`] picks the branch.
//!
//! ## Quick Start
//! ```
//! use bitok::{Language, SentenceTokenizer, Tokenizer, Vocabulary, WordTokenizer};
//!
//! fn main() -> Result<(), bitok::TokenizeError> {
//!     let text = "The analyzer splits text. Each method has a job.";
//!
//!     let sentences = SentenceTokenizer::new().tokenize(text, Language::English)?;
//!     assert_eq!(sentences.len(), 2);
//!
//!     let words = WordTokenizer::new().tokenize_default(text)?;
//!     let vocab = Vocabulary::from_tokens(&words);
//!     assert_eq!(vocab.count("."), 2);
//!     Ok(())
//! }
//! ```
//!
//! ## Backends
//! | Tokenizer | English | Korean |
//! |-----------|---------|--------|
//! | [`WordTokenizer`] | Treebank rules per sentence | whitespace eojeols |
//! | [`SentenceTokenizer`] | UAX #29 bounds, abbreviation aware | punctuation and ending rules |
//! | [`MorphemeTokenizer`] | unsupported | particle rules, or mecab-ko-dic with the `ko-dic` feature |
//!
//! ## Configuration
//! [`TokenizerConfig`] gathers splitter and analyzer options, reads TOML and
//! takes defaults from these environment variables:
//! - `BITOK_LANGUAGE`: default branch (`en` or `ko`).
//! - `BITOK_MORPHEME_BACKEND`: `rules` or `dictionary`.
//! - `BITOK_SPLIT_ON_ENDINGS`: `true`/`false` for Korean ending-based splits.
//!
//! ## Offsets
//! [`SentenceBoundary`] offsets are character indices (based on
//! `str.chars()`), not byte indices.

mod config;
mod constants;
pub mod english;
mod error;
pub mod korean;
mod stopwords;
mod text;
mod tokenizer;
mod types;
mod vocab;

pub use config::TokenizerConfig;
pub use constants::*;
pub use error::{Result, TokenizeError};
pub use korean::{KoreanSentenceOptions, MorphemeAnalyzer, MorphemeOptions};
pub use stopwords::StopWords;
pub use tokenizer::{MorphemeTokenizer, SentenceTokenizer, Tokenizer, TokenizerKind, WordTokenizer};
pub use types::{Language, Morpheme, MorphemeBackend, MorphemeMode, SentenceBoundary};
pub use vocab::Vocabulary;

#[cfg(test)]
mod test_support;

#[cfg(test)]
mod tests;
