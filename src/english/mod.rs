//! English word and sentence segmentation.

mod sentence;
mod word;

pub use sentence::EnglishSentenceSplitter;
pub use word::EnglishWordTokenizer;

use crate::error::Result;
use crate::types::SentenceBoundary;

/// Splits English text into trimmed sentences with the default abbreviation list.
pub fn split_sentences(text: &str) -> Vec<String> {
    EnglishSentenceSplitter::default().split(text)
}

/// Sentence boundaries (character offsets) with the default abbreviation list.
pub fn sentence_bounds(text: &str) -> Vec<SentenceBoundary> {
    EnglishSentenceSplitter::default().bounds(text)
}

/// Treebank-style word tokenization of English text.
pub fn tokenize_words(text: &str) -> Result<Vec<String>> {
    EnglishWordTokenizer::default().tokenize(text)
}
