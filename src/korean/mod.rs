//! Korean word, sentence and morpheme segmentation.

mod morpheme;
mod sentence;

pub use morpheme::{
    MorphemeAnalyzer, MorphemeOptions, RULE_TAG_ENDING, RULE_TAG_PARTICLE, RULE_TAG_STEM,
};
pub use sentence::{KoreanSentenceOptions, KoreanSentenceSplitter};

use crate::types::SentenceBoundary;

/// Splits Korean text into eojeols on whitespace.
pub fn split_words(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

/// Splits Korean text into trimmed sentences.
pub fn split_sentences(text: &str, options: KoreanSentenceOptions) -> Vec<String> {
    KoreanSentenceSplitter::new(options).split(text)
}

/// Sentence boundaries (character offsets) of Korean text.
pub fn sentence_bounds(text: &str, options: KoreanSentenceOptions) -> Vec<SentenceBoundary> {
    KoreanSentenceSplitter::new(options).bounds(text)
}
