use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::english::{EnglishSentenceSplitter, EnglishWordTokenizer};
use crate::error::{Result, TokenizeError};
use crate::korean::{self, KoreanSentenceSplitter, MorphemeAnalyzer, MorphemeOptions};
use crate::types::{Language, Morpheme};

/// Two-branch tokenization contract.
///
/// Implementors provide the Korean branch and may provide the English one.
/// [`Tokenizer::tokenize`] dispatches on a [`Language`] flag.
///
/// ```
/// use bitok::{Language, Tokenizer, WordTokenizer};
///
/// let words = WordTokenizer::new().tokenize("Hello, world!", Language::English)?;
/// assert_eq!(words, ["Hello", ",", "world", "!"]);
/// # Ok::<(), bitok::TokenizeError>(())
/// ```
pub trait Tokenizer {
    /// Short name used in errors and logs.
    fn name(&self) -> &'static str;

    /// Tokenizes Korean text.
    fn ko_tokenize(&self, text: &str) -> Result<Vec<String>>;

    /// Tokenizes English text.
    ///
    /// Tokenizers without an English branch yield no tokens and report
    /// [`TokenizeError::Unsupported`].
    fn en_tokenize(&self, _text: &str) -> Result<Vec<String>> {
        Err(TokenizeError::Unsupported {
            tokenizer: self.name(),
            language: Language::English,
        })
    }

    /// Runs the branch selected by `language`.
    fn tokenize(&self, text: &str, language: Language) -> Result<Vec<String>> {
        tracing::trace!(tokenizer = self.name(), %language, bytes = text.len(), "tokenize");
        match language {
            Language::English => self.en_tokenize(text),
            Language::Korean => self.ko_tokenize(text),
        }
    }

    /// Runs the default (English) branch.
    fn tokenize_default(&self, text: &str) -> Result<Vec<String>> {
        self.tokenize(text, Language::English)
    }
}

/// Which of the three tokenizers to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenizerKind {
    /// [`WordTokenizer`].
    #[default]
    Word,
    /// [`SentenceTokenizer`].
    Sentence,
    /// [`MorphemeTokenizer`].
    Morpheme,
}

impl fmt::Display for TokenizerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TokenizerKind::Word => "word",
            TokenizerKind::Sentence => "sentence",
            TokenizerKind::Morpheme => "morpheme",
        })
    }
}

impl FromStr for TokenizerKind {
    type Err = TokenizeError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "word" | "words" => Ok(TokenizerKind::Word),
            "sentence" | "sentences" | "sent" => Ok(TokenizerKind::Sentence),
            "morpheme" | "morphemes" | "morph" | "morphs" => Ok(TokenizerKind::Morpheme),
            other => Err(TokenizeError::InvalidArgument(format!(
                "unknown tokenizer kind `{other}` (expected word, sentence or morpheme)"
            ))),
        }
    }
}

/// Word tokenizer: whitespace eojeols for Korean, Treebank words for English.
#[derive(Debug, Clone, Default)]
pub struct WordTokenizer {
    english: EnglishWordTokenizer,
}

impl WordTokenizer {
    /// Creates a tokenizer with the default English abbreviation list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `sentences` for the English sentence pre-split.
    pub fn with_sentence_splitter(sentences: EnglishSentenceSplitter) -> Self {
        Self {
            english: EnglishWordTokenizer::with_sentence_splitter(sentences),
        }
    }
}

impl Tokenizer for WordTokenizer {
    fn name(&self) -> &'static str {
        "word"
    }

    fn ko_tokenize(&self, text: &str) -> Result<Vec<String>> {
        Ok(korean::split_words(text))
    }

    fn en_tokenize(&self, text: &str) -> Result<Vec<String>> {
        self.english.tokenize(text)
    }
}

/// Sentence tokenizer for both languages.
#[derive(Debug, Clone, Default)]
pub struct SentenceTokenizer {
    english: EnglishSentenceSplitter,
    korean: KoreanSentenceSplitter,
}

impl SentenceTokenizer {
    /// Creates a tokenizer with default splitter settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a tokenizer from explicit splitters.
    pub fn with_splitters(english: EnglishSentenceSplitter, korean: KoreanSentenceSplitter) -> Self {
        Self { english, korean }
    }
}

impl Tokenizer for SentenceTokenizer {
    fn name(&self) -> &'static str {
        "sentence"
    }

    fn ko_tokenize(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.korean.split(text))
    }

    fn en_tokenize(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.english.split(text))
    }
}

/// Korean morpheme tokenizer. It has no English branch.
#[derive(Debug, Default)]
pub struct MorphemeTokenizer {
    analyzer: MorphemeAnalyzer,
}

impl MorphemeTokenizer {
    /// Creates a tokenizer on the dictionary-free rules backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a tokenizer on the backend selected by `options`.
    pub fn with_options(options: MorphemeOptions) -> Result<Self> {
        let analyzer = MorphemeAnalyzer::new(options)?;
        tracing::debug!(backend = ?analyzer.backend(), "morpheme tokenizer ready");
        Ok(Self { analyzer })
    }

    /// Morphemes of Korean `text` with their tags.
    pub fn pos(&self, text: &str) -> Result<Vec<Morpheme>> {
        self.analyzer.pos(text)
    }

    /// Underlying analyzer.
    pub fn analyzer(&self) -> &MorphemeAnalyzer {
        &self.analyzer
    }
}

impl Tokenizer for MorphemeTokenizer {
    fn name(&self) -> &'static str {
        "morpheme"
    }

    fn ko_tokenize(&self, text: &str) -> Result<Vec<String>> {
        self.analyzer.morphs(text)
    }
}

#[cfg(test)]
mod tokenizer_tests {
    use super::{MorphemeTokenizer, SentenceTokenizer, Tokenizer, TokenizerKind, WordTokenizer};
    use crate::error::TokenizeError;
    use crate::types::Language;

    #[test]
    fn word_tokenizer_dispatches_by_language() {
        let tokenizer = WordTokenizer::new();
        assert_eq!(
            tokenizer.tokenize("나는 학교에 간다.", Language::Korean).unwrap(),
            vec!["나는", "학교에", "간다."]
        );
        assert_eq!(
            tokenizer.tokenize("I go to school.", Language::English).unwrap(),
            vec!["I", "go", "to", "school", "."]
        );
    }

    #[test]
    fn default_branch_is_english() {
        let tokenizer = SentenceTokenizer::new();
        assert_eq!(
            tokenizer.tokenize_default("One. Two.").unwrap(),
            tokenizer.en_tokenize("One. Two.").unwrap()
        );
    }

    #[test]
    fn morpheme_tokenizer_has_no_english_branch() {
        let tokenizer = MorphemeTokenizer::new();
        let error = tokenizer.tokenize_default("some text").unwrap_err();
        assert!(matches!(
            error,
            TokenizeError::Unsupported {
                tokenizer: "morpheme",
                language: Language::English,
            }
        ));
        assert_eq!(
            tokenizer.ko_tokenize("나는 학생이다").unwrap(),
            vec!["나", "는", "학생", "이다"]
        );
    }

    #[test]
    fn kind_round_trips_through_strings() {
        for kind in [TokenizerKind::Word, TokenizerKind::Sentence, TokenizerKind::Morpheme] {
            assert_eq!(kind.to_string().parse::<TokenizerKind>().unwrap(), kind);
        }
        assert_eq!("morphs".parse::<TokenizerKind>().unwrap(), TokenizerKind::Morpheme);
        assert!("char".parse::<TokenizerKind>().is_err());
    }

    #[test]
    fn tokenizers_are_object_safe() {
        let tokenizers: Vec<Box<dyn Tokenizer>> = vec![
            Box::new(WordTokenizer::new()),
            Box::new(SentenceTokenizer::new()),
            Box::new(MorphemeTokenizer::new()),
        ];
        let names: Vec<&str> = tokenizers.iter().map(|t| t.name()).collect();
        assert_eq!(names, vec!["word", "sentence", "morpheme"]);
    }
}
