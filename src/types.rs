use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TokenizeError};

/// Dispatch flag selecting which language branch of a tokenizer runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English text. This is the default branch.
    #[default]
    #[serde(alias = "en")]
    English,
    /// Korean text.
    #[serde(alias = "ko", alias = "kr")]
    Korean,
}

impl Language {
    /// Short ISO 639-1 code.
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Korean => "ko",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::English => f.write_str("english"),
            Language::Korean => f.write_str("korean"),
        }
    }
}

impl FromStr for Language {
    type Err = TokenizeError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "en" | "eng" | "english" => Ok(Language::English),
            "ko" | "kr" | "kor" | "korean" => Ok(Language::Korean),
            other => Err(TokenizeError::InvalidArgument(format!(
                "unknown language `{other}` (expected `en` or `ko`)"
            ))),
        }
    }
}

/// Which engine produces Korean morphemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MorphemeBackend {
    /// Suffix rules over Hangul eojeols. Needs no dictionary.
    #[default]
    Rules,
    /// mecab-ko-dic through lindera. Requires the `ko-dic` feature.
    Dictionary,
}

impl FromStr for MorphemeBackend {
    type Err = TokenizeError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "rules" | "rule" => Ok(MorphemeBackend::Rules),
            "dictionary" | "dict" | "ko-dic" | "mecab" => Ok(MorphemeBackend::Dictionary),
            other => Err(TokenizeError::InvalidArgument(format!(
                "unknown morpheme backend `{other}` (expected `rules` or `dictionary`)"
            ))),
        }
    }
}

/// Segmentation mode for the dictionary backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MorphemeMode {
    /// Lowest-cost path through the lattice.
    #[default]
    Normal,
    /// Penalizes long compound nouns so they are decomposed.
    Decompose,
}

/// A morpheme surface form with its part-of-speech tag.
///
/// Tags follow the mecab-ko-dic tag set (`NNG`, `JKS`, `EF`, ...). The rules
/// backend only distinguishes a few coarse tags; see [`crate::korean`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Morpheme {
    /// Surface form.
    pub form: String,
    /// Part-of-speech tag.
    pub tag: String,
}

impl Morpheme {
    /// Creates a morpheme.
    pub fn new(form: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            form: form.into(),
            tag: tag.into(),
        }
    }
}

/// Begin/end boundary for a sentence in character offsets.
///
/// Offsets are based on Rust `str.chars()` indexing. Leading and trailing
/// whitespace is never part of a boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentenceBoundary {
    /// Inclusive begin offset.
    pub begin: usize,
    /// Exclusive end offset.
    pub end: usize,
}

impl SentenceBoundary {
    /// Number of characters covered.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.begin)
    }

    /// Whether the boundary covers no characters.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod types_tests {
    use super::{Language, MorphemeBackend};

    #[test]
    fn language_parses_codes_and_names() {
        assert_eq!("en".parse::<Language>().unwrap(), Language::English);
        assert_eq!("Korean".parse::<Language>().unwrap(), Language::Korean);
        assert_eq!(" kr ".parse::<Language>().unwrap(), Language::Korean);
        assert!("ja".parse::<Language>().is_err());
    }

    #[test]
    fn language_default_is_english() {
        assert_eq!(Language::default(), Language::English);
        assert_eq!(Language::Korean.code(), "ko");
        assert_eq!(Language::Korean.to_string(), "korean");
    }

    #[test]
    fn backend_parses_aliases() {
        assert_eq!(
            "mecab".parse::<MorphemeBackend>().unwrap(),
            MorphemeBackend::Dictionary
        );
        assert_eq!(
            "rules".parse::<MorphemeBackend>().unwrap(),
            MorphemeBackend::Rules
        );
        assert!("kiwi".parse::<MorphemeBackend>().is_err());
    }
}
