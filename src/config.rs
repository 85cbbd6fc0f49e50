use std::env;
use std::fmt::Display;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{
    BITOK_LANGUAGE_ENV, BITOK_MORPHEME_BACKEND_ENV, BITOK_SPLIT_ON_ENDINGS_ENV,
};
use crate::english::EnglishSentenceSplitter;
use crate::error::{Result, TokenizeError};
use crate::korean::{KoreanSentenceOptions, KoreanSentenceSplitter, MorphemeOptions};
use crate::tokenizer::{MorphemeTokenizer, SentenceTokenizer, Tokenizer, TokenizerKind, WordTokenizer};
use crate::types::{Language, MorphemeBackend};

/// Settings shared by every tokenizer.
///
/// Defaults honor `BITOK_LANGUAGE`, `BITOK_MORPHEME_BACKEND` and
/// `BITOK_SPLIT_ON_ENDINGS`. Fields present in a TOML file take precedence
/// over those defaults.
///
/// ```toml
/// language = "ko"
/// abbreviations = ["Blvd", "Ave"]
///
/// [korean_sentences]
/// split_on_endings = false
///
/// [morphemes]
/// backend = "dictionary"
/// mode = "decompose"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerConfig {
    /// Branch used when the caller does not pass a language.
    pub language: Language,
    /// Extra English abbreviations that do not end a sentence.
    pub abbreviations: Vec<String>,
    /// Korean sentence splitter options.
    pub korean_sentences: KoreanSentenceOptions,
    /// Korean morpheme analyzer options.
    pub morphemes: MorphemeOptions,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        let mut korean_sentences = KoreanSentenceOptions::default();
        if let Some(split_on_endings) = env_value::<bool>(BITOK_SPLIT_ON_ENDINGS_ENV) {
            korean_sentences.split_on_endings = split_on_endings;
        }

        Self {
            language: env_value(BITOK_LANGUAGE_ENV).unwrap_or_default(),
            abbreviations: Vec::new(),
            korean_sentences,
            morphemes: MorphemeOptions {
                backend: env_value(BITOK_MORPHEME_BACKEND_ENV).unwrap_or_default(),
                ..MorphemeOptions::default()
            },
        }
    }
}

fn env_value<T>(key: &str) -> Option<T>
where
    T: FromStr,
    T::Err: Display,
{
    let raw = env::var(key).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(error) => {
            tracing::warn!(key, value = %raw, %error, "ignoring invalid environment value");
            None
        }
    }
}

impl TokenizerConfig {
    /// Parses a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Reads and parses a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&source)?;
        tracing::debug!(path = %path.display(), "loaded tokenizer config");
        Ok(config)
    }

    /// Sets [`Self::language`].
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Sets [`Self::korean_sentences`].
    pub fn with_korean_sentences(mut self, options: KoreanSentenceOptions) -> Self {
        self.korean_sentences = options;
        self
    }

    /// Sets [`Self::morphemes`].
    pub fn with_morphemes(mut self, options: MorphemeOptions) -> Self {
        self.morphemes = options;
        self
    }

    /// Sets the morpheme backend only.
    pub fn with_morpheme_backend(mut self, backend: MorphemeBackend) -> Self {
        self.morphemes.backend = backend;
        self
    }

    /// Appends one English abbreviation.
    pub fn add_abbreviation(mut self, abbreviation: impl Into<String>) -> Self {
        self.abbreviations.push(abbreviation.into());
        self
    }

    /// Rejects entries that can never match.
    pub fn validate(&self) -> Result<()> {
        if let Some(blank) = self
            .abbreviations
            .iter()
            .find(|abbrev| abbrev.trim().trim_end_matches('.').is_empty())
        {
            return Err(TokenizeError::Config(format!(
                "abbreviation `{blank}` is empty"
            )));
        }
        Ok(())
    }

    /// English splitter with the configured abbreviations.
    pub fn english_sentence_splitter(&self) -> EnglishSentenceSplitter {
        EnglishSentenceSplitter::default().with_abbreviations(&self.abbreviations)
    }

    /// Korean splitter with the configured options.
    pub fn korean_sentence_splitter(&self) -> KoreanSentenceSplitter {
        KoreanSentenceSplitter::new(self.korean_sentences)
    }

    /// Builds the tokenizer of `kind` from this configuration.
    pub fn build(&self, kind: TokenizerKind) -> Result<Box<dyn Tokenizer>> {
        self.validate()?;
        tracing::debug!(%kind, language = %self.language, "building tokenizer");
        Ok(match kind {
            TokenizerKind::Word => Box::new(WordTokenizer::with_sentence_splitter(
                self.english_sentence_splitter(),
            )),
            TokenizerKind::Sentence => Box::new(SentenceTokenizer::with_splitters(
                self.english_sentence_splitter(),
                self.korean_sentence_splitter(),
            )),
            TokenizerKind::Morpheme => Box::new(MorphemeTokenizer::with_options(self.morphemes)?),
        })
    }

    /// Builds the tokenizer of `kind` and runs it on the configured language.
    pub fn tokenize(&self, kind: TokenizerKind, text: &str) -> Result<Vec<String>> {
        self.build(kind)?.tokenize(text, self.language)
    }
}
