use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{
    KOREAN_ANY_PARTICLES, KOREAN_BATCHIM_PARTICLES, KOREAN_OPEN_PARTICLES,
    KOREAN_PREDICATE_ENDINGS,
};
use crate::error::{Result, TokenizeError};
use crate::text::{has_batchim, is_closing_punct, is_hangul_syllable, is_terminal_punct};
use crate::types::{Morpheme, MorphemeBackend, MorphemeMode};

/// Tag given by the rules backend to a Hangul stem.
pub const RULE_TAG_STEM: &str = "N";
/// Tag given by the rules backend to a particle.
pub const RULE_TAG_PARTICLE: &str = "J";
/// Tag given by the rules backend to a copula or `하다` ending.
pub const RULE_TAG_ENDING: &str = "E";

/// Options for [`MorphemeAnalyzer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MorphemeOptions {
    /// Engine producing morphemes.
    pub backend: MorphemeBackend,
    /// Segmentation mode; only the dictionary backend reads it.
    pub mode: MorphemeMode,
}

impl MorphemeOptions {
    /// Sets [`Self::backend`].
    pub fn with_backend(mut self, backend: MorphemeBackend) -> Self {
        self.backend = backend;
        self
    }

    /// Sets [`Self::mode`].
    pub fn with_mode(mut self, mode: MorphemeMode) -> Self {
        self.mode = mode;
        self
    }
}

enum Engine {
    Rules,
    #[cfg(feature = "ko-dic")]
    Dictionary(lindera::tokenizer::Tokenizer),
}

/// Korean morphological analyzer.
///
/// The `Rules` backend splits each eojeol into script runs and strips the
/// longest particle or predicate ending it recognizes. The `Dictionary`
/// backend runs mecab-ko-dic through lindera and needs the `ko-dic` feature.
pub struct MorphemeAnalyzer {
    engine: Engine,
}

impl fmt::Debug for MorphemeAnalyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MorphemeAnalyzer")
            .field("backend", &self.backend())
            .finish()
    }
}

impl Default for MorphemeAnalyzer {
    fn default() -> Self {
        Self::rules()
    }
}

impl MorphemeAnalyzer {
    /// Creates the analyzer selected by `options`.
    pub fn new(options: MorphemeOptions) -> Result<Self> {
        match options.backend {
            MorphemeBackend::Rules => Ok(Self::rules()),
            MorphemeBackend::Dictionary => Self::dictionary(options.mode),
        }
    }

    /// Dictionary-free analyzer.
    pub fn rules() -> Self {
        Self {
            engine: Engine::Rules,
        }
    }

    /// Analyzer backed by the embedded mecab-ko-dic dictionary.
    #[cfg(feature = "ko-dic")]
    pub fn dictionary(mode: MorphemeMode) -> Result<Self> {
        use lindera::dictionary::{load_embedded_dictionary, DictionaryKind};
        use lindera::mode::{Mode, Penalty};
        use lindera::segmenter::Segmenter;
        use lindera::tokenizer::Tokenizer;

        let dictionary = load_embedded_dictionary(DictionaryKind::KoDic)
            .map_err(|error| TokenizeError::Dictionary(error.to_string()))?;
        let mode = match mode {
            MorphemeMode::Normal => Mode::Normal,
            MorphemeMode::Decompose => Mode::Decompose(Penalty::default()),
        };
        let segmenter = Segmenter::new(mode, dictionary, None);
        tracing::debug!("loaded embedded ko-dic dictionary");

        Ok(Self {
            engine: Engine::Dictionary(Tokenizer::new(segmenter)),
        })
    }

    /// Analyzer backed by the embedded mecab-ko-dic dictionary.
    ///
    /// This build has no dictionary; the call always fails.
    #[cfg(not(feature = "ko-dic"))]
    pub fn dictionary(_mode: MorphemeMode) -> Result<Self> {
        Err(TokenizeError::Dictionary(
            "bitok was built without the `ko-dic` feature".to_string(),
        ))
    }

    /// Backend in use.
    pub fn backend(&self) -> MorphemeBackend {
        match self.engine {
            Engine::Rules => MorphemeBackend::Rules,
            #[cfg(feature = "ko-dic")]
            Engine::Dictionary(_) => MorphemeBackend::Dictionary,
        }
    }

    /// Morphemes with their part-of-speech tags.
    pub fn pos(&self, text: &str) -> Result<Vec<Morpheme>> {
        match &self.engine {
            Engine::Rules => Ok(rule_morphemes(text)),
            #[cfg(feature = "ko-dic")]
            Engine::Dictionary(tokenizer) => dictionary_morphemes(tokenizer, text),
        }
    }

    /// Morpheme surface forms only.
    pub fn morphs(&self, text: &str) -> Result<Vec<String>> {
        Ok(self
            .pos(text)?
            .into_iter()
            .map(|morpheme| morpheme.form)
            .collect())
    }
}

#[cfg(feature = "ko-dic")]
fn dictionary_morphemes(
    tokenizer: &lindera::tokenizer::Tokenizer,
    text: &str,
) -> Result<Vec<Morpheme>> {
    let tokens = tokenizer
        .tokenize(text)
        .map_err(|error| TokenizeError::Dictionary(error.to_string()))?;

    let mut out = Vec::with_capacity(tokens.len());
    for mut token in tokens {
        if token.surface.trim().is_empty() {
            continue;
        }
        let tag = token
            .details()
            .first()
            .map(|tag| tag.to_string())
            .unwrap_or_default();
        out.push(Morpheme::new(token.surface.to_string(), tag));
    }
    Ok(out)
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Script {
    Hangul,
    Letter,
    Digit,
    Symbol,
}

fn script_of(ch: char) -> Script {
    if is_hangul_syllable(ch) {
        Script::Hangul
    } else if ch.is_alphabetic() {
        Script::Letter
    } else if ch.is_numeric() {
        Script::Digit
    } else {
        Script::Symbol
    }
}

/// Splits an eojeol into runs of one script. Symbols never group.
fn script_runs(eojeol: &str) -> Vec<(Script, &str)> {
    let mut runs = Vec::new();
    let mut current: Option<(Script, usize)> = None;

    for (index, ch) in eojeol.char_indices() {
        let script = script_of(ch);
        match current {
            Some((prev, _)) if prev == script && script != Script::Symbol => {}
            Some((prev, start)) => {
                runs.push((prev, &eojeol[start..index]));
                current = Some((script, index));
            }
            None => current = Some((script, index)),
        }
    }
    if let Some((script, start)) = current {
        runs.push((script, &eojeol[start..]));
    }
    runs
}

fn symbol_tag(symbol: &str) -> &'static str {
    let Some(ch) = symbol.chars().next() else {
        return "SY";
    };
    if is_terminal_punct(ch) {
        "SF"
    } else if matches!(ch, ',' | '·' | ':' | '/') {
        "SC"
    } else if matches!(ch, '(' | '[' | '{' | '「' | '『' | '《' | '〈' | '“' | '‘' | '（' | '«') {
        "SSO"
    } else if is_closing_punct(ch) && !matches!(ch, '"' | '\'') {
        "SSC"
    } else {
        "SY"
    }
}

/// Longest recognized suffix of a Hangul run whose attachment condition holds
/// for the stem's last syllable.
fn split_suffix(run: &str) -> Option<(&str, &str, &'static str)> {
    let groups: [(&[&str], &'static str, fn(char) -> bool); 4] = [
        (KOREAN_BATCHIM_PARTICLES, RULE_TAG_PARTICLE, has_batchim),
        (KOREAN_OPEN_PARTICLES, RULE_TAG_PARTICLE, |last| !has_batchim(last)),
        (KOREAN_ANY_PARTICLES, RULE_TAG_PARTICLE, |_| true),
        (KOREAN_PREDICATE_ENDINGS, RULE_TAG_ENDING, |_| true),
    ];

    let mut best: Option<(&str, &str, &'static str)> = None;
    for (suffixes, tag, attaches) in groups {
        for suffix in suffixes {
            let Some(stem) = run.strip_suffix(suffix) else {
                continue;
            };
            let Some(last) = stem.chars().last() else {
                continue;
            };
            if !attaches(last) {
                continue;
            }
            if best.map_or(true, |(_, current, _)| suffix.len() > current.len()) {
                best = Some((stem, &run[stem.len()..], tag));
            }
        }
    }
    best
}

fn rule_morphemes(text: &str) -> Vec<Morpheme> {
    let mut out = Vec::new();
    for eojeol in text.split_whitespace() {
        for (script, run) in script_runs(eojeol) {
            match script {
                Script::Hangul => match split_suffix(run) {
                    Some((stem, suffix, tag)) => {
                        out.push(Morpheme::new(stem, RULE_TAG_STEM));
                        out.push(Morpheme::new(suffix, tag));
                    }
                    None => out.push(Morpheme::new(run, RULE_TAG_STEM)),
                },
                Script::Letter => out.push(Morpheme::new(run, "SL")),
                Script::Digit => out.push(Morpheme::new(run, "SN")),
                Script::Symbol => out.push(Morpheme::new(run, symbol_tag(run))),
            }
        }
    }
    out
}
