use serde::{Deserialize, Serialize};

use crate::constants::{KOREAN_NON_FINAL_WORDS, KOREAN_QUOTATIVES, KOREAN_SENTENCE_ENDINGS};
use crate::text::{
    boundaries_to_strings, has_nieun_batchim, is_closing_punct, is_hangul_syllable,
    is_terminal_punct, spans_to_boundaries, trim_byte_span,
};
use crate::types::SentenceBoundary;

/// Options for [`KoreanSentenceSplitter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KoreanSentenceOptions {
    /// Split after an eojeol ending in a sentence-final ending (`다`, `요`,
    /// `죠`) even when no punctuation follows.
    pub split_on_endings: bool,
    /// Treat every line break as a sentence boundary.
    pub split_on_newlines: bool,
}

impl Default for KoreanSentenceOptions {
    fn default() -> Self {
        Self {
            split_on_endings: true,
            split_on_newlines: true,
        }
    }
}

impl KoreanSentenceOptions {
    /// Sets [`Self::split_on_endings`].
    pub fn with_split_on_endings(mut self, split_on_endings: bool) -> Self {
        self.split_on_endings = split_on_endings;
        self
    }

    /// Sets [`Self::split_on_newlines`].
    pub fn with_split_on_newlines(mut self, split_on_newlines: bool) -> Self {
        self.split_on_newlines = split_on_newlines;
        self
    }
}

/// Rule-based Korean sentence splitter.
#[derive(Debug, Clone, Copy, Default)]
pub struct KoreanSentenceSplitter {
    options: KoreanSentenceOptions,
}

impl KoreanSentenceSplitter {
    /// Creates a splitter with explicit options.
    pub fn new(options: KoreanSentenceOptions) -> Self {
        Self { options }
    }

    /// Options in effect.
    pub fn options(&self) -> KoreanSentenceOptions {
        self.options
    }

    /// Sentence boundaries in character offsets.
    pub fn bounds(&self, text: &str) -> Vec<SentenceBoundary> {
        spans_to_boundaries(text, &self.byte_spans(text))
    }

    /// Splits `text` into trimmed sentences.
    pub fn split(&self, text: &str) -> Vec<String> {
        boundaries_to_strings(text, &self.bounds(text))
    }

    pub(crate) fn byte_spans(&self, text: &str) -> Vec<(usize, usize)> {
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let byte_at = |index: usize| chars.get(index).map(|(pos, _)| *pos).unwrap_or(text.len());

        let mut spans = Vec::new();
        let mut start = 0usize;
        let mut word_start = 0usize;
        let mut index = 0usize;

        while index < chars.len() {
            let (pos, ch) = chars[index];
            let mut cut = None;

            if ch == '\n' && self.options.split_on_newlines {
                cut = Some(pos);
                index += 1;
            } else if is_terminal_punct(ch) && !is_decimal_point(&chars, index) {
                let mut end = index + 1;
                let mut closed_quote = false;
                while end < chars.len()
                    && (is_terminal_punct(chars[end].1) || is_closing_punct(chars[end].1))
                {
                    closed_quote |= is_closing_punct(chars[end].1);
                    end += 1;
                }
                let next = chars.get(end).map(|(_, next)| *next);
                let at_break = match next {
                    None => true,
                    Some(next) => next.is_whitespace() || is_hangul_syllable(next),
                };
                if at_break && !(closed_quote && starts_with_quotative(&text[byte_at(end)..])) {
                    cut = Some(byte_at(end));
                }
                index = end;
            } else if ch.is_whitespace() {
                if self.options.split_on_endings
                    && ends_sentence(&chars[word_start..index])
                    && next_word_is_hangul(&chars[index..])
                {
                    cut = Some(pos);
                }
                index += 1;
            } else {
                index += 1;
            }

            if index > 0 && chars[index - 1].1.is_whitespace() {
                word_start = index;
            }

            if let Some(cut) = cut {
                if let Some(span) = trim_byte_span(text, start, cut) {
                    spans.push(span);
                }
                start = cut;
                word_start = index;
            }
        }

        if let Some(span) = trim_byte_span(text, start, text.len()) {
            spans.push(span);
        }
        spans
    }
}

fn is_decimal_point(chars: &[(usize, char)], index: usize) -> bool {
    chars[index].1 == '.'
        && index > 0
        && chars[index - 1].1.is_ascii_digit()
        && chars.get(index + 1).is_some_and(|(_, next)| next.is_ascii_digit())
}

/// Whether the eojeol in `word` closes a sentence by its ending alone.
fn ends_sentence(word: &[(usize, char)]) -> bool {
    let syllables: Vec<char> = word.iter().map(|(_, ch)| *ch).collect();
    let [.., before, last] = syllables[..] else {
        return false;
    };
    if !syllables.iter().all(|ch| is_hangul_syllable(*ch)) {
        return false;
    }
    let word: String = syllables.iter().collect();
    if KOREAN_NON_FINAL_WORDS.contains(&word.as_str()) {
        return false;
    }
    KOREAN_SENTENCE_ENDINGS
        .iter()
        .filter(|(ending, _)| *ending == last)
        .any(|(ending, preceding)| {
            preceding.is_empty()
                || preceding.contains(&before)
                || (*ending == '다' && has_nieun_batchim(before))
        })
}

fn next_word_is_hangul(rest: &[(usize, char)]) -> bool {
    rest.iter()
        .map(|(_, ch)| *ch)
        .find(|ch| !ch.is_whitespace())
        .is_some_and(is_hangul_syllable)
}

fn starts_with_quotative(rest: &str) -> bool {
    let word = rest.trim_start().split(char::is_whitespace).next().unwrap_or("");
    KOREAN_QUOTATIVES
        .iter()
        .any(|quotative| word.starts_with(quotative))
}
