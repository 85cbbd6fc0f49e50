use std::collections::HashSet;

use unicode_segmentation::UnicodeSegmentation;

use crate::constants::{
    ENGLISH_ABBREVIATIONS, ENGLISH_PREFIX_ABBREVIATIONS, ENGLISH_SENTENCE_STARTERS,
};
use crate::text::{
    boundaries_to_strings, is_closing_punct, is_terminal_punct, spans_to_boundaries,
    trim_byte_span,
};
use crate::types::SentenceBoundary;

/// English sentence splitter.
///
/// Candidate boundaries come from Unicode sentence segmentation (UAX #29).
/// A candidate is dropped when the text before it does not end in terminal
/// punctuation (a bare line break) or when the final period belongs to a known
/// abbreviation or a single-letter initial. After an initial or a trailing
/// abbreviation (`etc.`, `Inc.`) the boundary is kept again when the next word
/// is a capitalized sentence starter such as `It` or `The`.
#[derive(Debug, Clone)]
pub struct EnglishSentenceSplitter {
    abbreviations: HashSet<String>,
}

impl Default for EnglishSentenceSplitter {
    fn default() -> Self {
        Self {
            abbreviations: ENGLISH_ABBREVIATIONS
                .iter()
                .map(|abbrev| abbrev.to_string())
                .collect(),
        }
    }
}

impl EnglishSentenceSplitter {
    /// Adds abbreviations on top of the built-in list.
    ///
    /// Entries are matched case-insensitively; a trailing period is ignored.
    pub fn with_abbreviations<I, S>(mut self, abbreviations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for abbrev in abbreviations {
            let normalized = abbrev.as_ref().trim().trim_end_matches('.').to_lowercase();
            if !normalized.is_empty() {
                self.abbreviations.insert(normalized);
            }
        }
        self
    }

    /// Whether `word` (without its trailing period) is a known abbreviation.
    pub fn is_abbreviation(&self, word: &str) -> bool {
        self.abbreviations
            .contains(&word.trim_end_matches('.').to_lowercase())
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
        let mut spans = Vec::new();
        let mut pending: Option<(usize, usize)> = None;

        for (start, piece) in text.split_sentence_bound_indices() {
            let Some((begin, end)) = trim_byte_span(text, start, start + piece.len()) else {
                continue;
            };
            pending = match pending {
                Some((prev_begin, prev_end))
                    if !self.closes_sentence(&text[prev_begin..prev_end], &text[begin..end]) =>
                {
                    Some((prev_begin, end))
                }
                Some(prev) => {
                    spans.push(prev);
                    Some((begin, end))
                }
                None => Some((begin, end)),
            };
        }

        if let Some(last) = pending {
            spans.push(last);
        }
        spans
    }

    fn closes_sentence(&self, sentence: &str, next: &str) -> bool {
        let body = sentence.trim_end_matches(is_closing_punct);
        let Some(last) = body.chars().last() else {
            return false;
        };
        if !is_terminal_punct(last) {
            return false;
        }
        if last != '.' || body.ends_with("..") {
            return true;
        }

        let word = body
            .rsplit(char::is_whitespace)
            .next()
            .unwrap_or(body)
            .trim_start_matches(|ch: char| matches!(ch, '(' | '[' | '"' | '\'' | '“' | '‘'));
        let stem = word.trim_end_matches('.');
        if ENGLISH_PREFIX_ABBREVIATIONS.contains(&stem.to_lowercase().as_str()) {
            return false;
        }

        let mut chars = stem.chars();
        let is_initial =
            matches!((chars.next(), chars.next()), (Some(initial), None) if initial.is_uppercase());
        if is_initial || self.is_abbreviation(stem) {
            return starts_sentence(next);
        }
        true
    }
}

/// Whether `text` opens with a capitalized common sentence starter.
fn starts_sentence(text: &str) -> bool {
    let word = text
        .trim_start_matches(|ch: char| matches!(ch, '(' | '[' | '"' | '\'' | '“' | '‘'))
        .split(|ch: char| !ch.is_alphabetic())
        .next()
        .unwrap_or("");
    word.chars().next().is_some_and(char::is_uppercase)
        && ENGLISH_SENTENCE_STARTERS.contains(&word.to_lowercase().as_str())
}

#[cfg(test)]
mod sentence_tests {
    use super::EnglishSentenceSplitter;
    use crate::types::SentenceBoundary;

    #[test]
    fn splits_on_terminal_punctuation() {
        let splitter = EnglishSentenceSplitter::default();
        let text = "The above example is an example of tokenization attempted with the Okt morpheme analyzer. Each method has the following functions.";
        assert_eq!(
            splitter.split(text),
            vec![
                "The above example is an example of tokenization attempted with the Okt morpheme analyzer.",
                "Each method has the following functions.",
            ]
        );
    }

    #[test]
    fn keeps_abbreviations_and_initials_inside_sentence() {
        let splitter = EnglishSentenceSplitter::default();
        let text = "Mr. Smith met Dr. Jones at 5 p.m. today. J. R. Tolkien wrote books.";
        assert_eq!(
            splitter.split(text),
            vec![
                "Mr. Smith met Dr. Jones at 5 p.m. today.",
                "J. R. Tolkien wrote books.",
            ]
        );
    }

    #[test]
    fn common_words_and_initials_before_a_new_sentence_split() {
        let splitter = EnglishSentenceSplitter::default();
        assert_eq!(
            splitter.split("I said no. She agreed."),
            vec!["I said no.", "She agreed."]
        );
        assert_eq!(
            splitter.split("He works at the co. We met there."),
            vec!["He works at the co.", "We met there."]
        );
        assert_eq!(
            splitter.split("I saw plan B. It failed."),
            vec!["I saw plan B.", "It failed."]
        );
        assert_eq!(
            splitter.split("We bought pens, paper, etc. The shop closed."),
            vec!["We bought pens, paper, etc.", "The shop closed."]
        );
    }

    #[test]
    fn titles_never_end_a_sentence() {
        let splitter = EnglishSentenceSplitter::default();
        assert_eq!(
            splitter.split("Ask Dr. The Vet about it."),
            vec!["Ask Dr. The Vet about it."]
        );
    }

    #[test]
    fn bare_line_breaks_do_not_end_sentences() {
        let splitter = EnglishSentenceSplitter::default();
        assert_eq!(
            splitter.split("a line that wraps\nonto the next one. Done!"),
            vec!["a line that wraps\nonto the next one.", "Done!"]
        );
    }

    #[test]
    fn question_and_exclamation_marks_split() {
        let splitter = EnglishSentenceSplitter::default();
        assert_eq!(
            splitter.split("Is it? Yes! \"Really.\" Sure."),
            vec!["Is it?", "Yes!", "\"Really.\"", "Sure."]
        );
    }

    #[test]
    fn custom_abbreviations_are_honored() {
        let text = "See Approx. Values below. Then stop.";
        let plain = EnglishSentenceSplitter::default().with_abbreviations(["values"]);
        assert_eq!(plain.split(text).len(), 2);

        let extended = EnglishSentenceSplitter::default().with_abbreviations(["Blvd."]);
        assert!(extended.is_abbreviation("blvd"));
        assert!(extended.is_abbreviation("BLVD."));
    }

    #[test]
    fn bounds_are_char_offsets() {
        let splitter = EnglishSentenceSplitter::default();
        let bounds = splitter.bounds("  Hi there.  Bye. ");
        assert_eq!(
            bounds,
            vec![
                SentenceBoundary { begin: 2, end: 11 },
                SentenceBoundary { begin: 13, end: 17 },
            ]
        );
    }

    #[test]
    fn empty_and_blank_text_has_no_sentences() {
        let splitter = EnglishSentenceSplitter::default();
        assert!(splitter.split("").is_empty());
        assert!(splitter.split(" \n\t ").is_empty());
    }
}
