//! Character/byte offset helpers and character classes shared by the splitters.

use crate::types::SentenceBoundary;

pub(crate) fn byte_to_char_index(text: &str, byte_index: usize) -> usize {
    if byte_index >= text.len() {
        return text.chars().count();
    }
    let mut boundary = byte_index;
    while boundary > 0 && !text.is_char_boundary(boundary) {
        boundary -= 1;
    }
    text[..boundary].chars().count()
}

pub(crate) fn build_char_to_byte_map(text: &str) -> Vec<usize> {
    let mut map = Vec::with_capacity(text.chars().count() + 1);
    for (index, _) in text.char_indices() {
        map.push(index);
    }
    map.push(text.len());
    map
}

pub(crate) fn slice_char_range<'a>(text: &'a str, map: &[usize], begin: usize, end: usize) -> &'a str {
    let max = map.len().saturating_sub(1);
    let safe_begin = begin.min(max);
    let safe_end = end.min(max).max(safe_begin);
    &text[map[safe_begin]..map[safe_end]]
}

/// Shrinks a byte span to exclude surrounding whitespace. Returns `None` when
/// nothing but whitespace is left.
pub(crate) fn trim_byte_span(text: &str, start: usize, end: usize) -> Option<(usize, usize)> {
    let piece = &text[start..end];
    let leading = piece.len() - piece.trim_start().len();
    let trailing = piece.len() - piece.trim_end().len();
    if leading + trailing >= piece.len() {
        return None;
    }
    Some((start + leading, end - trailing))
}

/// Converts trimmed byte spans into character-offset boundaries.
pub(crate) fn spans_to_boundaries(text: &str, spans: &[(usize, usize)]) -> Vec<SentenceBoundary> {
    spans
        .iter()
        .map(|&(start, end)| SentenceBoundary {
            begin: byte_to_char_index(text, start),
            end: byte_to_char_index(text, end),
        })
        .collect()
}

/// Materializes boundaries back into owned sentence strings.
pub(crate) fn boundaries_to_strings(text: &str, boundaries: &[SentenceBoundary]) -> Vec<String> {
    let map = build_char_to_byte_map(text);
    boundaries
        .iter()
        .map(|boundary| slice_char_range(text, &map, boundary.begin, boundary.end).to_string())
        .collect()
}

pub(crate) fn is_hangul_syllable(ch: char) -> bool {
    ('\u{AC00}'..='\u{D7A3}').contains(&ch)
}

/// Whether a Hangul syllable carries a final consonant (batchim).
pub(crate) fn has_batchim(ch: char) -> bool {
    is_hangul_syllable(ch) && (ch as u32 - 0xAC00) % 28 != 0
}

/// Whether a Hangul syllable ends in ㄴ (`한`, `된`, `간`).
pub(crate) fn has_nieun_batchim(ch: char) -> bool {
    is_hangul_syllable(ch) && (ch as u32 - 0xAC00) % 28 == 4
}

pub(crate) fn is_terminal_punct(ch: char) -> bool {
    matches!(ch, '.' | '?' | '!' | '…' | '。' | '？' | '！')
}

pub(crate) fn is_closing_punct(ch: char) -> bool {
    matches!(
        ch,
        '"' | '\'' | ')' | ']' | '}' | '”' | '’' | '」' | '』' | '》' | '〉' | '）' | '»'
    )
}
