use crate::{
    english, korean, KoreanSentenceOptions, Language, MorphemeTokenizer, SentenceBoundary,
    SentenceTokenizer, StopWords, Tokenizer, Vocabulary, WordTokenizer, ENGLISH_ABBREVIATIONS,
    KOREAN_SENTENCE_ENDINGS,
};

const KO_TEXT: &str = "위의 예제는 Okt 형태소 분석기로 토큰화를 시도해본 예제입니다. 각각의 메소드는 아래와 같은 기능을 갖고 있습니다.";
const EN_TEXT: &str = "The above example is an example of tokenization attempted with the Okt morpheme analyzer. Each method has the following functions.";

#[test]
fn english_demo_sentences() {
    let sentences = SentenceTokenizer::new().tokenize_default(EN_TEXT).unwrap();
    assert_eq!(sentences, english::split_sentences(EN_TEXT));
    assert_eq!(sentences.len(), 2);
    assert!(sentences[1].starts_with("Each method"));
}

#[test]
fn english_demo_words_and_counts() {
    let words = WordTokenizer::new().tokenize_default(EN_TEXT).unwrap();
    assert_eq!(words.len(), 22);
    assert_eq!(words[..3], ["The", "above", "example"]);
    assert_eq!(words.last().map(String::as_str), Some("."));

    let vocab = Vocabulary::from_tokens(&words);
    assert_eq!(
        vocab.most_common(Some(3)),
        vec![("example", 2), ("the", 2), (".", 2)]
    );
    assert_eq!(vocab.count("The"), 1);
}

#[test]
fn korean_demo_branches() {
    let words = WordTokenizer::new().tokenize(KO_TEXT, Language::Korean).unwrap();
    assert_eq!(words, korean::split_words(KO_TEXT));
    assert_eq!(words.len(), 15);

    let sentences = SentenceTokenizer::new()
        .tokenize(KO_TEXT, Language::Korean)
        .unwrap();
    assert_eq!(
        sentences,
        korean::split_sentences(KO_TEXT, KoreanSentenceOptions::default())
    );
    assert_eq!(sentences.len(), 2);

    let morphs = MorphemeTokenizer::new().ko_tokenize("예제는 분석기로").unwrap();
    assert_eq!(morphs, vec!["예제", "는", "분석기", "로"]);
}

#[test]
fn sentence_bounds_match_split_text() {
    let bounds = english::sentence_bounds(EN_TEXT);
    let chars: Vec<char> = EN_TEXT.chars().collect();
    let rebuilt: Vec<String> = bounds
        .iter()
        .map(|SentenceBoundary { begin, end }| chars[*begin..*end].iter().collect())
        .collect();
    assert_eq!(rebuilt, english::split_sentences(EN_TEXT));

    let ko_bounds = korean::sentence_bounds(KO_TEXT, KoreanSentenceOptions::default());
    assert_eq!(ko_bounds.len(), 2);
    assert_eq!(ko_bounds[0].begin, 0);
    assert_eq!(ko_bounds[1].end, KO_TEXT.chars().count());
}

#[test]
fn stopwords_shrink_demo_vocabulary() {
    let words = english::tokenize_words(EN_TEXT).unwrap();
    let content = StopWords::english().filter(words);
    assert!(!content.iter().any(|word| word.eq_ignore_ascii_case("the")));
    assert!(content.contains(&"tokenization".to_string()));
}

#[test]
fn word_lists_are_lowercase_and_nonempty() {
    assert!(ENGLISH_ABBREVIATIONS
        .iter()
        .all(|abbrev| !abbrev.is_empty() && abbrev.to_lowercase() == *abbrev));
    assert!(!KOREAN_SENTENCE_ENDINGS.is_empty());
}
