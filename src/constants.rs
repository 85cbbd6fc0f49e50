//! Environment variable names and the word lists used by the rule-based splitters.

/// Environment variable overriding [`crate::TokenizerConfig::language`].
pub const BITOK_LANGUAGE_ENV: &str = "BITOK_LANGUAGE";
/// Environment variable overriding the Korean morpheme backend (`rules` or `dictionary`).
pub const BITOK_MORPHEME_BACKEND_ENV: &str = "BITOK_MORPHEME_BACKEND";
/// Environment variable toggling ending-based Korean sentence splitting (`true`/`false`).
pub const BITOK_SPLIT_ON_ENDINGS_ENV: &str = "BITOK_SPLIT_ON_ENDINGS";

/// Lowercased English abbreviations (without the trailing period) after which
/// a period does not end a sentence, unless a capitalized sentence starter
/// follows.
pub const ENGLISH_ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "mt", "ft", "vs", "etc", "e.g", "i.e",
    "a.m", "p.m", "u.s", "u.k", "inc", "ltd", "corp", "dept", "univ", "gen", "gov",
    "sen", "rep", "rev", "capt", "col", "lt", "sgt", "vol", "fig", "approx", "jan",
    "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec",
];

/// Abbreviations that precede a name or number and so never end a sentence,
/// whatever word follows them.
pub const ENGLISH_PREFIX_ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "st", "mt", "rev", "gen", "sen", "rep", "capt", "col", "lt",
    "sgt", "vs", "e.g", "i.e", "fig", "vol",
];

/// Lowercased words that start a new sentence when capitalized after an
/// initial or a trailing abbreviation (`plan B. It failed.`).
pub const ENGLISH_SENTENCE_STARTERS: &[&str] = &[
    "i", "it", "he", "she", "we", "they", "you", "the", "this", "that", "these", "those", "there",
    "then", "but", "and", "so", "however", "my", "our", "his", "her", "their", "its", "what",
    "when", "where", "why", "how", "if", "after", "yes",
];

/// Sentence-final endings that close a Korean sentence even without
/// punctuation, each with the syllables that must precede it. An empty list
/// accepts any preceding syllable. `다` also closes after a syllable ending
/// in ㄴ (`한다`, `된다`).
pub const KOREAN_SENTENCE_ENDINGS: &[(char, &[char])] = &[
    (
        '다',
        &[
            '니', '었', '았', '였', '했', '겠', '는', '렸', '졌', '웠', '됐', '갔', '왔', '봤',
            '줬', '있', '없', '같', '좋', '렇',
        ],
    ),
    (
        '요',
        &[
            '어', '아', '여', '에', '예', '세', '해', '워', '와', '봐', '돼', '줘', '네', '데',
            '래', '게', '지', '나', '까', '걸', '군', '든', '죠', '겨', '려', '셔', '쳐',
        ],
    ),
    ('죠', &[]),
];

/// Words that look like they end in a sentence-final ending but are nouns.
pub const KOREAN_NON_FINAL_WORDS: &[&str] = &["필요", "주요", "중요", "수요", "개요", "바다"];

/// Particles that attach only after a syllable with a final consonant (batchim).
pub const KOREAN_BATCHIM_PARTICLES: &[&str] = &["은", "이", "을", "과", "으로", "이랑", "이라고"];

/// Particles that attach only after a syllable without a final consonant.
pub const KOREAN_OPEN_PARTICLES: &[&str] = &["는", "가", "를", "와", "랑", "라고"];

/// Particles that attach regardless of the preceding syllable.
pub const KOREAN_ANY_PARTICLES: &[&str] = &[
    "의", "만", "도", "에", "에서", "로", "까지", "부터", "한테", "하고", "께",
];

/// Copula and `하다` endings split off as one predicate morpheme.
pub const KOREAN_PREDICATE_ENDINGS: &[&str] = &[
    "입니다", "합니다", "이다", "하다", "인데", "한데", "인지", "한지", "이고", "이면", "하면",
    "이지만", "하지만",
];

/// Quotative words that continue a sentence after closed quoted speech
/// (`"안녕." 하고 말했다`).
pub const KOREAN_QUOTATIVES: &[&str] = &["라고", "이라고", "하고", "하며", "하는", "고", "며"];
