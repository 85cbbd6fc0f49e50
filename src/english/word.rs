use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::error::{Result, TokenizeError};

use super::sentence::EnglishSentenceSplitter;

type Rule = (Regex, &'static str);

/// Ordered Penn Treebank rewrite rules.
///
/// Each group is applied in sequence with `replace_all`; the rewritten text is
/// finally split on whitespace.
struct TreebankRules {
    starting_quotes: Vec<Rule>,
    lone_quote: Regex,
    punctuation: Vec<Rule>,
    brackets: Rule,
    double_dashes: Rule,
    ending_quotes: Vec<Rule>,
    contractions: Vec<Rule>,
}

fn compile(pattern: &str) -> std::result::Result<Regex, String> {
    Regex::new(pattern).map_err(|error| format!("invalid treebank pattern `{pattern}`: {error}"))
}

fn compile_rules(
    rules: &[(&str, &'static str)],
) -> std::result::Result<Vec<Rule>, String> {
    rules
        .iter()
        .map(|(pattern, replacement)| Ok((compile(pattern)?, *replacement)))
        .collect()
}

impl TreebankRules {
    fn compile() -> std::result::Result<Self, String> {
        Ok(Self {
            starting_quotes: compile_rules(&[
                (r"([«“‘„]|`+)", " ${1} "),
                (r#"^""#, "``"),
                (r"(``)", " ${1} "),
                (r#"([ (\[{<])("|'{2})"#, "${1} `` "),
            ])?,
            lone_quote: compile(r"(?i)'(\w)\b")?,
            punctuation: compile_rules(&[
                (r#"([^.])(\.)([\])}>"']*)\s*$"#, "${1} ${2} ${3} "),
                (r"([:,])([^\d])", " ${1} ${2}"),
                (r"([:,])$", " ${1} "),
                (r"\.{2,}", " ${0} "),
                (r"[;@#$%&]", " ${0} "),
                (r"[?!]", " ${0} "),
                (r"([^'])' ", "${1} ' "),
                (r"[*]", " ${0} "),
            ])?,
            brackets: (compile(r"[\]\[(){}<>]")?, " ${0} "),
            double_dashes: (compile(r"--")?, " -- "),
            ending_quotes: compile_rules(&[
                (r"([»”’])", " ${1} "),
                (r"''", " '' "),
                (r#"""#, " '' "),
                (r"([^' ])('[sS]|'[mM]|'[dD]|') ", "${1} ${2} "),
                (r"([^' ])('ll|'LL|'re|'RE|'ve|'VE|n't|N'T) ", "${1} ${2} "),
            ])?,
            contractions: compile_rules(&[
                (r"(?i)\b(can)(not)\b", " ${1} ${2} "),
                (r"(?i)\b(d)('ye)\b", " ${1} ${2} "),
                (r"(?i)\b(gim)(me)\b", " ${1} ${2} "),
                (r"(?i)\b(gon)(na)\b", " ${1} ${2} "),
                (r"(?i)\b(got)(ta)\b", " ${1} ${2} "),
                (r"(?i)\b(lem)(me)\b", " ${1} ${2} "),
                (r"(?i)\b(more)('n)\b", " ${1} ${2} "),
                (r"(?i)\b(wan)(na)(\s)", " ${1} ${2} ${3}"),
                (r"(?i) ('t)(is)\b", " ${1} ${2}"),
                (r"(?i) ('t)(was)\b", " ${1} ${2}"),
            ])?,
        })
    }

    fn apply(&self, sentence: &str) -> Vec<String> {
        let mut text = sentence.to_string();

        for (regex, replacement) in &self.starting_quotes {
            text = regex.replace_all(&text, *replacement).into_owned();
        }
        // A quote before a one-letter word opens a quotation unless it is a
        // clitic such as 'm, 't, 's, 'd or 'n.
        text = self
            .lone_quote
            .replace_all(&text, |caps: &Captures| {
                let letter = &caps[1];
                if matches!(letter.to_ascii_lowercase().as_str(), "m" | "t" | "s" | "d" | "n") {
                    caps[0].to_string()
                } else {
                    format!("' {letter}")
                }
            })
            .into_owned();

        for (regex, replacement) in &self.punctuation {
            text = regex.replace_all(&text, *replacement).into_owned();
        }
        text = self.brackets.0.replace_all(&text, self.brackets.1).into_owned();
        text = self
            .double_dashes
            .0
            .replace_all(&text, self.double_dashes.1)
            .into_owned();

        text = format!(" {text} ");
        for (regex, replacement) in self.ending_quotes.iter().chain(&self.contractions) {
            text = regex.replace_all(&text, *replacement).into_owned();
        }

        text.split_whitespace().map(str::to_string).collect()
    }
}

fn treebank_rules() -> Result<&'static TreebankRules> {
    static RULES: OnceLock<std::result::Result<TreebankRules, String>> = OnceLock::new();
    RULES
        .get_or_init(TreebankRules::compile)
        .as_ref()
        .map_err(|message| TokenizeError::InvalidArgument(message.clone()))
}

/// Treebank-style English word tokenizer.
///
/// Text is first split into sentences, then each sentence is rewritten by the
/// Treebank rules: punctuation is separated, straight double quotes become
/// ```` `` ```` / `''` and clitics are split off (`don't` -> `do`, `n't`).
#[derive(Debug, Clone, Default)]
pub struct EnglishWordTokenizer {
    sentences: EnglishSentenceSplitter,
}

impl EnglishWordTokenizer {
    /// Uses `sentences` for the sentence pre-split.
    pub fn with_sentence_splitter(sentences: EnglishSentenceSplitter) -> Self {
        Self { sentences }
    }

    /// Tokenizes `text` into words and punctuation tokens.
    pub fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        let rules = treebank_rules()?;
        Ok(self
            .sentences
            .split(text)
            .iter()
            .flat_map(|sentence| rules.apply(sentence))
            .collect())
    }

    /// Tokenizes `text` as a single sentence, skipping the sentence pre-split.
    pub fn tokenize_line(&self, text: &str) -> Result<Vec<String>> {
        Ok(treebank_rules()?.apply(text))
    }
}

#[cfg(test)]
mod word_tests {
    use super::EnglishWordTokenizer;

    fn words(text: &str) -> Vec<String> {
        EnglishWordTokenizer::default().tokenize(text).unwrap()
    }

    #[test]
    fn separates_final_period_in_every_sentence() {
        assert_eq!(
            words("The above example is an example. Each method has functions."),
            vec![
                "The", "above", "example", "is", "an", "example", ".", "Each", "method", "has",
                "functions", ".",
            ]
        );
    }

    #[test]
    fn splits_commas_and_marks() {
        assert_eq!(words("Hello, world!"), vec!["Hello", ",", "world", "!"]);
        assert_eq!(words("Wait... what?"), vec!["Wait", "...", "what", "?"]);
    }

    #[test]
    fn keeps_numbers_with_separators() {
        assert_eq!(
            words("It costs $1,000.50 today."),
            vec!["It", "costs", "$", "1,000.50", "today", "."]
        );
    }

    #[test]
    fn splits_contractions() {
        assert_eq!(words("I don't know."), vec!["I", "do", "n't", "know", "."]);
        assert_eq!(words("I can't go."), vec!["I", "ca", "n't", "go", "."]);
        assert_eq!(words("She's here."), vec!["She", "'s", "here", "."]);
        assert_eq!(words("We cannot wait."), vec!["We", "can", "not", "wait", "."]);
        assert_eq!(words("You gonna go?"), vec!["You", "gon", "na", "go", "?"]);
    }

    #[test]
    fn converts_double_quotes() {
        assert_eq!(
            words("\"Hello,\" she said."),
            vec!["``", "Hello", ",", "''", "she", "said", "."]
        );
    }

    #[test]
    fn splits_brackets_and_dashes() {
        assert_eq!(
            words("Rust (the language) -- fast."),
            vec!["Rust", "(", "the", "language", ")", "--", "fast", "."]
        );
    }

    #[test]
    fn tokenize_line_does_not_resplit() {
        let tokenizer = EnglishWordTokenizer::default();
        assert_eq!(
            tokenizer.tokenize_line("One. Two.").unwrap(),
            vec!["One.", "Two", "."]
        );
    }

    #[test]
    fn empty_text_has_no_words() {
        assert!(words("").is_empty());
        assert!(words("   ").is_empty());
    }
}
