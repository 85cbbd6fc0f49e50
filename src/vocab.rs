use std::collections::HashMap;
use std::fmt;

/// Token frequency table.
///
/// Iteration and [`Vocabulary::most_common`] ties follow first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    index: HashMap<String, usize>,
    entries: Vec<(String, usize)>,
    total: usize,
}

impl Vocabulary {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts every token in `tokens`.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut vocab = Self::new();
        vocab.extend(tokens);
        vocab
    }

    /// Adds one occurrence of `token`.
    pub fn add(&mut self, token: &str) {
        match self.index.get(token) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(token.to_string(), self.entries.len());
                self.entries.push((token.to_string(), 1));
            }
        }
        self.total += 1;
    }

    /// Adds one occurrence of each token.
    pub fn extend<I, S>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for token in tokens {
            self.add(token.as_ref());
        }
    }

    /// Occurrences of `token`; zero when unseen.
    pub fn count(&self, token: &str) -> usize {
        self.index
            .get(token)
            .map(|&slot| self.entries[slot].1)
            .unwrap_or(0)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no token was counted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of counted occurrences.
    pub fn total(&self) -> usize {
        self.total
    }

    /// `(token, count)` pairs in first-appearance order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries
            .iter()
            .map(|(token, count)| (token.as_str(), *count))
    }

    /// Up to `limit` pairs, highest count first. `None` returns all of them.
    pub fn most_common(&self, limit: Option<usize>) -> Vec<(&str, usize)> {
        let mut ranked: Vec<(&str, usize)> = self.iter().collect();
        // stable: equal counts keep first-appearance order
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        if let Some(limit) = limit {
            ranked.truncate(limit);
        }
        ranked
    }
}

impl<S: AsRef<str>> FromIterator<S> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_tokens(iter)
    }
}

impl fmt::Display for Vocabulary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (position, (token, count)) in self.most_common(None).into_iter().enumerate() {
            if position > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{token:?}: {count}")?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod vocab_tests {
    use super::Vocabulary;

    #[test]
    fn counts_and_ranks_tokens() {
        let vocab = Vocabulary::from_tokens(["an", "example", ".", "example", "."]);
        assert_eq!(vocab.len(), 3);
        assert_eq!(vocab.total(), 5);
        assert_eq!(vocab.count("example"), 2);
        assert_eq!(vocab.count("missing"), 0);
        assert_eq!(
            vocab.most_common(None),
            vec![("example", 2), (".", 2), ("an", 1)]
        );
        assert_eq!(vocab.most_common(Some(1)), vec![("example", 2)]);
    }

    #[test]
    fn display_lists_most_common_first() {
        let vocab: Vocabulary = ["b", "a", "a"].into_iter().collect();
        assert_eq!(vocab.to_string(), r#"{"a": 2, "b": 1}"#);
    }

    #[test]
    fn empty_vocabulary() {
        let vocab = Vocabulary::new();
        assert!(vocab.is_empty());
        assert!(vocab.most_common(None).is_empty());
        assert_eq!(vocab.to_string(), "{}");
    }
}
