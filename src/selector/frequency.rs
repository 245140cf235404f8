//! Case-insensitive word frequency counting

use rustc_hash::FxHashMap;

/// Word frequency table with case-insensitive lookups
///
/// Words are folded to lowercase on insert and on lookup, so `"Dog"` and
/// `"dog"` share one count. Absent words count as zero.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    counts: FxHashMap<String, u32>,
}

impl FrequencyTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table by counting `words`
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut counts = FxHashMap::default();
        for word in words {
            *counts.entry(word.as_ref().to_lowercase()).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Occurrences of `word`, ignoring case
    pub fn count(&self, word: &str) -> u32 {
        self.counts
            .get(&word.to_lowercase())
            .copied()
            .unwrap_or(0)
    }

    /// Number of distinct case-folded words
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Whether the table holds no words
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_fold_case() {
        let table = FrequencyTable::from_words(["Dog", "dog", "DOG", "cat"]);

        assert_eq!(table.count("dog"), 3);
        assert_eq!(table.count("Dog"), 3);
        assert_eq!(table.count("cat"), 1);
        assert_eq!(table.distinct(), 2);
    }

    #[test]
    fn test_missing_word_counts_zero() {
        let table = FrequencyTable::from_words(["dog"]);

        assert_eq!(table.count("bird"), 0);
    }

    #[test]
    fn test_empty_table() {
        let table = FrequencyTable::new();

        assert!(table.is_empty());
        assert_eq!(table.count("anything"), 0);
    }
}
