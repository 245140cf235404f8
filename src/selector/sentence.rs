//! Sentence scoring and selection
//!
//! Scores every sentence on position, title overlap, superlatives, length,
//! and noun/pronoun makeup, then keeps the ones above a threshold.

use crate::types::Sentence;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Score a sentence must strictly exceed to survive selection
pub const DEFAULT_THRESHOLD: f64 = 4.0;

/// Weights applied to each sentence feature
///
/// The pronoun weight is negative: a sentence full of pronouns makes a
/// poor question once it is lifted out of its surrounding context.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SentenceWeights {
    /// Bonus for the first sentence of the article
    pub first: f64,
    /// Weight on the fraction of sentence words shared with the title
    pub title: f64,
    /// Bonus when the sentence contains at least one superlative
    pub superlative: f64,
    /// Weight per whitespace-separated word
    pub length: f64,
    /// Weight per noun
    pub noun: f64,
    /// Weight per personal pronoun
    pub pronoun: f64,
}

impl Default for SentenceWeights {
    fn default() -> Self {
        Self {
            first: 1.0,
            title: 1.0,
            superlative: 0.5,
            length: 0.1,
            noun: 0.1,
            pronoun: -0.5,
        }
    }
}

/// Threshold-based sentence selector
#[derive(Debug, Clone)]
pub struct SentenceSelector {
    weights: SentenceWeights,
    threshold: f64,
}

impl Default for SentenceSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl SentenceSelector {
    /// Create a selector with default weights and threshold
    pub fn new() -> Self {
        Self {
            weights: SentenceWeights::default(),
            threshold: DEFAULT_THRESHOLD,
        }
    }

    /// Set custom feature weights
    pub fn with_weights(mut self, weights: SentenceWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Set a custom selection threshold
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Keep the sentences scoring strictly above the threshold,
    /// in their original order
    pub fn select<'a>(&self, title: &str, sentences: &'a [Sentence]) -> Vec<&'a Sentence> {
        sentences
            .iter()
            .filter(|s| self.score(title, s) > self.threshold)
            .collect()
    }

    /// Score one sentence against the article title
    pub fn score(&self, title: &str, sentence: &Sentence) -> f64 {
        let w = &self.weights;

        let first = if sentence.is_first() { 1.0 } else { 0.0 };
        let superlative = if sentence.tokens.iter().any(|t| t.tag.is_superlative()) {
            1.0
        } else {
            0.0
        };
        let length = sentence.text.split_whitespace().count() as f64;
        let nouns = sentence.tokens.iter().filter(|t| t.tag.is_noun()).count() as f64;
        let pronouns = sentence
            .tokens
            .iter()
            .filter(|t| t.tag.is_personal_pronoun())
            .count() as f64;

        w.first * first
            + w.title * title_overlap(title, &sentence.text)
            + w.superlative * superlative
            + w.length * length
            + w.noun * nouns
            + w.pronoun * pronouns
    }
}

/// Fraction of the sentence's words that also appear in the title.
///
/// Both texts are stripped of ASCII punctuation and split on whitespace.
/// Shared words are counted once each and compared case-sensitively. A
/// sentence with no words left after stripping scores zero.
fn title_overlap(title: &str, sentence: &str) -> f64 {
    let title = strip_punctuation(title);
    let sentence = strip_punctuation(sentence);

    let title_words: FxHashSet<&str> = title.split_whitespace().collect();
    let sentence_words: Vec<&str> = sentence.split_whitespace().collect();
    if sentence_words.is_empty() {
        return 0.0;
    }

    let shared: FxHashSet<&str> = sentence_words
        .iter()
        .copied()
        .filter(|w| title_words.contains(w))
        .collect();
    shared.len() as f64 / sentence_words.len() as f64
}

fn strip_punctuation(text: &str) -> String {
    text.chars().filter(|c| !c.is_ascii_punctuation()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PosTag, Token};

    const EPSILON: f64 = 1e-9;

    fn zero_weights() -> SentenceWeights {
        SentenceWeights {
            first: 0.0,
            title: 0.0,
            superlative: 0.0,
            length: 0.0,
            noun: 0.0,
            pronoun: 0.0,
        }
    }

    fn eagle_sentence(index: usize) -> Sentence {
        Sentence::new(
            "In 1969, the Eagle landed.",
            index,
            vec![
                Token::new("In", PosTag::In),
                Token::new("1969", PosTag::Cd),
                Token::new(",", PosTag::Punct),
                Token::new("the", PosTag::Dt),
                Token::new("Eagle", PosTag::Nnp),
                Token::new("landed", PosTag::Vbd),
                Token::new(".", PosTag::Punct),
            ],
        )
    }

    #[test]
    fn test_default_weights_hand_computed() {
        // first 1.0, title 0, superlative 0, length 5 * 0.1, noun 1 * 0.1.
        let selector = SentenceSelector::new();
        let score = selector.score("Apollo 11", &eagle_sentence(0));

        assert!((score - 1.6).abs() < EPSILON);
    }

    #[test]
    fn test_first_sentence_bonus() {
        let selector = SentenceSelector::new();
        let first = selector.score("Apollo 11", &eagle_sentence(0));
        let later = selector.score("Apollo 11", &eagle_sentence(3));

        assert!((first - later - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_title_overlap_is_fraction_of_sentence_words() {
        let weights = SentenceWeights {
            title: 1.0,
            ..zero_weights()
        };
        let selector = SentenceSelector::new().with_weights(weights);
        let sentence = Sentence::new("Cats are animals.", 0, Vec::new());

        let score = selector.score("Cats", &sentence);

        assert!((score - 1.0 / 3.0).abs() < EPSILON);
    }

    #[test]
    fn test_title_overlap_counts_shared_words_once() {
        let weights = SentenceWeights {
            title: 1.0,
            ..zero_weights()
        };
        let selector = SentenceSelector::new().with_weights(weights);
        let sentence = Sentence::new("Cats love cats", 0, Vec::new());

        // Only the case-matching "Cats" overlaps, counted once over 3 words.
        let score = selector.score("Cats", &sentence);

        assert!((score - 1.0 / 3.0).abs() < EPSILON);
    }

    #[test]
    fn test_punctuation_only_sentence_scores_zero_overlap() {
        let weights = SentenceWeights {
            title: 1.0,
            ..zero_weights()
        };
        let selector = SentenceSelector::new().with_weights(weights);
        let sentence = Sentence::new("?!...", 0, Vec::new());

        assert_eq!(selector.score("Any title", &sentence), 0.0);
    }

    #[test]
    fn test_superlative_bonus_is_binary() {
        let weights = SentenceWeights {
            superlative: 0.5,
            ..zero_weights()
        };
        let selector = SentenceSelector::new().with_weights(weights);

        let one = Sentence::new(
            "the largest planet",
            1,
            vec![
                Token::new("the", PosTag::Dt),
                Token::new("largest", PosTag::Jjs),
                Token::new("planet", PosTag::Nn),
            ],
        );
        let two = Sentence::new(
            "the largest and deepest ocean",
            1,
            vec![
                Token::new("the", PosTag::Dt),
                Token::new("largest", PosTag::Jjs),
                Token::new("and", PosTag::Cc),
                Token::new("deepest", PosTag::Jjs),
                Token::new("ocean", PosTag::Nn),
            ],
        );

        assert!((selector.score("", &one) - 0.5).abs() < EPSILON);
        assert!((selector.score("", &two) - 0.5).abs() < EPSILON);
    }

    #[test]
    fn test_length_uses_raw_whitespace_words() {
        let weights = SentenceWeights {
            length: 0.1,
            ..zero_weights()
        };
        let selector = SentenceSelector::new().with_weights(weights);

        // "In 1969," counts as one word even though it carries punctuation.
        let score = selector.score("", &eagle_sentence(0));

        assert!((score - 0.5).abs() < EPSILON);
    }

    #[test]
    fn test_pronouns_lower_the_score() {
        let sentence = Sentence::new(
            "He gave it back.",
            1,
            vec![
                Token::new("He", PosTag::Prp),
                Token::new("gave", PosTag::Vbd),
                Token::new("it", PosTag::Prp),
                Token::new("back", PosTag::Rb),
                Token::new(".", PosTag::Punct),
            ],
        );
        let weights = SentenceWeights {
            pronoun: -0.5,
            ..zero_weights()
        };
        let selector = SentenceSelector::new().with_weights(weights);

        assert!((selector.score("", &sentence) - (-1.0)).abs() < EPSILON);
    }

    #[test]
    fn test_selection_is_strictly_above_threshold() {
        // Weight the first-sentence feature so the score lands exactly on
        // the threshold, which must not be enough.
        let on_threshold = SentenceSelector::new().with_weights(SentenceWeights {
            first: 4.0,
            ..zero_weights()
        });
        let above = SentenceSelector::new().with_weights(SentenceWeights {
            first: 4.5,
            ..zero_weights()
        });
        let sentences = vec![eagle_sentence(0)];

        assert!(on_threshold.select("", &sentences).is_empty());
        assert_eq!(above.select("", &sentences).len(), 1);
    }

    #[test]
    fn test_selection_preserves_input_order() {
        let sentences = vec![eagle_sentence(0), eagle_sentence(1), eagle_sentence(2)];
        let selector = SentenceSelector::new().with_threshold(0.0);

        let selected = selector.select("Apollo 11", &sentences);

        let indices: Vec<usize> = selected.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }
}
