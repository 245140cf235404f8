//! Keyword choice within a selected sentence
//!
//! Picks the single word worth blanking out: a cardinal number when one is
//! present, otherwise the best-scoring candidate drawn from the sentence's
//! noun phrases.

use super::frequency::FrequencyTable;
use crate::phrase::chunker::{NounChunker, PhraseChunker};
use crate::types::{Sentence, Token};
use serde::{Deserialize, Serialize};

/// Weights applied to each keyword feature
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordWeights {
    /// Weight per occurrence of the word in the article body
    pub frequency: f64,
    /// Bonus when the word appears verbatim in the title
    pub title: f64,
}

impl Default for KeywordWeights {
    fn default() -> Self {
        Self {
            frequency: 1.0,
            title: 1.0,
        }
    }
}

/// Article-level context needed to judge keyword candidates
#[derive(Debug, Clone, Default)]
pub struct ArticleContext {
    /// Title words, tokenized like the body, original casing kept
    pub title_words: Vec<String>,
    /// Case-folded word frequencies over the whole article body
    pub body_frequencies: FrequencyTable,
}

impl ArticleContext {
    /// Create context from tokenized title words and body frequencies
    pub fn new(title_words: Vec<String>, body_frequencies: FrequencyTable) -> Self {
        Self {
            title_words,
            body_frequencies,
        }
    }
}

/// Scoring-based keyword selector
///
/// Candidate generation: when the sentence holds a cardinal number, the
/// first one is the sole candidate. Otherwise each noun phrase contributes
/// at most one word, the first adjective or failing that the first noun,
/// skipping words that occur more than once in the sentence. The candidate
/// with the highest score wins; ties keep the earliest candidate, and a
/// zero score selects nothing.
#[derive(Debug, Clone)]
pub struct KeywordSelector<C = NounChunker> {
    weights: KeywordWeights,
    chunker: C,
}

impl KeywordSelector<NounChunker> {
    /// Create a selector with default weights and the built-in chunker
    pub fn new() -> Self {
        Self {
            weights: KeywordWeights::default(),
            chunker: NounChunker::new(),
        }
    }
}

impl Default for KeywordSelector<NounChunker> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: PhraseChunker> KeywordSelector<C> {
    /// Set custom feature weights
    pub fn with_weights(mut self, weights: KeywordWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Swap in a different phrase chunker
    pub fn with_chunker<D: PhraseChunker>(self, chunker: D) -> KeywordSelector<D> {
        KeywordSelector {
            weights: self.weights,
            chunker,
        }
    }

    /// Pick the word to blank out of `sentence`, if any
    pub fn select(&self, context: &ArticleContext, sentence: &Sentence) -> Option<String> {
        let candidates = self.candidates(sentence);
        self.best_candidate(context, candidates)
    }

    /// Score a candidate word on article frequency and title membership
    pub fn score(&self, context: &ArticleContext, keyword: &str) -> f64 {
        let frequency = context.body_frequencies.count(keyword) as f64;
        let in_title = if context.title_words.iter().any(|w| w == keyword) {
            1.0
        } else {
            0.0
        };
        self.weights.frequency * frequency + self.weights.title * in_title
    }

    fn candidates(&self, sentence: &Sentence) -> Vec<String> {
        // A cardinal number preempts the noun-phrase candidates.
        if let Some(token) = sentence.tokens.iter().find(|t| t.tag.is_cardinal()) {
            return vec![token.text.clone()];
        }

        let sentence_freq =
            FrequencyTable::from_words(sentence.tokens.iter().map(|t| t.text.as_str()));

        self.chunker
            .chunk(&sentence.tokens)
            .iter()
            .filter_map(|phrase| best_in_phrase(phrase.slice(&sentence.tokens), &sentence_freq))
            .collect()
    }

    fn best_candidate(&self, context: &ArticleContext, candidates: Vec<String>) -> Option<String> {
        let mut best = None;
        let mut best_score = 0.0;
        for candidate in candidates {
            let score = self.score(context, &candidate);
            if score > best_score {
                best_score = score;
                best = Some(candidate);
            }
        }
        best
    }
}

/// At most one candidate per noun phrase: the first adjective, or failing
/// that the first noun. Words repeated within the sentence are passed over.
fn best_in_phrase(tokens: &[Token], sentence_freq: &FrequencyTable) -> Option<String> {
    let mut first_noun = None;
    for token in tokens {
        if sentence_freq.count(&token.text) > 1 {
            continue;
        }
        if token.tag.is_adjective() {
            return Some(token.text.clone());
        }
        if token.tag.is_noun() && first_noun.is_none() {
            first_noun = Some(token.text.clone());
        }
    }
    first_noun
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PosTag;

    fn tok(text: &str, tag: PosTag) -> Token {
        Token::new(text, tag)
    }

    fn context_for(title_words: &[&str], body_words: &[&str]) -> ArticleContext {
        ArticleContext::new(
            title_words.iter().map(|w| w.to_string()).collect(),
            FrequencyTable::from_words(body_words.iter().copied()),
        )
    }

    fn eagle_sentence() -> Sentence {
        Sentence::new(
            "In 1969, the Eagle landed.",
            0,
            vec![
                tok("In", PosTag::In),
                tok("1969", PosTag::Cd),
                tok(",", PosTag::Punct),
                tok("the", PosTag::Dt),
                tok("Eagle", PosTag::Nnp),
                tok("landed", PosTag::Vbd),
                tok(".", PosTag::Punct),
            ],
        )
    }

    #[test]
    fn test_cardinal_number_preempts_noun_phrases() {
        let context = context_for(
            &["Apollo", "11"],
            &["In", "1969", ",", "the", "Eagle", "landed", "."],
        );

        let keyword = KeywordSelector::new().select(&context, &eagle_sentence());

        assert_eq!(keyword.as_deref(), Some("1969"));
    }

    #[test]
    fn test_cardinal_still_needs_a_positive_score() {
        // An empty context scores every candidate at zero, so even the
        // cardinal shortcut selects nothing.
        let context = ArticleContext::default();

        let keyword = KeywordSelector::new().select(&context, &eagle_sentence());

        assert_eq!(keyword, None);
    }

    #[test]
    fn test_repeated_words_are_excluded() {
        let sentence = Sentence::new(
            "The dog chased the dog.",
            0,
            vec![
                tok("The", PosTag::Dt),
                tok("dog", PosTag::Nn),
                tok("chased", PosTag::Vbd),
                tok("the", PosTag::Dt),
                tok("dog", PosTag::Nn),
                tok(".", PosTag::Punct),
            ],
        );
        let context = context_for(&[], &["The", "dog", "chased", "the", "dog", "."]);

        let keyword = KeywordSelector::new().select(&context, &sentence);

        assert_eq!(keyword, None);
    }

    #[test]
    fn test_first_adjective_beats_nouns() {
        let sentence = Sentence::new(
            "The large hungry bear fished.",
            0,
            vec![
                tok("The", PosTag::Dt),
                tok("large", PosTag::Jj),
                tok("hungry", PosTag::Jj),
                tok("bear", PosTag::Nn),
                tok("fished", PosTag::Vbd),
                tok(".", PosTag::Punct),
            ],
        );
        let context = context_for(&[], &["The", "large", "hungry", "bear", "fished", "."]);

        let keyword = KeywordSelector::new().select(&context, &sentence);

        assert_eq!(keyword.as_deref(), Some("large"));
    }

    #[test]
    fn test_first_noun_is_the_fallback() {
        let sentence = Sentence::new(
            "The bear fished.",
            0,
            vec![
                tok("The", PosTag::Dt),
                tok("bear", PosTag::Nn),
                tok("fished", PosTag::Vbd),
                tok(".", PosTag::Punct),
            ],
        );
        let context = context_for(&[], &["The", "bear", "fished", "."]);

        let keyword = KeywordSelector::new().select(&context, &sentence);

        assert_eq!(keyword.as_deref(), Some("bear"));
    }

    #[test]
    fn test_determiner_is_never_a_candidate() {
        // "the" repeats, "The" would otherwise be tempting by frequency,
        // but determiners can only anchor a phrase, not fill the blank.
        let sentence = Sentence::new(
            "The bear saw the river.",
            0,
            vec![
                tok("The", PosTag::Dt),
                tok("bear", PosTag::Nn),
                tok("saw", PosTag::Vbd),
                tok("the", PosTag::Dt),
                tok("river", PosTag::Nn),
                tok(".", PosTag::Punct),
            ],
        );
        let context = context_for(&[], &["The", "bear", "saw", "the", "river", "."]);

        let keyword = KeywordSelector::new().select(&context, &sentence);

        assert_eq!(keyword.as_deref(), Some("bear"));
    }

    #[test]
    fn test_title_membership_breaks_frequency_tie() {
        let sentence = Sentence::new(
            "Cats are animals.",
            0,
            vec![
                tok("Cats", PosTag::Nns),
                tok("are", PosTag::Vbp),
                tok("animals", PosTag::Nns),
                tok(".", PosTag::Punct),
            ],
        );
        let context = context_for(&["Cats"], &["Cats", "are", "animals", "."]);

        let keyword = KeywordSelector::new().select(&context, &sentence);

        assert_eq!(keyword.as_deref(), Some("Cats"));
    }

    #[test]
    fn test_title_membership_is_case_sensitive() {
        let selector = KeywordSelector::new();
        let context = context_for(&["cats"], &["Cats", "are", "animals", "."]);

        // Frequency lookups fold case, title membership does not.
        assert!((selector.score(&context, "Cats") - 1.0).abs() < 1e-9);
        assert!((selector.score(&context, "cats") - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_tie_keeps_the_earliest_candidate() {
        let sentence = Sentence::new(
            "A bear met a wolf.",
            0,
            vec![
                tok("A", PosTag::Dt),
                tok("bear", PosTag::Nn),
                tok("met", PosTag::Vbd),
                tok("a", PosTag::Dt),
                tok("wolf", PosTag::Nn),
                tok(".", PosTag::Punct),
            ],
        );
        let context = context_for(&[], &["A", "bear", "met", "a", "wolf", "."]);

        let keyword = KeywordSelector::new().select(&context, &sentence);

        assert_eq!(keyword.as_deref(), Some("bear"));
    }

    #[test]
    fn test_sentence_without_candidates_selects_nothing() {
        let sentence = Sentence::new(
            "They ran away.",
            0,
            vec![
                tok("They", PosTag::Prp),
                tok("ran", PosTag::Vbd),
                tok("away", PosTag::Rb),
                tok(".", PosTag::Punct),
            ],
        );
        let context = context_for(&[], &["They", "ran", "away", "."]);

        assert_eq!(KeywordSelector::new().select(&context, &sentence), None);
    }

    #[test]
    fn test_empty_sentence_selects_nothing() {
        let sentence = Sentence::new("", 0, Vec::new());
        let context = ArticleContext::default();

        assert_eq!(KeywordSelector::new().select(&context, &sentence), None);
    }
}
