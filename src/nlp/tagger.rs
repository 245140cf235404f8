//! Part-of-speech tagging
//!
//! Deterministic lexicon-plus-suffix-rule tagging producing Penn Treebank
//! tags. All data is embedded; accuracy is close enough to a trained tagger
//! for the tag families the scoring layers read (nouns, adjectives,
//! superlatives, pronouns, cardinals, determiners). A trained tagger can be
//! plugged in through the [`PosTagger`] trait.

use super::lexicon::WORD_TAGS;
use crate::types::{PosTag, Token};
use rustc_hash::FxHashMap;

/// Tagging stage boundary.
///
/// # Contract
///
/// - **Input**: one sentence's (or title's) tokenized words, in order.
/// - **Output**: one [`Token`] per input word, same order, surface forms
///   preserved verbatim.
/// - **Pure**: same input, same output; implementations must be re-entrant.
pub trait PosTagger {
    /// Tag `words` with Penn Treebank part-of-speech tags.
    fn tag(&self, words: &[String]) -> Vec<Token>;
}

/// Built-in lexicon and suffix-rule tagger.
///
/// Resolution order per word: pure punctuation → numeric literal (CD) →
/// embedded lexicon (case-insensitive) → capitalized mid-sentence proper
/// noun (NNP) → suffix rules → NN. The first word of a sentence is
/// lowercased before lookup so ordinary capitalization does not create
/// proper nouns. A plural-looking word directly after a personal pronoun is
/// read as a present-tense verb (`she runs`), the one context rule applied.
#[derive(Debug, Clone)]
pub struct LexiconTagger {
    lexicon: FxHashMap<&'static str, PosTag>,
}

impl Default for LexiconTagger {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconTagger {
    /// Create a tagger from the embedded tables.
    pub fn new() -> Self {
        let lexicon = WORD_TAGS.iter().copied().collect();
        Self { lexicon }
    }

    fn tag_word(&self, word: &str, sentence_initial: bool, prev: Option<PosTag>) -> PosTag {
        if word.chars().all(|c| !c.is_alphanumeric()) {
            return PosTag::Punct;
        }
        if word.chars().next().is_some_and(|c| c.is_ascii_digit()) {
            return PosTag::Cd;
        }

        // Straight apostrophe so curly-quoted contractions hit the lexicon.
        let lower = word.to_lowercase().replace('\u{2019}', "'");
        if let Some(&tag) = self.lexicon.get(lower.as_str()) {
            return tag;
        }

        if !sentence_initial && word.chars().next().is_some_and(|c| c.is_uppercase()) {
            return PosTag::Nnp;
        }

        Self::suffix_rule(&lower, prev)
    }

    fn suffix_rule(lower: &str, prev: Option<PosTag>) -> PosTag {
        let n = lower.chars().count();

        if lower.ends_with("est") && n >= 5 {
            return PosTag::Jjs;
        }
        if lower.ends_with("ly") && n >= 4 {
            return PosTag::Rb;
        }
        if lower.ends_with("ing") && n >= 5 {
            return PosTag::Vbg;
        }
        if lower.ends_with("ed") && n >= 4 {
            return PosTag::Vbd;
        }
        if lower.ends_with("ful") && n >= 5 {
            return PosTag::Jj;
        }
        if n >= 6
            && ["ous", "ive", "ish", "less", "able", "ible"]
                .iter()
                .any(|s| lower.ends_with(s))
        {
            return PosTag::Jj;
        }
        if lower.ends_with("us") && n >= 4 {
            return PosTag::Nn;
        }
        if lower.ends_with("is") && n >= 5 {
            return PosTag::Nn;
        }
        if lower.ends_with('s') && !lower.ends_with("ss") && n >= 4 {
            // Subject-verb beats plural right after a pronoun.
            if prev == Some(PosTag::Prp) {
                return PosTag::Vbz;
            }
            return PosTag::Nns;
        }

        PosTag::Nn
    }
}

impl PosTagger for LexiconTagger {
    fn tag(&self, words: &[String]) -> Vec<Token> {
        let mut tokens = Vec::with_capacity(words.len());
        let mut prev = None;
        for (idx, word) in words.iter().enumerate() {
            let tag = self.tag_word(word, idx == 0, prev);
            prev = Some(tag);
            tokens.push(Token::new(word.clone(), tag));
        }
        tokens
    }
}
