//! Noun chunk detection
//!
//! Identifies noun phrases using pattern matching on POS tags.
//! Pattern: (DET)? (ADJ)* (NOUN)+

use super::NounPhrase;
use crate::types::Token;

/// Chunking stage boundary.
///
/// # Contract
///
/// - **Input**: one sentence's tagged tokens, in order.
/// - **Output**: non-overlapping phrase spans in left-to-right order, each
///   indexing into the input slice.
/// - **Pure**: same input, same output.
pub trait PhraseChunker {
    /// Detect noun phrases in `tokens`.
    fn chunk(&self, tokens: &[Token]) -> Vec<NounPhrase>;
}

/// Noun chunk detector
///
/// Scans left to right and matches the pattern `(DET)? (ADJ)* (NOUN)+`
/// greedily. A leading determiner belongs to the phrase it introduces.
/// After a match the scan resumes past the phrase, so spans never overlap.
#[derive(Debug, Clone, Copy, Default)]
pub struct NounChunker;

impl NounChunker {
    /// Create a new chunker
    pub fn new() -> Self {
        Self
    }

    /// Try to match a noun phrase starting at `start`
    fn match_noun_phrase(tokens: &[Token], start: usize) -> Option<NounPhrase> {
        let mut end = start;

        // Optional determiner
        if tokens[end].tag.is_determiner() {
            end += 1;
        }

        // Optional adjectives
        while end < tokens.len() && tokens[end].tag.is_adjective() {
            end += 1;
        }

        // Required: at least one noun
        let noun_start = end;
        while end < tokens.len() && tokens[end].tag.is_noun() {
            end += 1;
        }
        if end == noun_start {
            return None;
        }

        Some(NounPhrase::new(start, end))
    }
}

impl PhraseChunker for NounChunker {
    fn chunk(&self, tokens: &[Token]) -> Vec<NounPhrase> {
        let mut phrases = Vec::new();
        let mut i = 0;

        while i < tokens.len() {
            match Self::match_noun_phrase(tokens, i) {
                Some(span) => {
                    i = span.end;
                    phrases.push(span);
                }
                None => i += 1,
            }
        }

        phrases
    }
}
