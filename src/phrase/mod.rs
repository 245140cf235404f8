//! Phrase extraction components
//!
//! This module provides noun phrase detection over tagged tokens.

pub mod chunker;

use crate::types::Token;

/// A noun phrase as a half-open token span within one sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NounPhrase {
    /// Index of the first token in the phrase
    pub start: usize,
    /// Index one past the last token in the phrase
    pub end: usize,
}

impl NounPhrase {
    /// Create a new phrase span
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of tokens covered by the span
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the span covers no tokens
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Borrow the tokens covered by this span
    pub fn slice<'a>(&self, tokens: &'a [Token]) -> &'a [Token] {
        &tokens[self.start..self.end]
    }

    /// Render the phrase as space-joined surface text
    pub fn text(&self, tokens: &[Token]) -> String {
        self.slice(tokens)
            .iter()
            .map(|t| t.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
