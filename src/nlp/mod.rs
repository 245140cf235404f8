//! Natural Language Processing components
//!
//! This module provides word tokenization, sentence splitting, and
//! part-of-speech tagging over embedded word tables.

mod lexicon;

pub mod splitter;
pub mod tagger;
pub mod tokenizer;
