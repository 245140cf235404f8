//! Question generation pipeline
//!
//! This module wires the text analysis stages and the two selectors into a
//! single article-to-questions pipeline.

pub mod runner;
