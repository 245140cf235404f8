//! Fast fill-in-the-blank quiz generation from article text.
//!
//! Takes an article (title plus body), finds the sentences that can stand
//! alone as quiz questions, and picks one word per sentence to blank out.
//! The text toolchain is self-contained: sentence splitting, tokenization,
//! and part-of-speech tagging run on embedded rule tables, so no model
//! files or network access are needed.
//!
//! # Example
//!
//! ```
//! use rapid_gapfill::{Article, StandardQuizPipeline};
//!
//! let article = Article::new(
//!     "Jupiter",
//!     "Jupiter is the fifth planet from the Sun and the largest planet \
//!      in the Solar System, more than twice as massive as all the other \
//!      planets combined. It is a gas giant.",
//! );
//!
//! let pipeline = StandardQuizPipeline::standard();
//! for question in pipeline.generate(&article) {
//!     println!("{}  ({})", question.blanked(), question.keyword);
//! }
//! ```
//!
//! Selection is deliberately conservative: an article with no sentence worth
//! asking about yields an empty result rather than a bad question.
//!
//! # Feature flags
//!
//! - `tracing`: emit a [tracing](https://docs.rs/tracing) span per pipeline
//!   stage. Off by default.

pub mod nlp;
pub mod phrase;
pub mod pipeline;
pub mod selector;
pub mod types;

pub use pipeline::runner::{QuizPipeline, QuizPipelineBuilder, StandardQuizPipeline};
pub use selector::keyword::{KeywordSelector, KeywordWeights};
pub use selector::sentence::{SentenceSelector, SentenceWeights};
pub use types::{Article, Question};
