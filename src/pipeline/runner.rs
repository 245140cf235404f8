//! Pipeline runner — orchestrates stage execution from article to questions.
//!
//! The [`QuizPipeline`] struct holds a statically-composed set of analysis
//! stages. Calling [`QuizPipeline::generate`] runs them in order: sentence
//! splitting, tokenization, tagging, sentence selection, keyword selection.
//!
//! # Static dispatch
//!
//! `QuizPipeline` is generic over all stage types, so the compiler
//! monomorphizes each stage combination into a unique concrete type. The
//! built-in stages are plain structs with no shared state, which also makes
//! a pipeline safe to share across threads for batch generation.
//!
//! # Factory methods
//!
//! Use [`QuizPipeline::standard()`] for the built-in stage set, or
//! [`QuizPipelineBuilder`] to swap individual stages.

use crate::nlp::splitter::{RuleSplitter, SentenceSplitter};
use crate::nlp::tagger::{LexiconTagger, PosTagger};
use crate::nlp::tokenizer::{Tokenizer, WordTokenizer};
use crate::phrase::chunker::{NounChunker, PhraseChunker};
use crate::selector::frequency::FrequencyTable;
use crate::selector::keyword::{ArticleContext, KeywordSelector};
use crate::selector::sentence::SentenceSelector;
use crate::types::{Article, Question, Sentence};
use rayon::prelude::*;

// ---------------------------------------------------------------------------
// Conditional tracing support
// ---------------------------------------------------------------------------

/// Enter a tracing span for a pipeline stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("pipeline_stage", stage = $name).entered();
    };
}

// ============================================================================
// QuizPipeline — statically-composed stage container
// ============================================================================

/// A pipeline composed of concrete stage implementations.
///
/// All type parameters have trait bounds enforced at the `impl` level, so the
/// struct itself is unconditionally constructible (useful for builders).
///
/// # Type parameters
///
/// | Param | Trait | Default impl |
/// |-------|-------|--------------|
/// | `Sp`  | [`SentenceSplitter`] | [`RuleSplitter`] |
/// | `Tok` | [`Tokenizer`] | [`WordTokenizer`] |
/// | `Tag` | [`PosTagger`] | [`LexiconTagger`] |
/// | `Ch`  | [`PhraseChunker`] | [`NounChunker`] |
#[derive(Debug, Clone)]
pub struct QuizPipeline<Sp, Tok, Tag, Ch> {
    pub splitter: Sp,
    pub tokenizer: Tok,
    pub tagger: Tag,
    pub sentence_selector: SentenceSelector,
    pub keyword_selector: KeywordSelector<Ch>,
}

/// Type alias for the pipeline built from the default stages.
pub type StandardQuizPipeline = QuizPipeline<RuleSplitter, WordTokenizer, LexiconTagger, NounChunker>;

impl StandardQuizPipeline {
    /// Build a pipeline from the built-in stage set:
    /// - Rule-based sentence splitting with abbreviation suppression
    /// - Unicode-aware word tokenization
    /// - Lexicon and suffix-rule tagging
    /// - Default sentence weights and threshold
    /// - Default keyword weights over noun-phrase candidates
    pub fn standard() -> Self {
        QuizPipeline {
            splitter: RuleSplitter::new(),
            tokenizer: WordTokenizer::new(),
            tagger: LexiconTagger::new(),
            sentence_selector: SentenceSelector::new(),
            keyword_selector: KeywordSelector::new(),
        }
    }
}

// ============================================================================
// QuizPipeline::generate — execute stages in order
// ============================================================================

impl<Sp, Tok, Tag, Ch> QuizPipeline<Sp, Tok, Tag, Ch>
where
    Sp: SentenceSplitter,
    Tok: Tokenizer,
    Tag: PosTagger,
    Ch: PhraseChunker,
{
    /// Generate fill-in-the-blank questions for one article.
    ///
    /// Stages run in order:
    /// 1. Split the trimmed body into sentences
    /// 2. Tokenize and tag each sentence
    /// 3. Build article context (title words, body word frequencies)
    /// 4. Select question-worthy sentences
    /// 5. Choose a keyword per sentence; sentences without one are dropped
    ///
    /// Questions come back in sentence order. An article that yields no
    /// usable sentence produces an empty vector, never an error.
    pub fn generate(&self, article: &Article) -> Vec<Question> {
        trace_stage!("analyze");
        let sentences = self.analyze(article.body.trim());

        trace_stage!("context");
        let context = self.article_context(article);

        trace_stage!("sentences");
        let chosen = self.sentence_selector.select(&article.title, &sentences);

        trace_stage!("keywords");
        chosen
            .into_iter()
            .filter_map(|sentence| {
                self.keyword_selector
                    .select(&context, sentence)
                    .map(|keyword| Question::new(sentence.text.clone(), keyword))
            })
            .collect()
    }

    /// Generate questions for a batch of articles, sequentially.
    ///
    /// The result concatenates each article's questions in input order.
    pub fn generate_batch(&self, articles: &[Article]) -> Vec<Question> {
        articles.iter().flat_map(|a| self.generate(a)).collect()
    }

    /// Generate questions for a batch of articles across threads.
    ///
    /// Output is identical to [`generate_batch`](Self::generate_batch),
    /// including order.
    pub fn generate_batch_parallel(&self, articles: &[Article]) -> Vec<Question>
    where
        Sp: Sync,
        Tok: Sync,
        Tag: Sync,
        Ch: Sync,
    {
        // Not worth fanning out for a single article.
        if articles.len() <= 1 {
            return self.generate_batch(articles);
        }
        articles.par_iter().flat_map(|a| self.generate(a)).collect()
    }

    /// Split the body into sentences and tag each one.
    fn analyze(&self, body: &str) -> Vec<Sentence> {
        self.splitter
            .split(body)
            .into_iter()
            .enumerate()
            .map(|(index, text)| {
                let words = self.tokenizer.tokenize(&text);
                let tokens = self.tagger.tag(&words);
                Sentence::new(text, index, tokens)
            })
            .collect()
    }

    /// Tokenize the title and count body word frequencies.
    fn article_context(&self, article: &Article) -> ArticleContext {
        let title_words = self.tokenizer.tokenize(&article.title);
        let body_words = self.tokenizer.tokenize(&article.body);
        ArticleContext::new(title_words, FrequencyTable::from_words(body_words))
    }
}

// ============================================================================
// QuizPipelineBuilder — fluent construction with custom stages
// ============================================================================

/// Fluent builder for constructing a [`QuizPipeline`] with custom stages.
///
/// Starts from the standard stage set and allows overriding individual
/// stages.
///
/// ```
/// # use rapid_gapfill::pipeline::runner::QuizPipelineBuilder;
/// # use rapid_gapfill::selector::sentence::SentenceSelector;
/// let pipeline = QuizPipelineBuilder::new()
///     .sentence_selector(SentenceSelector::new().with_threshold(2.0))
///     .build();
/// ```
pub struct QuizPipelineBuilder<Sp = RuleSplitter, Tok = WordTokenizer, Tag = LexiconTagger, Ch = NounChunker> {
    splitter: Sp,
    tokenizer: Tok,
    tagger: Tag,
    sentence_selector: SentenceSelector,
    keyword_selector: KeywordSelector<Ch>,
}

impl QuizPipelineBuilder {
    /// Start building from the standard stages.
    pub fn new() -> Self {
        QuizPipelineBuilder {
            splitter: RuleSplitter::new(),
            tokenizer: WordTokenizer::new(),
            tagger: LexiconTagger::new(),
            sentence_selector: SentenceSelector::new(),
            keyword_selector: KeywordSelector::new(),
        }
    }
}

impl Default for QuizPipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<Sp, Tok, Tag, Ch> QuizPipelineBuilder<Sp, Tok, Tag, Ch> {
    /// Override the sentence splitter stage.
    pub fn splitter<S: SentenceSplitter>(self, s: S) -> QuizPipelineBuilder<S, Tok, Tag, Ch> {
        QuizPipelineBuilder {
            splitter: s,
            tokenizer: self.tokenizer,
            tagger: self.tagger,
            sentence_selector: self.sentence_selector,
            keyword_selector: self.keyword_selector,
        }
    }

    /// Override the word tokenizer stage.
    pub fn tokenizer<T: Tokenizer>(self, t: T) -> QuizPipelineBuilder<Sp, T, Tag, Ch> {
        QuizPipelineBuilder {
            splitter: self.splitter,
            tokenizer: t,
            tagger: self.tagger,
            sentence_selector: self.sentence_selector,
            keyword_selector: self.keyword_selector,
        }
    }

    /// Override the part-of-speech tagger stage.
    pub fn tagger<T: PosTagger>(self, t: T) -> QuizPipelineBuilder<Sp, Tok, T, Ch> {
        QuizPipelineBuilder {
            splitter: self.splitter,
            tokenizer: self.tokenizer,
            tagger: t,
            sentence_selector: self.sentence_selector,
            keyword_selector: self.keyword_selector,
        }
    }

    /// Override the sentence selector.
    pub fn sentence_selector(mut self, s: SentenceSelector) -> Self {
        self.sentence_selector = s;
        self
    }

    /// Override the keyword selector (and with it the phrase chunker).
    pub fn keyword_selector<D: PhraseChunker>(
        self,
        k: KeywordSelector<D>,
    ) -> QuizPipelineBuilder<Sp, Tok, Tag, D> {
        QuizPipelineBuilder {
            splitter: self.splitter,
            tokenizer: self.tokenizer,
            tagger: self.tagger,
            sentence_selector: self.sentence_selector,
            keyword_selector: k,
        }
    }

    /// Consume the builder and produce a [`QuizPipeline`].
    pub fn build(self) -> QuizPipeline<Sp, Tok, Tag, Ch> {
        QuizPipeline {
            splitter: self.splitter,
            tokenizer: self.tokenizer,
            tagger: self.tagger,
            sentence_selector: self.sentence_selector,
            keyword_selector: self.keyword_selector,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
