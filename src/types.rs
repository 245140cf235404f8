//! Core data types shared across the crate
//!
//! Everything here is plain data: articles and questions (the wire types),
//! tokens and sentences (the analyzed forms), and the Penn Treebank tag enum
//! the scoring layers inspect.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// PosTag — Penn Treebank tag set
// ============================================================================

/// A Penn Treebank part-of-speech tag.
///
/// The full PTB tag set is covered so that externally produced tags (spaCy
/// exports, NLTK output, hand annotations) round-trip through
/// [`PosTag::as_str`] / [`FromStr`] without loss. The literal punctuation
/// tags (`.`, `,`, `:`, quotes, brackets) collapse into the single
/// [`PosTag::Punct`] variant; nothing downstream distinguishes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PosTag {
    /// Coordinating conjunction (`and`, `but`)
    Cc,
    /// Cardinal number (`1969`, `seven`)
    Cd,
    /// Determiner (`the`, `a`, `every`)
    Dt,
    /// Existential there
    Ex,
    /// Foreign word
    Fw,
    /// Preposition or subordinating conjunction (`in`, `of`, `because`)
    In,
    /// Adjective (`large`)
    Jj,
    /// Comparative adjective (`larger`)
    Jjr,
    /// Superlative adjective (`largest`)
    Jjs,
    /// List item marker
    Ls,
    /// Modal (`can`, `should`)
    Md,
    /// Singular or mass noun (`moon`)
    Nn,
    /// Plural noun (`moons`)
    Nns,
    /// Singular proper noun (`Apollo`)
    Nnp,
    /// Plural proper noun (`Americas`)
    Nnps,
    /// Predeterminer (`all`, `both` before a determiner)
    Pdt,
    /// Possessive ending (`'s`)
    Pos,
    /// Personal pronoun (`he`, `they`)
    Prp,
    /// Possessive pronoun (`his`, `their`)
    PrpPoss,
    /// Adverb (`quickly`)
    Rb,
    /// Comparative adverb (`faster`)
    Rbr,
    /// Superlative adverb (`fastest`, `most`)
    Rbs,
    /// Particle (`up` in `give up`)
    Rp,
    /// Symbol
    Sym,
    /// The word `to`
    To,
    /// Interjection (`oh`)
    Uh,
    /// Verb, base form (`run`)
    Vb,
    /// Verb, past tense (`ran`)
    Vbd,
    /// Verb, gerund (`running`)
    Vbg,
    /// Verb, past participle (`eaten`)
    Vbn,
    /// Verb, non-3rd person singular present (`run`)
    Vbp,
    /// Verb, 3rd person singular present (`runs`)
    Vbz,
    /// Wh-determiner (`which`)
    Wdt,
    /// Wh-pronoun (`who`)
    Wp,
    /// Possessive wh-pronoun (`whose`)
    WpPoss,
    /// Wh-adverb (`where`, `when`)
    Wrb,
    /// Any punctuation token
    Punct,
}

impl PosTag {
    /// Any noun subtype (NN, NNS, NNP, NNPS).
    pub fn is_noun(&self) -> bool {
        matches!(self, PosTag::Nn | PosTag::Nns | PosTag::Nnp | PosTag::Nnps)
    }

    /// Any adjective subtype (JJ, JJR, JJS).
    pub fn is_adjective(&self) -> bool {
        matches!(self, PosTag::Jj | PosTag::Jjr | PosTag::Jjs)
    }

    /// Superlative adjective or superlative adverb (JJS, RBS).
    pub fn is_superlative(&self) -> bool {
        matches!(self, PosTag::Jjs | PosTag::Rbs)
    }

    /// Any personal-pronoun subtype (PRP, PRP$).
    pub fn is_personal_pronoun(&self) -> bool {
        matches!(self, PosTag::Prp | PosTag::PrpPoss)
    }

    /// Cardinal number (CD).
    pub fn is_cardinal(&self) -> bool {
        matches!(self, PosTag::Cd)
    }

    /// Determiner (DT).
    pub fn is_determiner(&self) -> bool {
        matches!(self, PosTag::Dt)
    }

    /// The Penn Treebank code for this tag.
    ///
    /// [`PosTag::Punct`] reports `"."` since the individual punctuation codes
    /// are not preserved.
    pub fn as_str(&self) -> &'static str {
        match self {
            PosTag::Cc => "CC",
            PosTag::Cd => "CD",
            PosTag::Dt => "DT",
            PosTag::Ex => "EX",
            PosTag::Fw => "FW",
            PosTag::In => "IN",
            PosTag::Jj => "JJ",
            PosTag::Jjr => "JJR",
            PosTag::Jjs => "JJS",
            PosTag::Ls => "LS",
            PosTag::Md => "MD",
            PosTag::Nn => "NN",
            PosTag::Nns => "NNS",
            PosTag::Nnp => "NNP",
            PosTag::Nnps => "NNPS",
            PosTag::Pdt => "PDT",
            PosTag::Pos => "POS",
            PosTag::Prp => "PRP",
            PosTag::PrpPoss => "PRP$",
            PosTag::Rb => "RB",
            PosTag::Rbr => "RBR",
            PosTag::Rbs => "RBS",
            PosTag::Rp => "RP",
            PosTag::Sym => "SYM",
            PosTag::To => "TO",
            PosTag::Uh => "UH",
            PosTag::Vb => "VB",
            PosTag::Vbd => "VBD",
            PosTag::Vbg => "VBG",
            PosTag::Vbn => "VBN",
            PosTag::Vbp => "VBP",
            PosTag::Vbz => "VBZ",
            PosTag::Wdt => "WDT",
            PosTag::Wp => "WP",
            PosTag::WpPoss => "WP$",
            PosTag::Wrb => "WRB",
            PosTag::Punct => ".",
        }
    }
}

impl fmt::Display for PosTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a recognized Penn Treebank tag code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePosTagError {
    /// The string that failed to parse
    pub code: String,
}

impl fmt::Display for ParsePosTagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown Penn Treebank tag code: {:?}", self.code)
    }
}

impl std::error::Error for ParsePosTagError {}

impl FromStr for PosTag {
    type Err = ParsePosTagError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let tag = match value {
            "CC" => PosTag::Cc,
            "CD" => PosTag::Cd,
            "DT" => PosTag::Dt,
            "EX" => PosTag::Ex,
            "FW" => PosTag::Fw,
            "IN" => PosTag::In,
            "JJ" => PosTag::Jj,
            "JJR" => PosTag::Jjr,
            "JJS" => PosTag::Jjs,
            "LS" => PosTag::Ls,
            "MD" => PosTag::Md,
            "NN" => PosTag::Nn,
            "NNS" => PosTag::Nns,
            "NNP" => PosTag::Nnp,
            "NNPS" => PosTag::Nnps,
            "PDT" => PosTag::Pdt,
            "POS" => PosTag::Pos,
            "PRP" => PosTag::Prp,
            "PRP$" => PosTag::PrpPoss,
            "RB" => PosTag::Rb,
            "RBR" => PosTag::Rbr,
            "RBS" => PosTag::Rbs,
            "RP" => PosTag::Rp,
            "SYM" => PosTag::Sym,
            "TO" => PosTag::To,
            "UH" => PosTag::Uh,
            "VB" => PosTag::Vb,
            "VBD" => PosTag::Vbd,
            "VBG" => PosTag::Vbg,
            "VBN" => PosTag::Vbn,
            "VBP" => PosTag::Vbp,
            "VBZ" => PosTag::Vbz,
            "WDT" => PosTag::Wdt,
            "WP" => PosTag::Wp,
            "WP$" => PosTag::WpPoss,
            "WRB" => PosTag::Wrb,
            // PTB writes punctuation tags as the literal symbols.
            "." | "," | ":" | "``" | "''" | "-LRB-" | "-RRB-" | "$" | "#" => PosTag::Punct,
            _ => {
                return Err(ParsePosTagError {
                    code: value.to_string(),
                })
            }
        };
        Ok(tag)
    }
}

// ============================================================================
// Token / Sentence
// ============================================================================

/// A single tagged word (or punctuation mark).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Surface form exactly as it appeared in the text
    pub text: String,
    /// Part-of-speech tag
    pub tag: PosTag,
}

impl Token {
    /// Create a new token.
    pub fn new(text: impl Into<String>, tag: PosTag) -> Self {
        Self {
            text: text.into(),
            tag,
        }
    }

    /// Lowercased surface form, used for case-insensitive frequency lookups.
    pub fn lower(&self) -> String {
        self.text.to_lowercase()
    }
}

/// One sentence of an article: its raw text, its position in the article, and
/// its tagged token stream.
///
/// Sentences are produced once by the analysis stage and treated as read-only
/// by both selectors.
#[derive(Debug, Clone, PartialEq)]
pub struct Sentence {
    /// Sentence text exactly as segmented from the body
    pub text: String,
    /// Zero-based position within the article (0 = first sentence)
    pub index: usize,
    /// Tagged tokens, in surface order
    pub tokens: Vec<Token>,
}

impl Sentence {
    /// Create a new sentence.
    pub fn new(text: impl Into<String>, index: usize, tokens: Vec<Token>) -> Self {
        Self {
            text: text.into(),
            index,
            tokens,
        }
    }

    /// True if the sentence starts the article.
    pub fn is_first(&self) -> bool {
        self.index == 0
    }
}

// ============================================================================
// Article / Question — wire types
// ============================================================================

/// An input article: a title and a body of prose.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Article title
    pub title: String,
    /// Full article body
    pub body: String,
}

impl Article {
    /// Create a new article.
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// A generated fill-in-the-blank question: a sentence and the keyword to
/// blank out of it.
///
/// Serializes as `{"sentence": ..., "keyword": ...}`, the shape quiz
/// front-ends consume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// The full, unmodified sentence
    pub sentence: String,
    /// The word to blank out; always appears verbatim in `sentence`
    pub keyword: String,
}

impl Question {
    /// Create a new question.
    pub fn new(sentence: impl Into<String>, keyword: impl Into<String>) -> Self {
        Self {
            sentence: sentence.into(),
            keyword: keyword.into(),
        }
    }

    /// The sentence with the first occurrence of the keyword replaced by one
    /// underscore per character, ready for display.
    pub fn blanked(&self) -> String {
        let blanks = "_".repeat(self.keyword.chars().count());
        self.sentence.replacen(&self.keyword, &blanks, 1)
    }

    /// Check a player's guess against the keyword, ignoring case and
    /// surrounding whitespace.
    pub fn check(&self, guess: &str) -> bool {
        guess.trim().to_lowercase() == self.keyword.trim().to_lowercase()
    }
}
