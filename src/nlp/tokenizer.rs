//! Word tokenization
//!
//! Splits raw text into word and punctuation tokens. The built-in
//! [`WordTokenizer`] is Unicode-aware and needs no external resources.

/// Word tokenization stage boundary.
///
/// # Contract
///
/// - **Input**: arbitrary text (one sentence, a title, or a whole body).
/// - **Output**: tokens in surface order. Punctuation marks are emitted as
///   their own tokens; downstream frequency lookups simply never query them.
/// - **Pure**: same input, same output; implementations must be re-entrant
///   (`&self`, no interior mutability) so sentences can be tokenized in
///   parallel.
pub trait Tokenizer {
    /// Split `text` into an ordered sequence of tokens.
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// Built-in Unicode-aware word tokenizer.
///
/// Rules, in order of precedence:
/// - Single-letter abbreviation chains keep their periods as one token
///   (`U.S.`, `e.g.`, the initial in `George W. Bush`).
/// - Alphanumeric runs form words. An apostrophe (straight or curly) or a
///   hyphen between two alphanumeric characters glues the run together, so
///   contractions and possessives stay whole (`don't`, `Bush's`,
///   `well-known`). This follows Unicode word-boundary behavior rather than
///   Treebank clitic splitting.
/// - A period or comma between two digits stays inside a number token
///   (`3.14`, `1,234`).
/// - Any other non-whitespace symbol is its own token; identical consecutive
///   symbols collapse into one token (`...`, `--`).
#[derive(Debug, Clone, Copy, Default)]
pub struct WordTokenizer;

impl WordTokenizer {
    /// Create a new tokenizer.
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        let chars: Vec<char> = text.chars().collect();
        let n = chars.len();
        let mut tokens = Vec::new();
        let mut i = 0;

        while i < n {
            let c = chars[i];

            if c.is_whitespace() {
                i += 1;
                continue;
            }

            // Abbreviation chain: one or more single letters each followed
            // by a period.
            if c.is_alphabetic() && i + 1 < n && chars[i + 1] == '.' {
                let mut j = i;
                while j + 1 < n && chars[j].is_alphabetic() && chars[j + 1] == '.' {
                    j += 2;
                    // The chain only continues through single letters.
                    if !(j + 1 < n && chars[j].is_alphabetic() && chars[j + 1] == '.') {
                        break;
                    }
                }
                tokens.push(chars[i..j].iter().collect());
                i = j;
                continue;
            }

            if c.is_alphanumeric() {
                let mut j = i;
                while j < n {
                    if chars[j].is_alphanumeric() {
                        j += 1;
                        continue;
                    }
                    let glue = match chars[j] {
                        '\'' | '\u{2019}' | '-' => {
                            j + 1 < n
                                && chars[j - 1].is_alphanumeric()
                                && chars[j + 1].is_alphanumeric()
                        }
                        '.' | ',' => {
                            j + 1 < n
                                && chars[j - 1].is_ascii_digit()
                                && chars[j + 1].is_ascii_digit()
                        }
                        _ => false,
                    };
                    if !glue {
                        break;
                    }
                    j += 1;
                }
                tokens.push(chars[i..j].iter().collect());
                i = j;
                continue;
            }

            // Symbol: collapse a run of the identical character.
            let mut j = i;
            while j < n && chars[j] == c {
                j += 1;
            }
            tokens.push(chars[i..j].iter().collect());
            i = j;
        }

        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<String> {
        WordTokenizer::new().tokenize(text)
    }

    #[test]
    fn test_basic_sentence() {
        assert_eq!(
            words("The quick brown fox jumps."),
            vec!["The", "quick", "brown", "fox", "jumps", "."]
        );
    }

    #[test]
    fn test_punctuation_is_separated() {
        assert_eq!(
            words("In 1969, the Eagle landed."),
            vec!["In", "1969", ",", "the", "Eagle", "landed", "."]
        );
    }

    #[test]
    fn test_contractions_and_possessives_stay_whole() {
        assert_eq!(words("don't stop"), vec!["don't", "stop"]);
        assert_eq!(words("Bush's plan"), vec!["Bush's", "plan"]);
        // Curly apostrophe, as produced by word processors.
        assert_eq!(words("it\u{2019}s fine"), vec!["it\u{2019}s", "fine"]);
    }

    #[test]
    fn test_hyphenated_compounds_stay_whole() {
        assert_eq!(words("a well-known fact"), vec!["a", "well-known", "fact"]);
        // A dangling hyphen is its own token.
        assert_eq!(words("pre- and post-war"), vec!["pre", "-", "and", "post-war"]);
    }

    #[test]
    fn test_abbreviation_chains_keep_periods() {
        assert_eq!(words("the U.S. economy"), vec!["the", "U.S.", "economy"]);
        assert_eq!(words("George W. Bush"), vec!["George", "W.", "Bush"]);
    }

    #[test]
    fn test_numbers_keep_internal_marks() {
        assert_eq!(words("pi is 3.14"), vec!["pi", "is", "3.14"]);
        assert_eq!(words("1,234 people"), vec!["1,234", "people"]);
        // A trailing period is sentence punctuation, not part of the number.
        assert_eq!(words("by 1969."), vec!["by", "1969", "."]);
    }

    #[test]
    fn test_symbol_runs_collapse() {
        assert_eq!(words("wait... what"), vec!["wait", "...", "what"]);
        assert_eq!(words("yes -- no"), vec!["yes", "--", "no"]);
        assert_eq!(words("really?!"), vec!["really", "?", "!"]);
    }

    #[test]
    fn test_unicode_words() {
        assert_eq!(words("naïve café patrons"), vec!["naïve", "café", "patrons"]);
    }

    #[test]
    fn test_empty_and_whitespace_input() {
        assert!(words("").is_empty());
        assert!(words("   \n\t ").is_empty());
    }
}
