//! Sentence boundary detection
//!
//! Rule-based splitting with an embedded abbreviation list. No trained punkt
//! model; the rules cover encyclopedic prose well.

use super::lexicon::ABBREVIATIONS;
use rustc_hash::FxHashSet;

/// Sentence segmentation stage boundary.
///
/// # Contract
///
/// - **Input**: a whole article body (leading/trailing whitespace allowed).
/// - **Output**: sentences in document order, each trimmed, none empty.
/// - **Pure**: same input, same output; implementations must be re-entrant.
pub trait SentenceSplitter {
    /// Split `text` into an ordered sequence of sentence strings.
    fn split(&self, text: &str) -> Vec<String>;
}

/// Built-in rule-based sentence splitter.
///
/// A boundary is a run of `.`/`!`/`?`, plus any closing quotes or brackets,
/// followed by whitespace and then an uppercase letter, digit, or opening
/// quote. A period is not a boundary after a known abbreviation (`Mr.`,
/// `etc.`) or after a single-letter segment (`W.` in a name, each letter of
/// `U.S.`), and never splits inside a decimal number.
#[derive(Debug, Clone)]
pub struct RuleSplitter {
    /// Abbreviations that suppress a following period, lowercase, no period
    abbreviations: FxHashSet<String>,
}

impl Default for RuleSplitter {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleSplitter {
    /// Create a splitter with the embedded abbreviation list.
    pub fn new() -> Self {
        let abbreviations = ABBREVIATIONS.iter().map(|a| a.to_string()).collect();
        Self { abbreviations }
    }

    /// Register an additional abbreviation (with or without its period).
    pub fn with_abbreviation(mut self, abbreviation: &str) -> Self {
        self.abbreviations
            .insert(abbreviation.trim_end_matches('.').to_lowercase());
        self
    }

    /// True if the period at `dot` follows an abbreviation or initial.
    fn is_abbreviation_before(&self, chars: &[char], dot: usize) -> bool {
        let mut k = dot;
        while k > 0 && (chars[k - 1].is_alphabetic() || chars[k - 1] == '.') {
            k -= 1;
        }
        if k == dot {
            // Digits or punctuation before the period.
            return false;
        }
        let word: String = chars[k..dot].iter().collect();
        let last = word.rsplit('.').next().unwrap_or("");
        if last.chars().count() == 1 {
            return true;
        }
        self.abbreviations.contains(&last.to_lowercase())
    }

    /// True if what follows position `j` looks like the start of a sentence.
    fn starts_new_sentence(chars: &[char], j: usize) -> bool {
        let mut k = j;
        if k < chars.len() && !chars[k].is_whitespace() {
            return false;
        }
        while k < chars.len() && chars[k].is_whitespace() {
            k += 1;
        }
        match chars.get(k) {
            Some(&c) => c.is_uppercase() || c.is_ascii_digit() || is_opening(c),
            None => true,
        }
    }
}

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

fn is_closing(c: char) -> bool {
    matches!(c, '"' | '\'' | '\u{201D}' | '\u{2019}' | ')' | ']')
}

fn is_opening(c: char) -> bool {
    matches!(c, '"' | '\'' | '\u{201C}' | '\u{2018}' | '(' | '[')
}

impl SentenceSplitter for RuleSplitter {
    fn split(&self, text: &str) -> Vec<String> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Vec::new();
        }

        let chars: Vec<char> = trimmed.chars().collect();
        let n = chars.len();
        let mut sentences = Vec::new();
        let mut start = 0;
        let mut i = 0;

        while i < n {
            if !is_terminator(chars[i]) {
                i += 1;
                continue;
            }
            if chars[i] == '.' && self.is_abbreviation_before(&chars, i) {
                i += 1;
                continue;
            }

            let mut j = i;
            while j < n && is_terminator(chars[j]) {
                j += 1;
            }
            while j < n && is_closing(chars[j]) {
                j += 1;
            }

            if j >= n || Self::starts_new_sentence(&chars, j) {
                let sentence: String = chars[start..j].iter().collect();
                let sentence = sentence.trim();
                if !sentence.is_empty() {
                    sentences.push(sentence.to_string());
                }
                start = j;
            }
            i = j;
        }

        if start < n {
            let rest: String = chars[start..n].iter().collect();
            let rest = rest.trim();
            if !rest.is_empty() {
                sentences.push(rest.to_string());
            }
        }

        sentences
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(text: &str) -> Vec<String> {
        RuleSplitter::new().split(text)
    }

    #[test]
    fn test_basic_split() {
        assert_eq!(
            split("The moon is far. It orbits the Earth."),
            vec!["The moon is far.", "It orbits the Earth."]
        );
    }

    #[test]
    fn test_terminator_variety() {
        assert_eq!(
            split("Really? Yes! It happened."),
            vec!["Really?", "Yes!", "It happened."]
        );
    }

    #[test]
    fn test_abbreviations_do_not_split() {
        assert_eq!(
            split("Dr. Smith arrived. He was late."),
            vec!["Dr. Smith arrived.", "He was late."]
        );
        assert_eq!(
            split("Cats, dogs, etc. are common pets."),
            vec!["Cats, dogs, etc. are common pets."]
        );
    }

    #[test]
    fn test_initials_do_not_split() {
        assert_eq!(
            split("George W. Bush became president in 2001. He served two terms."),
            vec![
                "George W. Bush became president in 2001.",
                "He served two terms."
            ]
        );
        assert_eq!(
            split("The U.S. economy grew. Exports rose."),
            vec!["The U.S. economy grew.", "Exports rose."]
        );
    }

    #[test]
    fn test_decimals_do_not_split() {
        assert_eq!(
            split("The value of pi is 3.14. It is irrational."),
            vec!["The value of pi is 3.14.", "It is irrational."]
        );
    }

    #[test]
    fn test_lowercase_continuation_does_not_split() {
        assert_eq!(
            split("Really?! oh well."),
            vec!["Really?! oh well."]
        );
    }

    #[test]
    fn test_closing_quote_belongs_to_sentence() {
        assert_eq!(
            split("He said \"Stop.\" Then he left."),
            vec!["He said \"Stop.\"", "Then he left."]
        );
    }

    #[test]
    fn test_unterminated_tail_is_kept() {
        assert_eq!(split("One sentence. And a fragment"), vec![
            "One sentence.",
            "And a fragment"
        ]);
    }

    #[test]
    fn test_input_is_trimmed() {
        assert_eq!(split("  \n Surrounded by space. \t "), vec![
            "Surrounded by space."
        ]);
        assert!(split("").is_empty());
        assert!(split("   ").is_empty());
    }

    #[test]
    fn test_custom_abbreviation() {
        let text = "Compare resp. Figure 2.";
        assert_eq!(split(text).len(), 2);

        let splitter = RuleSplitter::new().with_abbreviation("resp.");
        assert_eq!(splitter.split(text), vec!["Compare resp. Figure 2."]);
    }
}
