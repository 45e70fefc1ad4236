//! Text analysis shared by the flashcard and quiz builders
//!
//! This module turns a raw extracted-text string into the intermediate
//! vocabulary both generators consume:
//! - sentences and paragraphs (length-filtered splits)
//! - key concepts (capitalized runs, quoted phrases, frequent long words)
//! - definitions (term/body pairs matched by connector patterns)

pub mod concepts;
pub mod definitions;
pub mod splitter;

pub use definitions::Definition;

use regex::Regex;

use crate::config::GeneratorConfig;
use definitions::DefinitionPattern;

/// Analyzer holding the compiled heuristic patterns and thresholds.
///
/// Construction compiles the definition strategy table, so it is fallible;
/// the generators treat a failure here as a signal to switch to their
/// simple fallback path.
pub struct TextAnalyzer {
    pub(crate) config: GeneratorConfig,
    pub(crate) capitalized_run: Regex,
    pub(crate) quoted: Regex,
    pub(crate) definition_patterns: Vec<DefinitionPattern>,
}

impl TextAnalyzer {
    pub fn new(config: GeneratorConfig) -> Result<Self, regex::Error> {
        Ok(Self {
            // One or more consecutive capitalized words, e.g. "United Nations"
            capitalized_run: Regex::new(r"\b[A-Z][a-z]+(?:\s+[A-Z][a-z]+)*\b")?,
            quoted: Regex::new(r#""([^"]*)""#)?,
            definition_patterns: definitions::build_patterns()?,
            config,
        })
    }

    /// Split on sentence terminators, keeping fragments longer than the
    /// configured minimum. Document order, not deduplicated.
    pub fn split_into_sentences(&self, text: &str) -> Vec<String> {
        splitter::split_into_sentences(text, self.config.min_sentence_len)
    }

    /// Split on blank-line boundaries, keeping fragments longer than the
    /// configured minimum.
    pub fn split_into_paragraphs(&self, text: &str) -> Vec<String> {
        splitter::split_into_paragraphs(text, self.config.min_paragraph_len)
    }
}

/// Truncate to `max` characters, appending "..." when content was cut.
/// Counts characters rather than bytes so multi-byte text never splits
/// inside a code point.
pub(crate) fn truncate_chars(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let cut: String = s.chars().take(max).collect();
        format!("{}...", cut)
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_string_unchanged() {
        assert_eq!(truncate_chars("hello", 10), "hello");
        assert_eq!(truncate_chars("hello", 5), "hello");
    }

    #[test]
    fn test_truncate_long_string() {
        assert_eq!(truncate_chars("hello world", 5), "hello...");
    }

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        // Each 'é' is two bytes; truncation must not split a code point
        assert_eq!(truncate_chars("ééééé", 3), "ééé...");
    }
}
