//! Key concept extraction
//!
//! A "concept" is a candidate key term found by one of three heuristics:
//! runs of capitalized words, phrases inside double quotes, and long words
//! that recur throughout the text. The union is deduplicated in first-seen
//! order so extraction is deterministic for a given input.

use std::collections::{HashMap, HashSet};

use super::TextAnalyzer;

impl TextAnalyzer {
    /// Extract up to `max_concepts` candidate key terms from the text.
    pub fn extract_key_concepts(&self, text: &str) -> Vec<String> {
        let mut concepts: Vec<String> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();

        let mut push_unique = |candidate: &str, concepts: &mut Vec<String>| {
            if seen.insert(candidate.to_string()) {
                concepts.push(candidate.to_string());
            }
        };

        // Capitalized runs (potential proper nouns and named concepts)
        for found in self.capitalized_run.find_iter(text) {
            push_unique(found.as_str(), &mut concepts);
        }

        // Quoted phrases
        for caps in self.quoted.captures_iter(text) {
            push_unique(&caps[1], &mut concepts);
        }

        // Long words that recur throughout the text
        for word in frequent_long_words(text, self.config.max_frequent_words) {
            push_unique(&word, &mut concepts);
        }

        concepts.truncate(self.config.max_concepts);

        log::debug!("Extracted {} key concepts", concepts.len());
        concepts
    }
}

/// Alphabetic words longer than 6 characters occurring more than twice in
/// the lowercased text, in first-seen order, capped at `max`.
fn frequent_long_words(text: &str, max: usize) -> Vec<String> {
    let lowered = text.to_lowercase();
    let words: Vec<&str> = lowered.split_whitespace().collect();

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for &word in &words {
        if word.chars().count() > 4 && word.chars().all(char::is_alphabetic) {
            *counts.entry(word).or_default() += 1;
        }
    }

    let mut seen: HashSet<&str> = HashSet::new();
    let mut frequent = Vec::new();
    for &word in &words {
        if word.chars().count() > 6
            && counts.get(word).copied().unwrap_or(0) > 2
            && seen.insert(word)
        {
            frequent.push(word.to_string());
            if frequent.len() == max {
                break;
            }
        }
    }

    frequent
}
