//! Sentence and paragraph splitting

use regex::Regex;

/// Split on runs of sentence terminators, keeping trimmed fragments longer
/// than `min_len` characters. Short fragments are headers, list markers, or
/// abbreviations and carry too little content to build study material from.
pub(crate) fn split_into_sentences(text: &str, min_len: usize) -> Vec<String> {
    let breaks = Regex::new(r"[.!?]+").unwrap();
    breaks
        .split(text)
        .map(str::trim)
        .filter(|s| s.chars().count() > min_len)
        .map(str::to_string)
        .collect()
}

/// Split on blank-line boundaries, keeping trimmed fragments longer than
/// `min_len` characters.
pub(crate) fn split_into_paragraphs(text: &str, min_len: usize) -> Vec<String> {
    text.split("\n\n")
        .map(str::trim)
        .filter(|p| p.chars().count() > min_len)
        .map(str::to_string)
        .collect()
}
