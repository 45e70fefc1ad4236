//! Tunable thresholds for text analysis and generation
//!
//! Every heuristic cutoff used by the analyzer and the two builders lives
//! here so the CLI (or an embedding application) can override them from a
//! TOML file. Missing fields fall back to the defaults the heuristics were
//! calibrated with.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Thresholds shared by the analyzer and both generators
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorConfig {
    /// Sentences whose trimmed length is at or below this are dropped
    /// as headers or fragments
    #[serde(default = "default_min_sentence_len")]
    pub min_sentence_len: usize,

    /// Paragraphs whose trimmed length is at or below this are dropped
    #[serde(default = "default_min_paragraph_len")]
    pub min_paragraph_len: usize,

    /// Maximum number of key concepts extracted per call
    #[serde(default = "default_max_concepts")]
    pub max_concepts: usize,

    /// Maximum number of frequent long words contributed to the concept set
    #[serde(default = "default_max_frequent_words")]
    pub max_frequent_words: usize,

    /// Maximum number of definitions extracted per call
    #[serde(default = "default_max_definitions")]
    pub max_definitions: usize,

    /// Definition terms at or above this length are rejected
    #[serde(default = "default_max_term_len")]
    pub max_term_len: usize,

    /// Definition bodies at or below this length are rejected
    #[serde(default = "default_min_definition_len")]
    pub min_definition_len: usize,

    /// Process-card answers are truncated to this many characters
    #[serde(default = "default_process_answer_len")]
    pub process_answer_len: usize,

    /// Quiz options built from sentences are truncated to this many characters
    #[serde(default = "default_quiz_option_len")]
    pub quiz_option_len: usize,

    /// Fallback quiz answers are truncated to this many characters
    #[serde(default = "default_simple_answer_len")]
    pub simple_answer_len: usize,
}

fn default_min_sentence_len() -> usize {
    20
}

fn default_min_paragraph_len() -> usize {
    50
}

fn default_max_concepts() -> usize {
    20
}

fn default_max_frequent_words() -> usize {
    10
}

fn default_max_definitions() -> usize {
    15
}

fn default_max_term_len() -> usize {
    50
}

fn default_min_definition_len() -> usize {
    10
}

fn default_process_answer_len() -> usize {
    200
}

fn default_quiz_option_len() -> usize {
    100
}

fn default_simple_answer_len() -> usize {
    80
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_sentence_len: default_min_sentence_len(),
            min_paragraph_len: default_min_paragraph_len(),
            max_concepts: default_max_concepts(),
            max_frequent_words: default_max_frequent_words(),
            max_definitions: default_max_definitions(),
            max_term_len: default_max_term_len(),
            min_definition_len: default_min_definition_len(),
            process_answer_len: default_process_answer_len(),
            quiz_option_len: default_quiz_option_len(),
            simple_answer_len: default_simple_answer_len(),
        }
    }
}

impl GeneratorConfig {
    /// Load thresholds from a TOML file; absent fields take their defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }
}
