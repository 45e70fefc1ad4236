//! Definition extraction via connector patterns
//!
//! Definitions are sentences of the shape "X is Y", "X refers to Y",
//! "X means Y", or "X can be defined as Y". The connectors form an ordered
//! strategy table; matches are collected template by template so adding or
//! reordering a pattern never disturbs the others.

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::TextAnalyzer;

/// Connector phrases tried in order when extracting definitions
const CONNECTORS: [&str; 4] = ["is", "refers to", "means", "can be defined as"];

/// A term together with the definition text matched after its connector
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    pub term: String,
    pub definition: String,
}

/// One entry of the definition strategy table
pub(crate) struct DefinitionPattern {
    pub(crate) connector: &'static str,
    pub(crate) regex: Regex,
}

/// Compile the connector table. The patterns are assembled at runtime, so
/// compilation is fallible and the error is surfaced to the caller rather
/// than panicking mid-generation.
pub(crate) fn build_patterns() -> Result<Vec<DefinitionPattern>, regex::Error> {
    CONNECTORS
        .into_iter()
        .map(|connector| {
            // Term before the connector, definition up to the next
            // sentence terminator
            let regex = Regex::new(&format!(r"(?i)([A-Za-z\s]+)\s+{}\s+([^.!?]+)", connector))?;
            Ok(DefinitionPattern { connector, regex })
        })
        .collect()
}

impl TextAnalyzer {
    /// Extract up to `max_definitions` term/definition pairs, in first-found
    /// order across the connector table.
    pub fn extract_definitions(&self, text: &str) -> Vec<Definition> {
        let mut definitions = Vec::new();

        for pattern in &self.definition_patterns {
            let before = definitions.len();
            for caps in pattern.regex.captures_iter(text) {
                let term = caps[1].trim();
                let definition = caps[2].trim();

                if term.chars().count() < self.config.max_term_len
                    && definition.chars().count() > self.config.min_definition_len
                {
                    definitions.push(Definition {
                        term: term.to_string(),
                        definition: definition.to_string(),
                    });
                }
            }
            log::debug!(
                "Connector '{}' matched {} definitions",
                pattern.connector,
                definitions.len() - before
            );
        }

        definitions.truncate(self.config.max_definitions);
        definitions
    }
}
